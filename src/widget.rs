use crate::client::CartClient;
use crate::config::WidgetConfig;
use crate::errors::CartError;
use crate::models::{AddAcknowledgement, CartSnapshot};
use crate::page::{ElementId, Page, SharedPage, ADD_TO_CART_CLASS};
use crate::toast::Toast;
use tracing::{error, info, warn};

pub const ADDED_MESSAGE: &str = "Added to cart!";
pub const ADD_FAILED_MESSAGE: &str = "Failed to add item to cart";
pub const REMOVED_MESSAGE: &str = "Removed from cart";
pub const REMOVE_FAILED_MESSAGE: &str = "Failed to remove item from cart";
pub const CLEARED_MESSAGE: &str = "Cart cleared";
pub const CLEAR_FAILED_MESSAGE: &str = "Failed to clear cart";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    Added,
    Failed,
    /// The item's button was already disabled by an outstanding request.
    Suppressed,
    /// The clicked element is not an enabled add-to-cart button.
    Ignored,
}

#[derive(Clone)]
pub struct CartWidget {
    client: CartClient,
    page: SharedPage,
    toast: Toast,
}

impl CartWidget {
    pub fn new(config: &WidgetConfig, page: Page) -> Result<Self, CartError> {
        let page = SharedPage::new(page);
        Ok(Self {
            client: CartClient::new(config)?,
            toast: Toast::new(page.clone(), config.message_duration),
            page,
        })
    }

    pub fn page(&self) -> &SharedPage {
        &self.page
    }

    pub async fn page_load(&self) -> Option<u64> {
        info!(api = self.client.base_url(), "loading cart widget");
        self.refresh_cart_count().await
    }

    /// Fetches the cart and renders its total quantity. On failure the
    /// displayed count is left as it was.
    pub async fn refresh_cart_count(&self) -> Option<u64> {
        match self.client.fetch_cart().await {
            Ok(snapshot) => Some(self.render_snapshot(&snapshot)),
            Err(err) => {
                error!("error updating cart count: {err}");
                None
            }
        }
    }

    pub async fn add_item_to_cart(&self, upc: &str, quantity: u32) -> AddOutcome {
        let button = self.page.with(|page| page.find_add_button(upc));
        let _lock = match button {
            Some(button) => match self.page.lock_button(button) {
                Some(lock) => Some(lock),
                None => {
                    warn!(upc, "add to cart already in flight");
                    return AddOutcome::Suppressed;
                }
            },
            None => None,
        };

        match self.client.add_item(upc, quantity).await {
            Ok(AddAcknowledgement::Summary {
                cart_count,
                message,
            }) => {
                self.render_count(cart_count);
                self.show_transient_message(if message.is_empty() {
                    ADDED_MESSAGE
                } else {
                    message.as_str()
                });
                info!(upc, quantity, cart_count, "item added to cart");
                AddOutcome::Added
            }
            Ok(AddAcknowledgement::Accepted) => {
                self.refresh_cart_count().await;
                self.show_transient_message(ADDED_MESSAGE);
                info!(upc, quantity, "item added to cart");
                AddOutcome::Added
            }
            Err(err) => {
                error!(upc, "error adding to cart: {err}");
                self.show_transient_message(ADD_FAILED_MESSAGE);
                AddOutcome::Failed
            }
        }
    }

    pub async fn click(&self, target: ElementId) -> AddOutcome {
        let upc = self.page.with(|page| {
            page.element(target)
                .filter(|element| element.has_class(ADD_TO_CART_CLASS))
                .map(|element| (element.disabled, element.data.get("upc").cloned()))
        });

        match upc {
            Some((false, Some(upc))) => self.add_item_to_cart(&upc, 1).await,
            Some((true, _)) => AddOutcome::Suppressed,
            _ => AddOutcome::Ignored,
        }
    }

    pub async fn remove_item_from_cart(&self, upc: &str) -> Option<u64> {
        match self.client.remove_item(upc).await {
            Ok(snapshot) => {
                let total = self.render_snapshot(&snapshot);
                self.show_transient_message(REMOVED_MESSAGE);
                Some(total)
            }
            Err(err) => {
                error!(upc, "error removing from cart: {err}");
                self.show_transient_message(REMOVE_FAILED_MESSAGE);
                None
            }
        }
    }

    pub async fn clear_cart(&self) -> Option<u64> {
        match self.client.clear().await {
            Ok(snapshot) => {
                let total = self.render_snapshot(&snapshot);
                self.show_transient_message(CLEARED_MESSAGE);
                Some(total)
            }
            Err(err) => {
                error!("error clearing cart: {err}");
                self.show_transient_message(CLEAR_FAILED_MESSAGE);
                None
            }
        }
    }

    pub fn show_transient_message(&self, text: &str) {
        self.toast.show(text);
    }

    fn render_snapshot(&self, snapshot: &CartSnapshot) -> u64 {
        let total = snapshot.total_quantity();
        self.render_count(total);
        total
    }

    fn render_count(&self, total: u64) {
        let text = total.to_string();
        self.page.with(|page| page.set_cart_count(&text));
    }
}
