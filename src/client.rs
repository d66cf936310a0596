use crate::config::{AddAck, SnapshotShape, WidgetConfig};
use crate::errors::CartError;
use crate::models::{
    AddAcknowledgement, AddToCartRequest, AddToCartSummary, CartSnapshot, RemoveFromCartRequest,
};
use reqwest::{Client, RequestBuilder, Response};
use tracing::debug;

#[derive(Clone)]
pub struct CartClient {
    http: Client,
    base_url: String,
    shape: SnapshotShape,
    add_ack: AddAck,
}

impl CartClient {
    pub fn new(config: &WidgetConfig) -> Result<Self, CartError> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().map_err(CartError::network)?;

        Ok(Self {
            http,
            base_url: config.api_base.clone(),
            shape: config.snapshot_shape,
            add_ack: config.add_ack,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn fetch_cart(&self) -> Result<CartSnapshot, CartError> {
        let response = send(self.http.get(self.url("/api/cart"))).await?;
        self.read_snapshot(response).await
    }

    pub async fn add_item(&self, upc: &str, quantity: u32) -> Result<AddAcknowledgement, CartError> {
        let request = self
            .http
            .post(self.url("/api/cart/add"))
            .json(&AddToCartRequest { upc, quantity });
        let response = send(request).await?;

        match self.add_ack {
            AddAck::Summary => {
                let summary: AddToCartSummary = response.json().await?;
                if !summary.success {
                    return Err(CartError::rejected(if summary.message.is_empty() {
                        format!("cart service refused item {upc}")
                    } else {
                        summary.message
                    }));
                }
                Ok(AddAcknowledgement::Summary {
                    cart_count: summary.cart_count,
                    message: summary.message,
                })
            }
            AddAck::Refresh => Ok(AddAcknowledgement::Accepted),
        }
    }

    pub async fn remove_item(&self, upc: &str) -> Result<CartSnapshot, CartError> {
        let request = self
            .http
            .post(self.url("/api/cart/remove"))
            .json(&RemoveFromCartRequest { upc });
        let response = send(request).await?;
        self.read_snapshot(response).await
    }

    pub async fn clear(&self) -> Result<CartSnapshot, CartError> {
        let request = self
            .http
            .post(self.url("/api/cart/clear"))
            .json(&serde_json::json!({}));
        let response = send(request).await?;
        self.read_snapshot(response).await
    }

    async fn read_snapshot(&self, response: Response) -> Result<CartSnapshot, CartError> {
        let body = response.bytes().await?;
        Ok(CartSnapshot::decode(self.shape, &body)?)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

async fn send(request: RequestBuilder) -> Result<Response, CartError> {
    let response = request.send().await.map_err(CartError::network)?;
    let status = response.status();
    debug!(%status, url = %response.url(), "cart service responded");
    if !status.is_success() {
        return Err(CartError::status(status.as_u16()));
    }
    Ok(response)
}
