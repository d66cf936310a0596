use crate::page::{ElementId, SharedPage, VISIBLE_CLASS};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::sleep;

/// Transient message shown in the page's singleton message element.
///
/// Every `show` bumps a generation under the page lock; a hide only applies
/// while its generation is still current, so the newest text stays up for
/// the full duration.
#[derive(Clone)]
pub struct Toast {
    page: SharedPage,
    visible_for: Duration,
    generation: Arc<AtomicU64>,
    pending_hide: Arc<Mutex<Option<JoinHandle<()>>>>,
}

impl Toast {
    pub fn new(page: SharedPage, visible_for: Duration) -> Self {
        Self {
            page,
            visible_for,
            generation: Arc::new(AtomicU64::new(0)),
            pending_hide: Arc::new(Mutex::new(None)),
        }
    }

    /// Must be called from within a tokio runtime.
    pub fn show(&self, text: &str) {
        let mut pending = self
            .pending_hide
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        if let Some(previous) = pending.take() {
            previous.abort();
        }

        let (element, generation) = self.page.with(|page| {
            let element = page.ensure_message_element();
            page.set_text(element, text);
            page.add_class(element, VISIBLE_CLASS);
            (element, self.generation.fetch_add(1, Ordering::SeqCst) + 1)
        });

        let toast = self.clone();
        *pending = Some(tokio::spawn(async move {
            sleep(toast.visible_for).await;
            toast.hide(element, generation);
        }));
    }

    fn hide(&self, element: ElementId, generation: u64) {
        self.page.with(|page| {
            if self.generation.load(Ordering::SeqCst) == generation {
                page.remove_class(element, VISIBLE_CLASS);
            }
        });
    }
}
