pub mod client;
pub mod config;
pub mod errors;
pub mod models;
pub mod page;
pub mod storage;
pub mod toast;
pub mod ui;
pub mod widget;

pub use client::CartClient;
pub use config::{AddAck, SnapshotShape, WidgetConfig};
pub use errors::{CartError, CartErrorKind, ConfigError};
pub use page::{Page, SharedPage};
pub use storage::load_catalog;
pub use widget::{AddOutcome, CartWidget};
