use crate::config::SnapshotShape;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    pub upc: String,
    pub quantity: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CartLine {
    pub quantity: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CartSnapshot {
    pub items: Vec<CartItem>,
}

impl CartSnapshot {
    pub fn decode(shape: SnapshotShape, body: &[u8]) -> Result<Self, serde_json::Error> {
        let items = match shape {
            SnapshotShape::List => serde_json::from_slice::<Vec<CartItem>>(body)?,
            SnapshotShape::Keyed => serde_json::from_slice::<BTreeMap<String, CartLine>>(body)?
                .into_iter()
                .map(|(upc, line)| CartItem {
                    upc,
                    quantity: line.quantity,
                })
                .collect(),
        };
        Ok(Self { items })
    }

    pub fn total_quantity(&self) -> u64 {
        self.items
            .iter()
            .fold(0u64, |total, item| total.saturating_add(u64::from(item.quantity)))
    }
}

#[derive(Debug, Serialize)]
pub struct AddToCartRequest<'a> {
    pub upc: &'a str,
    pub quantity: u32,
}

#[derive(Debug, Serialize)]
pub struct RemoveFromCartRequest<'a> {
    pub upc: &'a str,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddToCartSummary {
    pub success: bool,
    pub cart_count: u64,
    #[serde(default)]
    pub message: String,
}

/// What an add-to-cart call reported back, per the configured acknowledgement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddAcknowledgement {
    Summary { cart_count: u64, message: String },
    Accepted,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub upc: String,
    pub title: String,
    #[serde(default)]
    pub price: Option<String>,
}
