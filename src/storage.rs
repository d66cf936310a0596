use crate::models::Product;
use std::path::Path;
use tokio::fs;
use tracing::error;

pub async fn load_catalog(path: &Path) -> Vec<Product> {
    match fs::read(path).await {
        Ok(bytes) => match serde_json::from_slice(&bytes) {
            Ok(products) => products,
            Err(err) => {
                error!("failed to parse catalog file {}: {err}", path.display());
                Vec::new()
            }
        },
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Vec::new(),
        Err(err) => {
            error!("failed to read catalog file {}: {err}", path.display());
            Vec::new()
        }
    }
}
