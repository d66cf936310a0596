use crate::errors::ConfigError;
use std::{env, path::PathBuf, str::FromStr, time::Duration};
use tracing::info;

pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:5000";
pub const DEFAULT_MESSAGE_MS: u64 = 3000;
pub const DEFAULT_CATALOG_PATH: &str = "data/all_books.json";

/// JSON layout the cart service uses for cart snapshots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SnapshotShape {
    #[default]
    List,
    Keyed,
}

impl FromStr for SnapshotShape {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim() {
            "list" => Ok(Self::List),
            "keyed" => Ok(Self::Keyed),
            other => Err(format!("expected 'list' or 'keyed', got '{other}'")),
        }
    }
}

/// How the cart service acknowledges `POST /api/cart/add`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AddAck {
    #[default]
    Summary,
    Refresh,
}

impl FromStr for AddAck {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim() {
            "summary" => Ok(Self::Summary),
            "refresh" => Ok(Self::Refresh),
            other => Err(format!("expected 'summary' or 'refresh', got '{other}'")),
        }
    }
}

#[derive(Debug, Clone)]
pub struct WidgetConfig {
    pub api_base: String,
    pub snapshot_shape: SnapshotShape,
    pub add_ack: AddAck,
    pub message_duration: Duration,
    pub request_timeout: Option<Duration>,
    pub catalog_path: PathBuf,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            snapshot_shape: SnapshotShape::default(),
            add_ack: AddAck::default(),
            message_duration: Duration::from_millis(DEFAULT_MESSAGE_MS),
            request_timeout: None,
            catalog_path: PathBuf::from(DEFAULT_CATALOG_PATH),
        }
    }
}

impl WidgetConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let api_base = lookup("CART_API_BASE")
            .map(|base| base.trim_end_matches('/').to_string())
            .unwrap_or_else(|| {
                info!("CART_API_BASE not set, using default: {DEFAULT_API_BASE}");
                DEFAULT_API_BASE.to_string()
            });
        if api_base.is_empty() {
            return Err(ConfigError::invalid("CART_API_BASE", "must not be empty"));
        }

        let request_timeout = match lookup("CART_REQUEST_TIMEOUT_MS") {
            Some(raw) => Some(Duration::from_millis(parse("CART_REQUEST_TIMEOUT_MS", &raw)?)),
            None => None,
        };

        Ok(Self {
            api_base,
            snapshot_shape: try_load(&lookup, "CART_SNAPSHOT_SHAPE", "list")?,
            add_ack: try_load(&lookup, "CART_ADD_ACK", "summary")?,
            message_duration: Duration::from_millis(try_load(
                &lookup,
                "CART_MESSAGE_MS",
                "3000",
            )?),
            request_timeout,
            catalog_path: try_load(&lookup, "CART_CATALOG_PATH", DEFAULT_CATALOG_PATH)?,
        })
    }
}

fn try_load<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    default: &str,
) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let raw = lookup(key).unwrap_or_else(|| {
        info!("{key} not set, using default: {default}");
        default.to_string()
    });
    parse(key, &raw)
}

fn parse<T>(key: &'static str, raw: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    raw.trim()
        .parse()
        .map_err(|err: T::Err| ConfigError::invalid(key, err.to_string()))
}
