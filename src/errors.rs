use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartErrorKind {
    Network,
    Status(u16),
    Decode,
    Rejected,
}

#[derive(Debug)]
pub struct CartError {
    pub kind: CartErrorKind,
    pub message: String,
}

impl CartError {
    pub fn network(err: impl std::error::Error) -> Self {
        Self {
            kind: CartErrorKind::Network,
            message: err.to_string(),
        }
    }

    pub fn status(code: u16) -> Self {
        Self {
            kind: CartErrorKind::Status(code),
            message: format!("cart service responded with status {code}"),
        }
    }

    pub fn decode(err: impl std::error::Error) -> Self {
        Self {
            kind: CartErrorKind::Decode,
            message: err.to_string(),
        }
    }

    pub fn rejected(message: impl Into<String>) -> Self {
        Self {
            kind: CartErrorKind::Rejected,
            message: message.into(),
        }
    }
}

impl fmt::Display for CartError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for CartError {}

impl From<reqwest::Error> for CartError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::decode(err)
        } else if let Some(status) = err.status() {
            Self::status(status.as_u16())
        } else {
            Self::network(err)
        }
    }
}

impl From<serde_json::Error> for CartError {
    fn from(err: serde_json::Error) -> Self {
        Self::decode(err)
    }
}

#[derive(Debug)]
pub struct ConfigError {
    pub key: &'static str,
    pub message: String,
}

impl ConfigError {
    pub fn invalid(key: &'static str, message: impl Into<String>) -> Self {
        Self {
            key,
            message: message.into(),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid {}: {}", self.key, self.message)
    }
}

impl std::error::Error for ConfigError {}
