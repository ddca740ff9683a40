use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VariationError {
    #[error("Variation format not recognized: {0}")]
    Format(String),

    #[error("Can't reach variation service at {url}: {reason}")]
    RemoteUnavailable { url: String, reason: String },

    #[error("Variation service returned status {status} for {url}")]
    RemoteStatus { url: String, status: u16 },

    #[error("Variation service response has no data: {url}")]
    MissingData { url: String },

    #[error("Can't decode variation service response from {url}: {reason}")]
    Decode { url: String, reason: String },
}

impl VariationError {
    /// True when the input itself was rejected, as opposed to the service.
    pub fn is_format(&self) -> bool {
        matches!(self, VariationError::Format(_))
    }

    /// True for every failure talking to the remote service.
    pub fn is_remote(&self) -> bool {
        !self.is_format()
    }
}

pub type Result<T> = std::result::Result<T, VariationError>;
