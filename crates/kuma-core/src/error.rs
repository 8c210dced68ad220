use thiserror::Error;

/// Result type alias for Uptime Kuma model operations
pub type Result<T> = std::result::Result<T, KumaError>;

/// Which JSON layer of a double-encoded payload an error came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layer {
    /// The outer resource object
    Outer,
    /// The JSON document embedded as a string in the outer object
    Inner,
}

impl std::fmt::Display for Layer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Outer => write!(f, "outer"),
            Self::Inner => write!(f, "inner"),
        }
    }
}

/// Errors that can occur when decoding or encoding Uptime Kuma resources
#[derive(Error, Debug)]
pub enum KumaError {
    /// The outer notification object is not valid JSON or has the wrong shape
    #[error("malformed notification envelope: {0}")]
    Envelope(#[source] serde_json::Error),

    /// The `config` string does not contain a valid JSON object
    #[error("malformed notification config: {0}")]
    Config(#[source] serde_json::Error),

    /// The inner config has no `type` key
    #[error("notification config is missing the \"type\" discriminator")]
    MissingDiscriminator,

    /// The inner config has a `type` key that is not a string
    #[error("notification \"type\" must be a string, got {found}")]
    InvalidDiscriminatorType {
        /// JSON kind that was found instead
        found: &'static str,
    },

    /// The inner config has no `applyExisting` key
    #[error("notification config is missing \"applyExisting\"")]
    MissingApplyExisting,

    /// The inner config has an `applyExisting` key that is not a boolean
    #[error("notification \"applyExisting\" must be a boolean, got {found}")]
    InvalidApplyExistingType {
        /// JSON kind that was found instead
        found: &'static str,
    },

    /// The discriminator does not belong to the requested provider
    #[error("notification type mismatch: expected {expected:?}, found {found:?}")]
    TypeMismatch {
        /// Discriminator of the requested provider
        expected: &'static str,
        /// Discriminator carried by the payload
        found: String,
    },

    /// Reinterpreting a decoded notification as a concrete provider failed
    #[error("cannot convert notification to {target:?}: {source}")]
    Conversion {
        /// Discriminator of the requested provider
        target: &'static str,
        /// Underlying parse error
        #[source]
        source: serde_json::Error,
    },

    /// A value that must serialize to a JSON object did not
    #[error("{0} did not serialize to a JSON object")]
    NotAnObject(&'static str),

    /// Generic JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl KumaError {
    /// Returns the JSON layer a parse error originated from, if any
    #[must_use]
    pub const fn layer(&self) -> Option<Layer> {
        match self {
            Self::Envelope(_) => Some(Layer::Outer),
            Self::Config(_) => Some(Layer::Inner),
            _ => None,
        }
    }

    /// Returns true if the payload violated a required-field contract
    #[must_use]
    pub const fn is_contract_violation(&self) -> bool {
        matches!(
            self,
            Self::MissingDiscriminator
                | Self::InvalidDiscriminatorType { .. }
                | Self::MissingApplyExisting
                | Self::InvalidApplyExistingType { .. }
        )
    }
}

/// Short name of a JSON value's kind, used in error messages
pub(crate) const fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
