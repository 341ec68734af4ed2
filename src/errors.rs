//! Error types for the search bridge

/// Result type alias for operations that cross the JNI boundary
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while forwarding an intent delivered to the activity
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A JNI call failed, or the JVM threw while we were calling into it
    #[error("JNI error: {0}")]
    Jni(#[from] jni::errors::Error),

    /// The configuration passed from Java was rejected, or came too late
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),
}

/// Reasons a [`BridgeConfig`](crate::BridgeConfig) can fail to build or install
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("URL scheme must not be empty")]
    EmptyScheme,

    /// RFC 3986: `ALPHA *( ALPHA / DIGIT / "+" / "-" / "." )`
    #[error("invalid URL scheme {0:?}")]
    InvalidScheme(String),

    #[error("deep link host must not be empty")]
    EmptyHost,

    #[error("deep link host {0:?} contains URI delimiters")]
    InvalidHost(String),

    #[error("query parameter name must not be empty")]
    EmptyQueryParam,

    #[error("query parameter name {0:?} must be unreserved characters only")]
    InvalidQueryParam(String),

    #[error("intent extra key must not be empty")]
    EmptyQueryExtra,

    #[error("a bridge configuration is already installed")]
    AlreadyInstalled,
}

/// Reasons a percent-encoded URI component can fail to decode
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    #[error("decoded bytes are not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::str::Utf8Error),
}
