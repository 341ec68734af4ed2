//! Deep link configuration.
//!
//! The defaults produce `kiranaai://query?q=<query>` links and read the query
//! from the `SearchManager.QUERY` extra. A process-wide configuration can be
//! installed once, before the first intent arrives, with [`install`].

use once_cell::sync::OnceCell;

use crate::errors::ConfigError;

pub const DEFAULT_SCHEME: &str = "kiranaai";
pub const DEFAULT_HOST: &str = "query";
pub const DEFAULT_QUERY_PARAM: &str = "q";

/// `android.app.SearchManager.QUERY`
pub const DEFAULT_QUERY_EXTRA: &str = "query";

static GLOBAL: OnceCell<BridgeConfig> = OnceCell::new();

/// Shape of the deep links the bridge produces and where it finds the query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BridgeConfig {
    scheme: String,
    host: String,
    query_param: String,
    query_extra: String,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        BridgeConfig {
            scheme: DEFAULT_SCHEME.into(),
            host: DEFAULT_HOST.into(),
            query_param: DEFAULT_QUERY_PARAM.into(),
            query_extra: DEFAULT_QUERY_EXTRA.into(),
        }
    }
}

impl BridgeConfig {
    pub fn builder() -> BridgeConfigBuilder {
        BridgeConfigBuilder::new()
    }

    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn query_param(&self) -> &str {
        &self.query_param
    }

    /// Intent extra key holding the search text.
    pub fn query_extra(&self) -> &str {
        &self.query_extra
    }
}

/// Builder for [`BridgeConfig`]. Unset fields keep their defaults.
#[derive(Debug, Clone, Default)]
pub struct BridgeConfigBuilder {
    config: BridgeConfig,
}

impl BridgeConfigBuilder {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn scheme(self, scheme: &str) -> Self {
        let mut s = self;
        s.config.scheme = scheme.into();
        s
    }

    pub fn host(self, host: &str) -> Self {
        let mut s = self;
        s.config.host = host.into();
        s
    }

    pub fn query_param(self, param: &str) -> Self {
        let mut s = self;
        s.config.query_param = param.into();
        s
    }

    pub fn query_extra(self, key: &str) -> Self {
        let mut s = self;
        s.config.query_extra = key.into();
        s
    }

    /// Validates the collected values.
    ///
    /// Schemes are compared case-insensitively by URI parsers, so the scheme
    /// is stored lower-cased.
    pub fn build(self) -> Result<BridgeConfig, ConfigError> {
        let mut config = self.config;

        validate_scheme(&config.scheme)?;
        config.scheme.make_ascii_lowercase();

        if config.host.is_empty() {
            return Err(ConfigError::EmptyHost);
        }
        if config.host.contains(is_delimiter) {
            return Err(ConfigError::InvalidHost(config.host));
        }

        if config.query_param.is_empty() {
            return Err(ConfigError::EmptyQueryParam);
        }
        if crate::uri::encode(&config.query_param) != config.query_param {
            return Err(ConfigError::InvalidQueryParam(config.query_param));
        }

        if config.query_extra.is_empty() {
            return Err(ConfigError::EmptyQueryExtra);
        }

        Ok(config)
    }
}

fn validate_scheme(scheme: &str) -> Result<(), ConfigError> {
    let mut chars = scheme.chars();
    match chars.next() {
        None => Err(ConfigError::EmptyScheme),
        Some(first) if !first.is_ascii_alphabetic() => {
            Err(ConfigError::InvalidScheme(scheme.into()))
        }
        Some(_) => {
            if chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.')) {
                Ok(())
            } else {
                Err(ConfigError::InvalidScheme(scheme.into()))
            }
        }
    }
}

// gen-delims from RFC 3986 plus whitespace and the escape character
fn is_delimiter(c: char) -> bool {
    matches!(c, ':' | '/' | '?' | '#' | '[' | ']' | '@' | '%') || c.is_whitespace()
}

/// Installs the process-wide configuration used by the exported natives.
///
/// Must happen before the first intent is handled; after that the defaults
/// are locked in and this returns [`ConfigError::AlreadyInstalled`].
pub fn install(config: BridgeConfig) -> Result<(), ConfigError> {
    GLOBAL
        .set(config)
        .map_err(|_| ConfigError::AlreadyInstalled)
}

/// The process-wide configuration, falling back to the defaults.
pub fn global() -> &'static BridgeConfig {
    GLOBAL.get_or_init(BridgeConfig::default)
}
