//! Building and reading `<scheme>://<host>?<param>=<query>` deep links.

use url::Url;

use crate::config::BridgeConfig;
use crate::uri;

/// Builds the deep link carrying `query`.
pub fn build(config: &BridgeConfig, query: &str) -> String {
    format!(
        "{}://{}?{}={}",
        config.scheme(),
        config.host(),
        config.query_param(),
        uri::encode(query)
    )
}

/// Extracts the search query from a deep link, the way the hosted web app
/// reads it (`new URL(link).searchParams.get(param)`) when the runtime reports
/// the URL as opened.
///
/// Returns `None` unless the link parses, its scheme and host match `config`
/// and the first pair whose decoded key is the query parameter has a
/// non-empty value. Pairs are form-decoded: `+` reads as a space, malformed
/// escapes are kept literally and invalid UTF-8 is replaced.
pub fn parse_query(config: &BridgeConfig, link: &str) -> Option<String> {
    let url = Url::parse(link).ok()?;
    if url.scheme() != config.scheme() || url.host_str() != Some(config.host()) {
        return None;
    }

    let (_, value) = url
        .query_pairs()
        .find(|(key, _)| key == config.query_param())?;
    (!value.is_empty()).then(|| value.into_owned())
}
