//! Search intent to deep link translation.
//!
//! Everything here is pure: no JNI, no I/O. The platform adapter in
//! [`crate::intent`] reads the incoming intent, calls [`translate_with`] and
//! hands the result to a [`Navigator`](crate::Navigator).

use crate::config::BridgeConfig;
use crate::link;

/// `android.content.Intent.ACTION_SEARCH`
pub const ACTION_SEARCH: &str = "android.intent.action.SEARCH";

/// Search action sent by Google Assistant / Play Services.
pub const ACTION_ASSISTANT_SEARCH: &str = "com.google.android.gms.actions.SEARCH_ACTION";

/// `android.content.Intent.ACTION_VIEW`
pub const ACTION_VIEW: &str = "android.intent.action.VIEW";

/// Intent actions the bridge intercepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchAction {
    /// The platform's generic search action
    Search,
    /// The voice assistant's search action
    AssistantSearch,
}

impl SearchAction {
    /// Recognizes an intent action string. Matching is exact.
    pub fn from_action(action: &str) -> Option<Self> {
        match action {
            ACTION_SEARCH => Some(SearchAction::Search),
            ACTION_ASSISTANT_SEARCH => Some(SearchAction::AssistantSearch),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SearchAction::Search => ACTION_SEARCH,
            SearchAction::AssistantSearch => ACTION_ASSISTANT_SEARCH,
        }
    }
}

/// A view intent to be started for the host application.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NavigationRequest {
    url: String,
    package: String,
}

impl NavigationRequest {
    /// Always [`ACTION_VIEW`].
    pub fn action(&self) -> &'static str {
        ACTION_VIEW
    }

    /// The deep link set as the intent's data.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// The only package allowed to resolve the intent.
    pub fn package(&self) -> &str {
        &self.package
    }
}

/// Translates a delivered intent into a navigation request using `config`.
///
/// Returns `None` when `action` is not a search action or the query is
/// absent. An empty query still produces a link, ending in `<param>=`.
pub fn translate_with(
    config: &BridgeConfig,
    action: &str,
    query: Option<&str>,
    package: &str,
) -> Option<NavigationRequest> {
    SearchAction::from_action(action)?;
    let query = query?;

    Some(NavigationRequest {
        url: link::build(config, query),
        package: package.to_owned(),
    })
}

/// [`translate_with`] using the default `kiranaai://query?q=` links.
pub fn translate(action: &str, query: Option<&str>, package: &str) -> Option<NavigationRequest> {
    translate_with(&BridgeConfig::default(), action, query, package)
}
