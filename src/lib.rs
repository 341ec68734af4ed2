//! # Overview
//!
//! Native half of the KiranaAI Android entry activity. The hybrid app shell
//! only reacts to `VIEW` intents carrying a `kiranaai://` deep link, so search
//! intents (from the system search UI or from the voice assistant) are
//! rewritten into one:
//!
//! ```text
//! ACTION_SEARCH { query: "milk 2L" }
//!     -> ACTION_VIEW kiranaai://query?q=milk%202L (package = this app)
//! ```
//!
//! The decision itself is a pure function, [`translate`]:
//!
//! ```
//! use kiranaai_search_bridge::{translate, ACTION_SEARCH};
//!
//! let request = translate(ACTION_SEARCH, Some("milk 2L"), "com.kiranaai.app").unwrap();
//! assert_eq!(request.url(), "kiranaai://query?q=milk%202L");
//! assert_eq!(request.package(), "com.kiranaai.app");
//!
//! assert!(translate("android.intent.action.MAIN", Some("milk"), "com.kiranaai.app").is_none());
//! ```
//!
//! [`IntentHandler`] wires it to the platform through the [`IncomingIntent`]
//! and [`Navigator`] traits, and the [`exports`] module provides the JNI entry
//! points the Java activity calls from `onCreate` and `onNewIntent`.
//!
//! Intents that are not searches, or searches without a query, are ignored
//! without logging anything. Failures talking to the JVM are logged and
//! swallowed; the activity never sees an exception from this library.

// errors for config, codec and the JNI boundary
pub mod errors;

// deep link shape and the process-wide copy of it
pub mod config;

// percent-encoding compatible with android.net.Uri
pub mod uri;

// deep link building and parsing
pub mod link;

// the pure search -> view decision
mod translate;

// platform seam: traits and the lifecycle handler
pub mod intent;

// JNI implementations of the platform seam
pub mod activity;

// JNI entry points called by the Java activity
pub mod exports;

pub mod logging;

pub use crate::config::BridgeConfig;
pub use crate::errors::{ConfigError, DecodeError, Error, Result};
pub use crate::intent::{IncomingIntent, IntentHandler, Lifecycle, Navigator, Outcome};
pub use crate::translate::{
    translate, translate_with, NavigationRequest, SearchAction, ACTION_ASSISTANT_SEARCH,
    ACTION_SEARCH, ACTION_VIEW,
};
