//! The seam between an activity's lifecycle callbacks and the translator.
//!
//! [`IncomingIntent`] and [`Navigator`] abstract the two halves of the
//! platform: reading the delivered intent, and starting the resulting one.
//! The JNI implementations live in [`crate::activity`]; tests substitute
//! in-memory doubles.

use tracing::debug;

use crate::config::BridgeConfig;
use crate::translate::{translate_with, NavigationRequest, SearchAction};

/// Read access to an intent delivered to the activity.
pub trait IncomingIntent {
    type Error;

    /// The intent's action, `None` if it has none.
    fn action(&mut self) -> Result<Option<String>, Self::Error>;

    /// A string extra, `None` if absent or null.
    fn string_extra(&mut self, key: &str) -> Result<Option<String>, Self::Error>;
}

/// The host application's ability to navigate to a deep link.
pub trait Navigator {
    type Error;

    /// Package name of the running application.
    fn package_name(&mut self) -> Result<String, Self::Error>;

    /// Starts the navigation intent described by `request`.
    fn navigate(&mut self, request: &NavigationRequest) -> Result<(), Self::Error>;
}

impl<N: Navigator + ?Sized> Navigator for &mut N {
    type Error = N::Error;

    fn package_name(&mut self) -> Result<String, Self::Error> {
        (**self).package_name()
    }

    fn navigate(&mut self, request: &NavigationRequest) -> Result<(), Self::Error> {
        (**self).navigate(request)
    }
}

/// Which lifecycle callback delivered the intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifecycle {
    /// `onCreate`, with the intent that launched the activity
    Create,
    /// `onNewIntent`, redelivered to a running activity
    NewIntent,
}

/// What [`IntentHandler::handle`] did with an intent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// A navigation request was started.
    Dispatched(NavigationRequest),
    /// Not a search intent, or no query; nothing happened.
    Ignored,
}

/// Funnels both lifecycle entry points into the same translation.
#[derive(Debug, Clone, Copy)]
pub struct IntentHandler<'c> {
    config: &'c BridgeConfig,
}

impl<'c> IntentHandler<'c> {
    pub fn new(config: &'c BridgeConfig) -> Self {
        IntentHandler { config }
    }

    /// Handles one delivered intent.
    ///
    /// Extras are only read for recognized actions, and the package name is
    /// only looked up once there is something to dispatch. Errors come from
    /// the platform, never from the intent's contents.
    pub fn handle<I, N, E>(
        &self,
        lifecycle: Lifecycle,
        intent: &mut I,
        navigator: &mut N,
    ) -> Result<Outcome, E>
    where
        I: IncomingIntent<Error = E> + ?Sized,
        N: Navigator<Error = E> + ?Sized,
    {
        let Some(action) = intent.action()? else {
            return Ok(Outcome::Ignored);
        };
        if SearchAction::from_action(&action).is_none() {
            return Ok(Outcome::Ignored);
        }

        let Some(query) = intent.string_extra(self.config.query_extra())? else {
            return Ok(Outcome::Ignored);
        };

        let package = navigator.package_name()?;
        let Some(request) = translate_with(self.config, &action, Some(&query), &package)
        else {
            return Ok(Outcome::Ignored);
        };

        debug!(
            ?lifecycle,
            url = request.url(),
            package = request.package(),
            "dispatching search deep link"
        );
        navigator.navigate(&request)?;
        Ok(Outcome::Dispatched(request))
    }
}
