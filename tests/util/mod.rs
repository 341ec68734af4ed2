#![allow(dead_code)]

use std::collections::HashMap;

use kiranaai_search_bridge::{IncomingIntent, NavigationRequest, Navigator};

#[cfg(feature = "invocation")]
pub mod jvm;

pub const PACKAGE: &str = "com.kiranaai.app";

/// Error raised by the test doubles in place of a JNI failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformError(pub &'static str);

/// In-memory intent that counts how often it is read.
#[derive(Debug, Default)]
pub struct FakeIntent {
    action: Option<String>,
    extras: HashMap<String, String>,
    pub action_reads: usize,
    pub extra_reads: usize,
    fail_extras: bool,
}

impl FakeIntent {
    pub fn new(action: &str) -> Self {
        FakeIntent {
            action: Some(action.to_owned()),
            ..Default::default()
        }
    }

    pub fn without_action() -> Self {
        Default::default()
    }

    pub fn extra(mut self, key: &str, value: &str) -> Self {
        self.extras.insert(key.to_owned(), value.to_owned());
        self
    }

    pub fn query(self, value: &str) -> Self {
        self.extra("query", value)
    }

    pub fn failing_extras(mut self) -> Self {
        self.fail_extras = true;
        self
    }
}

impl IncomingIntent for FakeIntent {
    type Error = PlatformError;

    fn action(&mut self) -> Result<Option<String>, PlatformError> {
        self.action_reads += 1;
        Ok(self.action.clone())
    }

    fn string_extra(&mut self, key: &str) -> Result<Option<String>, PlatformError> {
        self.extra_reads += 1;
        if self.fail_extras {
            return Err(PlatformError("getStringExtra"));
        }
        Ok(self.extras.get(key).cloned())
    }
}

/// Stands in for the hybrid app bridge: records every navigation.
#[derive(Debug)]
pub struct RecordingNavigator {
    package: String,
    pub package_lookups: usize,
    pub started: Vec<NavigationRequest>,
    fail_navigation: bool,
}

impl Default for RecordingNavigator {
    fn default() -> Self {
        RecordingNavigator {
            package: PACKAGE.to_owned(),
            package_lookups: 0,
            started: Vec::new(),
            fail_navigation: false,
        }
    }
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn for_package(package: &str) -> Self {
        RecordingNavigator {
            package: package.to_owned(),
            ..Default::default()
        }
    }

    /// Navigation fails as if `startActivity` threw.
    pub fn failing() -> Self {
        RecordingNavigator {
            fail_navigation: true,
            ..Default::default()
        }
    }
}

impl Navigator for RecordingNavigator {
    type Error = PlatformError;

    fn package_name(&mut self) -> Result<String, PlatformError> {
        self.package_lookups += 1;
        Ok(self.package.clone())
    }

    fn navigate(&mut self, request: &NavigationRequest) -> Result<(), PlatformError> {
        if self.fail_navigation {
            return Err(PlatformError("startActivity"));
        }
        self.started.push(request.clone());
        Ok(())
    }
}
