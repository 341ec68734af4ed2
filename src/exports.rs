//! Native methods for `com.kiranaai.app.MainActivity`.
//!
//! The Java side is a thin shim (see `java/com/kiranaai/app/MainActivity.java`)
//! that forwards the launch intent from `onCreate` and every redelivered
//! intent from `onNewIntent`. `nativeConfigure` may be called once, before
//! the first intent, to change the deep link shape. Nothing thrown or
//! panicking here may reach the JVM: the activity's lifecycle callback must
//! always return normally.

use std::os::raw::c_void;
use std::panic::{self, AssertUnwindSafe};

use jni::objects::{JClass, JObject, JString};
use jni::sys::{jboolean, jint, JNI_FALSE, JNI_TRUE, JNI_VERSION_1_6};
use jni::JNIEnv;
use tracing::{error, warn};

use crate::activity::{ActivityNavigator, JavaIntent};
use crate::config::{self, BridgeConfig};
use crate::errors::Result;
use crate::intent::{IntentHandler, Lifecycle, Outcome};
use crate::logging;

// Intent, two strings, a Uri and the view intent, with room to spare.
const LOCAL_FRAME_CAPACITY: i32 = 16;

#[no_mangle]
#[allow(non_snake_case)]
pub extern "system" fn JNI_OnLoad(_vm: *mut jni::sys::JavaVM, _reserved: *mut c_void) -> jint {
    logging::init();
    JNI_VERSION_1_6
}

#[no_mangle]
#[allow(non_snake_case)]
pub extern "system" fn Java_com_kiranaai_app_MainActivity_nativeOnCreate<'local>(
    mut env: JNIEnv<'local>,
    activity: JObject<'local>,
    intent: JObject<'local>,
) {
    on_lifecycle(&mut env, &activity, &intent, Lifecycle::Create);
}

#[no_mangle]
#[allow(non_snake_case)]
pub extern "system" fn Java_com_kiranaai_app_MainActivity_nativeOnNewIntent<'local>(
    mut env: JNIEnv<'local>,
    activity: JObject<'local>,
    intent: JObject<'local>,
) {
    on_lifecycle(&mut env, &activity, &intent, Lifecycle::NewIntent);
}

/// `static native boolean nativeConfigure(String scheme, String host,
/// String queryParam, String queryExtra)`. Null arguments keep the default.
/// Returns false, with nothing installed, if the values are invalid or a
/// configuration is already in effect.
#[no_mangle]
#[allow(non_snake_case)]
pub extern "system" fn Java_com_kiranaai_app_MainActivity_nativeConfigure<'local>(
    mut env: JNIEnv<'local>,
    _class: JClass<'local>,
    scheme: JString<'local>,
    host: JString<'local>,
    query_param: JString<'local>,
    query_extra: JString<'local>,
) -> jboolean {
    let result = panic::catch_unwind(AssertUnwindSafe(|| {
        configure(&mut env, &scheme, &host, &query_param, &query_extra)
    }));

    match result {
        Ok(Ok(())) => JNI_TRUE,
        Ok(Err(err)) => {
            warn!(%err, "rejected deep link configuration");
            clear_pending_exception(&env);
            JNI_FALSE
        }
        Err(_) => {
            error!("panicked while installing deep link configuration");
            clear_pending_exception(&env);
            JNI_FALSE
        }
    }
}

fn configure(
    env: &mut JNIEnv,
    scheme: &JString,
    host: &JString,
    query_param: &JString,
    query_extra: &JString,
) -> Result<()> {
    let mut builder = BridgeConfig::builder();
    if let Some(scheme) = optional_string(env, scheme)? {
        builder = builder.scheme(&scheme);
    }
    if let Some(host) = optional_string(env, host)? {
        builder = builder.host(&host);
    }
    if let Some(param) = optional_string(env, query_param)? {
        builder = builder.query_param(&param);
    }
    if let Some(key) = optional_string(env, query_extra)? {
        builder = builder.query_extra(&key);
    }

    config::install(builder.build()?)?;
    Ok(())
}

fn optional_string(env: &mut JNIEnv, value: &JString) -> jni::errors::Result<Option<String>> {
    if value.is_null() {
        return Ok(None);
    }
    Ok(Some(env.get_string(value)?.into()))
}

fn on_lifecycle(env: &mut JNIEnv, activity: &JObject, intent: &JObject, lifecycle: Lifecycle) {
    if intent.is_null() {
        return;
    }

    let result = panic::catch_unwind(AssertUnwindSafe(|| {
        handle_intent(env, activity, intent, lifecycle)
    }));

    match result {
        Ok(Ok(_)) => {}
        Ok(Err(err)) => {
            warn!(?lifecycle, %err, "failed to forward search intent");
            clear_pending_exception(env);
        }
        Err(_) => {
            error!(?lifecycle, "panicked while handling search intent");
            clear_pending_exception(env);
        }
    }
}

fn handle_intent(
    env: &mut JNIEnv,
    activity: &JObject,
    intent: &JObject,
    lifecycle: Lifecycle,
) -> Result<Outcome> {
    let handler = IntentHandler::new(config::global());

    env.with_local_frame(LOCAL_FRAME_CAPACITY, |env| -> Result<Outcome> {
        // Safety: both duplicates are dropped, with every local reference
        // they created, before this frame is popped.
        let mut incoming = JavaIntent::new(unsafe { env.unsafe_clone() }, intent);
        let mut navigator = ActivityNavigator::new(unsafe { env.unsafe_clone() }, activity);
        Ok(handler.handle(lifecycle, &mut incoming, &mut navigator)?)
    })
}

fn clear_pending_exception(env: &JNIEnv) {
    if env.exception_check().unwrap_or(false) {
        let _ = env.exception_describe();
        let _ = env.exception_clear();
    }
}
