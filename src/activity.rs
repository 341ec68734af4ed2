//! JNI implementations of [`IncomingIntent`] and [`Navigator`] for an
//! `android.app.Activity` and the `android.content.Intent` it was handed.

use jni::errors::Result;
use jni::objects::{JObject, JString, JValue};
use jni::JNIEnv;

use crate::intent::{IncomingIntent, Navigator};
use crate::translate::NavigationRequest;

const CLASS_INTENT: &str = "android/content/Intent";
const CLASS_URI: &str = "android/net/Uri";

const SIG_GET_STRING: &str = "()Ljava/lang/String;";
const SIG_GET_STRING_EXTRA: &str = "(Ljava/lang/String;)Ljava/lang/String;";
const SIG_URI_PARSE: &str = "(Ljava/lang/String;)Landroid/net/Uri;";
const SIG_INTENT_CTOR: &str = "(Ljava/lang/String;Landroid/net/Uri;)V";
const SIG_SET_PACKAGE: &str = "(Ljava/lang/String;)Landroid/content/Intent;";
const SIG_START_ACTIVITY: &str = "(Landroid/content/Intent;)V";

fn to_rust_string(env: &mut JNIEnv, obj: JObject) -> Result<Option<String>> {
    if obj.is_null() {
        return Ok(None);
    }
    let jstr = JString::from(obj);
    let value: String = env.get_string(&jstr)?.into();
    Ok(Some(value))
}

/// An `android.content.Intent` delivered to `onCreate` or `onNewIntent`.
///
/// Local references created while reading the intent belong to the caller's
/// current local frame.
pub struct JavaIntent<'a, 'local> {
    env: JNIEnv<'local>,
    intent: &'a JObject<'a>,
}

impl<'a, 'local> JavaIntent<'a, 'local> {
    pub fn new(env: JNIEnv<'local>, intent: &'a JObject<'a>) -> Self {
        JavaIntent { env, intent }
    }
}

impl IncomingIntent for JavaIntent<'_, '_> {
    type Error = jni::errors::Error;

    fn action(&mut self) -> Result<Option<String>> {
        let action = self
            .env
            .call_method(self.intent, "getAction", SIG_GET_STRING, &[])?
            .l()?;
        to_rust_string(&mut self.env, action)
    }

    fn string_extra(&mut self, key: &str) -> Result<Option<String>> {
        let key = self.env.new_string(key)?;
        let value = self
            .env
            .call_method(
                self.intent,
                "getStringExtra",
                SIG_GET_STRING_EXTRA,
                &[JValue::Object(&key)],
            )?
            .l()?;
        to_rust_string(&mut self.env, value)
    }
}

/// Starts navigation intents from an `android.app.Activity`.
pub struct ActivityNavigator<'a, 'local> {
    env: JNIEnv<'local>,
    activity: &'a JObject<'a>,
}

impl<'a, 'local> ActivityNavigator<'a, 'local> {
    pub fn new(env: JNIEnv<'local>, activity: &'a JObject<'a>) -> Self {
        ActivityNavigator { env, activity }
    }
}

impl Navigator for ActivityNavigator<'_, '_> {
    type Error = jni::errors::Error;

    fn package_name(&mut self) -> Result<String> {
        let name = self
            .env
            .call_method(self.activity, "getPackageName", SIG_GET_STRING, &[])?
            .l()?;
        // Context.getPackageName() is never null on a live activity.
        to_rust_string(&mut self.env, name)?.ok_or(jni::errors::Error::NullPtr("getPackageName"))
    }

    /// `new Intent(ACTION_VIEW, Uri.parse(url)).setPackage(package)` followed
    /// by `startActivity`.
    fn navigate(&mut self, request: &NavigationRequest) -> Result<()> {
        let env = &mut self.env;

        let url = env.new_string(request.url())?;
        let uri = env
            .call_static_method(CLASS_URI, "parse", SIG_URI_PARSE, &[JValue::Object(&url)])?
            .l()?;

        let action = env.new_string(request.action())?;
        let view = env.new_object(
            CLASS_INTENT,
            SIG_INTENT_CTOR,
            &[JValue::Object(&action), JValue::Object(&uri)],
        )?;

        let package = env.new_string(request.package())?;
        env.call_method(
            &view,
            "setPackage",
            SIG_SET_PACKAGE,
            &[JValue::Object(&package)],
        )?;

        env.call_method(
            self.activity,
            "startActivity",
            SIG_START_ACTIVITY,
            &[JValue::Object(&view)],
        )?;
        Ok(())
    }
}
