use std::path::PathBuf;
use std::sync::Arc;

use jni::{
    objects::{JObject, JString, JValue},
    AttachGuard, InitArgsBuilder, JNIEnv, JNIVersion, JavaVM,
};
use once_cell::sync::Lazy;

const STUB_SOURCES: &[&str] = &[
    "tests/java/android/net/Uri.java",
    "tests/java/android/content/ActivityNotFoundException.java",
    "tests/java/android/content/Intent.java",
    "tests/java/android/app/Activity.java",
];

static JVM: Lazy<Arc<JavaVM>> = Lazy::new(|| {
    let classes = PathBuf::from(env!("CARGO_TARGET_TMPDIR")).join("android-stubs");
    std::fs::create_dir_all(&classes).unwrap_or_else(|e| panic!("{:#?}", e));
    javac::Build::new()
        .files(STUB_SOURCES)
        .output_dir(&classes)
        .cargo_metadata(false)
        .compile();

    let classpath = format!("-Djava.class.path={}", classes.display());
    let jvm_args = InitArgsBuilder::new()
        .version(JNIVersion::V8)
        .option("-Xcheck:jni")
        .option(&classpath)
        .build()
        .unwrap_or_else(|e| panic!("{:#?}", e));

    Arc::new(JavaVM::new(jvm_args).unwrap_or_else(|e| panic!("{:#?}", e)))
});

pub fn attach_current_thread() -> AttachGuard<'static> {
    JVM.attach_current_thread()
        .expect("failed to attach jvm thread")
}

/// A stub `android.app.Activity`. With `nothing_resolves`, `startActivity`
/// throws `ActivityNotFoundException`.
pub fn new_activity<'local>(
    env: &mut JNIEnv<'local>,
    package: &str,
    nothing_resolves: bool,
) -> JObject<'local> {
    let package = env.new_string(package).unwrap();
    env.new_object(
        "android/app/Activity",
        "(Ljava/lang/String;Z)V",
        &[JValue::Object(&package), JValue::from(nothing_resolves)],
    )
    .unwrap()
}

/// A stub `android.content.Intent` carrying `query` under the `"query"` extra.
pub fn new_intent<'local>(
    env: &mut JNIEnv<'local>,
    action: Option<&str>,
    query: Option<&str>,
) -> JObject<'local> {
    let action = match action {
        Some(action) => JObject::from(env.new_string(action).unwrap()),
        None => JObject::null(),
    };
    let intent = env
        .new_object(
            "android/content/Intent",
            "(Ljava/lang/String;)V",
            &[JValue::Object(&action)],
        )
        .unwrap();

    if let Some(query) = query {
        let key = env.new_string("query").unwrap();
        let value = env.new_string(query).unwrap();
        env.call_method(
            &intent,
            "putExtra",
            "(Ljava/lang/String;Ljava/lang/String;)Landroid/content/Intent;",
            &[JValue::Object(&key), JValue::Object(&value)],
        )
        .unwrap();
    }
    intent
}

/// What the stub activity was last asked to start.
#[derive(Debug, PartialEq, Eq)]
pub struct StartedIntent {
    pub action: Option<String>,
    pub data: Option<String>,
    pub package: Option<String>,
}

pub fn start_count(env: &mut JNIEnv, activity: &JObject) -> i32 {
    env.get_field(activity, "startCount", "I")
        .unwrap()
        .i()
        .unwrap()
}

pub fn last_started(env: &mut JNIEnv, activity: &JObject) -> Option<StartedIntent> {
    let intent = env
        .get_field(activity, "lastStarted", "Landroid/content/Intent;")
        .unwrap()
        .l()
        .unwrap();
    if intent.is_null() {
        return None;
    }

    let uri = env
        .call_method(&intent, "getData", "()Landroid/net/Uri;", &[])
        .unwrap()
        .l()
        .unwrap();
    let data = if uri.is_null() {
        None
    } else {
        call_string(env, &uri, "toString")
    };

    Some(StartedIntent {
        action: call_string(env, &intent, "getAction"),
        data,
        package: call_string(env, &intent, "getPackage"),
    })
}

fn call_string(env: &mut JNIEnv, obj: &JObject, method: &str) -> Option<String> {
    let value = env
        .call_method(obj, method, "()Ljava/lang/String;", &[])
        .unwrap()
        .l()
        .unwrap();
    if value.is_null() {
        return None;
    }
    let value = JString::from(value);
    let value: String = env.get_string(&value).unwrap().into();
    Some(value)
}
