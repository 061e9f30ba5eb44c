//! Ask the platform to display a URI in another application
//!
//! - Android: `Intent.ACTION_VIEW` started from the activity through JNI.
//!   `ActivityNotFoundException` is reported as [`OpenUriError::NoHandler`].
//! - Desktop: the `open` crate, detached so the UI thread never waits.
//!   A program that cannot be found is reported as [`OpenUriError::NoHandler`].
//! - Web: `window.open` in a new tab. There are no native apps to target.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OpenUriError {
    #[error("no application available to open {0}")]
    NoHandler(String),

    #[error("failed to open URI: {0}")]
    Failed(String),
}

/// Display `uri` with a specific application.
///
/// `app` is a package name on Android and a program name or path on desktop.
pub fn open_in_app(uri: &str, app: &str) -> Result<(), OpenUriError> {
    tracing::debug!("Opening {} with {}", uri, app);
    #[cfg(target_os = "android")]
    {
        android::view_uri(uri, Some(app))
    }
    #[cfg(target_arch = "wasm32")]
    {
        let _ = app;
        Err(OpenUriError::NoHandler(uri.to_string()))
    }
    #[cfg(not(any(target_os = "android", target_arch = "wasm32")))]
    {
        open::with_detached(uri, app).map_err(|e| desktop::map_io_error(uri, e))
    }
}

/// Display `uri` with whatever the platform uses for web links
pub fn open_in_browser(uri: &str) -> Result<(), OpenUriError> {
    tracing::debug!("Opening {} in the browser", uri);
    #[cfg(target_os = "android")]
    {
        android::view_uri(uri, None)
    }
    #[cfg(target_arch = "wasm32")]
    {
        web::open_tab(uri)
    }
    #[cfg(not(any(target_os = "android", target_arch = "wasm32")))]
    {
        open::that_detached(uri).map_err(|e| desktop::map_io_error(uri, e))
    }
}

#[cfg(target_os = "android")]
pub use android::set_android_app;

#[cfg(not(any(target_os = "android", target_arch = "wasm32")))]
mod desktop {
    use super::OpenUriError;
    use std::io;

    pub fn map_io_error(uri: &str, e: io::Error) -> OpenUriError {
        match e.kind() {
            io::ErrorKind::NotFound => OpenUriError::NoHandler(uri.to_string()),
            _ => OpenUriError::Failed(e.to_string()),
        }
    }
}

#[cfg(target_arch = "wasm32")]
mod web {
    use super::OpenUriError;

    pub fn open_tab(uri: &str) -> Result<(), OpenUriError> {
        let window =
            web_sys::window().ok_or_else(|| OpenUriError::Failed("no window".to_string()))?;
        match window.open_with_url_and_target(uri, "_blank") {
            Ok(Some(_)) => Ok(()),
            Ok(None) => Err(OpenUriError::Failed("popup blocked".to_string())),
            Err(e) => Err(OpenUriError::Failed(format!("{:?}", e))),
        }
    }
}

#[cfg(target_os = "android")]
mod android {
    use super::OpenUriError;
    use jni::{
        JNIEnv, JavaVM,
        objects::{JObject, JValue},
        sys,
    };
    use once_cell::sync::OnceCell;
    use winit::platform::android::activity::AndroidApp;

    static ANDROID_APP: OnceCell<AndroidApp> = OnceCell::new();

    /// Remember the activity handle; called once by the Android entry point
    pub fn set_android_app(app: AndroidApp) {
        if ANDROID_APP.set(app).is_err() {
            tracing::warn!("Android app handle already set; keeping the first one");
        }
    }

    fn jni_error(e: jni::errors::Error) -> OpenUriError {
        OpenUriError::Failed(format!("JNI error: {:?}", e))
    }

    pub fn view_uri(uri: &str, package: Option<&str>) -> Result<(), OpenUriError> {
        let app = ANDROID_APP
            .get()
            .ok_or_else(|| OpenUriError::Failed("Android app handle not set".to_string()))?;

        let vm_ptr = app.vm_as_ptr() as *mut *const sys::JNIInvokeInterface_;
        let vm = unsafe { JavaVM::from_raw(vm_ptr) }.map_err(jni_error)?;
        let mut env = vm.attach_current_thread().map_err(jni_error)?;
        let activity = unsafe { JObject::from_raw(app.activity_as_ptr() as sys::jobject) };

        match start_view_activity(&mut env, &activity, uri, package) {
            Ok(()) => Ok(()),
            Err(jni::errors::Error::JavaException) => {
                let throwable = env.exception_occurred().map_err(jni_error)?;
                env.exception_clear().map_err(jni_error)?;
                let not_found = env
                    .is_instance_of(&throwable, "android/content/ActivityNotFoundException")
                    .map_err(jni_error)?;
                if not_found {
                    Err(OpenUriError::NoHandler(uri.to_string()))
                } else {
                    Err(OpenUriError::Failed(
                        "exception while starting the activity".to_string(),
                    ))
                }
            }
            Err(e) => Err(jni_error(e)),
        }
    }

    /// `startActivity(new Intent(ACTION_VIEW, Uri.parse(uri)).setPackage(package))`
    fn start_view_activity(
        env: &mut JNIEnv,
        activity: &JObject,
        uri: &str,
        package: Option<&str>,
    ) -> jni::errors::Result<()> {
        let uri_string = env.new_string(uri)?;
        let parsed = env
            .call_static_method(
                "android/net/Uri",
                "parse",
                "(Ljava/lang/String;)Landroid/net/Uri;",
                &[JValue::Object(&uri_string)],
            )?
            .l()?;

        let action = env.new_string("android.intent.action.VIEW")?;
        let intent = env.new_object(
            "android/content/Intent",
            "(Ljava/lang/String;Landroid/net/Uri;)V",
            &[JValue::Object(&action), JValue::Object(&parsed)],
        )?;

        if let Some(package) = package {
            let package = env.new_string(package)?;
            env.call_method(
                &intent,
                "setPackage",
                "(Ljava/lang/String;)Landroid/content/Intent;",
                &[JValue::Object(&package)],
            )?;
        }

        env.call_method(
            activity,
            "startActivity",
            "(Landroid/content/Intent;)V",
            &[JValue::Object(&intent)],
        )?;
        tracing::debug!("startActivity(ACTION_VIEW) returned");
        Ok(())
    }
}
