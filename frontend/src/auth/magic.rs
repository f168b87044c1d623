use std::fmt;
use std::future::Future;
use std::rc::Rc;
use std::time::Duration;

use futures::future::{self, Either, FutureExt, LocalBoxFuture};
use gloo_timers::future::TimeoutFuture;
use log::{debug, error};
use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

use crate::config::{PublishableKey, Surface};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MagicError {
    #[error("magic link login rejected: {0}")]
    Rejected(String),
    #[error("magic link login did not settle within {0:?}")]
    TimedOut(Duration),
    #[error("could not build magic link request: {0}")]
    InvalidRequest(String),
}

/// Passwordless login capability of the auth provider.
pub trait MagicAuth {
    /// Starts the request immediately; the returned future settles with the outcome.
    fn login_with_magic_link(&self, email: &str) -> LocalBoxFuture<'static, Result<(), MagicError>>;
}

/// Shared provider handle. Two handles are equal only if they are the same client.
#[derive(Clone)]
pub struct MagicHandle(Rc<dyn MagicAuth>);

impl MagicHandle {
    pub fn new(client: impl MagicAuth + 'static) -> Self {
        MagicHandle(Rc::new(client))
    }

    pub fn login_with_magic_link(&self, email: &str) -> LocalBoxFuture<'static, Result<(), MagicError>> {
        self.0.login_with_magic_link(email)
    }
}

impl PartialEq for MagicHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for MagicHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("MagicHandle")
    }
}

/// Builds a handle for `key`, or `None` when the key is unconfigured or
/// there is no surface to show the provider UI on.
pub fn make_handle<F>(key: &PublishableKey, surface: Surface, build: F) -> Option<MagicHandle>
where
    F: FnOnce(&PublishableKey) -> Option<MagicHandle>,
{
    if surface == Surface::Headless || key.is_placeholder() {
        return None;
    }
    build(key)
}

/// Memoises the handle on the key it was built for.
#[derive(Default)]
pub struct HandleCache {
    built_for: Option<PublishableKey>,
    handle: Option<MagicHandle>,
}

impl HandleCache {
    pub fn get<F>(&mut self, key: &PublishableKey, surface: Surface, build: F) -> Option<MagicHandle>
    where
        F: FnOnce(&PublishableKey) -> Option<MagicHandle>,
    {
        if self.built_for.as_ref() != Some(key) {
            debug!("Building magic handle");
            self.handle = make_handle(key, surface, build);
            self.built_for = Some(key.clone());
        }
        self.handle.clone()
    }
}

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_name = Magic)]
    type MagicClient;

    #[wasm_bindgen(constructor, catch, js_class = "Magic")]
    fn new(api_key: &str) -> Result<MagicClient, JsValue>;

    #[wasm_bindgen(method, getter, catch)]
    fn auth(this: &MagicClient) -> Result<AuthModule, JsValue>;

    type AuthModule;

    #[wasm_bindgen(method, catch, js_name = loginWithMagicLink)]
    fn login_with_magic_link(this: &AuthModule, configuration: &JsValue) -> Result<js_sys::Promise, JsValue>;
}

#[derive(Serialize)]
struct LoginWithMagicLinkConfiguration<'a> {
    email: &'a str,
    #[serde(rename = "showUI")]
    show_ui: bool,
}

/// Races a login against `deadline`; whichever settles first decides.
async fn settle_within<L, D>(login: L, deadline: D, timeout: Duration) -> Result<(), MagicError>
where
    L: Future<Output = Result<(), MagicError>>,
    D: Future<Output = ()>,
{
    futures::pin_mut!(login, deadline);
    match future::select(login, deadline).await {
        Either::Left((result, _)) => result,
        Either::Right(_) => Err(MagicError::TimedOut(timeout)),
    }
}

/// Magic JS SDK client, loaded by the `<script>` tag in index.html.
pub struct MagicSdk {
    client: MagicClient,
    timeout: Duration,
}

impl MagicSdk {
    pub fn connect(key: &PublishableKey, timeout: Duration) -> Option<MagicHandle> {
        match MagicClient::new(key.as_str()) {
            Ok(client) => Some(MagicHandle::new(MagicSdk { client, timeout })),
            Err(err) => {
                error!("Failed to construct Magic client: {}", describe_js_error(&err));
                None
            }
        }
    }
}

impl MagicAuth for MagicSdk {
    fn login_with_magic_link(&self, email: &str) -> LocalBoxFuture<'static, Result<(), MagicError>> {
        let configuration = LoginWithMagicLinkConfiguration { email, show_ui: true };
        let configuration = match serde_wasm_bindgen::to_value(&configuration) {
            Ok(value) => value,
            Err(err) => return future::ready(Err(MagicError::InvalidRequest(err.to_string()))).boxed_local(),
        };

        // The SDK may throw before handing back a promise.
        let promise = match self
            .client
            .auth()
            .and_then(|auth| auth.login_with_magic_link(&configuration))
        {
            Ok(promise) => promise,
            Err(err) => return future::ready(Err(MagicError::Rejected(describe_js_error(&err)))).boxed_local(),
        };

        let login = JsFuture::from(promise)
            .map(|settled| settled.map(|_| ()).map_err(|err| MagicError::Rejected(describe_js_error(&err))));
        let millis = u32::try_from(self.timeout.as_millis()).unwrap_or(u32::MAX);
        settle_within(login, TimeoutFuture::new(millis), self.timeout).boxed_local()
    }
}

fn describe_js_error(value: &JsValue) -> String {
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::channel::oneshot;
    use futures::executor::block_on;
    use std::cell::Cell;

    struct AlwaysOk;

    impl MagicAuth for AlwaysOk {
        fn login_with_magic_link(&self, _email: &str) -> LocalBoxFuture<'static, Result<(), MagicError>> {
            future::ready(Ok(())).boxed_local()
        }
    }

    fn key(value: &str) -> PublishableKey {
        crate::config::KeySources {
            injected: Some(value.to_string()),
            build_time: None,
        }
        .resolve()
    }

    #[test]
    fn test_make_handle_placeholder_is_unavailable() {
        let built = Cell::new(false);
        let handle = make_handle(&PublishableKey::placeholder(), Surface::Interactive, |_| {
            built.set(true);
            Some(MagicHandle::new(AlwaysOk))
        });
        assert!(handle.is_none());
        assert!(!built.get());
    }

    #[test]
    fn test_make_handle_real_key_interactive() {
        let handle = make_handle(&key("abc"), Surface::Interactive, |_| Some(MagicHandle::new(AlwaysOk)));
        assert!(handle.is_some());
    }

    #[test]
    fn test_make_handle_headless_is_unavailable() {
        let handle = make_handle(&key("abc"), Surface::Headless, |_| Some(MagicHandle::new(AlwaysOk)));
        assert!(handle.is_none());
    }

    #[test]
    fn test_make_handle_passes_key_to_builder() {
        let seen = std::cell::RefCell::new(String::new());
        make_handle(&key(" pk_test_42 "), Surface::Interactive, |k| {
            *seen.borrow_mut() = k.as_str().to_string();
            None
        });
        assert_eq!(seen.borrow().as_str(), "pk_test_42");
    }

    #[test]
    fn test_handle_cache_rebuilds_only_on_key_change() {
        let builds = Cell::new(0);
        let build = |_: &PublishableKey| {
            builds.set(builds.get() + 1);
            Some(MagicHandle::new(AlwaysOk))
        };
        let mut cache = HandleCache::default();

        let first = cache.get(&key("abc"), Surface::Interactive, build);
        let second = cache.get(&key("abc"), Surface::Interactive, build);
        assert_eq!(builds.get(), 1);
        assert_eq!(first, second);

        let third = cache.get(&key("def"), Surface::Interactive, build);
        assert_eq!(builds.get(), 2);
        assert!(third.is_some());
        assert_ne!(first, third);
    }

    #[test]
    fn test_handle_cache_remembers_unavailable_handle() {
        let builds = Cell::new(0);
        let mut cache = HandleCache::default();
        for _ in 0..3 {
            let handle = cache.get(&PublishableKey::placeholder(), Surface::Interactive, |_| {
                builds.set(builds.get() + 1);
                Some(MagicHandle::new(AlwaysOk))
            });
            assert!(handle.is_none());
        }
        assert_eq!(builds.get(), 0);
    }

    #[test]
    fn test_magic_error_messages() {
        assert_eq!(
            MagicError::Rejected("rate limited".into()).to_string(),
            "magic link login rejected: rate limited"
        );
        assert!(MagicError::TimedOut(Duration::from_secs(5)).to_string().contains("5s"));
    }

    #[test]
    fn test_login_that_outlives_deadline_times_out() {
        let timeout = Duration::from_secs(900);
        let result = block_on(settle_within(future::pending(), future::ready(()), timeout));
        assert_eq!(result, Err(MagicError::TimedOut(timeout)));
    }

    #[test]
    fn test_login_settling_first_wins_the_race() {
        let timeout = Duration::from_secs(900);
        assert_eq!(block_on(settle_within(future::ready(Ok(())), future::pending(), timeout)), Ok(()));

        let rejected = future::ready(Err(MagicError::Rejected("invalid email".to_string())));
        assert_eq!(
            block_on(settle_within(rejected, future::pending(), timeout)),
            Err(MagicError::Rejected("invalid email".to_string()))
        );
    }

    #[test]
    fn test_deadline_firing_later_still_times_out() {
        let (fire, deadline) = oneshot::channel::<()>();
        let timeout = Duration::from_secs(1);
        let race = settle_within(future::pending(), deadline.map(|_| ()), timeout);
        fire.send(()).expect("race alive");
        assert_eq!(block_on(race), Err(MagicError::TimedOut(timeout)));
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    fn install_sdk(login_body: &str) {
        let script = format!(
            "globalThis.Magic = class {{ constructor(key) {{ this.key = key; this.auth = {{ \
             loginWithMagicLink: (configuration) => {{ {} }} }}; }} }};",
            login_body
        );
        js_sys::eval(&script).expect("install fake Magic SDK");
    }

    fn key() -> PublishableKey {
        crate::config::KeySources {
            injected: Some("pk_live_test".to_string()),
            build_time: None,
        }
        .resolve()
    }

    #[wasm_bindgen_test]
    async fn test_connect_constructs_global_magic_class() {
        install_sdk("return configuration.showUI ? Promise.resolve(true) : Promise.reject(new Error('no ui'));");
        let handle = MagicSdk::connect(&key(), Duration::from_secs(5)).expect("Magic global is constructed");
        assert_eq!(handle.login_with_magic_link("a@b.com").await, Ok(()));
    }

    #[wasm_bindgen_test]
    async fn test_synchronous_sdk_throw_becomes_rejection() {
        install_sdk("throw new Error('sdk exploded');");
        let handle = MagicSdk::connect(&key(), Duration::from_secs(5)).expect("Magic global is constructed");
        assert_eq!(
            handle.login_with_magic_link("a@b.com").await,
            Err(MagicError::Rejected("sdk exploded".to_string()))
        );
    }

    #[wasm_bindgen_test]
    fn test_configuration_uses_sdk_field_names() {
        let configuration = LoginWithMagicLinkConfiguration { email: "a@b.com", show_ui: true };
        let value = serde_wasm_bindgen::to_value(&configuration).expect("serializable");
        let show_ui = js_sys::Reflect::get(&value, &JsValue::from_str("showUI")).expect("readable");
        assert_eq!(show_ui.as_bool(), Some(true));
    }
}
