use std::time::Duration;

use log::warn;
use wasm_bindgen::JsValue;

/// Returned by the resolver when no real publishable key is available.
pub const PLACEHOLDER_KEY: &str = "YOUR_MAGIC_PUBLISHABLE_KEY";

/// Global the hosting page may set before the wasm bundle boots.
pub const INJECTED_KEY_GLOBAL: &str = "__MAGIC_PUBLISHABLE_KEY__";

const DEFAULT_STARTER_CHECKOUT_URL: &str = "https://buy.stripe.com/misslead-starter";
const DEFAULT_PROFESSIONAL_CHECKOUT_URL: &str = "https://buy.stripe.com/misslead-professional";
const DEFAULT_ENTERPRISE_CHECKOUT_URL: &str = "https://buy.stripe.com/misslead-enterprise";
const DEFAULT_SCHEDULE_DEMO_URL: &str = "https://calendly.com/misslead/demo";

// A magic link stays valid for 15 minutes, the login promise settles only
// after the user clicks it.
const DEFAULT_LOGIN_TIMEOUT_SECS: u64 = 15 * 60;

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PublishableKey(String);

impl PublishableKey {
    pub fn placeholder() -> Self {
        PublishableKey(PLACEHOLDER_KEY.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_placeholder(&self) -> bool {
        self.0.is_empty() || self.0 == PLACEHOLDER_KEY
    }
}

/// Candidate sources for the Magic publishable key, in priority order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct KeySources {
    pub injected: Option<String>,
    pub build_time: Option<String>,
}

impl KeySources {
    /// Reads the injected window global and the value baked in at compile time.
    pub fn from_host() -> Self {
        let injected = web_sys::window().and_then(|window| {
            js_sys::Reflect::get(&window, &JsValue::from_str(INJECTED_KEY_GLOBAL))
                .ok()
                .and_then(|value| value.as_string())
        });

        KeySources {
            injected,
            build_time: option_env!("MAGIC_PUBLISHABLE_KEY").map(str::to_string),
        }
    }

    /// First non-blank source wins, trimmed. Never fails.
    pub fn resolve(&self) -> PublishableKey {
        [self.injected.as_deref(), self.build_time.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .find(|candidate| !candidate.is_empty())
            .map(|key| PublishableKey(key.to_string()))
            .unwrap_or_else(PublishableKey::placeholder)
    }
}

/// Whether the host can show the provider's login UI.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Surface {
    Interactive,
    Headless,
}

impl Surface {
    pub fn detect() -> Self {
        match web_sys::window().and_then(|window| window.document()) {
            Some(_) => Surface::Interactive,
            None => Surface::Headless,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ExternalLinks {
    pub starter_checkout: String,
    pub professional_checkout: String,
    pub enterprise_checkout: String,
    pub schedule_demo: String,
}

impl Default for ExternalLinks {
    fn default() -> Self {
        ExternalLinks {
            starter_checkout: build_env(option_env!("STARTER_CHECKOUT_URL"), DEFAULT_STARTER_CHECKOUT_URL),
            professional_checkout: build_env(
                option_env!("PROFESSIONAL_CHECKOUT_URL"),
                DEFAULT_PROFESSIONAL_CHECKOUT_URL,
            ),
            enterprise_checkout: build_env(option_env!("ENTERPRISE_CHECKOUT_URL"), DEFAULT_ENTERPRISE_CHECKOUT_URL),
            schedule_demo: build_env(option_env!("SCHEDULE_DEMO_URL"), DEFAULT_SCHEDULE_DEMO_URL),
        }
    }
}

/// Everything the page needs from its host, resolved once at startup.
#[derive(Clone, Debug, PartialEq)]
pub struct SiteConfig {
    pub publishable_key: PublishableKey,
    pub surface: Surface,
    pub links: ExternalLinks,
    pub login_timeout: Duration,
}

impl SiteConfig {
    pub fn from_host() -> Self {
        let publishable_key = KeySources::from_host().resolve();
        if publishable_key.is_placeholder() {
            warn!(
                "Magic publishable key not configured; set window.{} or MAGIC_PUBLISHABLE_KEY",
                INJECTED_KEY_GLOBAL
            );
        }

        SiteConfig {
            publishable_key,
            surface: Surface::detect(),
            links: ExternalLinks::default(),
            login_timeout: login_timeout(option_env!("MAGIC_LOGIN_TIMEOUT_SECS")),
        }
    }
}

fn build_env(value: Option<&str>, default: &str) -> String {
    match value.map(str::trim) {
        Some(value) if !value.is_empty() => value.to_string(),
        _ => default.to_string(),
    }
}

fn login_timeout(value: Option<&str>) -> Duration {
    let secs = value
        .and_then(|raw| raw.trim().parse::<u64>().ok())
        .filter(|secs| *secs > 0)
        .unwrap_or(DEFAULT_LOGIN_TIMEOUT_SECS);
    Duration::from_secs(secs)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sources(injected: Option<&str>, build_time: Option<&str>) -> KeySources {
        KeySources {
            injected: injected.map(str::to_string),
            build_time: build_time.map(str::to_string),
        }
    }

    #[test]
    fn test_resolve_returns_placeholder_when_every_source_is_blank() {
        let cases = [
            sources(None, None),
            sources(Some(""), None),
            sources(None, Some("")),
            sources(Some("   "), Some("\t\n")),
        ];
        for case in cases {
            let key = case.resolve();
            assert_eq!(key.as_str(), PLACEHOLDER_KEY);
            assert!(!key.as_str().is_empty());
            assert!(key.is_placeholder());
        }
    }

    #[test]
    fn test_resolve_prefers_trimmed_injected_value() {
        let key = sources(Some("  abc  "), Some("xyz")).resolve();
        assert_eq!(key.as_str(), "abc");
        assert!(!key.is_placeholder());
    }

    #[test]
    fn test_resolve_falls_through_blank_injected_value() {
        let key = sources(Some("   "), Some(" pk_live_123 ")).resolve();
        assert_eq!(key.as_str(), "pk_live_123");
    }

    #[test]
    fn test_resolve_treats_literal_placeholder_as_unconfigured() {
        let key = sources(Some(PLACEHOLDER_KEY), None).resolve();
        assert!(key.is_placeholder());
    }

    #[test]
    fn test_build_env_ignores_blank_values() {
        assert_eq!(build_env(None, "fallback"), "fallback");
        assert_eq!(build_env(Some("  "), "fallback"), "fallback");
        assert_eq!(build_env(Some(" https://pay.example/x "), "fallback"), "https://pay.example/x");
    }

    #[test]
    fn test_login_timeout_parsing() {
        let default = Duration::from_secs(DEFAULT_LOGIN_TIMEOUT_SECS);
        assert_eq!(login_timeout(None), default);
        assert_eq!(login_timeout(Some("0")), default);
        assert_eq!(login_timeout(Some("soon")), default);
        assert_eq!(login_timeout(Some(" 90 ")), Duration::from_secs(90));
    }
}
