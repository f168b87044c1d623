use log::{error, info};
use web_sys::window;

use crate::config::ExternalLinks;
use crate::content::PricingTier;

/// Navigation to an externally owned page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Redirect {
    SameTab(String),
    NewTab(String),
}

impl Redirect {
    pub fn checkout(tier: PricingTier, links: &ExternalLinks) -> Self {
        Redirect::SameTab(tier.checkout_url(links).to_string())
    }

    pub fn schedule_demo(links: &ExternalLinks) -> Self {
        Redirect::NewTab(links.schedule_demo.clone())
    }

    pub fn url(&self) -> &str {
        match self {
            Redirect::SameTab(url) | Redirect::NewTab(url) => url,
        }
    }

    pub fn follow(&self) {
        let Some(window) = window() else {
            error!("No window to redirect from");
            return;
        };
        info!("Redirecting to {}", self.url());
        let result = match self {
            Redirect::SameTab(url) => window.location().set_href(url),
            Redirect::NewTab(url) => window.open_with_url_and_target(url, "_blank").map(|_| ()),
        };
        if let Err(err) = result {
            error!("Redirect to {} failed: {:?}", self.url(), err);
        }
    }
}

/// Scrolls an element on the current page into view.
pub fn scroll_to(id: &str) {
    if let Some(element) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
    {
        element.scroll_into_view();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn links() -> ExternalLinks {
        ExternalLinks {
            starter_checkout: "https://pay.example/starter".to_string(),
            professional_checkout: "https://pay.example/pro".to_string(),
            enterprise_checkout: "https://pay.example/enterprise".to_string(),
            schedule_demo: "https://cal.example/demo".to_string(),
        }
    }

    #[test]
    fn test_checkout_replaces_current_page() {
        assert_eq!(
            Redirect::checkout(PricingTier::Professional, &links()),
            Redirect::SameTab("https://pay.example/pro".to_string())
        );
    }

    #[test]
    fn test_schedule_demo_opens_new_tab() {
        let redirect = Redirect::schedule_demo(&links());
        assert_eq!(redirect, Redirect::NewTab("https://cal.example/demo".to_string()));
        assert_eq!(redirect.url(), "https://cal.example/demo");
    }
}
