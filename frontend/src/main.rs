use yew::prelude::*;
use yew_router::prelude::*;
use yew_hooks::prelude::*;
use log::{info, Level};
use web_sys::{window, MouseEvent};

mod config;
mod content;
mod auth {
    pub mod magic;
    pub mod submission;
}
mod components {
    pub mod email_capture;
    pub mod redirect;
}
mod pages {
    pub mod faq;
    pub mod landing;
    pub mod not_found;
    pub mod pricing;
}

use components::redirect::Redirect;
use config::{ExternalLinks, SiteConfig};
use content::Variant;
use pages::{landing::Landing, not_found::NotFound};

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/misslead")]
    MissLead,
    #[at("/assistantlady")]
    AssistantLady,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    /// Brand shown on this route; `/` follows the licensed domain.
    pub fn variant(&self, home: Variant) -> Option<Variant> {
        match self {
            Route::Home => Some(home),
            Route::MissLead => Some(Variant::MissLead),
            Route::AssistantLady => Some(Variant::AssistantLady),
            Route::NotFound => None,
        }
    }
}

fn host_variant() -> Variant {
    let host = window()
        .and_then(|w| w.location().hostname().ok())
        .unwrap_or_default();
    Variant::from_hostname(&host)
}

fn switch(route: Route, home: Variant, config: &SiteConfig) -> Html {
    match route.variant(home) {
        Some(variant) => {
            info!("Rendering {:?} landing page", variant);
            html! { <Landing {variant} config={config.clone()} /> }
        }
        None => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub home: Variant,
    pub links: ExternalLinks,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let menu_open = use_bool_toggle(false);
    let (_, scroll_y) = use_window_scroll();
    let route = use_route::<Route>().unwrap_or(Route::Home);
    let brand = &route.variant(props.home).unwrap_or(props.home).content().brand;

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.toggle();
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    let book_demo = {
        let redirect = Redirect::schedule_demo(&props.links);
        let close = close_menu.clone();
        Callback::from(move |e: MouseEvent| {
            close.emit(e);
            redirect.follow();
        })
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class={classes!("top-nav", (scroll_y > 80.0).then(|| "scrolled"))}>
            <div class="nav-content">
                <a href="#" class="nav-logo">
                    <span>{brand.logo_lead}</span>
                    <span class="accent">{brand.logo_accent}</span>
                </a>

                <button class="burger-menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    <a href="#features" class="nav-link" onclick={close_menu.clone()}>{"Features"}</a>
                    <a href="#how-it-works" class="nav-link" onclick={close_menu.clone()}>{"How It Works"}</a>
                    <a href="#pricing" class="nav-link" onclick={close_menu.clone()}>{"Pricing"}</a>
                    <a href="#faq" class="nav-link" onclick={close_menu}>{"FAQ"}</a>
                    <button class="nav-demo-button" onclick={book_demo}>{"Book Demo"}</button>
                </div>
            </div>
            <style>
                {r#"
                .top-nav {
                    position: sticky;
                    top: 0;
                    z-index: 50;
                    width: 100%;
                    background: rgba(255, 255, 255, 0.8);
                    backdrop-filter: blur(4px);
                    border-bottom: 1px solid #e2e8f0;
                    transition: box-shadow 0.3s ease;
                }

                .top-nav.scrolled {
                    box-shadow: 0 4px 12px rgba(15, 23, 42, 0.08);
                }

                .nav-content {
                    max-width: 80rem;
                    margin: 0 auto;
                    padding: 1rem 1.5rem;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }

                .nav-logo {
                    font-size: 1.5rem;
                    font-weight: 700;
                    color: #0f172a;
                    text-decoration: none;
                    white-space: nowrap;
                }

                .nav-right {
                    display: flex;
                    align-items: center;
                    gap: 2rem;
                }

                .nav-link {
                    color: #475569;
                    text-decoration: none;
                    transition: color 0.2s ease;
                }

                .nav-link:hover {
                    color: #0f172a;
                }

                .nav-demo-button {
                    padding: 0.5rem 1.25rem;
                    border-radius: 9999px;
                    border: 2px solid #16a34a;
                    background: transparent;
                    color: #16a34a;
                    font-weight: 600;
                    cursor: pointer;
                }

                .nav-demo-button:hover {
                    background: #f0fdf4;
                }

                .burger-menu {
                    display: none;
                    flex-direction: column;
                    gap: 4px;
                    background: none;
                    border: none;
                    cursor: pointer;
                }

                .burger-menu span {
                    width: 24px;
                    height: 2px;
                    background: #0f172a;
                }

                @media (max-width: 768px) {
                    .burger-menu {
                        display: flex;
                    }
                    .nav-right {
                        display: none;
                    }
                    .nav-right.mobile-menu-open {
                        display: flex;
                        flex-direction: column;
                        position: absolute;
                        top: 100%;
                        left: 0;
                        right: 0;
                        background: #ffffff;
                        padding: 1.5rem;
                        gap: 1.25rem;
                        border-bottom: 1px solid #e2e8f0;
                    }
                }
                "#}
            </style>
        </nav>
    }
}

#[function_component]
fn App() -> Html {
    let config = use_state(SiteConfig::from_host);
    let home = use_state(host_variant);

    let render = {
        let config = (*config).clone();
        let home = *home;
        move |route: Route| switch(route, home, &config)
    };

    html! {
        <BrowserRouter>
            <Nav home={*home} links={config.links.clone()} />
            <Switch<Route> {render} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_variants() {
        assert_eq!(Route::Home.variant(Variant::MissLead), Some(Variant::MissLead));
        assert_eq!(Route::Home.variant(Variant::AssistantLady), Some(Variant::AssistantLady));
        assert_eq!(Route::MissLead.variant(Variant::AssistantLady), Some(Variant::MissLead));
        assert_eq!(Route::AssistantLady.variant(Variant::MissLead), Some(Variant::AssistantLady));
        assert_eq!(Route::NotFound.variant(Variant::MissLead), None);
    }

    #[test]
    fn test_route_paths() {
        assert_eq!(Route::recognize("/misslead"), Some(Route::MissLead));
        assert_eq!(Route::recognize("/"), Some(Route::Home));
        assert_eq!(Route::MissLead.to_path(), "/misslead");
    }
}
