use chrono::{Datelike, Utc};
use yew::prelude::*;

use crate::auth::magic::{HandleCache, MagicSdk};
use crate::components::email_capture::EmailCapture;
use crate::components::redirect::{scroll_to, Redirect};
use crate::config::{ExternalLinks, SiteConfig};
use crate::content::{LandingContent, Variant};
use crate::pages::faq::Faq;
use crate::pages::pricing::Pricing;

#[derive(Properties, PartialEq)]
pub struct LandingProps {
    pub variant: Variant,
    pub config: SiteConfig,
}

#[function_component(Landing)]
pub fn landing(props: &LandingProps) -> Html {
    let content = props.variant.content();
    let handles = use_mut_ref(HandleCache::default);

    // Scroll to top whenever the brand changes
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            props.variant,
        );
    }

    let handle = {
        let timeout = props.config.login_timeout;
        handles.borrow_mut().get(&props.config.publishable_key, props.config.surface, |key| {
            MagicSdk::connect(key, timeout)
        })
    };
    let key_configured = !props.config.publishable_key.is_placeholder();

    html! {
        <div class="landing-page">
            <section class="hero">
                <div class="hero-copy">
                    <div class="hero-badge">{content.brand.badge}</div>
                    <h1>{"Meet "}<span class="accent">{content.brand.name}</span></h1>
                    <p class="hero-lead">
                        <strong>{"Bottom line:"}</strong>
                        {format!(" {} answers calls and qualifies leads 24/7, so you never miss an opportunity.", content.brand.name)}
                    </p>
                    <p class="hero-sub">
                        <strong>{"Briefly:"}</strong>
                        {" Real-time qualification, automatic appointment booking, and relentless follow-up, all handled professionally."}
                    </p>
                    <EmailCapture {handle} {key_configured} />
                </div>
                <div class="hero-visual">
                    <img src={content.brand.hero_image} alt={content.brand.hero_alt} loading="lazy" />
                </div>
            </section>

            { brand_showcase(content) }
            { metrics(content) }
            { features(content) }
            { showcase(content, &props.config.links) }
            { workflow(content) }
            { differentiators(content) }

            <Pricing variant={props.variant} links={props.config.links.clone()} />
            <Faq entries={content.faq} />

            { final_cta(content, &props.config.links) }
            { footer(content) }

            <style>{LANDING_CSS}</style>
        </div>
    }
}

fn brand_showcase(content: &LandingContent) -> Html {
    let Some(showcase) = content.brand_showcase.as_ref() else {
        return html! {};
    };
    html! {
        <section id="brand" class="brand-showcase">
            <h2>{showcase.title}</h2>
            <p>{showcase.subtitle}</p>
            <div class="brand-frame">
                <img src={showcase.image} alt={showcase.image_alt} loading="lazy" />
            </div>
        </section>
    }
}

fn metrics(content: &LandingContent) -> Html {
    html! {
        <section class="metrics">
            { for content.metrics.iter().map(|metric| html! {
                <div class="metric">
                    <p class="metric-value">{metric.value}</p>
                    <p class="metric-label">{metric.label}</p>
                </div>
            }) }
        </section>
    }
}

fn features(content: &LandingContent) -> Html {
    html! {
        <section id="features" class="features">
            <h2>{format!("What {} Does For You", content.brand.name)}</h2>
            <div class="feature-grid">
                { for content.features.iter().map(|feature| html! {
                    <div class="feature-card">
                        <div class="feature-icon">{feature.icon}</div>
                        <h3>{feature.title}</h3>
                        <p>{feature.description}</p>
                    </div>
                }) }
            </div>
        </section>
    }
}

fn demo_button(label: &'static str, class: &'static str, links: &ExternalLinks) -> Html {
    let redirect = Redirect::schedule_demo(links);
    let onclick = Callback::from(move |_: MouseEvent| redirect.follow());
    html! {
        <button class={class} {onclick}>{label}</button>
    }
}

fn showcase(content: &LandingContent, links: &ExternalLinks) -> Html {
    let Some(showcase) = content.showcase.as_ref() else {
        return html! {};
    };
    html! {
        <section class="showcase">
            <div class="showcase-visual">
                <img src={showcase.image} alt={showcase.image_alt} loading="lazy" />
            </div>
            <div class="showcase-copy">
                <h2>{showcase.title}</h2>
                <p><strong>{"Bottom line: "}</strong>{showcase.bottom_line}</p>
                <p><strong>{"Briefly: "}</strong>{showcase.briefly}</p>
                <div class="button-row">
                    { demo_button("Watch Demo", "primary-button", links) }
                    { demo_button("Contact Sales", "outline-button", links) }
                </div>
            </div>
        </section>
    }
}

fn workflow(content: &LandingContent) -> Html {
    let last = content.workflow.len().saturating_sub(1);
    html! {
        <section id="how-it-works" class="workflow">
            <h2>{format!("The {} Workflow", content.brand.name)}</h2>
            <div class="workflow-grid">
                { for content.workflow.iter().enumerate().map(|(i, step)| html! {
                    <div class="workflow-step">
                        <div class="step-card">
                            <div class="step-number">{step.step}</div>
                            <h3>{step.title}</h3>
                            <p>{step.description}</p>
                        </div>
                        if i < last {
                            <div class="step-arrow">{"→"}</div>
                        }
                    </div>
                }) }
            </div>
        </section>
    }
}

fn differentiators(content: &LandingContent) -> Html {
    if content.differentiators.is_empty() {
        return html! {};
    }
    html! {
        <section class="differentiators">
            <h2>{format!("Why {} Stands Apart", content.brand.name)}</h2>
            <div class="differentiator-grid">
                { for content.differentiators.iter().map(|item| html! {
                    <div class="differentiator-card">
                        <h3>{item.title}</h3>
                        <p>{item.description}</p>
                    </div>
                }) }
            </div>
        </section>
    }
}

fn final_cta(content: &LandingContent, links: &ExternalLinks) -> Html {
    let start_trial = Callback::from(|_: MouseEvent| scroll_to("get-started"));
    html! {
        <section class="final-cta">
            <h2>{"Stop Leaving Money on the Table"}</h2>
            <p>
                {format!(
                    "Every missed lead is a missed commission. {} ensures you capture every opportunity, qualify faster, and close more deals.",
                    content.brand.name
                )}
            </p>
            <div class="button-row">
                <button class="light-button" onclick={start_trial}>{"Start Free Trial"}</button>
                { demo_button("Schedule Demo", "outline-button light", links) }
            </div>
        </section>
    }
}

fn footer(content: &LandingContent) -> Html {
    let year = Utc::now().year();
    html! {
        <footer class="site-footer">
            <div class="footer-grid">
                <div>
                    <p class="footer-brand">{content.brand.name}</p>
                    <p>{"AI-powered lead management for real estate professionals."}</p>
                </div>
                { for content.footer.iter().map(|column| html! {
                    <div>
                        <p class="footer-title">{column.title}</p>
                        <ul>
                            { for column.links.iter().map(|link| html! {
                                <li><a href={link.href}>{link.label}</a></li>
                            }) }
                        </ul>
                    </div>
                }) }
            </div>
            <div class="footer-bottom">
                <p>
                    {format!(
                        "© {} {}. All rights reserved. | Licensed domains: {}",
                        year, content.brand.name, content.brand.licensed_domains
                    )}
                </p>
            </div>
        </footer>
    }
}

const LANDING_CSS: &str = r#"
.landing-page {
    min-height: 100vh;
    background: linear-gradient(to bottom, #f8fafc, #ffffff, #f1f5f9);
    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
    color: #0f172a;
    overflow-x: hidden;
}

.landing-page h2 {
    font-size: 2.25rem;
    font-weight: 700;
    text-align: center;
    margin-bottom: 4rem;
}

.accent {
    color: #16a34a;
}

.hero {
    max-width: 80rem;
    margin: 0 auto;
    padding: 6rem 1.5rem;
    display: grid;
    grid-template-columns: 1fr 1fr;
    gap: 4rem;
    align-items: center;
}

.hero-badge {
    display: inline-block;
    background: #f0fdf4;
    border: 1px solid #bbf7d0;
    border-radius: 9999px;
    padding: 0.5rem 1rem;
    margin-bottom: 1.5rem;
    font-size: 0.875rem;
    font-weight: 600;
    color: #15803d;
}

.hero h1 {
    font-size: 3.75rem;
    font-weight: 700;
    letter-spacing: -0.025em;
    margin-bottom: 1.5rem;
}

.hero-lead {
    font-size: 1.25rem;
    color: #475569;
    line-height: 1.6;
    margin-bottom: 1rem;
}

.hero-sub {
    font-size: 1.125rem;
    color: #64748b;
    line-height: 1.6;
    margin-bottom: 2.5rem;
}

.hero-visual img,
.showcase-visual img {
    width: 100%;
    max-width: 28rem;
    margin: 0 auto;
    display: block;
    filter: drop-shadow(0 20px 25px rgba(0, 0, 0, 0.15));
}

.brand-showcase {
    background: linear-gradient(to right, #f0fdf4, #eff6ff);
    padding: 6rem 1.5rem;
    text-align: center;
}

.brand-showcase h2 {
    margin-bottom: 1rem;
}

.brand-showcase p {
    color: #475569;
    font-size: 1.125rem;
    margin-bottom: 3rem;
}

.brand-frame {
    max-width: 42rem;
    height: 24rem;
    margin: 0 auto;
    overflow: hidden;
    border-radius: 16px;
    box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);
}

.brand-frame img {
    width: 100%;
    height: 100%;
    object-fit: cover;
}

.metrics {
    background: #ffffff;
    border-top: 1px solid #e2e8f0;
    border-bottom: 1px solid #e2e8f0;
    padding: 4rem 1.5rem;
    display: grid;
    grid-template-columns: repeat(4, 1fr);
    gap: 2rem;
    text-align: center;
}

.metric-value {
    font-size: 2.25rem;
    font-weight: 700;
    color: #16a34a;
    margin-bottom: 0.5rem;
}

.metric-label {
    color: #475569;
}

.features,
.differentiators {
    max-width: 72rem;
    margin: 0 auto;
    padding: 6rem 1.5rem;
}

.feature-grid {
    display: grid;
    grid-template-columns: repeat(2, 1fr);
    gap: 3rem;
}

.feature-card {
    background: #ffffff;
    border: 1px solid #e2e8f0;
    border-radius: 16px;
    padding: 2rem;
    transition: box-shadow 0.3s ease;
}

.feature-card:hover {
    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
}

.feature-icon {
    font-size: 2.25rem;
    margin-bottom: 1rem;
}

.feature-card h3,
.differentiator-card h3 {
    font-size: 1.25rem;
    font-weight: 600;
    margin-bottom: 0.75rem;
}

.feature-card p,
.differentiator-card p,
.showcase-copy p {
    color: #475569;
    line-height: 1.6;
}

.showcase {
    max-width: 72rem;
    margin: 0 auto;
    padding: 6rem 1.5rem;
    display: grid;
    grid-template-columns: 1fr 1fr;
    gap: 3rem;
    align-items: center;
}

.showcase-copy h2 {
    text-align: left;
    margin-bottom: 1.5rem;
}

.showcase-copy p {
    font-size: 1.125rem;
    margin-bottom: 1.5rem;
}

.button-row {
    display: flex;
    gap: 1rem;
}

.outline-button,
.light-button {
    padding: 0.75rem 2rem;
    border-radius: 9999px;
    font-weight: 600;
    font-size: 1rem;
    cursor: pointer;
    transition: all 0.2s ease;
}

.outline-button {
    background: transparent;
    border: 2px solid #16a34a;
    color: #16a34a;
}

.outline-button:hover {
    background: #f0fdf4;
}

.outline-button.light {
    border-color: #ffffff;
    color: #ffffff;
}

.outline-button.light:hover {
    background: #15803d;
}

.light-button {
    background: #ffffff;
    border: none;
    color: #16a34a;
}

.light-button:hover {
    background: #f8fafc;
}

.workflow {
    background: #0f172a;
    color: #ffffff;
    padding: 6rem 1.5rem;
}

.workflow-grid {
    max-width: 72rem;
    margin: 0 auto;
    display: grid;
    grid-template-columns: repeat(5, 1fr);
    gap: 1.5rem;
}

.workflow-step {
    position: relative;
}

.step-card {
    background: #1e293b;
    border: 1px solid #334155;
    border-radius: 12px;
    padding: 1.5rem;
    height: 100%;
}

.step-number {
    width: 2.5rem;
    height: 2.5rem;
    background: #16a34a;
    border-radius: 9999px;
    display: flex;
    align-items: center;
    justify-content: center;
    font-weight: 700;
    margin-bottom: 1rem;
}

.step-card h3 {
    font-weight: 600;
    font-size: 1.125rem;
    margin-bottom: 0.5rem;
}

.step-card p {
    color: #cbd5e1;
    font-size: 0.875rem;
}

.step-arrow {
    position: absolute;
    top: 25%;
    right: -0.75rem;
    color: #16a34a;
    font-size: 1.5rem;
}

.differentiator-grid {
    display: grid;
    grid-template-columns: repeat(3, 1fr);
    gap: 2rem;
}

.differentiator-card {
    background: linear-gradient(to bottom right, #f0fdf4, #ffffff);
    border: 1px solid #bbf7d0;
    border-radius: 16px;
    padding: 2rem;
}

.final-cta {
    background: linear-gradient(to right, #16a34a, #15803d);
    color: #ffffff;
    padding: 6rem 1.5rem;
    text-align: center;
}

.final-cta h2 {
    font-size: 3rem;
    margin-bottom: 1.5rem;
}

.final-cta p {
    font-size: 1.25rem;
    max-width: 42rem;
    margin: 0 auto 2.5rem;
    opacity: 0.95;
}

.final-cta .button-row {
    justify-content: center;
}

.site-footer {
    background: #0f172a;
    color: #cbd5e1;
    padding: 3rem 1.5rem;
}

.footer-grid {
    max-width: 72rem;
    margin: 0 auto 2rem;
    display: grid;
    grid-template-columns: repeat(4, 1fr);
    gap: 3rem;
    font-size: 0.875rem;
}

.footer-brand,
.footer-title {
    color: #ffffff;
    font-weight: 600;
    margin-bottom: 1rem;
}

.site-footer ul {
    list-style: none;
    padding: 0;
}

.site-footer li {
    margin-bottom: 0.5rem;
}

.site-footer a {
    color: inherit;
    text-decoration: none;
}

.site-footer a:hover {
    color: #ffffff;
}

.footer-bottom {
    border-top: 1px solid #334155;
    padding-top: 2rem;
    text-align: center;
    font-size: 0.875rem;
}

@media (max-width: 1024px) {
    .workflow-grid {
        grid-template-columns: repeat(2, 1fr);
    }
    .step-arrow {
        display: none;
    }
    .footer-grid {
        grid-template-columns: repeat(2, 1fr);
    }
}

@media (max-width: 768px) {
    .hero,
    .showcase,
    .feature-grid,
    .differentiator-grid {
        grid-template-columns: 1fr;
    }
    .metrics {
        grid-template-columns: repeat(2, 1fr);
    }
    .hero h1 {
        font-size: 2.25rem;
    }
    .landing-page h2,
    .final-cta h2 {
        font-size: 1.75rem;
        margin-bottom: 2rem;
    }
    .button-row {
        flex-direction: column;
    }
}

@media (max-width: 640px) {
    .workflow-grid,
    .footer-grid {
        grid-template-columns: 1fr;
    }
    .hero {
        padding: 3rem 1rem;
    }
}
"#;
