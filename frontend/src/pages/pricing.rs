use yew::prelude::*;

use crate::components::redirect::Redirect;
use crate::config::ExternalLinks;
use crate::content::{Price, PricingPlan, PricingTier, Variant};

#[derive(Properties, PartialEq, Clone)]
pub struct CheckoutButtonProps {
    pub tier: PricingTier,
    pub featured: bool,
    pub links: ExternalLinks,
}

#[derive(Properties, PartialEq)]
pub struct PricingProps {
    pub variant: Variant,
    pub links: ExternalLinks,
}

#[function_component(CheckoutButton)]
pub fn checkout_button(props: &CheckoutButtonProps) -> Html {
    let onclick = {
        let redirect = Redirect::checkout(props.tier, &props.links);
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            redirect.follow();
        })
    };

    html! {
        <button class={classes!("checkout-button", props.featured.then(|| "featured"))} {onclick}>
            <b>{"Get Started"}</b>
        </button>
    }
}

fn plan_card(plan: &PricingPlan, links: &ExternalLinks) -> Html {
    html! {
        <div class={classes!("pricing-card", plan.featured.then(|| "featured"))}>
            <div class="card-header">
                <h3>{plan.name}</h3>
                <div class="price">
                    {
                        match plan.price {
                            Price::Monthly(amount) => html! {
                                <>
                                    <span class="amount">{amount}</span>
                                    <span class="period">{"/mo"}</span>
                                </>
                            },
                            Price::Custom => html! { <span class="amount">{"Custom"}</span> },
                        }
                    }
                </div>
            </div>
            <p class="leads">{plan.leads}</p>
            <CheckoutButton tier={plan.tier} featured={plan.featured} links={links.clone()} />
        </div>
    }
}

#[function_component(Pricing)]
pub fn pricing(props: &PricingProps) -> Html {
    let plans = props.variant.content().plans;

    html! {
        <section id="pricing" class="pricing-container">
            <div class="pricing-header">
                <h2>{"Simple. Performance-Based Pricing."}</h2>
                <p>{"No hidden fees. No commitments. Scale up or down with your business."}</p>
            </div>

            <div class="pricing-grid">
                { for plans.iter().map(|plan| plan_card(plan, &props.links)) }
            </div>

            <style>
                {r#"
                .pricing-container {
                    background: #ffffff;
                    border-top: 1px solid #e2e8f0;
                    padding: 6rem 1.5rem;
                }

                .pricing-header {
                    text-align: center;
                    margin-bottom: 4rem;
                }

                .pricing-header h2 {
                    font-size: 2.25rem;
                    font-weight: 700;
                    margin-bottom: 1.5rem;
                }

                .pricing-header p {
                    font-size: 1.25rem;
                    color: #475569;
                    max-width: 42rem;
                    margin: 0 auto;
                }

                .pricing-grid {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 2rem;
                    max-width: 64rem;
                    margin: 0 auto;
                }

                .pricing-card {
                    background: #ffffff;
                    border: 1px solid #e2e8f0;
                    border-radius: 16px;
                    padding: 2rem;
                    display: flex;
                    flex-direction: column;
                }

                .pricing-card.featured {
                    background: #16a34a;
                    color: #ffffff;
                    border: 2px solid #16a34a;
                    transform: scale(1.05);
                }

                .card-header h3 {
                    font-size: 1.5rem;
                    font-weight: 700;
                    margin-bottom: 0.5rem;
                }

                .price {
                    margin-bottom: 1.5rem;
                }

                .price .amount {
                    font-size: 2.25rem;
                    font-weight: 700;
                }

                .price .period {
                    color: #94a3b8;
                }

                .leads {
                    font-weight: 500;
                    color: #475569;
                    margin-bottom: 2rem;
                }

                .pricing-card.featured .leads {
                    color: #f0fdf4;
                }

                .checkout-button {
                    width: 100%;
                    margin-top: auto;
                    padding: 0.75rem 1.5rem;
                    border-radius: 9999px;
                    border: none;
                    background: #16a34a;
                    color: #ffffff;
                    font-size: 1rem;
                    cursor: pointer;
                    box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);
                    transition: all 0.2s ease;
                }

                .checkout-button:hover {
                    background: #15803d;
                }

                .checkout-button.featured {
                    background: #ffffff;
                    color: #16a34a;
                }

                .checkout-button.featured:hover {
                    background: #f0fdf4;
                }

                @media (max-width: 1024px) {
                    .pricing-grid {
                        grid-template-columns: repeat(2, 1fr);
                    }
                    .pricing-card.featured {
                        transform: none;
                    }
                }

                @media (max-width: 640px) {
                    .pricing-container {
                        padding: 3rem 1rem;
                    }
                    .pricing-grid {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </section>
    }
}
