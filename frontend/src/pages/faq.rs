use yew::prelude::*;
use yew_hooks::prelude::*;
use web_sys::MouseEvent;

use crate::content::FaqEntry;

/// One question of the FAQ table, answer collapsed until clicked.
#[derive(Properties)]
struct QuestionProps {
    entry: &'static FaqEntry,
}

impl PartialEq for QuestionProps {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.entry, other.entry)
    }
}

#[function_component(Question)]
fn question(props: &QuestionProps) -> Html {
    let expanded = use_bool_toggle(false);

    let onclick = {
        let expanded = expanded.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            expanded.toggle();
        })
    };

    html! {
        <div class={classes!("faq-item", (*expanded).then(|| "open"))}>
            <button class="faq-question" aria-expanded={(*expanded).to_string()} {onclick}>
                <span class="question-text">{props.entry.question}</span>
                <span class="toggle-icon">{if *expanded { "−" } else { "+" }}</span>
            </button>
            <div class="faq-answer">
                <p>{props.entry.answer}</p>
            </div>
        </div>
    }
}

#[derive(Properties)]
pub struct FaqProps {
    pub entries: &'static [FaqEntry],
}

impl PartialEq for FaqProps {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.entries, other.entries)
    }
}

#[function_component(Faq)]
pub fn faq(props: &FaqProps) -> Html {
    html! {
        <section id="faq" class="faq-section">
            <h2>{"Frequently Asked Questions"}</h2>
            <div class="faq-list">
                { for props.entries.iter().map(|entry| html! { <Question {entry} /> }) }
            </div>

            <style>
                {r#"
                .faq-section {
                    max-width: 800px;
                    margin: 0 auto;
                    padding: 6rem 1.5rem;
                }

                .faq-section h2 {
                    font-size: 2.25rem;
                    font-weight: 700;
                    text-align: center;
                    margin-bottom: 3rem;
                    color: #0f172a;
                }

                .faq-item {
                    background: #ffffff;
                    border: 1px solid #e2e8f0;
                    border-radius: 12px;
                    margin-bottom: 1rem;
                    overflow: hidden;
                    transition: all 0.3s ease;
                }

                .faq-item:hover {
                    border-color: #86efac;
                }

                .faq-question {
                    width: 100%;
                    padding: 1.5rem;
                    background: none;
                    border: none;
                    color: #0f172a;
                    font-size: 1.1rem;
                    font-weight: 600;
                    text-align: left;
                    cursor: pointer;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    transition: all 0.3s ease;
                }

                .faq-question:hover {
                    color: #16a34a;
                }

                .toggle-icon {
                    font-size: 1.5rem;
                    color: #16a34a;
                    transition: transform 0.3s ease;
                }

                .faq-item.open .toggle-icon {
                    transform: rotate(180deg);
                }

                .faq-answer {
                    max-height: 0;
                    overflow: hidden;
                    transition: max-height 0.5s ease;
                    padding: 0 1.5rem;
                }

                .faq-item.open .faq-answer {
                    max-height: 600px;
                    padding: 0 1.5rem 1.5rem;
                }

                .faq-answer p {
                    color: #475569;
                    line-height: 1.6;
                }

                @media (max-width: 640px) {
                    .faq-section {
                        padding: 3rem 1rem;
                    }
                    .faq-section h2 {
                        font-size: 1.5rem;
                    }
                }
                "#}
            </style>
        </section>
    }
}
