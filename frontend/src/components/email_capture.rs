use log::info;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::auth::magic::MagicHandle;
use crate::auth::submission::{Submission, SubmissionController, SubmissionState};

#[derive(Properties, PartialEq)]
pub struct EmailCaptureProps {
    pub handle: Option<MagicHandle>,
    /// False while the publishable key is still the placeholder.
    pub key_configured: bool,
}

#[function_component(EmailCapture)]
pub fn email_capture(props: &EmailCaptureProps) -> Html {
    let email = use_state(String::new);
    let state = use_state(SubmissionState::default);

    let controller = {
        let state = state.clone();
        use_memo(
            move |handle: &Option<MagicHandle>| {
                let setter = state.setter();
                SubmissionController::new(
                    handle.clone(),
                    Callback::from(move |next: SubmissionState| setter.set(next)),
                )
            },
            props.handle.clone(),
        )
    };

    let oninput = {
        let email = email.clone();
        let controller = controller.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
            controller.reset();
        })
    };

    let onsubmit = {
        let email = email.clone();
        let controller = controller.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            match controller.submit(&email) {
                Submission::InFlight(task) => spawn_local(async move {
                    let outcome = task.await;
                    info!("Magic link login settled: {:?}", outcome);
                }),
                Submission::Settled(outcome) => info!("Magic link login not sent: {:?}", outcome),
                Submission::Ignored => {}
            }
        })
    };

    let busy = state.is_busy();
    let status = state.status_line(props.key_configured);

    html! {
        <div id="get-started" class="email-capture">
            <form class="email-capture-form" {onsubmit}>
                <input
                    type="email"
                    placeholder="Work email"
                    value={(*email).clone()}
                    {oninput}
                />
                <button type="submit" class="primary-button" disabled={busy}>
                    { if busy { "Sending..." } else { "Get Started" } }
                </button>
            </form>
            if let Some(message) = status {
                <div class="status-message">{message}</div>
            }
            <style>
                {r#"
                .email-capture-form {
                    display: flex;
                    gap: 1rem;
                    margin-bottom: 1.5rem;
                    width: 100%;
                }

                .email-capture-form input {
                    flex: 1;
                    border-radius: 9999px;
                    border: 1px solid #cbd5e1;
                    padding: 1rem 1.5rem;
                    font-size: 1rem;
                    transition: box-shadow 0.2s ease;
                }

                .email-capture-form input:focus {
                    outline: none;
                    box-shadow: 0 0 0 2px #22c55e;
                }

                .primary-button {
                    padding: 0.75rem 1.5rem;
                    border-radius: 9999px;
                    border: none;
                    background: #16a34a;
                    color: #ffffff;
                    font-weight: 600;
                    font-size: 1rem;
                    white-space: nowrap;
                    cursor: pointer;
                    box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);
                    transition: all 0.2s ease;
                }

                .primary-button:hover {
                    background: #15803d;
                }

                .primary-button:disabled {
                    opacity: 0.5;
                    cursor: not-allowed;
                }

                .status-message {
                    display: inline-block;
                    max-width: 28rem;
                    font-size: 0.875rem;
                    background: rgba(255, 255, 255, 0.7);
                    border: 1px solid #e2e8f0;
                    border-radius: 9999px;
                    padding: 1rem;
                    animation: fadeIn 0.3s ease;
                }

                @keyframes fadeIn {
                    from { opacity: 0; }
                    to { opacity: 1; }
                }

                @media (max-width: 640px) {
                    .email-capture-form {
                        flex-direction: column;
                    }
                }
                "#}
            </style>
        </div>
    }
}
