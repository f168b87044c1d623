use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="not-found">
            <h1>{"404"}</h1>
            <p>{"This page doesn't exist."}</p>
            <Link<Route> to={Route::Home} classes="primary-button">
                {"Back to home"}
            </Link<Route>>
            <style>
                {r#"
                .not-found {
                    min-height: 70vh;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    gap: 1.5rem;
                    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                    color: #0f172a;
                }
                .not-found h1 {
                    font-size: 4rem;
                    font-weight: 700;
                    color: #16a34a;
                }
                .not-found .primary-button {
                    padding: 0.75rem 1.5rem;
                    border-radius: 9999px;
                    background: #16a34a;
                    color: #ffffff;
                    text-decoration: none;
                    font-weight: 600;
                }
                "#}
            </style>
        </div>
    }
}
