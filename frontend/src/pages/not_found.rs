use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="not-found">
            <h1>{"404"}</h1>
            <p>{"This part of the realm is still unexplored."}</p>
            <Link<Route> to={Route::Home} classes="not-found-link">
                {"Back to the landing page"}
            </Link<Route>>
            <style>
                {r#"
                    .not-found {
                        min-height: 100vh;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        color: #fff;
                        background: #0a0a14;
                        font-family: 'Inter', system-ui, sans-serif;
                    }

                    .not-found-link {
                        color: #a78bfa;
                    }
                "#}
            </style>
        </div>
    }
}
