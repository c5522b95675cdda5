use web_sys::MouseEvent;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::components::nav_bar::NavBar;
use crate::navigation::anchor::intercept_click;
use crate::sections::{
    cta::CallToAction, features::Features, footer::Footer, gameplay::Gameplay, hero::Hero,
    testimonials::Testimonials,
};

#[function_component(Index)]
pub fn index() -> Html {
    // In-page fragment links scroll smoothly instead of jumping. The listener
    // lives as long as this page and is removed with it.
    use_event_with_window("click", move |e: MouseEvent| intercept_click(&e));

    html! {
        <div class="realm-page">
            <NavBar />
            <Hero />
            <div id="features">
                <Features />
            </div>
            <div id="gameplay">
                <Gameplay />
            </div>
            <div id="testimonials">
                <Testimonials />
            </div>
            <CallToAction />
            <Footer />

            <style>
                {r#"
                    html, body {
                        margin: 0;
                        padding: 0;
                        background: #0a0a14;
                    }

                    .realm-page {
                        min-height: 100vh;
                        color: #fff;
                        background: #0a0a14;
                        font-family: 'Inter', system-ui, sans-serif;
                        overflow: hidden;
                        animation: page-fade-in 0.5s ease;
                    }

                    .realm-page *,
                    .realm-page *::before,
                    .realm-page *::after {
                        box-sizing: border-box;
                    }

                    .section-container {
                        position: relative;
                        max-width: 72rem;
                        margin: 0 auto;
                        padding: 0 1rem;
                    }

                    .section-header {
                        text-align: center;
                        margin-bottom: 4rem;
                    }

                    .section-title {
                        font-family: 'Orbitron', sans-serif;
                        font-size: clamp(1.875rem, 3vw, 2.25rem);
                        font-weight: 700;
                        margin: 0 0 1rem;
                    }

                    .section-divider {
                        width: 5rem;
                        height: 0.25rem;
                        margin: 0 auto 1.5rem;
                        background: linear-gradient(to right, #8b5cf6, #0ea5e9);
                    }

                    .section-lead {
                        max-width: 42rem;
                        margin: 0 auto;
                        font-size: 1.125rem;
                        color: #d1d5db;
                    }

                    .gradient-text {
                        background: linear-gradient(to right, #a78bfa, #0ea5e9);
                        -webkit-background-clip: text;
                        background-clip: text;
                        color: transparent;
                    }

                    .glass-card {
                        background: rgba(255, 255, 255, 0.05);
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        backdrop-filter: blur(12px);
                        -webkit-backdrop-filter: blur(12px);
                    }

                    .btn-3d {
                        display: inline-block;
                        transition: transform 0.15s ease, box-shadow 0.15s ease;
                    }

                    .btn-3d:hover {
                        transform: translateY(-2px);
                    }

                    .btn-3d:active {
                        transform: translateY(1px);
                    }

                    .gradient-line,
                    .top-rule {
                        position: absolute;
                        left: 0;
                        width: 100%;
                        height: 1px;
                        background: linear-gradient(to right, transparent, rgba(139, 92, 246, 0.3), transparent);
                    }

                    .gradient-line {
                        bottom: 0;
                    }

                    .top-rule {
                        top: 0;
                    }

                    @keyframes page-fade-in {
                        from { opacity: 0; }
                        to { opacity: 1; }
                    }
                "#}
            </style>
        </div>
    }
}
