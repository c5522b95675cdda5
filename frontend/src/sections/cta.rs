use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::config;
use crate::motion::reveal::Motion;

#[function_component(CallToAction)]
pub fn call_to_action() -> Html {
    html! {
        <section class="cta-section">
            <div class="cta-backdrop"></div>
            <div class="top-rule"></div>

            <div class="section-container">
                <Reveal motion={Motion::fade().duration(0.8)} class="glass-card cta-card">
                    <div class="cta-inner">
                        <div class="cta-glow"></div>
                        <div class="cta-icon">{"🥽"}</div>

                        <Reveal motion={Motion::fade_up().delay(0.2)}>
                            <h2 class="cta-title">{"Ready to Defend the Realm?"}</h2>
                        </Reveal>

                        <Reveal motion={Motion::fade().delay(0.3)}>
                            <p class="cta-text">
                                {"Jump into the most immersive tower defense experience ever created. Available exclusively on Meta Quest."}
                            </p>
                        </Reveal>

                        <Reveal motion={Motion::fade_up().delay(0.4)}>
                            <a href={config::STORE_URL} target="_blank" rel="noopener noreferrer" class="hero-cta primary btn-3d">
                                {"Get it on Meta Quest"}
                            </a>
                        </Reveal>
                    </div>
                </Reveal>
            </div>

            <style>
                {r#"
                    .cta-section {
                        position: relative;
                        padding: 6rem 0;
                        overflow: hidden;
                    }

                    .cta-backdrop {
                        position: absolute;
                        inset: 0;
                        background:
                            radial-gradient(circle at center, rgba(139, 92, 246, 0.15), transparent 70%),
                            #070b1a;
                    }

                    .cta-card {
                        position: relative;
                        z-index: 10;
                        border-radius: 1rem;
                        overflow: hidden;
                    }

                    .cta-inner {
                        position: relative;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        text-align: center;
                        padding: 4rem 2rem;
                    }

                    .cta-glow {
                        position: absolute;
                        top: 50%;
                        left: 50%;
                        width: 16rem;
                        height: 16rem;
                        transform: translate(-50%, -50%);
                        border-radius: 50%;
                        background: rgba(139, 92, 246, 0.2);
                        filter: blur(100px);
                        pointer-events: none;
                    }

                    .cta-icon {
                        font-size: 3rem;
                        margin-bottom: 1.5rem;
                    }

                    .cta-title {
                        font-family: 'Orbitron', sans-serif;
                        font-size: clamp(1.875rem, 4vw, 3rem);
                        font-weight: 700;
                        margin-bottom: 1rem;
                        background: linear-gradient(to right, #fff, #d1d5db);
                        -webkit-background-clip: text;
                        background-clip: text;
                        color: transparent;
                    }

                    .cta-text {
                        max-width: 42rem;
                        margin-bottom: 2rem;
                        font-size: 1.125rem;
                        color: #d1d5db;
                    }
                "#}
            </style>
        </section>
    }
}
