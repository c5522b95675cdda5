use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::config;
use crate::content::{GAME_TITLE, HERO_BADGES};
use crate::motion::reveal::{Motion, Trigger};

#[function_component(Hero)]
pub fn hero() -> Html {
    html! {
        <section class="hero">
            <div class="hero-pattern"></div>
            <div class="hero-glow"></div>

            <div class="hero-content">
                <Reveal trigger={Trigger::OnMount} motion={Motion::fade_down()} class="hero-badge-row">
                    <span class="hero-badge">{"🥽 Meta Quest Exclusive"}</span>
                </Reveal>

                <Reveal trigger={Trigger::OnMount} motion={Motion::fade().duration(0.8).delay(0.2)}>
                    <h1 class="hero-title">
                        <span class="gradient-text">{GAME_TITLE}</span>
                        <br />
                        <span>{"VR Tower Defense"}</span>
                    </h1>
                </Reveal>

                <Reveal trigger={Trigger::OnMount} motion={Motion::fade().duration(0.8).delay(0.4)}>
                    <p class="hero-subtitle">
                        {"Immerse yourself in a breathtaking virtual reality world where strategy meets action. Build, upgrade, and defend against waves of enemies in the most immersive tower defense experience ever created."}
                    </p>
                </Reveal>

                <Reveal trigger={Trigger::OnMount} motion={Motion::fade_up().delay(0.6)} class="hero-cta-group">
                    <a href={config::STORE_URL} target="_blank" rel="noopener noreferrer" class="hero-cta primary btn-3d">
                        {"Get it on Meta Quest"}
                    </a>
                    <a href={config::TRAILER_URL} class="hero-cta outline btn-3d">
                        {"Watch Trailer"}
                    </a>
                </Reveal>

                <Reveal trigger={Trigger::OnMount} motion={Motion::fade().duration(0.8).delay(0.8)} class="hero-feature-badges">
                    {
                        HERO_BADGES.iter().map(|badge| html! {
                            <div class="hero-feature-badge" key={badge.text}>
                                <span class="badge-icon">{badge.icon}</span>
                                <span>{badge.text}</span>
                            </div>
                        }).collect::<Html>()
                    }
                </Reveal>
            </div>

            <Reveal trigger={Trigger::OnMount} motion={Motion::fade().duration(0.8).delay(1.0)} class="scroll-indicator">
                <span>{"Scroll to explore"}</span>
                <span class="chevron">{"⌄"}</span>
            </Reveal>

            <div class="gradient-line"></div>

            <style>
                {r#"
                    .hero {
                        position: relative;
                        min-height: 100vh;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        padding: 0 1rem;
                        overflow: hidden;
                    }

                    .hero-pattern {
                        position: absolute;
                        inset: 0;
                        opacity: 0.7;
                        background: radial-gradient(circle at 20% 30%, rgba(139, 92, 246, 0.15), transparent 40%),
                                    radial-gradient(circle at 80% 70%, rgba(14, 165, 233, 0.12), transparent 40%);
                    }

                    .hero-glow {
                        position: absolute;
                        top: 50%;
                        left: 50%;
                        width: 50vw;
                        height: 50vw;
                        transform: translate(-50%, -50%);
                        border-radius: 50%;
                        background: rgba(139, 92, 246, 0.1);
                        filter: blur(100px);
                        pointer-events: none;
                    }

                    .hero-content {
                        position: relative;
                        z-index: 10;
                        max-width: 72rem;
                        margin: 0 auto;
                        text-align: center;
                    }

                    .hero-badge-row {
                        display: inline-block;
                        margin-bottom: 1.5rem;
                    }

                    .hero-badge {
                        display: inline-flex;
                        align-items: center;
                        padding: 0.375rem 1rem;
                        border-radius: 9999px;
                        font-size: 0.875rem;
                        color: #a78bfa;
                        background: rgba(139, 92, 246, 0.2);
                        border: 1px solid rgba(139, 92, 246, 0.3);
                    }

                    .hero-title {
                        font-family: 'Orbitron', sans-serif;
                        font-size: clamp(2.25rem, 6vw, 4.5rem);
                        font-weight: 700;
                        letter-spacing: -0.025em;
                        margin-bottom: 1.5rem;
                    }

                    .hero-subtitle {
                        max-width: 42rem;
                        margin: 0 auto 2rem;
                        font-size: 1.125rem;
                        line-height: 1.75;
                        color: #d1d5db;
                    }

                    .hero-cta-group {
                        display: flex;
                        flex-wrap: wrap;
                        gap: 1rem;
                        justify-content: center;
                        margin-bottom: 3rem;
                    }

                    .hero-cta {
                        padding: 1rem 2rem;
                        border-radius: 0.5rem;
                        font-size: 1.125rem;
                        font-weight: 600;
                        color: #fff;
                        text-decoration: none;
                    }

                    .hero-cta.primary {
                        background: linear-gradient(to right, #8b5cf6, #0ea5e9);
                        box-shadow: 0 10px 25px rgba(139, 92, 246, 0.2);
                        animation: glow-pulse 3s ease-in-out infinite;
                    }

                    .hero-cta.outline {
                        background: rgba(255, 255, 255, 0.05);
                        border: 1px solid rgba(255, 255, 255, 0.2);
                    }

                    .hero-feature-badges {
                        display: flex;
                        flex-wrap: wrap;
                        justify-content: center;
                        gap: 1rem;
                        margin-bottom: 3rem;
                    }

                    .hero-feature-badge {
                        display: flex;
                        align-items: center;
                        gap: 0.5rem;
                        padding: 0.5rem 1rem;
                        border-radius: 9999px;
                        font-size: 0.875rem;
                        color: #e5e7eb;
                        background: rgba(255, 255, 255, 0.05);
                        border: 1px solid rgba(255, 255, 255, 0.1);
                    }

                    .scroll-indicator {
                        position: absolute;
                        bottom: 2rem;
                        left: 50%;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        margin-left: -4rem;
                        width: 8rem;
                        font-size: 0.875rem;
                        color: #9ca3af;
                    }

                    .scroll-indicator .chevron {
                        font-size: 1.5rem;
                        animation: bounce 1s infinite;
                    }

                    @keyframes bounce {
                        0%, 100% { transform: translateY(-25%); }
                        50% { transform: translateY(0); }
                    }

                    @keyframes glow-pulse {
                        0%, 100% { box-shadow: 0 10px 25px rgba(139, 92, 246, 0.2); }
                        50% { box-shadow: 0 10px 35px rgba(139, 92, 246, 0.45); }
                    }
                "#}
            </style>
        </section>
    }
}
