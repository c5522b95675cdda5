use yew::prelude::*;

use super::header::SectionHeader;
use crate::components::reveal::Reveal;
use crate::content::FEATURES;
use crate::motion::reveal::Motion;

#[function_component(Features)]
pub fn features() -> Html {
    html! {
        <section class="features-section">
            <div class="feature-grid-bg"></div>

            <div class="section-container">
                <SectionHeader
                    title="Game Features"
                    lead="Experience tower defense like never before with our innovative VR gameplay mechanics"
                />

                <div class="features-grid">
                    {
                        FEATURES.iter().enumerate().map(|(index, feature)| html! {
                            <Reveal
                                key={feature.title}
                                motion={Motion::fade_up().duration(0.5).delay(0.1 * index as f64)}
                                class={classes!("glass-card", "feature-card", feature.accent.class())}
                            >
                                <div class="feature-icon">{feature.icon}</div>
                                <h3>{feature.title}</h3>
                                <p>{feature.description}</p>
                            </Reveal>
                        }).collect::<Html>()
                    }
                </div>
            </div>

            <style>
                {r#"
                    .features-section {
                        position: relative;
                        padding: 6rem 0;
                        overflow: hidden;
                    }

                    .feature-grid-bg {
                        position: absolute;
                        inset: 0;
                        opacity: 0.3;
                        background-image:
                            linear-gradient(rgba(255, 255, 255, 0.04) 1px, transparent 1px),
                            linear-gradient(90deg, rgba(255, 255, 255, 0.04) 1px, transparent 1px);
                        background-size: 40px 40px;
                    }

                    .features-grid {
                        position: relative;
                        display: grid;
                        grid-template-columns: repeat(3, 1fr);
                        gap: 2rem;
                    }

                    .feature-card {
                        padding: 1.5rem;
                        border-radius: 0.75rem;
                        border: 1px solid rgba(255, 255, 255, 0.1);
                    }

                    .feature-card:hover {
                        border-color: rgba(255, 255, 255, 0.2);
                    }

                    .feature-card.accent-purple {
                        background: linear-gradient(to bottom right, rgba(139, 92, 246, 0.2), rgba(139, 92, 246, 0.05));
                    }

                    .feature-card.accent-purple-light {
                        background: linear-gradient(to bottom right, rgba(167, 139, 250, 0.2), rgba(167, 139, 250, 0.05));
                    }

                    .feature-card.accent-blue {
                        background: linear-gradient(to bottom right, rgba(14, 165, 233, 0.2), rgba(14, 165, 233, 0.05));
                    }

                    .feature-icon {
                        font-size: 2.5rem;
                        margin-bottom: 1rem;
                    }

                    .feature-card h3 {
                        font-family: 'Orbitron', sans-serif;
                        font-size: 1.25rem;
                        font-weight: 600;
                        margin-bottom: 0.75rem;
                    }

                    .feature-card p {
                        color: #d1d5db;
                    }

                    @media (max-width: 1024px) {
                        .features-grid {
                            grid-template-columns: repeat(2, 1fr);
                        }
                    }

                    @media (max-width: 768px) {
                        .features-grid {
                            grid-template-columns: 1fr;
                        }
                    }
                "#}
            </style>
        </section>
    }
}
