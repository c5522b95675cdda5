use yew::prelude::*;

use super::header::SectionHeader;
use crate::components::parallax::use_scroll_progress;
use crate::components::reveal::Reveal;
use crate::config;
use crate::content::{DETAIL_CARDS, STATS};
use crate::motion::parallax::{ParallaxFrame, ScrollRange};
use crate::motion::reveal::Motion;

#[function_component(Gameplay)]
pub fn gameplay() -> Html {
    let section = use_node_ref();
    let progress = use_scroll_progress(section.clone(), ScrollRange::ENTER_TO_EXIT);
    let frame = ParallaxFrame::at(progress);

    let [map_card, combat_card] = &DETAIL_CARDS;

    html! {
        <section ref={section} class="gameplay-section">
            <div class="section-container">
                <SectionHeader
                    title="Immersive Gameplay"
                    lead="Step into a world where you are the commander. Build, fight and defend in a fully immersive VR environment."
                />

                <div class="showcase">
                    <div class="showcase-frame" style={frame.style()}>
                        <img
                            src={config::GAMEPLAY_IMAGE_URL}
                            alt="VR Tower Defense Gameplay"
                            loading="lazy"
                        />
                        <div class="showcase-shade"></div>
                        <div class="play-overlay">
                            <button class="play-button" aria-label="Play trailer">
                                <svg width="24" height="24" viewBox="0 0 24 24" fill="none" xmlns="http://www.w3.org/2000/svg">
                                    <path d="M5 3L19 12L5 21V3Z" fill="white" />
                                </svg>
                            </button>
                        </div>
                    </div>

                    <Reveal motion={Motion::slide_from_left().delay(0.4)} class="glass-card detail-card left">
                        <h4>{map_card.title}</h4>
                        <p>{map_card.body}</p>
                    </Reveal>

                    <Reveal motion={Motion::slide_from_right().delay(0.6)} class="glass-card detail-card right">
                        <h4>{combat_card.title}</h4>
                        <p>{combat_card.body}</p>
                    </Reveal>
                </div>

                <div class="stats-grid">
                    {
                        STATS.iter().enumerate().map(|(index, stat)| html! {
                            <Reveal
                                key={stat.label}
                                motion={Motion::fade_up().duration(0.5).delay(0.2 * index as f64)}
                                class="glass-card stat-card"
                            >
                                <div class="stat-number gradient-text">{stat.number}</div>
                                <div class="stat-label">{stat.label}</div>
                            </Reveal>
                        }).collect::<Html>()
                    }
                </div>
            </div>

            <style>
                {r#"
                    .gameplay-section {
                        position: relative;
                        padding: 6rem 0;
                        overflow: hidden;
                        background: #070b1a;
                    }

                    .showcase {
                        position: relative;
                    }

                    .showcase-frame {
                        position: relative;
                        z-index: 10;
                        max-width: 56rem;
                        margin: 0 auto;
                        border-radius: 0.75rem;
                        overflow: hidden;
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        box-shadow: 0 25px 50px rgba(0, 0, 0, 0.5);
                        will-change: transform, opacity;
                    }

                    .showcase-frame img {
                        display: block;
                        width: 100%;
                        height: auto;
                        object-fit: cover;
                    }

                    .showcase-shade {
                        position: absolute;
                        inset: 0;
                        background: linear-gradient(to top, #070b1a, transparent 50%);
                    }

                    .play-overlay {
                        position: absolute;
                        inset: 0;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                    }

                    .play-button {
                        width: 5rem;
                        height: 5rem;
                        border-radius: 50%;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        cursor: pointer;
                        background: rgba(139, 92, 246, 0.8);
                        border: 1px solid rgba(255, 255, 255, 0.2);
                        box-shadow: 0 10px 15px rgba(139, 92, 246, 0.3);
                        transition: transform 0.2s ease;
                    }

                    .play-button:hover {
                        transform: scale(1.1);
                    }

                    .play-button:active {
                        transform: scale(0.95);
                    }

                    .detail-card {
                        position: absolute;
                        z-index: 20;
                        max-width: 250px;
                        padding: 1rem;
                        border-radius: 0.5rem;
                    }

                    .detail-card.left {
                        top: 25%;
                        left: -2rem;
                    }

                    .detail-card.right {
                        bottom: 25%;
                        right: -2rem;
                    }

                    .detail-card h4 {
                        font-size: 0.875rem;
                        font-weight: 600;
                        margin-bottom: 0.25rem;
                    }

                    .detail-card p {
                        font-size: 0.75rem;
                        color: #d1d5db;
                    }

                    .stats-grid {
                        display: grid;
                        grid-template-columns: repeat(3, 1fr);
                        gap: 1.5rem;
                        margin-top: 4rem;
                    }

                    .stat-card {
                        padding: 1.5rem;
                        border-radius: 0.5rem;
                        text-align: center;
                    }

                    .stat-number {
                        font-family: 'Orbitron', sans-serif;
                        font-size: 2.25rem;
                        font-weight: 700;
                        margin-bottom: 0.5rem;
                    }

                    .stat-label {
                        color: #d1d5db;
                    }

                    @media (max-width: 768px) {
                        .detail-card {
                            display: none;
                        }

                        .stats-grid {
                            grid-template-columns: 1fr;
                        }
                    }
                "#}
            </style>
        </section>
    }
}
