use yew::prelude::*;

use super::header::SectionHeader;
use crate::components::reveal::Reveal;
use crate::content::{Testimonial, TESTIMONIALS};
use crate::motion::reveal::Motion;

fn star_row(testimonial: &Testimonial) -> Html {
    testimonial
        .stars()
        .map(|filled| {
            html! {
                <span class={classes!("star", filled.then(|| "filled"))}>{"★"}</span>
            }
        })
        .collect()
}

#[function_component(Testimonials)]
pub fn testimonials() -> Html {
    html! {
        <section class="testimonials-section">
            <div class="testimonials-glow"></div>

            <div class="section-container">
                <SectionHeader title="What Players Are Saying" />

                <div class="testimonials-grid">
                    {
                        TESTIMONIALS.iter().enumerate().map(|(index, testimonial)| html! {
                            <Reveal
                                key={testimonial.author}
                                motion={Motion::fade_up().duration(0.5).delay(0.1 * index as f64)}
                                class="glass-card testimonial-card"
                            >
                                <div class="stars" aria-label={format!("{} out of 5 stars", testimonial.filled_stars())}>
                                    { star_row(testimonial) }
                                </div>
                                <blockquote>
                                    <p>{format!("\"{}\"", testimonial.quote)}</p>
                                </blockquote>
                                <footer>
                                    <p class="testimonial-author">{testimonial.author}</p>
                                </footer>
                            </Reveal>
                        }).collect::<Html>()
                    }
                </div>
            </div>

            <style>
                {r#"
                    .testimonials-section {
                        position: relative;
                        padding: 6rem 0;
                        overflow: hidden;
                    }

                    .testimonials-glow {
                        position: absolute;
                        top: 50%;
                        left: 50%;
                        width: 70vw;
                        height: 50vh;
                        transform: translate(-50%, -50%);
                        border-radius: 50%;
                        background: rgba(139, 92, 246, 0.05);
                        filter: blur(150px);
                        pointer-events: none;
                    }

                    .testimonials-grid {
                        display: grid;
                        grid-template-columns: repeat(3, 1fr);
                        gap: 2rem;
                    }

                    .testimonial-card {
                        display: flex;
                        flex-direction: column;
                        height: 100%;
                        padding: 2rem;
                        border-radius: 0.75rem;
                    }

                    .stars {
                        display: flex;
                        margin-bottom: 1rem;
                    }

                    .star {
                        font-size: 1.125rem;
                        color: #4b5563;
                    }

                    .star.filled {
                        color: #8b5cf6;
                    }

                    .testimonial-card blockquote {
                        flex-grow: 1;
                        margin: 0 0 1rem;
                        color: #d1d5db;
                        font-style: italic;
                    }

                    .testimonial-author {
                        font-weight: 600;
                        color: #fff;
                    }

                    @media (max-width: 768px) {
                        .testimonials-grid {
                            grid-template-columns: 1fr;
                        }
                    }
                "#}
            </style>
        </section>
    }
}
