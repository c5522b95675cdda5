use yew::prelude::*;

use crate::content::{footer_href, FOOTER_COLUMNS, GAME_TITLE, SOCIAL_LINKS};

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="site-footer">
            <div class="top-rule"></div>

            <div class="section-container">
                <div class="footer-top">
                    <h2 class="footer-logo gradient-text">{GAME_TITLE}</h2>
                    <div class="social-links">
                        {
                            SOCIAL_LINKS.iter().map(|social| html! {
                                <a key={social.label} href="#" aria-label={social.label} class="social-link">
                                    {social.icon}
                                </a>
                            }).collect::<Html>()
                        }
                    </div>
                </div>

                <div class="footer-columns">
                    {
                        FOOTER_COLUMNS.iter().map(|column| html! {
                            <div key={column.title}>
                                <h3>{column.title}</h3>
                                <ul>
                                    {
                                        column.links.iter().map(|link| html! {
                                            <li key={*link}>
                                                <a href={footer_href(link)}>{*link}</a>
                                            </li>
                                        }).collect::<Html>()
                                    }
                                </ul>
                            </div>
                        }).collect::<Html>()
                    }
                </div>

                <div class="footer-bottom">
                    <p>{"© 2023 Defend The Realm. All rights reserved. Meta Quest is a trademark of Meta Platforms, Inc."}</p>
                    <div>{"Made with 💜 for VR enthusiasts"}</div>
                </div>
            </div>

            <style>
                {r#"
                    .site-footer {
                        position: relative;
                        padding: 3rem 0;
                        overflow: hidden;
                    }

                    .footer-top {
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                        margin-bottom: 2rem;
                    }

                    .footer-logo {
                        font-family: 'Orbitron', sans-serif;
                        font-size: 1.5rem;
                        font-weight: 700;
                    }

                    .social-links {
                        display: flex;
                        gap: 1rem;
                    }

                    .social-link {
                        width: 2.5rem;
                        height: 2.5rem;
                        border-radius: 50%;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        color: #fff;
                        text-decoration: none;
                        background: rgba(255, 255, 255, 0.05);
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        transition: background 0.2s ease;
                    }

                    .social-link:hover {
                        background: rgba(255, 255, 255, 0.1);
                    }

                    .footer-columns {
                        display: grid;
                        grid-template-columns: repeat(4, 1fr);
                        gap: 2rem;
                        margin-bottom: 2rem;
                    }

                    .footer-columns h3 {
                        font-weight: 600;
                        margin-bottom: 1rem;
                    }

                    .footer-columns ul {
                        list-style: none;
                        padding: 0;
                        margin: 0;
                    }

                    .footer-columns li {
                        margin-bottom: 0.5rem;
                    }

                    .footer-columns a {
                        color: #9ca3af;
                        text-decoration: none;
                        transition: color 0.2s ease;
                    }

                    .footer-columns a:hover {
                        color: #fff;
                    }

                    .footer-bottom {
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                        padding-top: 2rem;
                        border-top: 1px solid rgba(255, 255, 255, 0.1);
                        font-size: 0.875rem;
                        color: #9ca3af;
                    }

                    @media (max-width: 768px) {
                        .footer-top,
                        .footer-bottom {
                            flex-direction: column;
                            gap: 1.5rem;
                        }

                        .footer-columns {
                            grid-template-columns: repeat(2, 1fr);
                        }
                    }
                "#}
            </style>
        </footer>
    }
}
