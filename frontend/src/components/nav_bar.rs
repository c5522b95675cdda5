use gloo_timers::callback::Timeout;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::config;
use crate::content::{GAME_TITLE, SECTIONS};
use crate::navigation::state::{NavAction, NavState};

/// Keeps the overlay mounted while it fades out after closing.
#[hook]
fn use_overlay_mounted(open: bool) -> bool {
    let mounted = use_state(|| open);

    {
        let mounted = mounted.clone();
        use_effect_with_deps(
            move |open| {
                let exit = if *open {
                    mounted.set(true);
                    None
                } else {
                    Some(Timeout::new(config::MENU_EXIT_MS, move || mounted.set(false)))
                };
                // Reopening before the timer fires cancels the unmount.
                move || drop(exit)
            },
            open,
        );
    }

    open || *mounted
}

#[function_component(NavBar)]
pub fn nav_bar() -> Html {
    let state = use_reducer(NavState::default);

    {
        let dispatcher = state.dispatcher();
        use_effect_with_deps(
            move |_| {
                let destructor: Box<dyn FnOnce()> = if let Some(window) = web_sys::window() {
                    let scroll_callback = Closure::<dyn Fn()>::new({
                        let window = window.clone();
                        move || {
                            let offset = window.scroll_y().unwrap_or(0.0);
                            dispatcher.dispatch(NavAction::Scrolled(offset));
                        }
                    });
                    let _ = window.add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    );
                    // A reload can land mid-page, so evaluate once up front.
                    let _ = scroll_callback
                        .as_ref()
                        .unchecked_ref::<web_sys::js_sys::Function>()
                        .call0(&window);

                    Box::new(move || {
                        let _ = window.remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        );
                    })
                } else {
                    Box::new(|| ())
                };
                move || destructor()
            },
            (),
        );
    }

    let open_menu = {
        let dispatcher = state.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(NavAction::OpenMenu))
    };

    let close_menu = {
        let dispatcher = state.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(NavAction::CloseMenu))
    };

    // No prevent_default here: the page-level anchor handler still has to see
    // the click to scroll to the section.
    let follow_link = {
        let dispatcher = state.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(NavAction::FollowLink))
    };

    let menu_open = state.menu_open();
    let overlay_mounted = use_overlay_mounted(menu_open);

    html! {
        <>
            <header class={classes!("realm-nav", state.is_compact().then(|| "compact"))}>
                <div class="nav-content">
                    <a href="#" class="nav-logo gradient-text">{GAME_TITLE}</a>

                    <nav class="nav-links">
                        {
                            SECTIONS.iter().map(|(label, id)| html! {
                                <a key={*id} href={format!("#{}", id)} class="nav-link">{*label}</a>
                            }).collect::<Html>()
                        }
                        <a href={config::STORE_URL} target="_blank" rel="noopener noreferrer" class="nav-store-button btn-3d">
                            {"Get it on Meta Quest"}
                        </a>
                    </nav>

                    <button class="menu-button" aria-label="Open mobile menu" onclick={open_menu}>
                        <span></span>
                        <span></span>
                        <span></span>
                    </button>
                </div>
            </header>

            {
                if overlay_mounted {
                    html! {
                        <div class={classes!("mobile-menu", if menu_open { "open" } else { "closing" })}>
                            <div class="mobile-menu-close-row">
                                <button class="close-button" aria-label="Close mobile menu" onclick={close_menu}>
                                    {"✕"}
                                </button>
                            </div>
                            <div class="mobile-menu-links">
                                {
                                    SECTIONS.iter().enumerate().map(|(index, (label, id))| html! {
                                        <a
                                            key={*id}
                                            href={format!("#{}", id)}
                                            class="mobile-link"
                                            style={format!("animation-delay: {:.1}s;", 0.1 * index as f64)}
                                            onclick={follow_link.clone()}
                                        >
                                            {*label}
                                        </a>
                                    }).collect::<Html>()
                                }
                                <a
                                    href={config::STORE_URL}
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class="mobile-store-button"
                                    style="animation-delay: 0.4s;"
                                    onclick={follow_link.clone()}
                                >
                                    {"Get it on Meta Quest"}
                                </a>
                            </div>
                        </div>
                    }
                } else {
                    html! {}
                }
            }

            <style>
                {r#"
                    .realm-nav {
                        position: fixed;
                        top: 0;
                        left: 0;
                        right: 0;
                        z-index: 50;
                        padding: 1.25rem 0;
                        background: transparent;
                        transition: all 0.3s ease;
                    }

                    .realm-nav.compact {
                        padding: 0.75rem 0;
                        background: rgba(10, 10, 20, 0.8);
                        backdrop-filter: blur(16px);
                        -webkit-backdrop-filter: blur(16px);
                        box-shadow: 0 10px 15px rgba(0, 0, 0, 0.3);
                    }

                    .nav-content {
                        max-width: 72rem;
                        margin: 0 auto;
                        padding: 0 1rem;
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                    }

                    .nav-logo {
                        font-family: 'Orbitron', sans-serif;
                        font-size: 1.25rem;
                        font-weight: 700;
                        text-decoration: none;
                    }

                    .nav-links {
                        display: flex;
                        align-items: center;
                        gap: 2rem;
                    }

                    .nav-link {
                        color: #d1d5db;
                        text-decoration: none;
                        padding: 0.5rem 0;
                        transition: color 0.2s ease;
                    }

                    .nav-link:hover {
                        color: #fff;
                    }

                    .nav-store-button {
                        padding: 0.5rem 1rem;
                        border-radius: 0.375rem;
                        color: #fff;
                        text-decoration: none;
                        background: rgba(255, 255, 255, 0.1);
                        border: 1px solid rgba(255, 255, 255, 0.2);
                        backdrop-filter: blur(4px);
                    }

                    .nav-store-button:hover {
                        background: rgba(255, 255, 255, 0.2);
                    }

                    .menu-button {
                        display: none;
                        flex-direction: column;
                        gap: 5px;
                        background: none;
                        border: none;
                        cursor: pointer;
                        padding: 0.25rem;
                    }

                    .menu-button span {
                        display: block;
                        width: 24px;
                        height: 2px;
                        background: #fff;
                    }

                    .mobile-menu {
                        position: fixed;
                        inset: 0;
                        z-index: 60;
                        display: flex;
                        flex-direction: column;
                        background: rgba(10, 10, 20, 0.95);
                        backdrop-filter: blur(16px);
                        -webkit-backdrop-filter: blur(16px);
                        transition: opacity 0.3s ease;
                    }

                    .mobile-menu.open {
                        opacity: 1;
                        animation: menu-fade-in 0.3s ease;
                    }

                    .mobile-menu.closing {
                        opacity: 0;
                        pointer-events: none;
                    }

                    .mobile-menu-close-row {
                        display: flex;
                        justify-content: flex-end;
                        padding: 1rem;
                    }

                    .close-button {
                        background: none;
                        border: none;
                        color: #fff;
                        font-size: 1.5rem;
                        cursor: pointer;
                    }

                    .mobile-menu-links {
                        flex-grow: 1;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        gap: 2rem;
                    }

                    .mobile-link,
                    .mobile-store-button {
                        opacity: 0;
                        animation: menu-item-in 0.4s ease forwards;
                    }

                    .mobile-link {
                        font-size: 1.25rem;
                        color: #fff;
                        text-decoration: none;
                    }

                    .mobile-store-button {
                        margin-top: 1rem;
                        padding: 0.75rem 1.5rem;
                        border-radius: 0.375rem;
                        color: #fff;
                        text-decoration: none;
                        background: linear-gradient(to right, #8b5cf6, #0ea5e9);
                    }

                    @keyframes menu-fade-in {
                        from { opacity: 0; }
                        to { opacity: 1; }
                    }

                    @keyframes menu-item-in {
                        from { opacity: 0; transform: translateY(20px); }
                        to { opacity: 1; transform: translateY(0); }
                    }

                    @media (max-width: 768px) {
                        .nav-links {
                            display: none;
                        }

                        .menu-button {
                            display: flex;
                        }
                    }

                    @media (min-width: 769px) {
                        .mobile-menu {
                            display: none;
                        }
                    }
                "#}
            </style>
        </>
    }
}
