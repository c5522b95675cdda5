use gloo_timers::callback::Timeout;
use log::warn;
use web_sys::Element;
use yew::prelude::*;

use crate::config;
use crate::motion::observer::{intersection_supported, ViewportObserver};
use crate::motion::reveal::{Motion, RevealEvent, RevealState, Trigger};

/// Whatever keeps the reveal trigger alive; dropping it cancels the trigger.
enum Binding {
    Observer(ViewportObserver),
    Timer(Timeout),
}

/// Binds `node` to a reveal trigger and returns whether it has been revealed.
#[hook]
pub fn use_reveal(node: NodeRef, trigger: Trigger) -> bool {
    let state = use_reducer(RevealState::default);

    {
        let dispatcher = state.dispatcher();
        use_effect_with_deps(
            move |_| {
                let binding = match trigger {
                    Trigger::OnMount => Some(Binding::Timer(Timeout::new(
                        config::MOUNT_REVEAL_DELAY_MS,
                        move || dispatcher.dispatch(RevealEvent::Mounted),
                    ))),
                    Trigger::InView { threshold } => {
                        observe(&node, threshold, dispatcher).map(Binding::Observer)
                    }
                };
                move || drop(binding)
            },
            trigger,
        );
    }

    state.revealed()
}

fn observe(
    node: &NodeRef,
    threshold: f64,
    dispatcher: UseReducerDispatcher<RevealState>,
) -> Option<ViewportObserver> {
    let Some(element) = node.cast::<Element>() else {
        warn!("reveal target is not mounted, showing it as-is");
        dispatcher.dispatch(RevealEvent::Unsupported);
        return None;
    };
    if !intersection_supported() {
        warn!("IntersectionObserver unavailable, revealing content immediately");
        dispatcher.dispatch(RevealEvent::Unsupported);
        return None;
    }

    let on_enter = {
        let dispatcher = dispatcher.clone();
        move || dispatcher.dispatch(RevealEvent::Visibility(true))
    };
    match ViewportObserver::observe(&element, threshold, on_enter) {
        Ok(observer) => Some(observer),
        Err(err) => {
            warn!("could not observe reveal target: {:?}", err);
            dispatcher.dispatch(RevealEvent::Unsupported);
            None
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub motion: Motion,
    #[prop_or_default]
    pub trigger: Trigger,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Wraps its children in a block that animates in once revealed.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let revealed = use_reveal(node.clone(), props.trigger);

    html! {
        <div
            ref={node}
            class={props.class.clone()}
            style={props.motion.style(revealed)}
        >
            { for props.children.iter() }
        </div>
    }
}
