use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::motion::reveal::Motion;

#[derive(Properties, PartialEq)]
pub struct SectionHeaderProps {
    pub title: AttrValue,
    #[prop_or_default]
    pub lead: Option<AttrValue>,
}

/// Title, gradient divider and optional lead paragraph, revealed in sequence.
#[function_component(SectionHeader)]
pub fn section_header(props: &SectionHeaderProps) -> Html {
    html! {
        <div class="section-header">
            <Reveal motion={Motion::fade_up()}>
                <h2 class="section-title">{props.title.clone()}</h2>
            </Reveal>
            <Reveal motion={Motion::fade().delay(0.2)}>
                <div class="section-divider"></div>
            </Reveal>
            {
                if let Some(lead) = &props.lead {
                    html! {
                        <Reveal motion={Motion::fade().delay(0.3)}>
                            <p class="section-lead">{lead.clone()}</p>
                        </Reveal>
                    }
                } else {
                    html! {}
                }
            }
        </div>
    }
}
