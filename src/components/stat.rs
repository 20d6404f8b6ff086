use yew::prelude::*;

use crate::reveal::component::Reveal;
use crate::reveal::controller::RevealConfig;

#[derive(Properties, PartialEq)]
pub struct StatProps {
    pub value: AttrValue,
    pub label: AttrValue,
    pub reveal: RevealConfig,
}

#[function_component(Stat)]
pub fn stat(props: &StatProps) -> Html {
    html! {
        <Reveal config={props.reveal} class="stat">
            <div class="stat-value">{ props.value.clone() }</div>
            <div class="stat-label">{ props.label.clone() }</div>
        </Reveal>
    }
}
