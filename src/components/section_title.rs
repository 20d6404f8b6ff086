use yew::prelude::*;

use crate::content::SectionCopy;

#[derive(Properties, PartialEq)]
pub struct SectionTitleProps {
    pub copy: &'static SectionCopy,
}

#[function_component(SectionTitle)]
pub fn section_title(props: &SectionTitleProps) -> Html {
    let SectionCopy { kicker, title, subtitle } = props.copy;

    html! {
        <div class="section-title">
            {
                if let Some(kicker) = kicker {
                    html! { <div class="section-kicker">{ *kicker }</div> }
                } else {
                    html! {}
                }
            }
            <h2>{ *title }</h2>
            {
                if let Some(subtitle) = subtitle {
                    html! { <p class="section-subtitle">{ *subtitle }</p> }
                } else {
                    html! {}
                }
            }
        </div>
    }
}
