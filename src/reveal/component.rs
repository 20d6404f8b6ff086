use std::rc::Rc;

use log::{error, warn};
use web_sys::HtmlElement;
use yew::prelude::*;

use crate::reveal::controller::RevealConfig;
use crate::reveal::stage::{apply_frame, RevealStage};

/// Shared handle to the page's reveal stage. `None` when the browser could
/// not provide one, in which case content renders at rest.
#[derive(Clone)]
pub struct RevealContext {
    stage: Option<Rc<RevealStage>>,
}

impl RevealContext {
    pub fn stage(&self) -> Option<&RevealStage> {
        self.stage.as_deref()
    }

    pub fn is_live(&self) -> bool {
        self.stage.is_some()
    }
}

impl PartialEq for RevealContext {
    fn eq(&self, other: &Self) -> bool {
        match (&self.stage, &other.stage) {
            (Some(a), Some(b)) => Rc::ptr_eq(a, b),
            (None, None) => true,
            _ => false,
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct RevealProviderProps {
    #[prop_or_default]
    pub children: Children,
}

#[function_component(RevealProvider)]
pub fn reveal_provider(props: &RevealProviderProps) -> Html {
    let context = use_state(|| {
        let stage = match RevealStage::new() {
            Ok(stage) => Some(Rc::new(stage)),
            Err(err) => {
                error!("Scroll reveals disabled: {}", err);
                None
            }
        };
        RevealContext { stage }
    });

    html! {
        <ContextProvider<RevealContext> context={(*context).clone()}>
            { for props.children.iter() }
        </ContextProvider<RevealContext>>
    }
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    pub config: RevealConfig,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Wraps its children in a `div` that slides and fades into place once.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let context = use_context::<RevealContext>();
    let live = context.as_ref().map_or(false, RevealContext::is_live);

    {
        let node = node.clone();
        let config = props.config;
        use_effect_with_deps(
            move |context: &Option<RevealContext>| {
                let element = node.cast::<HtmlElement>();
                let stage = context.as_ref().and_then(RevealContext::stage);
                let subscription = match (stage, element) {
                    (Some(stage), Some(element)) => match stage.attach(element.clone(), config) {
                        Ok(subscription) => Some(subscription),
                        Err(err) => {
                            warn!("Showing element without reveal: {}", err);
                            if let Err(err) = apply_frame(&element, &config.final_frame()) {
                                error!("{}", err);
                            }
                            None
                        }
                    },
                    _ => None,
                };
                move || {
                    if let Some(subscription) = subscription {
                        subscription.unregister();
                    }
                }
            },
            context,
        );
    }

    // Start hidden only when something will bring the element back.
    let style = if live {
        props.config.initial_frame().to_css()
    } else {
        String::new()
    };

    html! {
        <div ref={node} class={props.class.clone()} style={style}>
            { for props.children.iter() }
        </div>
    }
}
