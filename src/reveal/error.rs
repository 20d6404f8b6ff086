use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum RevealError {
    #[error("no browser window available")]
    NoWindow,

    #[error("window.performance is unavailable")]
    NoPerformance,

    #[error("failed to create intersection observer: {0}")]
    Observer(String),

    #[error("failed to schedule animation frame: {0}")]
    AnimationFrame(String),

    #[error("failed to update element: {0}")]
    Dom(String),
}

impl RevealError {
    pub(crate) fn observer(err: JsValue) -> Self {
        Self::Observer(describe(&err))
    }

    pub(crate) fn animation_frame(err: JsValue) -> Self {
        Self::AnimationFrame(describe(&err))
    }

    pub(crate) fn dom(err: JsValue) -> Self {
        Self::Dom(describe(&err))
    }
}

fn describe(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_failing_step() {
        assert_eq!(RevealError::NoWindow.to_string(), "no browser window available");
        assert_eq!(
            RevealError::Observer("TypeError".into()).to_string(),
            "failed to create intersection observer: TypeError"
        );
        assert_eq!(
            RevealError::Dom("style is read-only".into()).to_string(),
            "failed to update element: style is read-only"
        );
    }
}
