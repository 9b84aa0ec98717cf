use thiserror::Error;
use wasm_bindgen::JsValue;

/// A browser primitive the page relies on was missing or refused a request.
///
/// None of these are shown to the visitor. Callers log them and carry on with
/// whatever degraded behavior makes sense (a counter that never starts, a
/// link that doesn't scroll).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum HostError {
    #[error("browser window is not available")]
    NoWindow,

    #[error("document is not available")]
    NoDocument,

    #[error("no element with id `{0}`")]
    MissingElement(String),

    #[error("intersection observer could not be created: {0}")]
    Observer(String),

    #[error("animation frame request failed: {0}")]
    Frame(String),
}

impl HostError {
    pub fn observer(err: JsValue) -> Self {
        HostError::Observer(describe(&err))
    }

    pub fn frame(err: JsValue) -> Self {
        HostError::Frame(describe(&err))
    }
}

fn describe(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_missing_piece() {
        assert_eq!(HostError::NoWindow.to_string(), "browser window is not available");
        assert_eq!(
            HostError::MissingElement("contato".to_string()).to_string(),
            "no element with id `contato`"
        );
        assert_eq!(
            HostError::Frame("denied".to_string()).to_string(),
            "animation frame request failed: denied"
        );
    }
}
