use bars_traits::BridgeError;
use wasm_bindgen::{JsCast, JsValue};

/// Convert a JavaScript exception into a [`BridgeError`], keeping the
/// browser's message when one exists.
pub fn js_error(context: &str, err: JsValue) -> BridgeError {
    let message = if err.is_string() {
        err.as_string().unwrap_or_default()
    } else if let Some(js_err) = err.dyn_ref::<js_sys::Error>() {
        js_err.message().into()
    } else {
        format!("{err:?}")
    };
    BridgeError::OperationFailed(format!("{context}: {message}"))
}
