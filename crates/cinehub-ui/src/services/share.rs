//! Platform share integration with a clipboard fallback.
//!
//! The Web Share API is feature-detected at runtime; browsers without it get
//! the share URL copied to the clipboard instead.

use gloo::utils::window;
use js_sys::{Function, Object, Promise, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

/// Outcome of a share attempt, used to pick the confirmation toast.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShareOutcome {
    /// The platform share sheet handled the payload.
    Shared,
    /// The URL was copied to the clipboard.
    Copied,
    /// Neither path succeeded (or the user dismissed the sheet).
    Failed,
}

/// Share a movie link via the platform sheet, falling back to the clipboard.
pub async fn share_movie(title: &str, text: &str, url: &str) -> ShareOutcome {
    let navigator = window().navigator();
    let navigator_value: &JsValue = navigator.as_ref();

    let share_fn = Reflect::get(navigator_value, &JsValue::from_str("share"))
        .ok()
        .and_then(|value| value.dyn_into::<Function>().ok());
    if let Some(share) = share_fn {
        let data = Object::new();
        let data_value: &JsValue = data.as_ref();
        let _ = Reflect::set(&data, &JsValue::from_str("title"), &JsValue::from_str(title));
        let _ = Reflect::set(&data, &JsValue::from_str("text"), &JsValue::from_str(text));
        let _ = Reflect::set(&data, &JsValue::from_str("url"), &JsValue::from_str(url));
        if let Ok(result) = share.call1(navigator_value, data_value)
            && let Ok(promise) = result.dyn_into::<Promise>()
        {
            return match JsFuture::from(promise).await {
                Ok(_) => ShareOutcome::Shared,
                Err(_) => ShareOutcome::Failed,
            };
        }
        return ShareOutcome::Failed;
    }

    match JsFuture::from(navigator.clipboard().write_text(url)).await {
        Ok(_) => ShareOutcome::Copied,
        Err(_) => ShareOutcome::Failed,
    }
}
