//! Async clipboard writes via the browser Clipboard API.

#![allow(clippy::unused_async)]

/// Copy `text` to the clipboard verbatim.
///
/// # Errors
///
/// Returns `Err(())` when the clipboard is unavailable or the browser
/// rejects the write; the caller decides how to tell the user.
pub async fn write_text(text: &str) -> Result<(), ()> {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return Err(());
        };
        let promise = window.navigator().clipboard().write_text(text);
        wasm_bindgen_futures::JsFuture::from(promise)
            .await
            .map(|_| ())
            .map_err(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = text;
        Err(())
    }
}
