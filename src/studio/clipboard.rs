//! System clipboard access for `PaletteStudio`.

#[cfg(target_arch = "wasm32")]
use super::PaletteStudio;

#[cfg(target_arch = "wasm32")]
impl PaletteStudio {
    /// Fire-and-forget write; the returned promise is dropped, so a denied
    /// permission only surfaces in the browser console.
    pub(crate) fn copy_to_clipboard_internal(text: &str) {
        if let Some(window) = web_sys::window() {
            let clipboard = window.navigator().clipboard();
            let _ = clipboard.write_text(text);
        }
    }
}
