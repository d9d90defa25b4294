//! Clipboard writes for the copy buttons.

use egui::Context;

/// Copies `text` to the system clipboard through egui.
///
/// Best effort: egui hands the text to the platform on the next frame and
/// gives no feedback on failure.
pub fn copy_to_clipboard(ctx: &Context, what: &str, text: &str) {
    log::debug!("Copying {what} to clipboard");
    ctx.copy_text(text.to_owned());
}
