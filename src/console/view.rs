use super::render::ScrollMetrics;
use super::status::Status;

/// The page elements the controller drives.
///
/// Methods take `&self`: DOM handles are shared, interior-mutable references,
/// and the controller only ever touches them from the single UI thread.
pub trait ConsoleView {
    // --- Output container ---
    /// Text currently displayed, used to seed the diff on page load.
    fn output_text(&self) -> String;
    fn scroll_metrics(&self) -> ScrollMetrics;
    fn replace_markup(&self, html: &str);
    fn scroll_to_bottom(&self);

    // --- Status indicator ---
    fn show_status(&self, status: &Status);

    // --- Command field ---
    fn input_value(&self) -> String;
    fn set_input_value(&self, value: &str);
    fn set_input_disabled(&self, disabled: bool);
    fn focus_input(&self);
}
