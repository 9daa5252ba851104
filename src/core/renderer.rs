/// Renderer trait for drawing a game snapshot with Ratatui
pub trait GameRenderer<S> {
    /// Render the snapshot plus the in-progress input line into the frame.
    ///
    /// Returns the cursor position when an input field is on screen.
    fn render(&self, frame: &mut ratatui::Frame, state: &S, input: &str) -> Option<(u16, u16)>;
}
