//! Status banner attached to a form or panel.
//!
//! A message box shows at most one message at a time; hiding it clears the
//! text so stale content can never reappear on the next show.

/// Visual tone of a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    /// Neutral informational text.
    Info,
    /// Operation succeeded.
    Success,
    /// Operation failed or input is invalid.
    Error,
}

/// Show/hide state of one status text slot.
#[derive(Debug, Clone, Default)]
pub struct MessageBox {
    content: Option<(Tone, String)>,
}

impl MessageBox {
    /// Creates a hidden message box.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Shows `text` with the given tone, replacing any current message.
    pub fn show(&mut self, tone: Tone, text: impl Into<String>) {
        self.content = Some((tone, text.into()));
    }

    /// Hides the box and clears the text.
    pub fn hide(&mut self) {
        self.content = None;
    }

    /// Returns whether a message is visible.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.content.is_some()
    }

    /// Returns the visible text, if any.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        self.content.as_ref().map(|(_, t)| t.as_str())
    }

    /// Returns the tone of the visible message, if any.
    #[must_use]
    pub fn tone(&self) -> Option<Tone> {
        self.content.as_ref().map(|(tone, _)| *tone)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_replaces_previous() {
        let mut msg = MessageBox::new();
        msg.show(Tone::Error, "wrong password");
        msg.show(Tone::Success, "saved");

        assert_eq!(msg.text(), Some("saved"));
        assert_eq!(msg.tone(), Some(Tone::Success));
    }

    #[test]
    fn test_hide_clears_text() {
        let mut msg = MessageBox::new();
        msg.show(Tone::Info, "check your inbox");
        msg.hide();

        assert!(!msg.is_visible());
        assert_eq!(msg.text(), None);
    }
}
