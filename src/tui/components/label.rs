use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::widgets::Paragraph;

/// Borderless read-only text.
#[derive(Debug, Clone)]
pub struct Label {
    text: String,
}

impl Label {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn display(&self) -> &str {
        &self.text
    }

    pub fn push_str(&mut self, text: &str) {
        self.text.push_str(text);
    }

    pub fn overwrite(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        frame.render_widget(Paragraph::new(self.text.as_str()), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_and_overwrite() {
        let mut label = Label::new("<Ctrl + c> to quit");
        label.push_str(" | log view");
        assert_eq!(label.display(), "<Ctrl + c> to quit | log view");
        label.overwrite("reset");
        assert_eq!(label.display(), "reset");
    }
}
