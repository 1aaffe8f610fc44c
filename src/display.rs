use std::sync::Arc;

use parking_lot::RwLock;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

/// A capability for receiving the single rendered string. Keeps the loader
/// agnostic to whether it writes to the screen or to a test buffer.
pub trait TextSink {
    fn set_text(&self, text: String);
}

/// The display target: a shared text region owned by the host UI and written
/// exactly once by the loader.
#[derive(Debug, Default, Clone)]
pub struct DisplayRegion {
    text: Arc<RwLock<Option<String>>>,
}

impl DisplayRegion {
    #[must_use]
    pub fn text(&self) -> Option<String> {
        self.text.read().clone()
    }

    /// True once the loader has rendered into this region.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.text.read().is_some()
    }
}

impl TextSink for DisplayRegion {
    fn set_text(&self, text: String) {
        *self.text.write() = Some(text);
    }
}

impl Widget for &DisplayRegion {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let text = self.text().unwrap_or_default();
        Paragraph::new(text)
            .block(Block::default().borders(Borders::ALL).title("Bot Log"))
            .alignment(Alignment::Left)
            .wrap(Wrap { trim: false })
            .render(area, buf);
    }
}
