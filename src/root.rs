use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    widgets::Widget,
};
use tracing::info;

use crate::{
    display::DisplayRegion,
    event::{Event, Outcome},
    widgets::{StatusBar, TitleBar},
};

/// The root component: title bar, the log display region, and a status bar.
pub struct Root {
    display: DisplayRegion,
    title: String,
    settled: bool,
}

impl Root {
    pub fn new(display: DisplayRegion, base_url: &str) -> Self {
        Self {
            display,
            title: base_url.to_owned(),
            settled: false,
        }
    }

    /// Handles an event.
    /// Returns an `Outcome` that indicates whether the event was handled or not.
    pub fn handle_event(&mut self, event: &Event) -> Outcome {
        match event {
            Event::Settled => {
                info!("Log load settled");
                self.settled = true;
                Outcome::Handled
            }
            _ => Outcome::Ignored,
        }
    }

    fn status(&self) -> &'static str {
        if self.settled {
            "settled"
        } else {
            "loading..."
        }
    }
}

impl Widget for &Root {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if let [top, mid, bottom] = *Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(TitleBar::HEIGHT),
                Constraint::Min(0),
                Constraint::Length(StatusBar::HEIGHT),
            ])
            .split(area)
        {
            TitleBar::new(&self.title).render(top, buf);
            self.display.render(mid, buf);
            StatusBar::new(self.status()).render(bottom, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settles_on_the_settled_event_only() {
        let mut root = Root::new(DisplayRegion::default(), "http://127.0.0.1:8080/web/");
        assert_eq!(root.status(), "loading...");
        assert_eq!(root.handle_event(&Event::Tick), Outcome::Ignored);
        assert_eq!(root.handle_event(&Event::Settled), Outcome::Handled);
        assert_eq!(root.status(), "settled");
    }
}
