use tracing::debug;

use crate::{display::TextSink, source::TextSource};

/// Relative path of the bot's log, resolved against the dashboard base URL.
pub const LOG_PATH: &str = "../logs/bot.log";

/// Shown in place of the log when the file exists but is empty.
pub const NO_LOGS_PLACEHOLDER: &str = "لا توجد سجلات.";

/// Prepended to the failure message when the log cannot be retrieved.
pub const ERROR_PREFIX: &str = "❌ خطأ: ";

/// The settled result of one retrieval: either the decoded body or a
/// user-facing description of whatever went wrong.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Body(String),
    Failed(String),
}

impl Outcome {
    /// The string that goes into the display target. Exactly one of: the body
    /// verbatim, the empty-state placeholder, or the prefixed error message.
    #[must_use]
    pub fn rendered(self) -> String {
        match self {
            Self::Body(text) if text.is_empty() => NO_LOGS_PLACEHOLDER.to_owned(),
            Self::Body(text) => text,
            Self::Failed(message) => format!("{ERROR_PREFIX}{message}"),
        }
    }
}

/// Fetches the log once and writes the rendered outcome into the sink.
///
/// Every failure is absorbed here and turned into the error rendering; nothing
/// propagates to the caller and nothing is retried. The sink is written
/// exactly once, whichever branch is taken.
pub async fn load(source: &impl TextSource, sink: &impl TextSink) {
    let outcome = match source.fetch_text().await {
        Ok(body) => Outcome::Body(body),
        Err(report) => Outcome::Failed(report.to_string()),
    };
    sink.set_text(outcome.rendered());
    debug!("load settled");
}

#[cfg(test)]
mod tests {
    use super::*;
    use color_eyre::{eyre::eyre, Result};
    use indoc::indoc;
    use parking_lot::Mutex;

    struct StaticSource(Result<&'static str, &'static str>);

    impl TextSource for StaticSource {
        async fn fetch_text(&self) -> Result<String> {
            match self.0 {
                Ok(body) => Ok(body.to_owned()),
                Err(message) => Err(eyre!(message)),
            }
        }
    }

    #[derive(Default)]
    struct CapturedSink {
        writes: Mutex<Vec<String>>,
    }

    impl TextSink for CapturedSink {
        fn set_text(&self, text: String) {
            self.writes.lock().push(text);
        }
    }

    #[tokio::test]
    async fn body_is_rendered_verbatim() {
        let sink = CapturedSink::default();
        load(&StaticSource(Ok("2024-01-01 INFO boot")), &sink).await;
        assert_eq!(*sink.writes.lock(), vec!["2024-01-01 INFO boot"]);
    }

    #[tokio::test]
    async fn multiline_body_is_not_reflowed() {
        let body = indoc! {"
            2024-01-01 INFO boot
            2024-01-01 INFO فحص الاستطلاعات المكتملة
            2024-01-02 ERROR rate limited
        "};
        let sink = CapturedSink::default();
        load(&StaticSource(Ok(body)), &sink).await;
        assert_eq!(*sink.writes.lock(), vec![body.to_owned()]);
    }

    #[tokio::test]
    async fn empty_body_renders_the_placeholder() {
        let sink = CapturedSink::default();
        load(&StaticSource(Ok("")), &sink).await;
        assert_eq!(*sink.writes.lock(), vec![NO_LOGS_PLACEHOLDER.to_owned()]);
    }

    #[tokio::test]
    async fn failure_renders_the_prefixed_message() {
        let sink = CapturedSink::default();
        load(&StaticSource(Err("404 Not Found")), &sink).await;
        assert_eq!(*sink.writes.lock(), vec!["❌ خطأ: 404 Not Found".to_owned()]);
    }

    #[tokio::test]
    async fn sink_is_written_exactly_once_on_each_branch() {
        for source in [
            StaticSource(Ok("log line")),
            StaticSource(Ok("")),
            StaticSource(Err("connection refused")),
        ] {
            let sink = CapturedSink::default();
            load(&source, &sink).await;
            assert_eq!(sink.writes.lock().len(), 1);
        }
    }

    #[test]
    fn the_three_renderings_are_distinct() {
        let body = Outcome::Body("log line".to_owned()).rendered();
        let empty = Outcome::Body(String::new()).rendered();
        let failed = Outcome::Failed("404 Not Found".to_owned()).rendered();
        assert_ne!(body, empty);
        assert_ne!(body, failed);
        assert_ne!(empty, failed);
        assert_ne!(empty, "");
    }
}
