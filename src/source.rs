use color_eyre::{
    eyre::{bail, WrapErr},
    Result,
};
use reqwest::{Client, Url};
use tracing::debug;

use crate::loader::LOG_PATH;

/// Anything that can produce the log text once. The production implementation
/// talks HTTP; tests substitute canned results.
#[allow(async_fn_in_trait)]
pub trait TextSource {
    async fn fetch_text(&self) -> Result<String>;
}

/// The HTTP source for the bot's log, rooted at the dashboard base URL.
#[derive(Debug, Clone)]
pub struct LogSource {
    client: Client,
    base: Url,
}

impl LogSource {
    pub fn new(base_url: &str) -> Result<Self> {
        let base = Url::parse(base_url)
            .wrap_err_with(|| format!("invalid base url {base_url}"))?;
        let client = Client::builder()
            .build()
            .wrap_err("failed to build http client")?;
        Ok(Self { client, base })
    }

    fn log_url(&self) -> Result<Url> {
        self.base
            .join(LOG_PATH)
            .wrap_err_with(|| format!("cannot resolve {LOG_PATH} against {}", self.base))
    }
}

impl TextSource for LogSource {
    /// One GET of the log resource. A non-success status is a failure whose
    /// message is the status line, so `404 Not Found` reads as-is downstream.
    async fn fetch_text(&self) -> Result<String> {
        let url = self.log_url()?;
        debug!(%url, "requesting log");
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            bail!("{status}");
        }
        let body = response.text().await?;
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{routing::get, Router};
    use tokio::net::TcpListener;

    /// Serves the router on an ephemeral port and returns a base URL shaped
    /// like the dashboard's, so `../logs/bot.log` resolves one level up.
    async fn serve(router: Router) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
        let addr = listener.local_addr().expect("local addr");
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("serve");
        });
        format!("http://{addr}/web/")
    }

    #[tokio::test]
    async fn fetches_the_log_body() {
        let router =
            Router::new().route("/logs/bot.log", get(|| async { "2024-01-01 INFO boot" }));
        let base = serve(router).await;
        let source = LogSource::new(&base).expect("source");
        let body = source.fetch_text().await.expect("fetch");
        assert_eq!(body, "2024-01-01 INFO boot");
    }

    #[tokio::test]
    async fn empty_log_comes_back_as_empty_string() {
        let router = Router::new().route("/logs/bot.log", get(|| async { "" }));
        let base = serve(router).await;
        let source = LogSource::new(&base).expect("source");
        let body = source.fetch_text().await.expect("fetch");
        assert_eq!(body, "");
    }

    #[tokio::test]
    async fn missing_log_fails_with_the_status_line() {
        let base = serve(Router::new()).await;
        let source = LogSource::new(&base).expect("source");
        let err = source.fetch_text().await.expect_err("should fail");
        assert_eq!(err.to_string(), "404 Not Found");
    }

    #[tokio::test]
    async fn unreachable_server_fails_with_a_transport_error() {
        // Port 1 is reserved and nothing listens on it.
        let source = LogSource::new("http://127.0.0.1:1/web/").expect("source");
        let err = source.fetch_text().await.expect_err("should fail");
        assert!(!err.to_string().is_empty());
    }

    #[test]
    fn rejects_an_unparseable_base_url() {
        assert!(LogSource::new("not a url").is_err());
    }

    #[test]
    fn log_path_resolves_one_level_above_the_dashboard() {
        let source = LogSource::new("http://127.0.0.1:8080/web/").expect("source");
        let url = source.log_url().expect("join");
        assert_eq!(url.as_str(), "http://127.0.0.1:8080/logs/bot.log");
    }
}
