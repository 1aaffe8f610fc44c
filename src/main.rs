use botlog::{app::App, config::Config, error, logging, tui};
use color_eyre::Result;

#[tokio::main]
async fn main() -> Result<()> {
    error::install_hooks()?;
    let _guard = logging::init()?;
    let config = Config::load()?;
    let app = App::new(&config)?;
    let terminal = tui::init()?;
    let result = app.run(terminal).await;
    tui::restore()?;
    result
}
