use color_eyre::{eyre::WrapErr, Result};
use crossterm::event::{
    Event::Key,
    KeyCode::{self, Char},
};
use tracing::{debug, error, info, trace};

use crate::{
    config::Config,
    display::DisplayRegion,
    event::{Event, Events, Outcome},
    loader,
    root::Root,
    source::LogSource,
    tui::Terminal,
};

pub struct App {
    events: Events,
    root: Root,
    display: DisplayRegion,
    source: LogSource,
}

impl App {
    pub fn new(config: &Config) -> Result<Self> {
        let events = Events::new();
        let display = DisplayRegion::default();
        let source = LogSource::new(&config.base_url)?;
        let root = Root::new(display.clone(), &config.base_url);
        Ok(Self {
            events,
            root,
            display,
            source,
        })
    }

    pub async fn run(mut self, mut terminal: Terminal) -> Result<()> {
        info!("Starting application");
        self.events.start();
        self.spawn_loader();
        self.main_loop(&mut terminal)
            .await
            .wrap_err("Running main loop failed")?;
        info!("Shutting down");
        Ok(())
    }

    /// The one-shot load, triggered here by the host exactly once per run.
    fn spawn_loader(&self) {
        let source = self.source.clone();
        let sink = self.display.clone();
        let tx = self.events.tx.clone();
        tokio::spawn(async move {
            loader::load(&source, &sink).await;
            if tx.send(Event::Settled).await.is_err() {
                error!("Event channel closed before the load settled");
            }
        });
    }

    async fn main_loop(&mut self, terminal: &mut Terminal) -> Result<()> {
        loop {
            self.draw(terminal)?;
            match self.events.next().await {
                Some(Event::Quit) => {
                    info!("Received quit event");
                    break;
                }
                Some(Event::Tick) => {
                    trace!("Received tick event");
                }
                Some(event) => {
                    if let Event::Crossterm(Key(key)) = event {
                        if key.code == KeyCode::Esc || key.code == Char('q') {
                            debug!("Received quit key");
                            break;
                        }
                    }
                    if self.root.handle_event(&event) == Outcome::Handled {
                        debug!(?event, "Event handled by root component");
                    }
                }
                None => {
                    error!("Event channel closed. Exiting as we won't receive any more events.");
                    break;
                }
            }
        }
        Ok(())
    }

    fn draw(&mut self, terminal: &mut Terminal) -> Result<()> {
        terminal
            .draw(|frame| frame.render_widget(&self.root, frame.size()))
            .wrap_err("failed to draw")?;
        Ok(())
    }
}
