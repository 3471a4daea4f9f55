//! Application lifecycle: construction, the main loop and message draining.

use color_eyre::Result;
use crossterm::event::{self, Event, KeyEventKind};
use std::time::Instant;
use tokio::sync::mpsc;

use crate::client::TransferClient;
use crate::constants::TICK_RATE;
use crate::tui::Tui;
use crate::ui;

use super::{
    App, AppConfig, AppMessage, ClipboardManager, ClipboardWriter, CopyNotice, HistoryState,
    SearchWidget, UiState,
};

impl App {
    /// Creates the app using the system clipboard.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built from `config`.
    pub fn new(config: AppConfig) -> Result<Self> {
        Self::with_clipboard(config, Box::new(ClipboardManager::new()))
    }

    /// Creates the app with a custom clipboard backend.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built from `config`.
    pub fn with_clipboard(config: AppConfig, clipboard: Box<dyn ClipboardWriter>) -> Result<Self> {
        let (message_tx, message_rx) = mpsc::unbounded_channel();
        let client = TransferClient::new(&config.api_base_url, config.http_config())?;

        Ok(Self {
            history: HistoryState::new(config.wallet_address.as_deref()),
            search: SearchWidget::new(),
            copy_notice: CopyNotice::default(),
            ui: UiState::new(),
            config,
            exit: false,
            message_tx,
            message_rx,
            client,
            clipboard,
            persist_config: true,
        })
    }

    /// Runs the main application loop.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal operations fail.
    pub async fn run(&mut self, terminal: &mut Tui) -> Result<()> {
        self.load_transactions();

        let mut last_tick = Instant::now();
        terminal.draw(|frame| ui::render(self, frame))?;

        while !self.exit {
            self.process_messages();

            let timeout = TICK_RATE.saturating_sub(last_tick.elapsed());

            if event::poll(timeout)? {
                match event::read()? {
                    Event::Key(key)
                        if matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat) =>
                    {
                        self.handle_key_event(key);
                    }
                    Event::Mouse(mouse) => {
                        self.handle_mouse_event(mouse);
                    }
                    Event::Resize(_, _) => {
                        terminal.draw(|frame| ui::render(self, frame))?;
                    }
                    _ => {}
                }
            }

            if last_tick.elapsed() >= TICK_RATE {
                self.on_tick(Instant::now());
                terminal.draw(|frame| ui::render(self, frame))?;
                last_tick = Instant::now();
            }

            // Yield so spawned loads make progress on a current-thread runtime.
            tokio::task::yield_now().await;
        }

        Ok(())
    }

    /// Advances timers: the copy notice window and the toast countdown.
    pub(crate) fn on_tick(&mut self, now: Instant) {
        self.copy_notice.expire(now);
        self.ui.tick_toast();
    }

    /// Applies every message waiting in the channel.
    pub(crate) fn process_messages(&mut self) {
        while let Ok(message) = self.message_rx.try_recv() {
            match message {
                AppMessage::TransfersLoaded { ticket, result } => {
                    self.apply_transfers(ticket, result);
                }
            }
        }
    }
}
