use std::cell::Cell;
use std::rc::Rc;

use anyhow::Result;
use crossterm::event::KeyCode;
use rusqlite::Connection;
use tracing::{debug, warn};

use crate::art::{self, Artwork, GenerateOptions, SeedSource};
use crate::color::PALETTE;
use crate::db::SqliteStore;
use crate::theme::{EnvScheme, SchemeSource, SchemeWatcher, Subscription, ThemeController};
use crate::types::{Strategy, ThemeMode};
use crate::ui::UiTheme;

use super::{AppEvent, AppView};

/// The top-level preview state.
pub struct App<Src: SchemeSource = EnvScheme> {
    pub running: bool,
    pub view: AppView,
    pub title: String,
    pub strategy: Strategy,
    pub artwork: Option<Artwork>,
    pub status: Option<String>,
    /// Title being edited, if the edit prompt is open.
    pub title_input: Option<String>,
    pub theme: ThemeController<SqliteStore, UiTheme>,
    scheme: SchemeWatcher<Src>,
    system_change: Rc<Cell<Option<ThemeMode>>>,
    subscription: Option<Subscription>,
}

impl App {
    pub fn new(db: Connection, title: String) -> Result<Self> {
        Self::with_scheme(db, title, EnvScheme)
    }
}

impl<Src: SchemeSource> App<Src> {
    pub fn with_scheme(db: Connection, title: String, source: Src) -> Result<Self> {
        let mut scheme = SchemeWatcher::new(source);
        let theme = ThemeController::init(SqliteStore::new(db), UiTheme::default(), scheme.current())?;

        let system_change = Rc::new(Cell::new(None));
        let sink = system_change.clone();
        let subscription = scheme.subscribe(move |mode| sink.set(Some(mode)));

        let mut app = Self {
            running: true,
            view: AppView::Preview,
            title,
            strategy: Strategy::default(),
            artwork: None,
            status: None,
            title_input: None,
            theme,
            scheme,
            system_change,
            subscription: Some(subscription),
        };
        app.regenerate();
        Ok(app)
    }

    pub fn update(&mut self, event: AppEvent) {
        match event {
            AppEvent::Tick => self.on_tick(),
            AppEvent::KeyPress(code) => {
                if self.title_input.is_some() {
                    self.on_title_key(code);
                } else {
                    self.on_key(code);
                }
            }
        }
    }

    /// Rebuild the artwork from the current title and strategy.
    pub fn regenerate(&mut self) {
        let options = GenerateOptions::for_strategy(self.strategy);
        match art::generate(&SeedSource::Title(self.title.clone()), &options, &PALETTE) {
            Ok(artwork) => {
                debug!(seed = artwork.seed, "preview regenerated");
                self.artwork = Some(artwork);
            }
            Err(err) => {
                warn!(%err, "generation failed");
                self.artwork = None;
                self.status = Some(format!("Generation failed: {err}"));
            }
        }
    }

    fn on_tick(&mut self) {
        self.scheme.poll();
        if let Some(mode) = self.system_change.take() {
            match self.theme.on_system_change(mode) {
                Ok(true) => self.status = Some(format!("System switched to {mode}")),
                Ok(false) => {}
                Err(err) => self.status = Some(format!("Theme error: {err}")),
            }
        }
    }

    fn on_key(&mut self, code: KeyCode) {
        self.status = None;
        match code {
            KeyCode::Char('q') => self.quit(),
            KeyCode::Char('?') => {
                self.view = match self.view {
                    AppView::Help => AppView::Preview,
                    AppView::Preview => AppView::Help,
                };
            }
            KeyCode::Esc => self.view = AppView::Preview,
            KeyCode::Tab => {
                self.strategy = self.strategy.other();
                self.status = Some(format!("Strategy: {}", self.strategy.label()));
                self.regenerate();
            }
            KeyCode::Char('t') => match self.theme.toggle() {
                Ok(mode) => self.status = Some(format!("Theme: {mode} (saved)")),
                Err(err) => self.status = Some(format!("Theme error: {err}")),
            },
            KeyCode::Char('/') => {
                self.view = AppView::Preview;
                self.title_input = Some(self.title.clone());
            }
            _ => {}
        }
    }

    fn on_title_key(&mut self, code: KeyCode) {
        let Some(input) = self.title_input.as_mut() else {
            return;
        };
        match code {
            KeyCode::Char(c) => input.push(c),
            KeyCode::Backspace => {
                input.pop();
            }
            KeyCode::Esc => self.title_input = None,
            KeyCode::Enter => {
                if let Some(title) = self.title_input.take() {
                    self.title = title;
                    self.status = None;
                    self.regenerate();
                }
            }
            _ => {}
        }
    }

    fn quit(&mut self) {
        if let Some(subscription) = self.subscription.take() {
            subscription.cancel();
        }
        self.running = false;
    }
}
