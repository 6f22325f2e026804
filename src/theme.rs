//! Light/dark theme resolution.
//!
//! An explicit preference always wins over the system scheme. With no
//! preference stored, the active theme follows the system and changes with it.
use std::cell::RefCell;
use std::rc::{Rc, Weak};

use anyhow::Result;
use tracing::{info, warn};

use crate::types::ThemeMode;

/// Where the explicit preference lives.
pub trait PreferenceStore {
    fn load(&self) -> Result<Option<ThemeMode>>;
    fn save(&mut self, mode: ThemeMode) -> Result<()>;
    fn clear(&mut self) -> Result<()>;
}

/// Whatever shows the theme: the UI palette, a status line, a test recorder.
pub trait Presentation {
    fn apply(&mut self, mode: ThemeMode);
}

/// Source of the system color scheme.
pub trait SchemeSource {
    fn current(&self) -> ThemeMode;
}

pub struct ThemeController<S, P> {
    store: S,
    presentation: P,
    active: ThemeMode,
}

impl<S: PreferenceStore, P: Presentation> ThemeController<S, P> {
    /// Resolve the initial theme and apply it.
    pub fn init(store: S, mut presentation: P, system: ThemeMode) -> Result<Self> {
        let active = store.load()?.unwrap_or(system);
        presentation.apply(active);
        Ok(Self {
            store,
            presentation,
            active,
        })
    }

    pub fn active(&self) -> ThemeMode {
        self.active
    }

    pub fn presentation(&self) -> &P {
        &self.presentation
    }

    pub fn preference(&self) -> Result<Option<ThemeMode>> {
        self.store.load()
    }

    /// Flip the active theme and remember it as the explicit preference.
    pub fn toggle(&mut self) -> Result<ThemeMode> {
        let next = self.active.flipped();
        self.set(next)?;
        Ok(next)
    }

    pub fn set(&mut self, mode: ThemeMode) -> Result<()> {
        self.store.save(mode)?;
        self.apply(mode);
        info!(theme = %mode, "theme preference saved");
        Ok(())
    }

    /// Forget the explicit preference and go back to following `system`.
    pub fn clear(&mut self, system: ThemeMode) -> Result<()> {
        self.store.clear()?;
        self.apply(system);
        info!(theme = %system, "theme preference cleared");
        Ok(())
    }

    /// Returns whether the active theme changed.
    pub fn on_system_change(&mut self, system: ThemeMode) -> Result<bool> {
        if self.store.load()?.is_some() || system == self.active {
            return Ok(false);
        }
        self.apply(system);
        Ok(true)
    }

    fn apply(&mut self, mode: ThemeMode) {
        self.active = mode;
        self.presentation.apply(mode);
    }
}

/// Environment variable forcing the system scheme (`light` or `dark`).
pub const SCHEME_ENV: &str = "PIXELHEAD_COLOR_SCHEME";

/// Reads the scheme from the environment on every call.
#[derive(Clone, Copy, Debug, Default)]
pub struct EnvScheme;

impl SchemeSource for EnvScheme {
    fn current(&self) -> ThemeMode {
        if let Ok(value) = std::env::var(SCHEME_ENV) {
            match value.parse::<ThemeMode>() {
                Ok(mode) => return mode,
                Err(err) => warn!(%err, "ignoring {SCHEME_ENV}"),
            }
        }
        std::env::var("COLORFGBG")
            .ok()
            .and_then(|v| scheme_from_colorfgbg(&v))
            .unwrap_or(ThemeMode::Dark)
    }
}

/// `COLORFGBG` is `fg;bg` (sometimes `fg;default;bg`). A white or light grey
/// background means a light terminal.
pub fn scheme_from_colorfgbg(value: &str) -> Option<ThemeMode> {
    let bg: u8 = value.rsplit(';').next()?.trim().parse().ok()?;
    Some(if bg == 7 || bg == 15 {
        ThemeMode::Light
    } else {
        ThemeMode::Dark
    })
}

type Listener = Box<dyn FnMut(ThemeMode)>;
type Listeners = Rc<RefCell<Vec<(u64, Listener)>>>;

/// Samples a [`SchemeSource`] and notifies subscribers when it changes.
pub struct SchemeWatcher<Src> {
    source: Src,
    last: ThemeMode,
    next_id: u64,
    listeners: Listeners,
}

/// Handle returned by [`SchemeWatcher::subscribe`].
#[must_use = "dropping the handle keeps the listener registered; call cancel() to remove it"]
pub struct Subscription {
    id: u64,
    listeners: Weak<RefCell<Vec<(u64, Listener)>>>,
}

impl Subscription {
    pub fn cancel(self) {
        if let Some(listeners) = self.listeners.upgrade() {
            listeners.borrow_mut().retain(|(id, _)| *id != self.id);
        }
    }
}

impl<Src: SchemeSource> SchemeWatcher<Src> {
    pub fn new(source: Src) -> Self {
        let last = source.current();
        Self {
            source,
            last,
            next_id: 0,
            listeners: Rc::new(RefCell::new(Vec::new())),
        }
    }

    pub fn current(&self) -> ThemeMode {
        self.last
    }

    pub fn subscribe(&mut self, listener: impl FnMut(ThemeMode) + 'static) -> Subscription {
        let id = self.next_id;
        self.next_id += 1;
        self.listeners.borrow_mut().push((id, Box::new(listener)));
        Subscription {
            id,
            listeners: Rc::downgrade(&self.listeners),
        }
    }

    /// Sample the source once. Returns the new scheme if it changed.
    pub fn poll(&mut self) -> Option<ThemeMode> {
        let now = self.source.current();
        if now == self.last {
            return None;
        }
        self.last = now;
        for (_, listener) in self.listeners.borrow_mut().iter_mut() {
            listener(now);
        }
        Some(now)
    }
}
