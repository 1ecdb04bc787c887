//! # Theme Control
//!
//! Light/dark state for the session. The preference is resolved once at startup
//! with this precedence:
//!
//! 1. an explicit value stored under the theme key,
//! 2. the operating system's color-scheme preference,
//! 3. light.
//!
//! Whatever wins is applied and written back to storage straight away, so after
//! the first run the stored value is what counts. Toggling flips the flag and
//! persists it again.

use crate::codec::{self, Decoded};
use crate::error::Result;
use crate::model::ThemePreference;
use crate::store::StorageBackend;

pub const THEME_KEY: &str = "darkMode";

/// Reports the operating system's color-scheme preference.
pub trait ColorSchemeSource {
    /// `Some(true)` for dark, `Some(false)` for light, `None` when unknown.
    fn prefers_dark(&self) -> Option<bool>;
}

/// Asks the desktop environment through the `dark-light` crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemColorScheme;

impl ColorSchemeSource for SystemColorScheme {
    fn prefers_dark(&self) -> Option<bool> {
        match dark_light::detect() {
            dark_light::Mode::Dark => Some(true),
            dark_light::Mode::Light => Some(false),
        }
    }
}

/// A fixed answer, for tests and for hosts that already know.
#[derive(Debug, Clone, Copy)]
pub struct FixedColorScheme(pub Option<bool>);

impl ColorSchemeSource for FixedColorScheme {
    fn prefers_dark(&self) -> Option<bool> {
        self.0
    }
}

/// Where the initial preference came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeOrigin {
    Stored,
    System,
    Default,
}

/// Icon and label shown on the theme toggle.
///
/// The label names the mode the toggle switches *to*.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeIndicators {
    pub icon: &'static str,
    pub label: &'static str,
}

impl ThemeIndicators {
    pub fn for_preference(preference: ThemePreference) -> Self {
        if preference.is_dark {
            Self {
                icon: "🌜",
                label: "Light Mode",
            }
        } else {
            Self {
                icon: "🌞",
                label: "Dark Mode",
            }
        }
    }
}

pub fn resolve_preference(
    stored: Option<&str>,
    system: &dyn ColorSchemeSource,
) -> (ThemePreference, ThemeOrigin) {
    match codec::decode_theme(stored) {
        Decoded::Value(is_dark) => return (ThemePreference { is_dark }, ThemeOrigin::Stored),
        Decoded::Missing => {}
        Decoded::Fallback { reason } => {
            tracing::warn!(%reason, "ignoring stored theme preference");
        }
    }
    match system.prefers_dark() {
        Some(is_dark) => (ThemePreference { is_dark }, ThemeOrigin::System),
        None => (ThemePreference::light(), ThemeOrigin::Default),
    }
}

pub struct ThemeControl<B: StorageBackend> {
    backend: B,
    key: String,
    current: ThemePreference,
}

impl<B: StorageBackend> ThemeControl<B> {
    #[cfg(test)]
    pub(crate) fn initialize(backend: B, system: &dyn ColorSchemeSource) -> Self {
        Self::initialize_with_key(backend, THEME_KEY, system)
    }

    /// Resolves the starting preference and persists it.
    ///
    /// A failed read counts as "nothing stored"; a failed write is logged and the
    /// resolved preference is still used for the session.
    pub fn initialize_with_key(backend: B, key: &str, system: &dyn ColorSchemeSource) -> Self {
        let stored = backend.get(key).unwrap_or_else(|err| {
            tracing::warn!(%err, key, "failed to read theme preference");
            None
        });
        let (current, origin) = resolve_preference(stored.as_deref(), system);
        tracing::debug!(is_dark = current.is_dark, ?origin, "theme initialized");

        let control = Self {
            backend,
            key: key.to_string(),
            current,
        };
        if let Err(err) = control.persist() {
            tracing::error!(%err, "failed to persist theme preference");
        }
        control
    }

    pub fn current(&self) -> ThemePreference {
        self.current
    }

    /// Flips the preference and persists it.
    ///
    /// The in-memory flip sticks even when the write fails; the error is returned
    /// so the caller can report it.
    pub fn toggle(&mut self) -> Result<ThemePreference> {
        self.current = self.current.toggled();
        tracing::debug!(is_dark = self.current.is_dark, "theme toggled");
        self.persist()?;
        Ok(self.current)
    }

    fn persist(&self) -> Result<()> {
        self.backend
            .set(&self.key, &codec::encode_theme(self.current.is_dark))
    }
}
