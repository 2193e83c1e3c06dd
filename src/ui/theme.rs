//! ui::theme
//!
//! Effective-theme resolution.
//!
//! # Design
//!
//! Two inputs feed the effective theme: the user's preference from settings
//! (light, dark, or follow-the-system) and the OS theme reported by the
//! backend. Either may be unknown at startup. The resolution is held in a
//! single-writer watch cell so views re-render on change; when neither input
//! decides the theme (system preference with an unknown OS theme) the
//! current value is left untouched rather than flickering to a default.

use std::sync::Mutex;

use serde::{Deserialize, Serialize};
use tokio::sync::watch;

use crate::backend::Backend;

/// User theme preference from settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    Light,
    Dark,
    /// Follow the OS theme
    System,
}

/// OS theme as reported by the host shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SystemTheme {
    Light,
    Dark,
}

/// The resolved theme views actually render with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EffectiveTheme {
    Light,
    Dark,
}

#[derive(Debug, Default)]
struct ThemeInputs {
    preference: Option<ThemePreference>,
    system: Option<SystemTheme>,
}

impl ThemeInputs {
    /// Resolve the effective theme, or `None` when the inputs don't decide
    /// one yet.
    fn resolve(&self) -> Option<EffectiveTheme> {
        let follows_system =
            matches!(self.preference, Some(ThemePreference::System) | None);
        match (self.preference, self.system) {
            (Some(ThemePreference::Dark), _) => Some(EffectiveTheme::Dark),
            (Some(ThemePreference::Light), _) => Some(EffectiveTheme::Light),
            (_, Some(SystemTheme::Dark)) if follows_system => Some(EffectiveTheme::Dark),
            (_, Some(SystemTheme::Light)) if follows_system => Some(EffectiveTheme::Light),
            _ => None,
        }
    }
}

/// Resolves and publishes the effective theme.
///
/// # Example
///
/// ```
/// use gitdesk_forge::ui::theme::{EffectiveTheme, SystemTheme, ThemePreference, ThemeService};
///
/// let service = ThemeService::new();
/// assert_eq!(service.effective(), EffectiveTheme::Dark);
///
/// service.set_preference(Some(ThemePreference::System));
/// service.set_system_theme(Some(SystemTheme::Light));
/// assert_eq!(service.effective(), EffectiveTheme::Light);
/// ```
#[derive(Debug)]
pub struct ThemeService {
    inputs: Mutex<ThemeInputs>,
    effective: watch::Sender<EffectiveTheme>,
}

impl Default for ThemeService {
    fn default() -> Self {
        Self::new()
    }
}

impl ThemeService {
    /// Create a service. The effective theme starts dark until an input
    /// decides otherwise.
    pub fn new() -> Self {
        let (effective, _) = watch::channel(EffectiveTheme::Dark);
        Self {
            inputs: Mutex::new(ThemeInputs::default()),
            effective,
        }
    }

    /// Update the user preference from settings.
    pub fn set_preference(&self, preference: Option<ThemePreference>) {
        let mut inputs = self.inputs.lock().unwrap();
        inputs.preference = preference;
        self.publish(&inputs);
    }

    /// Update the OS theme reported by the backend.
    pub fn set_system_theme(&self, system: Option<SystemTheme>) {
        let mut inputs = self.inputs.lock().unwrap();
        inputs.system = system;
        self.publish(&inputs);
    }

    fn publish(&self, inputs: &ThemeInputs) {
        if let Some(theme) = inputs.resolve() {
            if *self.effective.borrow() != theme {
                tracing::debug!(?theme, "effective theme changed");
            }
            self.effective.send_replace(theme);
        }
    }

    /// The current effective theme.
    pub fn effective(&self) -> EffectiveTheme {
        *self.effective.borrow()
    }

    /// Subscribe to effective-theme changes.
    pub fn watch(&self) -> watch::Receiver<EffectiveTheme> {
        self.effective.subscribe()
    }

    /// Forward the backend's system-theme stream into this service.
    ///
    /// Runs until the backend drops its sender; callers spawn this on the
    /// UI runtime.
    pub async fn listen(&self, backend: &dyn Backend) {
        let mut rx = backend.system_theme();
        loop {
            let system = *rx.borrow_and_update();
            self.set_system_theme(system);
            if rx.changed().await.is_err() {
                break;
            }
        }
    }
}
