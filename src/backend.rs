//! backend
//!
//! Boundary traits for the host shell.
//!
//! # Design
//!
//! The desktop shell (the Tauri-style host) owns command invocation, native
//! event streams, analytics, and the global state store. This crate only
//! consumes those surfaces, so they are modeled as traits with the shell
//! providing the implementations. Tests substitute recording doubles.

use async_trait::async_trait;
use thiserror::Error;
use tokio::sync::{broadcast, watch};

use crate::forge::ForgeProvider;
use crate::ui::theme::SystemTheme;

/// Errors from host command invocation.
#[derive(Debug, Clone, Error)]
pub enum BackendError {
    /// The command is not known to the host.
    #[error("unknown command: {0}")]
    UnknownCommand(String),

    /// The command ran and failed.
    #[error("command failed: {0}")]
    CommandFailed(String),
}

/// Host application's command-invocation and event surface.
#[async_trait]
pub trait Backend: Send + Sync {
    /// Invoke a host command with a JSON payload.
    async fn invoke(
        &self,
        command: &str,
        args: serde_json::Value,
    ) -> Result<serde_json::Value, BackendError>;

    /// Subscribe to the OS theme. `None` until the host has reported one.
    fn system_theme(&self) -> watch::Receiver<Option<SystemTheme>>;

    /// Subscribe to `menu://shortcut` events. The payload is the shortcut id.
    fn menu_shortcuts(&self) -> broadcast::Receiver<String>;
}

/// Analytics sink (event-only; no return value is consumed).
pub trait AnalyticsSink: Send + Sync {
    /// Capture a named event with string properties.
    fn capture(&self, event: &str, props: &[(&str, String)]);
}

/// Analytics sink that drops every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopAnalytics;

impl AnalyticsSink for NoopAnalytics {
    fn capture(&self, _event: &str, _props: &[(&str, String)]) {}
}

/// Actions this crate dispatches into the global state store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreAction {
    /// The current forge instance changed; dependent queries must refetch.
    ForgeChanged {
        /// The provider of the newly selected forge
        provider: ForgeProvider,
    },
}

/// Action-dispatch handle for the global state store.
pub trait Dispatch: Send + Sync {
    /// Dispatch an action.
    fn dispatch(&self, action: StoreAction);
}

/// Dispatch handle that drops every action.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopDispatch;

impl Dispatch for NoopDispatch {
    fn dispatch(&self, _action: StoreAction) {}
}
