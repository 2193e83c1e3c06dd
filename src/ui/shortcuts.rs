//! ui::shortcuts
//!
//! Keyboard-shortcut dispatch.
//!
//! # Design
//!
//! Menu shortcuts arrive from the host shell as `menu://shortcut` events
//! whose payload is the shortcut id. The service keeps a registry of
//! listeners and fans each event out to the listeners registered for that
//! id, in registration order. Registration hands back a guard that
//! unregisters on drop.
//!
//! `emit` is also public: on Windows the shell cannot deliver some menu
//! events natively and synthesizes them through this path.

use std::sync::{Arc, Mutex};

use crate::backend::Backend;

type Callback = Arc<dyn Fn() + Send + Sync>;

struct Listener {
    id: u64,
    shortcut: String,
    callback: Callback,
}

#[derive(Default)]
struct Registry {
    listeners: Vec<Listener>,
    next_id: u64,
}

/// Dispatches shortcut events from the host shell to registered listeners.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use std::sync::atomic::{AtomicUsize, Ordering};
/// use gitdesk_forge::ui::shortcuts::ShortcutService;
///
/// let service = ShortcutService::new();
/// let hits = Arc::new(AtomicUsize::new(0));
///
/// let counter = hits.clone();
/// let _sub = service.on("history", move || {
///     counter.fetch_add(1, Ordering::SeqCst);
/// });
///
/// service.emit("history");
/// assert_eq!(hits.load(Ordering::SeqCst), 1);
/// ```
/// Clones share one registry.
#[derive(Default, Clone)]
pub struct ShortcutService {
    registry: Arc<Mutex<Registry>>,
}

/// Registration guard; dropping it unregisters the listener.
pub struct ShortcutSubscription {
    registry: Arc<Mutex<Registry>>,
    id: u64,
}

impl Drop for ShortcutSubscription {
    fn drop(&mut self) {
        let mut registry = self.registry.lock().unwrap();
        registry.listeners.retain(|listener| listener.id != self.id);
    }
}

impl ShortcutService {
    /// Create an empty service.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener for a shortcut id.
    #[must_use = "dropping the subscription unregisters the listener"]
    pub fn on(
        &self,
        shortcut: impl Into<String>,
        callback: impl Fn() + Send + Sync + 'static,
    ) -> ShortcutSubscription {
        let mut registry = self.registry.lock().unwrap();
        let id = registry.next_id;
        registry.next_id += 1;
        registry.listeners.push(Listener {
            id,
            shortcut: shortcut.into(),
            callback: Arc::new(callback),
        });
        ShortcutSubscription {
            registry: self.registry.clone(),
            id,
        }
    }

    /// Invoke every listener registered for `shortcut`, in registration
    /// order.
    ///
    /// The registry lock is released before any callback runs, so a callback
    /// may register or unregister listeners. Callbacks matching at emit time
    /// are invoked even if another callback unregisters them mid-dispatch.
    pub fn emit(&self, shortcut: &str) {
        tracing::debug!(shortcut, "dispatching shortcut");
        let callbacks: Vec<Callback> = {
            let registry = self.registry.lock().unwrap();
            registry
                .listeners
                .iter()
                .filter(|listener| listener.shortcut == shortcut)
                .map(|listener| listener.callback.clone())
                .collect()
        };
        for callback in callbacks {
            callback();
        }
    }

    /// Forward the backend's `menu://shortcut` stream into `emit`.
    ///
    /// Runs until the backend drops its sender; callers spawn this on the
    /// UI runtime. Lagged events are skipped rather than aborting the loop.
    pub async fn listen(&self, backend: &dyn Backend) {
        let mut events = backend.menu_shortcuts();
        loop {
            match events.recv().await {
                Ok(shortcut) => self.emit(&shortcut),
                Err(tokio::sync::broadcast::error::RecvError::Lagged(skipped)) => {
                    tracing::warn!(skipped, "shortcut events lagged");
                }
                Err(tokio::sync::broadcast::error::RecvError::Closed) => break,
            }
        }
    }
}

impl std::fmt::Debug for ShortcutService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShortcutService")
            .field("listeners", &self.registry.lock().unwrap().listeners.len())
            .finish()
    }
}
