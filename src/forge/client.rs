//! forge::client
//!
//! Session objects for the provider APIs.
//!
//! # Design
//!
//! A session client owns the credential state for one provider and a list of
//! reset hooks. The factory injects the clients into every instance it
//! constructs and fires `reset()` whenever credentials or the active
//! repository change, so dependent caches (query registries, in-flight
//! paginators) can drop stale data. The factory never mutates the clients
//! beyond firing resets; it does not own them.

use std::sync::Mutex;

type ResetHook = Box<dyn Fn() + Send + Sync>;

#[derive(Default)]
struct SessionState {
    token: Option<String>,
}

/// GitHub API session: token state plus reset hooks.
#[derive(Default)]
pub struct GitHubClient {
    state: Mutex<SessionState>,
    reset_hooks: Mutex<Vec<ResetHook>>,
}

/// GitLab API session: token state plus reset hooks.
#[derive(Default)]
pub struct GitLabClient {
    state: Mutex<SessionState>,
    reset_hooks: Mutex<Vec<ResetHook>>,
}

macro_rules! session_impl {
    ($ty:ident) => {
        impl $ty {
            /// Create an unauthenticated session.
            pub fn new() -> Self {
                Self::default()
            }

            /// Create a session with a token already configured.
            pub fn with_token(token: impl Into<String>) -> Self {
                let client = Self::default();
                client.set_token(Some(token.into()));
                client
            }

            /// Replace the session token. Fires reset hooks since dependent
            /// caches are now stale.
            pub fn set_token(&self, token: Option<String>) {
                {
                    let mut state = self.state.lock().unwrap();
                    state.token = token;
                }
                self.reset();
            }

            /// Get the current token, if any.
            pub fn token(&self) -> Option<String> {
                self.state.lock().unwrap().token.clone()
            }

            /// Whether a token is configured.
            pub fn authenticated(&self) -> bool {
                self.state.lock().unwrap().token.is_some()
            }

            /// Register a hook invoked on every credential or repository
            /// change.
            pub fn on_reset(&self, hook: impl Fn() + Send + Sync + 'static) {
                self.reset_hooks.lock().unwrap().push(Box::new(hook));
            }

            /// Fire all registered reset hooks.
            pub fn reset(&self) {
                let hooks = self.reset_hooks.lock().unwrap();
                for hook in hooks.iter() {
                    hook();
                }
            }
        }

        impl std::fmt::Debug for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.debug_struct(stringify!($ty))
                    .field("authenticated", &self.authenticated())
                    .field("reset_hooks", &self.reset_hooks.lock().unwrap().len())
                    .finish()
            }
        }
    };
}

session_impl!(GitHubClient);
session_impl!(GitLabClient);

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn token_roundtrip() {
        let client = GitHubClient::new();
        assert!(!client.authenticated());

        client.set_token(Some("ghp_test".to_string()));
        assert!(client.authenticated());
        assert_eq!(client.token().as_deref(), Some("ghp_test"));

        client.set_token(None);
        assert!(!client.authenticated());
    }

    #[test]
    fn set_token_fires_reset_hooks() {
        let client = GitLabClient::new();
        let fired = Arc::new(AtomicUsize::new(0));

        let counter = fired.clone();
        client.on_reset(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        client.set_token(Some("glpat-test".to_string()));
        assert_eq!(fired.load(Ordering::SeqCst), 1);

        client.reset();
        assert_eq!(fired.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn with_token_starts_authenticated() {
        let client = GitHubClient::with_token("ghp_test");
        assert!(client.authenticated());
    }
}
