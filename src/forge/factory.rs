//! forge::factory
//!
//! Forge selection, construction, and the fork-parent cache.
//!
//! # Design
//!
//! The factory is the single place that decides which provider backs the
//! current repository. UI layers never import a provider adapter directly;
//! they observe the factory's `current` cell and consume whatever instance
//! it holds.
//!
//! # Provider Resolution
//!
//! First match wins:
//!
//! 1. an explicit override supplied by the caller;
//! 2. the provider detected by content-based inspection of the remote;
//! 3. the repository domain: exact `github.com` selects GitHub, everything
//!    else selects GitLab (self-hosted instances are domains that are not a
//!    recognized GitHub host).
//!
//! Resolution always yields a concrete instance; there is no error path.
//!
//! # Ownership
//!
//! The factory exclusively owns the current instance and the fork-parent
//! cache. The session clients, analytics sink, and dispatch handle are
//! injected, shared collaborators the factory does not own. All mutations
//! originate from UI event handlers; `build` and `set_config` are the only
//! writers of `current`.

use std::sync::{Arc, Mutex};

use tokio::sync::watch;

use super::client::{GitHubClient, GitLabClient};
use super::config::{CachedParentRepo, ForgeConfig, ForgeProvider, RepoIdentity};
use super::github::GitHubForge;
use super::gitlab::GitLabForge;
use super::traits::Forge;
use crate::backend::{AnalyticsSink, Dispatch, StoreAction};

/// Parameters for constructing a forge instance.
#[derive(Debug, Clone)]
pub struct BuildParams {
    /// The repository the instance is bound to
    pub repo: RepoIdentity,
    /// Base branch for PR operations
    pub base_branch: String,
    /// Provider detected by content-based inspection, if any
    pub detected_provider: Option<ForgeProvider>,
    /// Unconditional provider override, if any
    pub forge_override: Option<ForgeProvider>,
}

/// Selects, constructs, and owns the current forge instance.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use gitdesk_forge::backend::{NoopAnalytics, NoopDispatch};
/// use gitdesk_forge::forge::{
///     BuildParams, ForgeFactory, GitHubClient, GitLabClient, RepoIdentity,
/// };
///
/// let factory = ForgeFactory::new(
///     Arc::new(GitHubClient::new()),
///     Arc::new(GitLabClient::new()),
///     Arc::new(NoopAnalytics),
///     Arc::new(NoopDispatch),
/// );
///
/// let forge = factory.build(BuildParams {
///     repo: RepoIdentity::new("github.com", "test-owner", "test-repo"),
///     base_branch: "main".to_string(),
///     detected_provider: None,
///     forge_override: None,
/// });
/// assert_eq!(forge.name(), "github");
/// ```
pub struct ForgeFactory {
    github_client: Arc<GitHubClient>,
    gitlab_client: Arc<GitLabClient>,
    analytics: Arc<dyn AnalyticsSink>,
    dispatch: Arc<dyn Dispatch>,
    /// Single-writer cell holding the current instance. Only `set_config`
    /// sends into it.
    current: watch::Sender<Option<Arc<dyn Forge>>>,
    cached_parent: Mutex<Option<CachedParentRepo>>,
}

impl ForgeFactory {
    /// Create a factory with its injected collaborators.
    ///
    /// `current` starts empty; the first `set_config` populates it.
    pub fn new(
        github_client: Arc<GitHubClient>,
        gitlab_client: Arc<GitLabClient>,
        analytics: Arc<dyn AnalyticsSink>,
        dispatch: Arc<dyn Dispatch>,
    ) -> Self {
        let (current, _) = watch::channel(None);
        Self {
            github_client,
            gitlab_client,
            analytics,
            dispatch,
            current,
            cached_parent: Mutex::new(None),
        }
    }

    /// Resolve a provider and construct an instance bound to `params.repo`.
    ///
    /// Pure object assembly; no I/O happens here. Always returns a concrete
    /// instance (unknown domains deliberately default to GitLab).
    pub fn build(&self, params: BuildParams) -> Arc<dyn Forge> {
        let provider = params
            .forge_override
            .or(params.detected_provider)
            .unwrap_or_else(|| ForgeProvider::from_domain(&params.repo.domain));

        tracing::debug!(
            repo = %params.repo,
            %provider,
            overridden = params.forge_override.is_some(),
            detected = params.detected_provider.is_some(),
            "resolved forge provider"
        );

        match provider {
            ForgeProvider::GitHub => Arc::new(GitHubForge::new(
                self.github_client.clone(),
                params.repo,
                params.base_branch,
            )),
            ForgeProvider::GitLab => Arc::new(GitLabForge::new(
                self.gitlab_client.clone(),
                params.repo,
                params.base_branch,
            )),
        }
    }

    /// Apply a full configuration: compute the effective target repository,
    /// build an instance for it, and make it current.
    ///
    /// Fires the session clients' reset hooks (the active repository
    /// changed), captures one analytics event, and dispatches one store
    /// action so dependent queries invalidate.
    pub fn set_config(&self, config: ForgeConfig) {
        let target = config.effective_target().clone();

        tracing::info!(
            target = %target,
            fork_mode = ?config.fork_mode,
            "applying forge configuration"
        );

        let forge = self.build(BuildParams {
            repo: target,
            base_branch: config.base_branch.clone(),
            detected_provider: config.detected_provider,
            forge_override: None,
        });

        self.github_client.reset();
        self.gitlab_client.reset();

        let provider = forge.provider();
        self.analytics.capture(
            "forge_selected",
            &[("provider", provider.name().to_string())],
        );
        self.dispatch.dispatch(StoreAction::ForgeChanged { provider });

        self.current.send_replace(Some(forge));
    }

    /// The current forge instance, or `None` before the first `set_config`.
    pub fn current(&self) -> Option<Arc<dyn Forge>> {
        self.current.borrow().clone()
    }

    /// Subscribe to changes of the current instance.
    ///
    /// Identity changes trigger dependent view updates; the receiver sees
    /// the latest value immediately.
    pub fn watch_current(&self) -> watch::Receiver<Option<Arc<dyn Forge>>> {
        self.current.subscribe()
    }

    /// Update the fork-parent cache for a project.
    ///
    /// The cache is sticky per project: while the project id matches, an
    /// absent parent is a no-op and never erases the cached value. A project
    /// switch clears the cache first and then stores whatever was passed,
    /// which may be nothing.
    pub fn set_cached_parent_repo(&self, parent: Option<RepoIdentity>, project_id: &str) {
        let mut cache = self.cached_parent.lock().unwrap();
        match cache.as_ref() {
            Some(entry) if entry.project_id == project_id => {
                if let Some(repo) = parent {
                    tracing::debug!(project_id, parent = %repo, "updated cached fork parent");
                    *cache = Some(CachedParentRepo {
                        repo,
                        project_id: project_id.to_string(),
                    });
                }
                // An absent parent for the same project keeps the cache.
            }
            _ => {
                tracing::debug!(
                    project_id,
                    has_parent = parent.is_some(),
                    "fork parent cache reset for project"
                );
                *cache = parent.map(|repo| CachedParentRepo {
                    repo,
                    project_id: project_id.to_string(),
                });
            }
        }
    }

    /// The currently cached fork parent, if any.
    pub fn cached_parent_repo(&self) -> Option<RepoIdentity> {
        self.cached_parent
            .lock()
            .unwrap()
            .as_ref()
            .map(|entry| entry.repo.clone())
    }
}

impl std::fmt::Debug for ForgeFactory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ForgeFactory")
            .field("current", &self.current().map(|forge| forge.name()))
            .field("cached_parent", &*self.cached_parent.lock().unwrap())
            .finish()
    }
}
