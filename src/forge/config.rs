//! forge::config
//!
//! Repository identity and forge configuration types.
//!
//! # Design
//!
//! These are the value types the factory consumes. A [`RepoIdentity`] is
//! immutable once constructed and is recomputed wholesale whenever the user's
//! remote configuration changes. A [`ForgeConfig`] is likewise supplied
//! wholesale on each reconfiguration; the next call supersedes it entirely,
//! there is no partial merge.

use serde::{Deserialize, Serialize};

/// Supported forge providers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ForgeProvider {
    /// GitHub, including GitHub Enterprise on a custom domain
    GitHub,
    /// GitLab, including self-hosted instances
    GitLab,
}

impl ForgeProvider {
    /// Get the provider name as a string.
    ///
    /// This matches the `name()` reported by constructed forge instances.
    pub fn name(&self) -> &'static str {
        match self {
            ForgeProvider::GitHub => "github",
            ForgeProvider::GitLab => "gitlab",
        }
    }

    /// Parse a provider from a string.
    ///
    /// # Example
    ///
    /// ```
    /// use gitdesk_forge::forge::ForgeProvider;
    ///
    /// assert_eq!(ForgeProvider::parse("github"), Some(ForgeProvider::GitHub));
    /// assert_eq!(ForgeProvider::parse("GitLab"), Some(ForgeProvider::GitLab));
    /// assert_eq!(ForgeProvider::parse("sourcehut"), None);
    /// ```
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "github" => Some(ForgeProvider::GitHub),
            "gitlab" => Some(ForgeProvider::GitLab),
            _ => None,
        }
    }

    /// Infer the provider from a repository domain.
    ///
    /// Exact match on `github.com` selects GitHub. Every other domain,
    /// including `gitlab.com` and self-hosted instances on custom domains,
    /// selects GitLab. Unknown domains deliberately default rather than fail;
    /// content-based detection upstream can override this naive inference via
    /// `detected_provider`.
    ///
    /// # Example
    ///
    /// ```
    /// use gitdesk_forge::forge::ForgeProvider;
    ///
    /// assert_eq!(ForgeProvider::from_domain("github.com"), ForgeProvider::GitHub);
    /// assert_eq!(ForgeProvider::from_domain("gitlab.com"), ForgeProvider::GitLab);
    /// assert_eq!(ForgeProvider::from_domain("gitlab.example.com"), ForgeProvider::GitLab);
    /// ```
    pub fn from_domain(domain: &str) -> Self {
        if domain.eq_ignore_ascii_case("github.com") {
            ForgeProvider::GitHub
        } else {
            ForgeProvider::GitLab
        }
    }
}

impl std::fmt::Display for ForgeProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Identity of a repository on a forge.
///
/// The stable key is `owner|name`; `hash` carries it for callers that key
/// collections off the identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepoIdentity {
    /// Host domain (e.g. `github.com`, `gitlab.example.com`)
    pub domain: String,
    /// Repository owner (user, organization, or group path)
    pub owner: String,
    /// Repository name
    pub name: String,
    /// Stable key, `owner|name`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hash: Option<String>,
}

impl RepoIdentity {
    /// Create an identity with the stable key precomputed.
    pub fn new(
        domain: impl Into<String>,
        owner: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        let owner = owner.into();
        let name = name.into();
        let hash = Some(format!("{}|{}", owner, name));
        Self {
            domain: domain.into(),
            owner,
            name,
            hash,
        }
    }

    /// Stable key for this identity, `owner|name`.
    pub fn key(&self) -> String {
        format!("{}|{}", self.owner, self.name)
    }

    /// The `owner/name` path as it appears in forge URLs.
    pub fn full_path(&self) -> String {
        format!("{}/{}", self.owner, self.name)
    }
}

impl std::fmt::Display for RepoIdentity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}/{}", self.domain, self.owner, self.name)
    }
}

/// User preference for which repository fork-aware operations target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ForkMode {
    /// Operate on the fork itself (push and open PRs against the fork)
    OwnPurposes,
    /// Contribute upstream: target the parent repository when one is known
    ContributeToParent,
}

/// Full forge configuration, supplied wholesale on each reconfiguration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForgeConfig {
    /// The repository the user has open
    pub repo: RepoIdentity,
    /// The repository pushes go to (the fork, when forked)
    pub push_repo: RepoIdentity,
    /// The upstream parent, when the push repo is a fork of it
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_repo: Option<RepoIdentity>,
    /// Base branch for PR operations
    pub base_branch: String,
    /// Whether a GitHub session is authenticated
    pub github_authenticated: bool,
    /// Provider detected by content-based inspection of the remote, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detected_provider: Option<ForgeProvider>,
    /// Fork targeting preference; `None` behaves as `ContributeToParent`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fork_mode: Option<ForkMode>,
}

impl ForgeConfig {
    /// Compute the effective target repository for this configuration.
    ///
    /// `OwnPurposes` targets the push repo (the fork itself).
    /// `ContributeToParent`, which is also the default when `fork_mode` is
    /// unset, targets the parent repo and falls back to the push repo when no
    /// parent is known.
    pub fn effective_target(&self) -> &RepoIdentity {
        match self.fork_mode {
            Some(ForkMode::OwnPurposes) => &self.push_repo,
            Some(ForkMode::ContributeToParent) | None => {
                self.parent_repo.as_ref().unwrap_or(&self.push_repo)
            }
        }
    }
}

/// A fork-parent identity cached per project.
///
/// Valid only while the current project id matches; a project switch
/// invalidates it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CachedParentRepo {
    /// The cached parent repository identity
    pub repo: RepoIdentity,
    /// The project this cache entry belongs to
    pub project_id: String,
}
