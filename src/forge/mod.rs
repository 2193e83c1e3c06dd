//! forge
//!
//! Abstraction for remote forges (GitHub, GitLab, self-hosted variants).
//!
//! # Architecture
//!
//! The `Forge` trait defines the uniform capability surface for hosted Git
//! platforms. UI layers use the [`ForgeFactory`] rather than importing
//! specific adapters: the factory resolves a provider from routing hints and
//! the repository identity, constructs the instance, and owns the single
//! observable `current` cell along with the per-project fork-parent cache.
//!
//! # Modules
//!
//! - `config`: `RepoIdentity`, `ForgeConfig`, fork mode, provider resolution
//! - `traits`: Core `Forge` trait, errors, and request/response types
//! - `client`: Injected session objects with reset hooks
//! - [`github`]: GitHub adapter (REST v3)
//! - [`gitlab`]: GitLab adapter (REST v4, self-hosted included)
//! - `factory`: Forge selection, construction, and the fork-parent cache
//! - [`mock`]: Deterministic implementation for tests
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use gitdesk_forge::backend::{NoopAnalytics, NoopDispatch};
//! use gitdesk_forge::forge::{
//!     ForgeConfig, ForgeFactory, GitHubClient, GitLabClient, RepoIdentity,
//! };
//!
//! let factory = ForgeFactory::new(
//!     Arc::new(GitHubClient::new()),
//!     Arc::new(GitLabClient::new()),
//!     Arc::new(NoopAnalytics),
//!     Arc::new(NoopDispatch),
//! );
//!
//! let repo = RepoIdentity::new("github.com", "test-owner", "test-repo");
//! factory.set_config(ForgeConfig {
//!     repo: repo.clone(),
//!     push_repo: repo,
//!     parent_repo: None,
//!     base_branch: "main".to_string(),
//!     github_authenticated: false,
//!     detected_provider: None,
//!     fork_mode: None,
//! });
//!
//! assert_eq!(factory.current().unwrap().name(), "github");
//! ```

mod client;
mod config;
mod factory;
pub mod github;
pub mod gitlab;
pub mod mock;
mod traits;

pub use client::{GitHubClient, GitLabClient};
pub use config::{CachedParentRepo, ForgeConfig, ForgeProvider, ForkMode, RepoIdentity};
pub use factory::{BuildParams, ForgeFactory};
pub use traits::*;
