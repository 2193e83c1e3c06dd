//! Integration tests for forge selection and the fork-parent cache.
//!
//! These tests verify:
//! - Domain-based provider selection, including self-hosted GitLab
//! - Detection and override precedence
//! - Fork-mode resolution in `set_config`
//! - Sticky per-project fork-parent caching
//! - Reactive observation of the current instance

use std::sync::{Arc, Mutex};

use gitdesk_forge::backend::{
    AnalyticsSink, Dispatch, NoopAnalytics, NoopDispatch, StoreAction,
};
use gitdesk_forge::forge::{
    BuildParams, ForgeConfig, ForgeFactory, ForgeProvider, ForkMode, GitHubClient, GitLabClient,
    RepoIdentity,
};

fn create_factory() -> ForgeFactory {
    ForgeFactory::new(
        Arc::new(GitHubClient::new()),
        Arc::new(GitLabClient::new()),
        Arc::new(NoopAnalytics),
        Arc::new(NoopDispatch),
    )
}

fn build_params(domain: &str) -> BuildParams {
    BuildParams {
        repo: RepoIdentity::new(domain, "test-owner", "test-repo"),
        base_branch: "some-base".to_string(),
        detected_provider: None,
        forge_override: None,
    }
}

mod selection {
    use super::*;

    #[test]
    fn github_domain_creates_github_service() {
        let factory = create_factory();
        assert_eq!(factory.build(build_params("github.com")).name(), "github");
    }

    #[test]
    fn gitlab_domain_creates_gitlab_service() {
        let factory = create_factory();
        assert_eq!(factory.build(build_params("gitlab.com")).name(), "gitlab");
    }

    #[test]
    fn self_hosted_domain_creates_gitlab_service() {
        let factory = create_factory();
        assert_eq!(
            factory.build(build_params("gitlab.domain.com")).name(),
            "gitlab"
        );
    }

    #[test]
    fn detected_provider_overrides_domain_both_directions() {
        let factory = create_factory();

        let forge = factory.build(BuildParams {
            detected_provider: Some(ForgeProvider::GitHub),
            ..build_params("gitlab.com")
        });
        assert_eq!(forge.name(), "github");

        let forge = factory.build(BuildParams {
            detected_provider: Some(ForgeProvider::GitLab),
            ..build_params("github.com")
        });
        assert_eq!(forge.name(), "gitlab");
    }

    #[test]
    fn explicit_override_wins_over_detection_and_domain() {
        let factory = create_factory();
        let forge = factory.build(BuildParams {
            detected_provider: Some(ForgeProvider::GitHub),
            forge_override: Some(ForgeProvider::GitLab),
            ..build_params("github.com")
        });
        assert_eq!(forge.name(), "gitlab");
    }

    #[test]
    fn build_does_not_touch_current() {
        let factory = create_factory();
        let _ = factory.build(build_params("github.com"));
        assert!(factory.current().is_none());
    }
}

mod fork_mode {
    use super::*;

    fn fork_repo() -> RepoIdentity {
        RepoIdentity::new("github.com", "fork-owner", "forked-repo")
    }

    fn parent_repo() -> RepoIdentity {
        RepoIdentity::new("github.com", "upstream-owner", "original-repo")
    }

    fn config(
        fork_mode: Option<ForkMode>,
        parent_repo: Option<RepoIdentity>,
    ) -> ForgeConfig {
        ForgeConfig {
            repo: fork_repo(),
            push_repo: fork_repo(),
            parent_repo,
            base_branch: "main".to_string(),
            github_authenticated: true,
            detected_provider: None,
            fork_mode,
        }
    }

    #[test]
    fn own_purposes_uses_fork_repo_as_target() {
        let factory = create_factory();
        factory.set_config(config(Some(ForkMode::OwnPurposes), Some(parent_repo())));

        let forge = factory.current().expect("configured");
        assert_eq!(forge.name(), "github");
        assert_eq!(forge.repo().owner, "fork-owner");
    }

    #[test]
    fn contribute_to_parent_uses_parent_repo_as_target() {
        let factory = create_factory();
        factory.set_config(config(
            Some(ForkMode::ContributeToParent),
            Some(parent_repo()),
        ));

        let forge = factory.current().expect("configured");
        assert_eq!(forge.name(), "github");
        assert_eq!(forge.repo().owner, "upstream-owner");
    }

    #[test]
    fn missing_parent_falls_back_to_fork_repo() {
        let factory = create_factory();
        factory.set_config(config(Some(ForkMode::ContributeToParent), None));

        let forge = factory.current().expect("configured");
        assert_eq!(forge.name(), "github");
        assert_eq!(forge.repo().owner, "fork-owner");
    }

    #[test]
    fn unset_fork_mode_defaults_to_contribute_to_parent() {
        let factory = create_factory();
        factory.set_config(config(None, Some(parent_repo())));

        let forge = factory.current().expect("configured");
        assert_eq!(forge.repo().owner, "upstream-owner");
    }

    #[test]
    fn cross_provider_fork_selects_parent_provider() {
        // Fork lives on GitHub, upstream on a self-hosted GitLab: targeting
        // the parent must select GitLab.
        let factory = create_factory();
        factory.set_config(ForgeConfig {
            repo: fork_repo(),
            push_repo: fork_repo(),
            parent_repo: Some(RepoIdentity::new(
                "gitlab.domain.com",
                "upstream-group",
                "original-repo",
            )),
            base_branch: "main".to_string(),
            github_authenticated: true,
            detected_provider: None,
            fork_mode: Some(ForkMode::ContributeToParent),
        });

        assert_eq!(factory.current().expect("configured").name(), "gitlab");
    }

    #[test]
    fn detected_provider_applies_to_effective_target() {
        let factory = create_factory();
        factory.set_config(ForgeConfig {
            detected_provider: Some(ForgeProvider::GitLab),
            ..config(None, Some(parent_repo()))
        });

        assert_eq!(factory.current().expect("configured").name(), "gitlab");
    }
}

mod parent_cache {
    use super::*;
    use pretty_assertions::assert_eq;

    fn parent_repo() -> RepoIdentity {
        RepoIdentity::new("github.com", "upstream-owner", "original-repo")
    }

    #[test]
    fn caches_parent_info() {
        let factory = create_factory();
        assert!(factory.cached_parent_repo().is_none());

        factory.set_cached_parent_repo(Some(parent_repo()), "project-1");
        assert_eq!(factory.cached_parent_repo(), Some(parent_repo()));
    }

    #[test]
    fn does_not_clear_cache_when_called_with_none() {
        let factory = create_factory();
        factory.set_cached_parent_repo(Some(parent_repo()), "project-1");

        factory.set_cached_parent_repo(None, "project-1");
        assert_eq!(factory.cached_parent_repo(), Some(parent_repo()));
    }

    #[test]
    fn clears_cache_when_project_changes() {
        let factory = create_factory();
        factory.set_cached_parent_repo(Some(parent_repo()), "project-1");

        factory.set_cached_parent_repo(None, "project-2");
        assert!(factory.cached_parent_repo().is_none());
    }

    #[test]
    fn replaces_cache_when_project_changes_with_parent() {
        let factory = create_factory();
        factory.set_cached_parent_repo(Some(parent_repo()), "project-1");

        let other = RepoIdentity::new("gitlab.com", "group", "tool");
        factory.set_cached_parent_repo(Some(other.clone()), "project-2");
        assert_eq!(factory.cached_parent_repo(), Some(other));
    }
}

mod observation {
    use super::*;
    use pretty_assertions::assert_eq;

    #[derive(Default)]
    struct Recording {
        events: Mutex<Vec<String>>,
        actions: Mutex<Vec<StoreAction>>,
    }

    impl AnalyticsSink for Recording {
        fn capture(&self, event: &str, _props: &[(&str, String)]) {
            self.events.lock().unwrap().push(event.to_string());
        }
    }

    impl Dispatch for Recording {
        fn dispatch(&self, action: StoreAction) {
            self.actions.lock().unwrap().push(action);
        }
    }

    fn config_for(domain: &str) -> ForgeConfig {
        let repo = RepoIdentity::new(domain, "test-owner", "test-repo");
        ForgeConfig {
            repo: repo.clone(),
            push_repo: repo,
            parent_repo: None,
            base_branch: "main".to_string(),
            github_authenticated: false,
            detected_provider: None,
            fork_mode: None,
        }
    }

    #[test]
    fn reconfiguration_is_last_write_wins() {
        let factory = create_factory();
        factory.set_config(config_for("github.com"));
        factory.set_config(config_for("gitlab.com"));
        factory.set_config(config_for("github.com"));

        assert_eq!(factory.current().expect("configured").name(), "github");
    }

    #[test]
    fn watchers_see_each_reconfiguration() {
        let factory = create_factory();
        let mut rx = factory.watch_current();

        factory.set_config(config_for("gitlab.com"));
        assert!(rx.has_changed().unwrap());
        assert_eq!(rx.borrow_and_update().as_ref().unwrap().name(), "gitlab");

        factory.set_config(config_for("github.com"));
        assert!(rx.has_changed().unwrap());
        assert_eq!(rx.borrow_and_update().as_ref().unwrap().name(), "github");
    }

    #[test]
    fn each_reconfiguration_emits_analytics_and_one_store_action() {
        let recording = Arc::new(Recording::default());
        let factory = ForgeFactory::new(
            Arc::new(GitHubClient::new()),
            Arc::new(GitLabClient::new()),
            recording.clone(),
            recording.clone(),
        );

        factory.set_config(config_for("github.com"));
        factory.set_config(config_for("gitlab.com"));

        assert_eq!(
            *recording.events.lock().unwrap(),
            vec!["forge_selected", "forge_selected"]
        );
        assert_eq!(
            *recording.actions.lock().unwrap(),
            vec![
                StoreAction::ForgeChanged {
                    provider: ForgeProvider::GitHub
                },
                StoreAction::ForgeChanged {
                    provider: ForgeProvider::GitLab
                },
            ]
        );
    }
}
