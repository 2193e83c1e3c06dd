//! Integration tests for the GitHub adapter against a mock API server.

use std::sync::Arc;

use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use gitdesk_forge::forge::github::GitHubForge;
use gitdesk_forge::forge::{
    CreatePrRequest, Forge, ForgeError, GitHubClient, PrState, RepoIdentity,
};

fn forge_for(server: &MockServer, session: Arc<GitHubClient>) -> GitHubForge {
    GitHubForge::with_api_base(
        session,
        RepoIdentity::new("github.com", "fork-owner", "forked-repo"),
        "main".to_string(),
        server.uri(),
    )
}

#[tokio::test]
async fn repo_info_maps_fork_payload() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/repos/fork-owner/forked-repo"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "fork": true,
            "delete_branch_on_merge": true,
            "parent": {
                "name": "original-repo",
                "full_name": "upstream-owner/original-repo",
                "clone_url": "https://github.com/upstream-owner/original-repo.git",
                "default_branch": "main",
                "owner": { "login": "upstream-owner" }
            }
        })))
        .mount(&server)
        .await;

    let forge = forge_for(&server, Arc::new(GitHubClient::new()));
    let info = forge.repo_info().await.unwrap();

    assert_eq!(info.delete_branch_after_merge, Some(true));
    assert!(info.fork_info.is_fork);
    let parent = info.fork_info.parent.unwrap();
    assert_eq!(parent.owner, "upstream-owner");
    assert!(parent.clone_url.ends_with("original-repo.git"));
}

#[tokio::test]
async fn repo_info_maps_non_fork_payload() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/repos/fork-owner/forked-repo"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "fork": false,
            "delete_branch_on_merge": null
        })))
        .mount(&server)
        .await;

    let forge = forge_for(&server, Arc::new(GitHubClient::new()));
    let info = forge.repo_info().await.unwrap();

    assert!(!info.fork_info.is_fork);
    assert!(info.fork_info.parent.is_none());
    assert_eq!(info.delete_branch_after_merge, None);
}

#[tokio::test]
async fn create_pr_posts_and_maps_response() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/repos/fork-owner/forked-repo/pulls"))
        .and(body_partial_json(json!({
            "head": "feature",
            "base": "main",
            "title": "Add feature",
            "draft": true
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "number": 42,
            "html_url": "https://github.com/fork-owner/forked-repo/pull/42",
            "state": "open",
            "draft": true,
            "title": "Add feature",
            "head": { "ref": "feature" },
            "base": { "ref": "main" },
            "merged_at": null
        })))
        .mount(&server)
        .await;

    let forge = forge_for(&server, Arc::new(GitHubClient::with_token("ghp_test")));
    let pr = forge
        .create_pr(CreatePrRequest {
            head: "feature".into(),
            base: "main".into(),
            title: "Add feature".into(),
            body: None,
            draft: true,
        })
        .await
        .unwrap();

    assert_eq!(pr.number, 42);
    assert_eq!(pr.state, PrState::Open);
    assert!(pr.is_draft);
}

#[tokio::test]
async fn create_pr_sends_bearer_token() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/repos/fork-owner/forked-repo/pulls"))
        .and(wiremock::matchers::header(
            "authorization",
            "Bearer ghp_test",
        ))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "number": 1,
            "html_url": "https://github.com/fork-owner/forked-repo/pull/1",
            "state": "open",
            "title": "T",
            "head": { "ref": "feature" },
            "base": { "ref": "main" },
            "merged_at": null
        })))
        .expect(1)
        .mount(&server)
        .await;

    let forge = forge_for(&server, Arc::new(GitHubClient::with_token("ghp_test")));
    forge
        .create_pr(CreatePrRequest {
            head: "feature".into(),
            base: "main".into(),
            title: "T".into(),
            body: None,
            draft: false,
        })
        .await
        .unwrap();
}

#[tokio::test]
async fn find_pr_by_head_queries_owner_qualified_head() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/repos/fork-owner/forked-repo/pulls"))
        .and(query_param("head", "fork-owner:feature"))
        .and(query_param("state", "open"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "number": 7,
            "html_url": "https://github.com/fork-owner/forked-repo/pull/7",
            "state": "open",
            "title": "Existing",
            "head": { "ref": "feature" },
            "base": { "ref": "main" },
            "merged_at": null
        }])))
        .mount(&server)
        .await;

    let forge = forge_for(&server, Arc::new(GitHubClient::new()));
    let found = forge.find_pr_by_head("feature").await.unwrap();
    assert_eq!(found.unwrap().number, 7);
}

#[tokio::test]
async fn find_pr_by_head_returns_none_for_empty_result() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/repos/fork-owner/forked-repo/pulls"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let forge = forge_for(&server, Arc::new(GitHubClient::new()));
    assert!(forge.find_pr_by_head("feature").await.unwrap().is_none());
}

#[tokio::test]
async fn not_found_maps_to_not_found_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/repos/fork-owner/forked-repo"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(json!({ "message": "Not Found" })),
        )
        .mount(&server)
        .await;

    let forge = forge_for(&server, Arc::new(GitHubClient::new()));
    let err = forge.repo_info().await.unwrap_err();
    assert!(matches!(err, ForgeError::NotFound(message) if message == "Not Found"));
}

#[tokio::test]
async fn rate_limit_maps_to_rate_limited() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/repos/fork-owner/forked-repo"))
        .respond_with(
            ResponseTemplate::new(429).set_body_json(json!({ "message": "slow down" })),
        )
        .mount(&server)
        .await;

    let forge = forge_for(&server, Arc::new(GitHubClient::new()));
    assert!(matches!(
        forge.repo_info().await.unwrap_err(),
        ForgeError::RateLimited
    ));
}

#[tokio::test]
async fn unauthorized_maps_to_auth_failed() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/repos/fork-owner/forked-repo"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({ "message": "Bad credentials" })),
        )
        .mount(&server)
        .await;

    let forge = forge_for(&server, Arc::new(GitHubClient::with_token("stale")));
    assert!(matches!(
        forge.repo_info().await.unwrap_err(),
        ForgeError::AuthFailed(_)
    ));
}
