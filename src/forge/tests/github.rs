use secrecy::SecretString;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_partial_json, method, path, query_param},
};

use crate::forge::{
    config::RemoteConfig,
    github::Github,
    request::{CompareRequest, CreateReleaseRequest},
    traits::Forge,
};

fn remote_config(server: &MockServer) -> RemoteConfig {
    RemoteConfig {
        api_url: server.uri(),
        owner: "owner".into(),
        repo: "repo".into(),
        token: SecretString::from("test-token".to_string()),
        dry_run: false,
    }
}

fn compare_commit(sha: &str, message: &str) -> serde_json::Value {
    serde_json::json!({
        "sha": sha,
        "commit": { "message": message }
    })
}

#[tokio::test]
#[test_log::test]
async fn compare_commits_returns_commits_in_api_order() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/repos/owner/repo/compare/v1.0.0...main"))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(
            serde_json::json!({
                "total_commits": 3,
                "commits": [
                    compare_commit("aaa", "Merge pull request #12 from x"),
                    compare_commit("bbb", "fix typo"),
                    compare_commit("ccc", "Merge pull request #7 from y"),
                ]
            }),
        ))
        .expect(1)
        .mount(&server)
        .await;

    let forge = Github::new(remote_config(&server)).unwrap();
    let commits = forge
        .compare_commits(CompareRequest {
            base: "v1.0.0".into(),
            head: "main".into(),
        })
        .await
        .unwrap();

    let shas: Vec<&str> = commits.iter().map(|c| c.sha.as_str()).collect();
    assert_eq!(shas, vec!["aaa", "bbb", "ccc"]);
    assert_eq!(commits[1].message, "fix typo");
}

#[tokio::test]
async fn compare_commits_follows_pages_until_total_collected() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/repos/owner/repo/compare/start...end"))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(
            serde_json::json!({
                "total_commits": 3,
                "commits": [
                    compare_commit("aaa", "one"),
                    compare_commit("bbb", "two"),
                ]
            }),
        ))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/repos/owner/repo/compare/start...end"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(
            serde_json::json!({
                "total_commits": 3,
                "commits": [compare_commit("ccc", "three")]
            }),
        ))
        .expect(1)
        .mount(&server)
        .await;

    let forge = Github::new(remote_config(&server)).unwrap();
    let commits = forge
        .compare_commits(CompareRequest {
            base: "start".into(),
            head: "end".into(),
        })
        .await
        .unwrap();

    assert_eq!(commits.len(), 3);
    assert_eq!(commits[2].message, "three");
}

#[tokio::test]
async fn compare_commits_handles_empty_comparison() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/repos/owner/repo/compare/main...main"))
        .respond_with(ResponseTemplate::new(200).set_body_json(
            serde_json::json!({ "total_commits": 0, "commits": [] }),
        ))
        .expect(1)
        .mount(&server)
        .await;

    let forge = Github::new(remote_config(&server)).unwrap();
    let commits = forge
        .compare_commits(CompareRequest {
            base: "main".into(),
            head: "main".into(),
        })
        .await
        .unwrap();

    assert!(commits.is_empty());
}

#[tokio::test]
async fn get_pull_request_title_returns_title() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/repos/owner/repo/pulls/12"))
        .respond_with(ResponseTemplate::new(200).set_body_json(
            serde_json::json!({
                "number": 12,
                "title": "WKS-100 add feature"
            }),
        ))
        .mount(&server)
        .await;

    let forge = Github::new(remote_config(&server)).unwrap();
    let title = forge.get_pull_request_title(12).await.unwrap();

    assert_eq!(title, "WKS-100 add feature");
}

#[tokio::test]
async fn get_pull_request_title_fails_on_missing_pull_request() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/repos/owner/repo/pulls/99"))
        .respond_with(ResponseTemplate::new(404).set_body_json(
            serde_json::json!({
                "message": "Not Found",
                "documentation_url": "https://docs.github.com/rest"
            }),
        ))
        .mount(&server)
        .await;

    let forge = Github::new(remote_config(&server)).unwrap();
    let result = forge.get_pull_request_title(99).await;

    assert!(result.is_err());
}

#[tokio::test]
async fn create_release_posts_release_object() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/repos/owner/repo/releases"))
        .and(body_partial_json(serde_json::json!({
            "tag_name": "2024-03-07.1605",
            "name": "2024-03-07.1605",
            "target_commitish": "v1.0.0",
            "body": "- unrelated change #7",
            "draft": false,
            "prerelease": false
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(
            serde_json::json!({
                "id": 42,
                "tag_name": "2024-03-07.1605",
                "name": "2024-03-07.1605",
                "html_url": "https://github.com/owner/repo/releases/tag/2024-03-07.1605"
            }),
        ))
        .expect(1)
        .mount(&server)
        .await;

    let forge = Github::new(remote_config(&server)).unwrap();
    let release = forge
        .create_release(CreateReleaseRequest {
            tag_name: "2024-03-07.1605".into(),
            name: "2024-03-07.1605".into(),
            target_commitish: "v1.0.0".into(),
            body: "- unrelated change #7".into(),
        })
        .await
        .unwrap();

    assert_eq!(release.id, 42);
    assert_eq!(release.name, "2024-03-07.1605");
    assert!(release.html_url.ends_with("/releases/tag/2024-03-07.1605"));
}
