use steamfolio::models::{CommitSearchResults, GitHubUser, Repository};
use steamfolio::{Error, GitHubApi, GitHubClient, ProfileAggregator, SITE};

fn get_test_token() -> Option<String> {
    std::env::var("GITHUB_TOKEN").ok()
}

#[tokio::test]
async fn client_builds_with_and_without_token() {
    assert!(GitHubClient::new(Some("test_token")).is_ok());
    assert!(GitHubClient::new(None).is_ok());
}

#[test]
fn user_payload_deserializes_with_extra_fields() {
    // Abridged from a real /users/{username} response
    let json = r#"{
        "login": "ThaMoreira",
        "id": 12345678,
        "node_id": "MDQ6VXNlcjEyMzQ1Njc4",
        "avatar_url": "https://avatars.githubusercontent.com/u/12345678?v=4",
        "gravatar_id": "",
        "type": "User",
        "name": "Tha Moreira",
        "company": null,
        "blog": "",
        "location": "Brazil",
        "email": null,
        "bio": "Software developer",
        "public_repos": 25,
        "followers": 40,
        "following": 10,
        "created_at": "2016-03-01T12:00:00Z"
    }"#;

    let user: GitHubUser = serde_json::from_str(json).expect("Failed to deserialize user");

    assert_eq!(user.login, "ThaMoreira");
    assert_eq!(user.name.as_deref(), Some("Tha Moreira"));
    assert_eq!(user.email, None);
    assert_eq!(user.public_repos, 25);
}

#[test]
fn repo_listing_keeps_only_stars_and_language() {
    let json = r#"[
        {"name": "portfolio", "full_name": "ThaMoreira/portfolio", "stargazers_count": 7, "language": "TypeScript", "fork": false},
        {"name": "scripts", "full_name": "ThaMoreira/scripts", "stargazers_count": 0, "language": null, "fork": false}
    ]"#;

    let repos: Vec<Repository> = serde_json::from_str(json).expect("Failed to deserialize repos");

    assert_eq!(repos.len(), 2);
    assert_eq!(repos[0].stargazers_count, 7);
    assert_eq!(repos[0].language.as_deref(), Some("TypeScript"));
    assert_eq!(repos[1].language, None);
}

#[test]
fn commit_search_payload_defaults_optional_fields() {
    let json = r#"{"total_count": 128}"#;

    let results: CommitSearchResults =
        serde_json::from_str(json).expect("Failed to deserialize search results");

    assert_eq!(results.total_count, 128);
    assert!(!results.incomplete_results);
    assert!(results.items.is_empty());
}

#[tokio::test]
#[ignore = "Requires valid GitHub token"]
async fn live_profile_aggregation() {
    let token = get_test_token().expect("GITHUB_TOKEN not set");
    let github = GitHubClient::new(Some(&token)).expect("Failed to create client");
    let aggregator = ProfileAggregator::new(github);

    let profile = aggregator
        .aggregate(SITE.account)
        .await
        .expect("Failed to aggregate profile");

    assert_eq!(profile.user.login, SITE.account);
    assert!(!profile.user.avatar_url.is_empty());
    if let Some(ref language) = profile.stats.dominant_language {
        assert!(language.percentage.ends_with('%'));
    }
}

#[tokio::test]
#[ignore = "Hits the live GitHub API"]
async fn live_unknown_user_is_not_found() {
    let client = GitHubClient::new(get_test_token().as_deref()).expect("Failed to create client");

    let result = client.get_user("steamfolio-no-such-user-a1b2c3").await;

    assert!(result.is_err());
    match result.unwrap_err() {
        Error::UserNotFound(_) => {} // Expected
        other => panic!("Expected UserNotFound error, got: {:?}", other),
    }
}
