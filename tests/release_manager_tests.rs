mod common;

use common::{Call, FakeReleaseApi, coordinates, release};
use release_asset_upload::ReleaseError;
use release_asset_upload::github::{GitHubReleaseManager, ReleaseOrigin, ReleaseSettings};

fn settings(tag: &str) -> ReleaseSettings {
    ReleaseSettings {
        tag: tag.to_string(),
        prerelease: true,
        release_name: Some("Shiny".to_string()),
        body: Some("new body".to_string()),
        title: "New title".to_string(),
    }
}

#[tokio::test]
async fn test_existing_release_is_returned_unchanged() {
    let api = FakeReleaseApi::new().with_release(release(1, "v1.0"));
    let repo = coordinates();
    let manager = GitHubReleaseManager::new(&api, &repo);

    let handle = manager.find_or_create_release(&settings("v1.0")).await.unwrap();

    assert_eq!(handle.origin(), ReleaseOrigin::Found);
    assert_eq!(handle.id(), 1);
    assert_eq!(handle.release(), &release(1, "v1.0"));
    assert_eq!(api.calls(), vec![Call::GetReleaseByTag("v1.0".to_string())]);
}

#[tokio::test]
async fn test_missing_release_is_created_once() {
    let api = FakeReleaseApi::new().with_release(release(1, "v1.0"));
    let repo = coordinates();
    let manager = GitHubReleaseManager::new(&api, &repo);

    let handle = manager.find_or_create_release(&settings("v2.0")).await.unwrap();

    assert_eq!(handle.origin(), ReleaseOrigin::Created);
    let created = api.create_calls();
    assert_eq!(created.len(), 1);
    assert_eq!(created[0].tag_name, "v2.0");
    assert_eq!(created[0].name.as_deref(), Some("Shiny"));
    assert_eq!(created[0].body, "new body");
    assert!(created[0].prerelease);
    assert!(handle.upload_url().contains(&format!("/releases/{}/assets", handle.id())));
}

#[tokio::test]
async fn test_created_release_gets_default_body() {
    let api = FakeReleaseApi::new();
    let repo = coordinates();
    let manager = GitHubReleaseManager::new(&api, &repo);

    let custom = ReleaseSettings {
        body: None,
        release_name: Some(String::new()),
        prerelease: false,
        ..settings("v3.0")
    };
    manager.find_or_create_release(&custom).await.unwrap();

    let created = api.create_calls();
    assert_eq!(created[0].body, "New title\nChange Log\n");
    assert_eq!(created[0].name, None);
    assert!(!created[0].prerelease);
}

#[tokio::test]
async fn test_lookup_errors_other_than_not_found_propagate() {
    let api = FakeReleaseApi {
        lookup_error: Some(401),
        ..FakeReleaseApi::new()
    };
    let repo = coordinates();
    let manager = GitHubReleaseManager::new(&api, &repo);

    let err = manager.find_or_create_release(&settings("v1.0")).await.err().unwrap();

    assert!(matches!(err, ReleaseError::GitHub(_)));
    assert!(api.create_calls().is_empty());
    assert!(err.to_string().contains("Bad credentials"));
}
