use release_asset_upload::context::{RepositoryCoordinates, resolve_repository};
use release_asset_upload::{CliError, EnvConfig, ReleaseError};

fn ambient(repo: &str) -> EnvConfig {
    EnvConfig::from_pairs([("GITHUB_REPOSITORY", repo)])
}

#[test]
fn test_parse_owner_and_name() {
    let repo = RepositoryCoordinates::parse("octo/widgets").unwrap();
    assert_eq!(repo.owner, "octo");
    assert_eq!(repo.name, "widgets");
    assert_eq!(repo.to_string(), "octo/widgets");
}

#[test]
fn test_parse_splits_on_first_slash() {
    let repo = RepositoryCoordinates::parse("octo/widgets/extra").unwrap();
    assert_eq!(repo.owner, "octo");
    assert_eq!(repo.name, "widgets/extra");
}

#[test]
fn test_parse_rejects_malformed_values() {
    for value in ["", "x/", "/y", "noslash"] {
        let err = RepositoryCoordinates::parse(value).unwrap_err();
        assert!(
            matches!(err, ReleaseError::Cli(CliError::MalformedRepository { .. })),
            "{value:?} should be rejected, got {err:?}"
        );
        assert!(err.is_configuration_error());
    }
}

#[test]
fn test_malformed_messages_name_the_missing_part() {
    let err = RepositoryCoordinates::parse("/y").unwrap_err();
    assert_eq!(err.to_string(), "Could not extract 'owner' from 'repo_name': /y.");

    let err = RepositoryCoordinates::parse("x/").unwrap_err();
    assert_eq!(err.to_string(), "Could not extract 'repo' from 'repo_name': x/.");
}

#[test]
fn test_override_wins_over_ambient() {
    let repo = resolve_repository(Some("other/place"), &ambient("octo/widgets")).unwrap();
    assert_eq!(repo.owner, "other");
    assert_eq!(repo.name, "place");
}

#[test]
fn test_missing_or_empty_override_uses_ambient() {
    let env = ambient("octo/widgets");
    for repo_override in [None, Some("")] {
        let repo = resolve_repository(repo_override, &env).unwrap();
        assert_eq!(repo.to_string(), "octo/widgets");
    }
}

#[test]
fn test_missing_ambient_repository_is_configuration_error() {
    let err = resolve_repository(None, &EnvConfig::default()).unwrap_err();
    assert!(err.is_configuration_error());
    assert!(err.to_string().contains("GITHUB_REPOSITORY"));
}
