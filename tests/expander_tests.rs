use release_asset_upload::assets::{Asset, expand_assets};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn tree() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("a.txt"), b"a").unwrap();
    fs::create_dir(dir.path().join("sub")).unwrap();
    fs::write(dir.path().join("sub").join("b.txt"), b"b").unwrap();
    fs::write(dir.path().join("c.bin"), b"c").unwrap();
    dir
}

fn escaped(dir: &TempDir) -> String {
    glob::Pattern::escape(&dir.path().to_string_lossy())
}

#[test]
fn test_literal_path_uses_base_name() {
    let assets = expand_assets("v1.0", "target/release/app.tar.gz", false, None).unwrap();
    assert_eq!(
        assets,
        vec![Asset {
            source: PathBuf::from("target/release/app.tar.gz"),
            name: "app.tar.gz".to_string(),
        }]
    );
}

#[test]
fn test_literal_path_with_empty_template_uses_base_name() {
    let assets = expand_assets("v1.0", "dist/app", false, Some("")).unwrap();
    assert_eq!(assets[0].name, "app");
}

#[test]
fn test_template_substitutes_every_tag_placeholder() {
    let assets = expand_assets("v1.2", "dist/app.zip", false, Some("build-$tag.zip")).unwrap();
    assert_eq!(assets[0].name, "build-v1.2.zip");
    assert_eq!(assets[0].source, PathBuf::from("dist/app.zip"));

    let assets = expand_assets("v1.2", "dist/app.zip", false, Some("$tag/app-$tag")).unwrap();
    assert_eq!(assets[0].name, "v1.2/app-v1.2");
}

#[test]
fn test_literal_path_is_not_checked_for_existence() {
    let assets = expand_assets("v1.0", "does/not/exist.bin", false, None).unwrap();
    assert_eq!(assets.len(), 1);
}

#[test]
fn test_glob_names_are_base_names() {
    let dir = tree();
    let pattern = format!("{}/**/*.txt", escaped(&dir));

    let mut assets = expand_assets("v1.0", &pattern, true, Some("ignored-$tag")).unwrap();
    assets.sort_by(|a, b| a.name.cmp(&b.name));

    assert_eq!(assets.len(), 2);
    assert_eq!(assets[0].name, "a.txt");
    assert_eq!(assets[0].source, dir.path().join("a.txt"));
    assert_eq!(assets[1].name, "b.txt");
    assert_eq!(assets[1].source, dir.path().join("sub").join("b.txt"));
}

#[test]
fn test_glob_without_matches_is_empty() {
    let dir = tree();
    let pattern = format!("{}/*.exe", escaped(&dir));
    assert!(expand_assets("v1.0", &pattern, true, None).unwrap().is_empty());
}

#[test]
fn test_invalid_glob_pattern_is_configuration_error() {
    let err = expand_assets("v1.0", "dist/[", true, None).unwrap_err();
    assert!(err.is_configuration_error());
}
