use std::path::PathBuf;

pub fn get_issue_fixture_path(fixture_name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("issues")
        .join(fixture_name)
}

pub fn read_issue_fixture(fixture_name: &str) -> String {
    let path = get_issue_fixture_path(fixture_name);
    std::fs::read_to_string(&path)
        .unwrap_or_else(|_| panic!("Failed to read fixture: {}", path.display()))
}
