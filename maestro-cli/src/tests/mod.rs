//! Unit tests for maestro-cli, organized by module.
//!
//! Tests are BDD-style with clear Given/When/Then comments and descriptive names.
//! Each submodule documents the behaviour under test.


/// The sample flow shipped in `flows/signup.json`.
pub(crate) fn signup_flow_path() -> std::path::PathBuf {
    std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("flows/signup.json")
}
