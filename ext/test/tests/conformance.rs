//! Conformance tests that run YAML fixtures against verdict
//!
//! Run with: cargo test -p verdict-test --test conformance --features verdict-test/fixtures
//!
//! Note: This test file requires the `fixtures` feature to be enabled.

#![cfg(feature = "fixtures")]

use std::path::{Path, PathBuf};
use verdict_test::fixture::Fixture;

/// Get the fixtures directory relative to the workspace root
fn fixtures_dir() -> PathBuf {
    // The manifest dir is ext/test; fixtures live at the workspace root
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    Path::new(manifest_dir)
        .parent() // ext
        .and_then(Path::parent) // workspace root
        .expect("Could not find workspace root")
        .join("fixtures")
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Load and run all fixtures in a directory
fn run_fixtures_in_dir(dir: &Path) {
    init_tracing();
    let fixtures = Fixture::load_dir(dir).unwrap_or_else(|e| panic!("{e}"));
    assert!(!fixtures.is_empty(), "no fixtures in {}", dir.display());

    for fixture in fixtures {
        fixture.run_and_assert();
    }
}

#[test]
fn test_combinators() {
    run_fixtures_in_dir(&fixtures_dir().join("01_combinators"));
}

#[test]
fn test_flattening() {
    run_fixtures_in_dir(&fixtures_dir().join("02_flattening"));
}

#[test]
fn test_boundaries() {
    run_fixtures_in_dir(&fixtures_dir().join("03_boundaries"));
}
