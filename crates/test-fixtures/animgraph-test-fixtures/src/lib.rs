//! Shared JSON fixtures for animgraph tests and benches.
//!
//! Fixture files live under `<repo>/fixtures` and are indexed by `fixtures/manifest.json`.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use once_cell::sync::Lazy;
use serde::de::DeserializeOwned;
use serde::Deserialize;

static MANIFEST: Lazy<Manifest> = Lazy::new(|| {
    let raw = include_str!("../../../../fixtures/manifest.json");
    serde_json::from_str(raw).expect("fixtures manifest should parse")
});

#[derive(Debug, Deserialize)]
struct Manifest {
    /// Selector definition name -> path relative to the fixtures root.
    selectors: BTreeMap<String, String>,
}

fn fixtures_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../../../fixtures")
}

fn selector_rel(name: &str) -> Result<&'static str> {
    MANIFEST
        .selectors
        .get(name)
        .map(String::as_str)
        .ok_or_else(|| anyhow!("unknown selector fixture '{name}'"))
}

pub mod selectors {
    use super::*;

    /// Fixture names in sorted order.
    pub fn keys() -> Vec<String> {
        MANIFEST.selectors.keys().cloned().collect()
    }

    pub fn path(name: &str) -> Result<PathBuf> {
        Ok(fixtures_root().join(selector_rel(name)?))
    }

    pub fn json(name: &str) -> Result<String> {
        let path = path(name)?;
        fs::read_to_string(&path)
            .with_context(|| format!("failed to read selector fixture at {}", path.display()))
    }

    pub fn load<T: DeserializeOwned>(name: &str) -> Result<T> {
        let text = json(name)?;
        serde_json::from_str(&text)
            .with_context(|| format!("failed to parse selector fixture '{name}'"))
    }
}
