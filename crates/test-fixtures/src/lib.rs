//! Test fixture loader and scripted inference provider shared by the
//! workspace's tests.

pub mod stub_provider;

use std::path::PathBuf;

use ecoguard_core::errors::AnalysisErrorKind;
use ecoguard_core::models::{ConfidenceRequest, ConfidenceResult};
use serde::de::DeserializeOwned;
use serde::Deserialize;

pub use stub_provider::{StubProvider, StubReply};

/// Root directory of the fixture files.
fn fixtures_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("fixtures")
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// List all JSON files in a fixture subdirectory, sorted by name.
pub fn list_fixtures(subdir: &str) -> Vec<PathBuf> {
    let dir = fixtures_root().join(subdir);
    if !dir.exists() {
        return Vec::new();
    }
    let mut files: Vec<PathBuf> = std::fs::read_dir(&dir)
        .unwrap_or_else(|e| panic!("Failed to list {}: {}", dir.display(), e))
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|p| p.extension().is_some_and(|ext| ext == "json"))
        .collect();
    files.sort();
    files
}

/// One end-to-end analysis scenario: a request, what the stub provider
/// answers, and what the analyzer must return.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisScenario {
    pub name: String,
    pub request: ConfidenceRequest,
    pub provider_payload: serde_json::Value,
    pub expected: ScenarioExpectation,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", tag = "outcome")]
pub enum ScenarioExpectation {
    Result { result: ConfidenceResult },
    Error { kind: AnalysisErrorKind },
}

/// Load every scenario under `analysis/`.
pub fn analysis_scenarios() -> Vec<AnalysisScenario> {
    list_fixtures("analysis")
        .iter()
        .map(|path| {
            let name = path
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or_default();
            load_fixture(&format!("analysis/{name}"))
        })
        .collect()
}

/// The sample request pre-filled in the operator's analysis form.
pub fn sample_request() -> ConfidenceRequest {
    ConfidenceRequest::new(
        "Vibration sensor triggered at 85% intensity, \
         acoustic sensor detected chainsaw sounds at 2:15 AM.",
        "Two similar incidents occurred in this sector last month; \
         both were confirmed illegal logging. Weather is clear.",
    )
}
