use anyhow::{Context, Result};
use serde_json::{json, Value};
use std::ffi::OsString;
use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Parameters recorded next to a generated artifact.
pub struct Payload {
    pub command: &'static str,
    pub params: Value,
}

impl Payload {
    pub fn new(command: &'static str, params: Value) -> Self {
        Self { command, params }
    }
}

/// Provenance block shared by sidecars and `report`.
pub fn document(payload: &Payload, outputs: &[String]) -> Value {
    json!({
        "code_rev": current_git_rev(),
        "primetri_version": primetri::VERSION,
        "command": payload.command,
        "params": payload.params,
        "outputs": outputs,
    })
}

/// Write `<artifact>.provenance.json` with the git commit, callsite, params and outputs.
#[track_caller]
pub fn write_sidecar<P: AsRef<Path>>(artifact: P, payload: Payload) -> Result<PathBuf> {
    let artifact = artifact.as_ref();
    let provenance_path = provenance_path(artifact);
    if let Some(parent) = provenance_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating provenance dir {}", parent.display()))?;
        }
    }

    let callsite = Location::caller();
    let mut doc = document(&payload, &[artifact.to_string_lossy().into_owned()]);
    doc["callsite"] = json!({
        "file": callsite.file(),
        "line": callsite.line()
    });
    fs::write(&provenance_path, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", provenance_path.display()))?;
    tracing::debug!(path = %provenance_path.display(), "provenance written");
    Ok(provenance_path)
}

fn provenance_path(artifact: &Path) -> PathBuf {
    let stem = artifact
        .file_stem()
        .map(|s| s.to_os_string())
        .unwrap_or_else(|| OsString::from("artifact"));
    let mut name = stem;
    name.push(".provenance.json");
    artifact.with_file_name(name)
}

pub fn current_git_rev() -> String {
    if let Some(from_env) = option_env!("GIT_COMMIT") {
        if !from_env.is_empty() {
            return from_env.to_string();
        }
    }
    if let Ok(env_override) = std::env::var("GIT_COMMIT") {
        if !env_override.is_empty() {
            return env_override;
        }
    }
    Command::new("git")
        .args(["rev-parse", "HEAD"])
        .output()
        .ok()
        .filter(|output| output.status.success())
        .and_then(|output| String::from_utf8(output.stdout).ok())
        .map(|s| s.trim().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}
