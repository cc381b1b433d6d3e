use crate::error::SarifError;
use crate::model::SarifLog;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

pub fn save(path: &str, log: &SarifLog) -> Result<()> {
    let data = to_string(log)?;
    fs::write(path, &data).with_context(|| format!("Failed to write to file: {}", path))?;
    tracing::debug!(path, bytes = data.len(), "saved log");
    Ok(())
}

pub fn load(path: &str) -> Result<SarifLog> {
    let data =
        fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))?;
    let log = from_str(&data).with_context(|| format!("Failed to parse SARIF log: {}", path))?;
    tracing::debug!(
        path,
        runs = log.runs.as_ref().map(Vec::len).unwrap_or(0),
        "loaded log"
    );
    Ok(log)
}

pub fn from_str(data: &str) -> Result<SarifLog, SarifError> {
    Ok(serde_json::from_str(data)?)
}

pub fn to_string(log: &SarifLog) -> Result<String, SarifError> {
    Ok(serde_json::to_string_pretty(log)?)
}

pub fn exists(path: &str) -> bool {
    Path::new(path).exists()
}
