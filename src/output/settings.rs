use crate::flags::{FlagItem, FlagSources, extract_items};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::debug;

/// Parameters a host tool passes along when it asks for flags.
///
/// Only `filename` is recognised; any other key is accepted and dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SettingsRequest {
    #[serde(default)]
    pub filename: Option<PathBuf>,
}

impl SettingsRequest {
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).context("Invalid settings request JSON")
    }
}

/// The flag list as handed back to the host.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Settings {
    pub flags: Vec<String>,
}

impl Settings {
    /// Keeps the tokens of an extracted stream, dropping line ends.
    pub fn from_items(items: &[FlagItem]) -> Self {
        let flags = items
            .iter()
            .filter_map(|item| item.as_token().map(str::to_string))
            .collect();
        Settings { flags }
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Collects every token from `sources` in order.
pub fn settings(
    sources: &FlagSources,
    request: &SettingsRequest,
) -> Result<Settings> {
    if let Some(file) = &request.filename {
        debug!("Settings requested for {:?}", file);
    }
    Ok(Settings::from_items(&extract_items(sources)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_request_keys_are_ignored() -> anyhow::Result<()> {
        let req = SettingsRequest::from_json(
            r#"{"filename": "src/main.cpp", "language": "cfamily", "client_data": {}}"#,
        )?;
        assert_eq!(req.filename, Some(PathBuf::from("src/main.cpp")));
        assert_eq!(SettingsRequest::from_json("{}")?, SettingsRequest::default());
        Ok(())
    }

    #[test]
    fn from_items_drops_line_ends() {
        let items = [
            FlagItem::Token("-Wall".into()),
            FlagItem::EndOfLine,
            FlagItem::Token(String::new()),
            FlagItem::EndOfLine,
        ];
        assert_eq!(Settings::from_items(&items).flags, vec!["-Wall", ""]);
    }

    #[test]
    fn malformed_request_is_an_error() {
        assert!(SettingsRequest::from_json("{filename").is_err());
    }

    #[test]
    fn json_has_single_flags_key() -> anyhow::Result<()> {
        let s = Settings {
            flags: vec!["-Wall".into(), "-DX=1".into()],
        };
        let v: serde_json::Value = serde_json::from_str(&s.to_json_pretty()?)?;
        assert_eq!(v, serde_json::json!({"flags": ["-Wall", "-DX=1"]}));
        Ok(())
    }
}
