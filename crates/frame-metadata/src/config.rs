use std::env;

use serde::{Deserialize, Serialize};

use crate::errors::FrameMetadataError;

pub const DEFAULT_FRAME_VERSION: &str = "vNext";
pub const FRAME_VERSION_ENV: &str = "FRAME_METADATA_VERSION";
pub const FRAME_VERSION_TAG_ENV: &str = "FRAME_METADATA_VERSION_TAG";

fn default_version() -> String {
    DEFAULT_FRAME_VERSION.to_string()
}

fn default_emit_version_tag() -> bool {
    true
}

/// Knobs for the `fc:frame` presence tag.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct RenderConfig {
    #[serde(default = "default_version")]
    pub version: String,
    #[serde(default = "default_emit_version_tag")]
    pub emit_version_tag: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            version: default_version(),
            emit_version_tag: default_emit_version_tag(),
        }
    }
}

impl RenderConfig {
    /// Reads `FRAME_METADATA_VERSION` and `FRAME_METADATA_VERSION_TAG`.
    /// Missing or unparsable values fall back to the defaults.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(version) = env::var(FRAME_VERSION_ENV)
            .ok()
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
        {
            config.version = version;
        }
        if let Some(flag) = env::var(FRAME_VERSION_TAG_ENV)
            .ok()
            .and_then(|value| parse_switch(&value))
        {
            config.emit_version_tag = flag;
        }
        config
    }

    pub fn validate(&self) -> Result<(), FrameMetadataError> {
        if self.version.is_empty() || self.version.chars().any(char::is_whitespace) {
            return Err(FrameMetadataError::InvalidVersion(self.version.clone()));
        }
        Ok(())
    }
}

/// Parse an on/off switch (case-insensitive).
pub fn parse_switch(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "on" | "true" | "1" | "yes" => Some(true),
        "off" | "false" | "0" | "no" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_vnext_with_tag() {
        let config = RenderConfig::default();
        assert_eq!(config.version, "vNext");
        assert!(config.emit_version_tag);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_json_fills_defaults() {
        let config: RenderConfig =
            serde_json::from_str(r#"{"emit_version_tag": false}"#).expect("parse");
        assert_eq!(config.version, DEFAULT_FRAME_VERSION);
        assert!(!config.emit_version_tag);
    }

    #[test]
    fn rejects_unknown_keys() {
        assert!(serde_json::from_str::<RenderConfig>(r#"{"versoin": "x"}"#).is_err());
    }

    #[test]
    fn validate_rejects_blank_versions() {
        for version in ["", "v Next", " "] {
            let config = RenderConfig {
                version: version.to_string(),
                ..Default::default()
            };
            assert!(matches!(
                config.validate(),
                Err(FrameMetadataError::InvalidVersion(_))
            ));
        }
    }

    #[test]
    fn parse_switch_values() {
        assert_eq!(parse_switch("OFF"), Some(false));
        assert_eq!(parse_switch(" yes "), Some(true));
        assert_eq!(parse_switch("maybe"), None);
    }
}
