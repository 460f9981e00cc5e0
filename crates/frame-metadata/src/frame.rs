use std::fmt;

use serde::{Deserialize, Serialize};

use crate::context::Wrapper;
use crate::errors::FrameMetadataError;

/// Number of buttons the consuming platform renders.
pub const MAX_BUTTONS: usize = 4;

/// Declared behavior of a frame button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ButtonAction {
    Post,
    PostRedirect,
    Mint,
    Link,
}

impl ButtonAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Post => "post",
            Self::PostRedirect => "post_redirect",
            Self::Mint => "mint",
            Self::Link => "link",
        }
    }

    /// Only `mint` and `link` carry a target URI.
    pub fn accepts_target(&self) -> bool {
        matches!(self, Self::Mint | Self::Link)
    }
}

impl fmt::Display for ButtonAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single frame button.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FrameButton {
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<ButtonAction>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
}

impl FrameButton {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            action: None,
            target: None,
        }
    }

    pub fn with_action(mut self, action: ButtonAction) -> Self {
        self.action = Some(action);
        self
    }

    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.target = Some(target.into());
        self
    }

    /// Target that should be advertised for this button, if any.
    pub fn effective_target(&self) -> Option<&str> {
        match self.action {
            Some(action) if action.accepts_target() => self.target.as_deref(),
            _ => None,
        }
    }
}

/// Text input offered to the end user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FrameInput {
    pub text: String,
}

/// Structured description of a frame, read once per render.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FrameDescription {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input: Option<FrameInput>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub buttons: Option<Vec<FrameButton>>,
    #[serde(default, alias = "postUrl", skip_serializing_if = "Option::is_none")]
    pub post_url: Option<String>,
    #[serde(
        default,
        alias = "refreshPeriod",
        skip_serializing_if = "Option::is_none"
    )]
    pub refresh_period: Option<u64>,
    #[serde(skip)]
    pub wrapper: Option<Wrapper>,
}

impl FrameDescription {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json(json: &str) -> Result<Self, FrameMetadataError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    pub fn with_input(mut self, text: impl Into<String>) -> Self {
        self.input = Some(FrameInput { text: text.into() });
        self
    }

    pub fn with_buttons(mut self, buttons: impl IntoIterator<Item = FrameButton>) -> Self {
        self.buttons = Some(buttons.into_iter().collect());
        self
    }

    pub fn with_post_url(mut self, post_url: impl Into<String>) -> Self {
        self.post_url = Some(post_url.into());
        self
    }

    pub fn with_refresh_period(mut self, seconds: u64) -> Self {
        self.refresh_period = Some(seconds);
        self
    }

    pub fn with_wrapper(mut self, wrapper: Wrapper) -> Self {
        self.wrapper = Some(wrapper);
        self
    }

    pub fn buttons(&self) -> &[FrameButton] {
        self.buttons.as_deref().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn target_only_for_mint_and_link() {
        let button = FrameButton::new("go").with_target("https://example.com");
        assert_eq!(button.effective_target(), None);
        assert_eq!(
            button.clone().with_action(ButtonAction::Post).effective_target(),
            None
        );
        assert_eq!(
            button
                .clone()
                .with_action(ButtonAction::PostRedirect)
                .effective_target(),
            None
        );
        assert_eq!(
            button.clone().with_action(ButtonAction::Mint).effective_target(),
            Some("https://example.com")
        );
        assert_eq!(
            button.with_action(ButtonAction::Link).effective_target(),
            Some("https://example.com")
        );
    }

    #[test]
    fn decodes_snake_case_actions() {
        let frame = FrameDescription::from_json(
            r#"{"image":"img","buttons":[{"label":"a","action":"post_redirect"}]}"#,
        )
        .expect("decode");
        assert_eq!(frame.buttons()[0].action, Some(ButtonAction::PostRedirect));
    }

    #[test]
    fn accepts_camel_case_aliases() {
        let frame =
            FrameDescription::from_json(r#"{"postUrl":"https://example.com","refreshPeriod":5}"#)
                .expect("decode");
        assert_eq!(frame.post_url.as_deref(), Some("https://example.com"));
        assert_eq!(frame.refresh_period, Some(5));
    }

    #[test]
    fn rejects_unknown_fields() {
        let err = FrameDescription::from_json(r#"{"image":"img","colour":"red"}"#).unwrap_err();
        assert!(matches!(err, FrameMetadataError::Decode(_)));
    }

    #[test]
    fn rejects_negative_refresh_period() {
        assert!(FrameDescription::from_json(r#"{"refresh_period":-1}"#).is_err());
    }
}
