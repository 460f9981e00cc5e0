use crate::{
    config::RenderConfig,
    frame::{FrameDescription, MAX_BUTTONS},
    tag::{
        FRAME, FRAME_IMAGE, FRAME_INPUT_TEXT, FRAME_POST_URL, FRAME_REFRESH_PERIOD, MetaTag,
        RenderNode, button_action_name, button_name, button_target_name,
    },
};
use tracing::{debug, warn};

/// Trait describing a renderer that turns a frame description into meta tags.
pub trait FrameRenderer {
    fn render_tags(&self, frame: &FrameDescription) -> Vec<MetaTag>;

    /// Renders the tags and hands them to the frame's wrapper, if any.
    fn render(&self, frame: &FrameDescription) -> RenderNode {
        let children: Vec<RenderNode> = self
            .render_tags(frame)
            .into_iter()
            .map(RenderNode::Meta)
            .collect();
        match &frame.wrapper {
            Some(wrapper) => wrapper.wrap(children),
            None => RenderNode::Fragment(children),
        }
    }
}

/// Default renderer emitting the `fc:frame:*` tag set.
#[derive(Debug, Clone, Default)]
pub struct MetaTagRenderer {
    pub config: RenderConfig,
}

impl MetaTagRenderer {
    pub fn new(config: RenderConfig) -> Self {
        Self { config }
    }
}

impl FrameRenderer for MetaTagRenderer {
    fn render_tags(&self, frame: &FrameDescription) -> Vec<MetaTag> {
        let mut tags = Vec::new();

        if self.config.emit_version_tag {
            tags.push(MetaTag::new(FRAME, self.config.version.as_str()));
        }
        if let Some(image) = &frame.image {
            tags.push(MetaTag::new(FRAME_IMAGE, image.as_str()));
        }
        if let Some(input) = &frame.input {
            tags.push(MetaTag::new(FRAME_INPUT_TEXT, input.text.as_str()));
        }

        let buttons = frame.buttons();
        if buttons.len() > MAX_BUTTONS {
            warn!(
                count = buttons.len(),
                max = MAX_BUTTONS,
                "frame declares more buttons than the platform renders"
            );
        }
        for (index, button) in (1..).zip(buttons) {
            tags.push(MetaTag::new(button_name(index), button.label.as_str()));
            if let Some(action) = button.action {
                tags.push(MetaTag::new(button_action_name(index), action.as_str()));
            }
            if let Some(target) = button.effective_target() {
                tags.push(MetaTag::new(button_target_name(index), target));
            }
        }

        if let Some(post_url) = &frame.post_url {
            tags.push(MetaTag::new(FRAME_POST_URL, post_url.as_str()));
        }
        if let Some(seconds) = frame.refresh_period {
            tags.push(MetaTag::new(FRAME_REFRESH_PERIOD, seconds.to_string()));
        }

        debug!(tags = tags.len(), "rendered frame metadata");
        tags
    }
}

/// Convenience helper that builds the tag list with the default renderer.
pub fn frame_meta_tags(frame: &FrameDescription) -> Vec<MetaTag> {
    MetaTagRenderer::default().render_tags(frame)
}

/// Convenience helper that renders the (optionally wrapped) tree with the default renderer.
pub fn render_frame_metadata(frame: &FrameDescription) -> RenderNode {
    MetaTagRenderer::default().render(frame)
}
