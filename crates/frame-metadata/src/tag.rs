use serde::{Deserialize, Serialize};

/// Presence/version tag required by the consuming platform.
pub const FRAME: &str = "fc:frame";
pub const FRAME_IMAGE: &str = "fc:frame:image";
pub const FRAME_INPUT_TEXT: &str = "fc:frame:input:text";
pub const FRAME_POST_URL: &str = "fc:frame:post_url";
pub const FRAME_REFRESH_PERIOD: &str = "fc:frame:refresh_period";

/// `fc:frame:button:{index}`, index is 1-based.
pub fn button_name(index: usize) -> String {
    format!("fc:frame:button:{index}")
}

pub fn button_action_name(index: usize) -> String {
    format!("fc:frame:button:{index}:action")
}

pub fn button_target_name(index: usize) -> String {
    format!("fc:frame:button:{index}:target")
}

/// A single `<meta name=".." content="..">` declaration.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MetaTag {
    pub name: String,
    pub content: String,
}

impl MetaTag {
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }
}

/// Minimal render tree handed to the host document renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RenderNode {
    Meta(MetaTag),
    Element {
        tag: String,
        #[serde(default)]
        attributes: Vec<(String, String)>,
        #[serde(default)]
        children: Vec<RenderNode>,
    },
    Fragment(Vec<RenderNode>),
}

impl RenderNode {
    pub fn element(tag: impl Into<String>) -> Self {
        RenderNode::Element {
            tag: tag.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Adds an attribute; no-op on non-element nodes.
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        if let RenderNode::Element { attributes, .. } = &mut self {
            attributes.push((name.into(), value.into()));
        }
        self
    }

    /// Appends children; no-op on meta nodes.
    pub fn with_children(mut self, nodes: impl IntoIterator<Item = RenderNode>) -> Self {
        match &mut self {
            RenderNode::Element { children, .. } | RenderNode::Fragment(children) => {
                children.extend(nodes)
            }
            RenderNode::Meta(_) => {}
        }
        self
    }

    /// Every meta tag in the tree, in document order.
    pub fn meta_tags(&self) -> Vec<&MetaTag> {
        let mut out = Vec::new();
        self.collect_meta(&mut out);
        out
    }

    /// First meta tag with the given name.
    pub fn find_meta(&self, name: &str) -> Option<&MetaTag> {
        self.meta_tags().into_iter().find(|tag| tag.name == name)
    }

    /// First element whose `id` attribute equals `id`.
    pub fn find_by_id(&self, id: &str) -> Option<&RenderNode> {
        match self {
            RenderNode::Meta(_) => None,
            RenderNode::Element {
                attributes,
                children,
                ..
            } => {
                if attributes.iter().any(|(k, v)| k == "id" && v == id) {
                    return Some(self);
                }
                children.iter().find_map(|child| child.find_by_id(id))
            }
            RenderNode::Fragment(children) => children.iter().find_map(|child| child.find_by_id(id)),
        }
    }

    fn collect_meta<'a>(&'a self, out: &mut Vec<&'a MetaTag>) {
        match self {
            RenderNode::Meta(tag) => out.push(tag),
            RenderNode::Element { children, .. } | RenderNode::Fragment(children) => {
                for child in children {
                    child.collect_meta(out);
                }
            }
        }
    }
}

impl From<MetaTag> for RenderNode {
    fn from(tag: MetaTag) -> Self {
        RenderNode::Meta(tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn button_names_are_one_based() {
        assert_eq!(button_name(1), "fc:frame:button:1");
        assert_eq!(button_action_name(2), "fc:frame:button:2:action");
        assert_eq!(button_target_name(4), "fc:frame:button:4:target");
    }

    #[test]
    fn meta_tags_walks_nested_nodes_in_order() {
        let tree = RenderNode::Fragment(vec![
            MetaTag::new("a", "1").into(),
            RenderNode::element("div")
                .with_attribute("id", "inner")
                .with_children([MetaTag::new("b", "2").into()]),
            MetaTag::new("c", "3").into(),
        ]);
        let tags = tree.meta_tags();
        let names: Vec<&str> = tags.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, ["a", "b", "c"]);
        assert!(tree.find_by_id("inner").is_some());
        assert!(tree.find_by_id("missing").is_none());
        assert_eq!(tree.find_meta("b").map(|t| t.content.as_str()), Some("2"));
    }
}
