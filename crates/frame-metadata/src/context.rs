use std::fmt;
use std::sync::Arc;

use crate::tag::RenderNode;

type WrapFn = dyn Fn(Vec<RenderNode>) -> RenderNode + Send + Sync;

/// Container supplied by the caller; receives the generated meta nodes as its
/// children and returns a tree of its own shape.
#[derive(Clone)]
pub struct Wrapper(Arc<WrapFn>);

impl Wrapper {
    pub fn new<F>(wrap: F) -> Self
    where
        F: Fn(Vec<RenderNode>) -> RenderNode + Send + Sync + 'static,
    {
        Self(Arc::new(wrap))
    }

    /// Wraps the children in a single element carrying `attributes`.
    pub fn element<I, K, V>(tag: impl Into<String>, attributes: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let tag = tag.into();
        let attributes: Vec<(String, String)> = attributes
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self::new(move |children| RenderNode::Element {
            tag: tag.clone(),
            attributes: attributes.clone(),
            children,
        })
    }

    pub fn wrap(&self, children: Vec<RenderNode>) -> RenderNode {
        (self.0)(children)
    }
}

impl fmt::Debug for Wrapper {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Wrapper").finish_non_exhaustive()
    }
}

// Two wrappers are equal only when they share the same function.
impl PartialEq for Wrapper {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tag::MetaTag;

    #[test]
    fn element_wrapper_keeps_children_untouched() {
        let wrapper = Wrapper::element("div", [("id", "wrapper")]);
        let node = wrapper.wrap(vec![MetaTag::new("fc:frame", "vNext").into()]);
        assert_eq!(
            node,
            RenderNode::Element {
                tag: "div".into(),
                attributes: vec![("id".into(), "wrapper".into())],
                children: vec![RenderNode::Meta(MetaTag::new("fc:frame", "vNext"))],
            }
        );
    }

    #[test]
    fn clones_compare_equal() {
        let wrapper = Wrapper::new(RenderNode::Fragment);
        assert_eq!(wrapper, wrapper.clone());
        assert_ne!(wrapper, Wrapper::new(RenderNode::Fragment));
    }
}
