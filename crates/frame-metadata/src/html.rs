//! Materializes a render tree as an HTML head fragment.

use crate::tag::{MetaTag, RenderNode};

pub fn to_html(node: &RenderNode) -> String {
    let mut out = String::new();
    write_node(node, &mut out);
    out
}

pub fn meta_to_html(tag: &MetaTag) -> String {
    format!(
        r#"<meta name="{}" content="{}">"#,
        htmlescape::encode_minimal(&tag.name),
        htmlescape::encode_minimal(&tag.content)
    )
}

fn write_node(node: &RenderNode, out: &mut String) {
    match node {
        RenderNode::Meta(tag) => out.push_str(&meta_to_html(tag)),
        RenderNode::Element {
            tag,
            attributes,
            children,
        } => {
            out.push('<');
            out.push_str(tag);
            for (name, value) in attributes {
                out.push_str(&format!(
                    r#" {}="{}""#,
                    name,
                    htmlescape::encode_minimal(value)
                ));
            }
            out.push('>');
            if !children.is_empty() {
                out.push('\n');
                write_children(children, out);
                out.push('\n');
            }
            out.push_str("</");
            out.push_str(tag);
            out.push('>');
        }
        RenderNode::Fragment(children) => write_children(children, out),
    }
}

fn write_children(children: &[RenderNode], out: &mut String) {
    for (i, child) in children.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        write_node(child, out);
    }
}
