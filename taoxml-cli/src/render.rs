//! Markup rendering of a parsed tree.
//!
//! Uses only the public navigation surface: tag, attributes, child count and
//! an unfiltered [`DomTree::select`] over children. Layout:
//!
//! ```text
//! <tag a="v">        element with children, then each child, then
//! </tag>
//! <tag a="v"/>       element without children
//! <![CDATA[value]]>  text
//! ```
//!
//! Every line ends in a newline. Values are written as stored, without
//! re-escaping.

use std::fmt::{self, Write};

use taoxml_dom::{DomTree, NodeId};

/// Render `id` and its subtree. Rendering the root renders each top-level
/// element in turn.
pub fn to_markup(tree: &DomTree, id: NodeId) -> String {
    let mut out = String::new();
    let written = if id == NodeId::ROOT {
        tree.select(id, "")
            .try_for_each(|child| write_node(&mut out, tree, child))
    } else {
        write_node(&mut out, tree, id)
    };
    // Writing into a String cannot fail.
    debug_assert!(written.is_ok());
    out
}

/// One pending step of the walk.
enum Step {
    Open(NodeId),
    Close(NodeId),
}

/// Write `id` and its subtree. Pending steps live on an explicit stack, so
/// deeply nested documents render without deep recursion.
fn write_node(out: &mut impl Write, tree: &DomTree, id: NodeId) -> fmt::Result {
    let mut steps = vec![Step::Open(id)];

    while let Some(step) = steps.pop() {
        match step {
            Step::Open(id) => {
                if let Some(text) = tree.as_text(id) {
                    writeln!(out, "<![CDATA[{text}]]>")?;
                    continue;
                }
                let Some(element) = tree.as_element(id) else {
                    continue;
                };

                write!(out, "<{}", element.tag())?;
                for (name, value) in element.attributes() {
                    write!(out, " {name}=\"{value}\"")?;
                }

                if tree.child_count(id) == 0 {
                    writeln!(out, "/>")?;
                    continue;
                }

                writeln!(out, ">")?;
                steps.push(Step::Close(id));
                let first_child = steps.len();
                steps.extend(tree.select(id, "").map(Step::Open));
                steps[first_child..].reverse();
            }
            Step::Close(id) => {
                if let Some(element) = tree.as_element(id) {
                    writeln!(out, "</{}>", element.tag())?;
                }
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::to_markup;
    use taoxml_dom::NodeId;

    fn render(input: &str) -> String {
        let tree = taoxml_parser::parse(input).expect("valid markup");
        to_markup(&tree, NodeId::ROOT)
    }

    #[test]
    fn childless_element_self_closes() {
        assert_eq!(render("<a></a>"), "<a/>\n");
    }

    #[test]
    fn element_with_children_and_text() {
        assert_eq!(
            render(r#"<a y='2' x="1"><b/>hi</a>"#),
            "<a x=\"1\" y=\"2\">\n<b/>\n<![CDATA[hi]]>\n</a>\n"
        );
    }

    #[test]
    fn root_renders_each_top_level_element() {
        assert_eq!(render("<a/>\n<b/>"), "<a/>\n<b/>\n");
    }

    #[test]
    fn decoded_values_are_written_verbatim() {
        assert_eq!(
            render(r#"<p q="&quot;">&lt;x&gt;</p>"#),
            "<p q=\"\"\">\n<![CDATA[<x>]]>\n</p>\n"
        );
    }

    #[test]
    fn renders_a_subtree() {
        let tree = taoxml_parser::parse("<a><b><c/></b></a>").expect("valid markup");
        let b = tree.find(NodeId::ROOT).path(["a", "b"]).node().expect("b");
        assert_eq!(to_markup(&tree, b), "<b>\n<c/>\n</b>\n");
    }

    #[test]
    fn renders_deep_nesting() {
        let depth = 20_000;
        let input = format!("{}<a/>{}", "<a>".repeat(depth), "</a>".repeat(depth));
        let out = render(&input);
        assert_eq!(out.lines().count(), 2 * depth + 1);
        assert!(out.starts_with("<a>\n<a>\n"));
        assert!(out.ends_with("<a/>\n</a>\n</a>\n"));
    }
}
