//! JSON dump of a parsed tree.

use serde::{Serialize, ser};
use taoxml_dom::{AttributesMap, DomTree, NodeId, NodeType};

/// Borrowed, serializable view of one node and its subtree.
#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
enum JsonNode<'a> {
    Element {
        tag: &'a str,
        attributes: &'a AttributesMap,
        children: Vec<JsonNode<'a>>,
    },
    Text {
        content: &'a str,
    },
}

impl<'a> JsonNode<'a> {
    fn build(tree: &'a DomTree, id: NodeId) -> Option<Self> {
        let node = tree.get(id)?;
        Some(match &node.node_type {
            NodeType::Element(data) => Self::Element {
                tag: data.tag(),
                attributes: &data.attrs,
                children: children(tree, id),
            },
            NodeType::Text(content) => Self::Text { content },
        })
    }
}

fn children(tree: &DomTree, id: NodeId) -> Vec<JsonNode<'_>> {
    tree.select(id, "")
        .filter_map(|child| JsonNode::build(tree, child))
        .collect()
}

/// Deepest element nesting the JSON view will build, the same bound
/// `serde_json` applies when reading. Serialization recurses once per level.
const MAX_JSON_DEPTH: usize = 128;

/// Nesting depth below `id`, measured without recursion.
fn depth(tree: &DomTree, id: NodeId) -> usize {
    let mut deepest = 0;
    let mut pending = vec![(id, 0)];
    while let Some((id, level)) = pending.pop() {
        deepest = deepest.max(level);
        pending.extend(tree.children(id).iter().map(|&child| (child, level + 1)));
    }
    deepest
}

/// Pretty-printed JSON array of the document's top-level elements.
///
/// Documents nested deeper than [`MAX_JSON_DEPTH`] are refused with an error.
pub fn to_json(tree: &DomTree) -> serde_json::Result<String> {
    let levels = depth(tree, NodeId::ROOT);
    if levels > MAX_JSON_DEPTH {
        return Err(ser::Error::custom(format!(
            "document nests {levels} levels deep; JSON output is limited to {MAX_JSON_DEPTH}"
        )));
    }
    serde_json::to_string_pretty(&children(tree, NodeId::ROOT))
}
