//! JSON view of a parsed forest.
//!
//! [`JsonTree`] borrows a node and serializes it as
//! `{"kind": ..., "data": ..., "children": [...]}` — `data` only when the
//! payload is non-empty, rendered the same way the text dump renders it
//! (quoted text or uppercase hex pairs); `children` only when present.
//! Serialization recurses per tree level, so depth tracks table nesting,
//! not node count.

use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};

use super::dump::is_printable;
use super::{Arena, NodeId};

/// Serializable borrow of one node and everything below it.
#[derive(Clone, Copy)]
pub struct JsonTree<'a> {
    arena: &'a Arena,
    id: NodeId,
}

impl<'a> JsonTree<'a> {
    pub fn new(arena: &'a Arena, id: NodeId) -> Self {
        Self { arena, id }
    }
}

impl Serialize for JsonTree<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let node = self.arena.node(self.id);
        let has_data = !node.data.is_empty();
        let has_children = node.first_child.is_some();

        let len = 1 + usize::from(has_data) + usize::from(has_children);
        let mut map = serializer.serialize_map(Some(len))?;
        map.serialize_entry("kind", &node.kind)?;
        if has_data {
            map.serialize_entry("data", &render_data(&node.data))?;
        }
        if has_children {
            map.serialize_entry(
                "children",
                &JsonChildren {
                    arena: self.arena,
                    id: self.id,
                },
            )?;
        }
        map.end()
    }
}

struct JsonChildren<'a> {
    arena: &'a Arena,
    id: NodeId,
}

impl Serialize for JsonChildren<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(None)?;
        for child in self.arena.children(self.id) {
            seq.serialize_element(&JsonTree::new(self.arena, child))?;
        }
        seq.end()
    }
}

fn render_data(data: &[u8]) -> String {
    use std::fmt::Write;

    if is_printable(data) {
        std::str::from_utf8(data)
            .expect("printable ASCII is UTF-8")
            .to_owned()
    } else {
        let mut out = String::with_capacity(data.len() * 3);
        for (i, byte) in data.iter().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            write!(out, "{byte:02X}").expect("String write never fails");
        }
        out
    }
}
