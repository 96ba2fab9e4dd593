//! Syntax tree for parsed AML.
//!
//! Nodes live in an index arena and link first-child/next-sibling, so a
//! node together with its sibling chain and descendants forms a forest.
//! Grouping nodes carry no payload; leaf nodes own the bytes they matched.

mod arena;
mod dump;
mod json;
mod kind;

#[cfg(test)]
mod arena_tests;
#[cfg(test)]
mod dump_tests;
#[cfg(test)]
mod json_tests;

pub use arena::{AllocError, Arena, Children, Node, NodeId};
pub use dump::{dump, dump_colored};
pub use json::JsonTree;
pub use kind::NodeKind;
