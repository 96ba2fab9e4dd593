//! Text rendering of a parsed forest.
//!
//! One node per line, two-space indent per depth, children before
//! following siblings. Printable payloads render as a quoted string,
//! anything else as uppercase hex pairs:
//!
//! ```text
//! DefName
//!   NameSeg "FOO_"
//!   DataRefObject
//!     DataObject
//!       ...
//! ```

use std::fmt::{self, Write};

use crate::colors::Colors;

use super::{Arena, NodeId};

/// Render the forest rooted at `root` as plain text.
pub fn dump(arena: &Arena, root: NodeId) -> String {
    dump_colored(arena, root, Colors::OFF)
}

/// Render the forest rooted at `root` with ANSI colors.
pub fn dump_colored(arena: &Arena, root: NodeId, colors: Colors) -> String {
    let mut out = String::new();
    format(arena, root, colors, &mut out).expect("String write never fails");
    out
}

fn format(arena: &Arena, root: NodeId, colors: Colors, out: &mut String) -> fmt::Result {
    // Explicit stack: a deeply nested table must not exhaust the call
    // stack just to be printed.
    let mut stack = vec![(root, 0usize)];
    while let Some((id, depth)) = stack.pop() {
        for _ in 0..depth {
            out.push_str("  ");
        }
        write!(out, "{}{:?}{}", colors.blue, arena.kind(id), colors.reset)?;

        let data = arena.data(id);
        if !data.is_empty() {
            if is_printable(data) {
                let text = std::str::from_utf8(data).expect("printable ASCII is UTF-8");
                write!(out, " {}\"{}\"{}", colors.green, text, colors.reset)?;
            } else {
                write!(out, " {}", colors.dim)?;
                for (i, byte) in data.iter().enumerate() {
                    if i > 0 {
                        out.push(' ');
                    }
                    write!(out, "{byte:02X}")?;
                }
                out.push_str(colors.reset);
            }
        }
        out.push('\n');

        if let Some(sibling) = arena.next_sibling(id) {
            stack.push((sibling, depth));
        }
        if let Some(child) = arena.first_child(id) {
            stack.push((child, depth + 1));
        }
    }
    Ok(())
}

/// Payloads where every byte is printable ASCII render as text.
pub(crate) fn is_printable(data: &[u8]) -> bool {
    data.iter().all(|&b| (0x20..=0x7E).contains(&b))
}
