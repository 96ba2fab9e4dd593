//! Tamlin: ACPI AML table parser.
//!
//! Parses raw AML (ACPI Machine Language) tables into a tagged AST forest.
//! The parser is a small backtracking combinator engine over a byte cursor:
//! grammar rules compose five primitives (sequence, series, repetition,
//! terminated string, ordered choice) and never consume input on failure.
//! Nodes live in an index arena and form first-child/next-sibling chains.
//!
//! # Example
//!
//! ```
//! use tamlin_lib::Table;
//! use tamlin_lib::table::{TableHeader, checksum};
//!
//! // Body of a one-entry table: Name(FOO_, One).
//! let body = [0x08, b'F', b'O', b'O', b'_', 0x01];
//!
//! let header = TableHeader {
//!     signature: *b"DSDT",
//!     length: (36 + body.len()) as u32,
//!     revision: 2,
//!     checksum: 0,
//!     oem_id: *b"TAMLIN",
//!     oem_table_id: *b"EXAMPLE ",
//!     oem_revision: 1,
//!     creator_id: *b"TMLN",
//!     creator_revision: 1,
//! };
//! let mut raw = header.to_bytes().to_vec();
//! raw.extend_from_slice(&body);
//! raw[9] = raw[9].wrapping_sub(checksum(&raw));
//!
//! let table = Table::parse(&raw)?;
//! assert_eq!(table.header.signature_str(), "DSDT");
//! # Ok::<(), tamlin_lib::TableError>(())
//! ```

pub mod ast;
pub mod colors;
pub mod parser;
pub mod table;

#[cfg(test)]
mod test_utils;

pub use ast::{Arena, NodeId, NodeKind};
pub use colors::Colors;
pub use parser::{Fault, Limits, ParseResult, Parser, Rule};
pub use table::{Table, TableError, TableHeader};
