//! ACPI table layer: the System Description Table header, checksum,
//! and the parse entry points.

use std::borrow::Cow;

use thiserror::Error;

use crate::ast::{Arena, JsonTree, NodeId, dump, dump_colored};
use crate::colors::Colors;
use crate::parser::{Fault, Limits, Parser};

/// The 36-byte header every System Description Table starts with.
///
/// Multi-byte integers are little-endian on the wire; text fields are
/// fixed-width and unterminated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableHeader {
    pub signature: [u8; 4],
    /// Total table length in bytes, header included.
    pub length: u32,
    pub revision: u8,
    /// Makes the whole table sum to zero, see [`checksum`].
    pub checksum: u8,
    pub oem_id: [u8; 6],
    pub oem_table_id: [u8; 8],
    pub oem_revision: u32,
    pub creator_id: [u8; 4],
    pub creator_revision: u32,
}

impl TableHeader {
    pub const SIZE: usize = 36;

    pub fn from_bytes(bytes: &[u8; Self::SIZE]) -> Self {
        Self {
            signature: field(bytes, 0),
            length: u32::from_le_bytes(field(bytes, 4)),
            revision: bytes[8],
            checksum: bytes[9],
            oem_id: field(bytes, 10),
            oem_table_id: field(bytes, 16),
            oem_revision: u32::from_le_bytes(field(bytes, 24)),
            creator_id: field(bytes, 28),
            creator_revision: u32::from_le_bytes(field(bytes, 32)),
        }
    }

    pub fn to_bytes(&self) -> [u8; Self::SIZE] {
        let mut out = [0; Self::SIZE];
        out[0..4].copy_from_slice(&self.signature);
        out[4..8].copy_from_slice(&self.length.to_le_bytes());
        out[8] = self.revision;
        out[9] = self.checksum;
        out[10..16].copy_from_slice(&self.oem_id);
        out[16..24].copy_from_slice(&self.oem_table_id);
        out[24..28].copy_from_slice(&self.oem_revision.to_le_bytes());
        out[28..32].copy_from_slice(&self.creator_id);
        out[32..36].copy_from_slice(&self.creator_revision.to_le_bytes());
        out
    }

    /// Signature as text, lossy for the rare non-ASCII garbage.
    pub fn signature_str(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.signature)
    }
}

const _: () = assert!(TableHeader::SIZE == 4 + 4 + 1 + 1 + 6 + 8 + 4 + 4 + 4);

fn field<const N: usize>(bytes: &[u8; TableHeader::SIZE], at: usize) -> [u8; N] {
    let mut out = [0; N];
    out.copy_from_slice(&bytes[at..at + N]);
    out
}

/// Wrapping byte sum of a whole table. A well-formed table sums to 0.
pub fn checksum(bytes: &[u8]) -> u8 {
    bytes.iter().fold(0u8, |sum, &byte| sum.wrapping_add(byte))
}

/// Why a byte buffer was rejected as an AML table.
#[derive(Debug, Error)]
pub enum TableError {
    #[error("table is {len} bytes, shorter than the {size}-byte header", size = TableHeader::SIZE)]
    TooSmall { len: usize },
    #[error("header says {header} bytes but the table has {actual}")]
    LengthMismatch { header: u32, actual: usize },
    #[error("table bytes sum to {sum:#04x}, expected zero")]
    Checksum { sum: u8 },
    #[error("malformed AML, no parse past offset {offset:#x}")]
    Malformed { offset: usize },
    #[error("unparsed bytes from offset {offset:#x} to the end of the table")]
    TrailingData { offset: usize },
    #[error(transparent)]
    Fault(#[from] Fault),
}

/// A parsed definition block: its header plus the syntax forest.
#[derive(Debug)]
pub struct Table {
    pub header: TableHeader,
    arena: Arena,
    root: NodeId,
}

impl Table {
    /// Parse a complete table: header sanity, checksum, then the AML
    /// body.
    pub fn parse(data: &[u8]) -> Result<Self, TableError> {
        Self::parse_with_limits(data, Limits::default())
    }

    /// [`Table::parse`] with explicit engine limits.
    pub fn parse_with_limits(data: &[u8], limits: Limits) -> Result<Self, TableError> {
        let Some(head) = data.first_chunk() else {
            return Err(TableError::TooSmall { len: data.len() });
        };
        let header = TableHeader::from_bytes(head);
        if header.length as usize != data.len() {
            return Err(TableError::LengthMismatch {
                header: header.length,
                actual: data.len(),
            });
        }
        let sum = checksum(data);
        if sum != 0 {
            return Err(TableError::Checksum { sum });
        }

        // The grammar re-parses the header as the first child of
        // AmlCode, so the parser gets the whole buffer.
        let mut parser = Parser::with_limits(data, limits, Arena::new());
        let Some(root) = parser.aml_code()? else {
            return Err(TableError::Malformed {
                offset: parser.cursor().high_water(),
            });
        };
        if !parser.cursor().is_empty() {
            return Err(TableError::TrailingData {
                offset: parser.cursor().pos(),
            });
        }
        Ok(Self {
            header,
            arena: parser.into_arena(),
            root,
        })
    }

    /// Root of the parsed forest, an `AmlCode` node.
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// The node store behind [`Table::root`], for callers that walk the
    /// tree themselves.
    pub fn arena(&self) -> &Arena {
        &self.arena
    }

    /// Plain-text tree dump.
    pub fn dump(&self) -> String {
        dump(&self.arena, self.root)
    }

    /// Tree dump with ANSI color codes.
    pub fn dump_colored(&self, colors: Colors) -> String {
        dump_colored(&self.arena, self.root, colors)
    }

    /// Serializable view of the tree.
    pub fn json(&self) -> JsonTree<'_> {
        JsonTree::new(&self.arena, self.root)
    }

    /// Consume the table, keeping only the node store and the root.
    pub fn into_forest(self) -> (Arena, NodeId) {
        (self.arena, self.root)
    }
}

/// Parse a headerless AML fragment as a bare term list.
///
/// Useful for method bodies and other AML cut out of a table.
pub fn parse_term_list(data: &[u8]) -> Result<(Arena, NodeId), TableError> {
    parse_term_list_with_limits(data, Limits::default())
}

/// [`parse_term_list`] with explicit engine limits.
pub fn parse_term_list_with_limits(
    data: &[u8],
    limits: Limits,
) -> Result<(Arena, NodeId), TableError> {
    let mut parser = Parser::with_limits(data, limits, Arena::new());
    let Some(root) = parser.term_list()? else {
        return Err(TableError::Malformed {
            offset: parser.cursor().high_water(),
        });
    };
    if !parser.cursor().is_empty() {
        return Err(TableError::TrailingData {
            offset: parser.cursor().pos(),
        });
    }
    Ok((parser.into_arena(), root))
}
