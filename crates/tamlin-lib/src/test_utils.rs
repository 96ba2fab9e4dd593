//! Shared helpers for the in-crate tests.

use crate::ast::dump;
use crate::parser::{Parser, Rule};
use crate::table::{TableHeader, checksum};

/// Run `rule` against `input`, expect a full match, and render the tree.
pub(crate) fn dump_rule<'a>(input: &'a [u8], rule: Rule<'a>) -> String {
    let mut parser = Parser::new(input);
    let node = rule(&mut parser)
        .expect("rule faulted")
        .expect("rule mismatched");
    assert!(
        parser.cursor().is_empty(),
        "rule left {} unparsed bytes",
        parser.cursor().remaining()
    );
    dump(parser.arena(), node)
}

/// Run `rule` against `input` and expect a clean mismatch: nothing
/// consumed, nothing leaked.
pub(crate) fn expect_mismatch<'a>(input: &'a [u8], rule: Rule<'a>) {
    let mut parser = Parser::new(input);
    let result = rule(&mut parser).expect("rule faulted");
    assert_eq!(result, None);
    assert_eq!(parser.cursor().pos(), 0, "mismatch must not consume");
    assert_eq!(parser.arena().live_nodes(), 0, "mismatch must not leak nodes");
    assert_eq!(parser.arena().live_bytes(), 0, "mismatch must not leak bytes");
}

/// Assemble a valid table image: 36-byte header with a correct checksum
/// followed by `body`.
pub(crate) fn build_table(signature: [u8; 4], body: &[u8]) -> Vec<u8> {
    let header = TableHeader {
        signature,
        length: (TableHeader::SIZE + body.len()) as u32,
        revision: 2,
        checksum: 0,
        oem_id: *b"TAMLIN",
        oem_table_id: *b"TESTTBL ",
        oem_revision: 1,
        creator_id: *b"TMLN",
        creator_revision: 1,
    };
    let mut raw = header.to_bytes().to_vec();
    raw.extend_from_slice(body);
    raw[9] = raw[9].wrapping_sub(checksum(&raw));
    raw
}
