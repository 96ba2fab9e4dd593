use std::path::PathBuf;

use indexmap::IndexMap;
use tamlin_lib::Colors;
use tamlin_lib::ast::{Arena, NodeId, NodeKind};
use tamlin_lib::table::{Table, parse_term_list};

use super::table_loader::load_table_bytes;

pub struct StatsArgs {
    pub table_path: PathBuf,
    pub json: bool,
    pub fragment: bool,
    pub color: bool,
}

pub fn run(args: StatsArgs) {
    let data = match load_table_bytes(&args.table_path) {
        Ok(data) => data,
        Err(msg) => {
            eprintln!("error: {}", msg);
            std::process::exit(1);
        }
    };

    let (arena, root) = if args.fragment {
        parse_term_list(&data)
    } else {
        Table::parse(&data).map(Table::into_forest)
    }
    .unwrap_or_else(|e| {
        eprintln!("error: {}", e);
        std::process::exit(1);
    });

    let counts = count_kinds(&arena, root);

    if args.json {
        let mut kinds = serde_json::Map::new();
        for (kind, count) in &counts {
            kinds.insert(format!("{kind:?}"), (*count).into());
        }
        let value = serde_json::json!({
            "kinds": kinds,
            "nodes": arena.live_nodes(),
            "payload_bytes": arena.live_bytes(),
        });
        match serde_json::to_string_pretty(&value) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("error: JSON serialization failed: {}", e);
                std::process::exit(1);
            }
        }
    } else {
        print!("{}", render(&counts, &arena, Colors::new(args.color)));
    }
}

/// Tally node kinds in dump order, so the first line of `stats` names
/// the same node as the first line of `dump`.
fn count_kinds(arena: &Arena, root: NodeId) -> IndexMap<NodeKind, u64> {
    let mut counts = IndexMap::new();
    let mut stack = vec![root];
    while let Some(id) = stack.pop() {
        *counts.entry(arena.kind(id)).or_insert(0) += 1;
        if let Some(sibling) = arena.next_sibling(id) {
            stack.push(sibling);
        }
        if let Some(child) = arena.first_child(id) {
            stack.push(child);
        }
    }
    counts
}

fn render(counts: &IndexMap<NodeKind, u64>, arena: &Arena, colors: Colors) -> String {
    use std::fmt::Write;

    let mut out = String::new();
    for (kind, count) in counts {
        // Debug output ignores the width spec, so pad a plain str.
        let name = format!("{kind:?}");
        writeln!(out, "{}{name:<24}{} {count:>6}", colors.blue, colors.reset)
            .expect("String write never fails");
    }
    writeln!(
        out,
        "\n{} kinds, {} nodes, {} payload bytes",
        counts.len(),
        arena.live_nodes(),
        arena.live_bytes()
    )
    .expect("String write never fails");
    out
}

#[cfg(test)]
mod tests {
    use tamlin_lib::table::{TableHeader, checksum};

    use super::*;

    /// `Name(FOO_, One)` in a 42-byte table.
    fn sample_table() -> Vec<u8> {
        let body = [0x08, b'F', b'O', b'O', b'_', 0x01];
        let header = TableHeader {
            signature: *b"SSDT",
            length: (TableHeader::SIZE + body.len()) as u32,
            revision: 2,
            checksum: 0,
            oem_id: *b"TAMLIN",
            oem_table_id: *b"STATSTBL",
            oem_revision: 1,
            creator_id: *b"TMLN",
            creator_revision: 1,
        };
        let mut raw = header.to_bytes().to_vec();
        raw.extend_from_slice(&body);
        raw[9] = raw[9].wrapping_sub(checksum(&raw));
        raw
    }

    #[test]
    fn counts_follow_dump_order() {
        let raw = sample_table();
        let (arena, root) = Table::parse(&raw).unwrap().into_forest();
        let counts = count_kinds(&arena, root);

        insta::assert_snapshot!(render(&counts, &arena, Colors::OFF), @r#"
        AmlCode                       1
        DefBlockHeader                1
        TableSignature                1
        TableLength                   1
        SpecCompliance                1
        CheckSum                      1
        OemId                         1
        OemTableId                    1
        OemRevision                   1
        CreatorId                     1
        CreatorRevision               1
        TermList                      2
        TermObj                       1
        Object                        1
        NameSpaceModifierObj          1
        DefName                       1
        NameString                    1
        NamePath                      1
        NameSeg                       1
        DataRefObject                 1
        DataObject                    1
        ComputationalData             1
        ConstObj                      1
        OneOp                         1

        24 kinds, 25 nodes, 41 payload bytes
        "#);
    }

    #[test]
    fn every_header_byte_lands_in_a_leaf() {
        let raw = sample_table();
        let (arena, _) = Table::parse(&raw).unwrap().into_forest();

        // All 36 header bytes are leaf payload; in the body only the
        // NameOp byte goes unrecorded, since its leaf is silent.
        assert_eq!(arena.live_bytes(), raw.len() - 1);
    }

    #[test]
    fn fragment_counts_skip_header_kinds() {
        let (arena, root) = parse_term_list(&[0xA3]).unwrap();
        let counts = count_kinds(&arena, root);

        assert_eq!(counts.len(), 4);
        assert_eq!(counts[&NodeKind::TermList], 2);
        assert_eq!(counts[&NodeKind::DefNoop], 1);
    }
}
