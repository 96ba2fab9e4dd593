use std::path::PathBuf;

use tamlin_lib::Colors;
use tamlin_lib::table::{TableError, TableHeader, checksum};

use super::table_loader::load_table_bytes;

pub struct HeaderArgs {
    pub table_path: PathBuf,
    pub json: bool,
    pub color: bool,
}

pub fn run(args: HeaderArgs) {
    let data = match load_table_bytes(&args.table_path) {
        Ok(data) => data,
        Err(msg) => {
            eprintln!("error: {}", msg);
            std::process::exit(1);
        }
    };

    // No validation beyond the minimum length: length and checksum
    // problems are reported inline instead of refusing the table.
    let Some(head) = data.first_chunk() else {
        eprintln!("error: {}", TableError::TooSmall { len: data.len() });
        std::process::exit(1);
    };
    let header = TableHeader::from_bytes(head);
    let sum = checksum(&data);

    if args.json {
        match serde_json::to_string_pretty(&json_view(&header, data.len(), sum)) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("error: JSON serialization failed: {}", e);
                std::process::exit(1);
            }
        }
    } else {
        let colors = Colors::new(args.color);
        print!("{}", render(&header, data.len(), sum, colors));
    }
}

fn render(header: &TableHeader, data_len: usize, sum: u8, colors: Colors) -> String {
    use std::fmt::Write;

    let Colors {
        blue,
        green,
        dim,
        reset,
    } = colors;

    let length = if header.length as usize == data_len {
        format!("{}", header.length)
    } else {
        format!("{} (buffer is {} bytes)", header.length, data_len)
    };
    let status = if sum == 0 {
        "ok".to_string()
    } else {
        format!("table bytes sum to {sum:#04x}")
    };

    let mut out = String::new();
    let mut line = |name: &str, value: String| {
        writeln!(out, "{blue}{name:<16}{reset} {value}").expect("String write never fails");
    };

    line(
        "Signature",
        format!("{green}\"{}\"{reset}", header.signature_str()),
    );
    line("Length", length);
    line("Revision", format!("{}", header.revision));
    line(
        "Checksum",
        format!("{dim}{:#04x}{reset} ({status})", header.checksum),
    );
    line(
        "OemId",
        format!("{green}\"{}\"{reset}", String::from_utf8_lossy(&header.oem_id)),
    );
    line(
        "OemTableId",
        format!(
            "{green}\"{}\"{reset}",
            String::from_utf8_lossy(&header.oem_table_id)
        ),
    );
    line(
        "OemRevision",
        format!("{dim}{:#010x}{reset}", header.oem_revision),
    );
    line(
        "CreatorId",
        format!(
            "{green}\"{}\"{reset}",
            String::from_utf8_lossy(&header.creator_id)
        ),
    );
    line(
        "CreatorRevision",
        format!("{dim}{:#010x}{reset}", header.creator_revision),
    );
    out
}

fn json_view(header: &TableHeader, data_len: usize, sum: u8) -> serde_json::Value {
    serde_json::json!({
        "signature": header.signature_str(),
        "length": header.length,
        "length_matches": (header.length as usize == data_len),
        "revision": header.revision,
        "checksum": header.checksum,
        "checksum_ok": (sum == 0),
        "oem_id": String::from_utf8_lossy(&header.oem_id),
        "oem_table_id": String::from_utf8_lossy(&header.oem_table_id),
        "oem_revision": header.oem_revision,
        "creator_id": String::from_utf8_lossy(&header.creator_id),
        "creator_revision": header.creator_revision,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_header() -> TableHeader {
        TableHeader {
            signature: *b"DSDT",
            length: 42,
            revision: 2,
            checksum: 0x6B,
            oem_id: *b"ACME  ",
            oem_table_id: *b"ROADRUNR",
            oem_revision: 0x20250801,
            creator_id: *b"TMLN",
            creator_revision: 1,
        }
    }

    #[test]
    fn renders_fields_in_wire_order() {
        insta::assert_snapshot!(render(&sample_header(), 42, 0, Colors::OFF), @r#"
        Signature        "DSDT"
        Length           42
        Revision         2
        Checksum         0x6b (ok)
        OemId            "ACME  "
        OemTableId       "ROADRUNR"
        OemRevision      0x20250801
        CreatorId        "TMLN"
        CreatorRevision  0x00000001
        "#);
    }

    #[test]
    fn reports_length_and_checksum_trouble_inline() {
        let rendered = render(&sample_header(), 40, 0x03, Colors::OFF);

        assert!(rendered.contains("Length           42 (buffer is 40 bytes)"));
        assert!(rendered.contains("Checksum         0x6b (table bytes sum to 0x03)"));
    }

    #[test]
    fn json_view_reports_checksum_status() {
        let value = json_view(&sample_header(), 42, 0);
        assert_eq!(value["signature"], "DSDT");
        assert_eq!(value["length"], 42);
        assert_eq!(value["length_matches"], true);
        assert_eq!(value["checksum_ok"], true);

        let broken = json_view(&sample_header(), 40, 0x03);
        assert_eq!(broken["length_matches"], false);
        assert_eq!(broken["checksum_ok"], false);
    }
}
