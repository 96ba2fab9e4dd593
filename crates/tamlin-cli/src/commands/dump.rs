use std::path::PathBuf;

use tamlin_lib::Colors;
use tamlin_lib::ast::{JsonTree, dump_colored};
use tamlin_lib::table::{Table, parse_term_list};

use super::table_loader::load_table_bytes;

pub struct DumpArgs {
    pub table_path: PathBuf,
    pub json: bool,
    pub pretty: bool,
    pub fragment: bool,
    pub color: bool,
}

pub fn run(args: DumpArgs) {
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

    if args.json {
        let tree = JsonTree::new(&arena, root);
        let output = if args.pretty {
            serde_json::to_string_pretty(&tree)
        } else {
            serde_json::to_string(&tree)
        };
        match output {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("error: JSON serialization failed: {}", e);
                std::process::exit(1);
            }
        }
    } else {
        let colors = Colors::new(args.color);
        print!("{}", dump_colored(&arena, root, colors));
    }
}
