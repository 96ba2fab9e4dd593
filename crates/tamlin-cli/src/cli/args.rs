//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` that can be composed into commands.
//! This allows the same arg definition to be reused across commands with
//! different visibility settings (via `.hide(true)`).

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

/// Table image to parse (positional).
pub fn table_arg() -> Arg {
    Arg::new("table_path")
        .value_name("TABLE")
        .value_parser(value_parser!(PathBuf))
        .required(true)
        .index(1)
        .help("AML table image; '-' reads from stdin")
}

/// Emit JSON instead of the text tree (--json).
pub fn json_arg() -> Arg {
    Arg::new("json")
        .long("json")
        .action(ArgAction::SetTrue)
        .help("Output JSON instead of a text tree")
}

/// Output compact JSON (--compact).
pub fn compact_arg() -> Arg {
    Arg::new("compact")
        .long("compact")
        .action(ArgAction::SetTrue)
        .help("Output compact JSON (default: pretty when stdout is a TTY)")
}

/// Treat the input as a headerless term list (--fragment).
pub fn fragment_arg() -> Arg {
    Arg::new("fragment")
        .long("fragment")
        .action(ArgAction::SetTrue)
        .help("Parse a bare term list with no table header")
}

/// Color output control (--color).
pub fn color_arg() -> Arg {
    Arg::new("color")
        .long("color")
        .value_name("WHEN")
        .default_value("auto")
        .value_parser(["auto", "always", "never"])
        .help("Colorize output")
}
