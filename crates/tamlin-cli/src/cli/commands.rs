//! Command builders for the CLI.
//!
//! Each command is built using the shared arg builders from `args.rs`.
//! The unified flags feature is implemented here: dump/header/stats accept
//! the same flag set, with irrelevant ones hidden from `--help`.

use clap::Command;

use super::args::*;

/// Add hidden tree output args (for commands that don't print the tree).
fn with_hidden_tree_args(cmd: Command) -> Command {
    cmd.arg(compact_arg().hide(true))
        .arg(fragment_arg().hide(true))
}

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("tamlin")
        .about("ACPI AML table parser and dumper")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(dump_command())
        .subcommand(header_command())
        .subcommand(stats_command())
}

/// Parse a table and print its syntax tree.
///
/// The full-surface command: every shared flag is visible here.
pub fn dump_command() -> Command {
    Command::new("dump")
        .about("Parse a table and print its syntax tree")
        .override_usage(
            "\
  tamlin dump <TABLE>
  tamlin dump <TABLE> --json [--compact]
  tamlin dump --fragment <TABLE>",
        )
        .after_help(
            r#"EXAMPLES:
  tamlin dump dsdt.aml                 # text tree
  tamlin dump dsdt.aml --json          # JSON (pretty on a TTY)
  tamlin dump --fragment method.bin    # headerless term list
  cat ssdt1.aml | tamlin dump -        # read from stdin"#,
        )
        .arg(table_arg())
        .arg(json_arg())
        .arg(compact_arg())
        .arg(fragment_arg())
        .arg(color_arg())
}

/// Decode the 36-byte table header.
///
/// Accepts all shared flags for a unified CLI experience, but only uses
/// table/json/color. Tree output flags are hidden and ignored.
pub fn header_command() -> Command {
    let cmd = Command::new("header")
        .about("Decode a table's 36-byte header")
        .override_usage(
            "\
  tamlin header <TABLE>
  tamlin header <TABLE> --json",
        )
        .after_help(
            r#"EXAMPLES:
  tamlin header dsdt.aml              # field listing
  tamlin header dsdt.aml --json       # machine-readable
  tamlin header broken.aml            # also reports length/checksum trouble"#,
        )
        .arg(table_arg())
        .arg(json_arg())
        .arg(color_arg());

    // Hidden unified flags
    with_hidden_tree_args(cmd)
}

/// Count node kinds in a parsed table.
///
/// Accepts all shared flags for a unified CLI experience; --compact is
/// hidden and ignored (stats JSON is always pretty).
pub fn stats_command() -> Command {
    let cmd = Command::new("stats")
        .about("Count node kinds in a parsed table")
        .override_usage(
            "\
  tamlin stats <TABLE>
  tamlin stats --fragment <TABLE>",
        )
        .after_help(
            r#"EXAMPLES:
  tamlin stats dsdt.aml               # per-kind node counts
  tamlin stats dsdt.aml --json
  tamlin stats --fragment method.bin  # headerless term list"#,
        )
        .arg(table_arg())
        .arg(json_arg())
        .arg(fragment_arg())
        .arg(color_arg());

    // Hidden unified flags (--fragment is visible for stats)
    cmd.arg(compact_arg().hide(true))
}
