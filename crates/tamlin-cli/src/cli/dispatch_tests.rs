//! Tests for CLI dispatch logic.
//!
//! These tests verify:
//! 1. Unified flags: header/stats accept dump's flags without error
//! 2. Help visibility: hidden flags don't appear in --help
//! 3. Params extraction: correct fields are extracted from ArgMatches

use std::path::PathBuf;

use super::*;
use crate::cli::commands::{dump_command, header_command, stats_command};

#[test]
fn dump_params_extracts_all_fields() {
    let cmd = dump_command();
    let result = cmd.try_get_matches_from([
        "dump",
        "dsdt.aml",
        "--json",
        "--compact",
        "--fragment",
        "--color",
        "always",
    ]);
    assert!(result.is_ok(), "{:?}", result.err());

    let m = result.unwrap();
    let params = DumpParams::from_matches(&m);

    assert_eq!(params.table_path, PathBuf::from("dsdt.aml"));
    assert!(params.json);
    assert!(params.compact);
    assert!(params.fragment);
    assert!(matches!(params.color, ColorChoice::Always));
}

#[test]
fn dump_flags_default_to_off() {
    let cmd = dump_command();
    let m = cmd.try_get_matches_from(["dump", "dsdt.aml"]).unwrap();
    let params = DumpParams::from_matches(&m);

    assert!(!params.json);
    assert!(!params.compact);
    assert!(!params.fragment);
    assert!(matches!(params.color, ColorChoice::Auto));
}

#[test]
fn table_path_is_required() {
    for cmd in [dump_command(), header_command(), stats_command()] {
        let name = cmd.get_name().to_string();
        let result = cmd.try_get_matches_from([name.as_str()]);
        assert!(result.is_err(), "{name} should require a table path");
    }
}

#[test]
fn stdin_dash_is_a_table_path() {
    let cmd = dump_command();
    let m = cmd.try_get_matches_from(["dump", "-"]).unwrap();
    let params = DumpParams::from_matches(&m);

    assert_eq!(params.table_path, PathBuf::from("-"));
}

#[test]
fn color_rejects_unknown_values() {
    let cmd = dump_command();
    let result = cmd.try_get_matches_from(["dump", "dsdt.aml", "--color", "sometimes"]);
    assert!(result.is_err());
}

#[test]
fn header_accepts_dump_flags() {
    let cmd = header_command();
    let result = cmd.try_get_matches_from(["header", "dsdt.aml", "--fragment", "--compact"]);
    assert!(
        result.is_ok(),
        "header should accept dump flags: {:?}",
        result.err()
    );

    let m = result.unwrap();
    let params = HeaderParams::from_matches(&m);
    assert_eq!(params.table_path, PathBuf::from("dsdt.aml"));
    // fragment and compact are parsed but not in HeaderParams (that's the point)
}

#[test]
fn stats_accepts_dump_flags() {
    let cmd = stats_command();
    let result = cmd.try_get_matches_from(["stats", "dsdt.aml", "--compact", "--fragment"]);
    assert!(
        result.is_ok(),
        "stats should accept dump flags: {:?}",
        result.err()
    );

    let m = result.unwrap();
    let params = StatsParams::from_matches(&m);
    assert!(params.fragment);
    // compact is parsed but not in StatsParams
}

#[test]
fn stats_params_extracts_relevant_fields() {
    let cmd = stats_command();
    let result = cmd.try_get_matches_from([
        "stats",
        "ssdt.aml",
        "--json",
        "--fragment",
        "--color",
        "never",
    ]);
    assert!(result.is_ok());

    let m = result.unwrap();
    let params = StatsParams::from_matches(&m);

    assert_eq!(params.table_path, PathBuf::from("ssdt.aml"));
    assert!(params.json);
    assert!(params.fragment);
    assert!(matches!(params.color, ColorChoice::Never));
}

#[test]
fn dump_help_shows_the_full_surface() {
    let mut cmd = dump_command();
    let help = cmd.render_help().to_string();

    for flag in ["--json", "--compact", "--fragment", "--color"] {
        assert!(help.contains(flag), "dump help should show {flag}");
    }
}

#[test]
fn header_help_hides_tree_flags() {
    let mut cmd = header_command();
    let help = cmd.render_help().to_string();

    assert!(
        !help.contains("--compact"),
        "header help should not show --compact"
    );
    assert!(
        !help.contains("--fragment"),
        "header help should not show --fragment"
    );
    assert!(help.contains("--json"), "header help should show --json");
}

#[test]
fn stats_help_hides_compact_flag() {
    let mut cmd = stats_command();
    let help = cmd.render_help().to_string();

    assert!(
        !help.contains("--compact"),
        "stats help should not show --compact"
    );
    assert!(
        help.contains("--fragment"),
        "stats help SHOULD show --fragment"
    );
}

#[test]
fn build_cli_requires_a_subcommand() {
    let result = build_cli().try_get_matches_from(["tamlin"]);
    assert!(result.is_err());
}

#[test]
fn build_cli_rejects_unknown_subcommands() {
    let result = build_cli().try_get_matches_from(["tamlin", "disassemble"]);
    assert!(result.is_err());
}
