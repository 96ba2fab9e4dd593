//! Dispatch logic: extract params from ArgMatches and convert to command args.
//!
//! This module contains:
//! - `*Params` structs that mirror command `*Args` but are populated from clap
//! - `from_matches()` extractors that pull relevant fields (ignoring hidden ones)
//! - `Into<*Args>` impls to bridge dispatch → command handlers

use std::path::PathBuf;

use clap::ArgMatches;

use super::ColorChoice;
use crate::commands::dump::DumpArgs;
use crate::commands::header::HeaderArgs;
use crate::commands::stats::StatsArgs;

pub struct DumpParams {
    pub table_path: PathBuf,
    pub json: bool,
    pub compact: bool,
    pub fragment: bool,
    pub color: ColorChoice,
}

impl DumpParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            table_path: m.get_one::<PathBuf>("table_path").cloned().unwrap(),
            json: m.get_flag("json"),
            compact: m.get_flag("compact"),
            fragment: m.get_flag("fragment"),
            color: parse_color(m),
        }
    }
}

impl From<DumpParams> for DumpArgs {
    fn from(p: DumpParams) -> Self {
        // Pretty by default when stdout is a TTY, unless --compact is passed
        let pretty = !p.compact && std::io::IsTerminal::is_terminal(&std::io::stdout());

        Self {
            table_path: p.table_path,
            json: p.json,
            pretty,
            fragment: p.fragment,
            color: p.color.should_colorize(),
        }
    }
}

pub struct HeaderParams {
    pub table_path: PathBuf,
    pub json: bool,
    pub color: ColorChoice,
    // Note: compact and fragment are parsed but not extracted (unified flags)
}

impl HeaderParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            table_path: m.get_one::<PathBuf>("table_path").cloned().unwrap(),
            json: m.get_flag("json"),
            color: parse_color(m),
        }
    }
}

impl From<HeaderParams> for HeaderArgs {
    fn from(p: HeaderParams) -> Self {
        Self {
            table_path: p.table_path,
            json: p.json,
            color: p.color.should_colorize(),
        }
    }
}

pub struct StatsParams {
    pub table_path: PathBuf,
    pub json: bool,
    pub fragment: bool,
    pub color: ColorChoice,
    // Note: compact is parsed but not extracted (unified flag)
}

impl StatsParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            table_path: m.get_one::<PathBuf>("table_path").cloned().unwrap(),
            json: m.get_flag("json"),
            fragment: m.get_flag("fragment"),
            color: parse_color(m),
        }
    }
}

impl From<StatsParams> for StatsArgs {
    fn from(p: StatsParams) -> Self {
        Self {
            table_path: p.table_path,
            json: p.json,
            fragment: p.fragment,
            color: p.color.should_colorize(),
        }
    }
}

/// Parse --color flag into ColorChoice.
fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(|s| s.as_str()) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}
