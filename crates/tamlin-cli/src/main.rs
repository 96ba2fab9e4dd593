mod cli;
mod commands;

use cli::{DumpParams, HeaderParams, StatsParams, build_cli};

fn main() {
    let matches = build_cli().get_matches();

    match matches.subcommand() {
        Some(("dump", m)) => {
            let params = DumpParams::from_matches(m);
            commands::dump::run(params.into());
        }
        Some(("header", m)) => {
            let params = HeaderParams::from_matches(m);
            commands::header::run(params.into());
        }
        Some(("stats", m)) => {
            let params = StatsParams::from_matches(m);
            commands::stats::run(params.into());
        }
        _ => unreachable!("clap should have caught this"),
    }
}
