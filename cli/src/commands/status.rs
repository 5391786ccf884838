use std::io::Write;

use chartops_core::api as core_api;
use chartops_core::report::write_banner;
use chartops_core::status::report::{write_categories, write_update, TITLE};
use chartops_core::util::time::today;
use clap::CommandFactory;

use crate::commands::cli::{Args, StatusArgs};

/// `--show` wins over an update; with neither, prints the subcommand usage.
pub fn handle_status<W: Write>(
    args: StatusArgs,
    cfg: &core_api::AppConfig,
    out: &mut W,
) -> Result<i32, core_api::CliError> {
    if args.show {
        write_banner(out, TITLE)?;
        let categories = core_api::show_status(&cfg.status);
        write_categories(out, &categories)?;
        out.flush()?;
        return Ok(0);
    }

    match (args.chart, args.status) {
        (Some(chart), Some(status)) => {
            let result = core_api::update_chart_status(&chart, status, &cfg.status, &today());
            write_update(out, &chart.display().to_string(), &result)?;
            out.flush()?;
            Ok(if result.is_ok() { 0 } else { 1 })
        }
        _ => {
            write!(out, "{}", status_usage())?;
            out.flush()?;
            Ok(0)
        }
    }
}

fn status_usage() -> String {
    let mut cmd = Args::command().bin_name("chartops");
    cmd.build();
    match cmd.find_subcommand_mut("status") {
        Some(sub) => sub.render_help().to_string(),
        None => cmd.render_help().to_string(),
    }
}
