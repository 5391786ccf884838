use std::io::Write;

use chartops_core::api as core_api;
use chartops_core::report::write_banner;
use chartops_core::validate::report::{write_no_files, write_result, write_summary, TITLE};

pub fn handle_validate<W: Write>(
    cfg: &core_api::AppConfig,
    out: &mut W,
) -> Result<i32, core_api::CliError> {
    write_banner(out, TITLE)?;

    let summary = core_api::validate_dir(&cfg.validate)?;
    if summary.results.is_empty() {
        write_no_files(out, &cfg.validate.output_dir)?;
        out.flush()?;
        return Ok(summary.exit_code());
    }

    for result in &summary.results {
        write_result(out, result)?;
    }
    write_summary(out, &summary)?;
    out.flush()?;

    Ok(summary.exit_code())
}
