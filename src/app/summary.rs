use crate::args::OutputFormat;
use crate::error::AppResult;
use crate::tally::{TallyReport, render_json, render_text};

/// Prints the end-of-run tally to stdout.
///
/// # Errors
///
/// Returns an error when the JSON summary cannot be serialized.
pub fn print_report(report: &TallyReport, format: OutputFormat) -> AppResult<()> {
    match format {
        OutputFormat::Text => {
            println!();
            print!("{}", render_text(report));
        }
        OutputFormat::Json => println!("{}", render_json(report)?),
    }
    Ok(())
}
