use std::fmt;

use super::TallyReport;

impl fmt::Display for TallyReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self
            .services()
            .flat_map(|(_, table)| table.iter().map(|(endpoint, _)| endpoint.len()))
            .max()
            .unwrap_or(0);

        for (service, table) in self.services() {
            writeln!(f, "{}:", service)?;
            for (endpoint, tally) in table.iter() {
                writeln!(
                    f,
                    "  {:<width$}  successes: {:>5}  failures: {:>5}",
                    endpoint,
                    tally.successes,
                    tally.failures,
                    width = width
                )?;
            }
        }
        let totals = self.totals();
        writeln!(
            f,
            "Total: {} request(s), {} succeeded, {} failed",
            totals.total(),
            totals.successes,
            totals.failures
        )
    }
}

/// Renders the report as an aligned plain-text table.
#[must_use]
pub fn render_text(report: &TallyReport) -> String {
    report.to_string()
}

/// Renders the report as pretty JSON: `{"counts": {service: {endpoint: {...}}}}`.
///
/// # Errors
///
/// Returns an error when serialization fails.
pub fn render_json(report: &TallyReport) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}
