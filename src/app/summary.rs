use std::io::Write;

use crate::args::OutputFormat;
use crate::error::AppResult;
use crate::metrics::LoadTestReport;

/// Printed in place of the average when no request succeeded.
const UNDEFINED_AVERAGE: &str = "undefined";

pub(crate) fn report_lines(report: &LoadTestReport, format: OutputFormat) -> AppResult<Vec<String>> {
    match format {
        OutputFormat::Text => Ok(vec![
            format!(
                "success rate: {}/{}",
                report.success_count, report.total_requests
            ),
            format!("average request time: {}", format_average(report)),
        ]),
        OutputFormat::Json => Ok(vec![serde_json::to_string(report)?]),
    }
}

pub(crate) fn print_report(report: &LoadTestReport, format: OutputFormat) -> AppResult<()> {
    let mut stdout = std::io::stdout().lock();
    for line in report_lines(report, format)? {
        writeln!(stdout, "{}", line)?;
    }
    stdout.flush()?;
    Ok(())
}

fn format_average(report: &LoadTestReport) -> String {
    report
        .average_latency_seconds()
        .map_or_else(|| UNDEFINED_AVERAGE.to_owned(), |secs| format!("{:.6}", secs))
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::metrics::RequestRecord;

    #[test]
    fn text_report_matches_stdout_contract() -> AppResult<()> {
        let report = LoadTestReport::from_records(&[
            RequestRecord::response(200, Duration::from_millis(250)),
            RequestRecord::response(200, Duration::from_millis(750)),
            RequestRecord::response(404, Duration::from_millis(5)),
        ]);

        let lines = report_lines(&report, OutputFormat::Text)?;

        if lines != ["success rate: 2/3", "average request time: 0.500000"] {
            return Err(format!("Unexpected lines: {:?}", lines).into());
        }
        Ok(())
    }

    #[test]
    fn text_report_marks_undefined_average() -> AppResult<()> {
        let report =
            LoadTestReport::from_records(&[RequestRecord::response(500, Duration::from_millis(1))]);

        let lines = report_lines(&report, OutputFormat::Text)?;

        if lines != ["success rate: 0/1", "average request time: undefined"] {
            return Err(format!("Unexpected lines: {:?}", lines).into());
        }
        Ok(())
    }

    #[test]
    fn json_report_is_a_single_object() -> AppResult<()> {
        let report =
            LoadTestReport::from_records(&[RequestRecord::response(200, Duration::from_secs(1))]);

        let lines = report_lines(&report, OutputFormat::Json)?;
        let [line] = lines.as_slice() else {
            return Err(format!("Expected one line, got {:?}", lines).into());
        };
        let value: serde_json::Value = serde_json::from_str(line)?;

        if value.get("success_count") != Some(&serde_json::json!(1))
            || value.get("average_latency_seconds") != Some(&serde_json::json!(1.0))
        {
            return Err(format!("Unexpected JSON: {}", value).into());
        }
        Ok(())
    }
}
