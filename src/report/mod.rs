//! CSV report writing
//!
//! Turns an ordered run of [`LogRecord`]s into one spreadsheet file per
//! repository. The sheet layout is fixed: a seven-column header row
//! followed by one row per record in log order.

use std::io;
use std::path::Path;

use thiserror::Error;

use crate::model::LogRecord;

/// Fixed header row of every report
pub const HEADER: [&str; 7] = [
    "Commit ID",
    "Author",
    "Date",
    "Comment",
    "Changed Files",
    "Lines Added",
    "Lines Deleted",
];

/// File extension of the generated reports
pub const REPORT_EXTENSION: &str = "csv";

/// Errors that can occur while writing a report.
///
/// These are recoverable per repository: the exporter logs them and
/// moves on to the next repository.
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Build the report file name for one repository export:
/// `<repository>_<beginDate>_<endDate>.csv`
pub fn report_file_name(repository: &str, begin: &str, end: &str) -> String {
    format!("{repository}_{begin}_{end}.{REPORT_EXTENSION}")
}

/// Write all records for one repository to `path`.
///
/// The CSV writer takes care of quoting comments that contain commas or
/// quotes. A failure leaves no usable partial report behind as far as the
/// exporter is concerned; there is no retry.
pub fn write_report(path: &Path, records: &[LogRecord]) -> Result<(), ReportError> {
    let mut writer = csv::Writer::from_path(path)?;

    writer.write_record(HEADER)?;
    for record in records {
        writer.write_record([
            &record.commit_id,
            &record.author,
            &record.date,
            &record.comment,
            &record.changed_files,
            &record.lines_added,
            &record.lines_deleted,
        ])?;
    }

    writer.flush()?;
    Ok(())
}
