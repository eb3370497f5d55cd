mod audit_out;
mod console;
mod csv_out;

pub use audit_out::{AUDIT_SCHEMA, AuditOutputPaths, AuditReportPayload, write_audit_outputs};
pub use console::{print_audit_summary, print_split_summary};
pub use csv_out::{SplitOutputPaths, write_split_outputs};

use chrono::Local;

/// Timestamp fragment for output file names.
///
/// Resolved once per run at the boundary; nothing inside the classifiers
/// or the auditor reads the clock.
pub fn run_stamp() -> String {
    Local::now().format("%Y%m%d_%H%M%S").to_string()
}
