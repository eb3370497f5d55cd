//! Audit evidence files: offending rows CSV plus a JSON summary.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use csv::Writer;
use serde::Serialize;
use tracing::info;

use odq_audit::{IntegrityAudit, IntegritySummary};
use odq_model::MedalRow;

pub const AUDIT_SCHEMA: &str = "odq.integrity-audit";
const AUDIT_SCHEMA_VERSION: u32 = 1;

/// Envelope around the audit summary written to disk.
#[derive(Debug, Serialize)]
pub struct AuditReportPayload<'a> {
    pub schema: &'static str,
    pub schema_version: u32,
    pub generated_at: String,
    pub summary: &'a IntegritySummary,
}

/// Paths of the files written by [`write_audit_outputs`].
#[derive(Debug, Clone)]
pub struct AuditOutputPaths {
    pub bad_rows_csv: PathBuf,
    pub summary_json: PathBuf,
}

fn write_bad_rows(path: &Path, rows: &[MedalRow]) -> Result<()> {
    let mut writer =
        Writer::from_path(path).with_context(|| format!("create {}", path.display()))?;
    writer.write_record([
        "Year", "City", "Sport", "Discipline", "Athlete", "Code", "Gender", "Event", "Medal",
        "Country",
    ])?;
    for row in rows {
        writer.write_record([
            row.year.as_deref().unwrap_or(""),
            row.city.as_deref().unwrap_or(""),
            row.sport.as_deref().unwrap_or(""),
            row.discipline.as_deref().unwrap_or(""),
            row.athlete.as_deref().unwrap_or(""),
            row.code.as_deref().unwrap_or(""),
            row.gender.as_deref().unwrap_or(""),
            row.event.as_deref().unwrap_or(""),
            row.medal.as_deref().unwrap_or(""),
            row.country.as_deref().unwrap_or(""),
        ])?;
    }
    writer.flush()?;
    Ok(())
}

/// Write the offending rows and the JSON summary under `out_dir`.
///
/// `stamp` is the run timestamp fragment; callers resolve it once so the
/// two file names always agree.
pub fn write_audit_outputs(
    out_dir: &Path,
    audit: &IntegrityAudit,
    stamp: &str,
) -> Result<AuditOutputPaths> {
    std::fs::create_dir_all(out_dir)
        .with_context(|| format!("create output dir {}", out_dir.display()))?;

    let paths = AuditOutputPaths {
        bad_rows_csv: out_dir.join(format!("summer_bad_code_{stamp}.csv")),
        summary_json: out_dir.join(format!("summer_bad_code_summary_{stamp}.json")),
    };

    write_bad_rows(&paths.bad_rows_csv, &audit.bad_rows)?;

    let payload = AuditReportPayload {
        schema: AUDIT_SCHEMA,
        schema_version: AUDIT_SCHEMA_VERSION,
        generated_at: chrono::Local::now().to_rfc3339(),
        summary: &audit.summary,
    };
    let json = serde_json::to_string_pretty(&payload)?;
    std::fs::write(&paths.summary_json, format!("{json}\n"))
        .with_context(|| format!("write {}", paths.summary_json.display()))?;

    info!(
        bad_rows = audit.bad_rows.len(),
        json = %paths.summary_json.display(),
        "wrote audit evidence"
    );
    Ok(paths)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_csv_and_json_evidence() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut audit = IntegrityAudit::default();
        audit.summary.summer_rows_total = 2;
        audit.summary.bad_rows_total = 1;
        audit.bad_rows.push(MedalRow {
            code: Some("QQQ".to_string()),
            ..MedalRow::default()
        });

        let paths = write_audit_outputs(dir.path(), &audit, "20240101_000000").expect("write");
        assert!(paths.bad_rows_csv.ends_with("summer_bad_code_20240101_000000.csv"));

        let json = std::fs::read_to_string(&paths.summary_json).expect("read json");
        let value: serde_json::Value = serde_json::from_str(&json).expect("parse json");
        assert_eq!(value["schema"], AUDIT_SCHEMA);
        assert_eq!(value["schema_version"], 1);
        assert_eq!(value["summary"]["summer_rows_total"], 2);

        let csv = std::fs::read_to_string(&paths.bad_rows_csv).expect("read csv");
        assert!(csv.contains("QQQ"));
    }
}
