//! Command implementations: load inputs, run the core, write outputs.

use std::collections::BTreeSet;

use anyhow::{Context, Result};
use chrono::{Datelike, Local};
use tracing::{info, info_span};

use odq_audit::{IntegrityAudit, audit_codes};
use odq_ingest::{read_code_map_pairs, read_countries, read_summer};
use odq_model::{AuditPolicy, ClassifyOptions};
use odq_normalize::CodeMap;
use odq_report::{
    AuditOutputPaths, SplitOutputPaths, print_audit_summary, print_split_summary, run_stamp,
    write_audit_outputs, write_split_outputs,
};
use odq_validate::{CountrySplit, ReferenceIndex, SummerSplit, split_countries, split_summer};

use crate::cli::{AuditArgs, InputArgs, PipelineArgs, SplitArgs};

/// Result of the `split` command.
#[derive(Debug)]
pub struct SplitOutcome {
    pub countries: CountrySplit,
    pub summer: SummerSplit,
    pub rewritten: usize,
    pub paths: SplitOutputPaths,
}

/// Result of the `audit` command.
pub struct AuditOutcome {
    pub audit: IntegrityAudit,
    pub paths: AuditOutputPaths,
}

fn load_code_map(input: &InputArgs) -> Result<CodeMap> {
    let pairs = read_code_map_pairs(&input.code_map)
        .with_context(|| format!("read code map {}", input.code_map.display()))?;
    Ok(CodeMap::from_pairs(pairs))
}

fn resolve_max_year(requested: Option<i32>) -> i32 {
    requested.unwrap_or_else(|| Local::now().year())
}

fn audit_policy(fail_on_null_codes: bool, allow: &[String]) -> AuditPolicy {
    let allowlist: BTreeSet<String> = allow
        .iter()
        .map(|code| code.trim().to_uppercase())
        .filter(|code| !code.is_empty())
        .collect();
    AuditPolicy::default()
        .with_allowlist(allowlist)
        .with_fail_on_null_codes(fail_on_null_codes)
}

fn run_split_inner(input: &InputArgs, max_year: Option<i32>) -> Result<SplitOutcome> {
    let span = info_span!("split");
    let _guard = span.enter();

    let countries_raw = read_countries(&input.countries)
        .with_context(|| format!("read countries {}", input.countries.display()))?;
    let summer_raw = read_summer(&input.summer)
        .with_context(|| format!("read summer {}", input.summer.display()))?;
    let code_map = load_code_map(input)?;

    let options = ClassifyOptions::for_max_year(resolve_max_year(max_year));

    let countries = split_countries(countries_raw);
    let index = ReferenceIndex::from_clean(&countries.clean)
        .with_historical(&options.historical_delegations);
    let (summer, outcome) = split_summer(summer_raw, &code_map, &index, &options);

    let paths = write_split_outputs(&input.out_dir, &countries, &summer)?;
    info!(
        countries_clean = countries.clean.len(),
        countries_quarantine = countries.quarantine.len(),
        summer_clean = summer.clean.len(),
        summer_quarantine = summer.quarantine.len(),
        rewritten = outcome.rewritten,
        "split complete"
    );

    Ok(SplitOutcome {
        countries,
        summer,
        rewritten: outcome.rewritten,
        paths,
    })
}

fn run_audit_inner(input: &InputArgs, policy: &AuditPolicy) -> Result<AuditOutcome> {
    let span = info_span!("audit");
    let _guard = span.enter();

    let countries = read_countries(&input.countries)
        .with_context(|| format!("read countries {}", input.countries.display()))?;
    let summer = read_summer(&input.summer)
        .with_context(|| format!("read summer {}", input.summer.display()))?;
    let code_map = load_code_map(input)?;

    let audit = audit_codes(&summer, &countries, &code_map, policy);
    let paths = write_audit_outputs(&input.out_dir, &audit, &run_stamp())?;

    Ok(AuditOutcome { audit, paths })
}

/// Classify both tables and write the four partition files.
pub fn run_split(args: &SplitArgs) -> Result<SplitOutcome> {
    let outcome = run_split_inner(&args.input, args.max_year)?;
    print_split_summary(&outcome.countries, &outcome.summer);
    Ok(outcome)
}

/// Run the cross-table integrity audit and write its evidence files.
pub fn run_audit(args: &AuditArgs) -> Result<AuditOutcome> {
    let policy = audit_policy(args.fail_on_null_codes, &args.allow);
    let outcome = run_audit_inner(&args.input, &policy)?;
    print_audit_summary(&outcome.audit.summary);
    Ok(outcome)
}

/// Audit first, then split. The audit verdict decides the exit code but
/// never blocks the split outputs.
pub fn run_pipeline(args: &PipelineArgs) -> Result<(AuditOutcome, SplitOutcome)> {
    let policy = audit_policy(args.fail_on_null_codes, &args.allow);
    let audit = run_audit_inner(&args.input, &policy)?;
    print_audit_summary(&audit.audit.summary);

    let split = run_split_inner(&args.input, args.max_year)?;
    print_split_summary(&split.countries, &split.summer);

    Ok((audit, split))
}
