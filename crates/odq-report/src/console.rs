//! Console summaries rendered with `comfy-table`.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use odq_audit::IntegritySummary;
use odq_validate::{CountrySplit, SummerSplit};

fn header_cell(text: &str) -> Cell {
    Cell::new(text)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn styled_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

/// Print clean/quarantine counts for both tables, plus the quarantine
/// reason breakdown for the summer table.
pub fn print_split_summary(countries: &CountrySplit, summer: &SummerSplit) {
    let mut table = styled_table();
    table.set_header(vec![
        header_cell("Table"),
        header_cell("Rows"),
        header_cell("Clean"),
        header_cell("Quarantine"),
    ]);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    table.add_row(vec![
        Cell::new("countries"),
        Cell::new(countries.total()),
        Cell::new(countries.clean.len()),
        quarantine_cell(countries.quarantine.len()),
    ]);
    table.add_row(vec![
        Cell::new("summer"),
        Cell::new(summer.total()),
        Cell::new(summer.clean.len()),
        quarantine_cell(summer.quarantine.len()),
    ]);
    println!("{table}");

    let counts = summer.reason_counts();
    if !counts.is_empty() {
        let mut reasons = styled_table();
        reasons.set_header(vec![header_cell("Quarantine reason"), header_cell("Rows")]);
        align_column(&mut reasons, 1, CellAlignment::Right);
        for (reason, count) in counts {
            reasons.add_row(vec![Cell::new(reason.as_str()), Cell::new(count)]);
        }
        println!("{reasons}");
    }
}

fn quarantine_cell(count: usize) -> Cell {
    if count > 0 {
        Cell::new(count).fg(Color::Yellow)
    } else {
        Cell::new(count)
    }
}

/// Print the audit counts and the strict-policy verdict.
pub fn print_audit_summary(summary: &IntegritySummary) {
    let mut table = styled_table();
    table.set_header(vec![header_cell("Integrity check"), header_cell("Value")]);
    align_column(&mut table, 1, CellAlignment::Right);
    table.add_row(vec![
        Cell::new("Summer rows total"),
        Cell::new(summary.summer_rows_total),
    ]);
    table.add_row(vec![
        Cell::new("Countries rows total"),
        Cell::new(summary.countries_rows_total),
    ]);
    table.add_row(vec![
        Cell::new("Valid country codes"),
        Cell::new(summary.valid_country_codes_count),
    ]);
    table.add_row(vec![
        Cell::new("Rows rewritten by code map"),
        Cell::new(summary.mapped_rows_count),
    ]);
    table.add_row(vec![
        Cell::new("Bad rows total"),
        Cell::new(summary.bad_rows_total),
    ]);
    table.add_row(vec![
        Cell::new("Bad rows (null code)"),
        Cell::new(summary.bad_rows_null_code),
    ]);
    table.add_row(vec![
        Cell::new("Bad rows (code not in countries)"),
        Cell::new(summary.bad_rows_code_not_in_countries),
    ]);
    table.add_row(vec![
        Cell::new("Bad rows, strict (allowlist applied)"),
        Cell::new(summary.bad_rows_code_not_in_countries_strict),
    ]);
    table.add_row(vec![
        Cell::new("Unique bad codes"),
        Cell::new(summary.unique_bad_codes_count),
    ]);
    println!("{table}");

    if !summary.unique_bad_codes_sample.is_empty() {
        println!("Unmatched codes: {}", summary.unique_bad_codes_sample.join(", "));
    }
    println!(
        "Historical allowlist: {}",
        summary.historical_code_allowlist.join(", ")
    );
    let verdict = if summary.should_fail {
        "FAIL (strict policy)"
    } else {
        "PASS"
    };
    println!("Audit verdict: {verdict}");
}
