//! Console summaries for completed commands.

use std::collections::BTreeMap;

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, ContentArrangement, Table};

use psf_model::DqIssue;

use crate::commands::{CheckSummary, EtlSummary};

pub fn print_run_summary(summary: &EtlSummary) {
    println!("Run:    {}", summary.run_id);
    println!("Loaded: {} row(s)", summary.rows_loaded);
    println!("Issues: {}", summary.issue_count);
}

pub fn print_check_summary(summary: &CheckSummary) {
    println!("Rows checked: {}", summary.rows);
    if let Some(path) = &summary.report_path {
        println!("Report: {}", path.display());
    }
    if summary.issues.is_empty() {
        println!("No data-quality issues found.");
        return;
    }
    println!("{}", issue_table(&summary.issues));
}

/// Per-category issue counts, alphabetical by label.
fn issue_table(issues: &[DqIssue]) -> Table {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for issue in issues {
        *counts.entry(issue.issue_type.as_str()).or_insert(0) += 1;
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        Cell::new("Issue Type").add_attribute(Attribute::Bold),
        Cell::new("Count").add_attribute(Attribute::Bold),
    ]);
    for (label, count) in &counts {
        table.add_row(vec![
            Cell::new(label),
            Cell::new(count).set_alignment(CellAlignment::Right),
        ]);
    }
    table.add_row(vec![
        Cell::new("Total").add_attribute(Attribute::Bold),
        Cell::new(issues.len())
            .add_attribute(Attribute::Bold)
            .set_alignment(CellAlignment::Right),
    ]);
    table
}

#[cfg(test)]
mod tests {
    use super::issue_table;
    use psf_model::{Dataset, Field, ProviderRecord};
    use psf_validate::run_all_checks;

    #[test]
    fn table_counts_by_category() {
        let mut record = ProviderRecord::new();
        record.set(Field::ProviderCcn, Some("12".to_string()));
        record.set(Field::StateCode, Some("XX".to_string()));
        let dataset = Dataset::from_records(vec![record.clone(), record]);
        let issues = run_all_checks(&dataset);

        let rendered = issue_table(&issues).to_string();
        assert!(rendered.contains("Invalid CCN"));
        assert!(rendered.contains("Invalid State Code"));
        assert!(rendered.contains("Total"));
    }
}
