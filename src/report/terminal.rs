use std::collections::BTreeMap;

use comfy_table::{presets::UTF8_FULL, Cell, ContentArrangement, Table};
use owo_colors::OwoColorize;

use crate::issue::Severity;
use crate::property::Property;
use crate::report::Report;

fn badge(severity: Severity) -> String {
    let label = format!(" {} ", severity);
    match severity {
        Severity::High => label.on_red().white().bold().to_string(),
        Severity::Normal => label.on_yellow().black().bold().to_string(),
        Severity::Low => label.on_white().black().to_string(),
    }
}

/// Render a report to the terminal with colors
pub fn render(report: &Report) {
    println!();
    println!(
        "{}  {} — origin {}, reference {}",
        "📋".bold(),
        "tally".bold(),
        report.origin(),
        report.reference()
    );
    println!();

    if report.is_empty() {
        println!("  {}  No issues reported", "✅".bold());
        println!();
    }

    for issue in report {
        println!(
            "  {}  {}  {}",
            badge(issue.severity()),
            issue.file_name().dimmed(),
            issue.fingerprint().dimmed(),
        );
        println!("           {}", issue.message().bold());

        let context: Vec<&str> = [
            issue.origin(),
            issue.category(),
            issue.issue_type(),
            issue.package_name(),
            issue.module_name(),
        ]
        .into_iter()
        .filter(|value| !value.is_empty())
        .collect();
        if !context.is_empty() {
            println!("           → {}", context.join(" · ").dimmed());
        }
        println!();
    }

    for message in report.error_messages() {
        println!("  {} {}", "✗".red(), message.red());
    }
    for message in report.info_messages() {
        println!("  {} {}", "ℹ".blue(), message.dimmed());
    }

    println!("{}", "━".repeat(60));

    let priorities = report.priorities();
    let mut summary_parts = Vec::new();
    if priorities.high > 0 {
        summary_parts.push(format!("{} high", priorities.high).red().bold().to_string());
    }
    if priorities.normal > 0 {
        summary_parts.push(format!("{} normal", priorities.normal).yellow().to_string());
    }
    if priorities.low > 0 {
        summary_parts.push(format!("{} low", priorities.low).white().to_string());
    }

    println!(
        " Found {} issues: {}",
        report.len().to_string().bold(),
        summary_parts.join(", ")
    );
    if report.duplicates_size() > 0 {
        println!(
            " ({} duplicates skipped)",
            report.duplicates_size().to_string().dimmed()
        );
    }
    println!("{}", "━".repeat(60));
    println!();
}

/// Build the count table for a grouped report.
pub fn group_table(property: Property, groups: &BTreeMap<String, Report>) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new(property.name()),
            Cell::new("issues"),
            Cell::new("high"),
            Cell::new("normal"),
            Cell::new("low"),
        ]);

    for (value, group) in groups {
        let priorities = group.priorities();
        let label = if value.is_empty() { "-" } else { value.as_str() };
        table.add_row(vec![
            Cell::new(label),
            Cell::new(group.len()),
            Cell::new(priorities.high),
            Cell::new(priorities.normal),
            Cell::new(priorities.low),
        ]);
    }
    table
}

/// Render a grouped report as a table
pub fn render_groups(property: Property, groups: &BTreeMap<String, Report>) {
    println!();
    println!("{}", group_table(property, groups));
    println!(" {} groups by {}", groups.len().to_string().bold(), property);
    println!();
}
