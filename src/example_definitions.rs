// src/example_definitions.rs
// Demo dataset: a small sales pipeline. The host application would normally
// supply its own GridSeed; this one exists so the binary shows something
// useful out of the box.

use std::collections::HashMap;

use crate::grid::definitions::{CellValue, ColumnDefinition, ColumnType, RowRecord};
use crate::grid::resources::GridSeed;

const STATUS_OPTIONS: &[(&str, &str)] = &[
    ("Lead", "#64748b"),
    ("Qualified", "#3b82f6"),
    ("Proposal", "#eab308"),
    ("Won", "#22c55e"),
    ("Lost", "#ef4444"),
];

const OWNER_OPTIONS: &[&str] = &["Dana", "Marco", "Priya", "Sofia"];

pub fn demo_seed() -> GridSeed {
    let status_colors: HashMap<String, String> = STATUS_OPTIONS
        .iter()
        .map(|(name, hex)| (name.to_string(), hex.to_string()))
        .collect();

    let mut opportunity = ColumnDefinition::new("opportunity", "Opportunity", ColumnType::Text);
    opportunity.frozen = true;
    opportunity.protected = true;
    opportunity.width = 200.0;

    let columns = vec![
        opportunity,
        ColumnDefinition::new("stage", "Stage", ColumnType::Status)
            .with_options(STATUS_OPTIONS.iter().map(|(n, _)| n.to_string()).collect())
            .with_colors(status_colors),
        ColumnDefinition::new("deal_size", "Deal Size", ColumnType::Currency),
        ColumnDefinition::new("close_date", "Close Date", ColumnType::Date),
        ColumnDefinition::new("probability", "Probability", ColumnType::Number),
        ColumnDefinition::new("owner", "Owner", ColumnType::Select)
            .with_options(OWNER_OPTIONS.iter().map(|s| s.to_string()).collect()),
        ColumnDefinition::new("committed", "Committed", ColumnType::Checkbox),
        ColumnDefinition::new("website", "Website", ColumnType::Url),
    ];

    let rows = [
        ("Acme expansion", "Qualified", "$48,000.00", "2026-10-15", 60.0, "Dana", true, "https://acme.example.com"),
        ("Globex renewal", "Proposal", "$120,000.00", "2026-09-30", 75.0, "Marco", true, "https://globex.example.com"),
        ("Initech pilot", "Lead", "$9,500.00", "2026-11-20", 20.0, "Priya", false, "https://initech.example.com"),
        ("Umbrella platform", "Won", "$310,000.00", "2026-08-12", 100.0, "Sofia", true, "https://umbrella.example.com"),
        ("Stark retrofit", "Proposal", "$87,250.00", "2026-12-01", 55.0, "Dana", false, "https://stark.example.com"),
        ("Wayne logistics", "Qualified", "$64,000.00", "2027-01-18", 45.0, "Marco", false, "https://wayne.example.com"),
        ("Tyrell upgrade", "Lost", "$22,000.00", "2026-07-03", 0.0, "Priya", false, "https://tyrell.example.com"),
        ("Hooli migration", "Lead", "$150,000.00", "2027-02-09", 15.0, "Sofia", false, "https://hooli.example.com"),
    ];

    let rows = rows
        .iter()
        .enumerate()
        .map(
            |(i, (name, stage, deal, close, probability, owner, committed, website))| {
                let mut row = RowRecord::with_id(format!("demo-{}", i + 1));
                row.set("opportunity", CellValue::Text(name.to_string()));
                row.set("stage", CellValue::Text(stage.to_string()));
                row.set("deal_size", CellValue::Text(deal.to_string()));
                row.set("close_date", CellValue::Text(close.to_string()));
                row.set("probability", CellValue::Number(*probability));
                row.set("owner", CellValue::Text(owner.to_string()));
                row.set("committed", CellValue::Bool(*committed));
                row.set("website", CellValue::Text(website.to_string()));
                row
            },
        )
        .collect();

    GridSeed { columns, rows }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_seed_is_internally_consistent() {
        let seed = demo_seed();
        assert_eq!(seed.columns.len(), 8);
        assert_eq!(seed.rows.len(), 8);
        for row in &seed.rows {
            for column in &seed.columns {
                assert!(
                    row.cells.contains_key(&column.key),
                    "row {} missing '{}'",
                    row.id,
                    column.key
                );
            }
        }
        let stage = seed.columns.iter().find(|c| c.key == "stage").unwrap();
        for option in &stage.options {
            assert!(stage.colors.contains_key(option));
        }
    }
}
