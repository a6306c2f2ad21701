//! Graph size buckets and ASCII table formatting for per-category averages
//!
//! This module provides shared functionality for bucket-based analysis:
//! - [`CategoryAverages`] for the mean execution times of each [`Category`]
//! - ASCII table formatting using the [`tabled`] crate

use crate::common::{Category, ResultRow};
use tabled::{Table, Tabled};

/// Mean execution times of all rows falling into a single category
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryAverages {
    pub category: Category,
    /// Number of rows in this category
    pub count: usize,
    /// Mean Prim time in milliseconds; [`None`] when the category has no rows
    pub prim_time_ms: Option<f64>,
    /// Mean Kruskal time in milliseconds; [`None`] when the category has no rows
    pub kruskal_time_ms: Option<f64>,
}

/// Computes per-category averages for every [`Category`], in plotting order
///
/// Categories without rows are still returned, with no averages.
pub fn category_averages(rows: &[ResultRow]) -> Vec<CategoryAverages> {
    Category::ALL
        .iter()
        .map(|&category| {
            let (count, prim_sum, kruskal_sum) = rows
                .iter()
                .filter(|row| row.category() == category)
                .fold((0usize, 0.0, 0.0), |(count, prim, kruskal), row| {
                    (
                        count + 1,
                        prim + row.prim_time_ms,
                        kruskal + row.kruskal_time_ms,
                    )
                });

            let mean = |sum: f64| (count > 0).then(|| sum / count as f64);
            CategoryAverages {
                category,
                count,
                prim_time_ms: mean(prim_sum),
                kruskal_time_ms: mean(kruskal_sum),
            }
        })
        .collect()
}

/// One line of the console summary table
#[derive(Debug, Clone, Tabled)]
struct CategoryEntry {
    #[tabled(rename = "Category")]
    category: &'static str,
    #[tabled(rename = "Vertices")]
    range: String,
    #[tabled(rename = "Graphs")]
    count: usize,
    #[tabled(rename = "Avg Prim (ms)")]
    prim: String,
    #[tabled(rename = "Avg Kruskal (ms)")]
    kruskal: String,
}

impl From<&CategoryAverages> for CategoryEntry {
    fn from(averages: &CategoryAverages) -> Self {
        let format_ms = |value: Option<f64>| match value {
            Some(ms) => format!("{:.2}", ms),
            None => "-".to_string(),
        };

        Self {
            category: averages.category.name(),
            range: averages.category.range_label(),
            count: averages.count,
            prim: format_ms(averages.prim_time_ms),
            kruskal: format_ms(averages.kruskal_time_ms),
        }
    }
}

/// Formats category averages as an ASCII table using the [`tabled`] crate
///
/// # Arguments
/// * `averages` - A slice of [`CategoryAverages`] to format
/// * `title` - Optional title for the table
///
/// # Returns
/// A formatted ASCII table as a [`String`]
pub fn format_category_table(averages: &[CategoryAverages], title: Option<&str>) -> String {
    if averages.is_empty() {
        return "No data available for bucketing".to_string();
    }

    let entries: Vec<CategoryEntry> = averages.iter().map(CategoryEntry::from).collect();
    let table = Table::new(entries).to_string();

    if let Some(title) = title {
        format!("{}\n{}\n{}", title, "=".repeat(title.len()), table)
    } else {
        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::test_helpers::{example_rows, row};
    use crate::common::CostMatch;

    #[test]
    fn averages_each_category() {
        let rows = vec![
            row(10, 1.0, 2.0, CostMatch::Yes),
            row(20, 3.0, 4.0, CostMatch::Yes),
            row(200, 10.0, 12.0, CostMatch::Yes),
        ];
        let averages = category_averages(&rows);

        assert_eq!(averages.len(), 4);
        assert_eq!(averages[0].category, Category::Small);
        assert_eq!(averages[0].count, 2);
        assert_eq!(averages[0].prim_time_ms, Some(2.0));
        assert_eq!(averages[0].kruskal_time_ms, Some(3.0));
        assert_eq!(averages[1].category, Category::Medium);
        assert_eq!(averages[1].prim_time_ms, Some(10.0));
        assert_eq!(averages[1].kruskal_time_ms, Some(12.0));
    }

    #[test]
    fn empty_categories_have_no_average() {
        let averages = category_averages(&example_rows());

        let counts: Vec<_> = averages.iter().map(|a| a.count).collect();
        assert_eq!(counts, [1, 0, 1, 0]);
        assert_eq!(averages[1].prim_time_ms, None);
        assert_eq!(averages[1].kruskal_time_ms, None);
        assert_eq!(averages[3].prim_time_ms, None);
    }

    #[test]
    fn no_rows_yields_four_empty_categories() {
        let averages = category_averages(&[]);
        assert_eq!(averages.len(), 4);
        assert!(averages.iter().all(|a| a.count == 0 && a.prim_time_ms.is_none()));
    }

    #[test]
    fn test_format_category_table() {
        let averages = category_averages(&example_rows());

        let table = format_category_table(&averages, Some("Test Table"));
        assert!(table.contains("Test Table"));
        assert!(table.contains("Category"));
        assert!(table.contains("Avg Prim (ms)"));
        assert!(table.contains("Extra Large"));
        assert!(table.contains("301-1000"));
        assert!(table.contains("5.00"));
        assert!(table.contains("1.50"));

        // Test without title
        let table_no_title = format_category_table(&averages, None);
        assert!(!table_no_title.contains("Test Table"));
        assert!(table_no_title.contains("Graphs"));

        assert_eq!(
            format_category_table(&[], None),
            "No data available for bucketing"
        );
    }
}
