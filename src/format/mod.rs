//! Output formatting for listing tables (table, JSON, markdown, CSV).

use crate::config::OutputFormat;
use crate::ebay::models::ListingTable;
use crate::export;

/// Widest a title cell may get in table and markdown output.
const MAX_TITLE_WIDTH: usize = 50;

/// Formats listing tables for stdout.
pub struct Formatter {
    format: OutputFormat,
}

impl Formatter {
    /// Creates a new formatter.
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Formats a whole listing table.
    pub fn format_table(&self, table: &ListingTable) -> String {
        if table.is_empty() {
            return match self.format {
                OutputFormat::Json => "[]".to_string(),
                OutputFormat::Csv => table.columns().join(","),
                _ => "No listings found.".to_string(),
            };
        }

        match self.format {
            OutputFormat::Json => self.json(table),
            OutputFormat::Table => self.text_table(table),
            OutputFormat::Markdown => self.markdown(table),
            OutputFormat::Csv => self.csv(table),
        }
    }

    fn json(&self, table: &ListingTable) -> String {
        serde_json::to_string_pretty(&table.to_json_records()).unwrap_or_else(|_| "[]".to_string())
    }

    // Table formatting

    fn text_table(&self, table: &ListingTable) -> String {
        let columns = table.columns();
        let cells: Vec<[String; 5]> = table
            .rows()
            .iter()
            .map(|row| {
                let [title, price, currency, detail, url] = row.record();
                [
                    truncate(title, MAX_TITLE_WIDTH),
                    price.to_string(),
                    currency.to_string(),
                    detail.to_string(),
                    url.to_string(),
                ]
            })
            .collect();

        let mut widths = columns.map(|c| c.chars().count());
        for row in &cells {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.chars().count());
            }
        }

        let render = |values: [&str; 5]| -> String {
            values
                .iter()
                .zip(widths)
                .map(|(v, w)| format!("{:<width$}", v, width = w))
                .collect::<Vec<_>>()
                .join("  ")
                .trim_end()
                .to_string()
        };

        let mut lines = Vec::with_capacity(cells.len() + 3);
        lines.push(render(columns));
        lines.push(widths.iter().map(|w| "-".repeat(*w)).collect::<Vec<_>>().join("  "));
        for row in &cells {
            lines.push(render(row.each_ref().map(String::as_str)));
        }
        lines.push(String::new());
        lines.push(format!("{} listings from the {} API", table.len(), table.api()));

        lines.join("\n")
    }

    // Markdown formatting

    fn markdown(&self, table: &ListingTable) -> String {
        let columns = table.columns();
        let mut lines = Vec::with_capacity(table.len() + 2);

        lines.push(format!("| {} |", columns.join(" | ")));
        lines.push(format!("|{}|", columns.map(|_| "---").join("|")));

        for row in table.rows() {
            let [title, price, currency, detail, url] = row.record();
            let title = md_escape(&truncate(title, MAX_TITLE_WIDTH));
            let link = if url.is_empty() { String::new() } else { format!("[link]({})", url) };
            lines.push(format!(
                "| {} | {} | {} | {} | {} |",
                title,
                price,
                currency,
                md_escape(detail),
                link
            ));
        }

        lines.join("\n")
    }

    // CSV formatting

    fn csv(&self, table: &ListingTable) -> String {
        export::to_csv_string(table)
            .map(|s| s.trim_end().to_string())
            .unwrap_or_else(|_| table.columns().join(","))
    }
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", cut)
    }
}

fn md_escape(s: &str) -> String {
    s.replace('|', "\\|")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ebay::models::{ListingApi, ListingRow};

    fn make_table() -> ListingTable {
        ListingTable::new(
            ListingApi::Browse,
            vec![
                ListingRow {
                    title: "Widget".to_string(),
                    price: "9.99".to_string(),
                    currency: "USD".to_string(),
                    detail: "NEW".to_string(),
                    item_url: "http://x/1".to_string(),
                },
                ListingRow { title: "Bare".to_string(), ..ListingRow::default() },
            ],
        )
    }

    fn make_long_title_table() -> ListingTable {
        ListingTable::new(
            ListingApi::Finding,
            vec![ListingRow {
                title: "A".repeat(120),
                detail: "Leeds | UK".to_string(),
                ..ListingRow::default()
            }],
        )
    }

    #[test]
    fn test_json_output() {
        let output = Formatter::new(OutputFormat::Json).format_table(&make_table());
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed.as_array().unwrap().len(), 2);
        assert_eq!(parsed[0]["Product Title"], "Widget");
        assert_eq!(parsed[1]["Price"], "");
    }

    #[test]
    fn test_json_preserves_column_order() {
        let output = Formatter::new(OutputFormat::Json).format_table(&make_table());
        let title = output.find("Product Title").unwrap();
        let url = output.find("Item URL").unwrap();
        assert!(title < url);
    }

    #[test]
    fn test_table_output() {
        let output = Formatter::new(OutputFormat::Table).format_table(&make_table());
        let lines: Vec<&str> = output.lines().collect();

        assert!(lines[0].starts_with("Product Title"));
        assert!(lines[0].contains("Condition"));
        assert!(lines[1].starts_with("---"));
        assert!(lines[2].contains("Widget"));
        assert!(lines[2].contains("9.99"));
        assert!(lines[3].starts_with("Bare"));
        assert!(output.ends_with("2 listings from the Browse API"));
    }

    #[test]
    fn test_table_long_title_truncation() {
        let output = Formatter::new(OutputFormat::Table).format_table(&make_long_title_table());
        assert!(output.contains("..."));
        assert!(!output.contains(&"A".repeat(51)));
        assert!(output.contains("Location"));
    }

    #[test]
    fn test_markdown_output() {
        let output = Formatter::new(OutputFormat::Markdown).format_table(&make_table());
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines[0], "| Product Title | Price | Currency | Condition | Item URL |");
        assert_eq!(lines[1], "|---|---|---|---|---|");
        assert_eq!(lines[2], "| Widget | 9.99 | USD | NEW | [link](http://x/1) |");
        assert_eq!(lines[3], "| Bare |  |  |  |  |");
    }

    #[test]
    fn test_markdown_escapes_pipes() {
        let output = Formatter::new(OutputFormat::Markdown).format_table(&make_long_title_table());
        assert!(output.contains("Leeds \\| UK"));
    }

    #[test]
    fn test_csv_output() {
        let output = Formatter::new(OutputFormat::Csv).format_table(&make_table());
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "Product Title,Price,Currency,Condition,Item URL");
        assert_eq!(lines[1], "Widget,9.99,USD,NEW,http://x/1");
        assert_eq!(lines[2], "Bare,,,,");
    }

    #[test]
    fn test_empty_outputs() {
        let empty = ListingTable::new(ListingApi::Finding, Vec::new());
        assert_eq!(Formatter::new(OutputFormat::Json).format_table(&empty), "[]");
        assert_eq!(Formatter::new(OutputFormat::Table).format_table(&empty), "No listings found.");
        assert_eq!(
            Formatter::new(OutputFormat::Markdown).format_table(&empty),
            "No listings found."
        );
        assert_eq!(
            Formatter::new(OutputFormat::Csv).format_table(&empty),
            "Product Title,Price,Currency,Location,Item URL"
        );
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("exactly10!", 10), "exactly10!");
        assert_eq!(truncate("this is too long", 10), "this is...");
        assert_eq!(truncate("ünïcödé chars", 8), "ünïcö...");
    }
}
