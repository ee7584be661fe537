//! Output formatting for result pages (table, JSON, CSV).

use crate::config::OutputFormat;
use crate::models::paging::PagedResponse;
use crate::models::responses::{
    Brand, BrandSalesHistory, CategoryTrend, CompetitorAnalysis, Product, ProductSalesHistory,
    SearchTerm, Seller, SellerPerformance,
};
use serde::Serialize;
use std::fmt::Display;

const MAX_CELL_WIDTH: usize = 40;

/// A response entity that can be shown as one table or CSV row.
pub trait Record: Serialize {
    /// Plural noun for summaries, e.g. `brands`.
    const NOUN: &'static str;

    /// Column headers, in display order.
    const COLUMNS: &'static [&'static str];

    /// Cell values matching [`COLUMNS`](Record::COLUMNS). Unknown values are
    /// empty strings.
    fn row(&self) -> Vec<String>;
}

/// Formats result pages for output.
pub struct Formatter {
    format: OutputFormat,
}

impl Formatter {
    /// Creates a new formatter.
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Formats one (possibly merged) page of records.
    pub fn format_page<T: Record>(&self, page: &PagedResponse<T>) -> String {
        match self.format {
            OutputFormat::Json => {
                serde_json::to_string_pretty(page).unwrap_or_else(|_| "{}".to_string())
            }
            OutputFormat::Table => {
                if page.is_empty() {
                    return format!("No {} found.", T::NOUN);
                }

                let mut summary =
                    format!("Showing {} of {} {}", page.len(), page.data_count, T::NOUN);
                if page.has_more() {
                    summary.push_str(" (more available, use --all-pages)");
                }
                self.table(&page.data, summary)
            }
            OutputFormat::Csv => self.csv(&page.data),
        }
    }

    /// Formats a plain list of records.
    pub fn format_records<T: Record>(&self, records: &[T]) -> String {
        match self.format {
            OutputFormat::Json => {
                serde_json::to_string_pretty(records).unwrap_or_else(|_| "[]".to_string())
            }
            OutputFormat::Table => {
                if records.is_empty() {
                    return format!("No {} found.", T::NOUN);
                }
                self.table(records, format!("Total: {} {}", records.len(), T::NOUN))
            }
            OutputFormat::Csv => self.csv(records),
        }
    }

    // Table formatting

    fn table<T: Record>(&self, records: &[T], summary: String) -> String {
        let rows: Vec<Vec<String>> = records
            .iter()
            .map(|record| record.row().into_iter().map(|cell| truncate(&cell)).collect())
            .collect();

        let widths: Vec<usize> = T::COLUMNS
            .iter()
            .enumerate()
            .map(|(i, header)| {
                rows.iter()
                    .map(|row| row.get(i).map_or(1, |cell| cell.chars().count().max(1)))
                    .chain(std::iter::once(header.chars().count()))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        let mut lines = Vec::with_capacity(rows.len() + 4);
        lines.push(join_padded(T::COLUMNS.iter().copied(), &widths));
        lines.push(widths.iter().map(|w| "-".repeat(*w)).collect::<Vec<_>>().join("  "));

        for row in &rows {
            let cells = row.iter().map(|cell| if cell.is_empty() { "-" } else { cell.as_str() });
            lines.push(join_padded(cells, &widths));
        }

        lines.push(String::new());
        lines.push(summary);

        lines.join("\n")
    }

    // CSV formatting

    fn csv<T: Record>(&self, records: &[T]) -> String {
        let mut lines = Vec::with_capacity(records.len() + 1);
        lines.push(T::COLUMNS.iter().map(|c| Self::csv_escape(c)).collect::<Vec<_>>().join(","));

        for record in records {
            lines.push(record.row().iter().map(|c| Self::csv_escape(c)).collect::<Vec<_>>().join(","));
        }

        lines.join("\n")
    }

    fn csv_escape(s: &str) -> String {
        if s.contains(',') || s.contains('"') || s.contains('\n') {
            format!("\"{}\"", s.replace('"', "\"\""))
        } else {
            s.to_string()
        }
    }
}

fn join_padded<'a>(cells: impl Iterator<Item = &'a str>, widths: &[usize]) -> String {
    cells
        .zip(widths)
        .map(|(cell, &width)| format!("{cell:<width$}"))
        .collect::<Vec<_>>()
        .join("  ")
        .trim_end()
        .to_string()
}

fn truncate(cell: &str) -> String {
    if cell.chars().count() > MAX_CELL_WIDTH {
        let head: String = cell.chars().take(MAX_CELL_WIDTH - 3).collect();
        format!("{head}...")
    } else {
        cell.to_string()
    }
}

fn opt<T: Display>(value: &Option<T>) -> String {
    value.as_ref().map(ToString::to_string).unwrap_or_default()
}

fn opt_fixed(value: Option<f64>, precision: usize) -> String {
    value.map(|v| format!("{v:.precision$}")).unwrap_or_default()
}

fn yes_no(value: bool) -> String {
    let label = if value { "Yes" } else { "No" };
    label.to_string()
}

impl Record for Brand {
    const NOUN: &'static str = "brands";
    const COLUMNS: &'static [&'static str] =
        &["Brand", "Category", "Revenue/mo", "Avg price", "Products", "Reviews", "Rating", "Score"];

    fn row(&self) -> Vec<String> {
        vec![
            self.brand_name.clone(),
            opt(&self.category_name),
            opt_fixed(self.monthly_revenue, 2),
            opt_fixed(self.avg_price, 2),
            opt(&self.total_products),
            opt(&self.total_reviews),
            opt_fixed(self.review_rating, 1),
            opt_fixed(self.brand_score, 1),
        ]
    }
}

impl Record for Product {
    const NOUN: &'static str = "products";
    const COLUMNS: &'static [&'static str] =
        &["ASIN", "Title", "Brand", "Price", "Rank", "Rating", "Reviews", "FBA"];

    fn row(&self) -> Vec<String> {
        vec![
            self.asin.clone(),
            self.title.clone(),
            opt(&self.brand),
            self.price.to_string(),
            opt(&self.sales_rank),
            format!("{:.1}", self.reviews.average_rating),
            self.reviews.total_reviews.to_string(),
            yes_no(self.is_fba),
        ]
    }
}

impl Record for Seller {
    const NOUN: &'static str = "sellers";
    const COLUMNS: &'static [&'static str] =
        &["Seller ID", "Name", "Type", "FBA", "Feedback", "Rating", "Country"];

    fn row(&self) -> Vec<String> {
        vec![
            self.seller_id.clone(),
            self.seller_name.clone(),
            self.seller_type.to_string(),
            yes_no(self.is_fba),
            opt(&self.feedback_count),
            opt_fixed(self.seller_rating, 1),
            opt(&self.ships_from_country),
        ]
    }
}

impl Record for SearchTerm {
    const NOUN: &'static str = "search terms";
    const COLUMNS: &'static [&'static str] = &["Search term", "Volume", "CPC", "Competition", "Trend"];

    fn row(&self) -> Vec<String> {
        vec![
            self.search_term.clone(),
            self.search_volume.to_string(),
            opt_fixed(self.cpc, 2),
            opt(&self.competition),
            opt(&self.trend),
        ]
    }
}

impl Record for BrandSalesHistory {
    const NOUN: &'static str = "data points";
    const COLUMNS: &'static [&'static str] = &["Date", "Brand", "Sales", "Units", "Avg price"];

    fn row(&self) -> Vec<String> {
        vec![
            self.date.format("%Y-%m-%d").to_string(),
            self.brand.clone(),
            format!("{:.2}", self.sales),
            self.units_sold.to_string(),
            format!("{:.2}", self.average_price),
        ]
    }
}

impl Record for ProductSalesHistory {
    const NOUN: &'static str = "data points";
    const COLUMNS: &'static [&'static str] = &["Date", "ASIN", "Sales", "Units", "Price", "Rank"];

    fn row(&self) -> Vec<String> {
        vec![
            self.date.format("%Y-%m-%d").to_string(),
            self.asin.clone(),
            format!("{:.2}", self.sales),
            self.units_sold.to_string(),
            format!("{:.2}", self.price),
            opt(&self.sales_rank),
        ]
    }
}

impl Record for SellerPerformance {
    const NOUN: &'static str = "data points";
    const COLUMNS: &'static [&'static str] =
        &["Date", "Seller ID", "Defects", "Cancels", "Late", "Tracking", "CS dissat."];

    fn row(&self) -> Vec<String> {
        vec![
            self.date.format("%Y-%m-%d").to_string(),
            self.seller_id.clone(),
            format!("{:.4}", self.order_defect_rate),
            format!("{:.4}", self.pre_fulfillment_cancel_rate),
            format!("{:.4}", self.late_shipment_rate),
            format!("{:.4}", self.valid_tracking_rate),
            format!("{:.4}", self.customer_service_dissatisfaction_rate),
        ]
    }
}

impl Record for CategoryTrend {
    const NOUN: &'static str = "categories";
    const COLUMNS: &'static [&'static str] =
        &["Category", "Revenue", "Units", "Avg price", "Growth", "Top brands"];

    fn row(&self) -> Vec<String> {
        vec![
            self.category.breadcrumb(),
            self.total_revenue.to_string(),
            self.total_units_sold.to_string(),
            format!("{:.2}", self.average_price),
            format!("{:.2}", self.growth_rate),
            self.top_brands.join("; "),
        ]
    }
}

impl Record for CompetitorAnalysis {
    const NOUN: &'static str = "competitors";
    const COLUMNS: &'static [&'static str] =
        &["ASIN", "Brand", "Price diff", "Rating diff", "Review diff", "Rank diff", "Sales diff"];

    fn row(&self) -> Vec<String> {
        vec![
            self.competitor_asin.clone(),
            self.competitor_brand.clone(),
            format!("{:.2}", self.price_difference),
            format!("{:.1}", self.rating_difference),
            self.review_count_difference.to_string(),
            opt(&self.sales_rank_difference),
            opt_fixed(self.estimated_sales_difference, 2),
        ]
    }
}
