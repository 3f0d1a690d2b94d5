//! The sortable listing table.
//!
//! Renders a bordered [`ratatui::widgets::Table`] with one row per listing,
//! in the order fixed by the core row builder. All field formatting — AUD
//! prices, number grouping, date display, missing-value placeholders — lives
//! here, on the renderer side of the boundary.

use chrono::NaiveDate;
use lens_core::formatting::{self, MISSING_VALUE};
use lens_core::models::{Listing, RawNumber, MISSING_LABEL};
use lens_core::numeric::coerce;
use ratatui::layout::{Constraint, Rect};
use ratatui::text::Span;
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table};
use ratatui::Frame;
use unicode_width::UnicodeWidthChar;

use crate::themes::Theme;

/// Widest street text the table column will show before truncating.
const STREET_WIDTH: usize = 22;

/// Render the listing table into `area`.
pub fn render_listing_table(frame: &mut Frame, area: Rect, rows: &[Listing], theme: &Theme) {
    let header_cells = [
        "Street", "Type", "Beds", "Baths", "Gar", "Price", "Land", "$/sqm", "Listed", "DOM",
    ]
    .iter()
    .map(|h| Cell::from(*h).style(theme.table_header));
    let header = Row::new(header_cells).height(1);

    let data_rows: Vec<Row> = rows
        .iter()
        .enumerate()
        .map(|(i, listing)| {
            let style = if i % 2 == 0 {
                theme.table_row
            } else {
                theme.table_row_alt
            };
            Row::new(vec![
                Cell::from(fit(street_cell(listing), STREET_WIDTH)),
                Cell::from(
                    listing
                        .property_type
                        .clone()
                        .unwrap_or_else(|| MISSING_VALUE.to_string()),
                ),
                Cell::from(count_cell(&listing.bedrooms)),
                Cell::from(count_cell(&listing.bathrooms)),
                Cell::from(count_cell(&listing.garage_spaces)),
                Cell::from(money_cell(&listing.price)),
                Cell::from(count_cell(&listing.land_size_sqm)),
                Cell::from(money_cell(&listing.price_per_sqm)),
                Cell::from(date_cell(listing.listing_date)),
                Cell::from(count_cell(&listing.days_on_market)),
            ])
            .style(style)
        })
        .collect();

    let widths = [
        Constraint::Length(STREET_WIDTH as u16),
        Constraint::Length(10),
        Constraint::Length(5),
        Constraint::Length(5),
        Constraint::Length(4),
        Constraint::Length(11),
        Constraint::Length(7),
        Constraint::Length(8),
        Constraint::Length(11),
        Constraint::Length(4),
    ];

    let table = Table::new(data_rows, widths)
        .header(header)
        .column_spacing(1)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.table_border)
                .title(Span::styled(" Listings ", theme.table_header)),
        );

    frame.render_widget(table, area);
}

/// Render the placeholder shown when the filtered set is empty.
pub fn render_no_listings(frame: &mut Frame, area: Rect, theme: &Theme) {
    let paragraph = Paragraph::new(Span::styled("No listings to display", theme.dim)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme.table_border)
            .title(Span::styled(" Listings ", theme.table_header)),
    );
    frame.render_widget(paragraph, area);
}

// ── Cell formatting ───────────────────────────────────────────────────────────

fn street_cell(listing: &Listing) -> String {
    match listing.address.street.as_deref() {
        Some(street) => street.to_string(),
        None => listing
            .area_name
            .clone()
            .unwrap_or_else(|| MISSING_LABEL.to_string()),
    }
}

/// Plain-number cell (beds, baths, garages, land size, days on market).
fn count_cell(value: &RawNumber) -> String {
    let v = coerce(value);
    if v.is_finite() {
        formatting::format_number(v, 0)
    } else {
        MISSING_VALUE.to_string()
    }
}

fn money_cell(value: &RawNumber) -> String {
    let v = coerce(value);
    if v.is_finite() {
        formatting::format_aud(v)
    } else {
        MISSING_VALUE.to_string()
    }
}

fn date_cell(date: Option<NaiveDate>) -> String {
    match date {
        Some(d) => formatting::format_date(d),
        None => MISSING_VALUE.to_string(),
    }
}

/// Truncate `text` to at most `width` display columns, appending an ellipsis
/// when anything was cut.
fn fit(text: String, width: usize) -> String {
    let total: usize = text.chars().map(|c| c.width().unwrap_or(0)).sum();
    if total <= width {
        return text;
    }

    let mut out = String::new();
    let mut used = 0usize;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > width.saturating_sub(1) {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push('…');
    out
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    // ── cell helpers ──────────────────────────────────────────────────────

    #[test]
    fn test_count_cell() {
        assert_eq!(count_cell(&RawNumber::Number(3.0)), "3");
        assert_eq!(count_cell(&RawNumber::Absent), MISSING_VALUE);
        assert_eq!(count_cell(&RawNumber::Text("n/a".to_string())), MISSING_VALUE);
    }

    #[test]
    fn test_money_cell() {
        assert_eq!(money_cell(&RawNumber::Number(950_000.0)), "$950,000");
        assert_eq!(money_cell(&RawNumber::Absent), MISSING_VALUE);
    }

    #[test]
    fn test_count_cell_groups_thousands() {
        assert_eq!(count_cell(&RawNumber::Number(1_234.0)), "1,234");
    }

    #[test]
    fn test_money_cell_rounds_to_whole_dollars() {
        assert_eq!(money_cell(&RawNumber::Number(1_565.2)), "$1,565");
    }

    #[test]
    fn test_date_cell() {
        let date = NaiveDate::from_ymd_opt(2025, 10, 3).unwrap();
        assert_eq!(date_cell(Some(date)), "03 Oct 2025");
        assert_eq!(date_cell(None), MISSING_VALUE);
    }

    // ── fit ───────────────────────────────────────────────────────────────

    #[test]
    fn test_fit_leaves_short_text_alone() {
        assert_eq!(fit("3 Dalton Close".to_string(), 22), "3 Dalton Close");
    }

    #[test]
    fn test_fit_truncates_with_ellipsis() {
        let fitted = fit("10 Extraordinarily Long Street Name".to_string(), 12);
        assert!(fitted.ends_with('…'), "got: {fitted}");
        assert!(fitted.chars().count() <= 12, "got: {fitted}");
    }

    #[test]
    fn test_fit_exact_width_untouched() {
        let text = "abcdefghij".to_string(); // 10 columns
        assert_eq!(fit(text.clone(), 10), text);
    }

    // ── street_cell ───────────────────────────────────────────────────────

    #[test]
    fn test_street_cell_fallbacks() {
        let mut listing: Listing = serde_json_listing();
        assert_eq!(street_cell(&listing), "3 Dalton Close");

        listing.address.street = None;
        assert_eq!(street_cell(&listing), "3 Dalton Close, Belmont North, NSW");

        listing.area_name = None;
        assert_eq!(street_cell(&listing), MISSING_LABEL);
    }

    fn serde_json_listing() -> Listing {
        Listing {
            address: lens_core::models::Address {
                street: Some("3 Dalton Close".to_string()),
                suburb: Some("Belmont North".to_string()),
                state: Some("NSW".to_string()),
                sa1: None,
            },
            area_name: Some("3 Dalton Close, Belmont North, NSW".to_string()),
            property_type: Some("House".to_string()),
            bedrooms: RawNumber::Number(3.0),
            bathrooms: RawNumber::Number(1.0),
            garage_spaces: RawNumber::Number(2.0),
            price: RawNumber::Number(950_000.0),
            land_size_sqm: RawNumber::Number(607.0),
            price_per_sqm: RawNumber::Number(1_565.0),
            price_per_bedroom: RawNumber::Absent,
            listing_date: NaiveDate::from_ymd_opt(2025, 10, 3),
            days_on_market: RawNumber::Number(7.0),
            coordinates: None,
            gnaf_pid: None,
        }
    }
}
