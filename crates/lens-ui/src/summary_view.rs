use chrono::{DateTime, Utc};
use lens_core::formatting::{self, MISSING_VALUE};
use lens_core::models::Summary;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::themes::Theme;

/// The summary panel at the top of the dashboard.
///
/// Displays the externally computed fetch summary verbatim; when no summary
/// is available (startup, failed fetch) every figure renders as the missing
/// placeholder.
pub struct SummaryPanel<'a> {
    pub summary: Option<&'a Summary>,
    /// Listings visible after filtering, for the "showing n" figure.
    pub shown: usize,
    pub theme: &'a Theme,
}

impl<'a> SummaryPanel<'a> {
    pub fn new(summary: Option<&'a Summary>, shown: usize, theme: &'a Theme) -> Self {
        Self {
            summary,
            shown,
            theme,
        }
    }

    /// Render the panel's four content lines.
    pub fn to_lines(&self) -> Vec<Line<'a>> {
        match self.summary {
            Some(summary) => self.loaded_lines(summary),
            None => self.placeholder_lines(),
        }
    }

    fn loaded_lines(&self, summary: &'a Summary) -> Vec<Line<'a>> {
        let scope = match summary.property_type.as_deref() {
            Some(pt) => format!("{} · {}", summary.suburb, pt),
            None => summary.suburb.clone(),
        };

        vec![
            Line::from(vec![
                Span::styled("Suburb: ", self.theme.label),
                Span::styled(scope, self.theme.value),
            ]),
            Line::from(vec![
                Span::styled("Listings: ", self.theme.label),
                Span::styled(
                    format!("{} (showing {})", summary.count, self.shown),
                    self.theme.value,
                ),
            ]),
            Line::from(vec![
                Span::styled("Median price: ", self.theme.label),
                Span::styled(money(summary.median_price), self.theme.value),
                Span::styled("   Median $/sqm: ", self.theme.label),
                Span::styled(per_sqm(summary.median_price_per_sqm), self.theme.value),
                Span::styled("   Median DOM: ", self.theme.label),
                Span::styled(days(summary.median_dom), self.theme.value),
            ]),
            Line::from(vec![
                Span::styled("Source: ", self.theme.label),
                Span::styled(summary.source.to_string(), self.theme.value),
                Span::styled(" · fetched ", self.theme.label),
                Span::styled(fetched(summary.fetched_at_utc), self.theme.dim),
            ]),
        ]
    }

    fn placeholder_lines(&self) -> Vec<Line<'a>> {
        vec![
            Line::from(vec![
                Span::styled("Suburb: ", self.theme.label),
                Span::styled(MISSING_VALUE, self.theme.dim),
            ]),
            Line::from(vec![
                Span::styled("Listings: ", self.theme.label),
                Span::styled(MISSING_VALUE, self.theme.dim),
            ]),
            Line::from(vec![
                Span::styled("Median price: ", self.theme.label),
                Span::styled(MISSING_VALUE, self.theme.dim),
                Span::styled("   Median $/sqm: ", self.theme.label),
                Span::styled(MISSING_VALUE, self.theme.dim),
                Span::styled("   Median DOM: ", self.theme.label),
                Span::styled(MISSING_VALUE, self.theme.dim),
            ]),
            Line::from(vec![
                Span::styled("Source: ", self.theme.label),
                Span::styled(MISSING_VALUE, self.theme.dim),
            ]),
        ]
    }
}

/// Render the summary panel into `area`.
pub fn render_summary(
    frame: &mut Frame,
    area: Rect,
    summary: Option<&Summary>,
    shown: usize,
    theme: &Theme,
) {
    let panel = SummaryPanel::new(summary, shown, theme);
    let paragraph = Paragraph::new(panel.to_lines()).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme.table_border)
            .title(Span::styled(" Suburb Lens ", theme.header)),
    );
    frame.render_widget(paragraph, area);
}

// ── Formatting helpers ────────────────────────────────────────────────────────

fn money(value: Option<f64>) -> String {
    match value {
        Some(v) if v.is_finite() => formatting::format_aud(v),
        _ => MISSING_VALUE.to_string(),
    }
}

fn per_sqm(value: Option<f64>) -> String {
    match value {
        Some(v) if v.is_finite() => formatting::format_aud_per_sqm(v),
        _ => MISSING_VALUE.to_string(),
    }
}

fn days(value: Option<f64>) -> String {
    match value {
        Some(v) if v.is_finite() => formatting::format_number(v, 0),
        _ => MISSING_VALUE.to_string(),
    }
}

fn fetched(at: DateTime<Utc>) -> String {
    at.format("%Y-%m-%d %H:%M UTC").to_string()
}

// ── Tests ─────────────────────────────────────────────────────────────────────
