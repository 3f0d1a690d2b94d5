//! Chart panels.
//!
//! One panel is visible at a time; the event loop cycles through the five
//! chart tabs. Bar series render with [`ratatui::widgets::BarChart`], the
//! price-vs-land scatter with a braille [`ratatui::widgets::Chart`]. All
//! panels consume pre-built view-models and perform no aggregation of their
//! own.

use lens_core::charts::{BarSeries, ScatterSeries};
use lens_core::formatting;
use lens_runtime::frame::DashboardFrame;
use ratatui::layout::Rect;
use ratatui::symbols::Marker;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Axis, Bar, BarChart, BarGroup, Block, Borders, Chart, Dataset, GraphType,
    Paragraph};
use ratatui::Frame;

use crate::themes::Theme;

/// The five chart tabs, in cycling order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartTab {
    PricePerSqm,
    DaysOnMarket,
    BedroomMix,
    MedianByBedrooms,
    PriceVsLand,
}

impl ChartTab {
    pub const ALL: [ChartTab; 5] = [
        ChartTab::PricePerSqm,
        ChartTab::DaysOnMarket,
        ChartTab::BedroomMix,
        ChartTab::MedianByBedrooms,
        ChartTab::PriceVsLand,
    ];

    pub fn next(self) -> Self {
        let i = self.index();
        Self::ALL[(i + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        let i = self.index();
        Self::ALL[(i + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    pub fn index(self) -> usize {
        Self::ALL.iter().position(|t| *t == self).unwrap_or(0)
    }

    pub fn title(self) -> &'static str {
        match self {
            ChartTab::PricePerSqm => "Price per sqm (AUD)",
            ChartTab::DaysOnMarket => "Days on market",
            ChartTab::BedroomMix => "Bedroom mix",
            ChartTab::MedianByBedrooms => "Median price by bedrooms",
            ChartTab::PriceVsLand => "Price vs land size",
        }
    }
}

/// Render the currently selected chart panel into `area`.
pub fn render_chart(
    frame: &mut Frame,
    area: Rect,
    tab: ChartTab,
    data: &DashboardFrame,
    theme: &Theme,
) {
    let title = format!(" ◀ {} ({}/{}) ▶ ", tab.title(), tab.index() + 1, ChartTab::ALL.len());

    match tab {
        ChartTab::PricePerSqm => {
            render_bar_chart(frame, area, &title, &data.price_per_sqm, true, theme)
        }
        ChartTab::DaysOnMarket => {
            render_bar_chart(frame, area, &title, &data.days_on_market, false, theme)
        }
        ChartTab::BedroomMix => {
            render_bar_chart(frame, area, &title, &data.bedroom_mix, false, theme)
        }
        ChartTab::MedianByBedrooms => {
            render_bar_chart(frame, area, &title, &data.median_by_bedrooms, true, theme)
        }
        ChartTab::PriceVsLand => render_scatter(frame, area, &title, &data.price_vs_land, theme),
    }
}

// ── Bar charts ────────────────────────────────────────────────────────────────

fn render_bar_chart(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    series: &BarSeries,
    money: bool,
    theme: &Theme,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.table_border)
        .title(Span::styled(title.to_string(), theme.header));

    if series.values.is_empty() {
        frame.render_widget(
            Paragraph::new(Span::styled("No data", theme.dim)).block(block),
            area,
        );
        return;
    }

    let bars: Vec<Bar> = series
        .labels
        .iter()
        .zip(&series.values)
        .map(|(label, value)| {
            let text = if money {
                formatting::format_aud(*value)
            } else {
                formatting::format_number(*value, 0)
            };
            Bar::default()
                .value(value.round().max(0.0) as u64)
                .text_value(text)
                .label(Line::from(label.clone()))
                .style(theme.chart_bar)
                .value_style(theme.chart_value)
        })
        .collect();

    let chart = BarChart::default()
        .block(block)
        .data(BarGroup::default().bars(&bars))
        .bar_width(bar_width(area.width, series.values.len()))
        .bar_gap(1);

    frame.render_widget(chart, area);
}

/// Fit `count` bars plus gaps into `width` columns, clamped to a readable
/// range.
fn bar_width(width: u16, count: usize) -> u16 {
    if count == 0 {
        return 1;
    }
    let usable = width.saturating_sub(2); // block borders
    let per_bar = usable / count as u16;
    per_bar.saturating_sub(1).clamp(3, 12)
}

// ── Scatter ───────────────────────────────────────────────────────────────────

fn render_scatter(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    series: &ScatterSeries,
    theme: &Theme,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.table_border)
        .title(Span::styled(title.to_string(), theme.header));

    if series.points.is_empty() {
        frame.render_widget(
            Paragraph::new(Span::styled("No data", theme.dim)).block(block),
            area,
        );
        return;
    }

    let points: Vec<(f64, f64)> = series.points.iter().map(|p| (p.x, p.y)).collect();
    let x_max = axis_max(points.iter().map(|(x, _)| *x));
    let y_max = axis_max(points.iter().map(|(_, y)| *y));

    let datasets = vec![Dataset::default()
        .name("listings")
        .marker(Marker::Braille)
        .graph_type(GraphType::Scatter)
        .style(theme.scatter_point)
        .data(&points)];

    let chart = Chart::new(datasets)
        .block(block)
        .x_axis(
            Axis::default()
                .title("Land (sqm)")
                .style(theme.chart_axis)
                .bounds([0.0, x_max])
                .labels(axis_labels(x_max, false)),
        )
        .y_axis(
            Axis::default()
                .title("Price (AUD)")
                .style(theme.chart_axis)
                .bounds([0.0, y_max])
                .labels(axis_labels(y_max, true)),
        );

    frame.render_widget(chart, area);
}

/// Upper axis bound: the data maximum with 10% headroom.
fn axis_max(values: impl Iterator<Item = f64>) -> f64 {
    let max = values.fold(0.0_f64, f64::max);
    if max <= 0.0 {
        1.0
    } else {
        max * 1.1
    }
}

/// Three tick labels at 0, midpoint, and the bound.
fn axis_labels(max: f64, money: bool) -> Vec<String> {
    let fmt = |v: f64| {
        if money {
            formatting::format_aud(v)
        } else {
            formatting::format_number(v, 0)
        }
    };
    vec![fmt(0.0), fmt(max / 2.0), fmt(max)]
}

// ── Tests ─────────────────────────────────────────────────────────────────────
