use ratatui::style::{Color, Modifier, Style};

/// Terminal background type detection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BackgroundType {
    Dark,
    Light,
    Unknown,
}

/// Detect terminal background type from the `COLORFGBG` environment variable.
///
/// The variable has the format `"foreground;background"`. Background values
/// 0–6 are considered dark; 7–15 are considered light. If the variable is
/// absent or unparseable, `BackgroundType::Dark` is returned as the safe
/// default.
pub fn detect_background() -> BackgroundType {
    if let Ok(val) = std::env::var("COLORFGBG") {
        if let Some(bg) = val.split(';').next_back() {
            if let Ok(bg_num) = bg.parse::<u8>() {
                return if bg_num <= 6 {
                    BackgroundType::Dark
                } else {
                    BackgroundType::Light
                };
            }
        }
    }
    BackgroundType::Dark
}

/// Complete theme definition carrying all UI styles used by the lens-ui
/// components.
#[derive(Debug, Clone)]
pub struct Theme {
    // ── Header / summary panel ───────────────────────────────────────────
    pub header: Style,
    pub label: Style,
    pub value: Style,
    pub dim: Style,

    // ── Status line ──────────────────────────────────────────────────────
    pub info: Style,
    pub error: Style,

    // ── Inputs ───────────────────────────────────────────────────────────
    pub input_active: Style,
    pub input_inactive: Style,

    // ── Table ────────────────────────────────────────────────────────────
    pub table_header: Style,
    pub table_border: Style,
    pub table_row: Style,
    pub table_row_alt: Style,

    // ── Charts ───────────────────────────────────────────────────────────
    pub chart_bar: Style,
    pub chart_value: Style,
    pub chart_axis: Style,
    pub scatter_point: Style,
}

impl Theme {
    // ── Constructors ─────────────────────────────────────────────────────

    /// Dark-background terminal theme (default).
    pub fn dark() -> Self {
        Self {
            header: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            label: Style::default().fg(Color::Gray),
            value: Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
            dim: Style::default().fg(Color::DarkGray),

            info: Style::default().fg(Color::Green),
            error: Style::default()
                .fg(Color::Red)
                .add_modifier(Modifier::BOLD),

            input_active: Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
            input_inactive: Style::default().fg(Color::DarkGray),

            table_header: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            table_border: Style::default().fg(Color::DarkGray),
            table_row: Style::default().fg(Color::White),
            table_row_alt: Style::default().fg(Color::Gray),

            chart_bar: Style::default().fg(Color::Cyan),
            chart_value: Style::default().fg(Color::White),
            chart_axis: Style::default().fg(Color::Gray),
            scatter_point: Style::default().fg(Color::Yellow),
        }
    }

    /// Light-background terminal theme.
    pub fn light() -> Self {
        Self {
            header: Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::BOLD),
            label: Style::default().fg(Color::DarkGray),
            value: Style::default()
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
            dim: Style::default().fg(Color::Gray),

            info: Style::default().fg(Color::Green),
            error: Style::default()
                .fg(Color::Red)
                .add_modifier(Modifier::BOLD),

            input_active: Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::BOLD),
            input_inactive: Style::default().fg(Color::Gray),

            table_header: Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::BOLD),
            table_border: Style::default().fg(Color::Gray),
            table_row: Style::default().fg(Color::Black),
            table_row_alt: Style::default().fg(Color::DarkGray),

            chart_bar: Style::default().fg(Color::Blue),
            chart_value: Style::default().fg(Color::Black),
            chart_axis: Style::default().fg(Color::DarkGray),
            scatter_point: Style::default().fg(Color::Magenta),
        }
    }

    /// High-contrast theme relying on the terminal's base palette only.
    pub fn classic() -> Self {
        Self {
            header: Style::default().add_modifier(Modifier::BOLD),
            label: Style::default(),
            value: Style::default().add_modifier(Modifier::BOLD),
            dim: Style::default().add_modifier(Modifier::DIM),

            info: Style::default(),
            error: Style::default().add_modifier(Modifier::REVERSED),

            input_active: Style::default().add_modifier(Modifier::BOLD),
            input_inactive: Style::default().add_modifier(Modifier::DIM),

            table_header: Style::default().add_modifier(Modifier::UNDERLINED),
            table_border: Style::default(),
            table_row: Style::default(),
            table_row_alt: Style::default().add_modifier(Modifier::DIM),

            chart_bar: Style::default(),
            chart_value: Style::default().add_modifier(Modifier::BOLD),
            chart_axis: Style::default().add_modifier(Modifier::DIM),
            scatter_point: Style::default().add_modifier(Modifier::BOLD),
        }
    }

    /// Resolve a theme from its CLI name. `"auto"` picks dark or light based
    /// on [`detect_background`]; unknown names fall back to dark.
    pub fn from_name(name: &str) -> Self {
        match name {
            "light" => Self::light(),
            "dark" => Self::dark(),
            "classic" => Self::classic(),
            _ => match detect_background() {
                BackgroundType::Light => Self::light(),
                _ => Self::dark(),
            },
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name_explicit_themes() {
        let light = Theme::from_name("light");
        assert_eq!(light.table_row.fg, Some(Color::Black));

        let dark = Theme::from_name("dark");
        assert_eq!(dark.table_row.fg, Some(Color::White));
    }

    #[test]
    fn test_from_name_unknown_falls_back() {
        // Unknown names resolve via auto-detection, which never panics.
        let _ = Theme::from_name("no-such-theme");
    }

    #[test]
    fn test_detect_background_default_is_dark() {
        // Whatever COLORFGBG contains, the function must return a value.
        let bg = detect_background();
        assert!(matches!(
            bg,
            BackgroundType::Dark | BackgroundType::Light | BackgroundType::Unknown
        ));
    }
}
