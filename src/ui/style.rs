use crate::analytics::predictor::TrendAlert;
use ratatui::style::{Color, Modifier, Style};

pub fn alert_color(alert: TrendAlert) -> Color {
    match alert {
        TrendAlert::Critical => Color::Red,
        TrendAlert::Warning => Color::Yellow,
        TrendAlert::Positive => Color::Green,
        TrendAlert::Neutral => Color::Gray,
    }
}

/// Color for a signed average sentiment score in [-1, 1].
pub fn sentiment_color(score: f64) -> Color {
    if score > 0.05 {
        Color::Green
    } else if score < -0.2 {
        Color::Red
    } else {
        Color::Yellow
    }
}

pub fn selected_row(is_selected: bool, style: Style) -> Style {
    if is_selected {
        style.fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else {
        style
    }
}
