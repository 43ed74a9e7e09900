use crate::app::App;
use crate::fixtures::{Priority, DISTRICTS, SNAPSHOT};
use crate::ui::style::{alert_color, selected_row, sentiment_color};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style, Stylize},
    symbols,
    text::{Line, Span},
    widgets::{
        Axis, Block, BorderType, Borders, Chart, Dataset, Gauge, GraphType, Paragraph, Widget,
        Wrap,
    },
};

pub fn render_dashboard(app: &mut App, area: Rect, buf: &mut Buffer) {
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(1),    // Content
            Constraint::Length(3), // Help
        ])
        .split(area);

    // Title
    let title = Paragraph::new("🏛️ Civic Pulse - Citizen Complaint Dashboard")
        .block(
            Block::bordered()
                .title("Civic Pulse")
                .title_alignment(Alignment::Center)
                .border_type(BorderType::Rounded),
        )
        .fg(Color::Green)
        .alignment(Alignment::Center);
    title.render(main_layout[0], buf);

    let content_layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(42), // Aggregates and districts
            Constraint::Percentage(58), // Trend chart and outlook
        ])
        .split(main_layout[1]);

    let left_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(8), // Snapshot card
            Constraint::Min(1),    // Districts
            Constraint::Length(3), // Resolution gauge
        ])
        .split(content_layout[0]);

    render_snapshot_card(left_layout[0], buf);
    render_districts(app, left_layout[1], buf);
    render_resolution_gauge(left_layout[2], buf);

    let right_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(55), // Monthly chart
            Constraint::Min(1),         // Forecast cards
        ])
        .split(content_layout[1]);

    render_monthly_chart(right_layout[0], buf);
    render_forecasts(app, right_layout[1], buf);

    // Help text
    let help_text = if app.show_report {
        "↑/↓: Scroll brief • g/Esc: Close brief • Tab: Assistant • q: Quit"
    } else {
        "↑/↓ or j/k: Districts • g: Weekly Brief • Tab: Assistant • q: Quit"
    };
    let help = Paragraph::new(help_text)
        .block(
            Block::bordered()
                .title("Controls")
                .border_type(BorderType::Rounded),
        )
        .fg(Color::Yellow)
        .alignment(Alignment::Center);
    help.render(main_layout[2], buf);
}

fn render_snapshot_card(area: Rect, buf: &mut Buffer) {
    let statuses = &SNAPSHOT.statuses;
    let sentiments = &SNAPSHOT.sentiments;

    let top_categories: Vec<String> = SNAPSHOT
        .categories
        .iter()
        .take(3)
        .map(|(category, count)| format!("{} {}", category.label(), count))
        .collect();
    let urgent = SNAPSHOT
        .priorities
        .iter()
        .find(|(priority, _)| matches!(priority, Priority::Urgent))
        .map(|(_, count)| *count)
        .unwrap_or(0);

    let lines = vec![
        Line::from(vec![
            Span::raw("Total complaints: "),
            Span::styled(
                SNAPSHOT.total.to_string(),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(format!(
            "Pending {} • In progress {} • Resolved {}",
            statuses.pending, statuses.in_progress, statuses.resolved
        )),
        Line::from(vec![
            Span::raw("Mood: "),
            Span::styled(
                format!("{} positive", sentiments.positive),
                Style::default().fg(Color::Green),
            ),
            Span::raw(" / "),
            Span::styled(
                format!("{} negative", sentiments.negative),
                Style::default().fg(Color::Red),
            ),
            Span::raw(" / "),
            Span::styled(
                format!("{} neutral", sentiments.neutral),
                Style::default().fg(Color::Gray),
            ),
        ]),
        Line::from(format!("Top categories: {}", top_categories.join(", "))),
        Line::from(vec![
            Span::raw("Urgent queue: "),
            Span::styled(urgent.to_string(), Style::default().fg(Color::Red)),
        ]),
    ];

    let card = Paragraph::new(lines).block(
        Block::bordered()
            .title("City Snapshot")
            .border_type(BorderType::Rounded),
    );
    card.render(area, buf);
}

fn render_districts(app: &App, area: Rect, buf: &mut Buffer) {
    let mut lines = Vec::new();
    for (i, district) in DISTRICTS.iter().enumerate() {
        let is_selected = i == app.selected_district;
        let marker = if is_selected { "▶ " } else { "  " };
        let row_style = selected_row(is_selected, Style::default().fg(Color::White));

        lines.push(Line::from(vec![
            Span::styled(marker, row_style),
            Span::styled(format!("{:<14}", district.name), row_style),
            Span::styled(format!("{:>4} open  ", district.complaints), row_style),
            Span::styled(
                format!("{:+.2}", district.avg_sentiment),
                Style::default().fg(sentiment_color(district.avg_sentiment)),
            ),
        ]));
    }

    let selected = &DISTRICTS[app.selected_district];
    let list = Paragraph::new(lines).block(
        Block::bordered()
            .title("Districts")
            .title_bottom(
                Line::from(format!(
                    " {} @ {:.4}, {:.4} ",
                    selected.name, selected.latitude, selected.longitude
                ))
                .right_aligned(),
            )
            .border_type(BorderType::Rounded),
    );
    list.render(area, buf);
}

fn render_resolution_gauge(area: Rect, buf: &mut Buffer) {
    let total = SNAPSHOT.total.max(1);
    let rate = SNAPSHOT.statuses.resolved as f64 / total as f64 * 100.0;
    let percentage = rate.min(100.0) as u16;

    let in_good_zone = rate >= 60.0;
    let in_warn_zone = rate >= 35.0;
    let (fg, bg) = if in_good_zone {
        (Color::Green, Color::LightGreen)
    } else if in_warn_zone {
        (Color::Yellow, Color::LightYellow)
    } else {
        (Color::Red, Color::LightRed)
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Resolution rate ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(bg)),
        )
        .gauge_style(Style::default().fg(fg).bg(bg))
        .percent(percentage)
        .label(format!("{:.1}% resolved", rate));
    Widget::render(gauge, area, buf);
}

fn render_monthly_chart(area: Rect, buf: &mut Buffer) {
    let roads_points: Vec<(f64, f64)> = SNAPSHOT
        .monthly
        .iter()
        .enumerate()
        .map(|(i, point)| (i as f64, point.roads as f64))
        .collect();
    let water_points: Vec<(f64, f64)> = SNAPSHOT
        .monthly
        .iter()
        .enumerate()
        .map(|(i, point)| (i as f64, point.water as f64))
        .collect();

    let max_x = (SNAPSHOT.monthly.len() - 1).max(1) as f64;
    let max_y = roads_points
        .iter()
        .chain(water_points.iter())
        .map(|(_, y)| *y)
        .fold(f64::NEG_INFINITY, f64::max);
    let y_max = (max_y * 1.15).ceil();

    let datasets = vec![
        Dataset::default()
            .name("Roads")
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::Cyan))
            .data(&roads_points),
        Dataset::default()
            .name("Water")
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::Blue))
            .data(&water_points),
    ];

    let months = &SNAPSHOT.monthly;
    let x_labels = vec![
        months[0].month,
        months[months.len() / 2].month,
        months[months.len() - 1].month,
    ];
    let x_axis = Axis::default()
        .title("Month")
        .style(Style::default().fg(Color::Gray))
        .labels(x_labels)
        .bounds([0.0, max_x]);

    let y_labels = vec![
        "0".to_string(),
        format!("{:.0}", y_max / 2.0),
        format!("{:.0}", y_max),
    ];
    let y_label_refs: Vec<&str> = y_labels.iter().map(|s| s.as_str()).collect();
    let y_axis = Axis::default()
        .title("Complaints")
        .style(Style::default().fg(Color::Gray))
        .labels(y_label_refs)
        .bounds([0.0, y_max]);

    let chart = Chart::new(datasets)
        .block(
            Block::default()
                .title(" Monthly complaints ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Green)),
        )
        .x_axis(x_axis)
        .y_axis(y_axis);
    Widget::render(chart, area, buf);
}

fn render_forecasts(app: &App, area: Rect, buf: &mut Buffer) {
    let slots = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![
            Constraint::Ratio(1, app.forecasts.len().max(1) as u32);
            app.forecasts.len().max(1)
        ])
        .split(area);

    for (forecast, slot) in app.forecasts.iter().zip(slots.iter()) {
        let (heading, border) = match forecast.alert() {
            Some(alert) => (alert.label(), alert_color(alert)),
            None => ("No data", Color::Gray),
        };

        let body = vec![
            Line::from(Span::styled(
                heading,
                Style::default().fg(border).add_modifier(Modifier::BOLD),
            )),
            Line::from(forecast.message().to_string()),
        ];

        let card = Paragraph::new(body)
            .block(
                Block::bordered()
                    .title(format!(" {} outlook ", forecast.category().label()))
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(border)),
            )
            .wrap(Wrap { trim: true });
        card.render(*slot, buf);
    }
}
