use crate::app::App;
use crate::ui::centered_rect;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Stylize},
    widgets::{Block, BorderType, Clear, Paragraph, Widget, Wrap},
};

/// Modal overlay with the composed weekly brief.
pub fn render_report_overlay(app: &App, area: Rect, buf: &mut Buffer) {
    let popup = centered_rect(70, 70, area);
    Clear.render(popup, buf);

    let brief = Paragraph::new(app.report_text.as_str())
        .block(
            Block::bordered()
                .title(" 📋 Weekly Brief (↑↓ to scroll, g to close) ")
                .border_type(BorderType::Rounded),
        )
        .fg(Color::White)
        .wrap(Wrap { trim: false })
        .scroll((app.report_scroll, 0));
    brief.render(popup, buf);
}
