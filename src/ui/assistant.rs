use crate::app::App;
use crate::assistant::{AssistantPhase, Origin};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, BorderType, Paragraph, StatefulWidget, Widget, Wrap},
};
use throbber_widgets_tui::Throbber;

pub fn render_assistant(app: &mut App, area: Rect, buf: &mut Buffer) {
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(1),    // Conversation
            Constraint::Length(3), // Status line
            Constraint::Length(3), // Input box
            Constraint::Length(3), // Help
        ])
        .split(area);

    // Title
    let title = Paragraph::new("🎙️ Civic Assistant - Ask about your city")
        .block(
            Block::bordered()
                .title("Assistant")
                .title_alignment(Alignment::Center)
                .border_type(BorderType::Rounded),
        )
        .fg(Color::Green)
        .alignment(Alignment::Center);
    title.render(main_layout[0], buf);

    render_conversation(app, main_layout[1], buf);
    render_status(app, main_layout[2], buf);

    // Input box
    let input_widget = Paragraph::new(format!("> {}", app.assistant.input))
        .block(
            Block::bordered()
                .title("Type your message")
                .border_type(BorderType::Rounded),
        )
        .fg(Color::Yellow);
    input_widget.render(main_layout[3], buf);

    // Help
    let help_text = format!(
        "Enter: Send • F2: Voice • Ctrl+L: Language [{}] • ↑/↓: Scroll • Tab: Dashboard",
        app.assistant.language
    );
    let help = Paragraph::new(help_text)
        .block(
            Block::bordered()
                .title("Controls")
                .border_type(BorderType::Rounded),
        )
        .fg(Color::Yellow)
        .alignment(Alignment::Center);
    help.render(main_layout[4], buf);
}

fn render_conversation(app: &App, area: Rect, buf: &mut Buffer) {
    let mut lines = Vec::new();
    for message in &app.assistant.messages {
        let (prefix, style) = match message.origin {
            Origin::User if message.via_voice => {
                ("You 🎤: ", Style::default().fg(Color::Cyan))
            }
            Origin::User => ("You: ", Style::default().fg(Color::Cyan)),
            Origin::Assistant => ("Assistant: ", Style::default().fg(Color::Green)),
        };

        let mut content_lines = message.text.lines();
        let first_line = content_lines.next().unwrap_or_default().to_string();
        lines.push(Line::from(vec![
            Span::styled(prefix, style.add_modifier(Modifier::BOLD)),
            Span::styled(first_line, Style::default().fg(Color::White)),
        ]));
        for line in content_lines {
            lines.push(Line::from(vec![
                Span::styled("    ", Style::default()),
                Span::styled(line.to_string(), Style::default().fg(Color::White)),
            ]));
        }
        lines.push(Line::from(""));
    }

    let conversation = Paragraph::new(lines)
        .block(
            Block::bordered()
                .title("Conversation (↑↓ to scroll)")
                .border_type(BorderType::Rounded),
        )
        .wrap(Wrap { trim: true })
        .scroll((app.assistant.scroll, 0));
    conversation.render(area, buf);
}

fn render_status(app: &mut App, area: Rect, buf: &mut Buffer) {
    let block = Block::bordered()
        .title("Status")
        .border_type(BorderType::Rounded);
    let inner = block.inner(area);
    block.render(area, buf);

    // An error banner overrides everything until it expires.
    if let Some(banner) = app.assistant.banner_text() {
        let warning = Paragraph::new(Span::styled(
            banner.to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ));
        warning.render(inner, buf);
        return;
    }

    let label = match app.assistant.phase {
        AssistantPhase::Idle => None,
        AssistantPhase::Listening => Some("Listening...".to_string()),
        AssistantPhase::Transcribing => Some(format!("Heard: {}", app.assistant.interim)),
        AssistantPhase::Sent => Some(format!("Sending: {}", app.assistant.interim)),
        AssistantPhase::AwaitingReply => Some("Waiting for reply...".to_string()),
    };

    match label {
        Some(label) => {
            let throbber = Throbber::default()
                .label(label)
                .style(Style::default().fg(Color::Cyan));
            StatefulWidget::render(throbber, inner, buf, &mut app.throbber);
        }
        None => {
            let line = match app.speech.now_speaking() {
                Some(text) => Line::from(Span::styled(
                    format!("🔊 {}", text),
                    Style::default().fg(Color::Green),
                )),
                None => Line::from(Span::styled(
                    "Ready • press F2 and speak, or type below",
                    Style::default().fg(Color::Gray),
                )),
            };
            Paragraph::new(line).render(inner, buf);
        }
    }
}
