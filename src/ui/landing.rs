use ratatui::{
    prelude::*,
    widgets::{Paragraph, Wrap},
};

use super::helpers::centered_column;
use super::theme;
use crate::infra::config::UI;
use crate::infra::constants::CONTENT_MAX_WIDTH;

pub fn render_landing(frame: &mut Frame, area: Rect) {
    let column = centered_column(area, CONTENT_MAX_WIDTH);
    let strings = &UI.landing;

    let lines = vec![
        Line::from(strings.logo.as_str()),
        Line::from(""),
        Line::from(Span::styled(strings.title.as_str(), Style::default().fg(theme::ACCENT).bold())),
        Line::from(""),
        Line::from(Span::styled(strings.subtitle.as_str(), Style::default().fg(theme::TEXT_SECONDARY))),
        Line::from(""),
        Line::from(Span::styled(
            format!("  {}  ", strings.start_button),
            Style::default().fg(theme::BG_BASE).bg(theme::ACCENT).bold(),
        )),
        Line::from(""),
        Line::from(Span::styled(strings.start_hint.as_str(), Style::default().fg(theme::TEXT_MUTED))),
    ];

    // Vertically center; the subtitle may wrap onto a few extra rows
    let height = (lines.len() as u16 + 2).min(column.height);
    let y = column.y + column.height.saturating_sub(height) / 2;
    let block_area = Rect::new(column.x, y, column.width, height);

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center).wrap(Wrap { trim: true });
    frame.render_widget(paragraph, block_area);
}
