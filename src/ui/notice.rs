use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
};

use super::helpers::centered_rect;
use super::theme;
use crate::infra::config::UI;
use crate::state::Notice;

const NOTICE_WIDTH: u16 = 48;
const NOTICE_HEIGHT: u16 = 7;

pub fn render_notice(frame: &mut Frame, notice: Notice, area: Rect) {
    let overlay_area = centered_rect(area, NOTICE_WIDTH, NOTICE_HEIGHT);

    let accent = match notice {
        Notice::Validation => theme::WARNING,
        Notice::Connectivity => theme::ERROR,
    };

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(notice.message(), Style::default().fg(theme::TEXT).bold())),
        Line::from(""),
        Line::from(Span::styled(UI.notices.dismiss_hint.as_str(), Style::default().fg(theme::TEXT_MUTED))),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(accent))
        .title(Span::styled(format!(" {} ", UI.notices.title), Style::default().fg(accent).bold()))
        .style(Style::default().bg(theme::BG_ELEVATED));

    frame.render_widget(Clear, overlay_area);
    frame.render_widget(
        Paragraph::new(lines).block(block).alignment(Alignment::Center).wrap(Wrap { trim: true }),
        overlay_area,
    );
}
