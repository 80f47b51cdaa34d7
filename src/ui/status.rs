use ratatui::{prelude::*, widgets::Paragraph};
use unicode_width::UnicodeWidthStr;

use super::theme;
use crate::infra::config::UI;
use crate::infra::constants::SPINNER_FRAMES;
use crate::state::{Screen, State};

pub fn render_status_bar(frame: &mut Frame, state: &State, area: Rect) {
    let base_style = Style::default().bg(theme::BG_BASE).fg(theme::TEXT_MUTED);
    let session = state.controller.session();

    let mut spans = vec![Span::styled(" ", base_style)];

    if session.in_flight() {
        let spin = SPINNER_FRAMES[state.spinner_frame % SPINNER_FRAMES.len()];
        spans.push(Span::styled(
            format!(" {} {} ", spin, UI.status.requesting),
            Style::default().fg(theme::BG_BASE).bg(theme::SUCCESS).bold(),
        ));
    } else {
        spans.push(Span::styled(
            format!(" {} ", UI.status.ready),
            Style::default().fg(theme::BG_BASE).bg(theme::TEXT_MUTED).bold(),
        ));
    }
    spans.push(Span::styled(" ", base_style));

    let hints = match session.screen() {
        Screen::Landing => UI.status.landing_hints.as_str(),
        Screen::Form => UI.status.form_hints.as_str(),
    };
    let right_info = format!("{} ", hints);

    let left_width: usize = spans.iter().map(|s| s.content.width()).sum();
    let padding = (area.width as usize).saturating_sub(left_width + right_info.width());

    spans.push(Span::styled(" ".repeat(padding), base_style));
    spans.push(Span::styled(right_info, base_style));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
