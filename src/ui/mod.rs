mod form;
mod helpers;
mod landing;
mod notice;
mod status;
mod theme;

use ratatui::{prelude::*, widgets::Block};

use crate::state::{Screen, State};

pub fn render(frame: &mut Frame, state: &State) {
    let area = frame.area();

    // Fill base background
    frame.render_widget(Block::default().style(Style::default().bg(theme::BG_BASE)), area);

    // Main layout: body + footer (no header)
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),    // Body
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    match state.controller.session().screen() {
        Screen::Landing => landing::render_landing(frame, main_layout[0]),
        Screen::Form => form::render_form(frame, state, main_layout[0]),
    }
    status::render_status_bar(frame, state, main_layout[1]);

    if let Some(notice) = state.controller.notice() {
        notice::render_notice(frame, notice, area);
    }
}
