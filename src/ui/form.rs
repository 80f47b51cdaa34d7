use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Paragraph},
};

use super::helpers::{centered_column, cursor_position, scroll_to_keep, wrap_text};
use super::theme;
use crate::infra::config::UI;
use crate::infra::constants::{CONTENT_MAX_WIDTH, SPINNER_FRAMES, SYMPTOMS_COMPACT_HEIGHT, SYMPTOMS_HEIGHT};
use crate::infra::diagnosis::Diagnosis;
use crate::state::{Field, State};

pub fn render_form(frame: &mut Frame, state: &State, area: Rect) {
    let column = centered_column(area, CONTENT_MAX_WIDTH);
    let session = state.controller.session();

    // A result takes priority over the complaint box's height
    let compact = session.last_result().is_some();
    let (subheading_height, symptoms_height) = if compact { (1, SYMPTOMS_COMPACT_HEIGHT) } else { (2, SYMPTOMS_HEIGHT) };

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),                 // Back hint
            Constraint::Length(1),                 // Heading
            Constraint::Length(subheading_height), // Subheading (+ gap)
            Constraint::Length(3),                 // Name input
            Constraint::Length(symptoms_height),   // Symptoms input
            Constraint::Length(3),                 // Diagnose button
            Constraint::Min(0),                    // Result
        ])
        .split(column);

    frame.render_widget(
        Paragraph::new(Span::styled(UI.form.back.as_str(), Style::default().fg(theme::TEXT_MUTED))),
        layout[0],
    );
    frame.render_widget(
        Paragraph::new(Span::styled(UI.form.heading.as_str(), Style::default().fg(theme::TEXT).bold())),
        layout[1],
    );
    frame.render_widget(
        Paragraph::new(Span::styled(UI.form.subheading.as_str(), Style::default().fg(theme::TEXT_MUTED))),
        layout[2],
    );

    render_input(frame, state, Field::Name, session.patient_name(), layout[3]);
    render_input(frame, state, Field::Symptoms, session.symptom_text(), layout[4]);
    render_button(frame, state, layout[5]);

    if let Some(result) = session.last_result() {
        render_result(frame, result, layout[6]);
    }
}

fn render_input(frame: &mut Frame, state: &State, field: Field, text: &str, area: Rect) {
    let focused = state.form.focus == field;
    let (label, placeholder) = match field {
        Field::Name => (&UI.form.name_label, &UI.form.name_placeholder),
        Field::Symptoms => (&UI.form.symptoms_label, &UI.form.symptoms_placeholder),
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(if focused { theme::BORDER_FOCUS } else { theme::BORDER }))
        .title(Span::styled(format!(" {} ", label), Style::default().fg(theme::TEXT_SECONDARY).bold()))
        .style(Style::default().bg(theme::BG_INPUT));
    let inner = block.inner(area);

    let (row, col) = cursor_position(text, state.form.cursor(field));
    let scroll = (scroll_to_keep(row, inner.height), scroll_to_keep(col, inner.width));

    let paragraph = if text.is_empty() {
        Paragraph::new(Span::styled(placeholder.as_str(), Style::default().fg(theme::TEXT_MUTED).italic()))
    } else {
        Paragraph::new(text).style(Style::default().fg(theme::TEXT)).scroll(scroll)
    };
    frame.render_widget(paragraph.block(block), area);

    if focused && state.controller.notice().is_none() && inner.width > 0 && inner.height > 0 {
        frame.set_cursor_position((inner.x + col - scroll.1, inner.y + row - scroll.0));
    }
}

fn render_button(frame: &mut Frame, state: &State, area: Rect) {
    let in_flight = state.controller.session().in_flight();

    let (caption, style) = if in_flight {
        let spin = SPINNER_FRAMES[state.spinner_frame % SPINNER_FRAMES.len()];
        (
            format!("{} {}", spin, UI.form.diagnosing_button),
            Style::default().fg(theme::TEXT_MUTED).bg(theme::BG_ELEVATED),
        )
    } else {
        (UI.form.diagnose_button.clone(), Style::default().fg(theme::BG_BASE).bg(theme::ACCENT).bold())
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(if in_flight { theme::BORDER } else { theme::ACCENT_DIM }))
        .style(style);

    frame.render_widget(Paragraph::new(caption).alignment(Alignment::Center).block(block), area);
}

fn render_result(frame: &mut Frame, result: &Diagnosis, area: Rect) {
    if area.height < 3 {
        return;
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme::BORDER))
        .style(Style::default().bg(theme::BG_SURFACE));
    let inner = block.inner(area);
    let width = inner.width.saturating_sub(2) as usize;

    let sections = [
        (&UI.result.diagnosis_label, wrap_text(&result.ai_diagnosis, width), theme::DIAGNOSIS),
        (&UI.result.suggestion_label, wrap_text(&result.suggestion, width), theme::SUGGESTION),
    ];

    // Title + per section (spacer + label + body); drop spacers when short on rows
    let full_height = 1 + sections.iter().map(|(_, body, _)| 2 + body.len()).sum::<usize>();
    let spaced = full_height <= inner.height as usize;

    let mut lines: Vec<Line> = vec![Line::from(vec![
        Span::styled(format!("{} ", UI.result.title), Style::default().fg(theme::TEXT_SECONDARY)),
        Span::styled(result.patient.as_str(), Style::default().fg(theme::TEXT).bold()),
    ])];

    for (label, body, color) in sections {
        if spaced {
            lines.push(Line::from(""));
        }
        lines.push(Line::from(Span::styled(label.as_str(), Style::default().fg(theme::TEXT_MUTED))));
        for wrapped in body {
            lines.push(Line::from(Span::styled(format!("  {}", wrapped), Style::default().fg(color).bold())));
        }
    }

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
