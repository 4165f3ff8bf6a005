//! Terminal rendering: translates session state into ratatui widgets.
//!
//! The form fields mirror the session's normalized text exactly; fields the
//! session has flagged invalid are drawn in red with a "required" marker.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::calc::MortgageType;
use crate::format::format_currency;
use crate::session::{Field, Session, View};

/// Which form control currently has keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Amount,
    Term,
    Rate,
    MortgageType,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Focus::Amount => Focus::Term,
            Focus::Term => Focus::Rate,
            Focus::Rate => Focus::MortgageType,
            Focus::MortgageType => Focus::Amount,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Focus::Amount => Focus::MortgageType,
            Focus::Term => Focus::Amount,
            Focus::Rate => Focus::Term,
            Focus::MortgageType => Focus::Rate,
        }
    }
}

pub fn ui(f: &mut Frame, session: &Session, focus: Focus) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(2)
        .constraints(
            [
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(4),
                Constraint::Min(5),
                Constraint::Length(2),
            ]
            .as_ref(),
        )
        .split(f.size());

    let title = Paragraph::new("Mortgage Repayment Calculator")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::BOTTOM));
    f.render_widget(title, chunks[0]);

    render_text_field(
        f,
        chunks[1],
        "Mortgage Amount (£)",
        session.amount(),
        focus == Focus::Amount,
        session.is_flagged(Field::Amount),
    );
    render_text_field(
        f,
        chunks[2],
        "Mortgage Term (years)",
        session.term(),
        focus == Focus::Term,
        session.is_flagged(Field::Term),
    );
    render_text_field(
        f,
        chunks[3],
        "Interest Rate (%)",
        session.rate(),
        focus == Focus::Rate,
        session.is_flagged(Field::Rate),
    );
    render_type_selector(f, chunks[4], session, focus == Focus::MortgageType);
    render_results(f, chunks[5], session);

    let help = Paragraph::new(
        "Tab/↑/↓: move | type to edit | r/i or ←/→: mortgage type | Enter: calculate | Ctrl+L: clear | Esc: quit",
    )
    .style(Style::default().fg(Color::DarkGray))
    .alignment(Alignment::Center);
    f.render_widget(help, chunks[6]);
}

fn border_style(focused: bool, flagged: bool) -> Style {
    if flagged {
        Style::default().fg(Color::Red)
    } else if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

fn field_title(label: &str, flagged: bool) -> String {
    if flagged {
        format!("{label} — this field is required")
    } else {
        label.to_string()
    }
}

fn render_text_field(
    f: &mut Frame,
    area: ratatui::layout::Rect,
    label: &str,
    value: &str,
    focused: bool,
    flagged: bool,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style(focused, flagged))
        .title(field_title(label, flagged));

    let input = Paragraph::new(value.to_string())
        .style(Style::default().fg(Color::Yellow))
        .block(block);
    f.render_widget(input, area);
}

fn render_type_selector(f: &mut Frame, area: ratatui::layout::Rect, session: &Session, focused: bool) {
    let selected = session.mortgage_type();
    let flagged = session.is_flagged(Field::MortgageType);

    let option_line = |label: &str, choice: MortgageType| {
        let active = selected == Some(choice);
        let marker = if active { "▶" } else { " " };
        Line::from(format!("{marker} {label}")).style(if active {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        })
    };

    let options = vec![
        option_line("Repayment", MortgageType::Repayment),
        option_line("Interest Only", MortgageType::InterestOnly),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style(focused, flagged))
        .title(field_title("Mortgage Type", flagged));

    f.render_widget(Paragraph::new(options).block(block), area);
}

fn render_results(f: &mut Frame, area: ratatui::layout::Rect, session: &Session) {
    let block = Block::default().borders(Borders::ALL).title("Results");

    let text = match session.view() {
        View::Empty => {
            let hint = if session.has_errors() {
                "Please complete the highlighted fields."
            } else {
                "Complete the form and press Enter to see your repayments."
            };
            vec![
                Line::from(""),
                Line::from("Results shown here").style(
                    Style::default()
                        .fg(Color::DarkGray)
                        .add_modifier(Modifier::BOLD),
                ),
                Line::from(hint).style(Style::default().fg(Color::DarkGray)),
            ]
        }
        View::ShowingResult => {
            // view() only reports ShowingResult when a result is present.
            let Some(result) = session.result() else {
                return;
            };
            vec![
                Line::from(""),
                Line::from(vec![
                    Span::styled(
                        "Your monthly repayments: ",
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(
                        format_currency(result.monthly_payment),
                        Style::default().fg(Color::Green),
                    ),
                ]),
                Line::from(vec![
                    Span::styled(
                        "Total you'll repay over the term: ",
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(
                        format_currency(result.total_repayment),
                        Style::default().fg(Color::Green),
                    ),
                ]),
            ]
        }
    };

    f.render_widget(Paragraph::new(text).block(block), area);
}
