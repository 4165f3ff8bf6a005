use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::io;

use mortgage_calculator::calc::MortgageType;
use mortgage_calculator::logging;
use mortgage_calculator::session::Session;
use mortgage_calculator::ui::{ui, Focus};

fn main() -> Result<()> {
    logging::init();

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let session = Session::new();
    let res = run_app(&mut terminal, session);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{:?}", err)
    }

    Ok(())
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, mut session: Session) -> Result<()> {
    let mut focus = Focus::Amount;
    loop {
        terminal.draw(|f| ui(f, &session, focus))?;

        if let Event::Key(key) = event::read()? {
            if handle_key(&mut session, &mut focus, key) {
                return Ok(());
            }
        }
    }
}

/// Routes one key event into the session. Returns true when the user quits.
fn handle_key(session: &mut Session, focus: &mut Focus, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Esc => return true,
        KeyCode::Char('l') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            session.clear();
            *focus = Focus::Amount;
        }
        KeyCode::Enter => session.calculate(),
        KeyCode::Tab | KeyCode::Down => *focus = focus.next(),
        KeyCode::BackTab | KeyCode::Up => *focus = focus.prev(),
        KeyCode::Left | KeyCode::Right if *focus == Focus::MortgageType => {
            let next = match session.mortgage_type() {
                Some(MortgageType::Repayment) => MortgageType::InterestOnly,
                Some(MortgageType::InterestOnly) => MortgageType::Repayment,
                None => MortgageType::Repayment,
            };
            session.select_mortgage_type(next);
        }
        KeyCode::Char(c) => handle_char(session, *focus, c),
        KeyCode::Backspace => handle_backspace(session, *focus),
        _ => {}
    }
    false
}

/// Feeds a typed character into the focused field's normalizer. The session
/// stores (and the next draw displays) the normalized text, so stray
/// characters never stick.
fn handle_char(session: &mut Session, focus: Focus, c: char) {
    match focus {
        Focus::Amount => {
            let mut raw = session.amount().to_string();
            raw.push(c);
            session.amount_changed(&raw);
        }
        Focus::Term => {
            let mut raw = session.term().to_string();
            raw.push(c);
            session.term_changed(&raw);
        }
        Focus::Rate => {
            let mut raw = session.rate().to_string();
            raw.push(c);
            session.rate_changed(&raw);
        }
        Focus::MortgageType => match c {
            'r' | 'R' => session.select_mortgage_type(MortgageType::Repayment),
            'i' | 'I' => session.select_mortgage_type(MortgageType::InterestOnly),
            _ => {}
        },
    }
}

fn handle_backspace(session: &mut Session, focus: Focus) {
    match focus {
        Focus::Amount => {
            let mut raw = session.amount().to_string();
            raw.pop();
            session.amount_changed(&raw);
        }
        Focus::Term => {
            let mut raw = session.term().to_string();
            raw.pop();
            session.term_changed(&raw);
        }
        Focus::Rate => {
            let mut raw = session.rate().to_string();
            raw.pop();
            session.rate_changed(&raw);
        }
        Focus::MortgageType => {}
    }
}
