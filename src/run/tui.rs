use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;

use crate::ui::app::{App, InputMode, PendingAction, Screen};
use crate::ui::commands;
use crate::ui::util::{scroll_down, scroll_to_bottom, scroll_to_top, scroll_up};

pub(crate) fn as_tui(mut app: App) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    tracing::info!(transactions = app.transactions().len(), "dashboard started");
    let result = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(ref e) = result {
        tracing::error!(error = ?e, "dashboard exited with error");
        eprintln!("Error: {e:?}");
    }

    result
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    while app.running {
        terminal.draw(|f| {
            // Tab, status and command bars plus borders and header
            let content_height = f.area().height.saturating_sub(6) as usize;
            app.visible_rows = content_height.max(1);
            crate::ui::render::render(f, app);
        })?;

        if let Event::Key(key) = event::read()? {
            handle_key(key, app)?;
        }
    }
    Ok(())
}

pub(crate) fn handle_key(key: KeyEvent, app: &mut App) -> Result<()> {
    if app.show_help {
        app.show_help = false;
        return Ok(());
    }
    match app.input_mode {
        InputMode::Normal => handle_normal_input(key, app),
        InputMode::Command => handle_command_input(key, app),
        InputMode::Confirm => {
            handle_confirm_input(key, app);
            Ok(())
        }
    }
}

// ── Input handlers ───────────────────────────────────────────

fn handle_normal_input(key: KeyEvent, app: &mut App) -> Result<()> {
    match key.code {
        KeyCode::Char(':') => {
            app.input_mode = InputMode::Command;
            app.command_input.clear();
        }
        KeyCode::Char('q') | KeyCode::Char('c')
            if key.modifiers.contains(KeyModifiers::CONTROL) =>
        {
            app.running = false;
        }
        KeyCode::Char('j') | KeyCode::Down => handle_move_down(app),
        KeyCode::Char('k') | KeyCode::Up => handle_move_up(app),
        KeyCode::Char('g') => handle_goto_top(app),
        KeyCode::Char('G') => handle_goto_bottom(app),
        KeyCode::Char('1') => app.screen = Screen::Dashboard,
        KeyCode::Char('2') => app.screen = Screen::Transactions,
        KeyCode::Char('3') => app.screen = Screen::Budgets,
        KeyCode::Tab => {
            let screens = Screen::all();
            let idx = screens.iter().position(|s| *s == app.screen).unwrap_or(0);
            app.screen = screens[(idx + 1) % screens.len()];
        }
        KeyCode::BackTab => {
            let screens = Screen::all();
            let idx = screens.iter().position(|s| *s == app.screen).unwrap_or(0);
            let prev = if idx == 0 { screens.len() - 1 } else { idx - 1 };
            app.screen = screens[prev];
        }
        KeyCode::Esc => app.status_message.clear(),
        KeyCode::Char('?') => app.show_help = true,
        KeyCode::Char('D') if app.screen == Screen::Transactions => {
            commands::handle_command("delete-txn", app)?;
        }
        _ => {}
    }
    Ok(())
}

fn handle_command_input(key: KeyEvent, app: &mut App) -> Result<()> {
    match key.code {
        KeyCode::Enter => {
            let input = std::mem::take(&mut app.command_input);
            app.input_mode = InputMode::Normal;
            commands::handle_command(&input, app)?;
        }
        KeyCode::Esc => {
            app.input_mode = InputMode::Normal;
            app.command_input.clear();
        }
        KeyCode::Backspace => {
            app.command_input.pop();
            if app.command_input.is_empty() {
                app.input_mode = InputMode::Normal;
            }
        }
        KeyCode::Char(c) => app.command_input.push(c),
        _ => {}
    }
    Ok(())
}

fn handle_confirm_input(key: KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') => {
            if let Some(PendingAction::DeleteTransaction { id, description }) =
                app.pending_action.take()
            {
                if app.delete_transaction(&id) {
                    app.set_status(format!("Deleted: {description}"));
                } else {
                    app.set_status(format!("Already gone: {description}"));
                }
            }
        }
        _ => {
            app.pending_action = None;
            app.set_status("Cancelled");
        }
    }
    app.input_mode = InputMode::Normal;
    app.confirm_message.clear();
}

// ── Navigation helpers ───────────────────────────────────────

fn handle_move_down(app: &mut App) {
    let page = app.visible_rows;
    match app.screen {
        Screen::Transactions => {
            let len = app.transactions().len();
            scroll_down(
                &mut app.transaction_index,
                &mut app.transaction_scroll,
                len,
                page,
            );
        }
        Screen::Budgets => {
            let len = app.summary.budgets.len();
            scroll_down(&mut app.budget_index, &mut app.budget_scroll, len, page);
        }
        Screen::Dashboard => {}
    }
}

fn handle_move_up(app: &mut App) {
    match app.screen {
        Screen::Transactions => {
            scroll_up(&mut app.transaction_index, &mut app.transaction_scroll);
        }
        Screen::Budgets => scroll_up(&mut app.budget_index, &mut app.budget_scroll),
        Screen::Dashboard => {}
    }
}

fn handle_goto_top(app: &mut App) {
    match app.screen {
        Screen::Transactions => {
            scroll_to_top(&mut app.transaction_index, &mut app.transaction_scroll);
        }
        Screen::Budgets => scroll_to_top(&mut app.budget_index, &mut app.budget_scroll),
        Screen::Dashboard => {}
    }
}

fn handle_goto_bottom(app: &mut App) {
    let page = app.visible_rows;
    match app.screen {
        Screen::Transactions => {
            let len = app.transactions().len();
            scroll_to_bottom(
                &mut app.transaction_index,
                &mut app.transaction_scroll,
                len,
                page,
            );
        }
        Screen::Budgets => {
            let len = app.summary.budgets.len();
            scroll_to_bottom(&mut app.budget_index, &mut app.budget_scroll, len, page);
        }
        Screen::Dashboard => {}
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use crate::models::{StaticBudgetTable, TransactionId};
    use crate::store::TransactionStore;
    use rust_decimal_macros::dec;

    fn seeded_app() -> App {
        App::new(
            TransactionStore::seeded(),
            Box::new(StaticBudgetTable::default()),
            "$",
        )
    }

    fn press(app: &mut App, code: KeyCode) {
        handle_key(KeyEvent::new(code, KeyModifiers::NONE), app).unwrap();
    }

    fn type_command(app: &mut App, text: &str) {
        press(app, KeyCode::Char(':'));
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
        press(app, KeyCode::Enter);
    }

    #[test]
    fn test_number_keys_switch_screens() {
        let mut app = seeded_app();
        press(&mut app, KeyCode::Char('3'));
        assert_eq!(app.screen, Screen::Budgets);
        press(&mut app, KeyCode::Char('2'));
        assert_eq!(app.screen, Screen::Transactions);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.screen, Screen::Budgets);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.screen, Screen::Dashboard);
        press(&mut app, KeyCode::BackTab);
        assert_eq!(app.screen, Screen::Budgets);
    }

    #[test]
    fn test_ctrl_q_quits() {
        let mut app = seeded_app();
        handle_key(
            KeyEvent::new(KeyCode::Char('q'), KeyModifiers::CONTROL),
            &mut app,
        )
        .unwrap();
        assert!(!app.running);
    }

    #[test]
    fn test_command_mode_adds_transaction() {
        let mut app = seeded_app();
        type_command(&mut app, "add expense 250 Rent");
        assert_eq!(app.input_mode, InputMode::Normal);
        assert!(app.command_input.is_empty());
        assert_eq!(app.transactions().len(), 6);
        assert_eq!(app.summary.totals.expenses, dec!(1400));
    }

    #[test]
    fn test_backspace_to_empty_leaves_command_mode() {
        let mut app = seeded_app();
        press(&mut app, KeyCode::Char(':'));
        press(&mut app, KeyCode::Char('q'));
        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.input_mode, InputMode::Normal);
        assert!(app.running);
    }

    #[test]
    fn test_delete_confirmed() {
        let mut app = seeded_app();
        press(&mut app, KeyCode::Char('2'));
        press(&mut app, KeyCode::Char('j'));
        press(&mut app, KeyCode::Char('D'));
        assert_eq!(app.input_mode, InputMode::Confirm);
        press(&mut app, KeyCode::Char('y'));

        assert_eq!(app.input_mode, InputMode::Normal);
        assert_eq!(app.transactions().len(), 4);
        assert!(app
            .transactions()
            .iter()
            .all(|t| t.id != TransactionId::new("2")));
        assert_eq!(app.summary.totals.expenses, dec!(350));
        assert_eq!(app.status_message, "Deleted: Monthly rent");
    }

    #[test]
    fn test_delete_cancelled() {
        let mut app = seeded_app();
        press(&mut app, KeyCode::Char('2'));
        press(&mut app, KeyCode::Char('D'));
        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.input_mode, InputMode::Normal);
        assert_eq!(app.transactions().len(), 5);
        assert!(app.pending_action.is_none());
        assert_eq!(app.status_message, "Cancelled");
    }

    #[test]
    fn test_delete_last_row_clamps_cursor() {
        let mut app = seeded_app();
        press(&mut app, KeyCode::Char('2'));
        press(&mut app, KeyCode::Char('G'));
        assert_eq!(app.transaction_index, 4);
        press(&mut app, KeyCode::Char('D'));
        press(&mut app, KeyCode::Char('y'));
        assert_eq!(app.transactions().len(), 4);
        assert_eq!(app.transaction_index, 3);
    }

    #[test]
    fn test_cursor_stays_in_bounds() {
        let mut app = seeded_app();
        press(&mut app, KeyCode::Char('2'));
        for _ in 0..10 {
            press(&mut app, KeyCode::Char('j'));
        }
        assert_eq!(app.transaction_index, 4);
        press(&mut app, KeyCode::Char('g'));
        assert_eq!(app.transaction_index, 0);
        press(&mut app, KeyCode::Char('k'));
        assert_eq!(app.transaction_index, 0);
    }

    #[test]
    fn test_any_key_closes_help() {
        let mut app = seeded_app();
        press(&mut app, KeyCode::Char('?'));
        assert!(app.show_help);
        press(&mut app, KeyCode::Char('3'));
        assert!(!app.show_help);
        assert_eq!(app.screen, Screen::Dashboard);
    }
}
