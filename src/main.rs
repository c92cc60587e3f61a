mod app;
mod config;
mod logging;
mod store;
mod ui;

use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::handler;
use crate::app::state::AppState;
use crate::store::manager::StoreManager;
use anyhow::Result;
use crossterm::{
    event::EventStream,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::prelude::*;
use std::io;
use std::time::Duration;
use tokio::sync::mpsc;

#[tokio::main]
async fn main() -> Result<()> {
    // Install panic hook to restore terminal
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        original_hook(info);
    }));

    // Load config
    let loaded = config::load_config()?;
    let cfg = loaded.config;
    logging::init(&cfg.logging)?;
    if loaded.first_run {
        if let Err(e) = config::save_config(&cfg) {
            tracing::warn!("could not write default config: {:#}", e);
        }
    }
    let repo = store::open_repository(&cfg)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    enter_screen(&mut stdout)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let (event_tx, event_rx) = mpsc::unbounded_channel::<AppEvent>();
    let store = StoreManager::new(repo, event_tx.clone());
    let result = run_app(&mut terminal, cfg, store, event_tx, event_rx).await;

    // Restore terminal
    restore_terminal()?;

    if let Err(e) = result {
        tracing::error!(error = %e, "exiting after error");
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    Ok(())
}

fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    leave_screen(&mut io::stdout())?;
    Ok(())
}

fn enter_screen<W: io::Write>(out: &mut W) -> io::Result<()> {
    execute!(out, EnterAlternateScreen)
}

fn leave_screen<W: io::Write>(out: &mut W) -> io::Result<()> {
    execute!(out, LeaveAlternateScreen)
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    cfg: config::AppConfig,
    store: StoreManager,
    event_tx: mpsc::UnboundedSender<AppEvent>,
    mut event_rx: mpsc::UnboundedReceiver<AppEvent>,
) -> Result<()> {
    let tick_every = Duration::from_millis(cfg.ui.tick_millis.max(10));
    let mut state = AppState::new(cfg);

    // Spawn terminal input task
    let term_tx = event_tx.clone();
    tokio::spawn(async move {
        let mut reader = EventStream::new();
        loop {
            match reader.next().await {
                Some(Ok(event)) => {
                    if term_tx.send(AppEvent::Terminal(event)).is_err() {
                        break;
                    }
                }
                Some(Err(_)) => break,
                None => break,
            }
        }
    });

    // Spawn tick task
    let tick_tx = event_tx;
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(tick_every);
        loop {
            interval.tick().await;
            if tick_tx.send(AppEvent::Tick).is_err() {
                break;
            }
        }
    });

    let initial = handler::mount(&mut state);
    dispatch(&mut state, &store, initial);

    // Initial render
    terminal.draw(|f| ui::render(f, &state))?;

    // Main event loop
    loop {
        let event = event_rx.recv().await;
        let Some(event) = event else { break };

        let actions = handler::handle_event(&mut state, event);
        dispatch(&mut state, &store, actions);

        if state.should_quit {
            break;
        }

        // Conditional render (only if dirty)
        if state.dirty {
            terminal.draw(|f| ui::render(f, &state))?;
            state.dirty = false;
        }
    }

    Ok(())
}

fn dispatch(state: &mut AppState, store: &StoreManager, actions: Vec<Action>) {
    for action in actions {
        tracing::debug!(?action, "dispatch");
        match action {
            Action::LoadEmployees => {
                store.load_all();
            }
            Action::UpdateEmployee(employee) => {
                store.update(employee);
            }
            Action::DeleteEmployee { id } => {
                store.delete(id);
            }
            Action::Quit => {
                state.should_quit = true;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_screen_setup_leaves_mouse_alone() {
        let mut out = Vec::new();
        enter_screen(&mut out).unwrap();
        leave_screen(&mut out).unwrap();
        let written = String::from_utf8(out).unwrap();
        assert!(written.contains("\x1b[?1049h"));
        assert!(written.contains("\x1b[?1049l"));
        assert!(!written.contains("?1000h"));
    }
}
