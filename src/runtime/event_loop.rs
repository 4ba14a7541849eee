use std::io::Stdout;
use std::sync::mpsc::Receiver;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::{debug, info};

use crate::app::{App, View};
use crate::error::VinylResult;
use crate::landing::NavItem;
use crate::timer::{Effects, TimerDemand, TimerEvent};
use crate::ui;

/// Input wait while any timer is running.
const FRAME_POLL: Duration = Duration::from_millis(16);
/// Input wait when nothing is animating.
const IDLE_POLL: Duration = Duration::from_millis(250);

/// Main terminal event loop: draws, handles input, applies timer events and
/// keeps the running timers in line with app state. Returns `Ok(())` when
/// shutdown is requested.
pub fn run(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
    effects: &mut Effects,
    timer_rx: &Receiver<TimerEvent>,
) -> VinylResult<()> {
    effects.sync(app.reconcile())?;

    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        let timeout = if effects.running() == TimerDemand::default() {
            IDLE_POLL
        } else {
            FRAME_POLL
        };
        if event::poll(timeout)? {
            // Resize needs no handling: the next draw lays out against the new size.
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press && handle_key_event(key, app) {
                    break;
                }
            }
        }

        while let Ok(ev) = timer_rx.try_recv() {
            app.on_timer(ev);
        }
        effects.sync(app.reconcile())?;
    }

    info!("quit requested");
    effects.stop_all();
    Ok(())
}

/// Apply one key press. Returns true when the app should quit.
pub fn handle_key_event(key: KeyEvent, app: &mut App) -> bool {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return true;
    }
    match app.view {
        View::Landing => handle_landing_key(key, app),
        View::Player => handle_player_key(key, app),
    }
}

fn handle_landing_key(key: KeyEvent, app: &mut App) -> bool {
    let landing = &mut app.landing;

    if landing.editing_field().is_some() {
        match key.code {
            KeyCode::Char(c) => {
                landing.type_char(c);
            }
            KeyCode::Backspace => {
                landing.backspace();
            }
            KeyCode::Enter => app.activate_landing(),
            KeyCode::Tab => landing.focus_next(),
            KeyCode::BackTab => landing.focus_prev(),
            KeyCode::Esc => landing.clear_focus(),
            _ => {}
        }
        return false;
    }

    match key.code {
        KeyCode::Char('q') => return true,
        KeyCode::Char('v') => app.toggle_view(),
        KeyCode::Char('j') | KeyCode::Down => landing.scroll_step(1),
        KeyCode::Char('k') | KeyCode::Up => landing.scroll_step(-1),
        KeyCode::PageDown | KeyCode::Char(' ') => landing.page_down(),
        KeyCode::PageUp => landing.page_up(),
        KeyCode::Char('g') | KeyCode::Home => landing.scroll_to_top(),
        KeyCode::Char('G') | KeyCode::End => landing.scroll_to_bottom(),
        KeyCode::Char(c @ '1'..='4') => {
            let n = c as usize - '1' as usize;
            let item = NavItem::ALL[n];
            debug!(anchor = ?item.section().anchor(), "nav link followed");
            landing.navigate(item);
        }
        KeyCode::Char('m') => landing.toggle_menu(),
        KeyCode::Tab => landing.focus_next(),
        KeyCode::BackTab => landing.focus_prev(),
        KeyCode::Enter => app.activate_landing(),
        KeyCode::Esc => {
            if landing.is_menu_open() {
                landing.toggle_menu();
            } else {
                landing.clear_focus();
            }
        }
        _ => {}
    }
    false
}

fn handle_player_key(key: KeyEvent, app: &mut App) -> bool {
    let playlist_open = app.player.is_playlist_visible();
    match key.code {
        KeyCode::Char('q') => return true,
        KeyCode::Char('v') => app.toggle_view(),
        KeyCode::Char(' ') | KeyCode::Char('p') => app.toggle_play(),
        KeyCode::Char('l') | KeyCode::Right => app.next_track(),
        KeyCode::Char('h') | KeyCode::Left => app.previous_track(),
        KeyCode::Char('L') => app.seek_forward(),
        KeyCode::Char('H') => app.seek_back(),
        KeyCode::Char('+') | KeyCode::Char('=') => app.volume_up(),
        KeyCode::Char('-') => app.volume_down(),
        KeyCode::Char('0') => app.player.set_volume(0),
        KeyCode::Char('M') => app.player.toggle_mute(),
        KeyCode::Char('f') => app.player.toggle_like(),
        KeyCode::Char('P') => app.toggle_playlist(),
        KeyCode::Char('j') | KeyCode::Down if playlist_open => app.cursor_down(),
        KeyCode::Char('k') | KeyCode::Up if playlist_open => app.cursor_up(),
        KeyCode::Enter if playlist_open => app.select_cursor(),
        KeyCode::Esc if playlist_open => app.toggle_playlist(),
        _ => {}
    }
    false
}
