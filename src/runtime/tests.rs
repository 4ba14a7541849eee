use clap::Parser;
use clap::error::ErrorKind;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::event_loop::handle_key_event;
use super::startup::{Cli, apply_cli};
use crate::app::{App, View};
use crate::config::{Settings, StartView};
use crate::landing::{Focus, FormField, Section};
use crate::player::Playlist;
use crate::visualizer::Visualizer;

fn app(view: StartView) -> App {
    let mut settings = Settings::default();
    settings.ui.start_view = view;
    let mut app = App::with_parts(
        &settings,
        Playlist::default(),
        Visualizer::with_seed(&settings.visualizer, 1),
    );
    app.landing.set_viewport(100, 30);
    app
}

fn press(app: &mut App, code: KeyCode) -> bool {
    handle_key_event(KeyEvent::new(code, KeyModifiers::NONE), app)
}

fn type_str(app: &mut App, s: &str) {
    for c in s.chars() {
        assert!(!press(app, KeyCode::Char(c)));
    }
}

#[test]
fn cli_reads_flags() {
    assert_eq!(Cli::try_parse_from(["vinyl"]).unwrap(), Cli::default());
    let cli = Cli::try_parse_from(["vinyl", "--player", "--print-default-config"]).unwrap();
    assert_eq!(cli.start_view(), Some(StartView::Player));
    assert!(cli.print_default_config);
    let cli = Cli::try_parse_from(["vinyl", "--landing"]).unwrap();
    assert_eq!(cli.start_view(), Some(StartView::Landing));
}

#[test]
fn cli_rejects_conflicting_and_unknown_flags() {
    let err = Cli::try_parse_from(["vinyl", "--player", "--landing"]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ArgumentConflict);

    let err = Cli::try_parse_from(["vinyl", "--loud"]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnknownArgument);
    assert!(err.to_string().contains("--loud"));

    let err = Cli::try_parse_from(["vinyl", "--help"]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::DisplayHelp);
}

#[test]
fn cli_view_overrides_settings() {
    let mut settings = Settings::default();
    apply_cli(&mut settings, &Cli::default());
    assert_eq!(settings.ui.start_view, StartView::Landing);
    apply_cli(
        &mut settings,
        &Cli {
            player: true,
            ..Cli::default()
        },
    );
    assert_eq!(settings.ui.start_view, StartView::Player);
}

#[test]
fn q_and_ctrl_c_quit() {
    let mut app = app(StartView::Player);
    assert!(press(&mut app, KeyCode::Char('q')));
    let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
    assert!(handle_key_event(ctrl_c, &mut app));
}

#[test]
fn v_switches_views() {
    let mut app = app(StartView::Landing);
    press(&mut app, KeyCode::Char('v'));
    assert_eq!(app.view, View::Player);
    press(&mut app, KeyCode::Char('v'));
    assert_eq!(app.view, View::Landing);
}

#[test]
fn player_keys_drive_the_player() {
    let mut app = app(StartView::Player);
    press(&mut app, KeyCode::Char(' '));
    assert!(app.player.is_playing());
    press(&mut app, KeyCode::Char('p'));
    assert!(!app.player.is_playing());

    press(&mut app, KeyCode::Right);
    press(&mut app, KeyCode::Char('l'));
    assert_eq!(app.player.index(), 2);
    press(&mut app, KeyCode::Char('h'));
    assert_eq!(app.player.index(), 1);

    press(&mut app, KeyCode::Char('L'));
    assert_eq!(app.player.progress(), 5.0);
    press(&mut app, KeyCode::Char('H'));
    assert_eq!(app.player.progress(), 0.0);

    press(&mut app, KeyCode::Char('f'));
    assert!(app.player.is_liked());
}

#[test]
fn volume_keys_and_mute() {
    let mut app = app(StartView::Player);
    press(&mut app, KeyCode::Char('-'));
    assert_eq!(app.player.volume(), 75);
    press(&mut app, KeyCode::Char('+'));
    assert_eq!(app.player.volume(), 80);

    press(&mut app, KeyCode::Char('0'));
    assert!(app.player.is_muted());
    assert_eq!(app.player.effective_volume(), 0);
    press(&mut app, KeyCode::Char('M'));
    assert_eq!(app.player.effective_volume(), 80);
}

#[test]
fn playlist_keys_only_act_while_open() {
    let mut app = app(StartView::Player);
    press(&mut app, KeyCode::Char('j'));
    assert_eq!(app.playlist_cursor, 0);

    press(&mut app, KeyCode::Char('P'));
    press(&mut app, KeyCode::Char('j'));
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.player.index(), 2);
    assert!(app.player.is_playing());

    press(&mut app, KeyCode::Esc);
    assert!(!app.player.is_playlist_visible());
}

#[test]
fn landing_keys_scroll_and_navigate() {
    let mut app = app(StartView::Landing);
    press(&mut app, KeyCode::Char('j'));
    assert_eq!(app.landing.scroll(), 3.0);
    press(&mut app, KeyCode::Up);
    assert_eq!(app.landing.scroll(), 0.0);

    press(&mut app, KeyCode::Char('3'));
    assert_eq!(app.landing.scroll(), f64::from(Section::About.top()));
    press(&mut app, KeyCode::Char('G'));
    assert_eq!(app.landing.scroll(), app.landing.max_scroll());
    press(&mut app, KeyCode::Char('g'));
    assert_eq!(app.landing.scroll(), 0.0);
}

#[test]
fn focused_field_captures_typing() {
    let mut app = app(StartView::Landing);
    app.landing.set_focus(Focus::Field(FormField::FirstName));
    type_str(&mut app, "qv");
    assert_eq!(app.landing.form().value(FormField::FirstName), "qv");
    assert_eq!(app.view, View::Landing);

    press(&mut app, KeyCode::Backspace);
    assert_eq!(app.landing.form().value(FormField::FirstName), "q");

    press(&mut app, KeyCode::Enter);
    assert_eq!(app.landing.focus(), Some(Focus::Field(FormField::LastName)));

    press(&mut app, KeyCode::Esc);
    assert_eq!(app.landing.focus(), None);
    assert!(press(&mut app, KeyCode::Char('q')));
}

#[test]
fn tab_then_enter_on_view_demo_opens_player() {
    let mut app = app(StartView::Landing);
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.view, View::Player);
}
