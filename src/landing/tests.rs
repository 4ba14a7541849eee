use super::*;
use crate::config::LandingSettings;
use crate::motion::Reveal;
use proptest::prelude::*;
use std::time::Duration;

const FRAME: Duration = Duration::from_millis(16);

fn landing(width: u16, height: u16) -> Landing {
    let mut l = Landing::new(&LandingSettings::default());
    l.set_viewport(width, height);
    l
}

fn settle(l: &mut Landing) {
    for _ in 0..1000 {
        l.update(FRAME);
    }
}

#[test]
fn sections_stack_without_gaps() {
    let mut top = 0;
    for s in Section::ALL {
        assert_eq!(s.top(), top);
        top += s.height();
    }
    assert_eq!(page_height(), top);
}

#[test]
fn navigation_jumps_to_anchored_sections() {
    let mut l = landing(120, 30);
    l.navigate(NavItem::About);
    assert_eq!(l.scroll(), Section::About.top() as f64);
    assert_eq!(NavItem::About.section().anchor(), Some("about"));

    l.navigate(NavItem::Home);
    assert_eq!(l.scroll(), 0.0);
}

#[test]
fn scroll_is_clamped_to_page() {
    let mut l = landing(120, 30);
    l.scroll_by(-10.0);
    assert_eq!(l.scroll(), 0.0);
    l.scroll_by(10_000.0);
    assert_eq!(l.scroll(), l.max_scroll());
    assert_eq!(l.page_progress(), 1.0);
    l.scroll_to_top();
    assert_eq!(l.page_progress(), 0.0);
}

#[test]
fn page_taller_viewport_never_scrolls() {
    let mut l = landing(120, page_height() + 10);
    l.scroll_by(5.0);
    assert_eq!(l.scroll(), 0.0);
    assert_eq!(l.page_progress(), 0.0);
}

#[test]
fn shrinking_viewport_reclamps_scroll() {
    let mut l = landing(120, 10);
    l.scroll_to_bottom();
    l.set_viewport(120, 40);
    assert_eq!(l.scroll(), l.max_scroll());
}

#[test]
fn hero_params_follow_smoothed_progress() {
    let mut l = landing(120, 30);
    let at_rest = l.hero();
    assert_eq!(at_rest.scale, 1.0);
    assert_eq!(at_rest.text_offset, 0.0);

    l.scroll_to_bottom();
    // Nothing moves until the spring is stepped.
    assert_eq!(l.hero().text_offset, 0.0);
    l.update(FRAME);
    assert!(l.smooth_progress() > 0.0 && l.smooth_progress() < 1.0);

    settle(&mut l);
    let hero = l.hero();
    assert_eq!(l.smooth_progress(), 1.0);
    assert_eq!(hero.scale, 0.9);
    assert_eq!(hero.text_offset, Section::Hero.height() as f64);
    assert!((hero.background_offset - 0.2 * Section::Hero.height() as f64).abs() < 1e-9);
}

#[test]
fn parallax_fades_in_then_out() {
    let mut l = landing(120, 20);
    let top = Section::Parallax.top() as f64;
    let h = Section::Parallax.height() as f64;

    // Band just below the viewport.
    l.scroll_by(top - 20.0);
    let entering = l.parallax();
    assert_eq!(entering.progress, 0.0);
    assert_eq!(entering.opacity, 0.0);

    // Band centred.
    l.scroll_to_top();
    l.scroll_by(top - (20.0 - h) / 2.0);
    let centred = l.parallax();
    assert!((centred.progress - 0.5).abs() < 1e-9);
    assert!((centred.opacity - 1.0).abs() < 1e-9);
    assert!(centred.y1 < 0.0 && centred.y2 > 0.0);
    assert!((centred.y1 - (-50.0 / 16.0)).abs() < 1e-9);

    // Band scrolled past the top.
    l.scroll_to(Section::About);
    let left = l.parallax();
    assert_eq!(left.progress, 1.0);
    assert_eq!(left.opacity, 0.0);
}

#[test]
fn feature_cards_reveal_in_order_and_reset() {
    let mut l = landing(120, 30);
    l.scroll_to(Section::Features);
    assert_eq!(l.card_style(0).opacity, 0.0);

    for _ in 0..20 {
        l.update(FRAME);
    }
    let first = l.card_style(0).opacity;
    let last = l.card_style(3).opacity;
    assert!(first > 0.0);
    assert!(first > last);

    settle(&mut l);
    assert_eq!(l.card_style(3).opacity, 1.0);
    assert_eq!(l.card_style(3).offset_rows, 0.0);

    l.scroll_to_bottom();
    l.update(FRAME);
    assert_eq!(l.card_style(0).opacity, 0.0);
}

#[test]
fn animations_settle_and_restart_on_scroll() {
    let mut l = landing(120, 30);
    assert!(l.is_animating());
    settle(&mut l);
    assert!(!l.is_animating());

    l.scroll_to(Section::Contact);
    assert!(l.is_animating());
    settle(&mut l);
    assert!(!l.is_animating());
}

#[test]
fn reveal_of_hidden_section_is_invisible() {
    let l = landing(120, 30);
    let style = l.reveal(Section::Footer, Reveal::new(0.0, 0.5));
    assert_eq!(style.opacity, 0.0);
    assert_eq!(style.offset_rows, 20.0 / 16.0);
}

#[test]
fn menu_only_opens_on_narrow_terminals() {
    let mut wide = landing(120, 30);
    wide.toggle_menu();
    assert!(!wide.is_menu_open());

    let mut narrow = landing(60, 30);
    assert!(narrow.is_compact());
    narrow.toggle_menu();
    assert!(narrow.is_menu_open());
    narrow.navigate(NavItem::Contact);
    assert!(!narrow.is_menu_open());
    assert_eq!(narrow.scroll(), Section::Contact.top() as f64);
}

#[test]
fn focus_cycles_and_scrolls_into_view() {
    let mut l = landing(120, 30);
    l.focus_next();
    assert_eq!(l.focus(), Some(Focus::Button(Button::GetStarted)));
    l.focus_prev();
    assert_eq!(l.focus(), Some(Focus::Button(Button::GetStartedNow)));
    assert!(l.section_in_view(Section::Cta));

    l.set_focus(Focus::Card(2));
    assert_eq!(l.card_lift(2), 1);
    assert_eq!(l.card_lift(1), 0);
}

#[test]
fn typing_goes_to_focused_field_only() {
    let mut l = landing(120, 30);
    assert!(!l.type_char('x'));

    l.set_focus(Focus::Field(FormField::Email));
    assert!(l.type_char('a'));
    assert!(l.type_char('@'));
    assert!(l.backspace());
    assert_eq!(l.form().value(FormField::Email), "a");
    assert_eq!(l.form().value(FormField::FirstName), "");
}

#[test]
fn get_started_moves_to_the_form_and_view_demo_opens_player() {
    let mut l = landing(120, 30);
    l.set_focus(Focus::Button(Button::GetStarted));
    assert_eq!(l.activate(), LandingAction::None);
    assert_eq!(l.focus(), Some(Focus::Field(FormField::FirstName)));
    assert_eq!(l.scroll(), Section::Contact.top() as f64);

    l.set_focus(Focus::Button(Button::ViewDemo));
    assert_eq!(l.activate(), LandingAction::OpenPlayer);
}

#[test]
fn enter_in_message_adds_newline_elsewhere_advances() {
    let mut l = landing(120, 30);
    l.set_focus(Focus::Field(FormField::FirstName));
    l.activate();
    assert_eq!(l.focus(), Some(Focus::Field(FormField::LastName)));

    l.set_focus(Focus::Field(FormField::Message));
    l.type_char('h');
    l.activate();
    l.type_char('i');
    assert_eq!(l.form().value(FormField::Message), "h\ni");
}

#[test]
fn contact_form_validates_locally() {
    let mut form = ContactForm::default();
    assert_eq!(form.submit(), Err(FormError::Missing("First Name")));
    assert_eq!(
        form.status(),
        Some(&FormStatus::Rejected(FormError::Missing("First Name")))
    );

    for c in "Ada".chars() {
        form.input(FormField::FirstName, c);
    }
    assert_eq!(form.status(), None);
    for c in "Lovelace".chars() {
        form.input(FormField::LastName, c);
    }
    for c in "ada@engine".chars() {
        form.input(FormField::Email, c);
    }
    for c in "Hello".chars() {
        form.input(FormField::Message, c);
    }
    assert_eq!(form.validate(), Err(FormError::InvalidEmail));

    for c in ".org".chars() {
        form.input(FormField::Email, c);
    }
    assert_eq!(form.submit(), Ok(()));
    assert_eq!(form.status(), Some(&FormStatus::Sent));
    assert_eq!(form.value(FormField::Email), "");
}

#[test]
fn send_message_button_reports_form_status() {
    let mut l = landing(120, 30);
    l.set_focus(Focus::Button(Button::SendMessage));
    assert_eq!(l.activate(), LandingAction::None);
    assert_eq!(
        l.form().status(),
        Some(&FormStatus::Rejected(FormError::Missing("First Name")))
    );

    for (field, text) in [
        (FormField::FirstName, "Ada"),
        (FormField::LastName, "Lovelace"),
        (FormField::Email, "ada@engine.org"),
        (FormField::Message, "Hi"),
    ] {
        l.set_focus(Focus::Field(field));
        for c in text.chars() {
            assert!(l.type_char(c));
        }
    }
    l.set_focus(Focus::Button(Button::SendMessage));
    l.activate();
    assert_eq!(l.form().status(), Some(&FormStatus::Sent));
    assert_eq!(l.form().value(FormField::FirstName), "");
}

#[test]
fn copyright_year_tracks_the_calendar() {
    let l = landing(120, 30);
    let utc = time::OffsetDateTime::now_utc().year();
    // Local time is at most a day away from UTC.
    assert!((utc - 1..=utc + 1).contains(&l.year()));
}

#[test]
fn single_line_fields_drop_newlines() {
    let mut form = ContactForm::default();
    form.input(FormField::FirstName, '\n');
    form.input(FormField::FirstName, '\t');
    assert_eq!(form.value(FormField::FirstName), "");
    assert_eq!(FormField::Email.placeholder(), "john@example.com");
}

proptest! {
    #[test]
    fn scroll_target_stays_in_bounds(
        height in 1u16..250,
        moves in proptest::collection::vec(-500.0f64..500.0, 0..40),
    ) {
        let mut l = landing(100, height);
        for delta in moves {
            l.scroll_by(delta);
            prop_assert!(l.scroll() >= 0.0 && l.scroll() <= l.max_scroll());
            prop_assert!((0.0..=1.0).contains(&l.page_progress()));
        }
    }
}
