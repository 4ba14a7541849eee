use std::time::Duration;

use time::OffsetDateTime;
use tracing::debug;

use super::form::{ContactForm, FormField};
use crate::config::LandingSettings;
use crate::motion::{Reveal, RevealClock, Spring, in_view, interpolate};

/// Page sections, top to bottom.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Section {
    Hero,
    Features,
    Parallax,
    About,
    Stats,
    Contact,
    Cta,
    Footer,
}

impl Section {
    pub const ALL: [Section; 8] = [
        Section::Hero,
        Section::Features,
        Section::Parallax,
        Section::About,
        Section::Stats,
        Section::Contact,
        Section::Cta,
        Section::Footer,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    /// Height in rows.
    pub fn height(self) -> u16 {
        match self {
            Section::Hero => 20,
            Section::Features => 19,
            Section::Parallax => 12,
            Section::About => 19,
            Section::Stats => 7,
            Section::Contact => 25,
            Section::Cta => 9,
            Section::Footer => 12,
        }
    }

    /// Row of the section's first line within the page.
    pub fn top(self) -> u16 {
        Section::ALL[..self.index()].iter().map(|s| s.height()).sum()
    }

    /// `#anchor` the navigation links jump to.
    pub fn anchor(self) -> Option<&'static str> {
        match self {
            Section::Hero => Some("home"),
            Section::Features => Some("features"),
            Section::About => Some("about"),
            Section::Contact => Some("contact"),
            _ => None,
        }
    }

    /// Seconds until the slowest appear transition in the section ends.
    fn reveal_span(self) -> f64 {
        let slowest = match self {
            Section::Hero => Reveal::new(1.2, 0.5),
            Section::Features => Reveal::new(0.3, 0.5),
            Section::Parallax => Reveal::new(0.0, 0.0),
            Section::About => Reveal::new(0.4, 0.5),
            Section::Stats => Reveal::new(0.3, 0.5),
            Section::Contact => Reveal::new(0.3, 0.6),
            Section::Cta => Reveal::new(0.2, 0.5),
            Section::Footer => Reveal::new(0.0, 0.5),
        };
        slowest.end()
    }
}

/// Total page height in rows.
pub fn page_height() -> u16 {
    Section::ALL.iter().map(|s| s.height()).sum()
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum NavItem {
    Home,
    Features,
    About,
    Contact,
}

impl NavItem {
    pub const ALL: [NavItem; 4] = [NavItem::Home, NavItem::Features, NavItem::About, NavItem::Contact];

    pub fn label(self) -> &'static str {
        match self {
            NavItem::Home => "Home",
            NavItem::Features => "Features",
            NavItem::About => "About",
            NavItem::Contact => "Contact",
        }
    }

    pub fn section(self) -> Section {
        match self {
            NavItem::Home => Section::Hero,
            NavItem::Features => Section::Features,
            NavItem::About => Section::About,
            NavItem::Contact => Section::Contact,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Button {
    GetStarted,
    ViewDemo,
    LearnMore,
    SendMessage,
    GetStartedNow,
}

impl Button {
    pub fn label(self) -> &'static str {
        match self {
            Button::GetStarted => "Get Started →",
            Button::ViewDemo => "View Demo",
            Button::LearnMore => "Learn More About Us",
            Button::SendMessage => "Send Message",
            Button::GetStartedNow => "Get Started Now →",
        }
    }
}

/// Keyboard focus, standing in for pointer hover.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Focus {
    Button(Button),
    Card(usize),
    Field(FormField),
}

impl Focus {
    pub const ORDER: [Focus; 13] = [
        Focus::Button(Button::GetStarted),
        Focus::Button(Button::ViewDemo),
        Focus::Card(0),
        Focus::Card(1),
        Focus::Card(2),
        Focus::Card(3),
        Focus::Button(Button::LearnMore),
        Focus::Field(FormField::FirstName),
        Focus::Field(FormField::LastName),
        Focus::Field(FormField::Email),
        Focus::Field(FormField::Message),
        Focus::Button(Button::SendMessage),
        Focus::Button(Button::GetStartedNow),
    ];

    pub fn section(self) -> Section {
        match self {
            Focus::Button(Button::GetStarted | Button::ViewDemo) => Section::Hero,
            Focus::Card(_) => Section::Features,
            Focus::Button(Button::LearnMore) => Section::About,
            Focus::Field(_) | Focus::Button(Button::SendMessage) => Section::Contact,
            Focus::Button(Button::GetStartedNow) => Section::Cta,
        }
    }

    fn position(self) -> usize {
        Focus::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }
}

/// What activating the focused element asks the rest of the app to do.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum LandingAction {
    None,
    OpenPlayer,
}

/// Scroll-linked parameters of the hero section.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct HeroParams {
    /// Rows the background decoration has drifted down.
    pub background_offset: f64,
    /// Rows the headline has drifted down.
    pub text_offset: f64,
    /// Scale of the preview card, `1.0 -> 0.9`.
    pub scale: f64,
}

/// Scroll-linked parameters of the parallax band. Offsets are in rows.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ParallaxParams {
    pub progress: f64,
    pub y1: f64,
    pub y2: f64,
    pub y3: f64,
    pub y4: f64,
    pub opacity: f64,
}

/// Resolved appear transition of one element.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ElementStyle {
    pub opacity: f64,
    pub offset_rows: f64,
}

const INTRO_SPAN: f64 = 1.0;
const CARD_LIFT_PX: f64 = 5.0;

/// Landing page state: scroll position, smoothing, reveal clocks, menu,
/// focus and the contact form.
#[derive(Debug, Clone)]
pub struct Landing {
    tuning: LandingSettings,
    scroll: f64,
    width: u16,
    height: u16,
    progress: Spring,
    reveals: [RevealClock; 8],
    intro_clock: f64,
    menu_open: bool,
    focus: Option<Focus>,
    form: ContactForm,
    year: i32,
}

impl Landing {
    pub fn new(settings: &LandingSettings) -> Self {
        Self {
            tuning: settings.clone(),
            scroll: 0.0,
            width: 0,
            height: 0,
            progress: Spring::new(settings.spring_stiffness, settings.spring_damping, 0.0),
            reveals: [RevealClock::default(); 8],
            intro_clock: 0.0,
            menu_open: false,
            focus: None,
            form: ContactForm::default(),
            year: local_year(),
        }
    }

    /// Year shown in the footer copyright, fixed at startup.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Record the area the page body is drawn into.
    pub fn set_viewport(&mut self, width: u16, height: u16) {
        if (width, height) == (self.width, self.height) {
            return;
        }
        self.width = width;
        self.height = height;
        if !self.is_compact() {
            self.menu_open = false;
        }
        self.set_scroll(self.scroll);
    }

    pub fn viewport_height(&self) -> u16 {
        self.height
    }

    /// Narrow terminals get the collapsed navigation menu.
    pub fn is_compact(&self) -> bool {
        self.width < self.tuning.compact_width
    }

    pub fn max_scroll(&self) -> f64 {
        page_height().saturating_sub(self.height) as f64
    }

    pub fn scroll(&self) -> f64 {
        self.scroll
    }

    /// First page row on screen.
    pub fn scroll_row(&self) -> u16 {
        self.scroll.round() as u16
    }

    fn set_scroll(&mut self, rows: f64) {
        let max = self.max_scroll();
        self.scroll = if rows.is_nan() { 0.0 } else { rows.clamp(0.0, max) };
        self.progress.set_target(self.page_progress());
    }

    pub fn scroll_by(&mut self, delta: f64) {
        self.set_scroll(self.scroll + delta);
    }

    pub fn scroll_step(&mut self, steps: i32) {
        self.scroll_by(steps as f64 * self.tuning.scroll_step as f64);
    }

    pub fn page_down(&mut self) {
        self.scroll_by(self.height.saturating_sub(2).max(1) as f64);
    }

    pub fn page_up(&mut self) {
        self.scroll_by(-(self.height.saturating_sub(2).max(1) as f64));
    }

    pub fn scroll_to_top(&mut self) {
        self.set_scroll(0.0);
    }

    pub fn scroll_to_bottom(&mut self) {
        self.set_scroll(self.max_scroll());
    }

    pub fn scroll_to(&mut self, section: Section) {
        self.set_scroll(section.top() as f64);
        debug!(?section, scroll = self.scroll, "scrolled to section");
    }

    /// Scroll progress through the whole page, `0..=1`.
    pub fn page_progress(&self) -> f64 {
        let max = self.max_scroll();
        if max <= 0.0 { 0.0 } else { self.scroll / max }
    }

    /// Spring-smoothed page progress.
    pub fn smooth_progress(&self) -> f64 {
        self.progress.value()
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    /// Open/close the collapsed menu; a no-op on wide terminals.
    pub fn toggle_menu(&mut self) {
        self.menu_open = self.is_compact() && !self.menu_open;
    }

    /// Follow a navigation link. Closes the menu.
    pub fn navigate(&mut self, item: NavItem) {
        self.scroll_to(item.section());
        self.menu_open = false;
    }

    pub fn focus(&self) -> Option<Focus> {
        self.focus
    }

    pub fn clear_focus(&mut self) {
        self.focus = None;
    }

    pub fn set_focus(&mut self, focus: Focus) {
        self.focus = Some(focus);
        self.ensure_visible(focus.section());
    }

    pub fn focus_next(&mut self) {
        let next = match self.focus {
            Some(f) => Focus::ORDER[(f.position() + 1) % Focus::ORDER.len()],
            None => Focus::ORDER[0],
        };
        self.set_focus(next);
    }

    pub fn focus_prev(&mut self) {
        let len = Focus::ORDER.len();
        let prev = match self.focus {
            Some(f) => Focus::ORDER[(f.position() + len - 1) % len],
            None => Focus::ORDER[len - 1],
        };
        self.set_focus(prev);
    }

    /// The field being typed into, if a form field has focus.
    pub fn editing_field(&self) -> Option<FormField> {
        match self.focus {
            Some(Focus::Field(f)) => Some(f),
            _ => None,
        }
    }

    fn ensure_visible(&mut self, section: Section) {
        let top = section.top() as f64;
        let bottom = top + section.height().min(self.height) as f64;
        let view_bottom = self.scroll + self.height as f64;
        if top < self.scroll || bottom > view_bottom {
            self.scroll_to(section);
        }
    }

    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    /// Type into the focused form field. Returns false when no field has focus.
    pub fn type_char(&mut self, c: char) -> bool {
        match self.editing_field() {
            Some(field) => {
                self.form.input(field, c);
                true
            }
            None => false,
        }
    }

    pub fn backspace(&mut self) -> bool {
        match self.editing_field() {
            Some(field) => {
                self.form.backspace(field);
                true
            }
            None => false,
        }
    }

    /// Press the focused element.
    pub fn activate(&mut self) -> LandingAction {
        match self.focus {
            Some(Focus::Button(Button::GetStarted | Button::GetStartedNow)) => {
                self.set_focus(Focus::Field(FormField::FirstName));
                self.scroll_to(Section::Contact);
            }
            Some(Focus::Button(Button::ViewDemo)) => return LandingAction::OpenPlayer,
            Some(Focus::Button(Button::LearnMore)) => self.scroll_to(Section::Stats),
            Some(Focus::Button(Button::SendMessage)) => {
                if let Err(e) = self.form.submit() {
                    debug!(error = %e, "contact form rejected");
                }
            }
            Some(Focus::Field(FormField::Message)) => {
                self.form.input(FormField::Message, '\n');
            }
            Some(Focus::Field(_)) => self.focus_next(),
            Some(Focus::Card(_)) | None => {}
        }
        LandingAction::None
    }

    /// Whether `section` currently passes the in-view threshold.
    pub fn section_in_view(&self, section: Section) -> bool {
        in_view(
            section.top() as f64,
            section.height() as f64,
            self.scroll,
            self.height as f64,
            self.tuning.reveal_amount,
        )
    }

    /// Advance the spring, the intro clock and every section's reveal clock.
    pub fn update(&mut self, dt: Duration) {
        self.progress.set_target(self.page_progress());
        self.progress.step(dt);
        self.intro_clock = (self.intro_clock + dt.as_secs_f64()).min(INTRO_SPAN);
        for section in Section::ALL {
            let visible = self.section_in_view(section);
            self.reveals[section.index()].update(visible, dt);
        }
    }

    /// Whether `update` still has visible work to do.
    pub fn is_animating(&self) -> bool {
        if !self.progress.is_settled() || self.intro_clock < INTRO_SPAN {
            return true;
        }
        Section::ALL.iter().any(|&section| {
            let clock = &self.reveals[section.index()];
            let visible = self.section_in_view(section);
            visible != clock.is_in_view() || (visible && clock.elapsed() < section.reveal_span())
        })
    }

    pub fn hero(&self) -> HeroParams {
        let s = self.smooth_progress();
        let h = Section::Hero.height() as f64;
        HeroParams {
            background_offset: interpolate(s, &[0.0, 1.0], &[0.0, 0.2]) * h,
            text_offset: interpolate(s, &[0.0, 1.0], &[0.0, 1.0]) * h,
            scale: interpolate(s, &[0.0, 0.2], &[1.0, 0.9]),
        }
    }

    /// Progress of the parallax band from entering at the bottom (0) to
    /// leaving at the top (1).
    pub fn parallax(&self) -> ParallaxParams {
        let section = Section::Parallax;
        let top_on_screen = section.top() as f64 - self.scroll;
        let vh = self.height as f64;
        let span = vh + section.height() as f64;
        let progress = if span <= 0.0 {
            0.0
        } else {
            ((vh - top_on_screen) / span).clamp(0.0, 1.0)
        };
        let rows = |px: f64| px / self.tuning.pixels_per_row;
        ParallaxParams {
            progress,
            y1: rows(interpolate(progress, &[0.0, 1.0], &[0.0, -100.0])),
            y2: rows(interpolate(progress, &[0.0, 1.0], &[0.0, 100.0])),
            y3: rows(interpolate(progress, &[0.0, 1.0], &[0.0, -50.0])),
            y4: rows(interpolate(progress, &[0.0, 1.0], &[0.0, 50.0])),
            opacity: interpolate(progress, &[0.0, 0.5, 1.0], &[0.0, 1.0, 0.0]),
        }
    }

    /// Appear transition of an element of `section`.
    pub fn reveal(&self, section: Section, reveal: Reveal) -> ElementStyle {
        let clock = self.reveals[section.index()].elapsed();
        let visible = self.reveals[section.index()].is_in_view();
        let opacity = if visible { reveal.opacity(clock) } else { 0.0 };
        let offset_px = if visible { reveal.offset(clock) } else { reveal.distance };
        ElementStyle {
            opacity,
            offset_rows: offset_px / self.tuning.pixels_per_row,
        }
    }

    /// Feature card `index`: fades in `0.1s` after the previous one.
    pub fn card_style(&self, index: usize) -> ElementStyle {
        self.reveal(Section::Features, Reveal::new(index as f64 * 0.1, 0.5))
    }

    /// Rows a focused feature card is lifted by.
    pub fn card_lift(&self, index: usize) -> u16 {
        if self.focus == Some(Focus::Card(index)) {
            (CARD_LIFT_PX / self.tuning.pixels_per_row).ceil() as u16
        } else {
            0
        }
    }

    /// Header/nav entrance, relative to startup rather than scroll.
    pub fn intro(&self, reveal: Reveal) -> ElementStyle {
        ElementStyle {
            opacity: reveal.opacity(self.intro_clock),
            offset_rows: reveal.offset(self.intro_clock) / self.tuning.pixels_per_row,
        }
    }
}

/// The local offset can only be read while the process is single-threaded,
/// so this falls back to UTC once timer threads exist.
fn local_year() -> i32 {
    OffsetDateTime::now_local()
        .unwrap_or_else(|_| OffsetDateTime::now_utc())
        .year()
}
