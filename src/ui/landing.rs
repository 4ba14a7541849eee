//! Landing page renderer.
//!
//! Every section is laid out into its own block of rows, the blocks are
//! stacked into the full page and the viewport window at the current
//! scroll row is drawn below the header.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
};

use super::{ACCENT, MUTED, TEXT, centered_rect_sized, wrap_words};
use crate::landing::content;
use crate::landing::{
    Button, ElementStyle, Focus, FormField, FormStatus, Landing, NavItem, Section,
};
use crate::motion::Reveal;
use crate::palette::{Gradient, Tone, fade};

/// Brand line plus the scroll progress bar.
const HEADER_ROWS: u16 = 2;
/// Widest the page copy gets.
const MAX_TEXT_WIDTH: u16 = 96;
/// Below this an element is not drawn at all.
const MIN_OPACITY: f64 = 0.02;
const MENU_SIZE: (u16, u16) = (22, 6);

const BRAND_GRADIENT: Gradient = Gradient::new(Tone::Violet, Tone::Indigo);

pub(super) fn draw(frame: &mut Frame, area: Rect, landing: &mut Landing) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(HEADER_ROWS), Constraint::Min(0)])
        .split(area);
    let body = chunks[1];
    landing.set_viewport(body.width, body.height);
    let landing = &*landing;

    draw_header(frame, chunks[0], landing);

    let text_area = centered_rect_sized(
        body.width.saturating_sub(4).min(MAX_TEXT_WIDTH),
        body.height,
        body,
    );
    let lines = page_lines(landing, text_area.width as usize);
    let start = usize::from(landing.scroll_row()).min(lines.len());
    let end = (start + usize::from(body.height)).min(lines.len());
    frame.render_widget(Paragraph::new(lines[start..end].to_vec()), text_area);

    if landing.is_menu_open() {
        draw_menu(frame, body, landing);
    }
}

fn draw_header(frame: &mut Frame, area: Rect, landing: &Landing) {
    if area.height == 0 {
        return;
    }
    let brand_style = landing.intro(Reveal::new(0.0, 0.5));
    let brand = Span::styled(
        format!("◆ {}", content::BRAND),
        Style::default()
            .fg(fade(BRAND_GRADIENT.from.color(), brand_style.opacity))
            .add_modifier(Modifier::BOLD),
    );

    let nav: Line<'static> = if landing.is_compact() {
        let icon = if landing.is_menu_open() { "✕" } else { "☰" };
        Line::from(Span::styled(icon, Style::default().fg(TEXT)))
    } else {
        let active = active_nav(landing);
        let mut nav = Vec::new();
        for (i, item) in NavItem::ALL.into_iter().enumerate() {
            let style = landing.intro(Reveal::new(0.1 * (i + 1) as f64, 0.5));
            let color = if item == active { ACCENT } else { TEXT };
            nav.push(Span::styled(
                format!("{} {}", i + 1, item.label()),
                Style::default().fg(fade(color, style.opacity)),
            ));
            nav.push(Span::raw("   "));
        }
        Line::from(nav)
    };

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(1), Constraint::Length(nav.width() as u16)])
        .split(Rect { height: 1, ..area });
    frame.render_widget(Paragraph::new(Line::from(brand)), cols[0]);
    frame.render_widget(Paragraph::new(nav), cols[1]);

    if area.height > 1 {
        let bar = Rect {
            y: area.y + 1,
            height: 1,
            ..area
        };
        frame.render_widget(Paragraph::new(progress_bar(landing, bar.width)), bar);
    }
}

/// Spring-smoothed scroll indicator.
fn progress_bar(landing: &Landing, width: u16) -> Line<'static> {
    let filled = (landing.smooth_progress().clamp(0.0, 1.0) * f64::from(width)).round() as usize;
    let spans: Vec<Span<'static>> = (0..filled)
        .map(|i| {
            let t = i as f64 / f64::from(width.max(1));
            Span::styled("━", Style::default().fg(BRAND_GRADIENT.at(t)))
        })
        .collect();
    Line::from(spans)
}

/// The last nav target whose section starts above the upper third of the viewport.
fn active_nav(landing: &Landing) -> NavItem {
    let probe = landing.scroll() + f64::from(landing.viewport_height()) / 3.0;
    NavItem::ALL
        .into_iter()
        .rev()
        .find(|item| f64::from(item.section().top()) <= probe)
        .unwrap_or(NavItem::Home)
}

fn draw_menu(frame: &mut Frame, body: Rect, landing: &Landing) {
    let width = MENU_SIZE.0.min(body.width);
    let height = MENU_SIZE.1.min(body.height);
    let rect = Rect {
        x: body.x + body.width.saturating_sub(width),
        y: body.y,
        width,
        height,
    };
    let active = active_nav(landing);
    let items: Vec<ListItem> = NavItem::ALL
        .into_iter()
        .enumerate()
        .map(|(i, item)| {
            let color = if item == active { ACCENT } else { TEXT };
            ListItem::new(Line::from(Span::styled(
                format!("{} {}", i + 1, item.label()),
                Style::default().fg(color),
            )))
        })
        .collect();
    frame.render_widget(Clear, rect);
    frame.render_widget(
        List::new(items).block(Block::default().borders(Borders::ALL).title(" menu ")),
        rect,
    );
}

/// All page rows, top to bottom.
fn page_lines(landing: &Landing, width: usize) -> Vec<Line<'static>> {
    Section::ALL
        .into_iter()
        .flat_map(|section| section_rows(landing, section, width).into_lines())
        .collect()
}

fn section_rows(landing: &Landing, section: Section, width: usize) -> Rows {
    match section {
        Section::Hero => hero(landing, width),
        Section::Features => features(landing, width),
        Section::Parallax => parallax(landing, width),
        Section::About => about(landing, width),
        Section::Stats => stats(landing, width),
        Section::Contact => contact(landing, width),
        Section::Cta => cta(landing, width),
        Section::Footer => footer(landing, width),
    }
}

/// Rows of one section. When two elements land on the same row the more
/// opaque one is kept.
struct Rows {
    lines: Vec<(Line<'static>, f64)>,
}

impl Rows {
    fn new(section: Section) -> Self {
        Self {
            lines: vec![(Line::default(), 0.0); usize::from(section.height())],
        }
    }

    fn put(&mut self, row: i32, line: Line<'static>, opacity: f64) {
        let Ok(row) = usize::try_from(row) else {
            return;
        };
        if let Some(slot) = self.lines.get_mut(row) {
            if slot.0.spans.is_empty() || opacity > slot.1 {
                *slot = (line, opacity);
            }
        }
    }

    fn reveal(&mut self, row: i32, line: Line<'static>, style: ElementStyle) {
        if style.opacity <= MIN_OPACITY {
            return;
        }
        let row = row + style.offset_rows.round() as i32;
        self.put(row, faded(line, style.opacity), style.opacity);
    }

    fn reveal_block(&mut self, row: i32, lines: Vec<Line<'static>>, style: ElementStyle) {
        for (i, line) in lines.into_iter().enumerate() {
            self.reveal(row + i as i32, line, style);
        }
    }

    fn into_lines(self) -> impl Iterator<Item = Line<'static>> {
        self.lines.into_iter().map(|(line, _)| line)
    }
}

fn faded(mut line: Line<'static>, opacity: f64) -> Line<'static> {
    for span in line.spans.iter_mut() {
        let fg = span.style.fg.unwrap_or(TEXT);
        span.style = span.style.fg(fade(fg, opacity));
        if let Some(bg) = span.style.bg {
            span.style = span.style.bg(fade(bg, opacity));
        }
    }
    line
}

fn styled(text: impl Into<String>, color: Color) -> Line<'static> {
    Line::from(Span::styled(text.into(), Style::default().fg(color)))
}

fn bold(text: impl Into<String>, color: Color) -> Line<'static> {
    Line::from(Span::styled(
        text.into(),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    ))
}

fn paragraph(text: &str, width: usize, max_lines: usize, color: Color) -> Vec<Line<'static>> {
    let mut lines = wrap_words(text, width);
    if lines.len() > max_lines {
        lines.truncate(max_lines);
        if let Some(last) = lines.last_mut() {
            *last = clip(&format!("{last} …"), width);
        }
    }
    lines.into_iter().map(|l| styled(l, color)).collect()
}

fn centered(lines: Vec<Line<'static>>) -> Vec<Line<'static>> {
    lines.into_iter().map(Line::centered).collect()
}

/// Cut `text` to `width` characters, marking the cut with an ellipsis.
fn clip(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let mut out: String = text.chars().take(width.saturating_sub(1)).collect();
    out.push('…');
    out
}

fn button(landing: &Landing, which: Button) -> Span<'static> {
    if landing.focus() == Some(Focus::Button(which)) {
        Span::styled(
            format!(" ▸ {} ", which.label()),
            Style::default()
                .fg(Color::Rgb(0xff, 0xff, 0xff))
                .bg(ACCENT)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        Span::styled(format!("[ {} ]", which.label()), Style::default().fg(ACCENT))
    }
}

fn hero(landing: &Landing, width: usize) -> Rows {
    let s = Section::Hero;
    let mut rows = Rows::new(s);
    let params = landing.hero();
    let text = params.text_offset.round() as i32;
    let decor = params.background_offset.round() as i32;
    let at = |delay: f64| landing.reveal(s, Reveal::new(delay, 0.5));

    rows.reveal(1 + text, styled(content::HERO_BADGE, ACCENT), at(0.2));
    for (i, title) in content::HERO_TITLE.iter().enumerate() {
        let color = if i == 0 { TEXT } else { BRAND_GRADIENT.at(0.3) };
        rows.reveal(3 + text + i as i32, bold(*title, color), at(0.2 + 0.1 * i as f64));
    }
    rows.reveal_block(6 + text, paragraph(content::HERO_BODY, width, 3, MUTED), at(0.6));
    rows.reveal(
        10 + text,
        Line::from(vec![
            button(landing, Button::GetStarted),
            Span::raw("  "),
            button(landing, Button::ViewDemo),
        ]),
        at(0.8),
    );
    rows.reveal(
        12 + text,
        Line::from(vec![
            Span::styled("●●●● ", Style::default().fg(Tone::Amber.color())),
            Span::styled(content::HERO_TRUST, Style::default().fg(MUTED)),
        ]),
        at(1.0),
    );

    let card_width = ((width as f64 * 0.6 * params.scale).round() as usize).clamp(12, width.max(12));
    for (i, line) in preview_card(card_width, landing).into_iter().enumerate() {
        rows.reveal(14 + decor + i as i32, line.centered(), at(0.4));
    }
    rows.reveal(
        19,
        styled(format!("{} ↓", content::HERO_SCROLL_HINT), MUTED).centered(),
        at(1.2),
    );
    rows
}

fn preview_card(width: usize, landing: &Landing) -> Vec<Line<'static>> {
    let inner = width.saturating_sub(2);
    let border = Style::default().fg(BRAND_GRADIENT.from.color());
    let title = clip(" Dashboard Preview ", inner);
    let top = format!("╭{title}{}╮", "─".repeat(inner.saturating_sub(title.chars().count())));
    let row = |text: &str, style: ElementStyle| {
        let text = clip(text, inner);
        let pad = inner.saturating_sub(text.chars().count());
        let body = Span::styled(
            format!("{text}{}", " ".repeat(pad)),
            Style::default().fg(fade(TEXT, style.opacity.max(0.0))),
        );
        Line::from(vec![Span::styled("│", border), body, Span::styled("│", border)])
    };
    let at = |delay: f64| landing.reveal(Section::Hero, Reveal::new(delay, 0.5));
    vec![
        Line::from(Span::styled(top, border)),
        row(" ✔ Project Completed · Just now", at(0.9)),
        row(" ● Live Updates", at(1.1)),
        Line::from(Span::styled(format!("╰{}╯", "─".repeat(inner)), border)),
    ]
}

fn features(landing: &Landing, width: usize) -> Rows {
    let s = Section::Features;
    let mut rows = Rows::new(s);
    let head = landing.reveal(s, Reveal::new(0.0, 0.5));

    rows.reveal(0, bold(content::FEATURES_KICKER, ACCENT).centered(), head);
    let title = centered(
        wrap_words(content::FEATURES_TITLE, width)
            .into_iter()
            .take(2)
            .map(|l| bold(l, TEXT))
            .collect(),
    );
    let title_rows = title.len() as i32;
    rows.reveal_block(1, title, head);
    rows.reveal_block(
        1 + title_rows,
        centered(paragraph(content::FEATURES_BODY, width, 3, MUTED)),
        landing.reveal(s, Reveal::new(0.1, 0.5)),
    );

    for (i, feature) in content::FEATURES.iter().enumerate() {
        let style = landing.card_style(i);
        let focused = landing.focus() == Some(Focus::Card(i));
        let base = 7 + 3 * i as i32 - i32::from(landing.card_lift(i));
        let edge = Style::default().fg(feature.gradient.from.color());
        let title_style = if focused {
            Style::default()
                .fg(feature.gradient.to.color())
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(TEXT).add_modifier(Modifier::BOLD)
        };
        let marker = if focused { "▸ " } else { "  " };
        rows.reveal(
            base + 1,
            Line::from(vec![
                Span::styled("▌", edge),
                Span::styled(marker, Style::default().fg(ACCENT)),
                Span::styled(format!("{} ", feature.icon), edge),
                Span::styled(feature.title, title_style),
            ]),
            style,
        );
        rows.reveal(
            base + 2,
            Line::from(vec![
                Span::styled("▌", edge),
                Span::styled(
                    format!("    {}", clip(feature.description, width.saturating_sub(5))),
                    Style::default().fg(MUTED),
                ),
            ]),
            style,
        );
    }
    rows
}

fn parallax(landing: &Landing, width: usize) -> Rows {
    let mut rows = Rows::new(Section::Parallax);
    let p = landing.parallax();
    let blob = |tone: Tone, len: usize| {
        let core = "░▒▓".to_string() + &"█".repeat(len) + "▓▒░";
        Line::from(Span::styled(core, Style::default().fg(fade(tone.color(), 0.5)))).centered()
    };
    // Blobs swell a little as the band passes through the viewport.
    let swell = 0.75 + 0.5 * p.progress;
    rows.put(2 + p.y1.round() as i32, blob(Tone::Violet, (width as f64 / 3.0 * swell) as usize), 0.5);
    rows.put(9 + p.y2.round() as i32, blob(Tone::Indigo, (width as f64 / 4.0 * swell) as usize), 0.5);

    let text = ElementStyle {
        opacity: p.opacity,
        offset_rows: 0.0,
    };
    rows.reveal(4 + p.y3.round() as i32, bold(content::PARALLAX_TITLE, TEXT).centered(), text);
    rows.reveal_block(
        6 + p.y4.round() as i32,
        centered(paragraph(content::PARALLAX_BODY, width.min(64), 2, MUTED)),
        text,
    );
    rows
}

fn about(landing: &Landing, width: usize) -> Rows {
    let s = Section::About;
    let mut rows = Rows::new(s);
    let at = |delay: f64| landing.reveal(s, Reveal::new(delay, 0.5));

    rows.reveal(0, bold(content::ABOUT_KICKER, ACCENT), at(0.0));
    let title: Vec<Line<'static>> = wrap_words(content::ABOUT_TITLE, width)
        .into_iter()
        .take(2)
        .map(|l| bold(l, TEXT))
        .collect();
    rows.reveal_block(1, title, at(0.0));
    rows.reveal_block(4, paragraph(content::ABOUT_BODY, width, 3, MUTED), at(0.1));

    for (i, point) in content::ABOUT_POINTS.iter().enumerate() {
        rows.reveal(
            8 + i as i32,
            Line::from(vec![
                Span::styled("✔ ", Style::default().fg(Tone::Emerald.color())),
                Span::styled(*point, Style::default().fg(TEXT)),
            ]),
            at(0.1 * (i + 1) as f64),
        );
    }

    let badge = at(0.3);
    let (value, label) = content::ABOUT_BADGE;
    rows.reveal(
        13,
        Line::from(vec![
            Span::styled(
                format!(" {value} "),
                Style::default()
                    .fg(Color::Rgb(0xff, 0xff, 0xff))
                    .bg(BRAND_GRADIENT.from.color())
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!(" {label}"), Style::default().fg(TEXT)),
        ]),
        badge,
    );
    rows.reveal(
        14,
        styled(clip(content::ABOUT_BADGE_BODY, width), MUTED),
        badge,
    );
    rows.reveal(16, Line::from(button(landing, Button::LearnMore)), at(0.4));
    rows
}

fn stats(landing: &Landing, width: usize) -> Rows {
    let s = Section::Stats;
    let mut rows = Rows::new(s);
    let col = (width / content::STATS.len()).max(1);
    let mut values = Vec::new();
    let mut labels = Vec::new();
    let mut strongest: f64 = 0.0;

    for (i, stat) in content::STATS.iter().enumerate() {
        let style = landing.reveal(s, Reveal::new(0.1 * i as f64, 0.5).with_distance(0.0));
        strongest = strongest.max(style.opacity);
        let value_color = fade(Gradient::new(Tone::Violet, Tone::Indigo).at(i as f64 / 3.0), style.opacity);
        values.push(Span::styled(
            format!("{:^col$}", clip(stat.value, col)),
            Style::default().fg(value_color).add_modifier(Modifier::BOLD),
        ));
        labels.push(Span::styled(
            format!("{:^col$}", clip(stat.label, col)),
            Style::default().fg(fade(MUTED, style.opacity)),
        ));
    }
    if strongest > MIN_OPACITY {
        rows.put(2, Line::from(values), strongest);
        rows.put(3, Line::from(labels), strongest);
    }
    rows
}

fn contact(landing: &Landing, width: usize) -> Rows {
    let s = Section::Contact;
    let mut rows = Rows::new(s);
    let at = |delay: f64| landing.reveal(s, Reveal::new(delay, 0.5));

    rows.reveal(0, bold(content::CONTACT_KICKER, ACCENT), at(0.0));
    rows.reveal(1, bold(clip(content::CONTACT_TITLE, width), TEXT), at(0.0));
    rows.reveal_block(2, paragraph(content::CONTACT_BODY, width, 3, MUTED), at(0.1));
    for (i, (label, value)) in content::CONTACT_DETAILS.iter().enumerate() {
        rows.reveal(
            5 + i as i32,
            Line::from(vec![
                Span::styled(format!("{label:<9}"), Style::default().fg(ACCENT)),
                Span::styled(*value, Style::default().fg(TEXT)),
            ]),
            at(0.2 + 0.1 * i as f64),
        );
    }

    let form = landing.reveal(s, Reveal::new(0.3, 0.6));
    rows.reveal(9, bold(content::CONTACT_FORM_TITLE, TEXT), form);
    let mut row = 10;
    for field in FormField::ALL {
        rows.reveal(row, styled(field.label(), MUTED), form);
        row += 1;
        let shown = if field.is_multiline() { 3 } else { 1 };
        rows.reveal_block(row, field_lines(landing, field, width, shown), form);
        row += shown as i32;
    }
    rows.reveal(row + 1, Line::from(button(landing, Button::SendMessage)), form);

    if let Some(status) = landing.form().status() {
        let line = match status {
            FormStatus::Sent => styled("✔ Thanks! We'll be in touch soon.", Tone::Emerald.color()),
            FormStatus::Rejected(e) => styled(format!("✗ {e}"), Tone::Orange.color()),
        };
        rows.reveal(row + 2, line, form);
    }
    rows
}

/// Input box content: the last `shown` lines of the value, or the placeholder.
fn field_lines(landing: &Landing, field: FormField, width: usize, shown: usize) -> Vec<Line<'static>> {
    let focused = landing.editing_field() == Some(field);
    let value = landing.form().value(field);
    let inner = width.saturating_sub(4);
    let edge = if focused { ACCENT } else { MUTED };

    let mut texts: Vec<(String, Color)> = if value.is_empty() {
        vec![(field.placeholder().to_string(), fade(MUTED, 0.6))]
    } else {
        let all: Vec<&str> = value.split('\n').collect();
        let skip = all.len().saturating_sub(shown);
        all[skip..].iter().map(|l| (l.to_string(), TEXT)).collect()
    };
    texts.resize(shown, (String::new(), TEXT));

    let cursor_row = if value.is_empty() {
        0
    } else {
        (texts.len() - 1).min(value.split('\n').count() - 1)
    };
    texts
        .into_iter()
        .enumerate()
        .map(|(i, (text, color))| {
            let mut spans = vec![
                Span::styled("▕ ", Style::default().fg(edge)),
                Span::styled(clip(&text, inner), Style::default().fg(color)),
            ];
            if focused && i == cursor_row {
                spans.push(Span::styled("▏", Style::default().fg(ACCENT)));
            }
            Line::from(spans)
        })
        .collect()
}

fn cta(landing: &Landing, width: usize) -> Rows {
    let s = Section::Cta;
    let mut rows = Rows::new(s);
    let at = |delay: f64| landing.reveal(s, Reveal::new(delay, 0.5));

    rows.reveal(1, bold(clip(content::CTA_TITLE, width), TEXT).centered(), at(0.0));
    rows.reveal_block(
        3,
        centered(paragraph(content::CTA_BODY, width.min(72), 3, MUTED)),
        at(0.1),
    );
    rows.reveal(7, Line::from(button(landing, Button::GetStartedNow)).centered(), at(0.2));
    rows
}

fn footer(landing: &Landing, width: usize) -> Rows {
    let s = Section::Footer;
    let mut rows = Rows::new(s);
    let style = landing.reveal(s, Reveal::new(0.0, 0.5));

    rows.reveal(0, bold(format!("◆ {}", content::BRAND), BRAND_GRADIENT.from.color()), style);
    rows.reveal_block(1, paragraph(content::TAGLINE, width, 2, MUTED), style);
    rows.reveal(3, styled(content::SOCIALS.join(" · "), ACCENT), style);

    let col = (width / content::FOOTER_COLUMNS.len()).max(1);
    let header: Vec<Span<'static>> = content::FOOTER_COLUMNS
        .iter()
        .map(|(title, _)| {
            Span::styled(
                format!("{:<col$}", clip(title, col)),
                Style::default().fg(TEXT).add_modifier(Modifier::BOLD),
            )
        })
        .collect();
    rows.reveal(5, Line::from(header), style);
    for link in 0..4 {
        let line: Vec<Span<'static>> = content::FOOTER_COLUMNS
            .iter()
            .map(|(_, links)| {
                Span::styled(format!("{:<col$}", clip(links[link], col)), Style::default().fg(MUTED))
            })
            .collect();
        rows.reveal(6 + link as i32, Line::from(line), style);
    }

    let copyright = format!(
        "© {} {}. All rights reserved.",
        landing.year(),
        content::BRAND
    );
    let legal = content::FOOTER_LEGAL.join("  ");
    let gap = width.saturating_sub(copyright.chars().count() + legal.chars().count()).max(2);
    rows.reveal(
        11,
        Line::from(vec![
            Span::styled(copyright, Style::default().fg(MUTED)),
            Span::raw(" ".repeat(gap)),
            Span::styled(legal, Style::default().fg(MUTED)),
        ]),
        style,
    );
    rows
}

#[cfg(test)]
pub(super) fn rendered_page(landing: &Landing, width: usize) -> Vec<String> {
    page_lines(landing, width)
        .iter()
        .map(|line| line.spans.iter().map(|s| s.content.as_ref()).collect())
        .collect()
}
