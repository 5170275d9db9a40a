use chrono::Local;
use galerie_core::exhibition::{
    calculated_status, days_info, status_label, vernissage_visible,
};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;
use crate::sections::{PageLayout, SectionId};
use crate::theme::Theme;

/// Blank row kept above a section heading after a jump.
const SECTION_MARGIN: u16 = 1;

pub struct PageWidget;

impl PageWidget {
    /// Compose the whole page, refresh the layout measurements, and draw
    /// the slice under the current scroll offset.
    pub fn render(frame: &mut Frame, area: Rect, app: &mut App) {
        let (lines, layout) = compose(app, area);
        app.layout = layout;

        let offset = app.animator.current_scroll() as usize;
        let visible: Vec<Line> = lines
            .into_iter()
            .skip(offset)
            .take(area.height as usize)
            .collect();
        frame.render_widget(
            Paragraph::new(visible).style(Style::default().bg(app.theme.bg0)),
            area,
        );
    }
}

/// Build every section top to bottom, recording where each one starts.
fn compose(app: &App, area: Rect) -> (Vec<Line<'static>>, PageLayout) {
    let theme = &app.theme;
    let width = area.width.max(20) as usize;
    let today = Local::now().date_naive();

    let mut lines: Vec<Line<'static>> = Vec::new();
    let mut layout = PageLayout::new(area.height, SECTION_MARGIN);

    // Home
    layout.register(SectionId::Home, lines.len() as u16);
    lines.push(Line::default());
    lines.push(heading(theme, "ANTONÍN KROČA"));
    lines.push(Line::from(Span::styled(
        "  akademický malíř",
        Style::default().fg(theme.grey1),
    )));
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        "  Barva nanášená špachtlí, krajina Hukvald a lidé Lašska.",
        Style::default().fg(theme.fg1),
    )));
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        "  1-5: sekce  m: menu  Enter: dílo  p: plakát",
        Style::default().fg(theme.grey0),
    )));
    lines.push(Line::default());

    // About
    lines.push(Line::default());
    layout.register(SectionId::About, lines.len() as u16);
    lines.push(heading(theme, "O UMĚLCI"));
    for paragraph in [
        "Antonín Kroča (* 1947, Sklenov) patří k nejvýraznějším žijícím \
         malířům moravského expresivního proudu. Studoval na Akademii \
         výtvarných umění v Praze u profesora Jana Smetany.",
        "Jeho plátna vznikají rychle, vrstvením barvy špachtlí i holou \
         rukou, často přímo v krajině. Ústředními tématy zůstávají rodné \
         Hukvaldy, portrét a figura.",
    ] {
        lines.push(Line::default());
        for row in wrap(paragraph, width.saturating_sub(4)) {
            lines.push(Line::from(Span::styled(
                format!("  {row}"),
                Style::default().fg(theme.fg1),
            )));
        }
    }
    lines.push(Line::default());

    // Exhibitions
    lines.push(Line::default());
    layout.register(SectionId::Exhibitions, lines.len() as u16);
    lines.push(heading(theme, "VÝSTAVY"));
    for ex in app.exhibitions.iter() {
        let status = calculated_status(ex, today);
        let label = status_label(status, ex.confirmed);
        let label_style = if !ex.confirmed {
            Style::default().fg(theme.tentative)
        } else {
            match status {
                galerie_core::exhibition::ExhibitionStatus::Current => {
                    Style::default().fg(theme.current)
                }
                _ => Style::default().fg(theme.upcoming),
            }
        };
        lines.push(Line::default());
        lines.push(Line::from(vec![
            Span::styled(" ▪ ".to_string(), Style::default().fg(theme.accent)),
            Span::styled(
                ex.title.clone(),
                Style::default().fg(theme.fg0).add_modifier(Modifier::BOLD),
            ),
        ]));
        lines.push(Line::from(vec![
            Span::raw("   "),
            Span::styled(format!("[{label}] "), label_style.add_modifier(Modifier::BOLD)),
            Span::styled(ex.date_display(), Style::default().fg(theme.fg1)),
        ]));
        lines.push(Line::from(Span::styled(
            format!("   {}", ex.location_display()),
            Style::default().fg(theme.grey1),
        )));
        if let Some(days) = days_info(ex, today) {
            lines.push(Line::from(Span::styled(
                format!("   {days}"),
                Style::default().fg(theme.amber),
            )));
        }
        if vernissage_visible(ex, today) {
            if let Some(vernissage) = &ex.vernissage {
                lines.push(Line::from(Span::styled(
                    format!("   Vernisáž: {vernissage}"),
                    Style::default().fg(theme.fg1),
                )));
            }
        }
        if let Some(admission) = &ex.admission {
            lines.push(Line::from(Span::styled(
                format!("   Vstupné: {admission}"),
                Style::default().fg(theme.grey1),
            )));
        }
    }
    lines.push(Line::default());

    // Gallery
    lines.push(Line::default());
    layout.register(SectionId::Gallery, lines.len() as u16);
    lines.push(heading(theme, "DÍLA"));
    for (i, artwork) in app.artworks.iter().enumerate() {
        let selected = i == app.gallery_cursor;
        let marker = if selected { "▸" } else { " " };
        let title_style = if selected {
            Style::default()
                .fg(theme.fg0)
                .bg(theme.selection)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.fg0)
        };
        lines.push(Line::default());
        lines.push(Line::from(vec![
            Span::styled(format!(" {marker} "), Style::default().fg(theme.accent)),
            Span::styled(format!("{} ({})", artwork.title, artwork.year), title_style),
        ]));
        lines.push(Line::from(Span::styled(
            format!("   {} · {}", artwork.medium, artwork.dimensions),
            Style::default().fg(theme.grey1),
        )));
    }
    lines.push(Line::default());

    // Contact
    lines.push(Line::default());
    layout.register(SectionId::Contact, lines.len() as u16);
    lines.push(heading(theme, "KONTAKT"));
    lines.push(Line::default());
    for row in [
        "  Ateliér: Dolní Sklenov 18, Hukvaldy",
        "  E-mail: galerie@antoninkroca.cz",
        "  Telefon: +420 603 512 745",
        "  Návštěvy ateliéru po předchozí domluvě.",
    ] {
        lines.push(Line::from(Span::styled(
            row.to_string(),
            Style::default().fg(theme.fg1),
        )));
    }
    lines.push(Line::default());

    // Footer
    lines.push(Line::from(Span::styled(
        "─".repeat(width.min(60)),
        Style::default().fg(theme.bg2),
    )));
    lines.push(Line::from(Span::styled(
        "  © 2026 Antonín Kroča · všechna práva vyhrazena",
        Style::default().fg(theme.grey0),
    )));
    lines.push(Line::default());

    layout.set_total_height(lines.len() as u16);
    (lines, layout)
}

fn heading(theme: &Theme, text: &str) -> Line<'static> {
    Line::from(Span::styled(
        format!("  {text}"),
        Style::default()
            .fg(theme.heading)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
    ))
}

/// Word wrap at char-count width. Section text is plain Czech prose, so
/// char count is close enough to display width here.
fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(10);
    let mut rows = Vec::new();
    let mut row = String::new();
    for word in text.split_whitespace() {
        if !row.is_empty() && row.chars().count() + 1 + word.chars().count() > width {
            rows.push(std::mem::take(&mut row));
        }
        if !row.is_empty() {
            row.push(' ');
        }
        row.push_str(word);
    }
    if !row.is_empty() {
        rows.push(row);
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use galerie_core::AppConfig;

    #[test]
    fn test_compose_registers_all_sections_in_order() {
        let app = App::new(AppConfig::default());
        let area = Rect::new(0, 0, 80, 40);
        let (lines, layout) = compose(&app, area);

        let mut last = 0;
        for section in SectionId::ALL {
            let offset = layout.resolve(section).unwrap_or_else(|| {
                panic!("section {} not registered", section.as_str())
            });
            assert!(offset >= last, "sections out of order");
            last = offset;
        }
        assert_eq!(layout.total_height() as usize, lines.len());
    }

    #[test]
    fn test_wrap_respects_width() {
        let rows = wrap("jedna dvě tři čtyři pět šest sedm osm", 12);
        assert!(rows.len() > 1);
        for row in &rows {
            assert!(row.chars().count() <= 12);
        }
    }
}
