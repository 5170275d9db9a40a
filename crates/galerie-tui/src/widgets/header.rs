use std::time::Instant;

use galerie_core::exhibition::{days_info, status_label, ActiveExhibition, ExhibitionStatus};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::app::{App, Mode};
use crate::sections::SectionId;

pub struct HeaderWidget;

impl HeaderWidget {
    /// Header rows including the banner when visible.
    pub fn height(app: &App, active_count: usize) -> u16 {
        let banner = if app.banner.is_visible(active_count) { 1 } else { 0 };
        let menu = if app.mode == Mode::Menu {
            SectionId::MENU.len() as u16
        } else {
            0
        };
        2 + banner + menu
    }

    pub fn render(
        frame: &mut Frame,
        area: Rect,
        app: &mut App,
        active: &[ActiveExhibition],
        now: Instant,
    ) {
        let theme = app.theme.clone();
        // Background deepens as the page scrolls under the header
        let bg = if app.banner.scroll_progress() > 0.05 {
            theme.bg1
        } else {
            theme.bg0
        };

        let title_line = Line::from(vec![
            Span::styled(
                " ANTONÍN KROČA ",
                Style::default()
                    .fg(theme.heading)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("· akademický malíř", Style::default().fg(theme.grey1)),
        ]);
        let nav_hint = SectionId::MENU
            .iter()
            .enumerate()
            .map(|(i, s)| format!("{}:{}", i + 2, s.label()))
            .collect::<Vec<_>>()
            .join("  ");

        let hint_width = nav_hint.width() as u16;
        frame.render_widget(
            Paragraph::new(title_line).style(Style::default().bg(bg)),
            Rect { height: 1, ..area },
        );
        if area.width > hint_width + 2 {
            frame.render_widget(
                Paragraph::new(Line::from(Span::styled(
                    nav_hint,
                    Style::default().fg(theme.grey0),
                )))
                .style(Style::default().bg(bg)),
                Rect {
                    x: area.x + area.width - hint_width - 1,
                    y: area.y,
                    width: hint_width,
                    height: 1,
                },
            );
        }

        let rule = "─".repeat(area.width as usize);
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                rule,
                Style::default().fg(theme.bg2),
            )))
            .style(Style::default().bg(bg)),
            Rect {
                y: area.y + 1,
                height: 1,
                ..area
            },
        );

        let mut next_row = area.y + 2;
        if app.banner.is_visible(active.len()) {
            let banner_area = Rect {
                x: area.x,
                y: next_row,
                width: area.width,
                height: 1,
            };
            Self::render_banner(frame, banner_area, app, active, now);
            app.banner_area = Some(banner_area);
            next_row += 1;
        } else {
            app.banner_area = None;
        }

        if app.mode == Mode::Menu {
            for (i, section) in SectionId::MENU.iter().enumerate() {
                let selected = i == app.menu_index;
                let style = if selected {
                    Style::default()
                        .fg(theme.fg0)
                        .bg(theme.selection)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(theme.fg1).bg(bg)
                };
                let marker = if selected { "▸ " } else { "  " };
                frame.render_widget(
                    Paragraph::new(Line::from(Span::styled(
                        format!("{marker}{}", section.label()),
                        style,
                    )))
                    .style(Style::default().bg(bg)),
                    Rect {
                        x: area.x,
                        y: next_row,
                        width: area.width,
                        height: 1,
                    },
                );
                next_row += 1;
            }
        }
    }

    fn render_banner(
        frame: &mut Frame,
        area: Rect,
        app: &App,
        active: &[ActiveExhibition],
        now: Instant,
    ) {
        let theme = &app.theme;
        let index = app.banner.display_index(active.len());
        let Some(entry) = active.get(index) else {
            return;
        };
        let ex = &entry.exhibition;

        let (dot_color, label) = match (entry.calculated_status, ex.confirmed) {
            (_, false) => (theme.tentative, status_label(entry.calculated_status, false)),
            (ExhibitionStatus::Current, true) => {
                (theme.current, status_label(ExhibitionStatus::Current, true))
            }
            (status, true) => (theme.upcoming, status_label(status, true)),
        };

        let mut text = format!("{} · {}", ex.title, ex.location_display());
        let today = chrono::Local::now().date_naive();
        if let Some(days) = days_info(ex, today) {
            text.push_str(&format!(" · {days}"));
        }

        let prefix = format!(" ● {label}  ");
        let counter = if active.len() > 1 {
            format!(" {}/{} ", index + 1, active.len())
        } else {
            String::new()
        };

        let available =
            (area.width as usize).saturating_sub(prefix.width() + counter.width());
        // Narrow terminals get the marquee treatment instead of truncation
        let shown = if text.width() > available {
            let offset = app.banner.marquee_offset(text.width() as u16, now);
            marquee_window(&text, offset, available)
        } else {
            text
        };

        let line = Line::from(vec![
            Span::styled(" ● ", Style::default().fg(dot_color)),
            Span::styled(
                format!("{label}  "),
                Style::default().fg(dot_color).add_modifier(Modifier::BOLD),
            ),
            Span::styled(shown, Style::default().fg(theme.fg1)),
        ]);
        frame.render_widget(
            Paragraph::new(line).style(Style::default().bg(theme.bg1)),
            area,
        );

        if !counter.is_empty() {
            let width = (counter.width() as u16).min(area.width);
            frame.render_widget(
                Paragraph::new(Line::from(Span::styled(
                    counter,
                    Style::default().fg(theme.grey1),
                )))
                .style(Style::default().bg(theme.bg1)),
                Rect {
                    x: area.x + area.width - width,
                    y: area.y,
                    width,
                    height: 1,
                },
            );
        }
    }
}

/// Slice of the marquee text visible at the given offset.
fn marquee_window(text: &str, offset: i32, width: usize) -> String {
    let chars: Vec<char> = text.chars().collect();
    let skip = (-offset).max(0) as usize;
    chars.iter().skip(skip).take(width).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marquee_window_slides_left() {
        assert_eq!(marquee_window("abcdef", 0, 3), "abc");
        assert_eq!(marquee_window("abcdef", -2, 3), "cde");
        assert_eq!(marquee_window("abcdef", -6, 3), "");
    }
}
