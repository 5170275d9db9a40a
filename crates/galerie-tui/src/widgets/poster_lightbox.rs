use std::time::Instant;

use chrono::Local;
use galerie_core::exhibition::{days_info, status_label, vernissage_visible, ActiveExhibition};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::artwork_lightbox::{
    modal_area, render_controls, render_halfblocks, render_placeholder, shrink,
};
use crate::app::App;

pub struct PosterLightboxWidget;

impl PosterLightboxWidget {
    /// Render the exhibition poster viewer over the page.
    pub fn render(
        frame: &mut Frame,
        area: Rect,
        app: &mut App,
        active: &[ActiveExhibition],
        _now: Instant,
    ) {
        let Some(index) = app.poster_viewer.selected() else {
            return;
        };
        let Some(entry) = active.get(index).cloned() else {
            return;
        };
        let ex = entry.exhibition;
        let theme = app.theme.clone();
        let today = Local::now().date_naive();

        let modal = modal_area(area);
        app.modal_content_area = Some(modal);

        frame.render_widget(Clear, modal);
        frame.render_widget(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.bg2))
                .style(Style::default().bg(theme.bg1)),
            modal,
        );

        let inner = shrink(modal, 1);
        let details_height = 6;
        let image_area = Rect {
            height: inner.height.saturating_sub(details_height + 2),
            ..inner
        };
        // Clipped to the modal: on a cramped terminal the bottom rows lose
        // out rather than landing outside the buffer
        let details_area = Rect {
            y: inner.y + image_area.height,
            height: details_height,
            ..inner
        }
        .intersection(inner);
        let controls_area = Rect {
            y: details_area.y + details_height + 1,
            height: 1,
            ..inner
        }
        .intersection(inner);

        match ex.poster_image.as_deref().and_then(|p| app.images.get(p)) {
            Some(img) => {
                let img = img.clone();
                render_halfblocks(frame, image_area, &img);
            }
            None => render_placeholder(frame, image_area, "Plakát nelze načíst", &theme),
        }

        let label = status_label(entry.calculated_status, ex.confirmed);
        let mut details = vec![
            Line::from(Span::styled(
                ex.title.clone(),
                Style::default().fg(theme.fg0).add_modifier(Modifier::BOLD),
            )),
            Line::from(vec![
                Span::styled(
                    format!("[{label}] "),
                    Style::default()
                        .fg(theme.upcoming)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(ex.date_display(), Style::default().fg(theme.fg1)),
            ]),
            Line::from(Span::styled(
                ex.location_display(),
                Style::default().fg(theme.grey1),
            )),
        ];
        if let Some(days) = days_info(&ex, today) {
            details.push(Line::from(Span::styled(
                days,
                Style::default().fg(theme.amber),
            )));
        }
        if vernissage_visible(&ex, today) {
            if let Some(vernissage) = &ex.vernissage {
                details.push(Line::from(Span::styled(
                    format!("Vernisáž: {vernissage}"),
                    Style::default().fg(theme.fg1),
                )));
            }
        }
        details.push(Line::from(Span::styled(
            format!("{} / {}", index + 1, active.len()),
            Style::default().fg(theme.grey0),
        )));

        frame.render_widget(
            Paragraph::new(details).alignment(ratatui::layout::Alignment::Center),
            details_area,
        );

        render_controls(frame, controls_area, &app.poster_viewer, &theme);
    }
}
