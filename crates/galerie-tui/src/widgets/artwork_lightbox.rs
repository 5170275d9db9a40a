use std::time::Instant;

use image::{DynamicImage, GenericImageView};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::app::App;
use crate::lightbox::{Control, Lightbox};
use crate::theme::Theme;

pub struct ArtworkLightboxWidget;

impl ArtworkLightboxWidget {
    /// Render the fullscreen artwork viewer over the page.
    pub fn render(frame: &mut Frame, area: Rect, app: &mut App, now: Instant) {
        let Some(index) = app.artwork_viewer.selected() else {
            return;
        };
        let Some(artwork) = app.artworks.get(index).cloned() else {
            return;
        };
        let theme = app.theme.clone();

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
        // Details and controls take the bottom rows, image gets the rest
        let details_height = 3;
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

        // The swap animation nudges the image sideways
        let shift = (app.artwork_viewer.transition_offset(now)
            * (image_area.width as f64 / 6.0)) as i32;
        let shifted = shift_area(image_area, shift).intersection(inner);

        match app.images.get(&artwork.image) {
            Some(img) => {
                let img = img.clone();
                render_halfblocks(frame, shifted, &img);
            }
            None => render_placeholder(frame, shifted, "Obraz nelze načíst", &theme),
        }

        let details = vec![
            Line::from(Span::styled(
                format!("{} ({})", artwork.title, artwork.year),
                Style::default().fg(theme.fg0).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                format!("{} · {}", artwork.medium, artwork.dimensions),
                Style::default().fg(theme.grey1),
            )),
            Line::from(Span::styled(
                format!("{} / {}", index + 1, app.artworks.len()),
                Style::default().fg(theme.grey0),
            )),
        ];
        frame.render_widget(
            Paragraph::new(details).alignment(ratatui::layout::Alignment::Center),
            details_area,
        );

        render_controls(frame, controls_area, &app.artwork_viewer, &theme);
    }
}

/// Centered modal covering most of the screen. Never larger than the
/// screen itself, so tiny terminals get a full-screen modal.
pub(super) fn modal_area(area: Rect) -> Rect {
    let width = (area.width * 9 / 10).max(20).min(area.width);
    let height = (area.height * 9 / 10).max(10).min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

pub(super) fn shrink(area: Rect, by: u16) -> Rect {
    Rect {
        x: area.x + by,
        y: area.y + by,
        width: area.width.saturating_sub(by * 2),
        height: area.height.saturating_sub(by * 2),
    }
}

fn shift_area(area: Rect, dx: i32) -> Rect {
    Rect {
        x: (area.x as i32 + dx).max(0) as u16,
        ..area
    }
}

pub(super) fn render_controls(frame: &mut Frame, area: Rect, viewer: &Lightbox, theme: &Theme) {
    let focused = viewer.focused_control();
    let control = |ctrl: Control, label: &str| -> Span<'static> {
        let style = if ctrl == focused {
            Style::default()
                .fg(theme.bg0)
                .bg(theme.accent)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.fg1)
        };
        Span::styled(format!(" {label} "), style)
    };

    let line = Line::from(vec![
        control(Control::Close, "✕ Zavřít"),
        Span::raw("  "),
        control(Control::Prev, "‹ Předchozí"),
        Span::raw("  "),
        control(Control::Next, "Další ›"),
        Span::raw("  "),
        control(Control::Contact, "Kontakt"),
    ]);
    frame.render_widget(
        Paragraph::new(line).alignment(ratatui::layout::Alignment::Center),
        area,
    );
}

pub(super) fn render_placeholder(frame: &mut Frame, area: Rect, message: &str, theme: &Theme) {
    let message = Line::from(Span::styled(
        message.to_string(),
        Style::default()
            .fg(theme.grey1)
            .add_modifier(Modifier::ITALIC),
    ));
    let centered = Rect {
        x: area.x,
        y: area.y + area.height / 2,
        width: area.width,
        height: 1,
    };
    frame.render_widget(
        Paragraph::new(message).alignment(ratatui::layout::Alignment::Center),
        centered,
    );
}

/// Render an image with halfblock characters, two pixels per cell row.
pub(super) fn render_halfblocks(frame: &mut Frame, area: Rect, img: &DynamicImage) {
    let target_width = area.width as u32;
    let target_height = (area.height as u32) * 2;
    if target_width == 0 || target_height == 0 {
        return;
    }

    let (img_width, img_height) = img.dimensions();
    let scale_w = target_width as f32 / img_width as f32;
    let scale_h = target_height as f32 / img_height as f32;
    let scale = scale_w.min(scale_h);

    let new_width = ((img_width as f32 * scale) as u32).max(1);
    let new_height = ((img_height as f32 * scale) as u32).max(1);

    let resized = img.resize_exact(new_width, new_height, image::imageops::FilterType::Triangle);
    let rgba = resized.to_rgba8();

    let x_offset = (target_width.saturating_sub(new_width)) / 2;
    let y_offset = (area.height as u32).saturating_sub(new_height / 2) / 2;

    for row in 0..(new_height / 2) {
        let y = row * 2;
        let mut spans: Vec<Span> = Vec::with_capacity(target_width as usize);

        if x_offset > 0 {
            spans.push(Span::raw(" ".repeat(x_offset as usize)));
        }

        for x in 0..new_width {
            let top_pixel = rgba.get_pixel(x, y);
            let bottom_pixel = if y + 1 < new_height {
                rgba.get_pixel(x, y + 1)
            } else {
                top_pixel
            };

            let top_color = Color::Rgb(top_pixel[0], top_pixel[1], top_pixel[2]);
            let bottom_color = Color::Rgb(bottom_pixel[0], bottom_pixel[1], bottom_pixel[2]);

            spans.push(Span::styled(
                "▀",
                Style::default().fg(top_color).bg(bottom_color),
            ));
        }

        let line_area = Rect {
            x: area.x,
            y: area.y + y_offset as u16 + row as u16,
            width: area.width,
            height: 1,
        };
        if line_area.y < area.y + area.height {
            frame.render_widget(Paragraph::new(Line::from(spans)), line_area);
        }
    }
}
