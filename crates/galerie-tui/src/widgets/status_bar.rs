use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::app::{App, Mode};

pub struct StatusBarWidget;

impl StatusBarWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &app.theme;
        let mode_str = match app.mode {
            Mode::Browse => "PROCHÁZENÍ",
            Mode::Menu => "MENU",
            Mode::ArtworkViewer => "DÍLO",
            Mode::PosterViewer => "PLAKÁT",
        };

        let status_text = if let Some(msg) = &app.status_message {
            format!(" {msg}")
        } else {
            format!(
                " {} | Výstavy: {} | Díla: {}",
                mode_str,
                app.exhibitions.len(),
                app.artworks.len()
            )
        };

        // Back-to-top hint appears once the hero section is scrolled away
        let scrolled_deep =
            app.animator.current_scroll() > app.layout.viewport_height();
        let help_hint = match app.mode {
            Mode::Browse if scrolled_deep => {
                " t:nahoru ↑ q:konec j/k:rolování 1-5:sekce m:menu Enter:dílo "
            }
            Mode::Browse => " q:konec j/k:rolování 1-5:sekce m:menu Enter:dílo ",
            Mode::Menu => " j/k:výběr Enter:přejít Esc:zavřít ",
            Mode::ArtworkViewer | Mode::PosterViewer => {
                " ←/→:listování Tab:ovládání Enter:potvrdit Esc:zavřít "
            }
        };

        let padding_len = (area.width as usize)
            .saturating_sub(status_text.width() + help_hint.width());

        let line = Line::from(vec![
            Span::styled(
                status_text,
                Style::default().fg(theme.fg0).bg(theme.bg2),
            ),
            Span::styled(" ".repeat(padding_len), Style::default().bg(theme.bg2)),
            Span::styled(
                help_hint,
                Style::default().fg(theme.grey1).bg(theme.bg2),
            ),
        ]);

        frame.render_widget(Paragraph::new(line), area);
    }
}
