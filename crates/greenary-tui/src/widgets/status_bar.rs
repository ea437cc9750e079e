use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;

pub struct StatusBarWidget;

impl StatusBarWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &app.theme;

        let status_text = if let Some(msg) = &app.status_message {
            format!(" {}", msg)
        } else {
            let variant = app
                .hero
                .active_variant()
                .map(|v| v.name.as_str())
                .unwrap_or("");
            let mode = if app.hero.is_story_mode() { "STORY" } else { "BROWSE" };
            let progress = app.hero.progress();
            format!(
                " {} | {} | frames {}/{} | {} products",
                mode,
                variant,
                progress.settled(),
                progress.total(),
                app.cards.len()
            )
        };

        let help_hint = " h/l:switch j/k:scroll p:products e:enquire ";
        let used = status_text.chars().count() + help_hint.len();
        let padding_len = (area.width as usize).saturating_sub(used);

        let line = Line::from(vec![
            Span::styled(status_text, Style::default().fg(theme.fg0).bg(theme.bg2)),
            Span::styled(" ".repeat(padding_len), Style::default().bg(theme.bg2)),
            Span::styled(help_hint, Style::default().fg(theme.grey1).bg(theme.bg2)),
        ]);

        frame.render_widget(Paragraph::new(line), area);
    }
}
