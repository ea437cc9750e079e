use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::app::App;

pub struct ContactMenuWidget;

impl ContactMenuWidget {
    /// Floating contact menu, anchored to the bottom-right corner
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &app.theme;
        let contact = &app.site.contact;

        let width = 44u16.min(area.width.saturating_sub(2));
        let height = 9u16.min(area.height.saturating_sub(2));
        let popup = Rect::new(
            area.x + area.width.saturating_sub(width + 1),
            area.y + area.height.saturating_sub(height + 1),
            width,
            height,
        );
        frame.render_widget(Clear, popup);

        let block = Block::default()
            .title(" Contact ")
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.green))
            .style(Style::default().bg(theme.bg1));
        let inner = block.inner(popup);
        frame.render_widget(block, popup);

        let label = Style::default().fg(theme.grey1);
        let value = Style::default().fg(theme.fg0);
        let lines = vec![
            Line::from(vec![
                Span::styled("Phone     ", label),
                Span::styled(contact.display_phone.clone(), value),
            ]),
            Line::from(vec![
                Span::styled("Email     ", label),
                Span::styled(contact.email.clone(), value),
            ]),
            Line::from(vec![
                Span::styled("Instagram ", label),
                Span::styled(contact.instagram.clone(), value),
            ]),
            Line::default(),
            Line::from(vec![
                Span::styled(
                    " Enter ",
                    Style::default()
                        .fg(theme.bg0)
                        .bg(theme.green)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(" WhatsApp  ", value),
                Span::styled(" Esc ", Style::default().fg(theme.bg0).bg(theme.grey1)),
                Span::styled(" close", value),
            ]),
        ];

        frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner);
    }
}
