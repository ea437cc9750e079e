use std::time::Instant;

use greenary_core::catalog::ProductCard;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
    Frame,
};

use super::halfblock::{self, fade};
use crate::app::{card_offset, App, CardImageState, CARD_HEIGHT, CATALOG_FOOTER, CATALOG_HEADER};
use crate::theme::Theme;

/// Thumbnail size in cells
pub const THUMB_COLS: u16 = 16;
pub const THUMB_ROWS: u16 = 8;

pub struct CatalogWidget;

impl CatalogWidget {
    /// Render the catalog page into `area`, skipping its first `offset` rows.
    /// Only sections that reach the screen are drawn.
    pub fn render(frame: &mut Frame, area: Rect, app: &App, offset: u16, now: Instant) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let theme = &app.theme;
        let width = area.width;
        let window = (offset as usize, offset as usize + area.height as usize);

        Self::render_section(frame, area, window, 0, CATALOG_HEADER, |buf, rect| {
            Block::default()
                .style(Style::default().bg(theme.bg0))
                .render(rect, buf);
            Self::render_header(buf, rect, theme);
        });

        for (index, card) in app.cards.iter().enumerate() {
            let top = card_offset(index);
            if top >= window.1 {
                break;
            }
            Self::render_section(frame, area, window, top, CARD_HEIGHT, |buf, rect| {
                Block::default()
                    .style(Style::default().bg(theme.bg0))
                    .render(rect, buf);
                Self::render_card(
                    buf,
                    Rect::new(1, 0, width.saturating_sub(2), CARD_HEIGHT),
                    card,
                    app.card_images.get(index),
                    app.reveal.opacity(index, now),
                    index == app.selected_card,
                    theme,
                );
            });
        }

        let footer_top = card_offset(app.cards.len());
        Self::render_section(frame, area, window, footer_top, CATALOG_FOOTER, |buf, rect| {
            Self::render_footer(buf, rect, app);
        });
    }

    /// Draw one section of `height` rows starting at page row `top` into its
    /// own buffer, then copy the rows inside `window` onto the screen
    fn render_section<F>(
        frame: &mut Frame,
        area: Rect,
        window: (usize, usize),
        top: usize,
        height: u16,
        draw: F,
    ) where
        F: FnOnce(&mut Buffer, Rect),
    {
        let bottom = top + height as usize;
        if bottom <= window.0 || top >= window.1 {
            return;
        }
        let rect = Rect::new(0, 0, area.width, height);
        let mut buf = Buffer::empty(rect);
        draw(&mut buf, rect);

        let screen = frame.buffer_mut();
        for page_row in top.max(window.0)..bottom.min(window.1) {
            let source_y = (page_row - top) as u16;
            let target_y = area.y + (page_row - window.0) as u16;
            for col in 0..area.width {
                if let (Some(source), Some(target)) = (
                    buf.cell((col, source_y)),
                    screen.cell_mut((area.x + col, target_y)),
                ) {
                    *target = source.clone();
                }
            }
        }
    }

    fn render_header(buf: &mut Buffer, area: Rect, theme: &Theme) {
        let lines = vec![
            Line::default(),
            Line::from(Span::styled(
                "OUR PRODUCTS",
                Style::default().fg(theme.green).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "Tab/n select · e enquire · o details",
                Style::default().fg(theme.grey1),
            )),
        ];
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .render(area, buf);
    }

    fn render_card(
        buf: &mut Buffer,
        area: Rect,
        card: &ProductCard,
        image: Option<&CardImageState>,
        opacity: f64,
        selected: bool,
        theme: &Theme,
    ) {
        if opacity <= 0.0 {
            return;
        }
        let tint = |color: Color| fade(color, theme.bg0, opacity);

        let border = if selected { theme.accent } else { theme.grey0 };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(tint(border)))
            .style(Style::default().bg(theme.bg0));
        let inner = block.inner(area);
        block.render(area, buf);

        let thumb = Rect::new(inner.x, inner.y, THUMB_COLS.min(inner.width), THUMB_ROWS.min(inner.height));
        match image {
            Some(CardImageState::Ready(pixels)) => {
                halfblock::paint(buf, thumb, &pixels.to_rgba8(), opacity, theme.bg0);
            }
            Some(CardImageState::Loading) => {
                Paragraph::new(Span::styled("…", Style::default().fg(tint(theme.grey1))))
                    .alignment(Alignment::Center)
                    .render(thumb, buf);
            }
            _ => {
                Block::default()
                    .style(Style::default().bg(tint(theme.bg2)))
                    .render(thumb, buf);
            }
        }

        let text_area = Rect::new(
            inner.x + thumb.width + 2,
            inner.y,
            inner.width.saturating_sub(thumb.width + 2),
            inner.height,
        );

        let name_style = if selected {
            Style::default().fg(tint(theme.accent)).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(tint(theme.fg0)).add_modifier(Modifier::BOLD)
        };
        let mut lines = vec![
            Line::from(Span::styled(card.name.clone(), name_style)),
            Line::from(Span::styled(
                card.price_line(),
                Style::default().fg(tint(theme.green)),
            )),
            Line::from(Span::styled(
                card.description.clone(),
                Style::default().fg(tint(theme.fg1)),
            )),
        ];
        for benefit in card.benefits.iter().take(3) {
            lines.push(Line::from(vec![
                Span::styled("✓ ", Style::default().fg(tint(theme.green))),
                Span::styled(benefit.clone(), Style::default().fg(tint(theme.fg1))),
            ]));
        }
        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .render(
                Rect::new(text_area.x, text_area.y, text_area.width, text_area.height.saturating_sub(1)),
                buf,
            );

        let actions = Line::from(vec![
            Span::styled(" e ", Style::default().fg(theme.bg0).bg(tint(theme.green))),
            Span::styled(" Enquire on WhatsApp  ", Style::default().fg(tint(theme.fg0))),
            Span::styled(" o ", Style::default().fg(theme.bg0).bg(tint(theme.grey1))),
            Span::styled(" View details", Style::default().fg(tint(theme.fg0))),
        ]);
        if text_area.height > 0 {
            Paragraph::new(actions).render(
                Rect::new(text_area.x, text_area.y + text_area.height - 1, text_area.width, 1),
                buf,
            );
        }
    }

    fn render_footer(buf: &mut Buffer, area: Rect, app: &App) {
        let theme = &app.theme;
        let contact = &app.site.contact;
        let mut details = Vec::new();
        for field in [&contact.display_phone, &contact.email, &contact.instagram] {
            if !field.is_empty() {
                if !details.is_empty() {
                    details.push(Span::styled(" · ", Style::default().fg(theme.grey0)));
                }
                details.push(Span::styled(field.clone(), Style::default().fg(theme.fg1)));
            }
        }

        let lines = vec![
            Line::default(),
            Line::from(Span::styled(
                "GET IN TOUCH",
                Style::default().fg(theme.green).add_modifier(Modifier::BOLD),
            )),
            Line::from(details),
            Line::default(),
            Line::from(Span::styled(
                " w  Chat on WhatsApp ",
                Style::default().fg(theme.bg0).bg(theme.green),
            )),
        ];
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::default().style(Style::default().bg(theme.bg1)))
            .render(area, buf);
    }
}
