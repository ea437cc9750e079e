use greenary_core::hero::MetadataElement;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Clear, Gauge, Paragraph, Wrap},
    Frame,
};

use super::halfblock;
use crate::app::App;
use crate::theme::Theme;

const BRAND: &str = "GREENARY ORGANICS";

pub struct HeroWidget;

impl HeroWidget {
    /// Render the full-screen hero: frame canvas, navbar, text overlay and loaders
    pub fn render(frame: &mut Frame, area: Rect, app: &mut App) {
        let theme = app.theme.clone();
        frame.render_widget(Block::default().style(Style::default().bg(theme.bg0)), area);

        let current = app.hero.surface().frame.as_ref().map(|(_, image)| image.clone());
        if let Some(image) = current {
            let pixels = app.canvas_cache.pixels(&image, area.width, area.height);
            halfblock::paint(frame.buffer_mut(), area, pixels, 1.0, theme.bg0);
        }

        let surface = app.hero.surface();
        if surface.loader_visible {
            Self::render_loader(frame, area, surface.progress, &theme);
            return;
        }

        Self::render_navbar(frame, area, app, &theme);
        if surface.effects.overlay_visible {
            Self::render_overlay(frame, area, app, &theme);
        }
    }

    fn render_navbar(frame: &mut Frame, area: Rect, app: &App, theme: &Theme) {
        let surface = app.hero.surface();
        let bar = Rect::new(area.x, area.y, area.width, 1.min(area.height));

        let style = if surface.effects.navbar_scrolled {
            Style::default().fg(theme.fg0).bg(theme.bg1)
        } else {
            Style::default().fg(theme.fg0)
        };

        let mut spans = vec![Span::styled(
            format!(" {} ", BRAND),
            style.add_modifier(Modifier::BOLD),
        )];
        if surface.mini_loader {
            spans.push(Span::styled(" ◌ loading ", style.fg(theme.accent)));
        }
        frame.render_widget(Paragraph::new(Line::from(spans)).style(style), bar);

        let hint = " t:theme  w:contact  q:quit ";
        let hint_area = Rect::new(
            area.x + area.width.saturating_sub(hint.len() as u16),
            area.y,
            (hint.len() as u16).min(area.width),
            1.min(area.height),
        );
        frame.render_widget(Paragraph::new(Span::styled(hint, style.fg(theme.grey1))), hint_area);
    }

    fn render_overlay(frame: &mut Frame, area: Rect, app: &App, theme: &Theme) {
        let surface = app.hero.surface();
        let count = app.hero.variants().len();

        let mut lines = Vec::new();
        if surface.nav_visible && count > 0 {
            lines.push(Line::from(vec![
                Span::styled(
                    surface.index.clone(),
                    Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
                ),
                Span::styled(format!(" / {:02}", count), Style::default().fg(theme.grey1)),
            ]));
        }
        if surface.is_visible(MetadataElement::Name) {
            lines.push(Line::from(Span::styled(
                surface.name.clone(),
                Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
            )));
        } else {
            lines.push(Line::default());
        }
        if surface.is_visible(MetadataElement::Subtitle) {
            lines.push(Line::from(Span::styled(
                surface.subtitle.clone(),
                Style::default().fg(theme.fg1).add_modifier(Modifier::ITALIC),
            )));
        } else {
            lines.push(Line::default());
        }
        lines.push(Line::default());
        if surface.is_visible(MetadataElement::Description) {
            lines.push(Line::from(Span::styled(
                surface.description.clone(),
                Style::default().fg(theme.fg0),
            )));
        }
        if surface.story_link.is_some() && surface.is_visible(MetadataElement::StoryLink) {
            lines.push(Line::default());
            lines.push(Line::from(Span::styled(
                " s  Explore the story → ",
                Style::default().fg(theme.bg0).bg(theme.accent),
            )));
        }

        let width = area.width.saturating_sub(4).min(64);
        let height = 12.min(area.height.saturating_sub(3));
        let panel = Rect::new(
            area.x + 2,
            area.y + area.height.saturating_sub(height + 2),
            width,
            height,
        );
        frame.render_widget(Clear, panel);
        frame.render_widget(
            Paragraph::new(lines)
                .wrap(Wrap { trim: true })
                .block(Block::default().style(Style::default().bg(theme.bg0))),
            panel,
        );

        let bottom = area.y + area.height.saturating_sub(1);
        if surface.nav_visible {
            let nav = " ◀ h   l ▶ ";
            let nav_area = Rect::new(
                area.x + area.width.saturating_sub(nav.chars().count() as u16 + 2),
                bottom,
                nav.chars().count() as u16,
                1,
            );
            frame.render_widget(
                Paragraph::new(Span::styled(nav, Style::default().fg(theme.fg0).bg(theme.bg1))),
                nav_area,
            );
        }

        let prompt = Rect::new(area.x, bottom, area.width, 1);
        frame.render_widget(
            Paragraph::new(Span::styled("scroll ↓", Style::default().fg(theme.grey1)))
                .alignment(Alignment::Center),
            prompt,
        );
    }

    fn render_loader(frame: &mut Frame, area: Rect, percent: u8, theme: &Theme) {
        frame.render_widget(Clear, area);
        frame.render_widget(Block::default().style(Style::default().bg(theme.bg0)), area);

        let middle = area.y + area.height / 2;
        let title = Rect::new(area.x, middle.saturating_sub(2), area.width, 1);
        frame.render_widget(
            Paragraph::new(Span::styled(
                BRAND,
                Style::default().fg(theme.green).add_modifier(Modifier::BOLD),
            ))
            .alignment(Alignment::Center),
            title,
        );

        let width = area.width.saturating_sub(4).min(40);
        let bar = Rect::new(
            area.x + (area.width.saturating_sub(width)) / 2,
            middle.min(area.y + area.height.saturating_sub(1)),
            width,
            1,
        );
        frame.render_widget(
            Gauge::default()
                .gauge_style(Style::default().fg(theme.accent).bg(theme.bg2))
                .percent(percent.min(100) as u16)
                .label(format!("{}%", percent)),
            bar,
        );
    }
}
