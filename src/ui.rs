//! UI rendering helpers for the terminal user interface.
//!
//! The page (header, featured tracks, controls) is always drawn; the floating
//! player surface and the notice toast are drawn on top of it from a
//! [`PlayerView`] projection.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Gauge, List, ListItem, Padding, Paragraph, Wrap},
};
use std::{collections::BTreeMap, sync::LazyLock};

use crate::config::UiSettings;
use crate::player::{NoticeLevel, PlayerView};
use crate::playlist::Playlist;

static CONTROLS_MAP: LazyLock<BTreeMap<&'static str, &'static str>> = LazyLock::new(|| {
    let mut map = BTreeMap::new();
    map.insert("enter/o", "listen");
    map.insert("space/p", "play/pause");
    map.insert("h/l", "prev/next");
    map.insert("v", "show player");
    map.insert("x/esc", "close player");
    map.insert("q", "quit");
    map
});

fn controls_text() -> String {
    let order = ["enter/o", "space/p", "h/l", "v", "x/esc", "q"];
    order
        .iter()
        .filter_map(|k| CONTROLS_MAP.get(k).map(|v| format!("[{k}] {v}")))
        .collect::<Vec<String>>()
        .join(" | ")
}

/// Floating rectangle anchored to the bottom-right corner of `r`.
fn bottom_right_rect(width: u16, height: u16, r: Rect) -> Rect {
    let width = width.min(r.width.saturating_sub(2)).max(10);
    let height = height.min(r.height.saturating_sub(1)).max(3);
    Rect {
        x: r.x + r.width.saturating_sub(width + 1),
        y: r.y + r.height.saturating_sub(height),
        width,
        height,
    }
}

/// Floating rectangle anchored to the top-right corner of `r`.
fn top_right_rect(width: u16, height: u16, r: Rect) -> Rect {
    let width = width.min(r.width.saturating_sub(2)).max(10);
    let height = height.min(r.height).max(3);
    Rect {
        x: r.x + r.width.saturating_sub(width + 1),
        y: r.y,
        width,
        height,
    }
}

fn notice_color(level: NoticeLevel) -> Color {
    match level {
        NoticeLevel::Warning => Color::Yellow,
        NoticeLevel::Error => Color::Red,
    }
}

/// Render the page, then the player surface and notice when present.
pub fn draw(frame: &mut Frame, view: &PlayerView, playlist: &Playlist, ui_settings: &UiSettings) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(3),
        ])
        .split(frame.area());

    let header = Paragraph::new(ui_settings.header_text.as_str())
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" jukebar ")
                .title_alignment(Alignment::Center),
        );
    frame.render_widget(header, chunks[0]);

    let items: Vec<ListItem> = playlist
        .tracks()
        .iter()
        .enumerate()
        .map(|(i, track)| {
            let marker = match (i == view.current, view.playing) {
                (true, true) => "♪ ",
                (true, false) => "› ",
                _ => "  ",
            };
            let line = Line::from(vec![
                Span::raw(marker),
                Span::styled(track.title.as_str(), Style::default().bold()),
                Span::raw("  "),
                Span::styled(track.artist.as_str(), Style::default().dim()),
            ]);
            ListItem::new(line)
        })
        .collect();
    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" featured tracks ")
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(list, chunks[1]);

    let footer = Paragraph::new(controls_text())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" controls ")
                .padding(Padding::horizontal(1)),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(footer, chunks[2]);

    if view.visible {
        draw_player(frame, view, chunks[1]);
    }

    if let Some(notice) = &view.notice {
        let area = top_right_rect(48, 4, chunks[1]);
        let color = notice_color(notice.level);
        frame.render_widget(Clear, area);
        let toast = Paragraph::new(notice.message.as_str())
            .style(Style::default().fg(color))
            .block(
                Block::bordered()
                    .border_style(Style::default().fg(color))
                    .padding(Padding::horizontal(1)),
            )
            .wrap(Wrap { trim: true });
        frame.render_widget(toast, area);
    }
}

fn draw_player(frame: &mut Frame, view: &PlayerView, area: Rect) {
    let popup = bottom_right_rect(46, 9, area);
    frame.render_widget(Clear, popup);

    let block = Block::bordered()
        .title(" now playing ")
        .title_bottom(Line::from(" [x] close ").right_aligned())
        .padding(Padding::horizontal(1));
    let inner = block.inner(popup);
    frame.render_widget(block, popup);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(inner);

    let cover = if view.cover.is_empty() {
        "no artwork".to_string()
    } else {
        format!("art: {}", view.cover)
    };
    frame.render_widget(
        Paragraph::new(view.title.as_str()).bold(),
        rows[0],
    );
    frame.render_widget(Paragraph::new(view.artist.as_str()), rows[1]);
    frame.render_widget(Paragraph::new(cover).dim(), rows[2]);

    let transport = format!("⏮   {}   ⏭", view.icon.glyph());
    frame.render_widget(
        Paragraph::new(transport).alignment(Alignment::Center),
        rows[3],
    );

    let progress = Gauge::default()
        .gauge_style(Style::default().fg(Color::Cyan))
        .ratio((view.percent / 100.0).clamp(0.0, 1.0))
        .label(format!("{} / {}", view.elapsed, view.total));
    frame.render_widget(progress, rows[4]);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn controls_text_lists_every_binding_in_order() {
        let text = controls_text();
        assert!(text.starts_with("[enter/o] listen"));
        assert!(text.ends_with("[q] quit"));
        assert_eq!(text.matches(" | ").count(), CONTROLS_MAP.len() - 1);
    }

    #[test]
    fn floating_rects_stay_inside_area() {
        let area = Rect::new(0, 3, 80, 20);
        let player = bottom_right_rect(46, 9, area);
        assert!(player.x + player.width <= area.x + area.width);
        assert!(player.y + player.height <= area.y + area.height);

        let toast = top_right_rect(48, 4, area);
        assert_eq!(toast.y, area.y);
        assert!(toast.x + toast.width <= area.x + area.width);
    }
}
