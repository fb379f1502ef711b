//! Layout rendering (header with breadcrumb, status bar)

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use ratatui::widgets::Padding;

use discography_rs::model::{AppModel, SortMode, View};

pub fn render_header(frame: &mut Frame, area: Rect, model: &AppModel) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),     // Breadcrumb
            Constraint::Length(34), // Sort + ranking mode
        ])
        .split(area);

    let mut crumbs = vec![model.catalog().artist().name.clone()];
    let view = model.navigation().view();
    if view.depth() >= View::Albums.depth() {
        crumbs.push("Albums".to_string());
    }
    if let Some(album) = model.selected_album() {
        crumbs.push(album.name.clone());
    }
    if let Some(song) = model.selected_song() {
        crumbs.push(song.title.clone());
    }

    let mut spans: Vec<Span> = Vec::new();
    let last = crumbs.len() - 1;
    for (i, crumb) in crumbs.into_iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" › ", Style::default().fg(Color::DarkGray)));
        }
        let style = if i == last {
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        spans.push(Span::styled(crumb, style));
    }

    let back_hint = if view == View::Artist { "" } else { " (Esc: back) " };
    let breadcrumb = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", view.title()))
            .title_bottom(back_hint)
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(breadcrumb, chunks[0]);

    let rankings = model.rankings();
    let sort_icon = match rankings.sort_mode() {
        SortMode::ReleaseDate => "📅",
        SortMode::Ranking => "🏆",
    };
    let mut mode_spans = vec![Span::styled(
        format!("{} {}", sort_icon, rankings.sort_mode().label()),
        Style::default().fg(Color::Cyan),
    )];
    if rankings.is_ranking_mode() {
        mode_spans.push(Span::raw("  "));
        mode_spans.push(Span::styled(
            "RANKING",
            Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ));
    }
    let modes = Paragraph::new(Line::from(mode_spans))
        .block(Block::default().borders(Borders::ALL).title(" Sort "));
    frame.render_widget(modes, chunks[1]);
}

pub fn render_status_bar(frame: &mut Frame, area: Rect, model: &AppModel) {
    let ui_state = &model.ui_state;

    let line = if let Some(drag) = ui_state.drag {
        let arrow = if drag.dx > 0.0 { "←" } else { "→" };
        Line::from(Span::styled(
            format!("Dragging {} {:.0}px  (↕ {:.0}px)", arrow, drag.dx.abs(), drag.dy.abs()),
            Style::default().fg(Color::Yellow),
        ))
    } else if let Some(message) = &ui_state.status_message {
        Line::from(Span::styled(message.clone(), Style::default().fg(Color::Green)))
    } else {
        Line::from(Span::styled(
            key_hints(model.navigation().view()),
            Style::default().fg(Color::DarkGray),
        ))
    };

    let status = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(status, area);
}

fn key_hints(view: View) -> &'static str {
    match view {
        View::Artist => "Enter: view albums • s: sort • r: ranking mode • h: help • q: quit",
        View::Albums => "↑/↓: move • Enter: open album • Space: rank • Esc: back • h: help",
        View::Songs => "←/→ or drag: switch album • Enter: song details • Space: rank • Esc: back",
        View::SongDetails => "←/→ or drag: switch song • Space: rank • Esc: back • h: help",
    }
}
