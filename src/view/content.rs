//! Main content area rendering: one function per drill-down level

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, ListItem, Paragraph, Wrap},
    Frame,
};
use ratatui::widgets::Padding;

use discography_rs::model::{Album, AppModel, RankNamespace, Shelf, Song, View};
use super::utils::{
    album_color, calculate_num_width, format_duration, rank_badge, render_scrollable_list,
    truncate_string,
};

pub fn render_main_content(frame: &mut Frame, area: Rect, model: &AppModel) {
    let shelf = model.shelf();
    match model.navigation().view() {
        View::Artist => render_artist(frame, area, model),
        View::Albums => render_albums(frame, area, model, &shelf),
        View::Songs => render_songs(frame, area, model, &shelf),
        View::SongDetails => render_song_details(frame, area, model, &shelf),
    }
}

fn render_artist(frame: &mut Frame, area: Rect, model: &AppModel) {
    let catalog = model.catalog();
    let artist = catalog.artist();
    let first = artist.albums.first().map_or(0, |a| a.release_year);
    let latest = artist.albums.last().map_or(0, |a| a.release_year);

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            artist.name.clone(),
            Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(format!(
            "{} albums • {} songs • {}–{}",
            artist.albums.len(),
            catalog.song_total(),
            first,
            latest
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Press Enter to view albums",
            Style::default().fg(Color::Green),
        )),
    ];

    let card = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Artist ")
            .border_style(Style::default().fg(Color::Green)),
    );
    frame.render_widget(card, area);
}

fn render_albums(frame: &mut Frame, area: Rect, model: &AppModel, shelf: &Shelf) {
    let cursor = model.ui_state.album_cursor;
    let rankings = model.rankings();
    let content_width = area.width.saturating_sub(4) as usize;
    let name_width = content_width.saturating_sub(4 + 2 + 6 + 2 + 9);

    let items: Vec<ListItem> = shelf
        .albums()
        .enumerate()
        .map(|(i, album)| {
            let rank = rankings.rank(&album.id, RankNamespace::Album);
            let line = Line::from(vec![
                Span::styled("██ ", Style::default().fg(album_color(album))),
                Span::styled(rank_badge(rank), Style::default().fg(Color::Yellow)),
                Span::raw(" "),
                Span::raw(truncate_string(&album.name, name_width)),
                Span::styled(
                    format!("  {}  {:>3} songs", album.release_year, album.songs.len()),
                    Style::default().fg(Color::DarkGray),
                ),
            ]);
            ListItem::new(line).style(row_style(i == cursor))
        })
        .collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Albums ")
        .padding(Padding::horizontal(1))
        .border_style(Style::default().fg(Color::Green));
    render_scrollable_list(frame, area, items, cursor, block);
}

fn render_songs(frame: &mut Frame, area: Rect, model: &AppModel, shelf: &Shelf) {
    let Some(album_index) = model.navigation().selected_album() else {
        render_placeholder(frame, area, "No album selected");
        return;
    };
    let Some(album) = shelf.album(album_index) else {
        render_placeholder(frame, area, "No album selected");
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Album tabs + pagination dots
            Constraint::Min(0),    // Song list
        ])
        .split(area);

    let tab_names: Vec<(String, Color)> = shelf
        .albums()
        .map(|a| (a.name.clone(), album_color(a)))
        .collect();
    render_tabs(frame, chunks[0], " Albums (←/→ or drag) ", &tab_names, album_index);

    let songs = shelf.songs(album_index);
    let cursor = model.ui_state.song_cursor;
    let rankings = model.rankings();
    let num_width = calculate_num_width(songs.len());
    let content_width = chunks[1].width.saturating_sub(4) as usize;
    let title_width = content_width.saturating_sub(num_width + 2 + 4 + 1 + 8);

    let items: Vec<ListItem> = songs
        .iter()
        .enumerate()
        .map(|(i, song)| {
            let rank = rankings.rank(&song.id, RankNamespace::Song);
            let line = Line::from(vec![
                Span::styled(
                    format!("{:>width$}  ", song.track_number, width = num_width),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(rank_badge(rank), Style::default().fg(Color::Yellow)),
                Span::raw(" "),
                Span::raw(truncate_string(&song.title, title_width)),
                Span::styled(
                    format!("{:>8}", song.duration),
                    Style::default().fg(Color::DarkGray),
                ),
            ]);
            ListItem::new(line).style(row_style(i == cursor))
        })
        .collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ({}) ", album.name, album.release_year))
        .padding(Padding::horizontal(1))
        .border_style(Style::default().fg(album_color(album)));
    render_scrollable_list(frame, chunks[1], items, cursor, block);
}

fn render_song_details(frame: &mut Frame, area: Rect, model: &AppModel, shelf: &Shelf) {
    let nav = model.navigation();
    let (Some(album_index), Some(song_index)) = (nav.selected_album(), nav.selected_song()) else {
        render_placeholder(frame, area, "No song selected");
        return;
    };
    let (Some(album), Some(song)) = (shelf.album(album_index), shelf.song(album_index, song_index))
    else {
        render_placeholder(frame, area, "No song selected");
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Song tabs
            Constraint::Min(0),    // Details card
        ])
        .split(area);

    let color = album_color(album);
    let tab_names: Vec<(String, Color)> = shelf
        .songs(album_index)
        .iter()
        .map(|s| (format!("{}. {}", s.track_number, s.title), color))
        .collect();
    render_tabs(frame, chunks[0], " Songs (←/→ or drag) ", &tab_names, song_index);

    let rank = model.rankings().rank(&song.id, RankNamespace::Song);
    frame.render_widget(details_card(album, song, rank, color), chunks[1]);
}

fn details_card<'a>(album: &'a Album, song: &'a Song, rank: Option<u32>, color: Color) -> Paragraph<'a> {
    let label = Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD);
    let heading = Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD);
    let total = album.songs.len();

    let lines = vec![
        Line::from(Span::styled(
            song.title.as_str(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(format!("{} • Track {}", album.name, song.track_number)),
        Line::from(""),
        Line::from(vec![
            Span::styled("Duration: ", label),
            Span::raw(format_duration(song.duration_secs())),
            Span::raw("    "),
            Span::styled("Track: ", label),
            Span::raw(format!("{} of {}", song.track_number, total)),
        ]),
        Line::from(vec![
            Span::styled("My rank: ", label),
            Span::raw(rank.map_or_else(|| "unranked".to_string(), |r| format!("#{r}"))),
        ]),
        Line::from(""),
        Line::from(Span::styled("Album Information", heading)),
        Line::from(vec![Span::styled("Album: ", label), Span::raw(album.name.as_str())]),
        Line::from(vec![
            Span::styled("Release Year: ", label),
            Span::raw(album.release_year.to_string()),
        ]),
        Line::from(vec![
            Span::styled("Total Tracks: ", label),
            Span::raw(total.to_string()),
            Span::raw("    "),
            Span::styled("Runtime: ", label),
            Span::raw(format_duration(album.runtime_secs())),
        ]),
    ];

    Paragraph::new(lines).wrap(Wrap { trim: false }).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Song Details ")
            .padding(Padding::horizontal(1))
            .border_style(Style::default().fg(color)),
    )
}

/// Horizontal tab strip centered on `current`, with pagination dots below.
fn render_tabs(frame: &mut Frame, area: Rect, title: &str, tabs: &[(String, Color)], current: usize) {
    let inner_width = area.width.saturating_sub(4) as usize;

    // Walk outwards from the current tab until the strip is full
    let mut start = current;
    let mut end = current + 1;
    let mut used = tabs.get(current).map_or(0, |(name, _)| name.chars().count() + 3);
    loop {
        let mut grew = false;
        if end < tabs.len() {
            let w = tabs[end].0.chars().count() + 3;
            if used + w <= inner_width {
                used += w;
                end += 1;
                grew = true;
            }
        }
        if start > 0 {
            let w = tabs[start - 1].0.chars().count() + 3;
            if used + w <= inner_width {
                used += w;
                start -= 1;
                grew = true;
            }
        }
        if !grew {
            break;
        }
    }

    let mut spans: Vec<Span> = Vec::new();
    if start > 0 {
        spans.push(Span::styled("‹ ", Style::default().fg(Color::DarkGray)));
    }
    for (i, (name, color)) in tabs.iter().enumerate().take(end).skip(start) {
        let style = if i == current {
            Style::default()
                .fg(Color::Black)
                .bg(*color)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        spans.push(Span::styled(format!(" {} ", name), style));
        spans.push(Span::raw(" "));
    }
    if end < tabs.len() {
        spans.push(Span::styled("›", Style::default().fg(Color::DarkGray)));
    }

    let dots: String = (0..tabs.len())
        .map(|i| if i == current { '●' } else { '·' })
        .collect();

    let strip = Paragraph::new(vec![
        Line::from(spans),
        Line::from(Span::styled(dots, Style::default().fg(Color::DarkGray))).alignment(Alignment::Center),
    ])
    .block(Block::default().borders(Borders::ALL).title(title.to_string()));
    frame.render_widget(strip, area);
}

fn render_placeholder(frame: &mut Frame, area: Rect, message: &str) {
    let placeholder = Paragraph::new(message.to_string())
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(placeholder, area);
}

fn row_style(highlighted: bool) -> Style {
    if highlighted {
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    }
}
