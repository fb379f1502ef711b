//! Utility functions for rendering UI components

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, List, ListItem, ListState},
    Frame,
};

use discography_rs::model::Album;

pub fn render_scrollable_list(
    frame: &mut Frame,
    area: Rect,
    items: Vec<ListItem>,
    selected_index: usize,
    block: Block,
) {
    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default()); // Highlight handled by item styles

    let mut list_state = ListState::default();
    list_state.select(Some(selected_index));

    frame.render_stateful_widget(list, area, &mut list_state);
}

pub fn format_duration(secs: u32) -> String {
    format!("{}:{:02}", secs / 60, secs % 60)
}

/// Calculate width needed for index column (log10(n) + padding)
pub fn calculate_num_width(item_count: usize) -> usize {
    if item_count == 0 {
        2
    } else {
        let digits = (item_count as f64).log10().floor() as usize + 1;
        digits + 1
    }
}

pub fn truncate_string(s: &str, max_width: usize) -> String {
    if s.chars().count() > max_width {
        let truncated: String = s.chars().take(max_width.saturating_sub(3)).collect();
        format!("{:<width$}", format!("{}...", truncated), width = max_width)
    } else {
        format!("{:<width$}", s, width = max_width)
    }
}

/// The album's own color, or a neutral accent if it cannot be parsed
pub fn album_color(album: &Album) -> Color {
    album
        .rgb()
        .map_or(Color::Magenta, |(r, g, b)| Color::Rgb(r, g, b))
}

/// Rank badge column, blank when unranked
pub fn rank_badge(rank: Option<u32>) -> String {
    match rank {
        Some(rank) => format!("#{:<3}", rank),
        None => "    ".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_durations() {
        assert_eq!(format_duration(0), "0:00");
        assert_eq!(format_duration(403), "6:43");
        assert_eq!(format_duration(3600), "60:00");
    }

    #[test]
    fn truncates_long_titles() {
        assert_eq!(truncate_string("Love Story", 12), "Love Story  ");
        assert_eq!(truncate_string("The Tortured Poets Department", 10), "The Tor...");
    }

    #[test]
    fn num_width_grows_with_digits() {
        assert_eq!(calculate_num_width(0), 2);
        assert_eq!(calculate_num_width(9), 2);
        assert_eq!(calculate_num_width(16), 3);
    }

    #[test]
    fn rank_badge_is_fixed_width() {
        assert_eq!(rank_badge(Some(3)), "#3  ");
        assert_eq!(rank_badge(None).len(), 4);
    }
}
