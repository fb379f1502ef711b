//! View module - UI rendering
//!
//! This module handles all UI rendering for the application using ratatui.
//! It is organized into submodules by component type:
//!
//! - `utils`: Shared utility functions (formatting, scrollable lists, colors)
//! - `layout`: Header breadcrumb and status bar
//! - `content`: Artist, album, song and song-detail views
//! - `transition`: Slide animation for navigation transitions
//! - `overlays`: Help popup

mod content;
mod layout;
mod overlays;
mod transition;
mod utils;

use std::time::{Duration, Instant};

use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

use discography_rs::model::AppModel;

pub struct AppView;

impl AppView {
    pub fn render(frame: &mut Frame, model: &AppModel, transition_length: Duration) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Breadcrumb + sort mode
                Constraint::Min(0),    // Main content
                Constraint::Length(3), // Status bar
            ])
            .split(frame.area());

        layout::render_header(frame, chunks[0], model);

        let content_area = transition::slide_area(
            chunks[1],
            model.ui_state.transition.as_ref(),
            Instant::now(),
            transition_length,
        );
        content::render_main_content(frame, content_area, model);

        layout::render_status_bar(frame, chunks[2], model);

        if model.ui_state.show_help_popup {
            overlays::render_help_popup(frame);
        }
    }
}
