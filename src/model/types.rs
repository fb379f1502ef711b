//! UI state that lives next to the navigation core

use std::time::{Duration, Instant};

use crate::gesture::DragDelta;
use super::navigation::Transition;

/// How long a status message stays in the status bar
pub const STATUS_TTL: Duration = Duration::from_secs(4);

/// A transition currently being animated by the view
#[derive(Clone, Copy, Debug)]
pub struct ActiveTransition {
    pub transition: Transition,
    pub started: Instant,
}

impl ActiveTransition {
    /// Animation progress in `0.0..=1.0`.
    pub fn progress(&self, now: Instant, length: Duration) -> f32 {
        if length.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started);
        (elapsed.as_secs_f32() / length.as_secs_f32()).min(1.0)
    }
}

/// UI state for the application
#[derive(Clone, Debug)]
pub struct UiState {
    /// Highlighted row in the album list (shelf index)
    pub album_cursor: usize,
    /// Highlighted row in the song list (shelf index)
    pub song_cursor: usize,
    pub show_help_popup: bool,
    /// Live drag feedback while a pointer session is active
    pub drag: Option<DragDelta>,
    pub transition: Option<ActiveTransition>,
    pub status_message: Option<String>,
    pub status_timestamp: Option<Instant>,
    pub should_quit: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            album_cursor: 0,
            song_cursor: 0,
            show_help_popup: false,
            drag: None,
            transition: None,
            status_message: None,
            status_timestamp: None,
            should_quit: false,
        }
    }
}

impl UiState {
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
        self.status_timestamp = Some(Instant::now());
    }

    pub fn auto_clear_status(&mut self) {
        if self
            .status_timestamp
            .is_some_and(|at| at.elapsed() >= STATUS_TTL)
        {
            self.status_message = None;
            self.status_timestamp = None;
        }
    }

    /// Drop the finished transition animation, if any.
    pub fn settle_transition(&mut self, now: Instant, length: Duration) {
        if self
            .transition
            .is_some_and(|active| active.progress(now, length) >= 1.0)
        {
            self.transition = None;
        }
    }
}
