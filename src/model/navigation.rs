//! Drill-down navigation: artist → albums → songs → song details
//!
//! [`NavigationState`] is a plain value mutated only through the transition
//! methods below. Each method returns the [`Transition`] it performed, or
//! `None` when the request was rejected; a rejected request leaves the state
//! untouched. Album and song counts come from a [`Discography`] passed in by
//! the caller, so the machine never holds catalog data itself.
//!
//! Swipes at the first or last album/song are no-ops: navigation never wraps.

use crate::gesture::Swipe;

/// Read-only counts the state machine needs from the catalog.
pub trait Discography {
    fn album_count(&self) -> usize;
    /// Songs of the album at `album_index`, 0 if out of range.
    fn song_count(&self, album_index: usize) -> usize;
}

/// One level of the drill-down.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Artist,
    Albums,
    Songs,
    SongDetails,
}

impl View {
    /// The level `back()` returns to.
    pub fn parent(self) -> Option<View> {
        match self {
            View::Artist => None,
            View::Albums => Some(View::Artist),
            View::Songs => Some(View::Albums),
            View::SongDetails => Some(View::Songs),
        }
    }

    pub fn depth(self) -> usize {
        match self {
            View::Artist => 0,
            View::Albums => 1,
            View::Songs => 2,
            View::SongDetails => 3,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            View::Artist => "Artist",
            View::Albums => "Albums",
            View::Songs => "Songs",
            View::SongDetails => "Song Details",
        }
    }
}

/// Which way the content moves when a transition is rendered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransitionDirection {
    /// Drill in one level
    Forward,
    /// Back out one level
    Backward,
    /// Sibling to the right (next album or song)
    Next,
    /// Sibling to the left (previous album or song)
    Previous,
    /// Same level, jumped to a sibling directly
    Replace,
}

/// Describes a performed transition for the rendering layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transition {
    pub from: View,
    pub to: View,
    pub direction: TransitionDirection,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NavigationState {
    view: View,
    selected_album: Option<usize>,
    selected_song: Option<usize>,
    /// Songs loaded for the selected album
    loaded_songs: usize,
}

impl NavigationState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn selected_album(&self) -> Option<usize> {
        self.selected_album
    }

    pub fn selected_song(&self) -> Option<usize> {
        self.selected_song
    }

    pub fn loaded_songs(&self) -> usize {
        self.loaded_songs
    }

    /// Artist → Albums
    pub fn select_albums(&mut self) -> Option<Transition> {
        if self.view != View::Artist {
            return None;
        }
        Some(self.go(View::Albums, TransitionDirection::Forward))
    }

    /// Albums → Songs, or jump to another album from the album tabs in Songs.
    pub fn select_album(&mut self, index: usize, lookup: &impl Discography) -> Option<Transition> {
        let direction = match self.view {
            View::Albums => TransitionDirection::Forward,
            View::Songs => TransitionDirection::Replace,
            _ => return None,
        };
        if index >= lookup.album_count() {
            tracing::debug!(index, "Rejected out-of-range album selection");
            return None;
        }
        self.load_album(index, lookup);
        Some(self.go(View::Songs, direction))
    }

    /// Songs → SongDetails, or jump to another song from the song tabs.
    pub fn select_song(&mut self, index: usize) -> Option<Transition> {
        let direction = match self.view {
            View::Songs => TransitionDirection::Forward,
            View::SongDetails => TransitionDirection::Replace,
            _ => return None,
        };
        if index >= self.loaded_songs {
            tracing::debug!(index, loaded = self.loaded_songs, "Rejected out-of-range song selection");
            return None;
        }
        self.selected_song = Some(index);
        Some(self.go(View::SongDetails, direction))
    }

    /// Apply a recognized swipe. Vertical swipes are ignored.
    pub fn swipe(&mut self, swipe: Swipe, lookup: &impl Discography) -> Option<Transition> {
        let direction = match swipe {
            Swipe::Left => TransitionDirection::Next,
            Swipe::Right => TransitionDirection::Previous,
            Swipe::Up | Swipe::Down => return None,
        };
        match self.view {
            View::Songs => {
                let current = self.selected_album?;
                let target = step(current, direction, lookup.album_count())?;
                self.load_album(target, lookup);
                Some(self.go(View::Songs, direction))
            }
            View::SongDetails => {
                let current = self.selected_song?;
                let target = step(current, direction, self.loaded_songs)?;
                self.selected_song = Some(target);
                Some(self.go(View::SongDetails, direction))
            }
            View::Artist | View::Albums => None,
        }
    }

    /// Up one level, clearing the selection owned by the level being left.
    pub fn back(&mut self) -> Option<Transition> {
        let parent = self.view.parent()?;
        match self.view {
            View::SongDetails => self.selected_song = None,
            View::Songs => {
                self.selected_album = None;
                self.selected_song = None;
                self.loaded_songs = 0;
            }
            View::Albums | View::Artist => {}
        }
        Some(self.go(parent, TransitionDirection::Backward))
    }

    /// Re-point the selection after the album/song order changed.
    ///
    /// `album`/`song` are the new positions of the previously selected items.
    /// If the album is gone the view falls back to Albums; if only the song is
    /// gone it falls back to Songs. Returns `true` when the view changed.
    pub fn realign(
        &mut self,
        album: Option<usize>,
        song: Option<usize>,
        lookup: &impl Discography,
    ) -> bool {
        let before = self.view;
        if !matches!(self.view, View::Songs | View::SongDetails) {
            return false;
        }
        match album.filter(|&i| i < lookup.album_count()) {
            Some(index) => {
                self.selected_album = Some(index);
                self.loaded_songs = lookup.song_count(index);
            }
            None => {
                *self = Self {
                    view: View::Albums,
                    ..Self::default()
                };
                return true;
            }
        }
        if self.view == View::SongDetails {
            match song.filter(|&j| j < self.loaded_songs) {
                Some(index) => self.selected_song = Some(index),
                None => {
                    self.selected_song = None;
                    self.view = View::Songs;
                }
            }
        }
        self.view != before
    }

    fn load_album(&mut self, index: usize, lookup: &impl Discography) {
        self.selected_album = Some(index);
        self.selected_song = None;
        self.loaded_songs = lookup.song_count(index);
    }

    fn go(&mut self, to: View, direction: TransitionDirection) -> Transition {
        let transition = Transition {
            from: self.view,
            to,
            direction,
        };
        self.view = to;
        tracing::debug!(
            from = ?transition.from,
            to = ?transition.to,
            direction = ?transition.direction,
            album = ?self.selected_album,
            song = ?self.selected_song,
            "Navigation transition"
        );
        transition
    }
}

fn step(current: usize, direction: TransitionDirection, len: usize) -> Option<usize> {
    match direction {
        TransitionDirection::Next if current + 1 < len => Some(current + 1),
        TransitionDirection::Previous if current > 0 => Some(current - 1),
        _ => None,
    }
}
