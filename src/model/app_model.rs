//! Main application model with state management

use std::time::Instant;

use crate::gesture::{DragDelta, Swipe};
use super::catalog::{Album, Catalog, Song};
use super::navigation::{NavigationState, Transition, View};
use super::ordering::Shelf;
use super::ranking::{RankNamespace, RankingBook, SortMode};
use super::store::KeyValueStore;
use super::types::{ActiveTransition, UiState};

/// Main application model containing all state
pub struct AppModel {
    catalog: Catalog,
    nav: NavigationState,
    rankings: RankingBook,
    pub ui_state: UiState,
}

/// Stable ids of whatever is selected or highlighted, used to survive re-sorts
struct Anchors {
    album: Option<String>,
    song: Option<String>,
    album_cursor: Option<String>,
    song_cursor: Option<String>,
}

impl AppModel {
    pub fn new(catalog: Catalog, store: Box<dyn KeyValueStore>) -> Self {
        Self {
            catalog,
            nav: NavigationState::new(),
            rankings: RankingBook::load(store),
            ui_state: UiState::default(),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn navigation(&self) -> &NavigationState {
        &self.nav
    }

    pub fn rankings(&self) -> &RankingBook {
        &self.rankings
    }

    pub fn shelf(&self) -> Shelf<'_> {
        Shelf::arrange(&self.catalog, self.rankings.table(), self.rankings.sort_mode())
    }

    pub fn selected_album(&self) -> Option<&Album> {
        self.shelf().album(self.nav.selected_album()?)
    }

    pub fn selected_song(&self) -> Option<&Song> {
        self.shelf()
            .song(self.nav.selected_album()?, self.nav.selected_song()?)
    }

    // ========================================================================
    // Navigation
    // ========================================================================

    /// Enter on the current view: drill one level deeper.
    pub fn open_highlighted(&mut self) -> Option<Transition> {
        let transition = match self.nav.view() {
            View::Artist => self.nav.select_albums(),
            View::Albums => {
                let shelf = Shelf::arrange(&self.catalog, self.rankings.table(), self.rankings.sort_mode());
                self.nav.select_album(self.ui_state.album_cursor, &shelf)
            }
            View::Songs => self.nav.select_song(self.ui_state.song_cursor),
            View::SongDetails => None,
        };
        if transition.is_some_and(|t| t.to == View::Songs) {
            self.ui_state.song_cursor = 0;
        }
        self.record(transition)
    }

    /// Jump straight to an album from the album tabs.
    pub fn open_album(&mut self, index: usize) -> Option<Transition> {
        let shelf = Shelf::arrange(&self.catalog, self.rankings.table(), self.rankings.sort_mode());
        let transition = self.nav.select_album(index, &shelf);
        if transition.is_some() {
            self.ui_state.album_cursor = index;
            self.ui_state.song_cursor = 0;
        }
        self.record(transition)
    }

    /// Jump straight to a song from the song tabs.
    pub fn open_song(&mut self, index: usize) -> Option<Transition> {
        let transition = self.nav.select_song(index);
        if transition.is_some() {
            self.ui_state.song_cursor = index;
        }
        self.record(transition)
    }

    pub fn navigate_back(&mut self) -> Option<Transition> {
        let album = self.nav.selected_album();
        let song = self.nav.selected_song();
        let transition = self.nav.back();
        match transition.map(|t| t.from) {
            Some(View::SongDetails) => self.ui_state.song_cursor = song.unwrap_or(0),
            Some(View::Songs) => self.ui_state.album_cursor = album.unwrap_or(0),
            _ => {}
        }
        self.record(transition)
    }

    pub fn apply_swipe(&mut self, swipe: Swipe) -> Option<Transition> {
        let shelf = Shelf::arrange(&self.catalog, self.rankings.table(), self.rankings.sort_mode());
        let transition = self.nav.swipe(swipe, &shelf);
        if let Some(t) = transition {
            match t.to {
                View::Songs => {
                    self.ui_state.album_cursor = self.nav.selected_album().unwrap_or(0);
                    self.ui_state.song_cursor = 0;
                }
                View::SongDetails => {
                    self.ui_state.song_cursor = self.nav.selected_song().unwrap_or(0);
                }
                _ => {}
            }
        }
        self.record(transition)
    }

    fn record(&mut self, transition: Option<Transition>) -> Option<Transition> {
        if let Some(transition) = transition {
            self.ui_state.transition = Some(ActiveTransition {
                transition,
                started: Instant::now(),
            });
        }
        transition
    }

    // ========================================================================
    // Cursor
    // ========================================================================

    fn cursor_len(&self) -> usize {
        match self.nav.view() {
            View::Albums => self.catalog.albums().len(),
            View::Songs => self.nav.loaded_songs(),
            View::Artist | View::SongDetails => 0,
        }
    }

    pub fn move_selection_up(&mut self) {
        let cursor = match self.nav.view() {
            View::Albums => &mut self.ui_state.album_cursor,
            View::Songs => &mut self.ui_state.song_cursor,
            _ => return,
        };
        *cursor = cursor.saturating_sub(1);
    }

    pub fn move_selection_down(&mut self) {
        let len = self.cursor_len();
        let cursor = match self.nav.view() {
            View::Albums => &mut self.ui_state.album_cursor,
            View::Songs => &mut self.ui_state.song_cursor,
            _ => return,
        };
        if *cursor + 1 < len {
            *cursor += 1;
        }
    }

    // ========================================================================
    // Rankings
    // ========================================================================

    pub fn toggle_ranking_mode(&mut self) -> bool {
        let enabled = self.rankings.toggle_ranking_mode();
        self.ui_state.set_status(if enabled {
            "Ranking mode on: Space ranks the highlighted item"
        } else {
            "Ranking mode off"
        });
        enabled
    }

    pub fn toggle_sort_mode(&mut self) -> SortMode {
        let mode = self.rankings.sort_mode().toggled();
        self.rearrange(|rankings| rankings.set_sort_mode(mode));
        self.ui_state.set_status(format!("Sort: {}", mode.label()));
        mode
    }

    /// Rank or unrank whatever is highlighted. Only active in ranking mode.
    pub fn toggle_rank_highlighted(&mut self) -> Option<Option<u32>> {
        if !self.rankings.is_ranking_mode() {
            return None;
        }
        let (id, namespace, name) = {
            let shelf = self.shelf();
            match self.nav.view() {
                View::Albums => {
                    let album = shelf.album(self.ui_state.album_cursor)?;
                    (album.id.clone(), RankNamespace::Album, album.name.clone())
                }
                View::Songs => {
                    let song = shelf.song(self.nav.selected_album()?, self.ui_state.song_cursor)?;
                    (song.id.clone(), RankNamespace::Song, song.title.clone())
                }
                View::SongDetails => {
                    let song = shelf.song(self.nav.selected_album()?, self.nav.selected_song()?)?;
                    (song.id.clone(), RankNamespace::Song, song.title.clone())
                }
                View::Artist => return None,
            }
        };

        let mut rank = None;
        self.rearrange(|rankings| rank = rankings.toggle_rank(&id, namespace));
        self.ui_state.set_status(match rank {
            Some(rank) => format!("Ranked #{rank}: {name}"),
            None => format!("Unranked: {name}"),
        });
        Some(rank)
    }

    pub fn clear_rankings(&mut self) {
        self.rearrange(RankingBook::clear);
        self.ui_state.set_status("Rankings cleared");
    }

    /// Mutate rankings, then keep the same album/song selected and highlighted
    /// even if the shelf order changed underneath.
    fn rearrange(&mut self, mutate: impl FnOnce(&mut RankingBook)) {
        let anchors = self.anchors();
        mutate(&mut self.rankings);

        let shelf = Shelf::arrange(&self.catalog, self.rankings.table(), self.rankings.sort_mode());
        let album = anchors.album.as_deref().and_then(|id| shelf.position_of_album(id));
        let song = match (album, anchors.song.as_deref()) {
            (Some(i), Some(id)) => shelf.position_of_song(i, id),
            _ => None,
        };
        if self.nav.realign(album, song, &shelf) {
            tracing::debug!(view = ?self.nav.view(), "Selection fell back after re-sort");
        }

        if let Some(i) = anchors.album_cursor.as_deref().and_then(|id| shelf.position_of_album(id)) {
            self.ui_state.album_cursor = i;
        }
        if let Some(album) = self.nav.selected_album() {
            if let Some(j) = anchors
                .song_cursor
                .as_deref()
                .and_then(|id| shelf.position_of_song(album, id))
            {
                self.ui_state.song_cursor = j;
            }
        }
    }

    fn anchors(&self) -> Anchors {
        let shelf = self.shelf();
        let album = self.nav.selected_album();
        let id_of_album = |i: usize| shelf.album(i).map(|a| a.id.clone());
        let id_of_song = |j: usize| album.and_then(|i| shelf.song(i, j)).map(|s| s.id.clone());
        Anchors {
            album: album.and_then(id_of_album),
            song: self.nav.selected_song().and_then(id_of_song),
            album_cursor: id_of_album(self.ui_state.album_cursor),
            song_cursor: id_of_song(self.ui_state.song_cursor),
        }
    }

    // ========================================================================
    // UI housekeeping
    // ========================================================================

    pub fn set_drag(&mut self, drag: Option<DragDelta>) {
        self.ui_state.drag = drag;
    }

    pub fn toggle_help_popup(&mut self) {
        self.ui_state.show_help_popup = !self.ui_state.show_help_popup;
    }

    pub fn set_should_quit(&mut self, quit: bool) {
        self.ui_state.should_quit = quit;
    }

    pub fn should_quit(&self) -> bool {
        self.ui_state.should_quit
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::store::MemoryStore;

    fn model() -> AppModel {
        AppModel::new(Catalog::embedded().unwrap(), Box::new(MemoryStore::new()))
    }

    #[test]
    fn enter_drills_down_through_cursor() {
        let mut model = model();
        model.open_highlighted();
        model.move_selection_down();
        model.move_selection_down();
        model.open_highlighted();
        assert_eq!(model.navigation().view(), View::Songs);
        assert_eq!(model.selected_album().map(|a| a.id.as_str()), Some("speak-now"));

        model.move_selection_down();
        let t = model.open_highlighted().unwrap();
        assert_eq!(t.to, View::SongDetails);
        assert_eq!(model.selected_song().map(|s| s.title.as_str()), Some("Sparks Fly"));
        assert!(model.ui_state.transition.is_some());
    }

    #[test]
    fn back_restores_cursor_to_departed_item() {
        let mut model = model();
        model.open_highlighted();
        model.open_album(4);
        model.open_song(5);
        model.apply_swipe(Swipe::Left);

        model.navigate_back();
        assert_eq!(model.ui_state.song_cursor, 6);
        model.navigate_back();
        assert_eq!(model.ui_state.album_cursor, 4);
        assert_eq!(model.navigation().view(), View::Albums);
    }

    #[test]
    fn cursor_clamps_to_list() {
        let mut model = model();
        model.open_highlighted();
        model.move_selection_up();
        assert_eq!(model.ui_state.album_cursor, 0);
        for _ in 0..50 {
            model.move_selection_down();
        }
        assert_eq!(model.ui_state.album_cursor, 10);
    }

    #[test]
    fn rank_requires_ranking_mode() {
        let mut model = model();
        model.open_highlighted();
        assert_eq!(model.toggle_rank_highlighted(), None);
        model.toggle_ranking_mode();
        assert_eq!(model.toggle_rank_highlighted(), Some(Some(1)));
        assert_eq!(model.toggle_rank_highlighted(), Some(None));
    }

    #[test]
    fn resort_keeps_selected_album() {
        let mut model = model();
        model.toggle_ranking_mode();
        model.open_highlighted();
        // Rank "1989" (index 4) first, then open it
        model.ui_state.album_cursor = 4;
        model.toggle_rank_highlighted();
        model.open_album(4);
        assert_eq!(model.selected_album().map(|a| a.id.as_str()), Some("1989"));

        model.toggle_sort_mode();
        assert_eq!(model.navigation().selected_album(), Some(0));
        assert_eq!(model.selected_album().map(|a| a.id.as_str()), Some("1989"));
        assert_eq!(model.ui_state.album_cursor, 0);

        model.toggle_sort_mode();
        assert_eq!(model.navigation().selected_album(), Some(4));
    }

    #[test]
    fn clearing_rankings_under_ranking_sort_realigns() {
        let mut model = model();
        model.toggle_ranking_mode();
        model.toggle_sort_mode();
        model.open_highlighted();
        model.ui_state.album_cursor = 9;
        model.toggle_rank_highlighted();
        assert_eq!(model.ui_state.album_cursor, 0);

        model.open_highlighted();
        assert_eq!(model.selected_album().map(|a| a.id.as_str()), Some("midnights"));
        model.clear_rankings();
        assert_eq!(model.navigation().selected_album(), Some(9));
        assert!(model.rankings().table().is_empty());
    }
}
