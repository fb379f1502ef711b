//! Display order of albums and songs for the active sort mode

use super::catalog::{Album, Catalog, Song};
use super::navigation::Discography;
use super::ranking::{RankNamespace, RankingTable, SortMode};

/// The catalog as the user currently sees it.
///
/// Holds index permutations into the catalog rather than copies, so it is
/// cheap to rebuild after every ranking change.
#[derive(Clone, Debug)]
pub struct Shelf<'a> {
    catalog: &'a Catalog,
    album_order: Vec<usize>,
    song_orders: Vec<Vec<usize>>,
}

impl<'a> Shelf<'a> {
    /// Release order keeps catalog order. Ranking order puts ranked items
    /// first by rank, then the unranked ones in release order.
    pub fn arrange(catalog: &'a Catalog, table: &RankingTable, mode: SortMode) -> Self {
        let albums = catalog.albums();
        let album_order = arrange_indices(albums, mode, |album| {
            table.rank(&album.id, RankNamespace::Album)
        });
        let song_orders = album_order
            .iter()
            .map(|&i| {
                arrange_indices(&albums[i].songs, mode, |song| {
                    table.rank(&song.id, RankNamespace::Song)
                })
            })
            .collect();

        Self {
            catalog,
            album_order,
            song_orders,
        }
    }

    pub fn albums(&self) -> impl Iterator<Item = &'a Album> + '_ {
        self.album_order.iter().map(|&i| &self.catalog.albums()[i])
    }

    pub fn album(&self, index: usize) -> Option<&'a Album> {
        let &i = self.album_order.get(index)?;
        self.catalog.albums().get(i)
    }

    pub fn songs(&self, album_index: usize) -> Vec<&'a Song> {
        let (Some(album), Some(order)) = (self.album(album_index), self.song_orders.get(album_index))
        else {
            return Vec::new();
        };
        order.iter().map(|&i| &album.songs[i]).collect()
    }

    pub fn song(&self, album_index: usize, song_index: usize) -> Option<&'a Song> {
        let album = self.album(album_index)?;
        let &i = self.song_orders.get(album_index)?.get(song_index)?;
        album.songs.get(i)
    }

    pub fn position_of_album(&self, album_id: &str) -> Option<usize> {
        self.albums().position(|album| album.id == album_id)
    }

    pub fn position_of_song(&self, album_index: usize, song_id: &str) -> Option<usize> {
        self.songs(album_index).iter().position(|song| song.id == song_id)
    }
}

impl Discography for Shelf<'_> {
    fn album_count(&self) -> usize {
        self.album_order.len()
    }

    fn song_count(&self, album_index: usize) -> usize {
        self.song_orders.get(album_index).map_or(0, Vec::len)
    }
}

fn arrange_indices<T>(items: &[T], mode: SortMode, rank: impl Fn(&T) -> Option<u32>) -> Vec<usize> {
    let mut order: Vec<usize> = (0..items.len()).collect();
    if mode == SortMode::Ranking {
        // Stable: unranked items keep release order behind the ranked ones
        order.sort_by_key(|&i| rank(&items[i]).unwrap_or(u32::MAX));
    }
    order
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        Catalog::embedded().unwrap()
    }

    #[test]
    fn release_order_ignores_ranks() {
        let catalog = catalog();
        let mut table = RankingTable::new();
        table.toggle_rank("midnights", RankNamespace::Album);

        let shelf = Shelf::arrange(&catalog, &table, SortMode::ReleaseDate);
        assert_eq!(shelf.album(0).map(|a| a.id.as_str()), Some("taylor-swift"));
        assert_eq!(shelf.album_count(), 11);
    }

    #[test]
    fn ranking_order_puts_ranked_first() {
        let catalog = catalog();
        let mut table = RankingTable::new();
        table.toggle_rank("midnights", RankNamespace::Album);
        table.toggle_rank("red", RankNamespace::Album);

        let shelf = Shelf::arrange(&catalog, &table, SortMode::Ranking);
        let ids: Vec<&str> = shelf.albums().map(|a| a.id.as_str()).take(4).collect();
        assert_eq!(ids, ["midnights", "red", "taylor-swift", "fearless"]);
        assert_eq!(shelf.position_of_album("red"), Some(1));
    }

    #[test]
    fn songs_follow_song_ranks() {
        let catalog = catalog();
        let mut table = RankingTable::new();
        // "Love Story" is track 3 of Fearless
        table.toggle_rank("17", RankNamespace::Song);

        let shelf = Shelf::arrange(&catalog, &table, SortMode::Ranking);
        let fearless = shelf.position_of_album("fearless").unwrap();
        assert_eq!(shelf.song(fearless, 0).map(|s| s.title.as_str()), Some("Love Story"));
        assert_eq!(shelf.song(fearless, 1).map(|s| s.track_number), Some(1));
        assert_eq!(shelf.song_count(fearless), 13);
        assert_eq!(shelf.position_of_song(fearless, "17"), Some(0));
    }

    #[test]
    fn out_of_range_lookups_are_empty() {
        let catalog = catalog();
        let shelf = Shelf::arrange(&catalog, &RankingTable::new(), SortMode::ReleaseDate);
        assert!(shelf.album(99).is_none());
        assert!(shelf.songs(99).is_empty());
        assert!(shelf.song(0, 99).is_none());
        assert_eq!(shelf.song_count(99), 0);
    }
}
