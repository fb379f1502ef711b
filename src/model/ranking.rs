//! Personal album and song rankings
//!
//! Ranks are dense: in each namespace they always read `1..=N` with no gaps
//! or duplicates. Removing an item renumbers everything ranked below it.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Deserializer, Serialize};

use super::store::KeyValueStore;

/// Store key for the persisted [`RankingRecord`]
pub const RANKINGS_KEY: &str = "discography-rankings";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RankNamespace {
    Album,
    Song,
}

/// How albums and songs are ordered on the shelf
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortMode {
    #[default]
    ReleaseDate,
    Ranking,
}

impl SortMode {
    pub fn toggled(self) -> Self {
        match self {
            SortMode::ReleaseDate => SortMode::Ranking,
            SortMode::Ranking => SortMode::ReleaseDate,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortMode::ReleaseDate => "Release Date",
            SortMode::Ranking => "My Ranking",
        }
    }
}

/// Persisted layout: ordered `(id, rank)` pairs per namespace plus the sort mode.
#[derive(Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankingRecord {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub album_rankings: Vec<(String, u32)>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub song_rankings: Vec<(String, u32)>,
    #[serde(default, deserialize_with = "lenient_sort_mode")]
    pub sort_mode: SortMode,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<(String, u32)>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::deserialize(deserializer)?.unwrap_or_default())
}

/// A null or unrecognized sort mode falls back to release date without
/// discarding the ranks stored next to it.
fn lenient_sort_mode<'de, D>(deserializer: D) -> Result<SortMode, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(raw
        .and_then(|value| SortMode::deserialize(value).ok())
        .unwrap_or_default())
}

/// Dense id → rank mapping for albums and songs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RankingTable {
    albums: HashMap<String, u32>,
    songs: HashMap<String, u32>,
}

impl RankingTable {
    pub fn new() -> Self {
        Self::default()
    }

    fn ranks(&self, namespace: RankNamespace) -> &HashMap<String, u32> {
        match namespace {
            RankNamespace::Album => &self.albums,
            RankNamespace::Song => &self.songs,
        }
    }

    fn ranks_mut(&mut self, namespace: RankNamespace) -> &mut HashMap<String, u32> {
        match namespace {
            RankNamespace::Album => &mut self.albums,
            RankNamespace::Song => &mut self.songs,
        }
    }

    /// Rank an unranked item last, or unrank a ranked one.
    ///
    /// Returns the item's new rank, or `None` when it was removed.
    pub fn toggle_rank(&mut self, id: &str, namespace: RankNamespace) -> Option<u32> {
        let ranks = self.ranks_mut(namespace);
        match ranks.remove(id) {
            Some(removed) => {
                for rank in ranks.values_mut() {
                    if *rank > removed {
                        *rank -= 1;
                    }
                }
                None
            }
            None => {
                let next = ranks.len() as u32 + 1;
                ranks.insert(id.to_string(), next);
                Some(next)
            }
        }
    }

    pub fn rank(&self, id: &str, namespace: RankNamespace) -> Option<u32> {
        self.ranks(namespace).get(id).copied()
    }

    pub fn len(&self, namespace: RankNamespace) -> usize {
        self.ranks(namespace).len()
    }

    pub fn is_empty(&self) -> bool {
        self.albums.is_empty() && self.songs.is_empty()
    }

    /// `(id, rank)` pairs ordered by rank.
    pub fn entries(&self, namespace: RankNamespace) -> Vec<(String, u32)> {
        let mut entries: Vec<(String, u32)> = self
            .ranks(namespace)
            .iter()
            .map(|(id, rank)| (id.clone(), *rank))
            .collect();
        entries.sort_by_key(|(_, rank)| *rank);
        entries
    }

    pub fn clear(&mut self) {
        self.albums.clear();
        self.songs.clear();
    }

    pub fn to_record(&self, sort_mode: SortMode) -> RankingRecord {
        RankingRecord {
            album_rankings: self.entries(RankNamespace::Album),
            song_rankings: self.entries(RankNamespace::Song),
            sort_mode,
        }
    }

    /// Rebuild a table from a record. `None` if either list breaks density.
    pub fn from_record(record: &RankingRecord) -> Option<Self> {
        Some(Self {
            albums: dense_map(&record.album_rankings)?,
            songs: dense_map(&record.song_rankings)?,
        })
    }
}

fn dense_map(entries: &[(String, u32)]) -> Option<HashMap<String, u32>> {
    let mut map = HashMap::with_capacity(entries.len());
    let mut seen_ranks = HashSet::with_capacity(entries.len());
    for (id, rank) in entries {
        if *rank == 0 || *rank as usize > entries.len() || !seen_ranks.insert(*rank) {
            return None;
        }
        if map.insert(id.clone(), *rank).is_some() {
            return None;
        }
    }
    Some(map)
}

/// Rankings plus the user's sort preferences, backed by a key-value store.
///
/// Every mutation writes the record through. Write failures are logged and
/// otherwise ignored, so the in-memory state stays authoritative.
pub struct RankingBook {
    table: RankingTable,
    sort_mode: SortMode,
    ranking_mode: bool,
    store: Box<dyn KeyValueStore>,
}

impl RankingBook {
    /// Restore from `store`. Missing, empty or corrupt records start empty.
    pub fn load(store: Box<dyn KeyValueStore>) -> Self {
        let record = match store.get(RANKINGS_KEY) {
            Ok(Some(raw)) if !raw.trim().is_empty() => {
                match serde_json::from_str::<RankingRecord>(&raw) {
                    Ok(record) => Some(record),
                    Err(e) => {
                        tracing::warn!(error = %e, "Discarding unreadable rankings record");
                        None
                    }
                }
            }
            Ok(_) => None,
            Err(e) => {
                tracing::warn!(error = %e, "Could not read rankings record");
                None
            }
        };

        let (table, sort_mode) = match record {
            Some(record) => match RankingTable::from_record(&record) {
                Some(table) => (table, record.sort_mode),
                None => {
                    tracing::warn!("Discarding rankings record with non-dense ranks");
                    (RankingTable::new(), SortMode::default())
                }
            },
            None => (RankingTable::new(), SortMode::default()),
        };

        tracing::info!(
            albums = table.len(RankNamespace::Album),
            songs = table.len(RankNamespace::Song),
            ?sort_mode,
            "Rankings restored"
        );

        Self {
            table,
            sort_mode,
            ranking_mode: false,
            store,
        }
    }

    pub fn table(&self) -> &RankingTable {
        &self.table
    }

    pub fn sort_mode(&self) -> SortMode {
        self.sort_mode
    }

    pub fn is_ranking_mode(&self) -> bool {
        self.ranking_mode
    }

    pub fn rank(&self, id: &str, namespace: RankNamespace) -> Option<u32> {
        self.table.rank(id, namespace)
    }

    pub fn toggle_rank(&mut self, id: &str, namespace: RankNamespace) -> Option<u32> {
        let rank = self.table.toggle_rank(id, namespace);
        tracing::debug!(id, ?namespace, ?rank, "Rank toggled");
        self.persist();
        rank
    }

    pub fn set_sort_mode(&mut self, mode: SortMode) {
        if self.sort_mode != mode {
            self.sort_mode = mode;
            self.persist();
        }
    }

    /// Ranking mode only changes what selection does; it is not persisted.
    pub fn toggle_ranking_mode(&mut self) -> bool {
        self.ranking_mode = !self.ranking_mode;
        self.ranking_mode
    }

    pub fn clear(&mut self) {
        self.table.clear();
        self.persist();
    }

    fn persist(&self) {
        let record = self.table.to_record(self.sort_mode);
        let result = serde_json::to_string(&record)
            .map_err(crate::error::Error::from)
            .and_then(|json| self.store.set(RANKINGS_KEY, &json));
        if let Err(e) = result {
            tracing::warn!(error = %e, "Failed to persist rankings");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::store::MemoryStore;

    fn abc() -> RankingTable {
        let mut table = RankingTable::new();
        for id in ["a", "b", "c"] {
            table.toggle_rank(id, RankNamespace::Album);
        }
        table
    }

    #[test]
    fn toggle_assigns_next_rank() {
        let table = abc();
        assert_eq!(table.rank("a", RankNamespace::Album), Some(1));
        assert_eq!(table.rank("b", RankNamespace::Album), Some(2));
        assert_eq!(table.rank("c", RankNamespace::Album), Some(3));
        assert_eq!(table.rank("a", RankNamespace::Song), None);
    }

    #[test]
    fn removal_compacts_ranks() {
        let mut table = abc();
        assert_eq!(table.toggle_rank("b", RankNamespace::Album), None);
        assert_eq!(
            table.entries(RankNamespace::Album),
            vec![("a".to_string(), 1), ("c".to_string(), 2)]
        );
        assert_eq!(table.toggle_rank("b", RankNamespace::Album), Some(3));
    }

    #[test]
    fn namespaces_are_independent() {
        let mut table = abc();
        assert_eq!(table.toggle_rank("a", RankNamespace::Song), Some(1));
        table.toggle_rank("a", RankNamespace::Album);
        assert_eq!(table.rank("a", RankNamespace::Song), Some(1));
        assert_eq!(table.len(RankNamespace::Album), 2);
    }

    #[test]
    fn record_round_trip() {
        let table = abc();
        let json = serde_json::to_string(&table.to_record(SortMode::Ranking)).unwrap();
        assert_eq!(
            json,
            r#"{"albumRankings":[["a",1],["b",2],["c",3]],"songRankings":[],"sortMode":"ranking"}"#
        );
        let record: RankingRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(RankingTable::from_record(&record), Some(table));
        assert_eq!(record.sort_mode, SortMode::Ranking);
    }

    #[test]
    fn non_dense_records_are_rejected() {
        let gap = RankingRecord {
            album_rankings: vec![("a".into(), 1), ("b".into(), 3)],
            ..RankingRecord::default()
        };
        assert!(RankingTable::from_record(&gap).is_none());

        let dup_id = RankingRecord {
            song_rankings: vec![("a".into(), 1), ("a".into(), 2)],
            ..RankingRecord::default()
        };
        assert!(RankingTable::from_record(&dup_id).is_none());

        let zero = RankingRecord {
            album_rankings: vec![("a".into(), 0)],
            ..RankingRecord::default()
        };
        assert!(RankingTable::from_record(&zero).is_none());
    }

    #[test]
    fn book_persists_every_mutation() {
        let store = MemoryStore::new();
        let mut book = RankingBook::load(Box::new(store.clone()));
        book.toggle_rank("red", RankNamespace::Album);
        book.set_sort_mode(SortMode::Ranking);

        let restored = RankingBook::load(Box::new(store.clone()));
        assert_eq!(restored.rank("red", RankNamespace::Album), Some(1));
        assert_eq!(restored.sort_mode(), SortMode::Ranking);
        assert!(!restored.is_ranking_mode());
    }

    #[test]
    fn book_falls_back_on_corrupt_record() {
        for raw in ["", "   ", "{not json", r#"{"albumRankings":[["a",2]]}"#] {
            let store = MemoryStore::new();
            store.set(RANKINGS_KEY, raw).unwrap();
            let book = RankingBook::load(Box::new(store));
            assert!(book.table().is_empty(), "record {raw:?} should be discarded");
            assert_eq!(book.sort_mode(), SortMode::ReleaseDate);
        }
    }

    #[test]
    fn bad_sort_mode_keeps_ranks() {
        for raw in [
            r#"{"albumRankings":[["red",1]],"songRankings":[],"sortMode":null}"#,
            r#"{"albumRankings":[["red",1]],"songRankings":null,"sortMode":"by-mood"}"#,
            r#"{"albumRankings":[["red",1]],"sortMode":7}"#,
        ] {
            let store = MemoryStore::new();
            store.set(RANKINGS_KEY, raw).unwrap();
            let book = RankingBook::load(Box::new(store));
            assert_eq!(book.rank("red", RankNamespace::Album), Some(1), "{raw}");
            assert_eq!(book.sort_mode(), SortMode::ReleaseDate, "{raw}");
        }
    }

    #[test]
    fn book_clear_keeps_sort_mode() {
        let store = MemoryStore::new();
        let mut book = RankingBook::load(Box::new(store.clone()));
        book.set_sort_mode(SortMode::Ranking);
        book.toggle_rank("1", RankNamespace::Song);
        book.clear();

        let restored = RankingBook::load(Box::new(store));
        assert!(restored.table().is_empty());
        assert_eq!(restored.sort_mode(), SortMode::Ranking);
    }
}
