//! Static discography catalog bundled with the binary

use serde::Deserialize;

use crate::error::Result;

const EMBEDDED_CATALOG: &str = include_str!("../../data/discography.json");

#[derive(Clone, Debug, Deserialize)]
pub struct Song {
    pub id: String,
    pub title: String,
    pub track_number: u32,
    /// Running time as `m:ss`
    pub duration: String,
}

impl Song {
    /// Parse the `m:ss` duration. Malformed durations count as zero.
    pub fn duration_secs(&self) -> u32 {
        let Some((minutes, seconds)) = self.duration.split_once(':') else {
            return 0;
        };
        match (minutes.trim().parse::<u32>(), seconds.trim().parse::<u32>()) {
            (Ok(m), Ok(s)) if s < 60 => m * 60 + s,
            _ => 0,
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct Album {
    pub id: String,
    pub name: String,
    pub release_year: u16,
    /// Hex color code, e.g. `#FF6B6B`
    pub color: String,
    pub songs: Vec<Song>,
}

impl Album {
    pub fn runtime_secs(&self) -> u32 {
        self.songs.iter().map(Song::duration_secs).sum()
    }

    /// Parse `color` into RGB components.
    pub fn rgb(&self) -> Option<(u8, u8, u8)> {
        let hex = self.color.strip_prefix('#')?;
        if hex.len() != 6 {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(hex.get(i..i + 2)?, 16).ok();
        Some((channel(0)?, channel(2)?, channel(4)?))
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct Artist {
    pub id: String,
    pub name: String,
    pub image_url: String,
    pub albums: Vec<Album>,
}

/// In-memory catalog for a single artist. Albums are kept in release order.
#[derive(Clone, Debug)]
pub struct Catalog {
    artist: Artist,
}

impl Catalog {
    /// Load the catalog shipped in `data/discography.json`.
    pub fn embedded() -> Result<Self> {
        Self::from_json(EMBEDDED_CATALOG)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let mut artist: Artist = serde_json::from_str(json)?;
        artist.albums.sort_by_key(|album| album.release_year);
        for album in &mut artist.albums {
            album.songs.sort_by_key(|song| song.track_number);
        }
        tracing::debug!(
            artist = %artist.name,
            albums = artist.albums.len(),
            "Catalog loaded"
        );
        Ok(Self { artist })
    }

    pub fn artist(&self) -> &Artist {
        &self.artist
    }

    pub fn albums(&self) -> &[Album] {
        &self.artist.albums
    }

    pub fn album(&self, album_id: &str) -> Option<&Album> {
        self.artist.albums.iter().find(|a| a.id == album_id)
    }

    /// Songs of an album, empty when the album is unknown.
    pub fn songs_by_album(&self, album_id: &str) -> &[Song] {
        self.album(album_id).map(|a| a.songs.as_slice()).unwrap_or_default()
    }

    pub fn song_total(&self) -> usize {
        self.artist.albums.iter().map(|a| a.songs.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_catalog_parses() {
        let catalog = Catalog::embedded().unwrap();
        assert_eq!(catalog.artist().name, "Taylor Swift");
        assert_eq!(catalog.albums().len(), 11);
        assert_eq!(catalog.song_total(), 161);

        let years: Vec<u16> = catalog.albums().iter().map(|a| a.release_year).collect();
        let mut sorted = years.clone();
        sorted.sort();
        assert_eq!(years, sorted);
    }

    #[test]
    fn songs_by_album_lookup() {
        let catalog = Catalog::embedded().unwrap();
        let songs = catalog.songs_by_album("fearless");
        assert_eq!(songs.len(), 13);
        assert_eq!(songs[2].title, "Love Story");
        assert!(catalog.songs_by_album("no-such-album").is_empty());
    }

    #[test]
    fn durations_parse() {
        let song = Song {
            id: "x".into(),
            title: "x".into(),
            track_number: 1,
            duration: "6:43".into(),
        };
        assert_eq!(song.duration_secs(), 403);

        let bad = Song { duration: "6:75".into(), ..song.clone() };
        assert_eq!(bad.duration_secs(), 0);
        let worse = Song { duration: "soon".into(), ..song };
        assert_eq!(worse.duration_secs(), 0);
    }

    #[test]
    fn album_color_parses() {
        let catalog = Catalog::embedded().unwrap();
        let album = catalog.album("taylor-swift").unwrap();
        assert_eq!(album.rgb(), Some((0xFF, 0x6B, 0x6B)));
    }
}
