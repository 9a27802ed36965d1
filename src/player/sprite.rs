//! Audio-sprite map: note key -> clip region inside one asset.

use crate::note::Note;
use log::warn;
use std::collections::HashMap;

/// A clip region within an audio asset, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sprite {
    pub start_ms: u64,
    pub length_ms: u64,
}

impl Sprite {
    pub fn end_ms(&self) -> u64 {
        self.start_ms.saturating_add(self.length_ms)
    }
}

/// Ordered mapping from note keys (`"C5"`) to sprites.
#[derive(Debug, Clone, Default)]
pub struct SpriteMap {
    entries: Vec<(String, Sprite)>,
    index: HashMap<String, usize>,
}

impl SpriteMap {
    /// Lay out one `clip_length_ms` clip per semitone from `start` through
    /// `end` inclusive, back to back from offset zero.
    ///
    /// A reversed range (`start > end`) yields an empty map.
    pub fn chromatic(start: Note, end: Note, clip_length_ms: u64) -> Self {
        if start > end {
            warn!(
                "Note range {}..={} is reversed; no sprites will be mapped",
                start, end
            );
        }

        let mut map = SpriteMap::default();
        let mut note = start;
        let mut offset = 0;
        while note <= end {
            map.insert(
                note.to_key(),
                Sprite {
                    start_ms: offset,
                    length_ms: clip_length_ms,
                },
            );
            offset = offset.saturating_add(clip_length_ms);
            note = note.increment();
        }
        map
    }

    fn insert(&mut self, key: String, sprite: Sprite) {
        self.index.insert(key.clone(), self.entries.len());
        self.entries.push((key, sprite));
    }

    pub fn get(&self, key: &str) -> Option<Sprite> {
        self.index.get(key).map(|&i| self.entries[i].1)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in pitch order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Sprite)> {
        self.entries.iter().map(|(key, sprite)| (key.as_str(), *sprite))
    }

    /// Milliseconds of audio the map spans.
    pub fn total_ms(&self) -> u64 {
        self.entries.last().map(|(_, sprite)| sprite.end_ms()).unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::note::chromatic_distance;

    fn note(token: &str) -> Note {
        Note::parse(token).unwrap()
    }

    #[test]
    fn test_entry_count_and_offsets() {
        let ranges = [("C3", "B6"), ("A4", "A4"), ("Bb2", "Db3"), ("C0", "C1")];
        for (start, end) in ranges {
            let map = SpriteMap::chromatic(note(start), note(end), 1500);
            let expected = chromatic_distance(&note(start), &note(end)) + 1;
            assert_eq!(map.len() as i32, expected, "{}..={}", start, end);

            for (i, (_, sprite)) in map.iter().enumerate() {
                assert_eq!(sprite.start_ms, i as u64 * 1500);
                assert_eq!(sprite.length_ms, 1500);
            }
        }
    }

    #[test]
    fn test_keys_follow_chromatic_walk() {
        let map = SpriteMap::chromatic(note("A4"), note("D5"), 100);
        let keys: Vec<&str> = map.iter().map(|(key, _)| key).collect();
        assert_eq!(keys, vec!["A4", "Bb4", "B4", "C5", "Db5", "D5"]);
        assert_eq!(
            map.get("C5"),
            Some(Sprite {
                start_ms: 300,
                length_ms: 100
            })
        );
        assert_eq!(map.total_ms(), 600);
    }

    #[test]
    fn test_reversed_range_is_empty() {
        let map = SpriteMap::chromatic(note("C5"), note("B4"), 100);
        assert!(map.is_empty());
        assert_eq!(map.total_ms(), 0);
        assert!(map.get("C5").is_none());
    }
}
