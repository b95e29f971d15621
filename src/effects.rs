// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Effect name tables for Divoom Pixoo displays.
//!
//! The device selects what is shown on the matrix by numeric id. These
//! tables map between human-readable effect names and the vendor-internal
//! ids, reverse engineered from the different Divoom dials, clocks and
//! channels. The ids are managed by Divoom's online system, so the tables
//! may need updates from time to time.
//!
//! Each table is bidirectional and validated at construction: every
//! declared name and id must be unique in its group. Only [`FACES`] is
//! wired into the live effect list of the screen light; the remaining
//! groups are lookup data for the other channel types.
//!
//! # Examples
//!
//! ```
//! use pixoor_lib::effects::FACES;
//!
//! let id = FACES.id("Normal - Classic Digital Clock").unwrap();
//! assert_eq!(id, 10);
//! assert_eq!(FACES.name(10), Some("Normal - Classic Digital Clock"));
//! ```

use std::collections::HashMap;
use std::sync::LazyLock;

/// An immutable bidirectional mapping between effect names and device ids.
///
/// Both directions are total over the declared entries; construction
/// panics on a duplicate name or id, so a table that loads is guaranteed
/// to round-trip.
#[derive(Debug)]
pub struct EffectTable {
    entries: &'static [(&'static str, u32)],
    by_name: HashMap<&'static str, u32>,
    by_id: HashMap<u32, &'static str>,
}

impl EffectTable {
    /// Builds a table from a static entry list.
    ///
    /// # Panics
    ///
    /// Panics if a name or an id appears twice. The entry lists are
    /// compile-time constants, so this only fires on a bad edit to them.
    #[must_use]
    fn new(entries: &'static [(&'static str, u32)]) -> Self {
        let mut by_name = HashMap::with_capacity(entries.len());
        let mut by_id = HashMap::with_capacity(entries.len());
        for &(name, id) in entries {
            assert!(
                by_name.insert(name, id).is_none(),
                "duplicate effect name: {name}"
            );
            assert!(
                by_id.insert(id, name).is_none(),
                "duplicate effect id: {id}"
            );
        }
        Self {
            entries,
            by_name,
            by_id,
        }
    }

    /// Looks up the device id for an effect name.
    #[must_use]
    pub fn id(&self, name: &str) -> Option<u32> {
        self.by_name.get(name).copied()
    }

    /// Looks up the effect name for a device id.
    #[must_use]
    pub fn name(&self, id: u32) -> Option<&'static str> {
        self.by_id.get(&id).copied()
    }

    /// Returns true if the table contains the given effect name.
    #[must_use]
    pub fn contains_name(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// Returns all effect names in declaration order.
    #[must_use]
    pub fn names(&self) -> Vec<&'static str> {
        self.entries.iter().map(|&(name, _)| name).collect()
    }

    /// Returns the number of entries in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the table has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns an iterator over `(name, id)` entries in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, u32)> + '_ {
        self.entries.iter().copied()
    }
}

/// The top-level display channels.
pub static CHANNELS: LazyLock<EffectTable> = LazyLock::new(|| {
    EffectTable::new(&[
        ("Faces", 0),
        ("Cloud", 1),
        ("Visualizer", 2),
        ("Custom", 3),
        ("Black", 4),
    ])
});

/// Sub-channels of the cloud channel.
pub static CLOUD_CHANNELS: LazyLock<EffectTable> = LazyLock::new(|| {
    EffectTable::new(&[
        ("Recommend gallery", 0),
        ("Creation album", 1),
        ("Favourite", 2),
        ("Subscribe artist", 3),
    ])
});

/// Sub-channels of the audio visualizer channel.
pub static VISUALIZER_CHANNELS: LazyLock<EffectTable> = LazyLock::new(|| {
    EffectTable::new(&[
        ("Rainbow line", 0),
        ("Worm", 1),
        ("Green bottom", 2),
        ("Blue bottom", 3),
        ("Geen rain", 4),
        ("EQ", 5),
        ("Green mid", 6),
        ("Rainbow bottom", 7),
        ("Rainbow rain", 8),
        ("Blue mirror", 9),
        ("Duck", 10),
        ("Dog on stage", 11),
    ])
});

/// Sub-channels of the custom channel.
pub static CUSTOM_CHANNELS: LazyLock<EffectTable> = LazyLock::new(|| {
    EffectTable::new(&[("Custom 1", 0), ("Custom 2", 1), ("Custom 3", 2)])
});

/// The clock faces channel. This is the table wired into the screen
/// light's live effect list; the names are vendor data, typos included.
pub static FACES: LazyLock<EffectTable> = LazyLock::new(|| {
    EffectTable::new(&[
        ("Custom - Clock Collections", 3),
        ("Custom - DIY Analog Clock", 283),
        ("Custom - DIY Digit Pic Clock", 285),
        ("Custom - DIY Digital Clock", 284),
        ("Custom - DIY Net Data Clock", 310),
        ("financial - Bitcoin ", 64),
        ("financial - Cyber Currency", 206),
        ("financial - Exchange Rate", 240),
        ("financial - Stock - 2", 12),
        ("financial - Stock - Detail", 196),
        ("Game - Fortnite", 208),
        ("Game - League of Legends", 90),
        ("Game - Overwatch", 92),
        ("Game - PUBG", 696),
        ("HOLIDAYS - Anniversary Green", 76),
        ("HOLIDAYS - Anniversary Pink", 74),
        ("HOLIDAYS - Christmas calendar", 214),
        ("HOLIDAYS - Christmas clock1", 126),
        ("HOLIDAYS - Christmas clock2", 216),
        ("HOLIDAYS - Christmas girl room clock", 218),
        ("HOLIDAYS - Happy New Year", 238),
        ("HOLIDAYS - Shiba Inu Christmas", 212),
        ("Normal - Automation clock", 128),
        ("Normal - bun one clcok", 138),
        ("Normal - bun two clcok", 140),
        ("Normal - Classic Digital Clock", 10),
        ("Normal - Digital Frame", 180),
        ("Normal - Girl's room clock", 176),
        ("Normal - iced lemonade clock", 144),
        ("Normal - Lucky Casino Clock", 178),
        ("Normal - Mondrian Pixel Art", 108),
        ("Normal - Oriental zodiac", 124),
        ("Normal - pixel display clock", 142),
        ("Normal - Plush tiger and rainbow", 230),
        ("Normal - Retrclcok", 174),
        ("Normal - Shiba Inu | Tiger", 232),
        ("Normal - sleeping kitty clock", 132),
        ("Normal - wrist watch", 122),
        ("Pixel Art - Cloud Channel", 57),
        ("Pixel Art - Custom 1", 61),
        ("Pixel Art - Custom 2", 63),
        ("Pixel Art - Custom3", 65),
        ("Pixel Art - Visualizer", 59),
        ("Plan - Plan1", 201),
        ("Plan - Plan2", 189),
        ("Plan - Plan3", 191),
        ("Plan - Plan4", 193),
        ("Plan - Plan5", 195),
        ("Smart hardware - Fitbit clock", 202),
        ("Smart hardware - HUAWEI health", 4),
        ("Smart hardware - PC Monitor", 625),
        ("Smart hardware - Pulsoid Dial", 846),
        ("Social - Bilibili Account", 46),
        ("Social - Bilibili Concept Account", 52),
        ("Social - Bilibili Concept Video", 54),
        ("Social - Bilibili Stream", 116),
        ("Social - Bilibili Video", 114),
        ("Social - Bilibili-works", 48),
        ("Social - Divoom", 160),
        ("Social - DouYu Stream", 58),
        ("Social - Facebook Photo", 407),
        ("Social - Facebook Video", 26),
        ("Social - Influencer ", 102),
        ("Social - New Twitch Account", 248),
        ("Social - New Twitch Stream", 252),
        ("Social - Pinterest", 665),
        ("Social - reddit", 664),
        ("Social - TikTok User", 628),
        ("Social - TikTok Video", 222),
        ("Social - Tumblr", 666),
        ("Social - Twitch Live List", 258),
        ("Social - X- Account", 100),
        ("Social - X- Post", 24),
        ("Social - YouTube Account List", 55),
        ("Social - YouTube Account", 38),
        ("Social - YouTube Video List", 53),
        ("Social - YouTube Video", 40),
        ("Sport - F1\u{ae} Clock", 298),
        ("Sport - MLB", 5),
        ("Sport - NBA\u{ae} Live Clock", 304),
        ("Sport - NBA\u{ae} Matches Clock", 292),
        ("Sport - NBA\u{ae} Teams Clock", 296),
        ("Sport - NHL", 602),
        ("Sport - URFA\u{ae} League Clock", 302),
        ("TOOLS -  Message Board(English only)", 104),
        ("TOOLS - Amazon music", 188),
        ("TOOLS - Custom RSS", 246),
        ("TOOLS - Pink Message Board", 98),
        ("TOOLS - QR code", 282),
        ("TOOLS - RSS Clock", 234),
        ("TOOLS - Spotify Clock ", 186),
        ("TOOLS - Tidal Time", 677),
        ("TOOLS - Vintage Message Board", 224),
        ("TOOLS - World Clocks", 72),
        ("Weather - Big Time", 152),
        ("Weather - Chameleon clock", 136),
        ("Weather - pink design clock", 170),
        ("Weather - Shiba Inu clock", 168),
        ("Weather - Valoub Clock", 146),
        ("Weather - Weather ONE", 182),
        ("Weather - Weather TWO", 172),
    ])
});

#[cfg(test)]
mod tests {
    use super::*;

    fn all_tables() -> [&'static EffectTable; 5] {
        [
            &CHANNELS,
            &CLOUD_CHANNELS,
            &VISUALIZER_CHANNELS,
            &CUSTOM_CHANNELS,
            &FACES,
        ]
    }

    #[test]
    fn tables_load() {
        for table in all_tables() {
            assert!(!table.is_empty());
        }
    }

    #[test]
    fn bijection_round_trip() {
        for table in all_tables() {
            for (name, id) in table.iter() {
                assert_eq!(table.id(name), Some(id), "name -> id for {name}");
                assert_eq!(table.name(id), Some(name), "id -> name for {id}");
            }
        }
    }

    #[test]
    fn names_in_declaration_order() {
        let names = CHANNELS.names();
        assert_eq!(names, ["Faces", "Cloud", "Visualizer", "Custom", "Black"]);
    }

    #[test]
    fn faces_known_entries() {
        assert_eq!(FACES.id("Normal - Classic Digital Clock"), Some(10));
        assert_eq!(FACES.id("Smart hardware - Pulsoid Dial"), Some(846));
        assert_eq!(FACES.name(64), Some("financial - Bitcoin "));
    }

    #[test]
    fn unknown_lookups() {
        assert_eq!(FACES.id("No Such Face"), None);
        assert_eq!(FACES.name(1_000_000), None);
        assert!(!FACES.contains_name("No Such Face"));
    }

    #[test]
    fn len_matches_names() {
        assert_eq!(FACES.len(), FACES.names().len());
    }
}
