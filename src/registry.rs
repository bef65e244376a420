//! The fixed set of event icons and their drawers.

use std::fmt;
use std::str::FromStr;

use crate::glyphs;
use crate::layer::{Glyph, Plated, with_plate};

// ============================================================================
// IconKey
// ============================================================================

/// Identifies one icon and its output file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconKey {
    Life,
    Work,
    Love,
    Celebration,
    Birthday,
    Graduation,
    Flight,
    Travel,
    Home,
    Fitness,
    Study,
    Game,
    Music,
    Eating,
    Pizza,
    Coffee,
    Toilet,
    Moon,
    Walk,
    Picnic,
    Thinking,
    Art,
    Phone,
    Soccer,
    Basketball,
    Archery,
    Swimming,
    Flower,
}

impl IconKey {
    /// Every key, in registry order.
    pub const ALL: [IconKey; 28] = [
        IconKey::Life,
        IconKey::Work,
        IconKey::Love,
        IconKey::Celebration,
        IconKey::Birthday,
        IconKey::Graduation,
        IconKey::Flight,
        IconKey::Travel,
        IconKey::Home,
        IconKey::Fitness,
        IconKey::Study,
        IconKey::Game,
        IconKey::Music,
        IconKey::Eating,
        IconKey::Pizza,
        IconKey::Coffee,
        IconKey::Toilet,
        IconKey::Moon,
        IconKey::Walk,
        IconKey::Picnic,
        IconKey::Thinking,
        IconKey::Art,
        IconKey::Phone,
        IconKey::Soccer,
        IconKey::Basketball,
        IconKey::Archery,
        IconKey::Swimming,
        IconKey::Flower,
    ];

    /// The short identifier, e.g. `"flight"`.
    pub fn as_str(self) -> &'static str {
        match self {
            IconKey::Life => "life",
            IconKey::Work => "work",
            IconKey::Love => "love",
            IconKey::Celebration => "celebration",
            IconKey::Birthday => "birthday",
            IconKey::Graduation => "graduation",
            IconKey::Flight => "flight",
            IconKey::Travel => "travel",
            IconKey::Home => "home",
            IconKey::Fitness => "fitness",
            IconKey::Study => "study",
            IconKey::Game => "game",
            IconKey::Music => "music",
            IconKey::Eating => "eating",
            IconKey::Pizza => "pizza",
            IconKey::Coffee => "coffee",
            IconKey::Toilet => "toilet",
            IconKey::Moon => "moon",
            IconKey::Walk => "walk",
            IconKey::Picnic => "picnic",
            IconKey::Thinking => "thinking",
            IconKey::Art => "art",
            IconKey::Phone => "phone",
            IconKey::Soccer => "soccer",
            IconKey::Basketball => "basketball",
            IconKey::Archery => "archery",
            IconKey::Swimming => "swimming",
            IconKey::Flower => "flower",
        }
    }

    /// Base name shared by the PNG and its image set, e.g. `"icon_flight"`.
    pub fn asset_name(self) -> String {
        format!("icon_{}", self.as_str())
    }

    /// Output file name, e.g. `"icon_flight.png"`.
    pub fn file_name(self) -> String {
        format!("{}.png", self.asset_name())
    }

    /// The raw line art for this icon, without the plate.
    pub fn glyph(self) -> Glyph {
        match self {
            IconKey::Life => glyphs::life(),
            IconKey::Work => glyphs::work(),
            IconKey::Love => glyphs::love(),
            IconKey::Celebration => glyphs::celebration(),
            IconKey::Birthday => glyphs::birthday(),
            IconKey::Graduation => glyphs::graduation(),
            IconKey::Flight => glyphs::flight(),
            IconKey::Travel => glyphs::travel(),
            IconKey::Home => glyphs::home(),
            IconKey::Fitness => glyphs::fitness(),
            IconKey::Study => glyphs::study(),
            IconKey::Game => glyphs::game(),
            IconKey::Music => glyphs::music(),
            IconKey::Eating => glyphs::eating(),
            IconKey::Pizza => glyphs::pizza(),
            IconKey::Coffee => glyphs::coffee(),
            IconKey::Toilet => glyphs::toilet(),
            IconKey::Moon => glyphs::moon(),
            IconKey::Walk => glyphs::walk(),
            IconKey::Picnic => glyphs::picnic(),
            IconKey::Thinking => glyphs::thinking(),
            IconKey::Art => glyphs::art(),
            IconKey::Phone => glyphs::phone(),
            IconKey::Soccer => glyphs::soccer(),
            IconKey::Basketball => glyphs::basketball(),
            IconKey::Archery => glyphs::archery(),
            IconKey::Swimming => glyphs::swimming(),
            IconKey::Flower => glyphs::flower(),
        }
    }
}

impl fmt::Display for IconKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string names no known icon.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown icon key `{0}`")]
pub struct UnknownIconKey(pub String);

impl FromStr for IconKey {
    type Err = UnknownIconKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        IconKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| UnknownIconKey(s.to_string()))
    }
}

// ============================================================================
// Registry
// ============================================================================

/// Icon drawer registered under a key: the glyph with the plate beneath it.
pub type IconDrawer = Plated<Glyph>;

/// Insertion-ordered mapping from [`IconKey`] to its plated drawer.
///
/// Built once and read-only afterwards. Each glyph is wrapped with the plate
/// exactly once when the registry is built.
#[derive(Debug, Clone)]
pub struct Registry {
    entries: Vec<(IconKey, IconDrawer)>,
}

impl Registry {
    /// Builds the registry of every built-in icon.
    pub fn builtin() -> Self {
        Self::with_keys(&IconKey::ALL)
    }

    /// Builds a registry restricted to `keys`, keeping their order.
    ///
    /// Duplicate keys are registered once.
    pub fn with_keys(keys: &[IconKey]) -> Self {
        let mut entries: Vec<(IconKey, IconDrawer)> = Vec::with_capacity(keys.len());
        for &key in keys {
            if entries.iter().any(|(existing, _)| *existing == key) {
                continue;
            }
            entries.push((key, with_plate(key.glyph())));
        }
        Self { entries }
    }

    pub fn get(&self, key: IconKey) -> Option<&IconDrawer> {
        self.entries
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, drawer)| drawer)
    }

    /// Iterates over `(key, drawer)` pairs in registry order.
    pub fn iter(&self) -> impl Iterator<Item = (IconKey, &IconDrawer)> {
        self.entries.iter().map(|(key, drawer)| (*key, drawer))
    }

    pub fn keys(&self) -> impl Iterator<Item = IconKey> + '_ {
        self.entries.iter().map(|(key, _)| *key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn builtin_has_every_key_in_order() {
        let registry = Registry::builtin();
        assert_eq!(registry.len(), 28);
        let keys: Vec<_> = registry.keys().collect();
        assert_eq!(keys, IconKey::ALL.to_vec());
        assert_eq!(keys[0], IconKey::Life);
        assert_eq!(keys[27], IconKey::Flower);
    }

    #[test]
    fn file_names_are_unique() {
        let names: HashSet<_> = IconKey::ALL.iter().map(|k| k.file_name()).collect();
        assert_eq!(names.len(), IconKey::ALL.len());
        assert_eq!(IconKey::Flight.file_name(), "icon_flight.png");
        assert_eq!(IconKey::Flight.asset_name(), "icon_flight");
    }

    #[test]
    fn keys_parse_back() {
        for key in IconKey::ALL {
            assert_eq!(key.as_str().parse::<IconKey>(), Ok(key));
            assert_eq!(key.to_string(), key.as_str());
        }
        assert_eq!(
            "rocket".parse::<IconKey>(),
            Err(UnknownIconKey("rocket".to_string()))
        );
    }

    #[test]
    fn every_glyph_has_line_art() {
        for key in IconKey::ALL {
            assert!(!key.glyph().is_empty(), "{key} has no shapes");
        }
    }

    #[test]
    fn registered_drawer_wraps_the_glyph() {
        let registry = Registry::builtin();
        let drawer = registry.get(IconKey::Moon).unwrap();
        assert_eq!(drawer.inner(), &IconKey::Moon.glyph());
    }

    #[test]
    fn subset_registry_dedupes() {
        let registry = Registry::with_keys(&[IconKey::Pizza, IconKey::Home, IconKey::Pizza]);
        let keys: Vec<_> = registry.keys().collect();
        assert_eq!(keys, vec![IconKey::Pizza, IconKey::Home]);
        assert!(registry.get(IconKey::Life).is_none());
    }
}
