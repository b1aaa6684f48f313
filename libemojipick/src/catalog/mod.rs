//! The emoji catalog
//!
//! A read-only, ordered table of entries built once at startup. Order is
//! declaration order and never changes, which is what makes search results
//! and the browse-all view deterministic. Share it between pickers with an
//! `Arc`; nothing mutates it after construction.

mod data;

use std::collections::{BTreeMap, HashMap};

use crate::types::Emoji;
use data::{RawEmoji, Variant, EMOJIS};

#[derive(Debug, Clone)]
pub struct Catalog {
    entries: Vec<Emoji>,
    positions: HashMap<String, usize>,
}

impl Catalog {
    /// Build the catalog from the built-in table
    pub fn builtin() -> Self {
        let entries = EMOJIS.iter().filter_map(build_raw).collect();
        Self::from_entries(entries)
    }

    /// Build a catalog from explicit entries, keeping their order.
    ///
    /// A glyph that appears twice keeps its first entry.
    pub fn from_entries(entries: Vec<Emoji>) -> Self {
        let mut kept = Vec::with_capacity(entries.len());
        let mut positions = HashMap::with_capacity(entries.len());
        for emoji in entries {
            if positions.contains_key(emoji.glyph()) {
                tracing::warn!(glyph = emoji.glyph(), "Duplicate catalog entry ignored");
                continue;
            }
            positions.insert(emoji.glyph().to_string(), kept.len());
            kept.push(emoji);
        }
        Self {
            entries: kept,
            positions,
        }
    }

    /// Merge user-defined aliases into existing entries.
    ///
    /// Extra aliases go after the built-in ones, so the canonical name is
    /// unchanged. Glyphs missing from the catalog are skipped.
    pub fn with_custom_aliases(mut self, aliases: &BTreeMap<String, Vec<String>>) -> Self {
        for (glyph, extra) in aliases {
            match self.positions.get(glyph.as_str()) {
                Some(&idx) => self.entries[idx].extend_aliases(extra),
                None => {
                    tracing::warn!(glyph = glyph.as_str(), "Custom aliases for unknown emoji ignored");
                }
            }
        }
        self
    }

    /// Every entry in declaration order
    pub fn all(&self) -> &[Emoji] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Emoji> {
        self.entries.get(index)
    }

    /// Declaration index of the entry with this glyph
    pub fn position(&self, glyph: &str) -> Option<usize> {
        self.positions.get(glyph).copied()
    }

    pub fn find(&self, glyph: &str) -> Option<&Emoji> {
        self.position(glyph).and_then(|idx| self.get(idx))
    }
}

fn build_raw(raw: &RawEmoji) -> Option<Emoji> {
    let emoji = match Emoji::new(raw.glyph, raw.aliases, raw.version) {
        Ok(emoji) => emoji,
        Err(e) => {
            tracing::error!(glyph = raw.glyph, error = %e, "Malformed built-in emoji");
            return None;
        }
    };
    Some(match raw.variant {
        Variant::Base => emoji,
        Variant::SkinTone(of) => emoji.skin_tone_of(of),
        Variant::Gender(of) => emoji.gender_of(of),
    })
}

/// An ordered selection of catalog entries, stored as catalog indices.
///
/// Views are rebuilt whenever the query or the filter settings change;
/// they are never edited in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogView {
    indices: Vec<usize>,
}

impl CatalogView {
    pub fn from_indices(indices: Vec<usize>) -> Self {
        Self { indices }
    }

    /// Every catalog entry, unfiltered
    pub fn full(catalog: &Catalog) -> Self {
        Self {
            indices: (0..catalog.len()).collect(),
        }
    }

    /// View over the given emojis, skipping any the catalog does not know
    pub fn of_glyphs<'a, I>(catalog: &Catalog, glyphs: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        Self {
            indices: glyphs
                .into_iter()
                .filter_map(|glyph| catalog.position(glyph))
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// Catalog index at view position `pos`
    pub fn get(&self, pos: usize) -> Option<usize> {
        self.indices.get(pos).copied()
    }

    pub fn emoji_at<'a>(&self, pos: usize, catalog: &'a Catalog) -> Option<&'a Emoji> {
        self.get(pos).and_then(|idx| catalog.get(idx))
    }

    /// Resolve the view against its catalog
    pub fn emojis<'a>(&'a self, catalog: &'a Catalog) -> impl Iterator<Item = &'a Emoji> + 'a {
        self.indices.iter().filter_map(move |idx| catalog.get(*idx))
    }
}
