//! Text query matching and ranking
//!
//! A query is compared against every alias of every allowed entry. Each
//! entry lands in the best tier any of its aliases reaches:
//!
//! 1. an alias equals the query
//! 2. an alias starts with the query
//! 3. an alias contains the query
//!
//! Results list tier 1, then tier 2, then tier 3. Inside a tier the
//! catalog declaration order is kept, so the output is fully determined by
//! the query, the catalog and the filter settings.
//!
//! Comparison is case-insensitive and ignores diacritics: both sides are
//! NFD-decomposed and stripped of combining marks before comparing.

use std::collections::HashSet;

use serde::Serialize;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use crate::catalog::{Catalog, CatalogView};
use crate::filter::is_allowed;
use crate::types::{Emoji, FilterSettings};

/// Ranking bucket of a match, best first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchTier {
    Exact = 1,
    Prefix = 2,
    Substring = 3,
}

impl MatchTier {
    pub fn rank(&self) -> u8 {
        *self as u8
    }
}

/// Fold text for comparison: trim, strip diacritics, lower-case
pub fn normalize(text: &str) -> String {
    text.trim()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Best tier reached by any alias of `emoji` for an already-folded query
pub fn tier_of(emoji: &Emoji, folded_query: &str) -> Option<MatchTier> {
    let mut best: Option<MatchTier> = None;
    for key in emoji.search_keys() {
        let tier = if key == folded_query {
            MatchTier::Exact
        } else if key.starts_with(folded_query) {
            MatchTier::Prefix
        } else if key.contains(folded_query) {
            MatchTier::Substring
        } else {
            continue;
        };
        if tier == MatchTier::Exact {
            return Some(tier);
        }
        best = Some(best.map_or(tier, |b| b.min(tier)));
    }
    best
}

/// Rank the catalog against `query`, returning `(tier, catalog index)` pairs.
///
/// An empty query yields every allowed entry, tagged `Exact`, in catalog
/// order.
fn rank_indices(query: &str, catalog: &Catalog, settings: &FilterSettings) -> Vec<(MatchTier, usize)> {
    let folded = normalize(query);
    let allowed = catalog
        .all()
        .iter()
        .enumerate()
        .filter(|(_, emoji)| is_allowed(emoji, settings));

    if folded.is_empty() {
        return allowed.map(|(idx, _)| (MatchTier::Exact, idx)).collect();
    }

    let mut buckets: [Vec<usize>; 3] = Default::default();
    for (idx, emoji) in allowed {
        if let Some(tier) = tier_of(emoji, &folded) {
            buckets[usize::from(tier.rank() - 1)].push(idx);
        }
    }

    let [exact, prefix, substring] = buckets;
    exact
        .into_iter()
        .map(|idx| (MatchTier::Exact, idx))
        .chain(prefix.into_iter().map(|idx| (MatchTier::Prefix, idx)))
        .chain(substring.into_iter().map(|idx| (MatchTier::Substring, idx)))
        .collect()
}

/// Search the catalog, best matches first
pub fn search<'a>(query: &str, catalog: &'a Catalog, settings: &FilterSettings) -> Vec<&'a Emoji> {
    rank_indices(query, catalog, settings)
        .into_iter()
        .filter_map(|(_, idx)| catalog.get(idx))
        .collect()
}

/// Search the catalog, keeping the tier each result was ranked in
pub fn search_ranked<'a>(
    query: &str,
    catalog: &'a Catalog,
    settings: &FilterSettings,
) -> Vec<(MatchTier, &'a Emoji)> {
    rank_indices(query, catalog, settings)
        .into_iter()
        .filter_map(|(tier, idx)| catalog.get(idx).map(|emoji| (tier, emoji)))
        .collect()
}

/// Search the catalog and return the result as a view over it
pub fn search_view(query: &str, catalog: &Catalog, settings: &FilterSettings) -> CatalogView {
    let indices = rank_indices(query, catalog, settings)
        .into_iter()
        .map(|(_, idx)| idx)
        .collect();
    CatalogView::from_indices(indices)
}

/// Keep only the first entry of each base emoji, preserving order
pub fn collapse_variants(view: &CatalogView, catalog: &Catalog) -> CatalogView {
    let mut seen = HashSet::new();
    let indices = view
        .indices()
        .iter()
        .copied()
        .filter(|idx| match catalog.get(*idx) {
            Some(emoji) => seen.insert(emoji.base_identity()),
            None => false,
        })
        .collect();
    CatalogView::from_indices(indices)
}
