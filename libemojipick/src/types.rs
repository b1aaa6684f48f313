//! Core types for emojipick

use serde::{Deserialize, Serialize};

use crate::error::{PickError, Result};
use crate::matcher::normalize;

/// A catalog entry: one glyph and the names it can be searched by.
///
/// Constructed once when the catalog is built and never mutated afterwards.
/// The folded search keys are computed up front so ranking does not have to
/// re-normalize every alias on each keystroke.
#[derive(Debug, Clone, Serialize)]
pub struct Emoji {
    glyph: String,
    aliases: Vec<String>,
    min_version: u32,
    is_skin_tone_variant: bool,
    is_gender_variant: bool,
    base_identity: String,
    #[serde(skip)]
    search_keys: Vec<String>,
}

impl Emoji {
    /// Create a base (non-variant) emoji.
    ///
    /// Fails if the glyph is empty or no non-empty alias is given.
    pub fn new<S: AsRef<str>>(glyph: &str, aliases: &[S], min_version: u32) -> Result<Self> {
        if glyph.is_empty() {
            return Err(PickError::InvalidInput("emoji glyph cannot be empty".to_string()));
        }
        let aliases: Vec<String> = aliases
            .iter()
            .map(|a| a.as_ref().trim().to_string())
            .filter(|a| !a.is_empty())
            .collect();
        if aliases.is_empty() {
            return Err(PickError::InvalidInput(format!(
                "emoji {} needs at least one alias",
                glyph
            )));
        }
        let search_keys = aliases.iter().map(|a| normalize(a)).collect();

        Ok(Self {
            glyph: glyph.to_string(),
            aliases,
            min_version,
            is_skin_tone_variant: false,
            is_gender_variant: false,
            base_identity: glyph.to_string(),
            search_keys,
        })
    }

    /// Mark this emoji as a skin-tone modification of `base`
    pub fn skin_tone_of(mut self, base: &str) -> Self {
        self.is_skin_tone_variant = true;
        self.base_identity = base.to_string();
        self
    }

    /// Mark this emoji as a gendered modification of `base`
    pub fn gender_of(mut self, base: &str) -> Self {
        self.is_gender_variant = true;
        self.base_identity = base.to_string();
        self
    }

    pub fn glyph(&self) -> &str {
        &self.glyph
    }

    pub fn aliases(&self) -> &[String] {
        &self.aliases
    }

    /// The canonical (first) alias
    pub fn name(&self) -> &str {
        &self.aliases[0]
    }

    pub fn min_version(&self) -> u32 {
        self.min_version
    }

    pub fn is_skin_tone_variant(&self) -> bool {
        self.is_skin_tone_variant
    }

    pub fn is_gender_variant(&self) -> bool {
        self.is_gender_variant
    }

    pub fn base_identity(&self) -> &str {
        &self.base_identity
    }

    /// Identity used by the recents list. Two entries are the same emoji
    /// exactly when their glyphs are equal.
    pub fn identity(&self) -> &str {
        &self.glyph
    }

    /// Lower-cased, accent-stripped aliases in alias order
    pub(crate) fn search_keys(&self) -> &[String] {
        &self.search_keys
    }

    /// Append aliases that are not already present (compared after folding)
    pub(crate) fn extend_aliases<S: AsRef<str>>(&mut self, extra: &[S]) {
        for alias in extra {
            let alias = alias.as_ref().trim();
            if alias.is_empty() {
                continue;
            }
            let key = normalize(alias);
            if !self.search_keys.contains(&key) {
                self.aliases.push(alias.to_string());
                self.search_keys.push(key);
            }
        }
    }
}

impl PartialEq for Emoji {
    fn eq(&self, other: &Self) -> bool {
        self.glyph == other.glyph
    }
}

impl Eq for Emoji {}

/// User preferences that hide part of the catalog
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSettings {
    pub skin_tones_disabled: bool,
    pub genders_disabled: bool,
    /// Highest emoji version to show; `None` means no cutoff
    pub max_version: Option<u32>,
}

impl FilterSettings {
    /// Build settings from raw configuration values.
    ///
    /// A negative version cutoff means "no cutoff".
    pub fn new(skin_tones_disabled: bool, genders_disabled: bool, max_version: Option<i64>) -> Self {
        let max_version = max_version
            .filter(|v| *v >= 0)
            .map(|v| u32::try_from(v).unwrap_or(u32::MAX));
        Self {
            skin_tones_disabled,
            genders_disabled,
            max_version,
        }
    }
}

/// Dimensions of the visible emoji grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridSize {
    pub cols: usize,
    pub rows: usize,
}

impl GridSize {
    pub const DEFAULT: GridSize = GridSize { cols: 10, rows: 4 };

    /// Number of cells on one page
    pub fn page_size(&self) -> usize {
        self.cols * self.rows
    }
}

impl Default for GridSize {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Arrow key direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// Which way along the view this arrow moves the cursor
    pub fn heading(&self) -> Heading {
        match self {
            Direction::Left | Direction::Up => Heading::Backward,
            Direction::Right | Direction::Down => Heading::Forward,
        }
    }

    /// Whether the arrow moves a whole row rather than a single cell
    pub fn is_vertical(&self) -> bool {
        matches!(self, Direction::Up | Direction::Down)
    }
}

/// Direction of the last cursor movement along the view
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Heading {
    #[default]
    Forward,
    Backward,
}

impl Heading {
    pub fn sign(&self) -> isize {
        match self {
            Heading::Forward => 1,
            Heading::Backward => -1,
        }
    }
}
