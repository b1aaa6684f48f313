//! The picker facade
//!
//! [`Picker`] wires the pure pieces together: it feeds input events through
//! [`navigation::reduce`](crate::navigation::reduce), carries out the
//! returned effect (rebuilding the view, recording a selection), and
//! publishes notifications for whoever renders the picker.

use std::sync::Arc;

use crate::catalog::{Catalog, CatalogView};
use crate::config::Config;
use crate::error::Result;
use crate::events::{EventBus, InputEvent, Notification, NotificationReceiver, Output};
use crate::matcher::{collapse_variants, search_view};
use crate::navigation::{reduce, Effect, Navigation, NavigationState, Transition, ViewContext};
use crate::recents::RecencyList;
use crate::storage::{FileRecentsStore, RecentsStore};
use crate::types::{Emoji, FilterSettings, GridSize};

/// Construction options for a [`Picker`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PickerOptions {
    pub filters: FilterSettings,
    pub grid: GridSize,
    pub recents_capacity: usize,
    /// Show one entry per base emoji in search results
    pub collapse_variants: bool,
}

impl Default for PickerOptions {
    fn default() -> Self {
        Self {
            filters: FilterSettings::default(),
            grid: GridSize::DEFAULT,
            recents_capacity: GridSize::DEFAULT.page_size(),
            collapse_variants: false,
        }
    }
}

impl PickerOptions {
    pub fn from_config(config: &Config) -> Self {
        Self {
            filters: config.filter_settings(),
            grid: config.grid_size(),
            recents_capacity: config.recents_capacity(),
            collapse_variants: config.display.collapse_variants,
        }
    }
}

/// One grid page of the active view
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<'a> {
    /// View position of the first entry on the page
    pub offset: usize,
    pub entries: Vec<&'a Emoji>,
    /// Cursor position relative to `offset`
    pub highlighted: Option<usize>,
}

pub struct Picker {
    catalog: Arc<Catalog>,
    settings: FilterSettings,
    grid: GridSize,
    collapse: bool,
    recents: RecencyList,
    navigation: Navigation,
    view: CatalogView,
    store: Option<Box<dyn RecentsStore>>,
    bus: EventBus,
    input_method: Option<String>,
}

impl std::fmt::Debug for Picker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Picker")
            .field("settings", &self.settings)
            .field("grid", &self.grid)
            .field("navigation", &self.navigation)
            .field("view_len", &self.view.len())
            .field("recents", &self.recents.len())
            .field("has_store", &self.store.is_some())
            .finish()
    }
}

impl Picker {
    pub fn new(catalog: Arc<Catalog>, options: PickerOptions) -> Self {
        let mut picker = Self {
            catalog,
            settings: options.filters,
            grid: options.grid,
            collapse: options.collapse_variants,
            recents: RecencyList::new(options.recents_capacity),
            navigation: Navigation::new(),
            view: CatalogView::default(),
            store: None,
            bus: EventBus::new(),
            input_method: None,
        };
        picker.rebuild();
        picker
    }

    /// Build a picker from configuration: built-in catalog with the user's
    /// aliases, and recents persisted to the configured file.
    pub fn from_config(config: &Config) -> Result<Self> {
        let catalog = Catalog::builtin().with_custom_aliases(&config.aliases);
        let store = FileRecentsStore::new(config.recents_path()?);
        tracing::debug!(path = %store.path().display(), "Using recents file");
        Ok(Self::new(Arc::new(catalog), PickerOptions::from_config(config)).with_store(Box::new(store)))
    }

    /// Attach a persistence collaborator and seed recents from it.
    ///
    /// A store that fails to load leaves the recents list empty.
    pub fn with_store(mut self, store: Box<dyn RecentsStore>) -> Self {
        match store.load(&self.catalog) {
            Ok(snapshot) => self.seed_recents(snapshot),
            Err(e) => tracing::warn!(error = %e, "Failed to load recents, starting empty"),
        }
        self.store = Some(store);
        self
    }

    /// Replace the recents list with a stored snapshot, most recent first
    pub fn seed_recents(&mut self, snapshot: Vec<Emoji>) {
        self.recents = RecencyList::from_snapshot(self.recents.capacity(), snapshot);
        if self.navigation.state == NavigationState::Recents {
            self.rebuild();
        }
    }

    /// Subscribe to view, cursor and recents notifications
    pub fn subscribe(&mut self) -> NotificationReceiver {
        self.bus.subscribe()
    }

    /// Process one input event.
    ///
    /// Returns an output when the interaction produced something the host
    /// must act on. Persistence failures are logged, never returned.
    pub fn handle(&mut self, event: InputEvent) -> Option<Output> {
        let ctx = self.context();
        let Transition { navigation, effect } = reduce(self.navigation.clone(), &event, &ctx);
        self.navigation = navigation;

        match effect {
            Effect::None => None,
            Effect::Rebuild => {
                self.rebuild();
                None
            }
            Effect::CursorMoved => {
                self.bus.emit(Notification::CursorMoved {
                    cursor: self.cursor(),
                });
                None
            }
            Effect::Commit { index, close_after } => self.commit(index, close_after),
            Effect::Cancel => Some(Output::Canceled),
            Effect::ToggleInputMethod => Some(Output::InputMethodToggled),
        }
    }

    /// Apply new filter settings; the view is rebuilt and the cursor reset
    pub fn set_filter_settings(&mut self, settings: FilterSettings) {
        self.settings = settings;
        if !matches!(self.navigation.state, NavigationState::HelpBrowse { .. }) {
            self.navigation.cursor = Default::default();
        }
        self.rebuild();
        self.bus.emit(Notification::SettingsChanged);
    }

    /// Label of the active input method, for display
    pub fn set_input_method(&mut self, name: impl Into<String>) {
        self.input_method = Some(name.into());
    }

    pub fn input_method(&self) -> Option<&str> {
        self.input_method.as_deref()
    }

    pub fn state(&self) -> &NavigationState {
        &self.navigation.state
    }

    pub fn query(&self) -> &str {
        self.navigation.state.query()
    }

    /// Cursor position in the active view
    pub fn cursor(&self) -> Option<usize> {
        self.navigation.cursor.index()
    }

    /// Entries of the active view, in display order
    pub fn view(&self) -> Vec<&Emoji> {
        self.view.emojis(&self.catalog).collect()
    }

    pub fn view_len(&self) -> usize {
        self.view.len()
    }

    /// Entry under the cursor
    pub fn selected(&self) -> Option<&Emoji> {
        self.cursor()
            .and_then(|pos| self.view.emoji_at(pos, &self.catalog))
    }

    pub fn recents(&self) -> &RecencyList {
        &self.recents
    }

    /// The `rows x cols` page of the view that contains the cursor
    pub fn visible_page(&self) -> Page<'_> {
        let page_size = self.grid.page_size().max(1);
        let cursor = self.cursor().unwrap_or(0);
        let offset = (cursor / page_size) * page_size;
        let entries = self.view.indices()[offset.min(self.view.len())..]
            .iter()
            .take(page_size)
            .filter_map(|idx| self.catalog.get(*idx))
            .collect();
        Page {
            offset,
            entries,
            highlighted: self.cursor().map(|pos| pos - offset),
        }
    }

    pub fn grid(&self) -> GridSize {
        self.grid
    }

    pub fn filter_settings(&self) -> FilterSettings {
        self.settings
    }

    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    fn context(&self) -> ViewContext {
        ViewContext {
            view_len: self.view.len(),
            catalog_len: self.catalog.len(),
            highlighted: self.cursor().and_then(|pos| self.view.get(pos)),
            grid: self.grid,
        }
    }

    fn build_view(&self) -> CatalogView {
        match &self.navigation.state {
            NavigationState::Recents => {
                CatalogView::of_glyphs(&self.catalog, self.recents.iter().map(Emoji::glyph))
            }
            NavigationState::Search(query) => {
                let view = search_view(query, &self.catalog, &self.settings);
                if self.collapse {
                    collapse_variants(&view, &self.catalog)
                } else {
                    view
                }
            }
            NavigationState::HelpBrowse { .. } => CatalogView::full(&self.catalog),
        }
    }

    fn rebuild(&mut self) {
        self.view = self.build_view();
        self.navigation = std::mem::take(&mut self.navigation).reanchor(self.view.len());

        let kind = self.navigation.state.kind();
        tracing::debug!(view = ?kind, len = self.view.len(), cursor = ?self.cursor(), "View rebuilt");
        self.bus.emit(Notification::ViewChanged {
            view: kind,
            len: self.view.len(),
            cursor: self.cursor(),
        });
    }

    fn commit(&mut self, index: usize, close_after: bool) -> Option<Output> {
        let Some(emoji) = self.catalog.get(index).cloned() else {
            tracing::warn!(index, "Commit of unknown catalog index ignored");
            return None;
        };
        let glyph = emoji.glyph().to_string();
        tracing::debug!(glyph = glyph.as_str(), close_after, "Emoji selected");

        self.recents.record(emoji);
        if let Some(store) = &self.store {
            if let Err(e) = store.save(&self.recents.snapshot()) {
                tracing::warn!(error = %e, "Failed to save recents");
            }
        }
        self.bus.emit(Notification::RecentsChanged {
            len: self.recents.len(),
        });
        self.rebuild();

        Some(Output::Selected { glyph, close_after })
    }
}
