//! Navigation state machine
//!
//! The transition function is pure: `(Navigation, InputEvent, ViewContext)
//! -> Transition`. It never touches the catalog, the recents list or any
//! collaborator. Instead it returns an [`Effect`] describing what the
//! caller has to do next (rebuild the view, record a selection, ...). The
//! [`Picker`](crate::picker::Picker) is that caller.
//!
//! Every event is accepted in every state; events without a transition
//! come back as `Effect::None` with the navigation unchanged.

use crate::events::{InputEvent, ViewKind};
use crate::types::{Direction, GridSize, Heading};

/// Which list is active
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum NavigationState {
    /// Recently used emojis; the query is empty
    #[default]
    Recents,
    /// Ranked search results for the query
    Search(String),
    /// The whole unfiltered catalog, entered from `anchor` (a catalog index)
    HelpBrowse { anchor: usize, direction: Heading },
}

impl NavigationState {
    pub fn kind(&self) -> ViewKind {
        match self {
            NavigationState::Recents => ViewKind::Recents,
            NavigationState::Search(_) => ViewKind::Search,
            NavigationState::HelpBrowse { .. } => ViewKind::HelpBrowse,
        }
    }

    /// Current query text; empty outside `Search`
    pub fn query(&self) -> &str {
        match self {
            NavigationState::Search(query) => query,
            _ => "",
        }
    }
}

/// Position in the active view plus the direction of the last move.
///
/// `index` is `None` exactly when the view is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cursor {
    index: Option<usize>,
    heading: Heading,
}

impl Cursor {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn at(index: usize) -> Self {
        Self {
            index: Some(index),
            heading: Heading::Forward,
        }
    }

    /// Cursor for a freshly built view of `len` entries
    pub fn reset(len: usize) -> Self {
        if len == 0 {
            Self::none()
        } else {
            Self::at(0)
        }
    }

    pub fn index(&self) -> Option<usize> {
        self.index
    }

    pub fn heading(&self) -> Heading {
        self.heading
    }

    /// Move `distance` cells along a view of `len` entries.
    ///
    /// A move that would leave the view stops on the boundary; a move that
    /// starts on the boundary wraps to the other end.
    pub fn step(self, distance: usize, heading: Heading, len: usize) -> Self {
        if len == 0 {
            return Self {
                index: None,
                heading,
            };
        }
        let last = len - 1;
        let current = self.index.unwrap_or(0).min(last);
        let next = match heading {
            Heading::Forward if current == last => 0,
            Heading::Forward => current.saturating_add(distance).min(last),
            Heading::Backward if current == 0 => last,
            Heading::Backward => current.saturating_sub(distance),
        };
        Self {
            index: Some(next),
            heading,
        }
    }
}

/// Navigation state plus cursor
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Navigation {
    pub state: NavigationState,
    pub cursor: Cursor,
}

impl Navigation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Re-anchor the cursor after the view was rebuilt with `len` entries.
    ///
    /// Browse mode keeps the cursor it was given (it points at the anchor);
    /// every other view starts over at the first entry.
    pub fn reanchor(self, len: usize) -> Self {
        let cursor = match (&self.state, self.cursor.index) {
            (NavigationState::HelpBrowse { .. }, Some(idx)) if idx < len => self.cursor,
            _ => Cursor::reset(len),
        };
        Self { cursor, ..self }
    }
}

/// What the picker knows about the current view when an event arrives
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewContext {
    /// Entries in the active view
    pub view_len: usize,
    /// Entries in the full catalog
    pub catalog_len: usize,
    /// Catalog index of the entry under the cursor
    pub highlighted: Option<usize>,
    pub grid: GridSize,
}

/// Side effect requested by a transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// The view must be rebuilt and the cursor re-anchored
    Rebuild,
    /// Only the cursor moved
    CursorMoved,
    /// Record and emit the catalog entry at `index`
    Commit { index: usize, close_after: bool },
    /// Tell the host the user backed out
    Cancel,
    ToggleInputMethod,
}

/// Result of a transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub navigation: Navigation,
    pub effect: Effect,
}

impl Transition {
    fn stay(navigation: Navigation) -> Self {
        Self {
            navigation,
            effect: Effect::None,
        }
    }

    fn to(navigation: Navigation, effect: Effect) -> Self {
        Self { navigation, effect }
    }
}

/// Pure transition function
///
/// Takes the current navigation and an input event, returns the new
/// navigation and the effect the caller must carry out.
pub fn reduce(nav: Navigation, event: &InputEvent, ctx: &ViewContext) -> Transition {
    match event {
        InputEvent::TextChanged(text) => text_changed(nav, text),

        InputEvent::Commit { keep_open } => match ctx.highlighted {
            Some(index) => Transition::to(
                Navigation::new(),
                Effect::Commit {
                    index,
                    close_after: !keep_open,
                },
            ),
            None => Transition::stay(nav),
        },

        InputEvent::Cancel => match nav.state {
            NavigationState::Search(_) => Transition::to(Navigation::new(), Effect::Rebuild),
            NavigationState::Recents | NavigationState::HelpBrowse { .. } => {
                Transition::to(nav, Effect::Cancel)
            }
        },

        InputEvent::Arrow(direction) => arrow(nav, *direction, ctx),

        InputEvent::BrowseAllToggle => browse_all(nav, ctx),

        InputEvent::InputMethodToggle => Transition::to(nav, Effect::ToggleInputMethod),

        InputEvent::ScrollDelta(amount) => scroll(nav, *amount, ctx),
    }
}

fn text_changed(nav: Navigation, text: &str) -> Transition {
    let state = if text.is_empty() {
        NavigationState::Recents
    } else {
        NavigationState::Search(text.to_string())
    };
    if state == nav.state {
        return Transition::stay(nav);
    }
    Transition::to(
        Navigation {
            state,
            cursor: nav.cursor,
        },
        Effect::Rebuild,
    )
}

fn arrow(nav: Navigation, direction: Direction, ctx: &ViewContext) -> Transition {
    if ctx.view_len == 0 {
        return Transition::stay(nav);
    }
    let distance = if direction.is_vertical() {
        ctx.grid.cols.max(1)
    } else {
        1
    };
    let heading = direction.heading();
    let cursor = nav.cursor.step(distance, heading, ctx.view_len);
    let state = match nav.state {
        NavigationState::HelpBrowse { anchor, .. } => NavigationState::HelpBrowse {
            anchor,
            direction: heading,
        },
        other => other,
    };
    Transition::to(Navigation { state, cursor }, Effect::CursorMoved)
}

fn browse_all(nav: Navigation, ctx: &ViewContext) -> Transition {
    match nav.state {
        NavigationState::Recents => {
            if ctx.catalog_len == 0 {
                return Transition::stay(nav);
            }
            let anchor = ctx
                .highlighted
                .filter(|idx| *idx < ctx.catalog_len)
                .unwrap_or(0);
            Transition::to(
                Navigation {
                    state: NavigationState::HelpBrowse {
                        anchor,
                        direction: Heading::Forward,
                    },
                    cursor: Cursor::at(anchor),
                },
                Effect::Rebuild,
            )
        }
        NavigationState::HelpBrowse { anchor, direction } => {
            let page = ctx.grid.page_size().max(1);
            let cursor = nav.cursor.step(page, direction, ctx.catalog_len);
            Transition::to(
                Navigation {
                    state: NavigationState::HelpBrowse { anchor, direction },
                    cursor,
                },
                Effect::CursorMoved,
            )
        }
        NavigationState::Search(_) => Transition::stay(nav),
    }
}

fn scroll(nav: Navigation, amount: i32, ctx: &ViewContext) -> Transition {
    if amount == 0 || ctx.view_len == 0 {
        return Transition::stay(nav);
    }
    let direction = if amount > 0 {
        Direction::Down
    } else {
        Direction::Up
    };
    // Repeated row steps settle into a cycle through one boundary within
    // `lap` steps, and that cycle is `lap` steps long.
    let cols = ctx.grid.cols.max(1);
    let lap = (ctx.view_len - 1).div_ceil(cols) + 1;
    let steps = amount.unsigned_abs() as usize;
    let lead = steps.min(lap);
    let steps = lead + (steps - lead) % lap;

    let mut nav = nav;
    for _ in 0..steps {
        nav = arrow(nav, direction, ctx).navigation;
    }
    Transition::to(nav, Effect::CursorMoved)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx(view_len: usize) -> ViewContext {
        ViewContext {
            view_len,
            catalog_len: 100,
            highlighted: None,
            grid: GridSize { cols: 10, rows: 4 },
        }
    }

    fn at(state: NavigationState, index: usize) -> Navigation {
        Navigation {
            state,
            cursor: Cursor::at(index),
        }
    }

    fn search(query: &str) -> NavigationState {
        NavigationState::Search(query.to_string())
    }

    #[test]
    fn test_initial_state_is_recents() {
        let nav = Navigation::new();
        assert_eq!(nav.state, NavigationState::Recents);
        assert_eq!(nav.cursor.index(), None);
    }

    #[test]
    fn test_text_changed_enters_and_leaves_search() {
        let t = reduce(Navigation::new(), &InputEvent::TextChanged("cat".into()), &ctx(5));
        assert_eq!(t.navigation.state, search("cat"));
        assert_eq!(t.effect, Effect::Rebuild);

        let t = reduce(t.navigation, &InputEvent::TextChanged(String::new()), &ctx(5));
        assert_eq!(t.navigation.state, NavigationState::Recents);
        assert_eq!(t.effect, Effect::Rebuild);
    }

    #[test]
    fn test_same_text_is_noop() {
        let nav = at(search("cat"), 2);
        let t = reduce(nav.clone(), &InputEvent::TextChanged("cat".into()), &ctx(5));
        assert_eq!(t.navigation, nav);
        assert_eq!(t.effect, Effect::None);
    }

    #[test]
    fn test_forward_wraps_at_last_index() {
        let t = reduce(at(search("a"), 4), &InputEvent::Arrow(Direction::Right), &ctx(5));
        assert_eq!(t.navigation.cursor.index(), Some(0));
        assert_eq!(t.effect, Effect::CursorMoved);
    }

    #[test]
    fn test_backward_wraps_at_first_index() {
        let t = reduce(at(search("a"), 0), &InputEvent::Arrow(Direction::Left), &ctx(5));
        assert_eq!(t.navigation.cursor.index(), Some(4));
        assert_eq!(t.navigation.cursor.heading(), Heading::Backward);
    }

    #[test]
    fn test_vertical_moves_by_row() {
        let t = reduce(at(search("a"), 3), &InputEvent::Arrow(Direction::Down), &ctx(35));
        assert_eq!(t.navigation.cursor.index(), Some(13));

        let t = reduce(t.navigation, &InputEvent::Arrow(Direction::Up), &ctx(35));
        assert_eq!(t.navigation.cursor.index(), Some(3));
    }

    #[test]
    fn test_vertical_clamps_then_wraps() {
        // 25 entries: row 2 holds 20..=24
        let t = reduce(at(search("a"), 17), &InputEvent::Arrow(Direction::Down), &ctx(25));
        assert_eq!(t.navigation.cursor.index(), Some(24));

        let t = reduce(t.navigation, &InputEvent::Arrow(Direction::Down), &ctx(25));
        assert_eq!(t.navigation.cursor.index(), Some(0));

        let t = reduce(at(search("a"), 4), &InputEvent::Arrow(Direction::Up), &ctx(25));
        assert_eq!(t.navigation.cursor.index(), Some(0));

        let t = reduce(t.navigation, &InputEvent::Arrow(Direction::Up), &ctx(25));
        assert_eq!(t.navigation.cursor.index(), Some(24));
    }

    #[test]
    fn test_arrow_on_empty_view_is_noop() {
        let nav = Navigation {
            state: search("zzzz"),
            cursor: Cursor::none(),
        };
        let t = reduce(nav.clone(), &InputEvent::Arrow(Direction::Right), &ctx(0));
        assert_eq!(t.navigation, nav);
        assert_eq!(t.effect, Effect::None);
    }

    #[test]
    fn test_commit_resets_to_recents() {
        let mut context = ctx(5);
        context.highlighted = Some(42);
        let t = reduce(
            at(search("party"), 1),
            &InputEvent::Commit { keep_open: false },
            &context,
        );
        assert_eq!(t.navigation, Navigation::new());
        assert_eq!(
            t.effect,
            Effect::Commit {
                index: 42,
                close_after: true
            }
        );
    }

    #[test]
    fn test_commit_keep_open_clears_close_flag() {
        let mut context = ctx(5);
        context.highlighted = Some(7);
        let t = reduce(at(search("x"), 0), &InputEvent::Commit { keep_open: true }, &context);
        assert_eq!(
            t.effect,
            Effect::Commit {
                index: 7,
                close_after: false
            }
        );
    }

    #[test]
    fn test_commit_on_sentinel_is_noop() {
        let nav = Navigation {
            state: search("zzzz"),
            cursor: Cursor::none(),
        };
        let t = reduce(nav.clone(), &InputEvent::Commit { keep_open: false }, &ctx(0));
        assert_eq!(t.navigation, nav);
        assert_eq!(t.effect, Effect::None);
    }

    #[test]
    fn test_cancel_clears_query_first() {
        let t = reduce(at(search("dog"), 3), &InputEvent::Cancel, &ctx(5));
        assert_eq!(t.navigation.state, NavigationState::Recents);
        assert_eq!(t.effect, Effect::Rebuild);

        let t = reduce(t.navigation, &InputEvent::Cancel, &ctx(5));
        assert_eq!(t.effect, Effect::Cancel);
    }

    #[test]
    fn test_browse_all_anchors_on_highlighted() {
        let mut context = ctx(3);
        context.highlighted = Some(57);
        let t = reduce(at(NavigationState::Recents, 1), &InputEvent::BrowseAllToggle, &context);
        assert_eq!(
            t.navigation.state,
            NavigationState::HelpBrowse {
                anchor: 57,
                direction: Heading::Forward
            }
        );
        assert_eq!(t.navigation.cursor.index(), Some(57));
        assert_eq!(t.effect, Effect::Rebuild);
    }

    #[test]
    fn test_browse_all_without_highlight_starts_at_first_entry() {
        let t = reduce(Navigation::new(), &InputEvent::BrowseAllToggle, &ctx(0));
        assert_eq!(t.navigation.cursor.index(), Some(0));
    }

    #[test]
    fn test_browse_all_ignored_while_searching() {
        let nav = at(search("cat"), 0);
        let t = reduce(nav.clone(), &InputEvent::BrowseAllToggle, &ctx(5));
        assert_eq!(t.navigation, nav);
        assert_eq!(t.effect, Effect::None);
    }

    #[test]
    fn test_browse_all_pages_in_last_direction() {
        let browse = |direction| NavigationState::HelpBrowse {
            anchor: 50,
            direction,
        };
        let mut context = ctx(100);
        context.catalog_len = 100;

        let t = reduce(at(browse(Heading::Forward), 50), &InputEvent::BrowseAllToggle, &context);
        assert_eq!(t.navigation.cursor.index(), Some(90));

        // Turning around updates the paging direction
        let t = reduce(t.navigation, &InputEvent::Arrow(Direction::Left), &context);
        assert_eq!(t.navigation.cursor.index(), Some(89));
        assert_eq!(t.navigation.state, browse(Heading::Backward));

        let t = reduce(t.navigation, &InputEvent::BrowseAllToggle, &context);
        assert_eq!(t.navigation.cursor.index(), Some(49));
    }

    #[test]
    fn test_cancel_in_browse_mode_cancels() {
        let nav = at(
            NavigationState::HelpBrowse {
                anchor: 0,
                direction: Heading::Forward,
            },
            12,
        );
        let t = reduce(nav.clone(), &InputEvent::Cancel, &ctx(100));
        assert_eq!(t.navigation, nav);
        assert_eq!(t.effect, Effect::Cancel);
    }

    #[test]
    fn test_input_method_toggle_keeps_state() {
        let nav = at(search("cat"), 2);
        let t = reduce(nav.clone(), &InputEvent::InputMethodToggle, &ctx(5));
        assert_eq!(t.navigation, nav);
        assert_eq!(t.effect, Effect::ToggleInputMethod);
    }

    #[test]
    fn test_scroll_repeats_vertical_steps() {
        let t = reduce(at(search("a"), 0), &InputEvent::ScrollDelta(2), &ctx(50));
        assert_eq!(t.navigation.cursor.index(), Some(20));

        let t = reduce(t.navigation, &InputEvent::ScrollDelta(-1), &ctx(50));
        assert_eq!(t.navigation.cursor.index(), Some(10));

        let t = reduce(t.navigation.clone(), &InputEvent::ScrollDelta(0), &ctx(50));
        assert_eq!(t.effect, Effect::None);
    }

    #[test]
    fn test_scroll_extremes_finish_on_the_row_cycle() {
        // 25 entries, 10 columns: going down visits 0, 10, 20, 24, 0, ...
        let t = reduce(at(search("a"), 0), &InputEvent::ScrollDelta(i32::MAX), &ctx(25));
        assert_eq!(t.navigation.cursor.index(), Some(24));
        assert_eq!(t.effect, Effect::CursorMoved);

        // Going up from 5: 0, then 24, 14, 4, 0, ...
        let t = reduce(at(search("a"), 5), &InputEvent::ScrollDelta(i32::MIN), &ctx(25));
        assert_eq!(t.navigation.cursor.index(), Some(4));
    }

    #[test]
    fn test_scroll_matches_single_steps() {
        for len in [1, 3, 10, 25, 41] {
            for start in 0..len {
                for amount in -45i32..=45 {
                    let direction = if amount > 0 { Direction::Down } else { Direction::Up };
                    let mut expected = at(search("a"), start);
                    if amount != 0 {
                        for _ in 0..amount.unsigned_abs() {
                            expected = reduce(expected, &InputEvent::Arrow(direction), &ctx(len)).navigation;
                        }
                    }
                    let t = reduce(at(search("a"), start), &InputEvent::ScrollDelta(amount), &ctx(len));
                    assert_eq!(
                        t.navigation.cursor.index(),
                        expected.cursor.index(),
                        "len {len}, start {start}, amount {amount}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_reanchor_resets_outside_browse() {
        let nav = at(search("a"), 3).reanchor(10);
        assert_eq!(nav.cursor.index(), Some(0));

        let nav = at(search("a"), 3).reanchor(0);
        assert_eq!(nav.cursor.index(), None);

        let browse = NavigationState::HelpBrowse {
            anchor: 3,
            direction: Heading::Forward,
        };
        let nav = at(browse, 3).reanchor(10);
        assert_eq!(nav.cursor.index(), Some(3));
    }

    #[test]
    fn test_step_visits_every_index_once_per_lap() {
        let len = 7;
        let mut cursor = Cursor::reset(len);
        let mut seen = Vec::new();
        for _ in 0..len {
            seen.push(cursor.index().unwrap());
            cursor = cursor.step(1, Heading::Forward, len);
        }
        assert_eq!(seen, (0..len).collect::<Vec<_>>());
        assert_eq!(cursor.index(), Some(0));
    }
}
