//! End-to-end picker sessions
//!
//! These tests drive a `Picker` through complete interactions:
//! - typing, navigating and committing
//! - recents persisted to disk and restored on the next session
//! - configuration-driven filters, grid size and custom aliases

use std::fs;
use std::sync::Arc;

use anyhow::Result;
use libemojipick::navigation::NavigationState;
use libemojipick::{
    Catalog, Config, Direction, FilterSettings, InputEvent, Output, Picker, PickerOptions,
};
use tempfile::TempDir;

fn write_config(temp_dir: &TempDir, extra: &str) -> Result<Config> {
    let recents = temp_dir.path().join("data").join("recents.json");
    let content = format!(
        "[recents]\npath = \"{}\"\n{}",
        recents.to_string_lossy().replace('\\', "\\\\"),
        extra
    );
    let path = temp_dir.path().join("config.toml");
    fs::write(&path, content)?;
    Ok(Config::load_from_path(&path)?)
}

fn type_text(picker: &mut Picker, text: &str) {
    picker.handle(InputEvent::TextChanged(text.to_string()));
}

fn commit(picker: &mut Picker) -> Option<String> {
    match picker.handle(InputEvent::Commit { keep_open: false }) {
        Some(Output::Selected { glyph, .. }) => Some(glyph),
        _ => None,
    }
}

#[test]
fn test_recents_survive_sessions() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config = write_config(&temp_dir, "")?;

    {
        let mut picker = Picker::from_config(&config)?;
        for query in ["dog", "cat", "dog"] {
            type_text(&mut picker, query);
            assert!(commit(&mut picker).is_some());
        }
    }

    let picker = Picker::from_config(&config)?;
    let restored: Vec<&str> = picker.view().iter().map(|e| e.glyph()).collect();
    assert_eq!(restored, vec!["🐶", "🐱"]);
    assert_eq!(picker.selected().map(|e| e.glyph()), Some("🐶"));
    Ok(())
}

#[test]
fn test_corrupt_recents_file_starts_empty() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config = write_config(&temp_dir, "")?;
    let recents_path = config.recents_path()?;
    fs::create_dir_all(recents_path.parent().unwrap())?;
    fs::write(&recents_path, "{ not json")?;

    let mut picker = Picker::from_config(&config)?;
    assert!(picker.recents().is_empty());

    // The next commit overwrites the broken file
    type_text(&mut picker, "tada");
    assert_eq!(commit(&mut picker).as_deref(), Some("🎉"));
    assert!(fs::read_to_string(&recents_path)?.contains("🎉"));
    Ok(())
}

#[test]
fn test_config_filters_apply_to_search() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config = write_config(
        &temp_dir,
        "[filters]\nskin_tones_disabled = true\ngenders_disabled = true\nmax_emoji_version = 4\n",
    )?;
    let mut picker = Picker::from_config(&config)?;

    type_text(&mut picker, "a");
    assert!(!picker.view().is_empty());
    for emoji in picker.view() {
        assert!(!emoji.is_skin_tone_variant());
        assert!(!emoji.is_gender_variant());
        assert!(emoji.min_version() <= 4);
    }
    Ok(())
}

#[test]
fn test_custom_alias_is_searchable() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config = write_config(&temp_dir, "[aliases]\n\"🚀\" = [\"ship it\"]\n")?;
    let mut picker = Picker::from_config(&config)?;

    type_text(&mut picker, "ship it");
    assert_eq!(picker.selected().map(|e| e.glyph()), Some("🚀"));
    Ok(())
}

#[test]
fn test_grid_size_drives_vertical_moves() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config = write_config(&temp_dir, "[grid]\ncols = 3\nrows = 2\n")?;
    let mut picker = Picker::from_config(&config)?;

    type_text(&mut picker, "face");
    assert!(picker.view().len() > 7);
    picker.handle(InputEvent::Arrow(Direction::Down));
    assert_eq!(picker.cursor(), Some(3));
    picker.handle(InputEvent::ScrollDelta(1));
    assert_eq!(picker.cursor(), Some(6));
    assert_eq!(picker.visible_page().offset, 6);
    Ok(())
}

#[test]
fn test_cursor_wraps_both_ways() {
    let mut picker = Picker::new(Arc::new(Catalog::builtin()), PickerOptions::default());
    type_text(&mut picker, "heart");
    let len = picker.view().len();
    assert!(len > 1);

    picker.handle(InputEvent::Arrow(Direction::Left));
    assert_eq!(picker.cursor(), Some(len - 1));
    picker.handle(InputEvent::Arrow(Direction::Right));
    assert_eq!(picker.cursor(), Some(0));
}

#[test]
fn test_commit_always_returns_to_recents() {
    let mut picker = Picker::new(Arc::new(Catalog::builtin()), PickerOptions::default());

    for query in ["joy", "rocket", "pizza", "flag"] {
        type_text(&mut picker, query);
        picker.handle(InputEvent::Arrow(Direction::Right));
        let output = picker.handle(InputEvent::Commit { keep_open: true });
        assert!(matches!(output, Some(Output::Selected { close_after: false, .. })));
        assert_eq!(picker.state(), &NavigationState::Recents);
        assert_eq!(picker.query(), "");
    }

    picker.handle(InputEvent::BrowseAllToggle);
    picker.handle(InputEvent::Arrow(Direction::Down));
    assert!(commit(&mut picker).is_some());
    assert_eq!(picker.state(), &NavigationState::Recents);
    assert_eq!(picker.recents().len(), 5);
}

#[test]
fn test_browse_all_ignores_filters_and_cancel_ends_session() {
    let options = PickerOptions {
        filters: FilterSettings::new(true, true, Some(1)),
        ..Default::default()
    };
    let mut picker = Picker::new(Arc::new(Catalog::builtin()), options);

    picker.handle(InputEvent::BrowseAllToggle);
    assert_eq!(picker.view().len(), picker.catalog().len());
    assert!(picker.view().iter().any(|e| e.is_skin_tone_variant()));

    picker.handle(InputEvent::Arrow(Direction::Left));
    assert_eq!(picker.cursor(), Some(picker.catalog().len() - 1));

    assert_eq!(picker.query(), "");
    assert_eq!(picker.handle(InputEvent::Cancel), Some(Output::Canceled));
    assert!(picker.recents().is_empty());
}

#[test]
fn test_whitespace_query_shows_filtered_catalog() {
    let options = PickerOptions {
        filters: FilterSettings::new(true, false, None),
        ..Default::default()
    };
    let mut picker = Picker::new(Arc::new(Catalog::builtin()), options);
    type_text(&mut picker, "   ");

    assert!(matches!(picker.state(), NavigationState::Search(_)));
    let expected = picker
        .catalog()
        .all()
        .iter()
        .filter(|e| !e.is_skin_tone_variant())
        .count();
    assert_eq!(picker.view().len(), expected);
}
