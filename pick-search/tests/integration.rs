use anyhow::Result;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

/// Helper to create a config file whose recents live inside `dir`
fn create_test_config(dir: &Path, extra: &str) -> Result<String> {
    let config_path = dir.join("config.toml");
    let recents_path = dir.join("recents.json");
    let config_content = format!(
        "[recents]\npath = \"{}\"\n{}",
        recents_path.to_string_lossy().replace('\\', "/"),
        extra
    );
    std::fs::write(&config_path, config_content)?;
    Ok(config_path.to_string_lossy().to_string())
}

fn run(config_path: &str, args: &[&str]) -> Result<Output> {
    Ok(Command::new(env!("CARGO_BIN_EXE_pick-search"))
        .env("EMOJIPICK_CONFIG", config_path)
        .env_remove("EMOJIPICK_LOG_LEVEL")
        .env_remove("RUST_LOG")
        .args(args)
        .output()?)
}

fn first_column(stdout: &str) -> Vec<&str> {
    stdout
        .lines()
        .filter_map(|line| line.split('\t').next())
        .collect()
}

#[test]
fn test_search_text_output() -> Result<()> {
    let config_dir = TempDir::new()?;
    let config_path = create_test_config(config_dir.path(), "")?;

    let output = run(&config_path, &["grinning"])?;

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout)?;
    let glyphs = first_column(&stdout);
    assert_eq!(glyphs.first(), Some(&"😀"));
    assert!(stdout.lines().next().unwrap_or("").contains("grinning"));

    Ok(())
}

#[test]
fn test_limit_caps_results() -> Result<()> {
    let config_dir = TempDir::new()?;
    let config_path = create_test_config(config_dir.path(), "")?;

    let output = run(&config_path, &["--limit", "3", "face"])?;

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout)?;
    assert_eq!(stdout.lines().count(), 3);

    Ok(())
}

#[test]
fn test_json_output_includes_tier() -> Result<()> {
    let config_dir = TempDir::new()?;
    let config_path = create_test_config(config_dir.path(), "")?;

    let output = run(&config_path, &["--format", "json", "party"])?;

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    let hits = json.as_array().expect("json array");
    assert!(!hits.is_empty());
    assert_eq!(hits[0]["tier"], "exact");
    assert_eq!(hits[0]["glyph"], "🥳");

    let tiers: Vec<&str> = hits.iter().filter_map(|h| h["tier"].as_str()).collect();
    let mut sorted = tiers.clone();
    sorted.sort_by_key(|t| match *t {
        "exact" => 1,
        "prefix" => 2,
        _ => 3,
    });
    assert_eq!(tiers, sorted);

    Ok(())
}

#[test]
fn test_jsonl_one_object_per_line() -> Result<()> {
    let config_dir = TempDir::new()?;
    let config_path = create_test_config(config_dir.path(), "")?;

    let output = run(&config_path, &["--format", "jsonl", "--limit", "5", "heart"])?;

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout)?;
    assert_eq!(stdout.lines().count(), 5);
    for line in stdout.lines() {
        let value: serde_json::Value = serde_json::from_str(line)?;
        assert!(value["glyph"].is_string());
    }

    Ok(())
}

#[test]
fn test_no_skin_tones_flag() -> Result<()> {
    let config_dir = TempDir::new()?;
    let config_path = create_test_config(config_dir.path(), "")?;

    let output = run(
        &config_path,
        &["--format", "jsonl", "--limit", "0", "--no-skin-tones", "thumbs"],
    )?;

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.contains("👍"));
    for line in stdout.lines() {
        let value: serde_json::Value = serde_json::from_str(line)?;
        assert_eq!(value["skin_tone_variant"], false);
    }

    Ok(())
}

#[test]
fn test_config_filters_apply() -> Result<()> {
    let config_dir = TempDir::new()?;
    let config_path = create_test_config(config_dir.path(), "[filters]\ngenders_disabled = true\n")?;

    let output = run(&config_path, &["--format", "jsonl", "--limit", "0", "shrug"])?;

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout)?;
    assert!(!stdout.is_empty());
    for line in stdout.lines() {
        let value: serde_json::Value = serde_json::from_str(line)?;
        assert_eq!(value["gender_variant"], false);
    }

    Ok(())
}

#[test]
fn test_max_version_flag() -> Result<()> {
    let config_dir = TempDir::new()?;
    let config_path = create_test_config(config_dir.path(), "")?;

    let output = run(&config_path, &["--format", "jsonl", "--limit", "0", "--max-version", "1"])?;

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout)?;
    for line in stdout.lines() {
        let value: serde_json::Value = serde_json::from_str(line)?;
        assert_eq!(value["min_version"], 1);
    }

    // Negative means no cutoff
    let unlimited = run(&config_path, &["--limit", "0", "--max-version", "-1"])?;
    assert!(unlimited.status.success());
    assert!(String::from_utf8(unlimited.stdout)?.lines().count() > stdout.lines().count());

    Ok(())
}

#[test]
fn test_all_lists_unfiltered_catalog() -> Result<()> {
    let config_dir = TempDir::new()?;
    let config_path = create_test_config(
        config_dir.path(),
        "[filters]\nskin_tones_disabled = true\n",
    )?;

    let all = run(&config_path, &["--all", "--limit", "0"])?;
    let filtered = run(&config_path, &["--limit", "0"])?;

    assert!(all.status.success());
    assert!(filtered.status.success());
    let all_lines = String::from_utf8(all.stdout)?.lines().count();
    let filtered_lines = String::from_utf8(filtered.stdout)?.lines().count();
    assert!(all_lines > filtered_lines);

    Ok(())
}

#[test]
fn test_custom_aliases_from_config() -> Result<()> {
    let config_dir = TempDir::new()?;
    let config_path = create_test_config(config_dir.path(), "[aliases]\n\"🚀\" = [\"ship it\"]\n")?;

    let output = run(&config_path, &["ship it"])?;

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout)?;
    assert_eq!(first_column(&stdout), vec!["🚀"]);

    Ok(())
}

#[test]
fn test_recents_listing() -> Result<()> {
    let config_dir = TempDir::new()?;
    let config_path = create_test_config(config_dir.path(), "")?;
    std::fs::write(
        config_dir.path().join("recents.json"),
        r#"{"version":1,"recent":["🎉","🐶","🎉","🦖"]}"#,
    )?;

    let output = run(&config_path, &["--recents"])?;

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout)?;
    assert_eq!(first_column(&stdout), vec!["🎉", "🐶"]);

    Ok(())
}

#[test]
fn test_recents_missing_file_is_empty() -> Result<()> {
    let config_dir = TempDir::new()?;
    let config_path = create_test_config(config_dir.path(), "")?;

    let output = run(&config_path, &["--recents"])?;

    assert!(output.status.success());
    assert!(output.stdout.is_empty());

    Ok(())
}

#[test]
fn test_corrupt_recents_exit_code() -> Result<()> {
    let config_dir = TempDir::new()?;
    let config_path = create_test_config(config_dir.path(), "")?;
    std::fs::write(config_dir.path().join("recents.json"), "not json")?;

    let output = run(&config_path, &["--recents"])?;

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr)?;
    assert!(stderr.contains("Failed to read recents"));

    Ok(())
}

#[test]
fn test_no_results_is_success() -> Result<()> {
    let config_dir = TempDir::new()?;
    let config_path = create_test_config(config_dir.path(), "")?;

    let output = run(&config_path, &["zzqqxx"])?;

    assert!(output.status.success());
    assert!(output.stdout.is_empty());

    Ok(())
}

#[test]
fn test_blank_query_is_invalid_input() -> Result<()> {
    let config_dir = TempDir::new()?;
    let config_path = create_test_config(config_dir.path(), "")?;

    let output = run(&config_path, &["   "])?;

    assert_eq!(output.status.code(), Some(3));

    Ok(())
}

#[test]
fn test_invalid_config_exit_code() -> Result<()> {
    let config_dir = TempDir::new()?;
    let config_path = create_test_config(config_dir.path(), "[grid]\ncols = 0\n")?;

    let output = run(&config_path, &["cat"])?;

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr)?;
    assert!(stderr.contains("Failed to load configuration"));

    Ok(())
}
