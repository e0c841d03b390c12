#![cfg(feature = "cli")]

use anyhow::Result;
use clap::Parser;
use small_kata::utils::error::ErrorSeverity;
use small_kata::{run_command, CliConfig, KataError};
use tempfile::TempDir;

const ROUTINES_OUTLINE: &str = r#"
[walkthrough]
name = "Classroom Walkthrough"

[[walkthrough.sections]]
name = "Routines"

[[walkthrough.sections.item_groups]]
name = "Observed"
items = [
  { name = "Unit Organizer", kind = "checkbox" },
  { name = "Subject", kind = "radio", options = ["Math", "Science"] },
]
"#;

const ROUTINES_MARKUP: &str = "<div class='walkthrough'><h1>Classroom Walkthrough</h1><div class='section'><h2>Routines</h2><div class='item_group'><h3>Observed</h3><div>[ ] Unit Organizer</div><div>Subject ( ) Math ( ) Science</div></div></div></div>";

fn run(args: &[&str]) -> std::result::Result<String, KataError> {
    let argv = std::iter::once("small-kata").chain(args.iter().copied());
    let config = CliConfig::try_parse_from(argv).expect("arguments should parse");
    let mut out = Vec::new();
    run_command(config.command, &mut out)?;
    Ok(String::from_utf8(out).expect("output is utf-8"))
}

#[test]
fn test_count_subcommand_joins_labels() -> Result<()> {
    assert_eq!(
        run(&["count", "one", "2", "3", "15", "0.9"])?,
        "one, 2, Fizz, FizzBuzz, 0.9\n"
    );
    Ok(())
}

#[test]
fn test_count_subcommand_accepts_negative_tokens() -> Result<()> {
    assert_eq!(run(&["count", "-3", "-7"])?, "Fizz, -7\n");
    Ok(())
}

#[test]
fn test_count_json_output_is_a_string_array() -> Result<()> {
    let out = run(&["count", "--json", "1..5"])?;
    let labels: Vec<String> = serde_json::from_str(out.trim())?;
    assert_eq!(labels, vec!["1", "2", "Fizz", "4", "Buzz"]);
    Ok(())
}

#[test]
fn test_render_subcommand_prints_markup() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let outline_path = temp_dir.path().join("routines.toml");
    std::fs::write(&outline_path, ROUTINES_OUTLINE)?;

    let out = run(&["render", outline_path.to_str().unwrap()])?;
    assert_eq!(out, format!("{}\n", ROUTINES_MARKUP));
    Ok(())
}

#[test]
fn test_render_subcommand_writes_output_file() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let outline_path = temp_dir.path().join("routines.toml");
    let output_path = temp_dir.path().join("out").join("routines.html");
    std::fs::write(&outline_path, ROUTINES_OUTLINE)?;

    let out = run(&[
        "render",
        outline_path.to_str().unwrap(),
        "--output",
        output_path.to_str().unwrap(),
    ])?;

    assert!(out.is_empty());
    assert_eq!(std::fs::read_to_string(&output_path)?, ROUTINES_MARKUP);
    Ok(())
}

#[test]
fn test_bad_range_token_exits_with_two() {
    let err = run(&["count", "1..x"]).unwrap_err();
    assert_eq!(err.severity(), ErrorSeverity::Medium);
    assert_eq!(err.severity().exit_code(), 2);
}

#[test]
fn test_invalid_outline_exits_with_one() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let outline_path = temp_dir.path().join("blank.toml");
    std::fs::write(&outline_path, "[walkthrough]\nname = \"   \"\n")?;

    let err = run(&["render", outline_path.to_str().unwrap()]).unwrap_err();
    assert!(matches!(err, KataError::InvalidConfigValueError { .. }));
    assert_eq!(err.severity().exit_code(), 1);
    Ok(())
}

#[test]
fn test_missing_outline_exits_with_three() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let missing = temp_dir.path().join("missing.toml");

    let err = run(&["render", missing.to_str().unwrap()]).unwrap_err();
    assert!(matches!(err, KataError::IoError(_)));
    assert_eq!(err.severity().exit_code(), 3);
    Ok(())
}
