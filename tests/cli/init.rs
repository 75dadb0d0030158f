use anyhow::{Context, Result};
use pretty_assertions::assert_eq;
use serde_json::Value;

use crate::{CliTest, output_text};

/// Validates config file structure and default values.
fn assert_config_content(content: &str) -> Result<()> {
    let parsed: Value = serde_json::from_str(content).context("Config should be valid JSON")?;

    assert_eq!(parsed.get("messagesRoot"), Some(&Value::from("./locales")));
    assert_eq!(parsed.get("fallbackLocale"), Some(&Value::from("en")));
    assert!(
        content.contains("\n  \""),
        "Config should use 2-space indentation"
    );

    Ok(())
}

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("init").output()?;
    let (stdout, _) = output_text(&output);

    assert!(output.status.success());
    assert_eq!(stdout, "\u{2713} Created .lingorc.json\n");
    assert!(test.root().join(".lingorc.json").exists());

    let content = test.read_file(".lingorc.json")?;
    assert_config_content(&content)?;

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".lingorc.json", "{}")?;

    let output = test.command().arg("init").output()?;
    let (_, stderr) = output_text(&output);

    assert_eq!(output.status.code(), Some(2));
    assert_eq!(stderr, "Error: .lingorc.json already exists\n");
    assert_eq!(test.read_file(".lingorc.json")?, "{}");

    Ok(())
}

#[test]
fn test_init_config_is_immediately_usable() -> Result<()> {
    let test = CliTest::new()?;

    test.command().arg("init").output()?;
    test.write_file("locales/en/app.json", r#"{ "title": "Lingo" }"#)?;

    let output = test
        .command()
        .args(["resolve", "title", "--locale", "en"])
        .output()?;
    let (stdout, stderr) = output_text(&output);

    assert!(
        output.status.success(),
        "Resolve should work with initialized config. stderr: {}",
        stderr
    );
    assert_eq!(stdout, "Lingo\n");

    Ok(())
}
