use anyhow::Result;
use insta::assert_snapshot;
use pretty_assertions::assert_eq;

use crate::{CliTest, output_text};

#[test]
fn test_resolve_requested_locale() -> Result<()> {
    let test = CliTest::with_locales()?;

    let output = test
        .command()
        .args(["resolve", "welcome.hello", "--locale", "fa"])
        .output()?;
    let (stdout, stderr) = output_text(&output);

    assert!(output.status.success(), "stderr: {}", stderr);
    assert_snapshot!(stdout.trim_end(), @"سلام {name}، خوش آمدید!");
    assert_eq!(stderr, "");

    Ok(())
}

#[test]
fn test_resolve_unwrapped_single_file_key() -> Result<()> {
    let test = CliTest::with_locales()?;

    let output = test
        .command()
        .args(["resolve", "hello", "--locale", "en"])
        .output()?;
    let (stdout, _) = output_text(&output);

    assert!(output.status.success());
    assert_eq!(stdout, "Hello {name}, welcome!\n");

    Ok(())
}

#[test]
fn test_resolve_falls_back_to_fallback_locale() -> Result<()> {
    let test = CliTest::with_locales()?;

    let output = test
        .command()
        .args(["resolve", "welcome.bye", "-l", "fa"])
        .output()?;
    let (stdout, _) = output_text(&output);

    assert!(output.status.success());
    assert_snapshot!(stdout.trim_end(), @"Goodbye");

    Ok(())
}

#[test]
fn test_resolve_missing_key() -> Result<()> {
    let test = CliTest::with_locales()?;

    let output = test
        .command()
        .args(["resolve", "welcome.unknown", "--locale", "fa"])
        .output()?;
    let (stdout, stderr) = output_text(&output);

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout, "");
    assert_eq!(
        stderr,
        "\u{2718} No translation for 'welcome.unknown' in locale 'fa' (fallback 'en')\n"
    );

    Ok(())
}

#[test]
fn test_resolve_uses_config_file() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        ".lingorc.json",
        r#"{ "messagesRoot": "i18n", "fallbackLocale": "fa" }"#,
    )?;
    test.write_file("i18n/fa/common.json", r#"{ "ok": "باشه" }"#)?;

    let output = test
        .command()
        .args(["resolve", "common.ok", "--locale", "de"])
        .output()?;
    let (stdout, _) = output_text(&output);

    assert!(output.status.success());
    assert_eq!(stdout, "باشه\n");

    Ok(())
}

#[test]
fn test_resolve_cli_flags_override_config() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".lingorc.json", r#"{ "messagesRoot": "missing" }"#)?;
    test.write_file("translations/de/app.json", r#"{ "title": "Titel" }"#)?;

    let output = test
        .command()
        .args([
            "resolve",
            "title",
            "--locale",
            "fr",
            "--fallback-locale",
            "de",
            "--messages-root",
            "translations",
        ])
        .output()?;
    let (stdout, stderr) = output_text(&output);

    assert!(output.status.success(), "stderr: {}", stderr);
    assert_eq!(stdout, "Titel\n");

    Ok(())
}

#[test]
fn test_resolve_invalid_json_is_an_error() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("locales/en/broken.json", r#"{ "title": "#)?;

    let output = test
        .command()
        .args(["resolve", "title", "--locale", "en"])
        .output()?;
    let (stdout, stderr) = output_text(&output);

    assert_eq!(output.status.code(), Some(2));
    assert_eq!(stdout, "");
    assert!(
        stderr.starts_with("Error: Failed to load translations from"),
        "stderr: {}",
        stderr
    );
    assert!(stderr.contains("[JsonStore] invalid json"), "stderr: {}", stderr);
    assert!(stderr.contains("broken.json"), "stderr: {}", stderr);

    Ok(())
}

#[test]
fn test_resolve_missing_messages_root() -> Result<()> {
    let test = CliTest::new()?;

    let output = test
        .command()
        .args(["resolve", "title", "--locale", "en"])
        .output()?;
    let (_, stderr) = output_text(&output);

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr.contains("[JsonStore] failed to read"), "stderr: {}", stderr);

    Ok(())
}
