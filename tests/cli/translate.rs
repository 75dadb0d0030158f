use anyhow::Result;
use insta::assert_snapshot;
use pretty_assertions::assert_eq;

use crate::{CliTest, output_text};

#[test]
fn test_translate_fills_placeholders() -> Result<()> {
    let test = CliTest::with_locales()?;

    let output = test
        .command()
        .args(["translate", "welcome.hello", "--locale", "en", "-p", "name=John"])
        .output()?;
    let (stdout, stderr) = output_text(&output);

    assert!(output.status.success(), "stderr: {}", stderr);
    assert_snapshot!(stdout.trim_end(), @"Hello John, welcome!");
    assert_eq!(stderr, "");

    Ok(())
}

#[test]
fn test_translate_non_latin() -> Result<()> {
    let test = CliTest::with_locales()?;

    let output = test
        .command()
        .args(["translate", "hello", "--locale", "fa", "--param", "name=سارا"])
        .output()?;
    let (stdout, _) = output_text(&output);

    assert!(output.status.success());
    assert_eq!(stdout, "سلام سارا، خوش آمدید!\n");

    Ok(())
}

#[test]
fn test_translate_warns_about_unreplaced_placeholders() -> Result<()> {
    let test = CliTest::with_locales()?;

    let output = test
        .command()
        .args(["translate", "welcome.hello", "--locale", "en", "-p", "other=x"])
        .output()?;
    let (stdout, stderr) = output_text(&output);

    assert!(output.status.success());
    assert_eq!(stdout, "Hello {name}, welcome!\n");
    assert_eq!(
        stderr,
        "warning: unreplaced placeholders in 'welcome.hello': {name}\n"
    );

    Ok(())
}

#[test]
fn test_translate_value_with_braces_is_not_reported() -> Result<()> {
    let test = CliTest::with_locales()?;

    let output = test
        .command()
        .args(["translate", "welcome.hello", "--locale", "en", "-p", "name={x}"])
        .output()?;
    let (stdout, stderr) = output_text(&output);

    assert!(output.status.success());
    assert_eq!(stdout, "Hello {x}, welcome!\n");
    assert_eq!(stderr, "");

    Ok(())
}

#[test]
fn test_translate_missing_key() -> Result<()> {
    let test = CliTest::with_locales()?;

    let output = test
        .command()
        .args(["translate", "nope", "--locale", "en", "-p", "name=John"])
        .output()?;

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());

    Ok(())
}

#[test]
fn test_translate_rejects_malformed_param() -> Result<()> {
    let test = CliTest::with_locales()?;

    let output = test
        .command()
        .args(["translate", "hello", "--locale", "en", "-p", "name"])
        .output()?;
    let (_, stderr) = output_text(&output);

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr.contains("expected `name=value`"), "stderr: {}", stderr);

    Ok(())
}
