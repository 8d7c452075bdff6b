use anyhow::{Context, Result};
use serde_json::Value;

use crate::{CliTest, OUTPUT_FILE, stderr, stdout};

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("init").output()?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("Created .apikeysrc.json"));

    let content = std::fs::read_to_string(test.root().join(".apikeysrc.json"))?;
    let parsed: Value = serde_json::from_str(&content).context("Config should be valid JSON")?;
    assert_eq!(parsed["paths"], serde_json::json!(["/src/modules", "/src/components"]));
    assert_eq!(parsed["filename"], "apis");
    assert_eq!(parsed["outputPath"], "/src/types/");
    assert_eq!(parsed["outputFilename"], "apis-keys.d.ts");
    assert_eq!(parsed["verbose"], false);

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".apikeysrc.json", "{}")?;

    let output = test.command().arg("init").output()?;

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains(".apikeysrc.json already exists"));
    assert_eq!(test.read_file(".apikeysrc.json")?, "{}");

    Ok(())
}

#[test]
fn test_init_config_is_immediately_usable() -> Result<()> {
    let test = CliTest::new()?;
    test.command().arg("init").output()?;
    test.write_file("src/modules/user/apis.ts", "{ login: {} }")?;

    let output = test.extract_command().output()?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(
        test.read_file(OUTPUT_FILE)?,
        "declare const keys: ['login']"
    );

    Ok(())
}
