use std::fs;

use anyhow::Result;
use insta::assert_snapshot;
use serde_json::json;

use crate::{CliTest, OUTPUT_FILE, stderr, stdout};

const USER_APIS: &str = r#"
export default {
  login: { method: 'POST', url: '/auth/login' },
  logout: {},
};
"#;

#[test]
fn test_extract_writes_declaration() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("src/modules/user/apis.ts", USER_APIS)?;
    test.write_file("src/utils/helpers.ts", "export const cache = { hidden: {} };")?;

    let output = test.extract_command().output()?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_snapshot!(
        test.read_file(OUTPUT_FILE)?,
        @"declare const keys: ['login', 'logout']"
    );
    assert!(stdout(&output).contains("Wrote 2 key(s) to src/types/apis-keys.d.ts"));

    Ok(())
}

#[test]
fn test_extract_collects_from_components_in_path_order() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("src/components/cart/apis.tsx", "export default { fooBar: {} }")?;
    test.write_file(
        "src/modules/order/apis.ts",
        "export default { baz-qux: { method: 'GET' }, fooBar: {} }",
    )?;

    let output = test.extract_command().output()?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_snapshot!(
        test.read_file(OUTPUT_FILE)?,
        @"declare const keys: ['fooBar', 'baz-qux']"
    );

    Ok(())
}

#[test]
fn test_second_extract_leaves_file_untouched() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("src/modules/user/apis.ts", USER_APIS)?;
    // Same keys, different formatting.
    test.write_file(
        OUTPUT_FILE,
        "declare const keys: [\n  'login',\n  'logout'\n]\n",
    )?;
    let before = test.modified(OUTPUT_FILE)?;

    let output = test.extract_command().output()?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("is up to date (2 key(s))"));
    assert_eq!(test.modified(OUTPUT_FILE)?, before);
    assert_eq!(
        test.read_file(OUTPUT_FILE)?,
        "declare const keys: [\n  'login',\n  'logout'\n]\n"
    );

    Ok(())
}

#[test]
fn test_extract_uses_config_file() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        ".apikeysrc.json",
        &json!({
            "paths": ["/app/features"],
            "filename": "endpoints",
            "outputPath": "typings",
            "outputFilename": "endpoints.d.ts"
        })
        .to_string(),
    )?;
    test.write_file("app/features/billing/endpoints.ts", "{ invoice: {} }")?;
    test.write_file("src/modules/user/apis.ts", USER_APIS)?;

    let output = test.extract_command().output()?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(
        test.read_file("typings/endpoints.d.ts")?,
        "declare const keys: ['invoice']"
    );
    assert!(!test.root().join(OUTPUT_FILE).exists());

    Ok(())
}

#[test]
fn test_extract_with_empty_paths_is_skipped() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".apikeysrc.json", r#"{ "paths": [] }"#)?;
    test.write_file("src/modules/user/apis.ts", USER_APIS)?;

    let output = test.extract_command().output()?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("extraction skipped"));
    assert!(!test.root().join(OUTPUT_FILE).exists());

    Ok(())
}

#[test]
fn test_extract_rejects_non_object_config() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".apikeysrc.json", r#"["/src/modules"]"#)?;

    let output = test.extract_command().output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("only accepts an options object"));

    Ok(())
}

#[test]
fn test_extract_from_source_maps() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        "dist/main.js.map",
        &json!({
            "version": 3,
            "sources": [
                "webpack://shop/./src/modules/user/apis.ts",
                "webpack://shop/./src/index.ts"
            ],
            "sourcesContent": [USER_APIS, "render({ root: {} })"],
            "mappings": ""
        })
        .to_string(),
    )?;

    let output = test.extract_command().args(["--maps", "dist"]).output()?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(
        test.read_file(OUTPUT_FILE)?,
        "declare const keys: ['login', 'logout']"
    );

    Ok(())
}

#[test]
fn test_broken_source_map_pauses_extraction() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("dist/main.js.map", "{ not json")?;

    let output = test
        .extract_command()
        .args(["--maps", "dist", "--verbose"])
        .output()?;

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).contains("declaration not refreshed"));
    assert!(stderr(&output).contains("pausing due to build errors"));
    assert!(!test.root().join(OUTPUT_FILE).exists());

    Ok(())
}

#[test]
fn test_failed_build_is_quiet_without_verbose() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("dist/main.js.map", "{ not json")?;

    let output = test.extract_command().args(["--maps", "dist"]).output()?;

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).contains("declaration not refreshed"));
    assert!(!stderr(&output).contains("pausing due to build errors"));
    assert!(!test.root().join(OUTPUT_FILE).exists());

    Ok(())
}

#[test]
fn test_unreadable_file_does_not_block_extract() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("src/modules/user/apis.ts", "{ login: {} }")?;
    let vendored = test.root().join("public/vendor/legacy.ts");
    fs::create_dir_all(vendored.parent().unwrap())?;
    fs::write(&vendored, b"//\xe9")?;

    let output = test.extract_command().output()?;

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(test.read_file(OUTPUT_FILE)?, "declare const keys: ['login']");

    Ok(())
}

#[test]
fn test_cli_overrides_config() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("lib/api/routes.ts", "{ ping: {} }")?;

    let output = test
        .extract_command()
        .args([
            "--path",
            "/lib",
            "--filename",
            "routes",
            "--output-filename",
            "routes.d.ts",
        ])
        .output()?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(
        test.read_file("src/types/routes.d.ts")?,
        "declare const keys: ['ping']"
    );

    Ok(())
}
