use anyhow::Result;

use crate::{CliTest, OUTPUT_FILE, stderr, stdout};

#[test]
fn test_check_reports_missing_declaration() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("src/modules/user/apis.ts", "{ login: {} }")?;

    let output = test.check_command().output()?;

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).contains("src/types/apis-keys.d.ts is out of date (1 key(s) found)"));
    // Check never writes.
    assert!(!test.root().join(OUTPUT_FILE).exists());

    Ok(())
}

#[test]
fn test_check_passes_after_extract() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("src/modules/user/apis.ts", "{ login: {} }")?;

    let extract = test.extract_command().output()?;
    assert!(extract.status.success(), "stderr: {}", stderr(&extract));

    let output = test.check_command().output()?;

    assert!(output.status.success(), "stdout: {}", stdout(&output));
    assert!(stdout(&output).contains("is up to date (1 key(s))"));

    Ok(())
}

#[test]
fn test_check_detects_new_keys() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("src/modules/user/apis.ts", "{ login: {} }")?;
    test.write_file(OUTPUT_FILE, "declare const keys: ['login']")?;
    test.write_file("src/modules/order/apis.ts", "{ checkout: {} }")?;

    let output = test.check_command().arg("--verbose").output()?;

    assert_eq!(output.status.code(), Some(1));
    let stdout = stdout(&output);
    assert!(stdout.contains("out of date (2 key(s) found)"));
    assert!(stdout.contains("  - checkout"));

    Ok(())
}
