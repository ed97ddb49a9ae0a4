use std::{fs, path::Path};

use anyhow::Result;
use assert_cmd::Command;
use indoc::indoc;
use predicates::prelude::*;
use tempfile::tempdir;

/// Run envcheck against `env_file`, isolated from the caller's own config.
fn envcheck(env_file: &Path) -> Result<Command> {
    let mut cmd = Command::cargo_bin("envcheck")?;
    cmd.env_remove("REQUIRED_KEYS")
        .env_remove("LOG_LEVEL")
        .arg("--env-file")
        .arg(env_file);
    Ok(cmd)
}

#[test]
fn passes_when_key_is_set() -> Result<()> {
    let dir = tempdir()?;

    envcheck(&dir.path().join(".env"))?
        .env("API_KEY", "abc123")
        .arg("API_KEY")
        .assert()
        .success();

    Ok(())
}

#[test]
fn fails_listing_every_missing_key() -> Result<()> {
    let dir = tempdir()?;

    envcheck(&dir.path().join(".env"))?
        .env_remove("DB_HOST")
        .env_remove("DB_PORT")
        .args(["DB_HOST", "DB_PORT"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Missing required environment variables: DB_HOST, DB_PORT",
        ));

    Ok(())
}

#[test]
fn empty_value_counts_as_missing() -> Result<()> {
    let dir = tempdir()?;

    envcheck(&dir.path().join(".env"))?
        .env("FOO", "")
        .arg("FOO")
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Missing required environment variables: FOO",
        ));

    Ok(())
}

#[test]
fn loads_keys_from_env_file() -> Result<()> {
    let dir = tempdir()?;
    let env_file = dir.path().join(".env");
    fs::write(
        &env_file,
        indoc! {"
            DB_HOST=localhost
            DB_PORT=5432
        "},
    )?;

    envcheck(&env_file)?
        .env_remove("DB_HOST")
        .env_remove("DB_PORT")
        .args(["DB_HOST", "DB_PORT"])
        .assert()
        .success();

    Ok(())
}

#[test]
fn reads_required_keys_from_env_file() -> Result<()> {
    let dir = tempdir()?;
    let env_file = dir.path().join(".env");
    fs::write(
        &env_file,
        indoc! {r#"
            REQUIRED_KEYS="DB_HOST, DB_PORT,"
            DB_HOST=localhost
        "#},
    )?;

    envcheck(&env_file)?
        .env_remove("DB_HOST")
        .env_remove("DB_PORT")
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Missing required environment variables: DB_PORT",
        ));

    Ok(())
}

#[test]
fn nothing_to_check_succeeds() -> Result<()> {
    let dir = tempdir()?;

    envcheck(&dir.path().join(".env"))?.assert().success();

    Ok(())
}
