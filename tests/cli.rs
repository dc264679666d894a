use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

// We check the --help output in order to confirm that the clap cli is setup correctly.
// Any arguments that are incorrectly will cause clap to panic regardless of the arguments or
// options provided.
// Calling help does not require any application logic so if this tests fails then we know it
// is to do with the clap cli setup code.
#[test]
fn check_clap_cli_help() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("rakuten-books")?;

    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("RAKUTEN_APPLICATION_ID"));

    Ok(())
}

#[test]
fn missing_application_id_is_usage_error() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("rakuten-books")?;

    cmd.env_remove("RAKUTEN_APPLICATION_ID").arg("9784873119786");
    cmd.assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("application-id"));

    Ok(())
}

// Validation happens before any request so no network is needed.
#[test]
fn invalid_isbn_fails_without_lookup() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("rakuten-books")?;

    cmd.env("RAKUTEN_APPLICATION_ID", "test-id").arg("9784873119787");
    cmd.assert()
        .failure()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("is not a valid ISBN"));

    Ok(())
}

#[test]
fn empty_application_id_is_rejected() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("rakuten-books")?;

    cmd.args(["--application-id", "", "9784873119786"]);
    cmd.assert()
        .failure()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("application id must not be empty"));

    Ok(())
}
