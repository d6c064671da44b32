use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn missing_api_key_exits_before_listening() {
    let dir = tempfile::tempdir().unwrap();

    Command::cargo_bin("synergie-api")
        .unwrap()
        .current_dir(dir.path())
        .env_remove("API_KEY")
        .env_remove("GEMINI_API_KEY")
        .env("PORT", "0")
        .timeout(std::time::Duration::from_secs(10))
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("API_KEY"))
        .stdout(predicate::str::contains("Listening").not());
}

#[test]
fn invalid_port_is_a_startup_error() {
    let dir = tempfile::tempdir().unwrap();

    Command::cargo_bin("synergie-api")
        .unwrap()
        .current_dir(dir.path())
        .env("API_KEY", "test-key")
        .env("PORT", "not-a-port")
        .timeout(std::time::Duration::from_secs(10))
        .assert()
        .failure()
        .stderr(predicate::str::contains("PORT"));
}

#[test]
fn ask_cli_rejects_blank_question_locally() {
    Command::cargo_bin("synergie-ask")
        .unwrap()
        .args(["--server", "http://127.0.0.1:9", "--profile", "Ingénieur", "   "])
        .timeout(std::time::Duration::from_secs(10))
        .assert()
        .code(2)
        .stderr(predicate::str::contains(
            "Veuillez entrer une question et sélectionner un profil.",
        ));
}
