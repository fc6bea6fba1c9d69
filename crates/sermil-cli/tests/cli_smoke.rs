//! CLI binary smoke tests using assert_cmd.
//!
//! These tests exercise the compiled `sermil` binary. Every run that reaches
//! rendering passes `--output` so no browser is opened.

use assert_cmd::Command;
use predicates::prelude::*;

fn cmd() -> Command {
    Command::cargo_bin("sermil").unwrap()
}

fn write_year(dir: &std::path::Path, year: i32, rows: &str) {
    let content = format!("UF_JSM,DISPENSA,VINCULACAO_ANO\n{}", rows);
    std::fs::write(dir.join(format!("sermil{}.csv", year)), content).unwrap();
}

fn prefix(dir: &std::path::Path) -> String {
    format!("{}/", dir.display())
}

// ---------------------------------------------------------------------------
// Top-level
// ---------------------------------------------------------------------------

#[test]
fn help_flag() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--data"))
        .stdout(predicate::str::contains("--start"))
        .stdout(predicate::str::contains("--output"));
}

#[test]
fn version_flag() {
    cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("sermil"));
}

#[test]
fn non_numeric_year_errors() {
    cmd()
        .args(["--start", "dois mil"])
        .assert()
        .failure();
}

#[test]
fn nonexistent_config_errors() {
    cmd()
        .arg("/nonexistent/config.json")
        .assert()
        .failure();
}

#[test]
fn reversed_range_errors() {
    cmd()
        .args(["--start", "2022", "--end", "2018"])
        .assert()
        .failure();
}

// ---------------------------------------------------------------------------
// Report runs
// ---------------------------------------------------------------------------

#[test]
fn missing_year_prints_diagnostic_and_exits_cleanly() {
    let dir = tempfile::tempdir().unwrap();
    write_year(dir.path(), 2018, "SP,Com dispensa,2018\n");
    let output = dir.path().join("report.html");

    cmd()
        .arg("--data")
        .arg(prefix(dir.path()))
        .args(["--start", "2010", "--end", "2018"])
        .arg("--output")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Erro de leitura no database do ano 2010:",
        ))
        .stdout(predicate::str::contains("sermil2010.csv"));

    assert!(!output.exists());
}

#[test]
fn writes_html_report() {
    let dir = tempfile::tempdir().unwrap();
    write_year(dir.path(), 2019, "PR,Com dispensa,2019\nRS,Sem dispensa,2019\n");
    write_year(dir.path(), 2020, "SC,Com dispensa,2020\nRS,Com dispensa,2020\n");
    let output = dir.path().join("report.html");

    cmd()
        .arg("--data")
        .arg(prefix(dir.path()))
        .args(["-s", "2019", "-e", "2020"])
        .arg("-o")
        .arg(&output)
        .assert()
        .success()
        .stderr(predicate::str::contains("Effective config"));

    let page = std::fs::read_to_string(&output).unwrap();
    assert!(page.contains("<td>Sul</td>"));
    assert!(page.contains("75.00%"));
    assert!(page.contains("25.00%"));
}

#[test]
fn config_file_supplies_prefix_and_years() {
    let dir = tempfile::tempdir().unwrap();
    write_year(dir.path(), 2021, "MT,Sem dispensa,2021\n");
    let output = dir.path().join("report.html");
    let config = serde_json::json!({
        "path_prefix": prefix(dir.path()),
        "start_year": 2021,
        "end_year": 2021,
        "output_html": output,
    });
    let config_path = dir.path().join("report.json");
    std::fs::write(&config_path, config.to_string()).unwrap();

    cmd().arg(&config_path).assert().success();

    let page = std::fs::read_to_string(&output).unwrap();
    assert!(page.contains("<td>Centro-Oeste</td>"));
}

#[test]
fn empty_data_fails() {
    let dir = tempfile::tempdir().unwrap();
    write_year(dir.path(), 2022, "");
    let output = dir.path().join("report.html");

    cmd()
        .arg("--data")
        .arg(prefix(dir.path()))
        .args(["--start", "2022", "--end", "2022"])
        .arg("--output")
        .arg(&output)
        .assert()
        .failure();
}
