use std::fs::{read_to_string, write};
use std::path::Path;

use assert_cmd::Command;
use indoc::indoc;
use predicates::prelude::*;
use tempfile::tempdir;

const GARMENT_CATALOG: &str = indoc! {r#"
    "Reference","Name","Color","Size","Ean"
    "JKT-01","Cropped Jacket","Black","M","8400000000017"
    "JKT-01","Cropped Jacket","Black","L","8400000000024"
    "TRS-02","Wide Trouser","Ecru","M","8400000000031"
"#};

const COMPONENT_CATALOG: &str = indoc! {r#"
    "Reference","Name","Color","Unit","Ean"
    "ZIP-10","Metal Zip","Black","Un","8410000000013"
    "BTN-22","Horn Button","Natural","Un","8410000000020"
"#};

#[test]
fn operation_sequence() {
    // given
    let temp_dir = tempdir().unwrap();
    write_catalogs(temp_dir.path());

    // when a session is created and stocked from the catalog
    atelier(temp_dir.path())
        .args(["--session", "session.json", "create"])
        .assert()
        .success();
    atelier(temp_dir.path())
        .args([
            "--session",
            "session.json",
            "add",
            "--garments",
            "garments.csv",
            "--eans",
            "8400000000017,8400000000024",
        ])
        .assert()
        .success();

    // and quantities are set via bulk adjustment
    atelier(temp_dir.path())
        .args(["--session", "session.json", "select-all", "--action", "select"])
        .assert()
        .success();
    atelier(temp_dir.path())
        .args(["--session", "session.json", "adjust-quantity", "--delta", "10"])
        .assert()
        .success();

    // and a component is assigned to every destination
    atelier(temp_dir.path())
        .args([
            "--session",
            "session.json",
            "assign",
            "--components",
            "components.csv",
            "--ean",
            "8410000000013",
            "--consumption",
            "2.5",
        ])
        .assert()
        .success();

    // then both work items demand the component: 2 * 10 * 2.5
    atelier(temp_dir.path())
        .args(["--session", "session.json", "purchases"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ZIP-10").and(predicate::str::contains("50.0")));

    // and the exported ledger carries the ERP column order
    atelier(temp_dir.path())
        .args([
            "--session",
            "session.json",
            "export-ledger",
            "--output",
            "bom.csv",
        ])
        .assert()
        .success();

    let exported = read_to_string(temp_dir.path().join("bom.csv")).unwrap();
    let mut lines = exported.lines();
    assert_eq!(
        lines.next().unwrap(),
        r#""Reference","Color","Size","Component","Consumption","Unit""#
    );
    assert_eq!(lines.next().unwrap(), r#""JKT-01","Black","M","Metal Zip","2.5","Un""#);
    assert_eq!(lines.next().unwrap(), r#""JKT-01","Black","L","Metal Zip","2.5","Un""#);
    assert!(lines.next().is_none());

    // and undoing the assignment empties the purchase requirements
    atelier(temp_dir.path())
        .args(["--session", "session.json", "undo"])
        .assert()
        .success();
    atelier(temp_dir.path())
        .args(["--session", "session.json", "purchases"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ZIP-10").not());
}

#[test]
fn destination_filters_narrow_the_assignment() {
    // given a session holding all three catalog variants with quantity 5
    let temp_dir = tempdir().unwrap();
    write_catalogs(temp_dir.path());

    atelier(temp_dir.path())
        .args(["--session", "session.json", "create"])
        .assert()
        .success();
    atelier(temp_dir.path())
        .args([
            "--session",
            "session.json",
            "add",
            "--garments",
            "garments.csv",
            "--eans",
            "8400000000017,8400000000024,8400000000031",
        ])
        .assert()
        .success();
    atelier(temp_dir.path())
        .args(["--session", "session.json", "select-all", "--action", "select"])
        .assert()
        .success();
    atelier(temp_dir.path())
        .args(["--session", "session.json", "adjust-quantity", "--delta", "5"])
        .assert()
        .success();

    // when assigning only to JKT-01 in size M
    atelier(temp_dir.path())
        .args([
            "--session",
            "session.json",
            "assign",
            "--components",
            "components.csv",
            "--ean",
            "8410000000020",
            "--consumption",
            "4",
            "--references",
            "JKT-01",
            "--sizes",
            "M",
        ])
        .assert()
        .success();

    // then exactly one destination was matched: 1 * 5 * 4
    atelier(temp_dir.path())
        .args(["--session", "session.json", "purchases"])
        .assert()
        .success()
        .stdout(predicate::str::contains("BTN-22").and(predicate::str::contains("20")));

    atelier(temp_dir.path())
        .args(["--session", "session.json", "status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Ledger: 1 records"));
}

#[test]
fn negative_consumption_is_rejected() {
    // given
    let temp_dir = tempdir().unwrap();
    write_catalogs(temp_dir.path());

    atelier(temp_dir.path())
        .args(["--session", "session.json", "create"])
        .assert()
        .success();
    atelier(temp_dir.path())
        .args([
            "--session",
            "session.json",
            "add",
            "--garments",
            "garments.csv",
            "--eans",
            "8400000000017",
        ])
        .assert()
        .success();

    // when / then
    atelier(temp_dir.path())
        .args([
            "--session",
            "session.json",
            "assign",
            "--components",
            "components.csv",
            "--ean",
            "8410000000013",
            "--consumption",
            "-1",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("must not be negative"));

    // and the failed operation did not touch the saved session
    atelier(temp_dir.path())
        .args(["--session", "session.json", "status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Ledger: 0 records"));
}

#[test]
fn unknown_catalog_ean_is_a_lookup_error() {
    // given
    let temp_dir = tempdir().unwrap();
    write_catalogs(temp_dir.path());

    atelier(temp_dir.path())
        .args(["--session", "session.json", "create"])
        .assert()
        .success();

    // when / then
    atelier(temp_dir.path())
        .args([
            "--session",
            "session.json",
            "add",
            "--garments",
            "garments.csv",
            "--eans",
            "8409999999999",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("8409999999999"));
}

#[test]
fn corrupt_session_file_is_rejected() {
    // given
    let temp_dir = tempdir().unwrap();
    write(temp_dir.path().join("session.json"), b"not a snapshot").unwrap();

    // when / then
    atelier(temp_dir.path())
        .args(["--session", "session.json", "status"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Corrupt or foreign snapshot"));
}

fn atelier(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("atelier_cli").unwrap();
    cmd.current_dir(dir);
    cmd
}

fn write_catalogs(dir: &Path) {
    write(dir.join("garments.csv"), GARMENT_CATALOG).unwrap();
    write(dir.join("components.csv"), COMPONENT_CATALOG).unwrap();
}
