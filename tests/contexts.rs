use snapbox::cmd::{cargo_bin, Command};

#[cfg(test)]
use pretty_assertions::assert_eq;

pub mod common;
use crate::common::*;

#[test]
fn trinucleotides() {
    let sandbox = TestSetup::setup();

    for reference in ["test_ref.fa", "test_ref.txt", "test_ref_multi.fa"] {
        Command::new(cargo_bin("mutspec"))
            .current_dir(sandbox.get_wd())
            .arg("contexts")
            .arg(sandbox.file_string(reference, TestDir::Input))
            .assert()
            .success()
            .stdout_eq_path(sandbox.file_string("contexts.stdout", TestDir::Correct));
    }
}

#[test]
fn flanks() {
    let sandbox = TestSetup::setup();

    Command::new(cargo_bin("mutspec"))
        .current_dir(sandbox.get_wd())
        .arg("contexts")
        .arg(sandbox.file_string("test_ref.fa", TestDir::Input))
        .arg("--flanks")
        .assert()
        .success()
        .stdout_eq_path(sandbox.file_string("contexts_flanks.stdout", TestDir::Correct));

    Command::new(cargo_bin("mutspec"))
        .current_dir(sandbox.get_wd())
        .arg("contexts")
        .arg(sandbox.file_string("test_ref.fa", TestDir::Input))
        .args(["--flanks", "-o", "flanks.tsv"])
        .assert()
        .success();

    assert_eq!(true, sandbox.file_exists("flanks.tsv"));
    assert_eq!(true, sandbox.file_check("flanks.tsv", "contexts_flanks.stdout"));
}

#[test]
fn short_reference() {
    let sandbox = TestSetup::setup();

    // No full window: header only
    Command::new(cargo_bin("mutspec"))
        .current_dir(sandbox.get_wd())
        .args(["contexts", "-"])
        .stdin("AC\n")
        .assert()
        .success()
        .stdout_eq("context\tcount\n");

    Command::new(cargo_bin("mutspec"))
        .current_dir(sandbox.get_wd())
        .arg("contexts")
        .arg(sandbox.file_string("missing.fa", TestDir::Input))
        .assert()
        .failure();
}
