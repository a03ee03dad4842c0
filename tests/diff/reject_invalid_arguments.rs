use crate::common::command::{
    PackageDirs, package_dirs, run_snipdiff_command, run_snipdiff_command_in,
};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn remote_diff_requires_a_remote_reference(package_dirs: PackageDirs) {
    run_snipdiff_command(&package_dirs, &["diff", "--remote"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("usage: snipdiff diff"));
}

#[rstest]
fn malformed_reference_is_rejected(package_dirs: PackageDirs) {
    run_snipdiff_command(&package_dirs, &["diff", "utils:1.0.0!"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid package reference: utils:1.0.0!"));
}

#[rstest]
fn unknown_filter_letter_is_rejected(package_dirs: PackageDirs) {
    run_snipdiff_command(&package_dirs, &["diff", "--diff-filter", "R"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid diff filter: R"));
}

#[rstest]
fn missing_build_is_reported(package_dirs: PackageDirs) {
    run_snipdiff_command(&package_dirs, &["diff"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("local build not found: utils:1.0.0"));
}

#[rstest]
fn diff_outside_a_package_needs_a_manifest(
    package_dirs: PackageDirs,
) -> Result<(), Box<dyn std::error::Error>> {
    let elsewhere = TempDir::new()?;

    run_snipdiff_command_in(elsewhere.path(), &package_dirs, &["diff"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to find manifest"));

    Ok(())
}
