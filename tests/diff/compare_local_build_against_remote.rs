use crate::common::command::{PackageDirs, package_dirs, run_snipdiff_command};
use crate::common::file::tar_archive;
use predicates::prelude::predicate;
use rstest::rstest;

const REMOTE: &str = "docker.io/org/utils:1.0.0";

#[rstest]
fn matching_digests_report_identical_without_a_local_build(
    package_dirs: PackageDirs,
) -> Result<(), Box<dyn std::error::Error>> {
    // nothing to extract locally: only the digest check can succeed
    package_dirs.push(REMOTE, &[("utils.py", "print('u')\n")]);

    run_snipdiff_command(&package_dirs, &["diff", "--remote", "utils:1.0.0", REMOTE])
        .assert()
        .success()
        .stdout(format!(
            "Comparing local utils:1.0.0 vs remote {REMOTE}...\nPackages are identical.\n"
        ));

    Ok(())
}

#[rstest]
fn single_remote_argument_compares_the_manifest_build(
    package_dirs: PackageDirs,
) -> Result<(), Box<dyn std::error::Error>> {
    package_dirs.push(REMOTE, &[("utils.py", "print('u')\n")]);

    run_snipdiff_command(&package_dirs, &["diff", "--remote", REMOTE])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(format!(
            "Comparing local utils:1.0.0 vs remote {REMOTE}...\n"
        )));

    Ok(())
}

#[rstest]
fn differing_digests_with_same_content_are_identical(
    package_dirs: PackageDirs,
) -> Result<(), Box<dyn std::error::Error>> {
    package_dirs.build("utils:1.0.0", &[("utils.py", "print('u')\n")]);
    package_dirs.package(REMOTE, &tar_archive(&[("utils.py", "print('u')\n")]));
    package_dirs.publish(
        REMOTE,
        &tar_archive(&[(".snip-manifest.json", "{}"), ("utils.py", "print('u')\n")]),
    );

    run_snipdiff_command(&package_dirs, &["diff", "--remote", "utils:1.0.0", REMOTE])
        .assert()
        .success()
        .stdout(predicate::str::ends_with("Packages are identical.\n"));

    Ok(())
}

#[rstest]
fn changed_remote_content_is_listed(
    package_dirs: PackageDirs,
) -> Result<(), Box<dyn std::error::Error>> {
    package_dirs.build("utils:1.0.0", &[("utils.py", "print('a')\n")]);
    // no archive packaged locally: the digest check is unavailable
    package_dirs.publish(
        REMOTE,
        &tar_archive(&[("utils.py", "print('b')\n"), ("extra.py", "e\n")]),
    );

    run_snipdiff_command(
        &package_dirs,
        &["diff", "--remote", "--summary", "utils:1.0.0", REMOTE],
    )
    .assert()
    .success()
    .stdout(format!(
        "Comparing local utils:1.0.0 vs remote {REMOTE}...\nM utils.py\nA extra.py\n1 modified, 1 added\n"
    ));

    Ok(())
}

#[rstest]
fn unknown_remote_image_fails(package_dirs: PackageDirs) -> Result<(), Box<dyn std::error::Error>> {
    package_dirs.build("utils:1.0.0", &[("utils.py", "print('a')\n")]);

    run_snipdiff_command(
        &package_dirs,
        &["diff", "--remote", "utils:1.0.0", "docker.io/org/missing:1.0.0"],
    )
    .assert()
    .failure()
    .stderr(predicate::str::contains(
        "remote image not found: docker.io/org/missing:1.0.0",
    ));

    Ok(())
}
