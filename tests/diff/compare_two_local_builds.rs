use crate::common::command::{PackageDirs, package_dirs, run_snipdiff_command};
use crate::common::file::tar_archive;
use rstest::rstest;

#[rstest]
fn show_removed_file_in_summary_mode(
    package_dirs: PackageDirs,
) -> Result<(), Box<dyn std::error::Error>> {
    package_dirs.build(
        "utils:1.0.0",
        &[("utils.py", "print('u')\n"), ("helpers.py", "print('h')\n")],
    );
    package_dirs.build("utils:1.1.0", &[("utils.py", "print('u')\n")]);

    run_snipdiff_command(
        &package_dirs,
        &["diff", "--summary", "utils:1.0.0", "utils:1.1.0"],
    )
    .assert()
    .success()
    .stdout("D helpers.py\n1 removed, 1 unchanged\n");

    Ok(())
}

#[rstest]
fn show_removed_file_in_unified_mode(
    package_dirs: PackageDirs,
) -> Result<(), Box<dyn std::error::Error>> {
    package_dirs.build(
        "utils:1.0.0",
        &[("utils.py", "print('u')\n"), ("helpers.py", "print('h')\n")],
    );
    package_dirs.build("utils:1.1.0", &[("utils.py", "print('u')\n")]);

    run_snipdiff_command(&package_dirs, &["diff", "utils:1.0.0", "utils:1.1.0"])
        .assert()
        .success()
        .stdout("Only in a: helpers.py\n\n1 removed, 1 unchanged\n");

    Ok(())
}

#[rstest]
fn pulled_archive_is_compared_like_a_build(
    package_dirs: PackageDirs,
) -> Result<(), Box<dyn std::error::Error>> {
    package_dirs.build("utils:1.0.0", &[("utils.py", "v1\n")]);
    package_dirs.package(
        "docker.io/org/utils:2.0.0",
        &tar_archive(&[("utils.py", "v2\n"), (".snip-manifest.json", "{}")]),
    );

    run_snipdiff_command(
        &package_dirs,
        &["diff", "--summary", "utils:1.0.0", "docker.io/org/utils:2.0.0"],
    )
    .assert()
    .success()
    .stdout("M utils.py\n1 modified\n");

    Ok(())
}
