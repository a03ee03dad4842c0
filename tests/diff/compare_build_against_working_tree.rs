use crate::common::command::{PackageDirs, package_dirs, run_snipdiff_command};
use crate::common::file::{generate_files, write_files};
use rstest::rstest;

#[rstest]
fn show_unified_diff_for_file_modified_since_build(
    package_dirs: PackageDirs,
) -> Result<(), Box<dyn std::error::Error>> {
    package_dirs.build("utils:1.0.0", &[("utils.py", "import os\nprint('hello')\n")]);
    write_files(
        package_dirs.project.path(),
        &[("utils.py", "import os\nprint('world')\n")],
    );

    let expected_output = "diff a/utils.py b/utils.py
--- a/utils.py
+++ b/utils.py
@@ -1,2 +1,2 @@
 import os
-print('hello')
+print('world')


1 modified
";
    let actual_output = run_snipdiff_command(&package_dirs, &["diff"])
        .assert()
        .success();
    let stdout = actual_output.get_output().stdout.clone();
    let actual_output = String::from_utf8(stdout)?;

    pretty_assertions::assert_eq!(actual_output, expected_output);

    Ok(())
}

#[rstest]
fn context_option_controls_hunk_padding(
    package_dirs: PackageDirs,
) -> Result<(), Box<dyn std::error::Error>> {
    let lines = (1..=10).map(|n| format!("line{n}\n")).collect::<String>();
    let changed = lines.replace("line5\n", "five\n");
    package_dirs.build("utils:0.9.0", &[("lines.txt", lines.as_str())]);
    write_files(package_dirs.project.path(), &[("lines.txt", changed.as_str())]);

    run_snipdiff_command(&package_dirs, &["diff", "-U", "1", "utils:0.9.0"])
        .assert()
        .success()
        .stdout(predicates::str::contains(
            "@@ -4,3 +4,3 @@\n line4\n-line5\n+five\n line6\n",
        ));

    Ok(())
}

#[rstest]
fn report_added_and_removed_files(
    package_dirs: PackageDirs,
) -> Result<(), Box<dyn std::error::Error>> {
    package_dirs.build(
        "utils:1.0.0",
        &[("utils.py", "u\n"), ("lib/old.py", "o\n")],
    );
    write_files(
        package_dirs.project.path(),
        &[("utils.py", "u\n"), ("lib/new.py", "n\n")],
    );

    run_snipdiff_command(&package_dirs, &["diff"])
        .assert()
        .success()
        .stdout("Only in a: lib/old.py\nOnly in b: lib/new.py\n\n1 added, 1 removed, 1 unchanged\n");

    Ok(())
}

#[rstest]
fn working_tree_matching_build_is_identical(
    package_dirs: PackageDirs,
) -> Result<(), Box<dyn std::error::Error>> {
    let files = generate_files(8);
    let files = files
        .iter()
        .map(|(name, content)| (name.as_str(), content.as_str()))
        .collect::<Vec<_>>();
    package_dirs.build("utils:1.0.0", &files);
    write_files(package_dirs.project.path(), &files);

    run_snipdiff_command(&package_dirs, &["diff"])
        .assert()
        .success()
        .stdout("Packages are identical.\n");

    Ok(())
}

#[rstest]
fn version_control_and_cache_directories_are_not_package_files(
    package_dirs: PackageDirs,
) -> Result<(), Box<dyn std::error::Error>> {
    package_dirs.build("utils:1.0.0", &[("utils.py", "print('u')\n")]);
    write_files(
        package_dirs.project.path(),
        &[
            ("utils.py", "print('u')\n"),
            (".git/HEAD", "ref: refs/heads/main\n"),
            ("__pycache__/utils.cpython-312.pyc", "\u{1}compiled"),
            ("node_modules/left-pad/index.js", "module.exports = 1;\n"),
        ],
    );

    run_snipdiff_command(&package_dirs, &["diff", "--summary"])
        .assert()
        .success()
        .stdout("Packages are identical.\n");

    Ok(())
}
