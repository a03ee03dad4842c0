use crate::common::file::{tar_archive, write_files};
use crate::common::redirect_temp_dir;
use assert_cmd::Command;
use assert_fs::TempDir;
use rstest::fixture;
use snipdiff::areas::registry::RegistryMirror;
use snipdiff::artifacts::objects::package_ref::PackageRef;
use std::path::{Path, PathBuf};

pub const MANIFEST: &str = r#"{"name": "utils", "version": "1.0.0", "language": {"name": "python"}}"#;

/// A project directory plus the cache and registry mirror the binary reads
pub struct PackageDirs {
    pub project: TempDir,
    pub cache: TempDir,
    pub registry: TempDir,
}

impl PackageDirs {
    /// Lay out a local build the way `build` leaves it in the cache
    pub fn build(&self, reference: &str, files: &[(&str, &str)]) -> PathBuf {
        let dir = self.cache.path().join(cache_key(reference));
        write_files(&dir, &[(".snip-metadata.json", r#"{"built": true}"#)]);
        write_files(&dir, files);
        dir
    }

    /// Store the archive packaged for pushing to `reference`
    pub fn package(&self, reference: &str, archive: &[u8]) {
        let path = self
            .cache
            .path()
            .join("images")
            .join(cache_key(reference))
            .join("layer.tar");
        std::fs::create_dir_all(path.parent().expect("archive has a parent"))
            .expect("Failed to create archive dir");
        std::fs::write(path, archive).expect("Failed to write archive");
    }

    pub fn publish(&self, reference: &str, archive: &[u8]) {
        RegistryMirror::new(self.registry.path().into())
            .publish(&PackageRef::Remote(reference.to_string()), archive)
            .expect("Failed to publish");
    }

    pub fn push(&self, reference: &str, files: &[(&str, &str)]) {
        let archive = tar_archive(files);
        self.package(reference, &archive);
        self.publish(reference, &archive);
    }
}

fn cache_key(reference: &str) -> String {
    reference.replace(['/', ':'], "_")
}

#[fixture]
pub fn package_dirs() -> PackageDirs {
    redirect_temp_dir();
    let dirs = PackageDirs {
        project: TempDir::new().expect("Failed to create temp dir"),
        cache: TempDir::new().expect("Failed to create temp dir"),
        registry: TempDir::new().expect("Failed to create temp dir"),
    };
    write_files(dirs.project.path(), &[("snip.json", MANIFEST)]);
    dirs
}

pub fn run_snipdiff_command(dirs: &PackageDirs, args: &[&str]) -> Command {
    run_snipdiff_command_in(dirs.project.path(), dirs, args)
}

pub fn run_snipdiff_command_in(dir: &Path, dirs: &PackageDirs, args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("snipdiff").expect("Failed to find snipdiff binary");
    cmd.env("NO_PAGER", "1")
        .env("SNIPDIFF_CACHE_DIR", dirs.cache.path())
        .env("SNIPDIFF_REGISTRY_DIR", dirs.registry.path());
    cmd.current_dir(dir);
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}
