#![allow(dead_code)]

pub mod command;
pub mod file;

const TMPDIR: &str = "../playground";

pub fn redirect_temp_dir() {
    // Ensure the TMPDIR exists
    if !std::path::Path::new(TMPDIR).exists() {
        std::fs::create_dir_all(TMPDIR).expect("Failed to create TMPDIR");
    }

    // absolute, since the binary runs from inside a project dir
    let tmpdir = std::fs::canonicalize(TMPDIR).expect("Failed to resolve TMPDIR");
    unsafe {
        std::env::set_var("TMPDIR", tmpdir);
    }
}
