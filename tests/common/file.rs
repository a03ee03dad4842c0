use derive_new::new;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Eq, PartialEq, new)]
pub struct FileSpec {
    pub path: PathBuf,
    pub content: String,
}

pub fn write_file(file_spec: FileSpec) {
    // make sure the parent directory exists
    if let Some(parent) = file_spec.path.parent() {
        std::fs::create_dir_all(parent)
            .unwrap_or_else(|e| panic!("Failed to create directory {:?}: {}", parent, e));
    }

    std::fs::write(&file_spec.path, &file_spec.content)
        .unwrap_or_else(|e| panic!("Failed to write file {:?}: {}", file_spec.path, e));
}

/// Write `files` (relative path, content) beneath `dir`
pub fn write_files(dir: &Path, files: &[(&str, &str)]) {
    for (relative, content) in files {
        write_file(FileSpec::new(dir.join(relative), content.to_string()));
    }
}

/// Random text files as (relative path, content) pairs
pub fn generate_files(files_count: usize) -> Vec<(String, String)> {
    use fake::{
        Fake,
        faker::lorem::en::{Word, Words},
    };

    (0..files_count)
        .map(|index| {
            let file_name = format!("{}_{index}.py", Word().fake::<String>());
            let file_content = Words(5..10).fake::<Vec<String>>().join("\n");

            (file_name, file_content)
        })
        .collect::<Vec<_>>()
}

pub fn tar_archive(files: &[(&str, &str)]) -> Vec<u8> {
    let mut builder = tar::Builder::new(Vec::new());
    for (name, content) in files {
        let mut header = tar::Header::new_gnu();
        header.set_size(content.len() as u64);
        header.set_mode(0o644);
        header.set_cksum();
        builder
            .append_data(&mut header, name, content.as_bytes())
            .expect("Failed to append tar entry");
    }
    builder.into_inner().expect("Failed to finish tar")
}
