use crate::areas::cache::PackageCache;
use crate::areas::registry::RegistryMirror;
use crate::areas::store::PackageStore;
use anyhow::Context;
use std::cell::{RefCell, RefMut};
use std::path::{Path, PathBuf};

pub const DEFAULT_HOME_DIR: &str = ".snip";

/// State shared by commands: where they run, what they read, where they write
pub struct Session {
    path: Box<Path>,
    writer: RefCell<Box<dyn std::io::Write>>,
    store: PackageStore,
}

impl Session {
    pub fn new(
        path: &Path,
        cache_dir: &Path,
        registry_dir: &Path,
        writer: Box<dyn std::io::Write>,
    ) -> anyhow::Result<Self> {
        let path = path
            .canonicalize()
            .with_context(|| format!("Failed to resolve {}", path.display()))?;

        let store = PackageStore::new(
            PackageCache::new(cache_dir.into()),
            RegistryMirror::new(registry_dir.into()),
        );

        Ok(Session {
            path: path.into_boxed_path(),
            writer: RefCell::new(writer),
            store,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }

    pub fn store(&self) -> &PackageStore {
        &self.store
    }
}

/// `$HOME/.snip/<name>`, used when no directory is configured
pub fn default_dir(name: &str) -> anyhow::Result<PathBuf> {
    let home = std::env::var_os("HOME").context("HOME is not set")?;

    Ok(PathBuf::from(home).join(DEFAULT_HOME_DIR).join(name))
}
