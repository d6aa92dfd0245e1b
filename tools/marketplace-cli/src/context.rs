//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use marketplace_cart::CartStore;
use marketplace_kv::{FileStore, KvStore, MemoryStore};

use crate::config::{CliConfig, StorageBackend};
use crate::output::Output;

/// Config file names searched for, in order.
pub const CONFIG_NAMES: [&str; 3] = ["cart.toml", ".cart.toml", "cart.json"];

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: CliConfig,
    /// Where the configuration came from, if a file was found.
    pub config_path: Option<PathBuf>,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
}

impl Context {
    /// Load context from config file.
    pub fn load(config_path: Option<&Path>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let (config, config_path) = match config_path {
            Some(path) => (CliConfig::load(path)?, Some(path.to_path_buf())),
            None => match find_config(&cwd) {
                Some(path) => (CliConfig::load(&path)?, Some(path)),
                None => (CliConfig::default(), None),
            },
        };

        Ok(Self {
            config,
            config_path,
            output,
            cwd,
        })
    }

    /// Override the storage directory (and force the file backend).
    pub fn with_storage_dir(mut self, dir: &str) -> Self {
        self.config.storage.backend = StorageBackend::File;
        self.config.storage.path = self.resolve_path(dir);
        self
    }

    /// Open the configured key-value backend.
    pub async fn open_storage(&self) -> Result<Box<dyn KvStore>> {
        let storage: Box<dyn KvStore> = match self.config.storage.backend {
            StorageBackend::File => {
                let path = &self.config.storage.path;
                self.output
                    .debug(&format!("Using file storage at {}", path.display()));
                Box::new(FileStore::open(path).await.with_context(|| {
                    format!("Failed to open storage directory: {}", path.display())
                })?)
            }
            StorageBackend::Memory => {
                self.output
                    .warn("Using in-memory storage; changes are discarded on exit");
                Box::new(MemoryStore::new())
            }
        };
        Ok(storage)
    }

    /// Open storage and load the cart from it.
    pub async fn load_cart(&self) -> Result<CartStore<Box<dyn KvStore>>> {
        let storage = self.open_storage().await?;
        CartStore::load_with_config(storage, self.config.store.clone())
            .await
            .context("Failed to load cart")
    }

    /// Path a new config file should be written to.
    pub fn default_config_path(&self) -> PathBuf {
        self.cwd.join(CONFIG_NAMES[0])
    }

    /// Context rooted at `dir` with file storage under `dir/storage`.
    #[cfg(test)]
    pub fn for_dir(dir: &Path) -> Self {
        let output = Output::new(false, true);
        Self {
            config: CliConfig::default(),
            config_path: None,
            output,
            cwd: dir.to_path_buf(),
        }
        .with_storage_dir("storage")
    }

    /// Resolve a path relative to the working directory.
    pub fn resolve_path(&self, path: &str) -> PathBuf {
        let path = PathBuf::from(path);
        if path.is_absolute() {
            path
        } else {
            self.cwd.join(path)
        }
    }
}

/// Find a config file in the directory tree above `start`.
fn find_config(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();
    loop {
        for name in &CONFIG_NAMES {
            let candidate = current.join(name);
            if candidate.is_file() {
                return Some(candidate);
            }
        }

        if !current.pop() {
            return None;
        }
    }
}
