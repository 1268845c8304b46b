use std::path::PathBuf;

use clap::Parser;

use crate::config::{preferred_theme, MemoryThemeStorage, PreferencesFile, ThemeStorage};
use crate::logging::default_log_path;
use crate::numeral::BlockType;
use crate::ui::counter::{CounterState, CounterStore};

#[derive(Debug, Parser)]
#[command(name = "kounti", version, about = "A new way to kount.")]
pub struct Args {
    /// Numeral base the session starts in.
    #[arg(long, value_enum, default_value_t = BlockType::Binary)]
    pub base: BlockType,

    /// Number of digit blocks the session starts with.
    #[arg(long, default_value_t = 3)]
    pub blocks: usize,

    /// Directory holding preferences.toml (default: the platform config dir).
    #[arg(long, value_name = "PATH")]
    pub config_dir: Option<PathBuf>,

    /// Keep the theme choice in memory only.
    #[arg(long)]
    pub no_persist: bool,

    /// Log file (default: the platform data dir).
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl Args {
    pub fn log_path(&self) -> PathBuf {
        self.log_file.clone().unwrap_or_else(default_log_path)
    }

    pub fn theme_storage(&self) -> Box<dyn ThemeStorage> {
        if self.no_persist {
            return Box::new(MemoryThemeStorage::default());
        }
        let file = match &self.config_dir {
            Some(dir) => PreferencesFile::in_dir(dir),
            None => PreferencesFile::new(PreferencesFile::default_path()),
        };
        tracing::debug!(path = %file.path().display(), "using preferences file");
        Box::new(file)
    }

    /// Session store with the persisted (or ambient) theme restored.
    pub fn build_store(&self) -> CounterStore {
        let state = CounterState::with_base(self.base, self.blocks);
        let mut store = CounterStore::new(state, self.theme_storage());
        store.restore_theme(preferred_theme());
        store
    }
}
