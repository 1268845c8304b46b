//! Durable user preferences and ambient environment hints.

mod color_scheme;
mod preferences;

pub use color_scheme::{preferred_theme, preferred_theme_from};
pub use preferences::{
    MemoryThemeStorage, PreferencesError, PreferencesFile, ThemeStorage, THEME_KEY,
};
