use anyhow::Result;

use greenary_core::{AppConfig, PreferenceStore};

pub fn show(config: &AppConfig) -> Result<()> {
    let store = PreferenceStore::open(config.preferences_path());
    match store.theme() {
        Some(theme) => println!("Theme: {}", theme.as_str()),
        None => println!("Theme: {} (default)", store.effective_theme().as_str()),
    }
    Ok(())
}

pub fn toggle(config: &AppConfig) -> Result<()> {
    let mut store = PreferenceStore::open(config.preferences_path());
    let theme = store.toggle_theme()?;
    println!("Theme set to {}", theme.as_str());
    println!("Saved to {}", store.path().display());
    Ok(())
}
