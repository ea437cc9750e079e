use anyhow::Result;

use greenary_core::hero::{frame_address, frame_source_for};
use greenary_core::AppConfig;

use super::load_site;

pub fn run(config: &AppConfig, variant: &str) -> Result<()> {
    let site = load_site(config)?;
    let record = site.variant(variant)?;
    let source = frame_source_for(&config.hero)?;

    println!("{} ({} frames):\n", record.name, record.frame_count);
    for index in 0..record.frame_count {
        println!("  {}", source.locate(&frame_address(&record.frame_dir, index)));
    }

    Ok(())
}
