use std::io::Write;
use std::time::Instant;

use anyhow::Result;

use greenary_core::hero::{frame_source_for, Preloader};
use greenary_core::AppConfig;

use super::load_site;

pub async fn run(config: &AppConfig, variant: &str) -> Result<()> {
    let site = load_site(config)?;
    let record = site.variant(variant)?;
    let preloader = Preloader::new(frame_source_for(&config.hero)?, config.hero.max_concurrent_loads);

    println!("Preloading {} ({} frames)", record.name, record.frame_count);
    let started = Instant::now();
    let sequence = preloader
        .load_sequence(&record.frame_dir, record.frame_count, |progress| {
            print!("\r  {:>3}% ({}/{})", progress.percent(), progress.settled(), progress.total());
            let _ = std::io::stdout().flush();
        })
        .await;
    println!();

    let loaded = sequence.loaded_count();
    println!(
        "Loaded {}/{} frames in {:.2}s",
        loaded,
        sequence.len(),
        started.elapsed().as_secs_f64()
    );
    if loaded < sequence.len() {
        let missing: Vec<String> = (0..sequence.len())
            .filter(|&index| !sequence.is_loaded(index))
            .map(|index| index.to_string())
            .collect();
        println!("Missing frames: {}", missing.join(", "));
    }

    Ok(())
}
