use anyhow::Result;

use greenary_core::catalog::CatalogRenderer;
use greenary_core::AppConfig;

use super::load_site;

pub fn run(config: &AppConfig) -> Result<()> {
    let site = load_site(config)?;
    let cards = CatalogRenderer::new(&site.contact, &config.catalog).cards(&site.products);

    if cards.is_empty() {
        println!("No products in the catalog.");
        return Ok(());
    }

    println!("Products ({}):\n", cards.len());

    for card in &cards {
        println!("  {} - {}", card.name, card.price_line());
        if !card.description.is_empty() {
            println!("    {}", card.description);
        }
        for benefit in &card.benefits {
            println!("    ✓ {}", benefit);
        }
        println!("    Details: {}", card.href);
        println!("    Enquire: {}", card.enquire().0);
        println!();
    }

    Ok(())
}
