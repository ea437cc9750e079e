use crate::config::CatalogConfig;
use crate::site::{ContactInfo, ProductRecord};

use super::card::ProductCard;
use super::contact::floating_contact_link;

/// Anything that can hold rendered product cards (a grid widget, a list, a test double)
pub trait CardContainer {
    /// Remove any placeholder content
    fn clear(&mut self);
    fn append(&mut self, card: ProductCard);
}

impl CardContainer for Vec<ProductCard> {
    fn clear(&mut self) {
        Vec::clear(self);
    }

    fn append(&mut self, card: ProductCard) {
        self.push(card);
    }
}

/// Turns product records into interactive cards wired to the contact number
#[derive(Debug, Clone)]
pub struct CatalogRenderer {
    contact: ContactInfo,
    placeholder: String,
}

impl CatalogRenderer {
    pub fn new(contact: &ContactInfo, config: &CatalogConfig) -> Self {
        Self {
            contact: contact.clone(),
            placeholder: config.placeholder_image.clone(),
        }
    }

    /// One card per product, in input order
    pub fn cards(&self, products: &[ProductRecord]) -> Vec<ProductCard> {
        products
            .iter()
            .map(|product| ProductCard::new(product, &self.contact.phone, &self.placeholder))
            .collect()
    }

    /// Populate a container with cards, replacing what it held.
    ///
    /// A missing container is not an error; nothing is rendered.
    pub fn render_into<C>(&self, products: &[ProductRecord], container: Option<&mut C>) -> usize
    where
        C: CardContainer + ?Sized,
    {
        let Some(container) = container else {
            tracing::debug!("No product container, skipping catalog render");
            return 0;
        };

        container.clear();
        let cards = self.cards(products);
        let count = cards.len();
        for card in cards {
            container.append(card);
        }
        tracing::debug!("Rendered {} product cards", count);
        count
    }

    /// Link for the floating contact button
    pub fn floating_link(&self) -> String {
        floating_contact_link(&self.contact)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::site::SiteData;

    fn renderer() -> CatalogRenderer {
        let contact = ContactInfo {
            phone: "919022166328".to_string(),
            ..Default::default()
        };
        CatalogRenderer::new(&contact, &CatalogConfig::default())
    }

    #[test]
    fn test_empty_catalog_renders_nothing() {
        let mut grid: Vec<ProductCard> = Vec::new();
        assert_eq!(renderer().render_into(&[], Some(&mut grid)), 0);
        assert!(grid.is_empty());
    }

    #[test]
    fn test_missing_container_is_noop() {
        let site = SiteData::builtin().unwrap();
        assert_eq!(
            renderer().render_into::<Vec<ProductCard>>(&site.products, None),
            0
        );
    }

    #[test]
    fn test_cards_follow_input_order_and_replace_content() {
        let site = SiteData::builtin().unwrap();
        let mut grid = renderer().cards(&site.products[..1]);

        let count = renderer().render_into(&site.products, Some(&mut grid));
        assert_eq!(count, 5);
        let ids: Vec<&str> = grid.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(
            ids,
            [
                "vermicompost",
                "cow-dung-manure",
                "pot-mixture",
                "cow-dung-cake",
                "green-gifts"
            ]
        );
        assert_eq!(grid[4].href, "#contact");
    }

    #[test]
    fn test_each_card_enquires_about_itself() {
        let site = SiteData::builtin().unwrap();
        for card in renderer().cards(&site.products) {
            let link = card.enquire().0;
            let expected = urlencoding::encode(&format!("Hey, I want to buy {}", card.name)).into_owned();
            assert!(link.ends_with(&expected));
        }
    }
}
