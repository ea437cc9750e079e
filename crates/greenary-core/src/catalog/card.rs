use crate::site::ProductRecord;

use super::contact::{enquiry_message, whatsapp_link};

const CURRENCY: &str = "₹";
const FALLBACK_TARGET: &str = "#";

/// Where a card's picture comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardImage {
    /// The product's own image, not yet known to be good or bad
    Source(String),
    /// The product image failed; show the placeholder instead
    Placeholder(String),
}

impl CardImage {
    pub fn path(&self) -> &str {
        match self {
            CardImage::Source(path) | CardImage::Placeholder(path) => path,
        }
    }
}

/// Result of activating a card's secondary "Enquire Now" action.
///
/// Carries only the chat link; the card's own navigation target is never
/// part of it, so handling an enquiry cannot fall through to the card link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnquireLink(pub String);

/// An interactive product card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductCard {
    pub id: String,
    pub name: String,
    pub price: String,
    pub unit: String,
    pub description: String,
    pub benefits: Vec<String>,
    /// Primary navigation target
    pub href: String,
    pub image: CardImage,
    placeholder: String,
    enquire_link: String,
}

impl ProductCard {
    pub fn new(product: &ProductRecord, phone: &str, placeholder: &str) -> Self {
        let href = if product.url.trim().is_empty() {
            FALLBACK_TARGET.to_string()
        } else {
            product.url.clone()
        };

        let image = if product.image.trim().is_empty() {
            CardImage::Placeholder(placeholder.to_string())
        } else {
            CardImage::Source(product.image.clone())
        };

        Self {
            id: product.id.clone(),
            name: product.name.clone(),
            price: product.price.clone(),
            unit: product.unit.clone(),
            description: product.description.clone(),
            benefits: product.benefits.clone(),
            href,
            image,
            placeholder: placeholder.to_string(),
            enquire_link: whatsapp_link(phone, &enquiry_message(&product.name)),
        }
    }

    /// Price line, e.g. "₹ 50 per kg"
    pub fn price_line(&self) -> String {
        [CURRENCY, self.price.as_str(), self.unit.as_str()]
            .iter()
            .filter(|part| !part.is_empty())
            .copied()
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Secondary action: open a prefilled chat about this product
    pub fn enquire(&self) -> EnquireLink {
        EnquireLink(self.enquire_link.clone())
    }

    /// Swap in the placeholder after the product image failed to load
    pub fn image_failed(&mut self) {
        if matches!(self.image, CardImage::Source(_)) {
            tracing::debug!("Card '{}' image failed, using placeholder", self.id);
            self.image = CardImage::Placeholder(self.placeholder.clone());
        }
    }
}
