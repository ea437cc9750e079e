mod card;
mod contact;
mod renderer;
mod reveal;

pub use card::{CardImage, EnquireLink, ProductCard};
pub use contact::{enquiry_message, floating_contact_link, whatsapp_link};
pub use renderer::{CardContainer, CatalogRenderer};
pub use reveal::{RevealScheduler, REVEAL_FADE};
