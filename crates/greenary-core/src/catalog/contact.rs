use crate::site::ContactInfo;

const WHATSAPP_BASE: &str = "https://wa.me";
const FLOATING_FALLBACK_MESSAGE: &str = "Hi";

/// Build a WhatsApp chat link with a prefilled message
pub fn whatsapp_link(phone: &str, message: &str) -> String {
    format!(
        "{}/{}?text={}",
        WHATSAPP_BASE,
        phone.trim(),
        urlencoding::encode(message)
    )
}

/// Prefilled enquiry text for a product
pub fn enquiry_message(product_name: &str) -> String {
    format!("Hey, I want to buy {}", product_name)
}

/// Link behind the floating contact button
pub fn floating_contact_link(contact: &ContactInfo) -> String {
    let message = if contact.whatsapp_message.trim().is_empty() {
        FLOATING_FALLBACK_MESSAGE
    } else {
        contact.whatsapp_message.as_str()
    };
    whatsapp_link(&contact.phone, message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enquiry_link() {
        let link = whatsapp_link("919022166328", &enquiry_message("Vermicompost"));
        assert_eq!(
            link,
            "https://wa.me/919022166328?text=Hey%2C%20I%20want%20to%20buy%20Vermicompost"
        );
    }

    #[test]
    fn test_floating_link_uses_configured_message() {
        let contact = ContactInfo {
            phone: "919022166328".to_string(),
            whatsapp_message: "I am interested to buy your products".to_string(),
            ..Default::default()
        };
        assert_eq!(
            floating_contact_link(&contact),
            "https://wa.me/919022166328?text=I%20am%20interested%20to%20buy%20your%20products"
        );
    }

    #[test]
    fn test_floating_link_falls_back_to_greeting() {
        let contact = ContactInfo {
            phone: "919022166328".to_string(),
            ..Default::default()
        };
        assert_eq!(
            floating_contact_link(&contact),
            "https://wa.me/919022166328?text=Hi"
        );
    }
}
