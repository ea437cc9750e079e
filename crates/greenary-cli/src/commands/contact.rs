use anyhow::Result;

use greenary_core::catalog::floating_contact_link;
use greenary_core::AppConfig;

use super::load_site;

pub fn run(config: &AppConfig) -> Result<()> {
    let site = load_site(config)?;
    let contact = &site.contact;

    println!("Phone:     {}", contact.display_phone);
    println!("Email:     {}", contact.email);
    println!("Instagram: {}", contact.instagram);
    println!("WhatsApp:  {}", floating_contact_link(contact));

    Ok(())
}
