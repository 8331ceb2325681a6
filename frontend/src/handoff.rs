use log::warn;

use crate::config;

/// Pre-filled chat link. The message is percent-encoded into the query.
pub fn whatsapp_link(message: &str) -> String {
    format!(
        "https://wa.me/{}?text={}",
        config::WHATSAPP_NUMBER,
        urlencoding::encode(message)
    )
}

/// Chat link without a pre-filled message.
pub fn whatsapp_chat() -> String {
    format!("https://wa.me/{}", config::WHATSAPP_NUMBER)
}

pub fn tel_link() -> String {
    format!("tel:{}", config::PHONE_DIAL)
}

pub fn mailto_link() -> String {
    format!("mailto:{}", config::EMAIL)
}

/// Asks the browser to open `url` in a new tab. Fire and forget: nothing
/// comes back from the other side.
pub fn open_in_new_context(url: &str) {
    let Some(window) = web_sys::window() else {
        warn!("No window available to open {}", url);
        return;
    };
    match window.open_with_url_and_target(url, "_blank") {
        Ok(Some(_)) => {}
        Ok(None) => warn!("Browser blocked the new window for {}", url),
        Err(e) => warn!("Failed to open {}: {:?}", url, e),
    }
}

/// Opens a pre-filled WhatsApp chat, as used by the call-to-action buttons.
pub fn open_whatsapp(message: &str) {
    open_in_new_context(&whatsapp_link(message));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_is_percent_encoded() {
        let link = whatsapp_link("Hi! I'm interested in the Home Plan.\nThanks");
        assert_eq!(
            link,
            "https://wa.me/917745046520?text=Hi%21%20I%27m%20interested%20in%20the%20Home%20Plan.%0AThanks"
        );
    }

    #[test]
    fn emoji_survives_encoding() {
        let link = whatsapp_link("🔧 New");
        assert!(link.ends_with("?text=%F0%9F%94%A7%20New"));
    }

    #[test]
    fn contact_links_use_configured_numbers() {
        assert_eq!(tel_link(), "tel:+917745046520");
        assert_eq!(whatsapp_chat(), "https://wa.me/917745046520");
        assert_eq!(mailto_link(), "mailto:comforttechnicalservice8@gmail.com");
    }
}
