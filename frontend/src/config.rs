use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose step and scroll traces while developing locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

pub const BUSINESS_NAME: &str = "Comfort Technical Services";
pub const PROPRIETOR: &str = "Sagar Shinde";
pub const GSTIN: &str = "27HEKPS5234F1Z4";
pub const EMAIL: &str = "comforttechnicalservice8@gmail.com";
pub const POSTAL_ADDRESS: &str = "NIKHIL NIWAS, Pune PCMC 411035";
pub const WORKING_HOURS: &str = "Mon-Sat: 9AM-7PM";

pub const PHONE_DISPLAY: &str = "+91 77450 46520";
pub const PHONE_DIAL: &str = "+917745046520";
/// International format without the plus, as wa.me expects it.
pub const WHATSAPP_NUMBER: &str = "917745046520";

pub const MAP_EMBED_URL: &str = "https://www.google.com/maps/embed?pb=!1m18!1m12!1m3!1d3781.2599!2d73.7997!3d18.6298!2m3!1f0!2f0!3f0!3m2!1i1024!2i768!4f13.1!3m3!1m2!1s0x0%3A0x0!2zMTjCsDM3JzQ3LjMiTiA3M8KwNDcnNTguOSJF!5e0!3m2!1sen!2sin!4v1234567890";
pub const DIRECTIONS_URL: &str = "https://maps.google.com/?q=NIKHIL+NIWAS+Pune+PCMC+411035";
pub const REVIEWS_URL: &str = "https://share.google/XSCTACp1FdcN3VrHi";

/// Artificial pause before the booking hand-off, only drives the spinner.
pub const SUBMIT_DELAY_MS: u32 = 500;
/// Wait for layout to settle before the first active-section measurement.
pub const INITIAL_MEASURE_DELAY_MS: u32 = 150;
/// Past this offset the navbar switches to its solid "scrolled" look.
pub const NAV_SCROLLED_AFTER_PX: f64 = 10.0;

/// Pixel thresholds used when picking the highlighted nav entry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollThresholds {
    /// Offsets closer than this to the top always highlight "home".
    pub top: f64,
    /// Offsets closer than this to the document end always highlight "contact".
    pub bottom: f64,
    /// Height of the fixed navbar.
    pub header_offset: f64,
    /// How far below the header a section top may sit and still count as reached.
    pub activation: f64,
}

impl Default for ScrollThresholds {
    fn default() -> Self {
        Self {
            top: 100.0,
            bottom: 100.0,
            header_offset: 56.0,
            activation: 50.0,
        }
    }
}
