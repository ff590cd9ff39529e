// Lead submissions go to GREENLANE_LEAD_ENDPOINT when it is set at build time.
// Without it the form runs against a simulated delay.
pub fn get_lead_endpoint() -> Option<&'static str> {
    option_env!("GREENLANE_LEAD_ENDPOINT").filter(|url| !url.is_empty())
}

/// localStorage key holding the two-letter language preference.
pub const LANGUAGE_STORAGE_KEY: &str = "greenlane_lang";

/// Vertical clearance kept free for the fixed header when scrolling to a section.
pub const HEADER_OFFSET: f64 = 100.0;

/// Delay before scrolling to the quote form, lets the overlay start closing.
pub const QUOTE_SCROLL_DELAY_MS: u32 = 100;

/// Artificial round-trip used when no endpoint is configured.
pub const SIMULATED_SUBMIT_DELAY_MS: u32 = 2_000;

pub const HERO_AUTOPLAY_MS: u32 = 6_000;
pub const HERO_RESUME_AUTOPLAY_MS: u32 = 10_000;

/// Header switches to its solid style past this scroll offset.
pub const HEADER_SCROLLED_THRESHOLD: f64 = 50.0;
