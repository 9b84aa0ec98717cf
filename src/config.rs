use log::Level;

/// Counter animation length when a section doesn't pass one.
pub const DEFAULT_COUNTER_DURATION_MS: i64 = 2000;

/// Share of the element that must be inside the (expanded) viewport.
pub const VISIBILITY_THRESHOLD: f64 = 0.1;
/// Viewport expansion on every side, so counters start just before they scroll in.
pub const VISIBILITY_MARGIN_PX: u32 = 50;

/// Window width at which the mobile menu is hidden by the stylesheet.
pub const DESKTOP_BREAKPOINT_PX: f64 = 768.0;

/// Each hero slide is delayed by this many seconds times its index.
pub const CAROUSEL_SLIDE_SECONDS: u32 = 5;

pub const INSTAGRAM_URL: &str = "https://www.instagram.com/solparaglidersofficial/";
pub const INSTAGRAM_HANDLE: &str = "@solparaglidersofficial";
pub const FACEBOOK_URL: &str = "https://www.facebook.com/solparagliders/";
pub const YOUTUBE_URL: &str = "https://www.youtube.com/@SolParagliders_Since_1991/featured";
pub const WHATSAPP_URL: &str = "https://wa.me/5547999999999";

pub const VIDEO_ID: &str = "joWGdF4vwPg";
pub const VIDEO_TITLE: &str = "SOL Sports 30 anos";

pub const MAP_EMBED_URL: &str = "https://www.google.com/maps/embed?pb=!1m18!1m12!1m3!1d3578.0453456042!2d-49.09344492394726!3d-26.27953447706903!2m3!1f0!2f0!3f0!3m2!1i1024!2i768!4f13.1!3m3!1m2!1s0x94de9fde5d8f2e0d%3A0x37c5d8b0f18dc3a7!2sR.%20Walter%20Marquardt%2C%201180%20-%20Vila%20Nova%2C%20Jaragu%C3%A1%20do%20Sul%20-%20SC%2C%2089259-565!5e0!3m2!1spt-BR!2sbr!4v1717711200000!5m2!1spt-BR!2sbr";

pub fn video_embed_url() -> String {
    format!("https://www.youtube.com/embed/{}?autoplay=1", VIDEO_ID)
}

/// `IntersectionObserver` root margin, CSS syntax.
pub fn visibility_root_margin() -> String {
    format!("{}px", VISIBILITY_MARGIN_PX)
}

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Counter transitions are worth seeing while developing
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
