use log::Level;

/// Scroll offset (px) past which the nav bar switches to compact mode.
pub const COMPACT_SCROLL_THRESHOLD: f64 = 10.0;

/// Space reserved for the fixed nav bar when scrolling to a section.
pub const HEADER_OFFSET: f64 = 100.0;

/// How long the mobile overlay keeps fading before it is unmounted.
pub const MENU_EXIT_MS: u32 = 300;

/// Delay before on-mount reveals flip, so the initial pose gets painted first.
pub const MOUNT_REVEAL_DELAY_MS: u32 = 16;

pub const GAMEPLAY_IMAGE_URL: &str = "https://images.unsplash.com/photo-1605810230434-7631ac76ec81";

pub const STORE_URL: &str = "https://www.meta.com/experiences/";

pub const TRAILER_URL: &str = "#gameplay";

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // verbose while running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
