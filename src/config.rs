use log::Level;

/// localStorage key holding the submitted contact records.
pub const SUBMISSIONS_KEY: &str = "contactSubmissions";
pub const SUBMISSIONS_CAPACITY: usize = 100;

pub const SITE_LOCALE: &str = "ar-SA";
pub const SITE_TIME_ZONE: &str = "Asia/Riyadh";

// Notification timings, all in milliseconds.
pub const NOTIFICATION_ENTER_DELAY_MS: u32 = 100;
pub const NOTIFICATION_AUTO_DISMISS_MS: u32 = 5000;
pub const NOTIFICATION_EXIT_MS: u32 = 300;

pub const COUNTER_DURATION_MS: u32 = 2000;
pub const COUNTER_TICK_MS: u32 = 16;

pub const STATS_THRESHOLD: f64 = 0.5;
pub const STATS_ROOT_MARGIN: &str = "0px";
pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
