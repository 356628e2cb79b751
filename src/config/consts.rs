// src/config/consts.rs

// Dataset
pub const DEFAULT_DATA_SOURCE: &str = "results.json";
pub const GRADE_PLACEHOLDER: &str = "Select grade";

// Local config + log
pub const CONFIG_FILE: &str = "result_card.cfg";
pub const LOG_DIR: &str = ".result_card";
pub const LOG_FILE: &str = "debug.log";

// Net
pub const HTTP_TIMEOUT_SECS: u64 = 15;

// Count-up animation
pub const COUNT_UP_STEPS: u32 = 40;
pub const COUNT_UP_TICK_MS: u64 = 15;

// Inline error shake
pub const SHAKE_PERIOD_MS: u64 = 200;
pub const SHAKE_ITERATIONS: u32 = 3;
pub const SHAKE_AMPLITUDE: f32 = 5.0;

// Row reveal stagger
pub const ROW_STAGGER_MS: u64 = 50;
pub const ROW_FADE_MS: u64 = 500;

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const EXPORT_FILE_PREFIX: &str = "result_";
pub const EXPORT_FALLBACK_NAME: &str = "student";
pub const EXPORT_SCALE: f32 = 2.0;
pub const EXPORT_BACKGROUND: [u8; 3] = [0xff, 0xff, 0xff];
/// Frames to wait for the card to scroll fully into view before capturing
pub const EXPORT_SCROLL_WAIT_FRAMES: u8 = 30;
