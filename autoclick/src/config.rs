use {std::time::Duration, uiauto::Rect};

/// Delay between catalog sweeps. Lower is faster and uses more CPU.
pub const SCAN_INTERVAL: Duration = Duration::from_millis(300);

/// Minimum template match confidence (0.0 to 1.0).
pub const CONFIDENCE: f32 = 0.8;

/// Pause after each click before moving on to the next image.
pub const CLICK_DELAY: Duration = Duration::from_millis(100);

/// Restricts the search to a screen region; `None` searches the whole screen.
pub const REGION: Option<Rect> = None;

#[derive(Debug, Clone, Copy)]
pub struct Config {
    pub scan_interval: Duration,
    pub confidence: f32,
    pub click_delay: Duration,
    pub region: Option<Rect>,
}

impl Config {
    pub fn standard() -> Self {
        Self {
            scan_interval: SCAN_INTERVAL,
            confidence: CONFIDENCE,
            click_delay: CLICK_DELAY,
            region: REGION,
        }
    }
}
