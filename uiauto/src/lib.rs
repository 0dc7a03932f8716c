mod locate;

pub use crate::locate::{locate, Match, Rect};

use {
    anyhow::Context as _,
    enigo::{Button, Coordinate, Direction, Enigo, Mouse},
    image::RgbaImage,
    std::{
        sync::{Arc, Mutex},
        thread::sleep,
        time::Duration,
    },
};

const CLICK_SETTLE_DURATION: Duration = Duration::from_millis(50);

struct ContextData {
    enigo: Mutex<Enigo>,
}

/// Handle to the local desktop: captures the screen through `xcap` and
/// injects pointer input through `enigo`. Cheap to clone.
#[derive(Clone)]
pub struct Context(Arc<ContextData>);

impl Context {
    #[allow(clippy::new_without_default)]
    pub fn new() -> anyhow::Result<Self> {
        Ok(Self(Arc::new(ContextData {
            enigo: Mutex::new(Enigo::new(&enigo::Settings::default())?),
        })))
    }

    /// Dimensions of the primary monitor in pixels.
    pub fn screen_size(&self) -> anyhow::Result<(u32, u32)> {
        let monitors = xcap::Monitor::all()?;
        let monitor = monitors.first().context("no monitors found")?;
        Ok((monitor.width()?, monitor.height()?))
    }

    pub fn capture_full_screen(&self) -> anyhow::Result<RgbaImage> {
        let image = xcap::Monitor::all()?
            .first()
            .context("no monitors found")?
            .capture_image()?;
        Ok(image)
    }

    pub fn mouse_move_global(&self, x: i32, y: i32) -> anyhow::Result<()> {
        self.0
            .enigo
            .lock()
            .unwrap()
            .move_mouse(x, y, Coordinate::Abs)?;
        Ok(())
    }

    pub fn mouse_left_click(&self) -> anyhow::Result<()> {
        self.0
            .enigo
            .lock()
            .unwrap()
            .button(Button::Left, Direction::Click)?;
        Ok(())
    }

    /// Moves the pointer to a global position and left-clicks there.
    pub fn click_at(&self, x: i32, y: i32) -> anyhow::Result<()> {
        self.mouse_move_global(x, y)?;
        sleep(CLICK_SETTLE_DURATION);
        self.mouse_left_click()
    }
}
