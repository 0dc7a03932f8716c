use {
    crate::{catalog::ButtonImage, config::Config},
    anyhow::Context as _,
    std::thread::sleep,
    tracing::debug,
    uiauto::Context,
};

/// Result of one find-and-click attempt, as seen by the scan loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Clicked { x: i32, y: i32 },
    NoMatch,
}

/// Seam between the scan loop and the screen: the production implementation
/// drives capture and pointer injection, tests substitute a mock.
pub trait ButtonClicker {
    fn find_and_click(&mut self, button: &ButtonImage) -> Outcome;
}

pub struct Matcher {
    ctx: Context,
    config: Config,
}

impl Matcher {
    pub fn new(ctx: Context, config: Config) -> Self {
        Self { ctx, config }
    }

    /// The typed inner path: `Ok(Some(center))` after a click, `Ok(None)`
    /// when the button is not on screen, `Err` for capture or decode
    /// failures.
    fn try_find_and_click(&self, button: &ButtonImage) -> anyhow::Result<Option<(i32, i32)>> {
        let template = image::open(&button.path)
            .with_context(|| format!("failed to decode template {:?}", button.path))?
            .to_luma8();
        let screen = image::imageops::grayscale(&self.ctx.capture_full_screen()?);
        let found = uiauto::locate(&screen, &template, self.config.confidence, self.config.region)?;
        let Some(found) = found else {
            return Ok(None);
        };
        let (x, y) = found.rect.center();
        self.ctx.click_at(x, y)?;
        sleep(self.config.click_delay);
        Ok(Some((x, y)))
    }
}

impl ButtonClicker for Matcher {
    fn find_and_click(&mut self, button: &ButtonImage) -> Outcome {
        match self.try_find_and_click(button) {
            Ok(Some((x, y))) => Outcome::Clicked { x, y },
            Ok(None) => Outcome::NoMatch,
            Err(err) => {
                // Swallowed so the loop keeps polling, but not silently.
                debug!("match attempt for {:?} failed: {:?}", button.name, err);
                Outcome::NoMatch
            }
        }
    }
}
