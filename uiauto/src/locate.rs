use {anyhow::bail, image::GrayImage};

/// Per-pixel intensity tolerance when comparing template pixels against the
/// captured screen.
const PIXEL_TOLERANCE: u8 = 25;

/// Upper bound on template pixels sampled per candidate position. Large
/// templates are compared on a coarser grid.
const MAX_SAMPLES: u32 = 256;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn center(&self) -> (i32, i32) {
        (
            (self.x + self.width / 2) as i32,
            (self.y + self.height / 2) as i32,
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Match {
    pub rect: Rect,
    pub confidence: f32,
}

/// Searches `screen` for the best position of `template`.
///
/// Returns `Ok(Some(_))` for the highest-scoring position with confidence at
/// or above `min_confidence`, `Ok(None)` when no position qualifies, and an
/// error when the template cannot fit into the searched area or `region`
/// falls outside the screen.
pub fn locate(
    screen: &GrayImage,
    template: &GrayImage,
    min_confidence: f32,
    region: Option<Rect>,
) -> anyhow::Result<Option<Match>> {
    if template.width() == 0 || template.height() == 0 {
        bail!("template image is empty");
    }
    let search = match region {
        Some(rect) => {
            if rect.x.saturating_add(rect.width) > screen.width()
                || rect.y.saturating_add(rect.height) > screen.height()
            {
                bail!(
                    "search region {:?} is out of bounds for a {}x{} screen",
                    rect,
                    screen.width(),
                    screen.height()
                );
            }
            rect
        }
        None => Rect::new(0, 0, screen.width(), screen.height()),
    };
    if template.width() > search.width || template.height() > search.height {
        bail!(
            "{}x{} template does not fit into the {}x{} search area",
            template.width(),
            template.height(),
            search.width,
            search.height
        );
    }

    let samples = sample_template(template);
    // Rounded up so a position at exactly the threshold survives the
    // early bail-out; the final confidence check still decides.
    let allowed_misses = (samples.len() as f32 * (1.0 - min_confidence)).ceil() as usize;

    let mut best: Option<Match> = None;
    for y in search.y..=search.y + search.height - template.height() {
        for x in search.x..=search.x + search.width - template.width() {
            let Some(confidence) = confidence_at(screen, &samples, x, y, allowed_misses) else {
                continue;
            };
            if confidence >= min_confidence
                && best.is_none_or(|prev| confidence > prev.confidence)
            {
                let rect = Rect::new(x, y, template.width(), template.height());
                best = Some(Match { rect, confidence });
                if confidence >= 1.0 {
                    return Ok(best);
                }
            }
        }
    }
    Ok(best)
}

/// Template pixels on a grid coarse enough to stay under `MAX_SAMPLES`.
fn sample_template(template: &GrayImage) -> Vec<(u32, u32, u8)> {
    let total = template.width() * template.height();
    let step = (((total / MAX_SAMPLES).max(1)) as f32).sqrt().ceil() as u32;
    let mut samples = Vec::new();
    for y in (0..template.height()).step_by(step as usize) {
        for x in (0..template.width()).step_by(step as usize) {
            samples.push((x, y, template.get_pixel(x, y)[0]));
        }
    }
    samples
}

/// Fraction of sampled template pixels matching the screen at offset (x, y).
/// Bails out early once the position cannot reach the threshold anymore.
fn confidence_at(
    screen: &GrayImage,
    samples: &[(u32, u32, u8)],
    x: u32,
    y: u32,
    allowed_misses: usize,
) -> Option<f32> {
    let mut matched = 0usize;
    let mut missed = 0usize;
    for &(tx, ty, value) in samples {
        let on_screen = screen.get_pixel(x + tx, y + ty)[0];
        if on_screen.abs_diff(value) <= PIXEL_TOLERANCE {
            matched += 1;
        } else {
            missed += 1;
            if missed > allowed_misses {
                return None;
            }
        }
    }
    Some(matched as f32 / samples.len() as f32)
}
