use {
    anyhow::Context as _,
    fs_err as fs,
    std::path::{Path, PathBuf},
};

/// Directory searched first for button reference images.
pub const PREFERRED_DIR: &str = "buttons";

const FALLBACK_PREFIXES: &[&str] = &["Accept", "Confirm", "Continue", "OK"];
const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "bmp"];

/// One reference image to look for on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonImage {
    pub path: PathBuf,
    pub name: String,
}

impl ButtonImage {
    fn from_path(path: PathBuf) -> Option<Self> {
        let name = path.file_stem()?.to_string_lossy().into_owned();
        Some(Self { path, name })
    }
}

fn has_image_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            IMAGE_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        })
}

fn matches_fallback_pattern(path: &Path) -> bool {
    has_image_extension(path)
        && path
            .file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| {
                FALLBACK_PREFIXES
                    .iter()
                    .any(|prefix| name.starts_with(prefix))
            })
}

/// Enumerates reference images in `preferred_dir`. When the directory is
/// missing or holds no images, falls back to Accept*/Confirm*/Continue*/OK*
/// image files in `fallback_dir`. Directory order is kept as enumerated.
pub fn load(preferred_dir: &Path, fallback_dir: &Path) -> anyhow::Result<Vec<ButtonImage>> {
    let mut images = Vec::new();
    if preferred_dir.is_dir() {
        for entry in fs::read_dir(preferred_dir)? {
            let path = entry?.path();
            if path.is_file() && has_image_extension(&path) {
                images.extend(ButtonImage::from_path(path));
            }
        }
    }
    if images.is_empty() {
        for entry in fs::read_dir(fallback_dir)
            .with_context(|| format!("failed to scan {:?} for button images", fallback_dir))?
        {
            let path = entry?.path();
            if path.is_file() && matches_fallback_pattern(&path) {
                images.extend(ButtonImage::from_path(path));
            }
        }
    }
    Ok(images)
}
