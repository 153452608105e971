use std::{env, fs, path::PathBuf, sync::OnceLock};

use plotters::style::{register_font, FontStyle};

/// Font family every text element is drawn with.
pub(crate) const FAMILY: &str = "sans-serif";

/// Environment variable pointing at a TrueType font to use for text.
const FONT_ENV: &str = "FIBSPIRAL_FONT";

const CANDIDATES: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/liberation-sans/LiberationSans-Regular.ttf",
    "/usr/share/fonts/noto/NotoSans-Regular.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "/Library/Fonts/Arial.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

/// Registers a system font under [`FAMILY`] the first time it is called.
/// Returns whether text can be drawn.
pub(crate) fn text_available() -> bool {
    static REGISTERED: OnceLock<bool> = OnceLock::new();
    *REGISTERED.get_or_init(|| {
        let candidates = env::var_os(FONT_ENV)
            .map(PathBuf::from)
            .into_iter()
            .chain(CANDIDATES.iter().map(PathBuf::from));
        let registered = register_first(candidates);
        if !registered {
            log::warn!("No usable font found (set {FONT_ENV}), text will be omitted");
        }
        registered
    })
}

/// Registers the first readable, valid font among `candidates` under
/// [`FAMILY`]. Returns whether one was registered.
fn register_first(candidates: impl IntoIterator<Item = PathBuf>) -> bool {
    for path in candidates {
        let Ok(bytes) = fs::read(&path) else {
            continue;
        };
        // The font registry only accepts static data and lives for the
        // whole process anyway.
        let bytes: &'static [u8] = Box::leak(bytes.into_boxed_slice());
        match register_font(FAMILY, FontStyle::Normal, bytes) {
            Ok(()) => {
                log::debug!("Using font {}", path.display());
                return true;
            }
            Err(_) => log::debug!("{} is not a usable font", path.display()),
        }
    }
    false
}

#[cfg(test)]
mod test {
    use super::*;
    use test_log::test;

    #[test]
    fn missing_or_invalid_fonts_are_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let garbage = dir.path().join("garbage.ttf");
        fs::write(&garbage, b"not a font").unwrap();

        assert!(!register_first(Vec::new()));
        assert!(!register_first([
            dir.path().join("missing.ttf"),
            garbage,
        ]));
    }
}
