use std::path::PathBuf;
use std::sync::Arc;

use dashmap::DashMap;
use social_dock_sdk::{platform_catalog, platform_info, Platform};
use tracing::{debug, warn};

use crate::domain::render::IconSource;

const ICON_CLASS_ATTR: &str = r#"<svg class="social-dock-icon""#;

/// SVG glyphs loaded from a directory, one file per platform, cached after first use.
///
/// Only file names listed in the platform catalog are ever opened.
pub struct IconLibrary {
    dir: PathBuf,
    cache: DashMap<Platform, Arc<str>>,
}

impl IconLibrary {
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            cache: DashMap::new(),
        }
    }

    fn load(&self, platform: Platform) -> Arc<str> {
        let file = platform_info(platform).icon;
        if !platform_catalog().iter().any(|p| p.icon == file) || file.contains(['/', '\\']) {
            return Arc::from("");
        }

        let path = self.dir.join(file);
        match std::fs::read_to_string(&path) {
            Ok(svg) if !svg.trim().is_empty() => {
                debug!(platform = %platform, path = %path.display(), "Loaded icon");
                Arc::from(svg.replace("<svg", ICON_CLASS_ATTR))
            }
            Ok(_) => Arc::from(""),
            Err(e) => {
                warn!(platform = %platform, path = %path.display(), error = %e, "Icon unavailable");
                Arc::from("")
            }
        }
    }
}

impl IconSource for IconLibrary {
    fn svg(&self, platform: Platform) -> Arc<str> {
        self.cache
            .entry(platform)
            .or_insert_with(|| self.load(platform))
            .clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn injects_class_and_caches() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("github.svg"),
            r#"<svg viewBox="0 0 24 24"><path d="M0 0"/></svg>"#,
        )
        .unwrap();
        let library = IconLibrary::new(dir.path());

        let svg = library.svg(Platform::Github);
        assert_eq!(
            &*svg,
            r#"<svg class="social-dock-icon" viewBox="0 0 24 24"><path d="M0 0"/></svg>"#
        );

        std::fs::remove_file(dir.path().join("github.svg")).unwrap();
        assert_eq!(library.svg(Platform::Github), svg);
    }

    #[test]
    fn x_reads_its_dedicated_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("x-twitter.svg"), "<svg></svg>").unwrap();
        let library = IconLibrary::new(dir.path());

        assert!(library.svg(Platform::X).contains("social-dock-icon"));
    }

    #[test]
    fn missing_or_empty_files_yield_empty_markup() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("twitch.svg"), "  \n").unwrap();
        let library = IconLibrary::new(dir.path());

        assert!(library.svg(Platform::Twitch).is_empty());
        assert!(library.svg(Platform::Spotify).is_empty());
    }
}
