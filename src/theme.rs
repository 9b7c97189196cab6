//! Skin lookup: the visuals a control installs for its track, progress and thumb.
//!
//! A [`Theme`] maps orientation-qualified keys such as `"horizontal_track"` to
//! a [`Skin`]. Loading theme assets is the host's job; [`SkinTheme`] is the
//! in-memory table a host fills in (and what tests use).

use std::collections::HashMap;

use crate::error::{Error, Result};
use crate::geometry::{Orientation, Point, Size};

// ---------------------------------------------------------------------------
// Skin
// ---------------------------------------------------------------------------

/// A visual handle with its own geometry.
#[derive(Debug, Clone, PartialEq)]
pub struct Skin {
    /// Theme key this skin was created from.
    pub key: String,
    pub position: Point,
    pub size: Size,
}

impl Skin {
    pub fn new(key: impl Into<String>, width: f32, height: f32) -> Self {
        Self {
            key: key.into(),
            position: Point::ZERO,
            size: Size::new(width, height),
        }
    }

    pub fn x(&self) -> f32 {
        self.position.x
    }

    pub fn y(&self) -> f32 {
        self.position.y
    }

    pub fn width(&self) -> f32 {
        self.size.width
    }

    pub fn height(&self) -> f32 {
        self.size.height
    }
}

// ---------------------------------------------------------------------------
// Theme
// ---------------------------------------------------------------------------

/// Skin lookup collaborator.
pub trait Theme {
    /// A fresh visual for `key`, or `None` if the theme has no such skin.
    fn from_skin(&self, key: &str) -> Option<Skin>;
}

/// Build the key for a skin part of a control, e.g. `"vertical_progress"`.
pub fn skin_key(orientation: Orientation, part: &str) -> String {
    format!("{}_{}", orientation.as_str(), part)
}

/// In-memory theme keyed by skin name.
#[derive(Debug, Clone, Default)]
pub struct SkinTheme {
    skins: HashMap<String, Size>,
}

impl SkinTheme {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the natural size of a skin (builder).
    pub fn with_skin(mut self, key: impl Into<String>, width: f32, height: f32) -> Self {
        self.insert(key, width, height);
        self
    }

    /// Register or replace the natural size of a skin.
    pub fn insert(&mut self, key: impl Into<String>, width: f32, height: f32) {
        self.skins.insert(key.into(), Size::new(width, height));
    }

    pub fn contains(&self, key: &str) -> bool {
        self.skins.contains_key(key)
    }

    /// Like [`Theme::from_skin`], but a missing key is an error.
    pub fn require(&self, key: &str) -> Result<Skin> {
        self.from_skin(key)
            .ok_or_else(|| Error::UnknownSkin(key.to_owned()))
    }

    /// Track, progress and thumb skins for both orientations, sized for a
    /// 20-unit thick control with a 20x20 thumb.
    pub fn slider_defaults() -> Self {
        let mut theme = Self::new();
        for orientation in [Orientation::Horizontal, Orientation::Vertical] {
            let (w, h) = match orientation {
                Orientation::Horizontal => (100.0, 20.0),
                Orientation::Vertical => (20.0, 100.0),
            };
            theme.insert(skin_key(orientation, "track"), w, h);
            theme.insert(skin_key(orientation, "progress"), w, h);
            theme.insert(skin_key(orientation, "thumb"), 20.0, 20.0);
        }
        theme
    }
}

impl Theme for SkinTheme {
    fn from_skin(&self, key: &str) -> Option<Skin> {
        self.skins
            .get(key)
            .map(|size| Skin::new(key, size.width, size.height))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skin_keys_are_orientation_qualified() {
        assert_eq!(skin_key(Orientation::Horizontal, "track"), "horizontal_track");
        assert_eq!(skin_key(Orientation::Vertical, "progress"), "vertical_progress");
    }

    #[test]
    fn lookup_returns_fresh_skin() {
        let theme = SkinTheme::new().with_skin("horizontal_track", 100.0, 12.0);
        let skin = theme.from_skin("horizontal_track").unwrap();
        assert_eq!(skin.key, "horizontal_track");
        assert_eq!(skin.position, Point::ZERO);
        assert_eq!(skin.width(), 100.0);
        assert_eq!(skin.height(), 12.0);
    }

    #[test]
    fn missing_skin() {
        let theme = SkinTheme::new();
        assert!(theme.from_skin("vertical_track").is_none());
        let err = theme.require("vertical_track").unwrap_err();
        assert!(matches!(err, Error::UnknownSkin(key) if key == "vertical_track"));
    }

    #[test]
    fn slider_defaults_cover_both_orientations() {
        let theme = SkinTheme::slider_defaults();
        for key in [
            "horizontal_track",
            "horizontal_progress",
            "horizontal_thumb",
            "vertical_track",
            "vertical_progress",
            "vertical_thumb",
        ] {
            assert!(theme.contains(key), "missing {key}");
        }
        assert_eq!(theme.require("vertical_track").unwrap().size, Size::new(20.0, 100.0));
    }
}
