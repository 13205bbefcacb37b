// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Widget configuration: transition duration, control labels, class names.
//!
//! Configuration is plain data with defaults; hosts override individual
//! fields with struct update syntax:
//!
//! ```rust
//! use vitrine_widget::{Classes, Options};
//!
//! let options = Options {
//!     duration: 0.4,
//!     gallery: true,
//!     classes: Classes {
//!         marker: "shop-zoomable".into(),
//!         ..Classes::default()
//!     },
//!     ..Options::default()
//! };
//! assert_eq!(options.classes.zoom, "vitrine-zoom");
//! ```

use alloc::string::String;

use crate::effect::ClassRole;

/// Widget configuration.
#[derive(Clone, Debug, PartialEq)]
pub struct Options {
    /// Transition duration in seconds; also the delay before deferred
    /// cleanup after a close or gallery slide.
    pub duration: f64,
    /// Whether gallery grouping is enabled. When `false` the next/prev
    /// controls are never created and sibling lists are never resolved.
    pub gallery: bool,
    /// ARIA labels for the generated controls.
    pub labels: Labels,
    /// Class names for every marker and control, by role.
    pub classes: Classes,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            duration: 0.25,
            gallery: false,
            labels: Labels::default(),
            classes: Classes::default(),
        }
    }
}

/// ARIA labels for the generated controls.
#[derive(Clone, Debug, PartialEq)]
pub struct Labels {
    /// Label of the close control.
    pub close: String,
    /// Label of the next-image control.
    pub next: String,
    /// Label of the previous-image control.
    pub prev: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            close: "Close Zoom".into(),
            next: "Next Image".into(),
            prev: "Previous Image".into(),
        }
    }
}

/// Class names used by the widget, each independently overridable.
#[derive(Clone, Debug, PartialEq)]
pub struct Classes {
    /// Marks an element as managed by the widget.
    pub marker: String,
    /// The open (zoomed) image.
    pub zoom: String,
    /// An image zoomed beyond its fit scale by the wheel.
    pub wheel: String,
    /// Scroll lock on the document body.
    pub overflow: String,
    /// Base class of the overlay control.
    pub overlay: String,
    /// Overlay shown.
    pub overlay_show: String,
    /// Base class of the close control.
    pub close: String,
    /// Close control shown (host CSS hook; see [`ClassRole::CloseShow`]).
    pub close_show: String,
    /// Base class shared by the gallery buttons.
    pub button: String,
    /// The next-image button.
    pub button_next: String,
    /// The previous-image button.
    pub button_prev: String,
    /// A gallery button shown.
    pub button_show: String,
}

impl Classes {
    /// Resolves a class role to its configured name.
    #[must_use]
    pub fn resolve(&self, role: ClassRole) -> &str {
        match role {
            ClassRole::Marker => &self.marker,
            ClassRole::Zoom => &self.zoom,
            ClassRole::Wheel => &self.wheel,
            ClassRole::Overflow => &self.overflow,
            ClassRole::Overlay => &self.overlay,
            ClassRole::OverlayShow => &self.overlay_show,
            ClassRole::Close => &self.close,
            ClassRole::CloseShow => &self.close_show,
            ClassRole::Button => &self.button,
            ClassRole::ButtonNext => &self.button_next,
            ClassRole::ButtonPrev => &self.button_prev,
            ClassRole::ButtonShow => &self.button_show,
        }
    }
}

impl Default for Classes {
    fn default() -> Self {
        Self {
            marker: "vitrine".into(),
            zoom: "vitrine-zoom".into(),
            wheel: "vitrine-wheel".into(),
            overflow: "vitrine-overflow".into(),
            overlay: "vitrine-overlay".into(),
            overlay_show: "vitrine-overlay-show".into(),
            close: "vitrine-button-close".into(),
            close_show: "vitrine-button-close-show".into(),
            button: "vitrine-button".into(),
            button_next: "vitrine-button-next".into(),
            button_prev: "vitrine-button-prev".into(),
            button_show: "vitrine-button-show".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_documented_surface() {
        let options = Options::default();
        assert_eq!(options.duration, 0.25);
        assert!(!options.gallery);
        assert_eq!(options.labels.close, "Close Zoom");
        assert_eq!(options.classes.marker, "vitrine");
        assert_eq!(options.classes.button_show, "vitrine-button-show");
    }

    #[test]
    fn resolve_covers_every_role() {
        let classes = Classes::default();
        for (role, expected) in [
            (ClassRole::Marker, "vitrine"),
            (ClassRole::Zoom, "vitrine-zoom"),
            (ClassRole::Wheel, "vitrine-wheel"),
            (ClassRole::Overflow, "vitrine-overflow"),
            (ClassRole::Overlay, "vitrine-overlay"),
            (ClassRole::OverlayShow, "vitrine-overlay-show"),
            (ClassRole::Close, "vitrine-button-close"),
            (ClassRole::CloseShow, "vitrine-button-close-show"),
            (ClassRole::Button, "vitrine-button"),
            (ClassRole::ButtonNext, "vitrine-button-next"),
            (ClassRole::ButtonPrev, "vitrine-button-prev"),
            (ClassRole::ButtonShow, "vitrine-button-show"),
        ] {
            assert_eq!(classes.resolve(role), expected);
        }
    }

    #[test]
    fn overrides_merge_over_defaults() {
        let classes = Classes {
            zoom: "big".into(),
            ..Classes::default()
        };
        assert_eq!(classes.resolve(ClassRole::Zoom), "big");
        assert_eq!(classes.resolve(ClassRole::Marker), "vitrine");
    }
}
