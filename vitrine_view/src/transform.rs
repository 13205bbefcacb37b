// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Rect, Size, Vec2};

/// Placement of an element relative to its natural (untransformed) box.
///
/// `x` and `y` are pixel offsets applied on top of the element's natural
/// position; `scale` is a multiplicative factor relative to its natural
/// rendered size. The identity transform leaves the element exactly where
/// the page laid it out.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    /// Horizontal offset in pixels.
    pub x: f64,
    /// Vertical offset in pixels.
    pub y: f64,
    /// Uniform scale factor.
    pub scale: f64,
}

impl Transform {
    /// The identity transform: no offset, natural size.
    pub const IDENTITY: Self = Self {
        x: 0.0,
        y: 0.0,
        scale: 1.0,
    };

    /// Creates a transform from offsets and a scale factor.
    #[must_use]
    pub const fn new(x: f64, y: f64, scale: f64) -> Self {
        Self { x, y, scale }
    }

    /// Returns the offset portion as a vector.
    #[must_use]
    pub fn translation(self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// Returns this transform with the given offsets and the same scale.
    #[must_use]
    pub fn with_offset(self, x: f64, y: f64) -> Self {
        Self { x, y, ..self }
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Computes the transform that centers `rect` in the viewport and scales it
/// to fit.
///
/// The scale is the minimum of the two axis ratios
/// (`viewport.width / rect.width` and `viewport.height / rect.height`), so the
/// whole element is visible and the aspect ratio is preserved. The offsets
/// move the rect's center onto the viewport's center.
///
/// Degenerate inputs (empty rect or viewport) yield [`Transform::IDENTITY`].
///
/// ```rust
/// use kurbo::{Rect, Size};
/// use vitrine_view::fit_transform;
///
/// let fit = fit_transform(Rect::new(0.0, 0.0, 2000.0, 1000.0), Size::new(1000.0, 800.0));
/// assert_eq!(fit.scale, 0.5);
/// ```
#[must_use]
pub fn fit_transform(rect: Rect, viewport: Size) -> Transform {
    if rect.width() <= 0.0 || rect.height() <= 0.0 {
        return Transform::IDENTITY;
    }
    if viewport.width <= 0.0 || viewport.height <= 0.0 {
        return Transform::IDENTITY;
    }

    let scale = (viewport.width / rect.width()).min(viewport.height / rect.height());
    let center = rect.center();
    Transform {
        x: viewport.width / 2.0 - center.x,
        y: viewport.height / 2.0 - center.y,
        scale,
    }
}
