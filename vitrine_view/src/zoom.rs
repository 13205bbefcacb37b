// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect, Size};

use crate::transform::Transform;

#[cfg(all(not(feature = "std"), not(feature = "libm")))]
compile_error!("vitrine_view requires either the `std` or `libm` feature");

/// Sensitivity of the exponential wheel-to-zoom mapping.
///
/// A raw wheel delta `d` multiplies the current scale by
/// `2^(d * WHEEL_SENSITIVITY)`. Deltas are browser-reported and unnormalized;
/// feeding them through the exponent verbatim keeps zoom speed proportional
/// to whatever rate the device reports at.
pub const WHEEL_SENSITIVITY: f64 = 0.001;

/// How far above the fit scale zooming may go.
///
/// The zoom range is `[fit.scale, fit.scale + MAX_ZOOM_ABOVE_FIT]`. The
/// ceiling is a fixed design constant, not derived from element or viewport
/// geometry.
pub const MAX_ZOOM_ABOVE_FIT: f64 = 2.0;

/// Axis selector for per-axis offset clamping.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    /// The horizontal axis (widths and `x` offsets).
    X,
    /// The vertical axis (heights and `y` offsets).
    Y,
}

#[cfg(feature = "std")]
fn exp2(x: f64) -> f64 {
    x.exp2()
}

#[cfg(all(not(feature = "std"), feature = "libm"))]
fn exp2(x: f64) -> f64 {
    libm::exp2(x)
}

/// Computes one wheel-driven zoom step anchored at the cursor.
///
/// The new scale is `current.scale * 2^(wheel_delta * WHEEL_SENSITIVITY)`,
/// clamped into `[fit.scale, fit.scale + MAX_ZOOM_ABOVE_FIT]`. Positive
/// deltas zoom in. Returns `None` when the clamped scale equals the current
/// scale (including a zero delta), which callers treat as a no-op.
///
/// The offsets are re-solved so that the page point under `cursor` stays
/// fixed while the element rescales, then clamped per axis with
/// [`clamp_offset`]. Cursor coordinates are viewport-relative (the same space
/// as pointer events).
///
/// ```rust
/// use kurbo::{Point, Rect, Size};
/// use vitrine_view::{fit_transform, zoom_about};
///
/// let rect = Rect::new(0.0, 0.0, 800.0, 600.0);
/// let viewport = Size::new(1000.0, 800.0);
/// let fit = fit_transform(rect, viewport);
///
/// // A zero delta never changes scale.
/// assert!(zoom_about(fit, fit, rect, viewport, Point::new(10.0, 10.0), 0.0).is_none());
/// ```
#[must_use]
pub fn zoom_about(
    current: Transform,
    fit: Transform,
    rect: Rect,
    viewport: Size,
    cursor: Point,
    wheel_delta: f64,
) -> Option<Transform> {
    let scale = (current.scale * exp2(wheel_delta * WHEEL_SENSITIVITY))
        .clamp(fit.scale, fit.scale + MAX_ZOOM_ABOVE_FIT);
    if (scale - current.scale).abs() < f64::EPSILON {
        return None;
    }

    // Cursor relative to the viewport center, which is where the fit
    // transform pins the element's center.
    let cursor_x = cursor.x - viewport.width / 2.0;
    let cursor_y = cursor.y - viewport.height / 2.0;
    let ratio = scale / current.scale;

    // Keep the element point under the cursor fixed: shrink/grow the
    // cursor-to-offset lever by the scale ratio around the fit position.
    let x = cursor_x - (cursor_x - (current.x - fit.x)) * ratio + fit.x;
    let y = cursor_y - (cursor_y - (current.y - fit.y)) * ratio + fit.y;

    Some(Transform {
        x: clamp_offset(x, Axis::X, rect, viewport, fit, scale),
        y: clamp_offset(y, Axis::Y, rect, viewport, fit, scale),
        scale,
    })
}

/// Clamps a pan offset along one axis.
///
/// When the scaled element size along `axis` fits inside the viewport, the
/// fit offset is returned unconditionally: the element stays centered and no
/// panning can open a gap. Otherwise the offset is clamped into
/// `[fit - max_offset, fit + max_offset]` where
/// `max_offset = (scaled_size - viewport_size) / 2`, so the element's scaled
/// edges never retreat inward past the viewport edge.
#[must_use]
pub fn clamp_offset(
    offset: f64,
    axis: Axis,
    rect: Rect,
    viewport: Size,
    fit: Transform,
    scale: f64,
) -> f64 {
    let (view_len, rect_len, fit_offset) = match axis {
        Axis::X => (viewport.width, rect.width(), fit.x),
        Axis::Y => (viewport.height, rect.height(), fit.y),
    };

    let scaled = rect_len * scale;
    if scaled <= view_len {
        return fit_offset;
    }

    let max_offset = (scaled - view_len) / 2.0;
    offset.clamp(fit_offset - max_offset, fit_offset + max_offset)
}

/// Horizontal distance that moves a scaled element fully off-screen.
///
/// Used by gallery transitions: the outgoing element slides by this distance
/// (sign chosen by the caller from the navigation direction), which carries
/// its far edge past the opposite viewport edge.
#[must_use]
pub fn hide_distance(rect_width: f64, scale: f64, viewport_width: f64) -> f64 {
    let scaled_width = rect_width * scale;
    scaled_width + viewport_width / 2.0 - scaled_width / 2.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transform::fit_transform;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    // 2000x1000 image in a 1000x800 viewport: fit scale 0.5, scaled size
    // 1000x500, centered.
    fn wide_scene() -> (Rect, Size, Transform) {
        let rect = Rect::new(0.0, 0.0, 2000.0, 1000.0);
        let viewport = Size::new(1000.0, 800.0);
        let fit = fit_transform(rect, viewport);
        (rect, viewport, fit)
    }

    #[test]
    fn zero_delta_is_a_no_op() {
        let (rect, viewport, fit) = wide_scene();
        let cursor = Point::new(500.0, 400.0);
        assert!(zoom_about(fit, fit, rect, viewport, cursor, 0.0).is_none());
    }

    #[test]
    fn zoom_out_below_fit_clamps_and_no_ops() {
        let (rect, viewport, fit) = wide_scene();
        let cursor = Point::new(500.0, 400.0);
        // Already at the fit scale; a zoom-out delta clamps back to fit.
        assert!(zoom_about(fit, fit, rect, viewport, cursor, -240.0).is_none());
    }

    #[test]
    fn zoom_clamps_exactly_to_ceiling() {
        let (rect, viewport, fit) = wide_scene();
        let cursor = Point::new(500.0, 400.0);
        // An absurdly large delta lands exactly on the ceiling.
        let t = zoom_about(fit, fit, rect, viewport, cursor, 1.0e6).unwrap();
        assert_eq!(t.scale, fit.scale + MAX_ZOOM_ABOVE_FIT);

        // Another zoom-in from the ceiling is a no-op.
        assert!(zoom_about(t, fit, rect, viewport, cursor, 120.0).is_none());
    }

    #[test]
    fn zoom_at_viewport_center_keeps_element_centered() {
        let (rect, viewport, fit) = wide_scene();
        let cursor = Point::new(500.0, 400.0);
        let t = zoom_about(fit, fit, rect, viewport, cursor, 500.0).unwrap();
        // Anchoring at the center moves no offset on the axis that still
        // fits; on the overflowing axis the centered offset is also stable.
        assert!(approx_eq(t.x, fit.x));
        assert!(approx_eq(t.y, fit.y));
    }

    #[test]
    fn zoom_keeps_cursor_point_fixed_when_unclamped() {
        let (rect, viewport, fit) = wide_scene();
        // Zoom well in first so clamping headroom exists, then verify the
        // anchored relation between two consecutive transforms.
        let cursor = Point::new(500.0, 400.0);
        let mid = zoom_about(fit, fit, rect, viewport, cursor, 900.0).unwrap();

        let anchor = Point::new(520.0, 410.0);
        let next = zoom_about(mid, fit, rect, viewport, anchor, 60.0).unwrap();

        // The element-space point under the anchor must be unchanged:
        // (anchor - center - offset) / scale is invariant.
        let ax = anchor.x - viewport.width / 2.0;
        let ay = anchor.y - viewport.height / 2.0;
        let before_x = (ax - (mid.x - fit.x)) / mid.scale;
        let before_y = (ay - (mid.y - fit.y)) / mid.scale;
        let after_x = (ax - (next.x - fit.x)) / next.scale;
        let after_y = (ay - (next.y - fit.y)) / next.scale;
        assert!(approx_eq(before_x, after_x));
        assert!(approx_eq(before_y, after_y));
    }

    #[test]
    fn clamp_returns_fit_offset_when_element_fits() {
        let (rect, viewport, fit) = wide_scene();
        // At fit scale the element fits both axes; any requested offset is
        // pulled back to the fit offset.
        for requested in [-500.0, 0.0, 13.0, 500.0] {
            assert_eq!(
                clamp_offset(requested, Axis::X, rect, viewport, fit, fit.scale),
                fit.x
            );
            assert_eq!(
                clamp_offset(requested, Axis::Y, rect, viewport, fit, fit.scale),
                fit.y
            );
        }
    }

    #[test]
    fn clamp_bounds_offsets_when_element_overflows() {
        let (rect, viewport, fit) = wide_scene();
        // Scale 1.0: scaled size 2000x1000 overflows the 1000x800 viewport.
        let scale = 1.0;
        let max_x = (rect.width() * scale - viewport.width) / 2.0;
        let max_y = (rect.height() * scale - viewport.height) / 2.0;

        assert_eq!(
            clamp_offset(1.0e4, Axis::X, rect, viewport, fit, scale),
            fit.x + max_x
        );
        assert_eq!(
            clamp_offset(-1.0e4, Axis::X, rect, viewport, fit, scale),
            fit.x - max_x
        );
        assert_eq!(
            clamp_offset(1.0e4, Axis::Y, rect, viewport, fit, scale),
            fit.y + max_y
        );

        // An in-bounds offset passes through untouched.
        let inside = fit.x + max_x / 2.0;
        assert_eq!(
            clamp_offset(inside, Axis::X, rect, viewport, fit, scale),
            inside
        );
    }

    #[test]
    fn hide_distance_clears_the_viewport() {
        let (rect, viewport, _) = wide_scene();
        let scale = 0.5;
        let scaled_width = rect.width() * scale;
        let d = hide_distance(rect.width(), scale, viewport.width);
        assert_eq!(d, scaled_width + viewport.width / 2.0 - scaled_width / 2.0);

        // Sliding a centered element by `d` moves its near edge past the
        // viewport edge: d >= half the viewport plus half the element.
        assert!(d >= viewport.width / 2.0 + scaled_width / 2.0);
    }
}
