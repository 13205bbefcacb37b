// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag gesture tracking: pan offsets from pointer movement, with a small
//! engage threshold that separates clicks from drags.

use kurbo::{Point, Vec2};

/// Movement (in pixels, either axis) past which a pointer-down counts as a
/// drag rather than a click.
pub const DRAG_THRESHOLD: f64 = 3.0;

/// Delay in seconds between pointer-up and clearing the drag mark, so the
/// click handler that follows pointer-up still observes the drag.
pub const DRAG_SETTLE_DELAY: f64 = 0.010;

/// An in-progress drag: the cursor position and pan offset at pointer-down.
///
/// The gesture is a pure record; the widget decides when to create one
/// (pointer-down while wheel-zoomed) and feeds pointer-move positions
/// through [`DragGesture::target_offset`] to get the requested pan, which it
/// then clamps.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragGesture {
    start: Point,
    origin: Vec2,
}

impl DragGesture {
    /// Starts a gesture at the given cursor position and current pan offset.
    #[must_use]
    pub fn new(start: Point, origin: Vec2) -> Self {
        Self { start, origin }
    }

    /// The pan offset the cursor position asks for: the starting offset plus
    /// the cursor's movement since pointer-down.
    #[must_use]
    pub fn target_offset(&self, cursor: Point) -> Vec2 {
        self.origin + (cursor - self.start)
    }

    /// Whether the cursor has moved past [`DRAG_THRESHOLD`] on either axis.
    #[must_use]
    pub fn exceeds_threshold(&self, cursor: Point) -> bool {
        let delta = cursor - self.start;
        delta.x.abs() > DRAG_THRESHOLD || delta.y.abs() > DRAG_THRESHOLD
    }
}
