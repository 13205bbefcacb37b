// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Vitrine View: fit/zoom/pan geometry for the Vitrine lightbox.
//!
//! This crate is the pure math underneath the lightbox widget. Given an
//! element's natural bounding rect and a viewport size, it computes:
//!
//! - The **fit transform** that centers the element and scales it to fit the
//!   viewport ([`fit_transform`]).
//! - **Cursor-anchored zoom** steps driven by raw wheel deltas, clamped to a
//!   fixed range above the fit scale ([`zoom_about`]).
//! - **Pan-offset clamping** that keeps the scaled element's edges at or
//!   beyond the viewport edge, or re-centers it when it is smaller than the
//!   viewport ([`clamp_offset`]).
//! - The **slide-off distance** used by gallery transitions to move an
//!   outgoing element fully off-screen ([`hide_distance`]).
//!
//! A [`Transform`] is expressed relative to the element's natural (untransformed)
//! placement on the page: `x`/`y` are pixel offsets and `scale` is a
//! multiplicative factor. The fit transform centers the element, so all
//! clamping is phrased as bounds around the fit offsets.
//!
//! It does **not** own any element tree, styling, or event handling. Callers
//! are expected to:
//! - Measure element rects and viewport sizes themselves.
//! - Feed pointer/wheel input through a higher-level state machine (see the
//!   `vitrine_widget` crate) that calls into these helpers.
//! - Apply the resulting transforms to their page however they style it.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect, Size};
//! use vitrine_view::{Transform, fit_transform, zoom_about};
//!
//! // A 2000x1000 image sitting at the page origin, in a 1000x800 viewport.
//! let rect = Rect::new(0.0, 0.0, 2000.0, 1000.0);
//! let viewport = Size::new(1000.0, 800.0);
//!
//! let fit = fit_transform(rect, viewport);
//! assert_eq!(fit.scale, 0.5);
//!
//! // One wheel notch toward zoom-in, anchored at the viewport center.
//! let cursor = Point::new(500.0, 400.0);
//! let zoomed = zoom_about(fit, fit, rect, viewport, cursor, 120.0);
//! assert!(zoomed.is_some_and(|t| t.scale > fit.scale));
//! ```
//!
//! ## Design notes
//!
//! - Zoom is a uniform scalar; there is no rotation.
//! - Wheel deltas are used verbatim (browser-reported, unnormalized) through
//!   an exponential mapping, so zoom speed tracks device report rates.
//! - All clamping is per-axis; an element narrower than the viewport stays
//!   horizontally centered even while it pans vertically.
//!
//! This crate is `no_std`.

#![no_std]

mod transform;
mod zoom;

pub use transform::{Transform, fit_transform};
pub use zoom::{Axis, MAX_ZOOM_ABOVE_FIT, WHEEL_SENSITIVITY, clamp_offset, hide_distance, zoom_about};
