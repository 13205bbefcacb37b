// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Vitrine Widget: the headless lightbox interaction state machine.
//!
//! A lightbox enlarges a designated image in place, lets the user zoom it
//! with the pointer wheel, pan it by dragging while zoomed in, and step
//! through sibling images in a gallery. This crate is the whole of that
//! behavior with the page factored out: the [`Lightbox`] consumes
//! pre-resolved input events and returns [`Effect`] instruction lists — style
//! mutations, class toggles, ARIA attribute updates, control
//! creation/removal — that a host applies to its page.
//!
//! ## Division of labor
//!
//! The widget does not hit test, query element trees, or read clocks.
//! Hosts:
//! - Resolve what each click/pointer event landed on and pass it as a
//!   [`Target`] (or the matched element key for pointer events).
//! - Implement [`Page`] so the widget can measure elements and enumerate
//!   gallery siblings on demand.
//! - Supply a monotonic timestamp to the handlers that schedule deferred
//!   work, and call [`Lightbox::advance`] when it comes due
//!   ([`Lightbox::next_deadline`] tells them when).
//! - Apply returned effects in order; every effect is idempotent to apply.
//!
//! In return every transition is synchronous, deterministic, and testable
//! without a browser. Geometry lives in `vitrine_view`; deferred work in
//! `vitrine_timing`.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Rect, Size};
//! use vitrine_widget::{Flags, Key, Lightbox, Options, Page, PointerButton, Target};
//!
//! struct SinglePage;
//! impl Page<u32, u8> for SinglePage {
//!     fn natural_rect(&self, _el: u32) -> Rect {
//!         Rect::new(0.0, 0.0, 2000.0, 1000.0)
//!     }
//!     fn gallery_of(&self, _el: u32) -> Option<u8> {
//!         None
//!     }
//!     fn gallery_images(&self, _g: u8) -> Vec<u32> {
//!         Vec::new()
//!     }
//! }
//!
//! let mut lightbox = Lightbox::new(Size::new(1000.0, 800.0), Options::default());
//!
//! // Host setup: create controls, decorate the matched element.
//! let setup = lightbox.create_effects();
//! let decorate = lightbox.attach(&[1]);
//! assert!(!setup.is_empty() && !decorate.is_empty());
//!
//! // A click opens the image at its fit scale.
//! lightbox.on_click(0.0, Target::Zoomable(1), PointerButton::Primary, &SinglePage);
//! assert!(lightbox.flags().contains(Flags::ZOOMED));
//!
//! // Escape closes it again; the cleanup runs after the transition.
//! lightbox.on_key(1.0, Key::Escape, None, &SinglePage);
//! assert!(!lightbox.is_open());
//! let cleanup = lightbox.advance(1.25);
//! assert!(!cleanup.is_empty());
//! ```
//!
//! ## Event wiring
//!
//! A DOM host typically wires document-level listeners once per widget
//! instance and forwards: `click` → [`Lightbox::on_click`], `keydown` →
//! [`Lightbox::on_key`], `wheel` → [`Lightbox::on_wheel`] (calling
//! `preventDefault` when the result is [`Outcome::Consumed`]),
//! `mousedown`/`mousemove`/`mouseup` → the pointer handlers, and `resize` →
//! [`Lightbox::on_resize`]. Teardown is [`Lightbox::detach`] plus removing
//! those listeners; nothing is shared between instances.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod config;
mod drag;
mod effect;
mod events;
mod gallery;
mod widget;

pub use config::{Classes, Labels, Options};
pub use drag::{DRAG_SETTLE_DELAY, DRAG_THRESHOLD, DragGesture};
pub use effect::{ClassRole, Control, Effect, Effects, StyleTarget, Transition};
pub use events::{Direction, Key, Outcome, PointerButton, Target};
pub use gallery::{ControlVisibility, GalleryCache, control_visibility, neighbor};
pub use widget::{Flags, Lightbox, LightboxDebugInfo, Page};
