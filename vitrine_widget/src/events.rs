// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Input vocabulary: pre-resolved event payloads fed to the widget.
//!
//! The widget performs no hit testing of its own. Hosts resolve what a click
//! or pointer event landed on (a designated zoomable element, the overlay,
//! one of the generated controls) and pass that resolution in as a
//! [`Target`]. Keyboard input is narrowed to the keys the widget reacts to.

/// Mouse-style button identity for click and pointer events.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerButton {
    /// The primary button (usually left).
    Primary,
    /// The auxiliary button (usually middle/wheel).
    Auxiliary,
    /// The secondary button (usually right).
    Secondary,
}

/// Keys the widget reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    /// Closes the open image.
    Escape,
    /// Toggles the focused element open/closed.
    Enter,
    /// Closes when focus moves off the open element.
    Tab,
}

/// Gallery navigation direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    /// Toward the following sibling.
    Next,
    /// Toward the preceding sibling.
    Prev,
}

/// What a click landed on, pre-resolved by the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Target<K> {
    /// A designated zoomable element.
    Zoomable(K),
    /// The backdrop overlay.
    Overlay,
    /// The close control.
    Close,
    /// The next-image control.
    Next,
    /// The previous-image control.
    Prev,
}

/// Whether the widget consumed an input event.
///
/// `Consumed` tells the host to suppress the event's default action (for
/// example `preventDefault` on a wheel event so the page does not scroll).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The event was not for the widget; let the default action run.
    Ignored,
    /// The widget acted on (or deliberately swallowed) the event.
    Consumed,
}
