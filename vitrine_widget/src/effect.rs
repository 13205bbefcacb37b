// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Output vocabulary: the side-effect instructions the widget emits.
//!
//! Every transition method on the widget returns a list of [`Effect`]s for
//! the host to apply, in order, to its page. Class names are referred to by
//! [`ClassRole`]; the host resolves a role to its configured class string via
//! [`Classes::resolve`](crate::Classes::resolve). Applying an effect twice
//! (adding a class that is present, clearing a style that is unset) must be
//! harmless, which lets the widget emit without querying page state.

use alloc::string::String;

use kurbo::Vec2;
use smallvec::SmallVec;

/// A control element the widget asks the host to create.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Control {
    /// The backdrop overlay behind the open image.
    Overlay,
    /// The close button.
    Close,
    /// The next-image button.
    Next,
    /// The previous-image button.
    Prev,
}

/// What a class toggle applies to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StyleTarget<K> {
    /// A host page element identified by its key.
    Element(K),
    /// The document body (scroll locking).
    Body,
    /// A widget-generated control.
    Control(Control),
}

/// Class names the widget toggles, by role.
///
/// Roles decouple the state machine from concrete class strings; the mapping
/// lives in [`Classes`](crate::Classes) and every entry is independently
/// overridable by the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClassRole {
    /// Marks an element as managed by the widget.
    Marker,
    /// The open (zoomed) image.
    Zoom,
    /// An image zoomed beyond its fit scale by the wheel.
    Wheel,
    /// Scroll lock on the document body.
    Overflow,
    /// Base class of the overlay control.
    Overlay,
    /// Overlay shown.
    OverlayShow,
    /// Base class of the close control.
    Close,
    /// Close control shown. Never emitted by the widget; hosts that want a
    /// dedicated hook can key it off [`ClassRole::OverlayShow`] instead.
    CloseShow,
    /// Base class shared by the gallery buttons.
    Button,
    /// The next-image button.
    ButtonNext,
    /// The previous-image button.
    ButtonPrev,
    /// A gallery button shown.
    ButtonShow,
}

/// Transition-duration override for an element's style.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    /// Clear any override; the stylesheet duration applies.
    Default,
    /// Force a zero duration so the next style change applies instantly.
    Instant,
}

/// One side-effect instruction for the host to apply.
///
/// `Option` payloads distinguish setting a value from clearing it back to
/// the unstyled/attribute-absent state.
#[derive(Clone, Debug, PartialEq)]
pub enum Effect<K> {
    /// Create a control element and append it to the document body.
    CreateControl {
        /// Which control to create.
        control: Control,
        /// ARIA label for the control, when configured.
        label: Option<String>,
    },
    /// Remove a previously created control.
    RemoveControl {
        /// Which control to remove.
        control: Control,
    },
    /// Add a class to a target.
    AddClass {
        /// What to add the class to.
        target: StyleTarget<K>,
        /// Which configured class to add.
        class: ClassRole,
    },
    /// Remove a class from a target.
    RemoveClass {
        /// What to remove the class from.
        target: StyleTarget<K>,
        /// Which configured class to remove.
        class: ClassRole,
    },
    /// Set or clear an element's inline scale style.
    SetScale {
        /// The element to style.
        element: K,
        /// The scale factor, or `None` to clear the inline style.
        scale: Option<f64>,
    },
    /// Set or clear an element's inline translate style.
    SetTranslate {
        /// The element to style.
        element: K,
        /// The pixel offsets, or `None` to clear the inline style.
        offset: Option<Vec2>,
    },
    /// Override or restore an element's transition duration.
    SetTransition {
        /// The element to style.
        element: K,
        /// The override to apply.
        transition: Transition,
    },
    /// Force a style flush so preceding instructions are committed before
    /// the following ones start a transition.
    FlushStyle {
        /// The element whose pending styles to flush.
        element: K,
    },
    /// Set or remove `role="img"` on an element.
    SetImgRole {
        /// The element to update.
        element: K,
        /// `true` sets the role, `false` removes it.
        on: bool,
    },
    /// Set or remove an element's `aria-label`.
    SetAriaLabel {
        /// The element to update.
        element: K,
        /// The label, or `None` to remove the attribute.
        label: Option<String>,
    },
    /// Set or remove an element's `aria-expanded`.
    SetAriaExpanded {
        /// The element to update.
        element: K,
        /// The value, or `None` to remove the attribute.
        expanded: Option<bool>,
    },
    /// Set or remove an element's `tabindex`.
    SetTabIndex {
        /// The element to update.
        element: K,
        /// The index, or `None` to remove the attribute.
        index: Option<i32>,
    },
}

/// Instruction list returned by the widget's transition methods.
///
/// Most transitions emit a handful of instructions, so these are stored
/// inline.
pub type Effects<K> = SmallVec<[Effect<K>; 8]>;
