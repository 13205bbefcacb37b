// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The lightbox interaction state machine.

use alloc::vec::Vec;
use core::hash::Hash;

use kurbo::{Point, Rect, Size, Vec2};

use vitrine_timing::{TaskHandle, TaskQueue};
use vitrine_view::{Axis, Transform, clamp_offset, fit_transform, hide_distance, zoom_about};

use crate::config::Options;
use crate::drag::{DRAG_SETTLE_DELAY, DragGesture};
use crate::effect::{ClassRole, Control, Effect, Effects, StyleTarget, Transition};
use crate::events::{Direction, Key, Outcome, PointerButton, Target};
use crate::gallery::{ControlVisibility, GalleryCache, control_visibility, neighbor};

/// `aria-label` applied to every attached element.
const ELEMENT_LABEL: &str = "Zoom Image";

bitflags::bitflags! {
    /// Interaction mode flags.
    ///
    /// All flags are cleared on close. [`Flags::ZOOMED`] is set iff an image
    /// key is recorded.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct Flags: u8 {
        /// An image is open.
        const ZOOMED = 0b0000_0001;
        /// The open image is wheel-zoomed beyond its fit scale.
        const WHEEL = 0b0000_0010;
        /// The open image belongs to a gallery.
        const GALLERY = 0b0000_0100;
        /// The pointer moved past the drag threshold since pointer-down.
        const DRAG = 0b0000_1000;
    }
}

impl Default for Flags {
    fn default() -> Self {
        Self::empty()
    }
}

/// Read-only view of the host page.
///
/// The widget never queries element trees itself; hosts implement this trait
/// to answer the two questions the machine has: how big is an element's
/// natural box, and which gallery siblings does it have. `gallery_images` is
/// called at most once per container (see [`GalleryCache`]).
pub trait Page<K, G> {
    /// Natural (untransformed) bounding rect of a zoomable element, in
    /// viewport coordinates.
    fn natural_rect(&self, element: K) -> Rect;

    /// The gallery container that owns `element`, if any.
    fn gallery_of(&self, element: K) -> Option<G>;

    /// The zoomable elements of `container`, in document order.
    fn gallery_images(&self, container: G) -> Vec<K>;
}

/// Deferred work owned by the widget.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Task<K> {
    /// Clear the drag mark shortly after pointer-up.
    SettleDrag,
    /// Remove the zoom class once the close transition has run.
    RemoveZoomClass { element: K },
    /// Reset outgoing gallery images once their slide has run.
    CleanupHidden,
}

/// The lightbox widget: an explicit state machine over pointer, keyboard,
/// and wheel input.
///
/// Each `on_*` method is the transition function for one event type: it
/// takes the event payload (pre-resolved by the host, see
/// [`Target`]), mutates the machine, and returns the side-effect
/// instructions to apply. [`Lightbox::advance`] drives the two deferred-work
/// roles (drag settling and post-transition cleanup) from a caller-supplied
/// clock.
///
/// Instances are plain values: construct as many as needed, and call
/// [`Lightbox::detach`] to tear one down and emit the instructions that
/// undo its decoration.
///
/// ## Minimal example
///
/// ```rust
/// use kurbo::{Rect, Size};
/// use vitrine_widget::{Lightbox, Options, Page, PointerButton, Target};
///
/// struct OneImage;
/// impl Page<u32, u8> for OneImage {
///     fn natural_rect(&self, _el: u32) -> Rect {
///         Rect::new(0.0, 0.0, 2000.0, 1000.0)
///     }
///     fn gallery_of(&self, _el: u32) -> Option<u8> {
///         None
///     }
///     fn gallery_images(&self, _g: u8) -> Vec<u32> {
///         Vec::new()
///     }
/// }
///
/// let mut lightbox = Lightbox::new(Size::new(1000.0, 800.0), Options::default());
/// let effects = lightbox.on_click(0.0, Target::Zoomable(1), PointerButton::Primary, &OneImage);
///
/// assert!(lightbox.is_open());
/// assert_eq!(lightbox.current().scale, 0.5);
/// assert!(!effects.is_empty());
/// ```
#[derive(Debug)]
pub struct Lightbox<K, G> {
    options: Options,
    viewport: Size,
    flags: Flags,
    image: Option<K>,
    rect: Rect,
    current: Transform,
    fit: Transform,
    cursor: Point,
    pointer_down: bool,
    drag: Option<DragGesture>,
    cache: GalleryCache<G, K>,
    images: Vec<K>,
    hidden: Vec<K>,
    tasks: TaskQueue<Task<K>>,
    close_task: Option<TaskHandle>,
    settle_task: Option<TaskHandle>,
}

impl<K, G> Lightbox<K, G>
where
    K: Copy + PartialEq,
    G: Copy + Eq + Hash,
{
    /// Creates a closed widget for the given viewport size.
    #[must_use]
    pub fn new(viewport: Size, options: Options) -> Self {
        Self {
            options,
            viewport,
            flags: Flags::empty(),
            image: None,
            rect: Rect::ZERO,
            current: Transform::IDENTITY,
            fit: Transform::IDENTITY,
            cursor: Point::ZERO,
            pointer_down: false,
            drag: None,
            cache: GalleryCache::new(),
            images: Vec::new(),
            hidden: Vec::new(),
            tasks: TaskQueue::new(),
            close_task: None,
            settle_task: None,
        }
    }

    /// The widget configuration.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// The current viewport size.
    #[must_use]
    pub fn viewport(&self) -> Size {
        self.viewport
    }

    /// The current mode flags.
    #[must_use]
    pub fn flags(&self) -> Flags {
        self.flags
    }

    /// The open image, if any.
    #[must_use]
    pub fn image(&self) -> Option<K> {
        self.image
    }

    /// Returns `true` while an image is open.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.flags.contains(Flags::ZOOMED)
    }

    /// The open image's current transform.
    #[must_use]
    pub fn current(&self) -> Transform {
        self.current
    }

    /// The open image's fit transform.
    #[must_use]
    pub fn fit(&self) -> Transform {
        self.fit
    }

    /// Instructions that create the widget's controls.
    ///
    /// Emit once after construction: the overlay and close control always,
    /// the gallery buttons only when gallery support is enabled.
    #[must_use]
    pub fn create_effects(&self) -> Effects<K> {
        let mut fx = Effects::new();
        fx.push(Effect::CreateControl {
            control: Control::Overlay,
            label: None,
        });
        fx.push(Effect::AddClass {
            target: StyleTarget::Control(Control::Overlay),
            class: ClassRole::Overlay,
        });
        fx.push(Effect::CreateControl {
            control: Control::Close,
            label: Some(self.options.labels.close.clone()),
        });
        fx.push(Effect::AddClass {
            target: StyleTarget::Control(Control::Close),
            class: ClassRole::Close,
        });

        if self.options.gallery {
            fx.push(Effect::CreateControl {
                control: Control::Next,
                label: Some(self.options.labels.next.clone()),
            });
            fx.push(Effect::AddClass {
                target: StyleTarget::Control(Control::Next),
                class: ClassRole::ButtonNext,
            });
            fx.push(Effect::AddClass {
                target: StyleTarget::Control(Control::Next),
                class: ClassRole::Button,
            });
            fx.push(Effect::CreateControl {
                control: Control::Prev,
                label: Some(self.options.labels.prev.clone()),
            });
            fx.push(Effect::AddClass {
                target: StyleTarget::Control(Control::Prev),
                class: ClassRole::ButtonPrev,
            });
            fx.push(Effect::AddClass {
                target: StyleTarget::Control(Control::Prev),
                class: ClassRole::Button,
            });
        }
        fx
    }

    /// Instructions that decorate newly matched elements.
    ///
    /// Marks each element as managed and makes it focusable and readable:
    /// marker class, `tabindex=0`, `role=img`, `aria-label`,
    /// `aria-expanded=false`. Hosts call this again for elements matched
    /// after startup.
    #[must_use]
    pub fn attach(&self, elements: &[K]) -> Effects<K> {
        let mut fx = Effects::new();
        for &element in elements {
            fx.push(Effect::AddClass {
                target: StyleTarget::Element(element),
                class: ClassRole::Marker,
            });
            fx.push(Effect::SetTabIndex {
                element,
                index: Some(0),
            });
            fx.push(Effect::SetImgRole { element, on: true });
            fx.push(Effect::SetAriaLabel {
                element,
                label: Some(ELEMENT_LABEL.into()),
            });
            fx.push(Effect::SetAriaExpanded {
                element,
                expanded: Some(false),
            });
        }
        fx
    }

    /// Tears the widget down.
    ///
    /// Emits the inverse of [`Lightbox::attach`] for the given elements plus
    /// removal of every generated control, and resets all internal state
    /// (including pending tasks and the gallery cache). The instance can be
    /// reused afterwards by re-emitting [`Lightbox::create_effects`] and
    /// [`Lightbox::attach`].
    #[must_use]
    pub fn detach(&mut self, elements: &[K]) -> Effects<K> {
        let mut fx = Effects::new();
        for &element in elements {
            fx.push(Effect::RemoveClass {
                target: StyleTarget::Element(element),
                class: ClassRole::Marker,
            });
            fx.push(Effect::RemoveClass {
                target: StyleTarget::Element(element),
                class: ClassRole::Zoom,
            });
            fx.push(Effect::RemoveClass {
                target: StyleTarget::Element(element),
                class: ClassRole::Wheel,
            });
            fx.push(Effect::SetScale {
                element,
                scale: None,
            });
            fx.push(Effect::SetTranslate {
                element,
                offset: None,
            });
            fx.push(Effect::SetTransition {
                element,
                transition: Transition::Default,
            });
            fx.push(Effect::SetTabIndex {
                element,
                index: None,
            });
            fx.push(Effect::SetImgRole {
                element,
                on: false,
            });
            fx.push(Effect::SetAriaLabel {
                element,
                label: None,
            });
            fx.push(Effect::SetAriaExpanded {
                element,
                expanded: None,
            });
        }

        fx.push(Effect::RemoveClass {
            target: StyleTarget::Body,
            class: ClassRole::Overflow,
        });
        fx.push(Effect::RemoveControl {
            control: Control::Overlay,
        });
        fx.push(Effect::RemoveControl {
            control: Control::Close,
        });
        if self.options.gallery {
            fx.push(Effect::RemoveControl {
                control: Control::Next,
            });
            fx.push(Effect::RemoveControl {
                control: Control::Prev,
            });
        }

        self.flags = Flags::empty();
        self.image = None;
        self.rect = Rect::ZERO;
        self.current = Transform::IDENTITY;
        self.fit = Transform::IDENTITY;
        self.pointer_down = false;
        self.drag = None;
        self.images.clear();
        self.hidden.clear();
        self.cache.clear();
        self.tasks.clear();
        self.close_task = None;
        self.settle_task = None;
        fx
    }

    /// Records a viewport size change.
    ///
    /// The fit transform of an open image is not recomputed until the next
    /// open or navigation; pan clamping picks the new size up immediately.
    pub fn on_resize(&mut self, viewport: Size) {
        self.viewport = viewport;
    }

    /// Handles a click on a pre-resolved target.
    ///
    /// A primary-button click on a zoomable element toggles open/closed,
    /// unless a drag just ended (the drag mark is still set until its settle
    /// task runs). Overlay and close-control clicks close; gallery-control
    /// clicks navigate.
    pub fn on_click(
        &mut self,
        now: f64,
        target: Target<K>,
        button: PointerButton,
        page: &impl Page<K, G>,
    ) -> Effects<K> {
        match target {
            Target::Zoomable(element) => {
                if button != PointerButton::Primary || self.flags.contains(Flags::DRAG) {
                    return Effects::new();
                }
                if self.is_open() {
                    self.close(now)
                } else {
                    self.open(element, page)
                }
            }
            Target::Overlay | Target::Close => self.close(now),
            Target::Next => self.navigate(now, Direction::Next, page),
            Target::Prev => self.navigate(now, Direction::Prev, page),
        }
    }

    /// Handles a key press.
    ///
    /// `focus` names the zoomable element that currently holds keyboard
    /// focus, if any. Escape closes regardless of focus; Enter toggles the
    /// focused element; Tab closes as focus is about to move on.
    pub fn on_key(
        &mut self,
        now: f64,
        key: Key,
        focus: Option<K>,
        page: &impl Page<K, G>,
    ) -> Effects<K> {
        match key {
            Key::Escape => self.close(now),
            Key::Enter => match focus {
                Some(element) if !self.is_open() => self.open(element, page),
                Some(_) => self.close(now),
                None => Effects::new(),
            },
            Key::Tab => {
                if focus.is_some() {
                    self.close(now)
                } else {
                    Effects::new()
                }
            }
        }
    }

    /// Handles a wheel event.
    ///
    /// With no image open the event is ignored. Otherwise it is consumed
    /// (the host should suppress page scrolling) even when the scale clamp
    /// makes it a no-op. Zooming away from the fit scale marks the image as
    /// wheel-zoomed and forces instant transitions so the zoom tracks the
    /// wheel; landing back on the fit scale restores the default transition.
    pub fn on_wheel(&mut self, delta: f64) -> (Outcome, Effects<K>) {
        let Some(element) = self.image else {
            return (Outcome::Ignored, Effects::new());
        };

        let Some(transform) = zoom_about(
            self.current,
            self.fit,
            self.rect,
            self.viewport,
            self.cursor,
            delta,
        ) else {
            return (Outcome::Consumed, Effects::new());
        };

        self.current = transform;
        let has_fit_zoom = (transform.scale - self.fit.scale).abs() < f64::EPSILON;
        self.flags.set(Flags::WHEEL, !has_fit_zoom);

        let mut fx = Effects::new();
        if has_fit_zoom {
            fx.push(Effect::RemoveClass {
                target: StyleTarget::Element(element),
                class: ClassRole::Wheel,
            });
        } else {
            fx.push(Effect::AddClass {
                target: StyleTarget::Element(element),
                class: ClassRole::Wheel,
            });
        }
        fx.push(Effect::SetTransition {
            element,
            transition: if has_fit_zoom {
                Transition::Default
            } else {
                Transition::Instant
            },
        });
        fx.push(Effect::SetScale {
            element,
            scale: Some(transform.scale),
        });
        fx.push(Effect::SetTranslate {
            element,
            offset: Some(transform.translation()),
        });
        (Outcome::Consumed, fx)
    }

    /// Handles a pointer press.
    ///
    /// Starts a drag gesture when the image is wheel-zoomed, the primary
    /// button is down, and the pointer is over a designated element
    /// (`target`). Consumption tells the host to suppress the default
    /// press action (e.g. native image dragging).
    pub fn on_pointer_down(
        &mut self,
        position: Point,
        button: PointerButton,
        target: Option<K>,
    ) -> Outcome {
        if !self.flags.contains(Flags::WHEEL) || button != PointerButton::Primary {
            return Outcome::Ignored;
        }
        if target.is_none() {
            return Outcome::Ignored;
        }

        if let Some(handle) = self.settle_task.take() {
            self.tasks.cancel(handle);
        }
        self.pointer_down = true;
        self.drag = Some(DragGesture::new(position, self.current.translation()));
        Outcome::Consumed
    }

    /// Handles pointer movement.
    ///
    /// While an image is open the cursor position is recorded as the wheel
    /// zoom anchor. While the pointer is held down on a wheel-zoomed image,
    /// movement pans the image within its clamped bounds and marks the
    /// gesture as a drag once it passes the engage threshold.
    pub fn on_pointer_move(&mut self, position: Point) -> Effects<K> {
        let Some(element) = self.image else {
            return Effects::new();
        };
        self.cursor = position;

        let mut fx = Effects::new();
        if self.pointer_down {
            if let Some(gesture) = self.drag {
                if gesture.exceeds_threshold(position) {
                    self.flags.insert(Flags::DRAG);
                }

                let want = gesture.target_offset(position);
                self.current.x = clamp_offset(
                    want.x,
                    Axis::X,
                    self.rect,
                    self.viewport,
                    self.fit,
                    self.current.scale,
                );
                self.current.y = clamp_offset(
                    want.y,
                    Axis::Y,
                    self.rect,
                    self.viewport,
                    self.fit,
                    self.current.scale,
                );
                fx.push(Effect::SetTranslate {
                    element,
                    offset: Some(self.current.translation()),
                });
            }
        }
        fx
    }

    /// Handles a pointer release.
    ///
    /// Ends the held gesture and schedules the settle task that clears the
    /// drag mark shortly after, so the click event that follows the release
    /// still sees whether a drag happened.
    pub fn on_pointer_up(&mut self, now: f64) {
        if !self.pointer_down {
            return;
        }
        self.pointer_down = false;
        self.drag = None;
        if let Some(handle) = self.settle_task.take() {
            self.tasks.cancel(handle);
        }
        self.settle_task = Some(self.tasks.schedule(now + DRAG_SETTLE_DELAY, Task::SettleDrag));
    }

    /// Navigates to the neighboring gallery image.
    ///
    /// No-op without an open gallery image or past either end of the sibling
    /// list. The outgoing image slides off-screen toward `direction` and is
    /// queued for cleanup after the transition duration; the incoming image
    /// is measured, placed off-screen on the opposite side with an instant
    /// transition, then animated into its fit position.
    pub fn navigate(
        &mut self,
        now: f64,
        direction: Direction,
        page: &impl Page<K, G>,
    ) -> Effects<K> {
        let Some(outgoing) = self.image else {
            return Effects::new();
        };
        if !self.flags.contains(Flags::GALLERY) {
            return Effects::new();
        }
        let Some(incoming) = neighbor(&self.images, outgoing, direction) else {
            return Effects::new();
        };

        let mut fx = Effects::new();

        // Slide the outgoing image off-screen and defer its reset until the
        // transition has run.
        let old = self.current;
        let out_distance = hide_distance(self.rect.width(), old.scale, self.viewport.width);
        let out_x = match direction {
            Direction::Next => old.x - out_distance,
            Direction::Prev => old.x + out_distance,
        };
        self.hidden.push(outgoing);
        self.tasks
            .schedule(now + self.options.duration, Task::CleanupHidden);
        fx.push(Effect::SetTransition {
            element: outgoing,
            transition: Transition::Default,
        });
        fx.push(Effect::SetTranslate {
            element: outgoing,
            offset: Some(Vec2::new(out_x, old.y)),
        });

        // TODO: carry aria-expanded across navigation; close() only resets
        // it on the final image.
        self.image = Some(incoming);
        self.rect = page.natural_rect(incoming);
        self.fit = fit_transform(self.rect, self.viewport);
        self.current = self.fit;

        let visibility = control_visibility(&self.images, &incoming);
        self.push_button_visibility(&mut fx, visibility);

        // Park the incoming image off-screen on the opposite side at its new
        // fit scale, commit, then let it transition into place.
        let in_distance =
            hide_distance(self.rect.width(), self.current.scale, self.viewport.width);
        let in_x = match direction {
            Direction::Next => self.current.x + in_distance,
            Direction::Prev => self.current.x - in_distance,
        };
        fx.push(Effect::SetTransition {
            element: incoming,
            transition: Transition::Instant,
        });
        fx.push(Effect::SetTranslate {
            element: incoming,
            offset: Some(Vec2::new(in_x, old.y)),
        });
        fx.push(Effect::SetScale {
            element: incoming,
            scale: Some(self.current.scale),
        });
        fx.push(Effect::AddClass {
            target: StyleTarget::Element(incoming),
            class: ClassRole::Marker,
        });
        fx.push(Effect::AddClass {
            target: StyleTarget::Element(incoming),
            class: ClassRole::Zoom,
        });
        fx.push(Effect::FlushStyle { element: incoming });
        fx.push(Effect::SetTransition {
            element: incoming,
            transition: Transition::Default,
        });
        fx.push(Effect::SetTranslate {
            element: incoming,
            offset: Some(self.current.translation()),
        });
        fx
    }

    /// Closes the open image; no-op when nothing is open.
    ///
    /// Clears styles and classes, hides the overlay and gallery controls,
    /// resets every flag, and schedules removal of the zoom class for after
    /// the closing transition so the un-zoom does not snap.
    pub fn close(&mut self, now: f64) -> Effects<K> {
        let Some(element) = self.image else {
            return Effects::new();
        };

        let mut fx = Effects::new();
        fx.push(Effect::SetTransition {
            element,
            transition: Transition::Default,
        });
        fx.push(Effect::SetScale {
            element,
            scale: None,
        });
        fx.push(Effect::SetTranslate {
            element,
            offset: None,
        });
        fx.push(Effect::RemoveClass {
            target: StyleTarget::Element(element),
            class: ClassRole::Wheel,
        });
        fx.push(Effect::SetAriaExpanded {
            element,
            expanded: Some(false),
        });
        fx.push(Effect::RemoveClass {
            target: StyleTarget::Body,
            class: ClassRole::Overflow,
        });
        fx.push(Effect::RemoveClass {
            target: StyleTarget::Control(Control::Overlay),
            class: ClassRole::OverlayShow,
        });
        if self.options.gallery {
            fx.push(Effect::RemoveClass {
                target: StyleTarget::Control(Control::Next),
                class: ClassRole::ButtonShow,
            });
            fx.push(Effect::RemoveClass {
                target: StyleTarget::Control(Control::Prev),
                class: ClassRole::ButtonShow,
            });
        }

        if let Some(handle) = self.close_task.take() {
            self.tasks.cancel(handle);
        }
        self.close_task = Some(self.tasks.schedule(
            now + self.options.duration,
            Task::RemoveZoomClass { element },
        ));

        self.image = None;
        self.flags = Flags::empty();
        self.pointer_down = false;
        self.drag = None;
        fx
    }

    /// Runs deferred work that has come due.
    ///
    /// `now` is on the same caller-supplied monotonic clock as the `now`
    /// passed to the event handlers. Returns the instructions produced by
    /// the due tasks, in deadline order.
    pub fn advance(&mut self, now: f64) -> Effects<K> {
        let mut fx = Effects::new();
        for task in self.tasks.drain_due(now) {
            match task {
                Task::SettleDrag => {
                    self.flags.remove(Flags::DRAG);
                    self.settle_task = None;
                }
                Task::RemoveZoomClass { element } => {
                    fx.push(Effect::RemoveClass {
                        target: StyleTarget::Element(element),
                        class: ClassRole::Zoom,
                    });
                    self.close_task = None;
                }
                Task::CleanupHidden => {
                    for element in self.hidden.drain(..) {
                        fx.push(Effect::RemoveClass {
                            target: StyleTarget::Element(element),
                            class: ClassRole::Marker,
                        });
                        fx.push(Effect::RemoveClass {
                            target: StyleTarget::Element(element),
                            class: ClassRole::Zoom,
                        });
                        fx.push(Effect::SetTransition {
                            element,
                            transition: Transition::Instant,
                        });
                        fx.push(Effect::SetTranslate {
                            element,
                            offset: None,
                        });
                        fx.push(Effect::SetScale {
                            element,
                            scale: None,
                        });
                        fx.push(Effect::FlushStyle { element });
                        fx.push(Effect::SetTransition {
                            element,
                            transition: Transition::Default,
                        });
                    }
                }
            }
        }
        fx
    }

    /// The earliest pending deferred-work deadline, if any.
    ///
    /// Hosts that arm a timer instead of polling [`Lightbox::advance`] can
    /// use this as the wake-up time.
    #[must_use]
    pub fn next_deadline(&self) -> Option<f64> {
        self.tasks.next_deadline()
    }

    /// Snapshot of the current widget state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> LightboxDebugInfo<K> {
        LightboxDebugInfo {
            flags: self.flags,
            image: self.image,
            current: self.current,
            fit: self.fit,
            rect: self.rect,
            viewport: self.viewport,
            cursor: self.cursor,
            gallery_len: self.images.len(),
            pending_tasks: self.tasks.len(),
        }
    }

    fn open(&mut self, element: K, page: &impl Page<K, G>) -> Effects<K> {
        // A pending cleanup from the previous close must not fire against
        // the new open state.
        if let Some(handle) = self.close_task.take() {
            self.tasks.cancel(handle);
        }

        self.flags.insert(Flags::ZOOMED);
        self.image = Some(element);
        self.rect = page.natural_rect(element);
        self.fit = fit_transform(self.rect, self.viewport);
        self.current = self.fit;

        let mut fx = Effects::new();
        fx.push(Effect::SetScale {
            element,
            scale: Some(self.current.scale),
        });
        fx.push(Effect::SetTranslate {
            element,
            offset: Some(self.current.translation()),
        });
        fx.push(Effect::AddClass {
            target: StyleTarget::Element(element),
            class: ClassRole::Marker,
        });
        fx.push(Effect::AddClass {
            target: StyleTarget::Body,
            class: ClassRole::Overflow,
        });
        fx.push(Effect::AddClass {
            target: StyleTarget::Control(Control::Overlay),
            class: ClassRole::OverlayShow,
        });

        if self.options.gallery {
            if let Some(container) = page.gallery_of(element) {
                let images = self
                    .cache
                    .resolve(container, || page.gallery_images(container))
                    .to_vec();
                self.images = images;
                self.flags.insert(Flags::GALLERY);

                let visibility = control_visibility(&self.images, &element);
                self.push_button_visibility(&mut fx, visibility);
            }
        }

        fx.push(Effect::AddClass {
            target: StyleTarget::Element(element),
            class: ClassRole::Zoom,
        });
        fx.push(Effect::SetAriaExpanded {
            element,
            expanded: Some(true),
        });
        fx
    }

    fn push_button_visibility(&self, fx: &mut Effects<K>, visibility: ControlVisibility) {
        let toggles = [
            (Control::Next, visibility.next),
            (Control::Prev, visibility.prev),
        ];
        for (control, shown) in toggles {
            fx.push(if shown {
                Effect::AddClass {
                    target: StyleTarget::Control(control),
                    class: ClassRole::ButtonShow,
                }
            } else {
                Effect::RemoveClass {
                    target: StyleTarget::Control(control),
                    class: ClassRole::ButtonShow,
                }
            });
        }
    }
}

/// Debug snapshot of a [`Lightbox`] state.
#[derive(Clone, Copy, Debug)]
pub struct LightboxDebugInfo<K> {
    /// Current mode flags.
    pub flags: Flags,
    /// The open image, if any.
    pub image: Option<K>,
    /// Current transform of the open image.
    pub current: Transform,
    /// Fit transform of the open image.
    pub fit: Transform,
    /// Natural rect captured at open/navigate time.
    pub rect: Rect,
    /// Current viewport size.
    pub viewport: Size,
    /// Last recorded cursor position (wheel zoom anchor).
    pub cursor: Point,
    /// Length of the active gallery sibling list.
    pub gallery_len: usize,
    /// Number of pending deferred tasks.
    pub pending_tasks: usize,
}
