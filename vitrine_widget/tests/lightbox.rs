// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `vitrine_widget` crate.
//!
//! These exercise the lightbox machine the way a host drives it: event
//! methods called in dispatch order with a monotonic clock, deferred work
//! run through `advance`, and the returned instruction lists inspected
//! instead of any page state.

use kurbo::{Point, Rect, Size};
use vitrine_widget::{
    ClassRole, Control, Effect, Flags, Key, Lightbox, Options, Outcome, Page, PointerButton,
    StyleTarget, Target, Transition,
};

/// Three images in one gallery container.
struct GalleryPage;

impl Page<&'static str, &'static str> for GalleryPage {
    fn natural_rect(&self, element: &'static str) -> Rect {
        match element {
            "alpha" => Rect::new(0.0, 0.0, 2000.0, 1000.0),
            "beta" => Rect::new(120.0, 40.0, 920.0, 1340.0),
            _ => Rect::new(40.0, 40.0, 690.0, 490.0),
        }
    }

    fn gallery_of(&self, _element: &'static str) -> Option<&'static str> {
        Some("strip")
    }

    fn gallery_images(&self, _container: &'static str) -> Vec<&'static str> {
        vec!["alpha", "beta", "gamma"]
    }
}

fn gallery_lightbox() -> Lightbox<&'static str, &'static str> {
    Lightbox::new(
        Size::new(1000.0, 800.0),
        Options {
            gallery: true,
            ..Options::default()
        },
    )
}

#[test]
fn full_session_walkthrough() {
    let page = GalleryPage;
    let mut lightbox = gallery_lightbox();
    let mut now = 0.0;

    let decoration = lightbox.attach(&["alpha", "beta", "gamma"]);
    assert_eq!(decoration.len(), 15);

    // Open the first image: fit scale is the minimum axis ratio.
    let fx = lightbox.on_click(now, Target::Zoomable("alpha"), PointerButton::Primary, &page);
    assert!(lightbox.is_open());
    assert_eq!(lightbox.current().scale, 0.5);
    assert!(fx.contains(&Effect::AddClass {
        target: StyleTarget::Element("alpha"),
        class: ClassRole::Zoom
    }));

    // Zoom in around the tracked cursor.
    lightbox.on_pointer_move(Point::new(500.0, 400.0));
    let (outcome, _) = lightbox.on_wheel(800.0);
    assert_eq!(outcome, Outcome::Consumed);
    assert!(lightbox.flags().contains(Flags::WHEEL));
    assert!(lightbox.current().scale > lightbox.fit().scale);

    // Drag to pan; the follow-up click must not close the image.
    now = 1.0;
    assert_eq!(
        lightbox.on_pointer_down(Point::new(500.0, 400.0), PointerButton::Primary, Some("alpha")),
        Outcome::Consumed
    );
    lightbox.on_pointer_move(Point::new(460.0, 390.0));
    assert!(lightbox.flags().contains(Flags::DRAG));
    lightbox.on_pointer_up(now);
    let fx = lightbox.on_click(now, Target::Zoomable("alpha"), PointerButton::Primary, &page);
    assert!(fx.is_empty());
    assert!(lightbox.is_open());

    // The drag settles shortly after; the host wakes up at the deadline.
    let deadline = lightbox.next_deadline().unwrap();
    assert!(deadline > now);
    lightbox.advance(deadline);
    assert!(!lightbox.flags().contains(Flags::DRAG));

    // Step to the next image; the previous one is queued for cleanup.
    now = 2.0;
    let fx = lightbox.on_click(now, Target::Next, PointerButton::Primary, &page);
    assert_eq!(lightbox.image(), Some("beta"));
    assert!(fx.contains(&Effect::FlushStyle { element: "beta" }));
    let cleanup = lightbox.advance(now + 0.25);
    assert!(cleanup.contains(&Effect::RemoveClass {
        target: StyleTarget::Element("alpha"),
        class: ClassRole::Zoom
    }));

    // Escape closes; everything resets and the zoom class is removed after
    // the transition.
    now = 3.0;
    lightbox.on_key(now, Key::Escape, None, &page);
    assert_eq!(lightbox.flags(), Flags::empty());
    assert_eq!(lightbox.image(), None);
    let cleanup = lightbox.advance(now + 0.25);
    assert_eq!(
        cleanup.as_slice(),
        &[Effect::RemoveClass {
            target: StyleTarget::Element("beta"),
            class: ClassRole::Zoom
        }]
    );
    assert_eq!(lightbox.next_deadline(), None);
}

#[test]
fn wheel_zoom_keeps_the_cursor_point_fixed() {
    let page = GalleryPage;
    let mut lightbox = gallery_lightbox();
    lightbox.on_click(0.0, Target::Zoomable("alpha"), PointerButton::Primary, &page);

    // Zoom in twice around an off-center cursor, far from any clamp.
    let cursor = Point::new(520.0, 410.0);
    lightbox.on_pointer_move(cursor);
    lightbox.on_wheel(900.0);
    let mid = lightbox.current();
    lightbox.on_wheel(60.0);
    let next = lightbox.current();
    let fit = lightbox.fit();

    let ax = cursor.x - 500.0;
    let ay = cursor.y - 400.0;
    let before_x = (ax - (mid.x - fit.x)) / mid.scale;
    let before_y = (ay - (mid.y - fit.y)) / mid.scale;
    let after_x = (ax - (next.x - fit.x)) / next.scale;
    let after_y = (ay - (next.y - fit.y)) / next.scale;
    assert!((before_x - after_x).abs() < 1e-9);
    assert!((before_y - after_y).abs() < 1e-9);
}

#[test]
fn gallery_navigation_stops_at_both_ends() {
    let page = GalleryPage;
    let mut lightbox = gallery_lightbox();
    lightbox.on_click(0.0, Target::Zoomable("alpha"), PointerButton::Primary, &page);

    // Prev at the first image does nothing.
    let fx = lightbox.on_click(0.1, Target::Prev, PointerButton::Primary, &page);
    assert!(fx.is_empty());
    assert_eq!(lightbox.image(), Some("alpha"));

    // Walk to the end, then Next does nothing.
    lightbox.on_click(0.2, Target::Next, PointerButton::Primary, &page);
    lightbox.on_click(0.3, Target::Next, PointerButton::Primary, &page);
    assert_eq!(lightbox.image(), Some("gamma"));
    let fx = lightbox.on_click(0.4, Target::Next, PointerButton::Primary, &page);
    assert!(fx.is_empty());
    assert_eq!(lightbox.image(), Some("gamma"));
}

#[test]
fn navigation_refits_each_incoming_image() {
    let page = GalleryPage;
    let mut lightbox = gallery_lightbox();
    lightbox.on_click(0.0, Target::Zoomable("alpha"), PointerButton::Primary, &page);
    assert_eq!(lightbox.current().scale, 0.5);

    lightbox.on_click(0.1, Target::Next, PointerButton::Primary, &page);
    // beta is 800x1300 in a 1000x800 viewport: the height ratio wins.
    let expected = 800.0 / 1300.0;
    assert!((lightbox.current().scale - expected).abs() < 1e-12);

    // The incoming image starts with an instant transition and ends on its
    // fit offsets.
    let fx = lightbox.on_click(0.2, Target::Next, PointerButton::Primary, &page);
    assert!(fx.contains(&Effect::SetTransition {
        element: "gamma",
        transition: Transition::Instant
    }));
    assert!(fx.contains(&Effect::SetTranslate {
        element: "gamma",
        offset: Some(lightbox.current().translation())
    }));
}

#[test]
fn overlay_and_close_control_both_close() {
    let page = GalleryPage;
    for target in [Target::Overlay, Target::Close] {
        let mut lightbox = gallery_lightbox();
        lightbox.on_click(0.0, Target::Zoomable("beta"), PointerButton::Primary, &page);
        assert!(lightbox.is_open());

        let fx = lightbox.on_click(1.0, target, PointerButton::Primary, &page);
        assert!(!lightbox.is_open());
        assert!(fx.contains(&Effect::RemoveClass {
            target: StyleTarget::Control(Control::Overlay),
            class: ClassRole::OverlayShow
        }));
    }
}

#[test]
fn closing_while_closed_is_a_no_op() {
    let page = GalleryPage;
    let mut lightbox = gallery_lightbox();
    assert!(lightbox.close(0.0).is_empty());
    assert!(lightbox.on_click(0.0, Target::Overlay, PointerButton::Primary, &page).is_empty());
    assert!(lightbox.on_key(0.0, Key::Escape, None, &page).is_empty());
}

#[test]
fn wheel_is_inert_between_sessions() {
    let page = GalleryPage;
    let mut lightbox = gallery_lightbox();
    lightbox.on_click(0.0, Target::Zoomable("alpha"), PointerButton::Primary, &page);
    lightbox.on_key(1.0, Key::Escape, None, &page);

    let (outcome, fx) = lightbox.on_wheel(240.0);
    assert_eq!(outcome, Outcome::Ignored);
    assert!(fx.is_empty());
}

#[test]
fn reopening_starts_from_a_fresh_fit() {
    let page = GalleryPage;
    let mut lightbox = gallery_lightbox();
    lightbox.on_click(0.0, Target::Zoomable("alpha"), PointerButton::Primary, &page);
    lightbox.on_pointer_move(Point::new(300.0, 200.0));
    lightbox.on_wheel(1200.0);
    lightbox.on_key(1.0, Key::Escape, None, &page);

    lightbox.on_click(2.0, Target::Zoomable("alpha"), PointerButton::Primary, &page);
    assert_eq!(lightbox.current(), lightbox.fit());
    assert!(!lightbox.flags().contains(Flags::WHEEL));
}
