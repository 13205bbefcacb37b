// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Vitrine Timing: host-agnostic cancellable task scheduling.
//!
//! UI widgets often defer small pieces of work: finish a gesture a few
//! milliseconds after the pointer is released, or clean up a style once a
//! visual transition has run its course. This crate models that as an
//! explicit [`TaskQueue`]: callers schedule a payload against a deadline,
//! receive a [`TaskHandle`], and may cancel the task any time before it is
//! drained. A pending task that a newer state transition supersedes is
//! cancelled by handle instead of being left to fire against stale state.
//!
//! The queue never reads a clock. Deadlines and the `now` passed to
//! [`TaskQueue::drain_due`] are caller-supplied numbers from any monotonic
//! origin (seconds since startup, a frame clock, a test counter), which keeps
//! every interaction deterministic and host-independent.
//!
//! ## Minimal example
//!
//! ```rust
//! use vitrine_timing::TaskQueue;
//!
//! let mut queue = TaskQueue::new();
//!
//! let cleanup = queue.schedule(1.25, "cleanup");
//! let settle = queue.schedule(1.01, "settle");
//!
//! // Nothing is due yet.
//! assert!(queue.drain_due(1.0).is_empty());
//!
//! // The cleanup is superseded before it fires.
//! assert!(queue.cancel(cleanup));
//!
//! // Draining past both deadlines yields only the surviving task.
//! assert_eq!(queue.drain_due(2.0), vec!["settle"]);
//! assert!(!queue.is_scheduled(settle));
//! ```
//!
//! ## Design notes
//!
//! - Handles are never reused; a handle for a fired or cancelled task is
//!   simply stale and [`TaskQueue::cancel`] on it returns `false`.
//! - [`TaskQueue::drain_due`] returns payloads in deadline order, with ties
//!   broken by scheduling order.
//! - Deadlines are expected to be finite; a NaN deadline never compares as
//!   due and is effectively unreachable except through [`TaskQueue::cancel`]
//!   or [`TaskQueue::clear`].
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod queue;

pub use queue::{TaskHandle, TaskQueue};
