#![forbid(unsafe_code)]

//! Core: animation, geometry, input events, and drag recognition.
//!
//! # Role in slideup
//! `slideup-core` is the motion and input layer. It owns the tick-driven
//! animator that sheets use for height and pan transitions, and the
//! normalized input events the widget layer consumes.
//!
//! # Primary responsibilities
//! - **AnimatedValue**: a scalar driven by tween or spring runs, reporting a
//!   single completion for the most recently started run.
//! - **Event**: canonical pointer and platform events (drag samples, mask
//!   presses, back requests).
//! - **DragRecognizer**: turns raw pointer down/move/up into vertical drag
//!   samples measured from the gesture origin.
//!
//! # How it fits in the system
//! `slideup-widgets` consumes `slideup-core::Event` values and drives its
//! sheets with `AnimatedValue`. Nothing here renders; a host presentation
//! layer reads the published values every frame.

pub mod animation;
pub mod event;
pub mod geometry;
pub mod gesture;
