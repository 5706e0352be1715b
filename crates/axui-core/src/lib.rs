#![forbid(unsafe_code)]

//! Input vocabulary and deterministic timers for axui.
//!
//! # Role in axui
//! `axui-core` is the shared vocabulary for user input and deferred work.
//! Widget and theme crates consume these types so their state machines stay
//! headless: events come in, attribute changes come out, and anything
//! time-based goes through an explicit, tickable [`Scheduler`] instead of an
//! ambient timer.
//!
//! # This crate provides
//! - [`Event`], [`KeyEvent`], [`KeyCode`], [`Modifiers`] for input handling.
//! - [`Scheduler`] for cancelable, instance-keyed deferred tasks.

pub mod event;
pub mod schedule;

pub use event::{Event, KeyCode, KeyEvent, KeyEventKind, Modifiers};
pub use schedule::{Scheduler, TaskKey, TimerId};
