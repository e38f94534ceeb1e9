//! SmartBox Hardware Abstraction Layer
//!
//! This crate defines the timer traits that chip-specific HALs implement
//! so the scheduler and the ranging engine in `smartbox-core` stay
//! board-agnostic. Pins and delays come from `embedded-hal` 1.0 directly.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Application (smartbox-firmware)        │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  smartbox-core (scheduler, ranging)     │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  smartbox-hal (this crate - traits)     │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//!             ┌───────────────┐
//!             │ smartbox-hal- │
//!             │    rp2040     │
//!             └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`timer::OverflowTimer`] - Periodic tick source with explicit re-arm
//! - [`timer::FreeRunningCounter`] - Wide counter for pulse timing

#![no_std]
#![deny(unsafe_code)]

pub mod timer;

// Re-export key traits at crate root for convenience
pub use timer::{FreeRunningCounter, OverflowTimer, RearmCount};
