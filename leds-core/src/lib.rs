//! LED Core - Platform-agnostic Logic and Traits
//!
//! Treiber für 16 LEDs an einem 16-Bit Ausgabeport (Bit 0 = LED 1 ... Bit 15 = LED 16).
//! Diese Crate enthält KEINE Hardware-Dependencies.
//! Sie definiert nur Traits, Typen und Pure Functions.

#![no_std]

pub mod logic;
pub mod port;
pub mod traits;
pub mod types;

// Re-exports für einfachen Zugriff
pub use logic::{LedController, chaser_step, led_off, led_on, led_state};
pub use port::MmioPort;
pub use traits::{LedError, LedPort};
pub use types::{ALL_LEDS_OFF, ALL_LEDS_ON, LED_COUNT, LedCommand, LedId, LedState};
