// Library-Root: Wiederverwendbare Logik und Module
// Keine Standard-Bibliothek (Embedded System)
#![no_std]

// Module
pub mod config;
pub mod hal;
pub mod tasks;

// Re-exports von leds-core
pub use leds_core::{
    LedCommand, LedController, LedError, LedId, LedPort, LedState, chaser_step, led_state,
};

// Embassy Channel-Typen
use embassy_sync::blocking_mutex::raw::NoopRawMutex;
use embassy_sync::channel::{Channel, Receiver, Sender};

use crate::config::COMMAND_CHANNEL_CAPACITY;

// ============================================================================
// Type-Aliase für Channel-Typen
// ============================================================================
//
// Diese Type-Aliase vereinfachen die Lesbarkeit der Funktionssignaturen.
// Statt:  Sender<'static, NoopRawMutex, LedCommand, 4>
// Nutze:  LedCommandSender

/// Channel für LED-Kommandos (Pattern Task → LED Task)
///
/// Nur der LED Task besitzt den Controller, alle anderen Tasks schicken
/// Kommandos. Damit sind die Port-Zugriffe serialisiert.
pub type LedCommandChannel = Channel<NoopRawMutex, LedCommand, COMMAND_CHANNEL_CAPACITY>;

/// Sender für LED-Kommandos
/// Erzeugt aus LedCommandChannel
pub type LedCommandSender = Sender<'static, NoopRawMutex, LedCommand, COMMAND_CHANNEL_CAPACITY>;

/// Receiver für LED-Kommandos (LED Task empfängt)
/// Empfängt Commands von LedCommandSender
pub type LedCommandReceiver =
    Receiver<'static, NoopRawMutex, LedCommand, COMMAND_CHANNEL_CAPACITY>;
