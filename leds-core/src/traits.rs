//! Hardware Abstraction Traits
//!
//! Diese Traits definieren die Schnittstelle zum 16-Bit LED-Port
//! ohne konkrete Implementierung.

use core::fmt;

/// Fehler-Typ für LED-Operationen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LedError {
    /// LED-Nummer liegt nicht in 1..=16, der Port wurde nicht verändert
    InvalidLedId(u32),
    /// Text-Kommando konnte nicht geparst werden
    InvalidCommand,
}

impl fmt::Display for LedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LedError::InvalidLedId(number) => {
                write!(f, "invalid LED number {number} (must be 1-16)")
            }
            LedError::InvalidCommand => f.write_str("invalid LED command"),
        }
    }
}

impl core::error::Error for LedError {}

/// Trait für den Zugriff auf den LED-Port
///
/// Abstrahiert ein 16-Bit Ausgaberegister: Bit `i` steuert LED `i + 1`.
/// Der Controller macht darauf nur Read-Modify-Write Zugriffe und
/// synchronisiert nicht, der Aufrufer muss parallele Zugriffe serialisieren.
///
/// # Implementierungen
/// - **Speicher:** `u16` bzw. `&mut u16` (Variable des Aufrufers)
/// - **Register:** [`MmioPort`](crate::port::MmioPort) (volatile Zugriffe)
/// - **Firmware:** GpioPort (16 GPIO-Ausgänge)
/// - **Testing:** MockPort (zählt Zugriffe)
pub trait LedPort {
    /// Liest den aktuellen Port-Wert
    fn read(&self) -> u16;

    /// Schreibt den kompletten Port-Wert
    fn write(&mut self, value: u16);
}
