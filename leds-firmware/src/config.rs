// Projekt-Konfiguration: Konstanten und Hardware-Zuordnungen

// ============================================================================
// LED Konfiguration
// ============================================================================

/// GPIO-Pins der 16 LEDs, Index = Bit im Port (LED 1 → GPIO0 ... LED 16 → GPIO23)
///
/// Ausgelassen: GPIO8/9/15 (Strapping), GPIO12/13 (USB-JTAG),
/// GPIO14 (nicht herausgeführt), GPIO16/17 (UART0), GPIO24-30 (SPI-Flash)
/// Die Zuordnung in `main.rs` muss zu dieser Liste passen.
pub const LED_GPIO_PINS: [u8; 16] = [0, 1, 2, 3, 4, 5, 6, 7, 10, 11, 18, 19, 20, 21, 22, 23];

/// Pause zwischen zwei Schritten des Lauflichts in Millisekunden
pub const PATTERN_STEP_MILLIS: u64 = 150;

/// Wie oft alle LEDs am Ende einer Runde gemeinsam blinken
pub const PATTERN_FLASH_COUNT: usize = 3;

/// Pause zwischen zwei Runden in Millisekunden
pub const PATTERN_PAUSE_MILLIS: u64 = 1000;

// ============================================================================
// Channel Konfiguration
// ============================================================================

/// Kapazität des Command-Channels (Pattern Task → LED Task)
pub const COMMAND_CHANNEL_CAPACITY: usize = 4;
