//! Core Types für die LED-Steuerung
//!
//! Datenstrukturen ohne Hardware-Dependencies

use crate::traits::LedError;

/// Anzahl der LEDs am Port (ein Bit pro LED)
pub const LED_COUNT: u8 = 16;

/// Port-Wert: alle LEDs aus
pub const ALL_LEDS_OFF: u16 = 0x0000;

/// Port-Wert: alle LEDs an
pub const ALL_LEDS_ON: u16 = 0xFFFF;

/// Gültige LED-Nummer (1..=16)
///
/// LED `n` liegt auf Bit `n - 1` des Ports. Eine `LedId` kann nur über
/// [`LedId::new`] bzw. `TryFrom` entstehen und ist damit immer im gültigen
/// Bereich.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "u8", into = "u8")
)]
pub struct LedId(u8);

impl LedId {
    /// Erste LED (Bit 0)
    pub const FIRST: LedId = LedId(1);

    /// Letzte LED (Bit 15)
    pub const LAST: LedId = LedId(LED_COUNT);

    /// Prüft die LED-Nummer und erstellt eine `LedId`
    ///
    /// # Fehlerbehandlung
    /// Gibt `LedError::InvalidLedId` zurück wenn `number` nicht in 1..=16 liegt
    pub const fn new(number: u8) -> Result<Self, LedError> {
        if number >= 1 && number <= LED_COUNT {
            Ok(Self(number))
        } else {
            Err(LedError::InvalidLedId(number as u32))
        }
    }

    /// LED-Nummer (1-basiert)
    pub const fn number(self) -> u8 {
        self.0
    }

    /// Bit-Position im Port (0-basiert)
    pub const fn bit(self) -> u8 {
        self.0 - 1
    }

    /// Bitmaske `1 << (n - 1)`
    pub const fn mask(self) -> u16 {
        1 << self.bit()
    }

    /// Alle LEDs von 1 bis 16 in aufsteigender Reihenfolge
    pub fn all() -> impl Iterator<Item = LedId> {
        (1..=LED_COUNT).map(LedId)
    }
}

impl TryFrom<u8> for LedId {
    type Error = LedError;

    fn try_from(number: u8) -> Result<Self, Self::Error> {
        Self::new(number)
    }
}

impl TryFrom<u32> for LedId {
    type Error = LedError;

    fn try_from(number: u32) -> Result<Self, Self::Error> {
        u8::try_from(number)
            .map_err(|_| LedError::InvalidLedId(number))
            .and_then(Self::new)
    }
}

impl From<LedId> for u8 {
    fn from(led: LedId) -> Self {
        led.number()
    }
}

/// Zustand einer einzelnen LED
///
/// Wird immer aus dem Port-Bit gelesen, nie separat gespeichert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum LedState {
    Off,
    On,
}

impl LedState {
    pub const fn is_on(self) -> bool {
        matches!(self, LedState::On)
    }

    /// Zustand als Bit-Wert (1 = an, 0 = aus)
    pub const fn as_bit(self) -> u8 {
        match self {
            LedState::Off => 0,
            LedState::On => 1,
        }
    }
}

impl From<bool> for LedState {
    fn from(on: bool) -> Self {
        if on { LedState::On } else { LedState::Off }
    }
}

/// LED Command für die Steuerung über einen Channel
///
/// Eine Variante pro schreibender Operation des Controllers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum LedCommand {
    /// Einzelne LED einschalten
    TurnOn(LedId),
    /// Einzelne LED ausschalten
    TurnOff(LedId),
    /// Alle LEDs einschalten
    TurnOnAll,
    /// Alle LEDs ausschalten
    TurnOffAll,
}

impl TryFrom<&str> for LedCommand {
    type Error = LedError;

    /// Parst `"on <n>"`, `"off <n>"`, `"all on"` und `"all off"`
    fn try_from(text: &str) -> Result<Self, Self::Error> {
        let mut words = text.split_whitespace();
        let command = match (words.next(), words.next()) {
            (Some("all"), Some("on")) => Self::TurnOnAll,
            (Some("all"), Some("off")) => Self::TurnOffAll,
            (Some("on"), Some(number)) => Self::TurnOn(parse_led(number)?),
            (Some("off"), Some(number)) => Self::TurnOff(parse_led(number)?),
            _ => return Err(LedError::InvalidCommand),
        };

        // Überzählige Wörter sind kein gültiges Kommando
        if words.next().is_some() {
            return Err(LedError::InvalidCommand);
        }
        Ok(command)
    }
}

fn parse_led(number: &str) -> Result<LedId, LedError> {
    let number: u32 = number.parse().map_err(|_| LedError::InvalidCommand)?;
    LedId::try_from(number)
}

// ============================================================================
// defmt::Format Implementations (optional feature)
// ============================================================================

#[cfg(feature = "defmt")]
impl defmt::Format for LedCommand {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            LedCommand::TurnOn(led) => defmt::write!(fmt, "TurnOn {{ led: {} }}", led.number()),
            LedCommand::TurnOff(led) => defmt::write!(fmt, "TurnOff {{ led: {} }}", led.number()),
            LedCommand::TurnOnAll => defmt::write!(fmt, "TurnOnAll"),
            LedCommand::TurnOffAll => defmt::write!(fmt, "TurnOffAll"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_led_id_bounds() {
        assert_eq!(LedId::new(0), Err(LedError::InvalidLedId(0)));
        assert_eq!(LedId::new(17), Err(LedError::InvalidLedId(17)));
        assert_eq!(LedId::new(1), Ok(LedId::FIRST));
        assert_eq!(LedId::new(16), Ok(LedId::LAST));
    }

    #[test]
    fn test_led_id_mask() {
        let led = LedId::new(5).unwrap();
        assert_eq!(led.bit(), 4);
        assert_eq!(led.mask(), 0x0010);
        assert_eq!(LedId::LAST.mask(), 0x8000);
    }

    #[test]
    fn test_led_id_try_from_u32() {
        assert_eq!(LedId::try_from(12u32).map(LedId::number), Ok(12));
        assert_eq!(LedId::try_from(256u32), Err(LedError::InvalidLedId(256)));
        assert_eq!(
            LedId::try_from(u32::MAX),
            Err(LedError::InvalidLedId(u32::MAX))
        );
    }

    #[test]
    fn test_led_id_all_covers_every_bit() {
        let mask = LedId::all().fold(0u16, |acc, led| acc | led.mask());
        assert_eq!(mask, ALL_LEDS_ON);
        assert_eq!(LedId::all().count(), LED_COUNT as usize);
    }

    #[test]
    fn test_led_state_bits() {
        assert_eq!(LedState::from(true), LedState::On);
        assert_eq!(LedState::On.as_bit(), 1);
        assert_eq!(LedState::Off.as_bit(), 0);
        assert!(!LedState::Off.is_on());
    }

    #[test]
    fn test_led_command_parse() {
        let five = LedId::new(5).unwrap();
        assert_eq!(LedCommand::try_from("on 5"), Ok(LedCommand::TurnOn(five)));
        assert_eq!(LedCommand::try_from("off  5"), Ok(LedCommand::TurnOff(five)));
        assert_eq!(LedCommand::try_from("all on"), Ok(LedCommand::TurnOnAll));
        assert_eq!(LedCommand::try_from("all off"), Ok(LedCommand::TurnOffAll));
    }

    #[test]
    fn test_led_command_parse_invalid() {
        assert_eq!(LedCommand::try_from("on 0"), Err(LedError::InvalidLedId(0)));
        assert_eq!(LedCommand::try_from("on x"), Err(LedError::InvalidCommand));
        assert_eq!(LedCommand::try_from("blink 3"), Err(LedError::InvalidCommand));
        assert_eq!(LedCommand::try_from("all on now"), Err(LedError::InvalidCommand));
        assert_eq!(LedCommand::try_from(""), Err(LedError::InvalidCommand));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_rejects_invalid_led_id() {
        let led: LedId = serde_json::from_str("7").unwrap();
        assert_eq!(led.number(), 7);
        assert!(serde_json::from_str::<LedId>("17").is_err());

        let json = serde_json::to_string(&LedCommand::TurnOn(led)).unwrap();
        assert_eq!(json, r#"{"turn_on":7}"#);
        let json = serde_json::to_string(&LedCommand::TurnOffAll).unwrap();
        assert_eq!(json, r#""turn_off_all""#);

        let command: LedCommand = serde_json::from_str(r#"{"turn_off":16}"#).unwrap();
        assert_eq!(command, LedCommand::TurnOff(LedId::LAST));
        assert!(serde_json::from_str::<LedCommand>(r#"{"turn_on":0}"#).is_err());
    }
}
