//! Pure Business Logic und LED-Controller
//!
//! Die Bit-Operationen sind freie Funktionen ohne Hardware-Dependencies
//! (testbar!), der Controller führt sie als Read-Modify-Write auf dem Port aus.

use crate::traits::{LedError, LedPort};
use crate::types::{ALL_LEDS_OFF, ALL_LEDS_ON, LedCommand, LedId, LedState};

/// Setzt das Bit der LED, alle anderen Bits bleiben unverändert
///
/// # Beispiele
///
/// ```
/// # use leds_core::{LedId, led_on};
/// let led = LedId::new(5).unwrap();
/// assert_eq!(led_on(0x0000, led), 0x0010);
/// assert_eq!(led_on(0x0010, led), 0x0010); // idempotent
/// ```
pub fn led_on(value: u16, led: LedId) -> u16 {
    value | led.mask()
}

/// Löscht das Bit der LED, alle anderen Bits bleiben unverändert
pub fn led_off(value: u16, led: LedId) -> u16 {
    value & !led.mask()
}

pub fn led_state(value: u16, led: LedId) -> LedState {
    LedState::from(value & led.mask() != 0)
}

/// Kommandos für einen Schritt des Lauflichts: aktuelle LED an, vorherige aus
///
/// LED 1 hat keinen Vorgänger, der zweite Eintrag ist dann `None`.
pub fn chaser_step(led: LedId) -> [Option<LedCommand>; 2] {
    let previous = LedId::new(led.number() - 1).ok();
    [
        Some(LedCommand::TurnOn(led)),
        previous.map(LedCommand::TurnOff),
    ]
}

/// Controller für 16 LEDs an einem 16-Bit Port
///
/// Es gibt keinen globalen Zustand: jeder Controller besitzt seinen Port
/// (bzw. eine Leihgabe `&mut` auf den Speicher des Aufrufers), mehrere
/// Controller können unabhängig nebeneinander existieren.
///
/// # Beispiele
///
/// ```
/// # use leds_core::LedController;
/// let mut port: u16 = 0xFFFF;
/// let mut leds = LedController::new(&mut port);
/// leds.turn_on(5)?;
/// leds.turn_on(3)?;
/// leds.turn_off(5)?;
/// assert_eq!(leds.port_value(), 0x0004);
/// # Ok::<(), leds_core::LedError>(())
/// ```
#[derive(Debug)]
pub struct LedController<P: LedPort> {
    port: P,
}

impl<P: LedPort> LedController<P> {
    /// Übernimmt den Port und schaltet alle LEDs aus
    pub fn new(mut port: P) -> Self {
        port.write(ALL_LEDS_OFF);
        Self { port }
    }

    /// Schaltet LED `number` (1..=16) ein
    ///
    /// # Fehlerbehandlung
    /// Gibt `LedError::InvalidLedId` zurück wenn `number` außerhalb 1..=16
    /// liegt, der Port wird dann nicht angefasst.
    pub fn turn_on(&mut self, number: u32) -> Result<(), LedError> {
        let led = LedId::try_from(number)?;
        self.modify(|value| led_on(value, led));
        Ok(())
    }

    /// Schaltet LED `number` (1..=16) aus
    ///
    /// # Fehlerbehandlung
    /// Wie [`turn_on`](Self::turn_on)
    pub fn turn_off(&mut self, number: u32) -> Result<(), LedError> {
        let led = LedId::try_from(number)?;
        self.modify(|value| led_off(value, led));
        Ok(())
    }

    /// Liest den Zustand von LED `number` (1..=16)
    pub fn state(&self, number: u32) -> Result<LedState, LedError> {
        let led = LedId::try_from(number)?;
        Ok(led_state(self.port.read(), led))
    }

    pub fn is_on(&self, number: u32) -> Result<bool, LedError> {
        self.state(number).map(LedState::is_on)
    }

    /// Schaltet alle 16 LEDs ein
    pub fn turn_on_all(&mut self) {
        self.port.write(ALL_LEDS_ON);
    }

    /// Schaltet alle 16 LEDs aus
    pub fn turn_off_all(&mut self) {
        self.port.write(ALL_LEDS_OFF);
    }

    /// Führt ein Kommando aus
    ///
    /// Kann nicht fehlschlagen, das Kommando enthält bereits eine gültige `LedId`.
    pub fn apply(&mut self, command: LedCommand) {
        match command {
            LedCommand::TurnOn(led) => self.modify(|value| led_on(value, led)),
            LedCommand::TurnOff(led) => self.modify(|value| led_off(value, led)),
            LedCommand::TurnOnAll => self.turn_on_all(),
            LedCommand::TurnOffAll => self.turn_off_all(),
        }
    }

    /// Aktueller Roh-Wert des Ports
    pub fn port_value(&self) -> u16 {
        self.port.read()
    }

    /// Gibt den Port zurück (LED-Zustand bleibt erhalten)
    pub fn release(self) -> P {
        self.port
    }

    fn modify(&mut self, f: impl FnOnce(u16) -> u16) {
        let value = self.port.read();
        self.port.write(f(value));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn led(number: u8) -> LedId {
        LedId::new(number).unwrap()
    }

    #[test]
    fn test_led_on_keeps_other_bits() {
        assert_eq!(led_on(0x0004, led(5)), 0x0014);
    }

    #[test]
    fn test_led_off_keeps_other_bits() {
        assert_eq!(led_off(0x0014, led(5)), 0x0004);
        assert_eq!(led_off(0x0004, led(5)), 0x0004);
    }

    #[test]
    fn test_led_on_off_round_trip() {
        for value in [0x0000, 0x0004, 0x7FFE, 0x1234] {
            for id in LedId::all().filter(|id| led_state(value, *id) == LedState::Off) {
                assert_eq!(led_off(led_on(value, id), id), value);
            }
        }
    }

    #[test]
    fn test_led_state() {
        assert_eq!(led_state(0x8001, led(1)), LedState::On);
        assert_eq!(led_state(0x8001, led(16)), LedState::On);
        assert_eq!(led_state(0x8001, led(2)), LedState::Off);
    }

    #[test]
    fn test_chaser_step_first_led_has_no_previous() {
        assert_eq!(chaser_step(LedId::FIRST), [Some(LedCommand::TurnOn(led(1))), None]);
    }

    #[test]
    fn test_chaser_step_turns_off_previous() {
        assert_eq!(
            chaser_step(led(2)),
            [Some(LedCommand::TurnOn(led(2))), Some(LedCommand::TurnOff(led(1)))]
        );
        assert_eq!(
            chaser_step(LedId::LAST),
            [Some(LedCommand::TurnOn(led(16))), Some(LedCommand::TurnOff(led(15)))]
        );
    }

    #[test]
    fn test_chaser_round_leaves_only_last_led_on() {
        let mut leds = LedController::new(0u16);
        for id in LedId::all() {
            for command in chaser_step(id).into_iter().flatten() {
                leds.apply(command);
            }
            assert_eq!(leds.port_value(), id.mask());
        }
        assert_eq!(leds.port_value(), 0x8000);
    }

    #[test]
    fn test_controller_init_clears_port() {
        let mut port: u16 = 0xFFFF;
        let leds = LedController::new(&mut port);
        assert_eq!(leds.port_value(), 0x0000);
    }

    #[test]
    fn test_controller_invalid_led_leaves_port() {
        let mut leds = LedController::new(0u16);
        leds.turn_on(3).unwrap();

        assert_eq!(leds.turn_on(0), Err(LedError::InvalidLedId(0)));
        assert_eq!(leds.turn_off(17), Err(LedError::InvalidLedId(17)));
        assert_eq!(leds.state(255), Err(LedError::InvalidLedId(255)));
        assert_eq!(leds.port_value(), 0x0004);
    }

    #[test]
    fn test_controller_wide_led_number_does_not_wrap() {
        let mut leds = LedController::new(0u16);

        // 257 wäre als u8 abgeschnitten LED 1
        assert_eq!(leds.turn_on(257), Err(LedError::InvalidLedId(257)));
        assert_eq!(leds.turn_on(u32::MAX), Err(LedError::InvalidLedId(u32::MAX)));
        assert_eq!(leds.port_value(), 0x0000);

        leds.turn_on_all();
        assert_eq!(leds.turn_off(272), Err(LedError::InvalidLedId(272)));
        assert_eq!(leds.state(257), Err(LedError::InvalidLedId(257)));
        assert_eq!(leds.port_value(), 0xFFFF);
    }

    #[test]
    fn test_controller_apply() {
        let mut leds = LedController::new(0u16);
        leds.apply(LedCommand::TurnOn(led(16)));
        leds.apply(LedCommand::TurnOn(led(1)));
        assert_eq!(leds.port_value(), 0x8001);

        leds.apply(LedCommand::TurnOff(led(16)));
        assert_eq!(leds.port_value(), 0x0001);

        leds.apply(LedCommand::TurnOnAll);
        assert_eq!(leds.port_value(), ALL_LEDS_ON);

        leds.apply(LedCommand::TurnOffAll);
        assert_eq!(leds.port_value(), ALL_LEDS_OFF);
    }

    #[test]
    fn test_controller_release_keeps_state() {
        let mut leds = LedController::new(0u16);
        leds.turn_on(12).unwrap();
        assert_eq!(leds.release(), 0x0800);
    }
}
