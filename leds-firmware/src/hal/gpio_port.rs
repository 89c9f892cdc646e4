// GPIO LED-Port
//
// Bildet den 16-Bit LED-Port auf 16 einzelne GPIO-Ausgänge ab,
// damit der Controller aus leds-core unverändert auf echter Hardware läuft.

use esp_hal::gpio::{Level, Output};
use leds_core::{ALL_LEDS_OFF, LedPort};

/// LED-Port aus 16 GPIO-Ausgängen
///
/// Die ESP32-C6 Pins liegen nicht zusammenhängend in einem 16-Bit Register,
/// daher hält der Port ein Schattenregister: `read()` liefert den zuletzt
/// geschriebenen Wert, `write()` setzt jeden Pin auf den Pegel seines Bits.
pub struct GpioPort<'a> {
    /// Pin-Index = Bit-Position (pins[0] = LED 1)
    pins: [Output<'a>; 16],
    shadow: u16,
}

impl<'a> GpioPort<'a> {
    /// Erstellt einen neuen GpioPort
    ///
    /// # Parameter
    /// - `pins`: 16 bereits konfigurierte Ausgänge, Reihenfolge wie `LED_GPIO_PINS`
    ///
    /// Alle Pins werden auf Low gesetzt, damit Schattenregister und Hardware
    /// übereinstimmen.
    pub fn new(pins: [Output<'a>; 16]) -> Self {
        let mut port = Self {
            pins,
            shadow: ALL_LEDS_OFF,
        };
        port.drive(ALL_LEDS_OFF);
        port
    }

    fn drive(&mut self, value: u16) {
        for (bit, pin) in self.pins.iter_mut().enumerate() {
            pin.set_level(Level::from(value & (1 << bit) != 0));
        }
        self.shadow = value;
    }
}

impl<'a> LedPort for GpioPort<'a> {
    fn read(&self) -> u16 {
        self.shadow
    }

    fn write(&mut self, value: u16) {
        self.drive(value);
    }
}
