// LED Control Task - Besitzt den LED-Controller und führt Kommandos aus
use defmt::{debug, info};

use crate::hal::GpioPort;
use crate::{LedCommand, LedCommandReceiver, LedController, LedPort, led_state};

/// LED Control Logic - Testbare Business Logic ohne Hardware-Abhängigkeit
///
/// Wartet auf Kommandos aus dem Channel und wendet sie auf den Controller an.
/// Da nur dieser Task den Controller besitzt, laufen alle Port-Zugriffe
/// nacheinander (der Controller selbst synchronisiert nicht).
///
/// # Trait-basierte Abstraktion
/// Der generische Parameter `P: LedPort` ermöglicht:
/// - Real Hardware (GpioPort) im Production-Code
/// - Speicher-Port (`u16`) oder Mock in Tests
///
/// # Parameter
/// - `port`: LED-Port (Hardware oder Mock), wird beim Start auf 0 gesetzt
/// - `command_receiver`: Channel Receiver für LED-Kommandos
pub async fn led_control_logic<P: LedPort>(port: P, command_receiver: LedCommandReceiver) -> ! {
    // Initialisierung: alle LEDs aus
    let mut leds = LedController::new(port);
    info!("LED controller ready, port = {=u16:#06x}", leds.port_value());

    loop {
        let command = command_receiver.receive().await;
        leds.apply(command);

        match command {
            LedCommand::TurnOn(led) | LedCommand::TurnOff(led) => {
                debug!(
                    "{} -> LED {} is {}, port = {=u16:#06x}",
                    command,
                    led.number(),
                    led_state(leds.port_value(), led),
                    leds.port_value()
                );
            }
            LedCommand::TurnOnAll | LedCommand::TurnOffAll => {
                info!("{} -> port = {=u16:#06x}", command, leds.port_value());
            }
        }
    }
}

/// LED Control Task - Embassy Task für parallele Ausführung
///
/// Dieser Task bekommt den fertig konfigurierten GPIO-Port und ruft
/// die testbare `led_control_logic()` Funktion auf.
#[embassy_executor::task]
pub async fn led_control_task(port: GpioPort<'static>, command_receiver: LedCommandReceiver) {
    led_control_logic(port, command_receiver).await
}
