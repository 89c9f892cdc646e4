// LED Pattern Task - Demo-Lauflicht über alle 16 LEDs
use defmt::info;
use embassy_time::{Duration, Timer};

use crate::config::{PATTERN_FLASH_COUNT, PATTERN_PAUSE_MILLIS, PATTERN_STEP_MILLIS};
use crate::{LedCommand, LedCommandSender, LedId, chaser_step};

/// LED Pattern Task - erzeugt endlos das Demo-Muster
///
/// 1. Lauflicht von LED 1 bis LED 16
/// 2. Alle LEDs gemeinsam blinken lassen
/// 3. Pause, dann von vorne
///
/// Der Task schreibt nie selbst auf den Port, sondern schickt Kommandos
/// an den LED Control Task.
#[embassy_executor::task]
pub async fn led_pattern_task(command_sender: LedCommandSender) {
    let step = Duration::from_millis(PATTERN_STEP_MILLIS);

    loop {
        info!("Pattern: running light");
        for led in LedId::all() {
            for command in chaser_step(led).into_iter().flatten() {
                command_sender.send(command).await;
            }
            Timer::after(step).await;
        }

        info!("Pattern: flash all");
        for _ in 0..PATTERN_FLASH_COUNT {
            command_sender.send(LedCommand::TurnOnAll).await;
            Timer::after(step).await;
            command_sender.send(LedCommand::TurnOffAll).await;
            Timer::after(step).await;
        }

        Timer::after(Duration::from_millis(PATTERN_PAUSE_MILLIS)).await;
    }
}
