// Keine Standard-Bibliothek verwenden (Embedded System)
#![no_std]
// Kein normaler main() Einstiegspunkt (wird von esp_rtos bereitgestellt)
#![no_main]
// Verbiete mem::forget - gefährlich bei ESP HAL Types
#![deny(
    clippy::mem_forget,
    reason = "mem::forget is generally not safe to do with esp_hal types, especially those \
    holding buffers for the duration of a data transfer."
)]
// Verbiete große Stack-Frames (Stack ist auf Embedded Systemen begrenzt)
#![deny(clippy::large_stack_frames)]

// Embassy Async Runtime
use defmt::info;
use embassy_executor::Spawner;
use embassy_time::{Duration, Timer};

// ESP32-C6 HAL
use esp_hal::clock::CpuClock;
use esp_hal::gpio::{Level, Output, OutputConfig};
use esp_hal::timer::timg::TimerGroup;

// Backtrace bei Panic und println!() Support
use {esp_backtrace as _, esp_println as _};

// Projekt-Module und Konfiguration
use leds_firmware::LedCommandChannel;
use leds_firmware::config::LED_GPIO_PINS;
use leds_firmware::hal::GpioPort;
use leds_firmware::tasks::{led_control_task, led_pattern_task};

// ESP-IDF App Descriptor - erforderlich für den Bootloader!
// Ohne diesen schlägt das Flashen mit "ESP-IDF App Descriptor missing" fehl
esp_bootloader_esp_idf::esp_app_desc!();

/// Main Entry Point
///
/// Initialisiert Hardware, startet Embassy Runtime und spawnt Tasks.
/// Danach schläft main() - alle Arbeit läuft in Tasks.
#[esp_rtos::main]
async fn main(spawner: Spawner) -> ! {
    // ESP32-C6 Konfiguration: CPU auf maximale Taktfrequenz (160 MHz)
    let config = esp_hal::Config::default().with_cpu_clock(CpuClock::max());
    let peripherals = esp_hal::init(config);

    // Embassy Runtime initialisieren (Timer + Software Interrupt)
    let timg0 = TimerGroup::new(peripherals.TIMG0);
    let sw_interrupt =
        esp_hal::interrupt::software::SoftwareInterruptControl::new(peripherals.SW_INTERRUPT);
    esp_rtos::start(timg0.timer0, sw_interrupt.software_interrupt0);

    // LED-Ausgänge konfigurieren, Reihenfolge = Bit-Position (siehe LED_GPIO_PINS)
    macro_rules! led_pin {
        ($pin:expr) => {
            Output::new($pin, Level::Low, OutputConfig::default())
        };
    }
    let port = GpioPort::new([
        led_pin!(peripherals.GPIO0),
        led_pin!(peripherals.GPIO1),
        led_pin!(peripherals.GPIO2),
        led_pin!(peripherals.GPIO3),
        led_pin!(peripherals.GPIO4),
        led_pin!(peripherals.GPIO5),
        led_pin!(peripherals.GPIO6),
        led_pin!(peripherals.GPIO7),
        led_pin!(peripherals.GPIO10),
        led_pin!(peripherals.GPIO11),
        led_pin!(peripherals.GPIO18),
        led_pin!(peripherals.GPIO19),
        led_pin!(peripherals.GPIO20),
        led_pin!(peripherals.GPIO21),
        led_pin!(peripherals.GPIO22),
        led_pin!(peripherals.GPIO23),
    ]);
    info!("LED port on GPIOs {}", LED_GPIO_PINS);

    // LED Command-Channel erstellen (für Pattern → LED Kommunikation)
    static COMMAND_CHANNEL: static_cell::StaticCell<LedCommandChannel> =
        static_cell::StaticCell::new();
    let command_channel = COMMAND_CHANNEL.init(LedCommandChannel::new());
    let command_sender = command_channel.sender();
    let command_receiver = command_channel.receiver();

    // Spawn LED Task (einziger Besitzer des Ports)
    spawner
        .spawn(led_control_task(port, command_receiver))
        .unwrap();

    // Spawn Pattern Task (Demo-Muster)
    spawner.spawn(led_pattern_task(command_sender)).unwrap();

    // Main-Loop: schläft (alle Arbeit läuft in Tasks)
    loop {
        Timer::after(Duration::from_secs(3600)).await;
    }
}
