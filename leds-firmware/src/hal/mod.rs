// Hardware Abstraction Layer (HAL) Module
//
// Dieses Modul implementiert den LedPort-Trait aus leds-core
// für die GPIOs des ESP32-C6.

pub mod gpio_port;

pub use gpio_port::GpioPort;
