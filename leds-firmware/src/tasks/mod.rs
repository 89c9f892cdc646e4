// Task-Modul: Enthält alle Embassy Tasks
//
// Jeder Task läuft asynchron und unabhängig.
// Tasks kommunizieren über einen Embassy Channel (Pattern → LED Control).

pub mod led_control;
pub mod led_pattern;

// Re-export Tasks für einfachen Import
pub use led_control::led_control_task;
pub use led_pattern::led_pattern_task;
