//! Port-Implementierungen für Speicher und Memory-Mapped Register

use core::ptr::NonNull;

use crate::traits::LedPort;

/// Port als einfache Variable (z.B. für Simulatoren)
impl LedPort for u16 {
    fn read(&self) -> u16 {
        *self
    }

    fn write(&mut self, value: u16) {
        *self = value;
    }
}

/// Geliehener Port: der Speicher gehört dem Aufrufer und muss
/// den Controller überleben (prüft der Borrow Checker).
impl<P: LedPort + ?Sized> LedPort for &mut P {
    fn read(&self) -> u16 {
        (**self).read()
    }

    fn write(&mut self, value: u16) {
        (**self).write(value)
    }
}

/// Memory-Mapped 16-Bit Ausgaberegister
///
/// Jeder Zugriff ist ein einzelner volatile Read bzw. Write, der Compiler
/// darf sie weder zusammenfassen noch wegoptimieren.
#[derive(Debug)]
pub struct MmioPort {
    register: NonNull<u16>,
}

impl MmioPort {
    /// Erstellt einen Port für die Register-Adresse `register`
    ///
    /// Gibt `None` zurück wenn `register` ein Null-Pointer ist.
    ///
    /// # Safety
    /// - `register` muss auf ein gültiges, auf 2 Bytes ausgerichtetes
    ///   16-Bit Register (oder Speicherwort) zeigen
    /// - die Adresse muss für die gesamte Lebensdauer des `MmioPort`
    ///   gültig bleiben
    /// - kein anderer Code darf parallel auf das Register schreiben
    pub unsafe fn new(register: *mut u16) -> Option<Self> {
        NonNull::new(register).map(|register| Self { register })
    }

    /// Register-Adresse
    pub fn address(&self) -> usize {
        self.register.as_ptr() as usize
    }
}

impl LedPort for MmioPort {
    fn read(&self) -> u16 {
        // SAFETY: Gültigkeit und Alignment garantiert der Aufrufer von `new`
        unsafe { self.register.as_ptr().read_volatile() }
    }

    fn write(&mut self, value: u16) {
        // SAFETY: siehe `read`
        unsafe { self.register.as_ptr().write_volatile(value) }
    }
}
