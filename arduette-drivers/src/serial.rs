//! Serial printing
//!
//! Turns any [`UartTx`] into a [`Print`] sink. Bulk writes go to the UART
//! in one call instead of byte by byte.
//!
//! ```ignore
//! let mut serial = UartPrinter::new(uart);
//! serial.print_str("temp=");
//! serial.println_float(23.456, 1);
//! serial.printf("%04X\r\n", &[Arg::Uint(0xBEEF)]);
//! ```

use arduette_core::Print;
use arduette_hal::UartTx;

/// [`Print`] sink writing to a UART
///
/// A failed write counts as 0 bytes. The error itself is kept until
/// [`UartPrinter::take_error`] is called.
pub struct UartPrinter<U: UartTx> {
    uart: U,
    last_error: Option<U::Error>,
}

impl<U: UartTx> UartPrinter<U> {
    pub fn new(uart: U) -> Self {
        Self {
            uart,
            last_error: None,
        }
    }

    /// Flush the UART's transmit buffer
    pub fn flush(&mut self) -> Result<(), U::Error> {
        self.uart.flush()
    }

    /// Return and clear the most recent write error
    pub fn take_error(&mut self) -> Option<U::Error> {
        self.last_error.take()
    }

    /// Check if a write has failed since the last [`UartPrinter::take_error`]
    pub fn has_error(&self) -> bool {
        self.last_error.is_some()
    }

    /// Get access to the underlying UART
    pub fn uart(&self) -> &U {
        &self.uart
    }

    pub fn into_inner(self) -> U {
        self.uart
    }
}

impl<U: UartTx> Print for UartPrinter<U> {
    fn write_byte(&mut self, byte: u8) -> usize {
        self.write_bytes(&[byte])
    }

    fn write_bytes(&mut self, bytes: &[u8]) -> usize {
        match self.uart.write_blocking(bytes) {
            Ok(()) => bytes.len(),
            Err(e) => {
                self.last_error = Some(e);
                0
            }
        }
    }
}
