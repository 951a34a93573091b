//! Bit-banged serial interface to the panel
//!
//! The SSD1306 in 4-wire serial mode is written over a one-way bus:
//! every byte is shifted out MSB first with one clock pulse per bit,
//! and the D/C line tells the panel whether the byte is a command or
//! display data. Nothing is ever read back, so the interface cannot
//! fail and none of these operations return errors.

use phosphor_hal::{DelayMs, OutputPin};

/// Control lines of the panel's serial interface
///
/// One implementor drives all five lines plus the reset settle delay,
/// keeping the driver generic over how the lines map to real pins.
/// D/C and chip select belong to the caller, so one assertion of each
/// can cover a whole multi-byte burst.
pub trait ControlLines {
    /// Drive the serial clock line
    fn set_clock(&mut self, high: bool);

    /// Drive the serial data line
    fn set_data(&mut self, high: bool);

    /// Drive the data/command line (high = display data, low = command)
    fn set_dc(&mut self, high: bool);

    /// Drive the chip select line (active low)
    fn set_cs(&mut self, high: bool);

    /// Drive the reset line (active low)
    fn set_reset(&mut self, high: bool);

    /// Block for at least `ms` milliseconds
    fn delay_ms(&mut self, ms: u32);

    /// Shift one byte out, MSB first, one clock pulse per bit
    ///
    /// Chip select must already be asserted and D/C set for the
    /// byte's meaning. Leaves the clock low.
    fn write_byte(&mut self, byte: u8) {
        let mut value = byte;
        for _ in 0..8 {
            self.set_data(value & 0x80 == 0x80);
            self.set_clock(true);
            self.set_clock(false);
            value <<= 1;
        }
    }
}

/// Control lines driven by five GPIO pins and a delay source
///
/// The software rendition of the panel's 4-wire SPI mode: any
/// [`OutputPin`]s will do, no SPI peripheral required.
pub struct SoftSpi<Clk, Din, Dc, Cs, Rst, D> {
    clk: Clk,
    din: Din,
    dc: Dc,
    cs: Cs,
    rst: Rst,
    delay: D,
}

impl<Clk, Din, Dc, Cs, Rst, D> SoftSpi<Clk, Din, Dc, Cs, Rst, D>
where
    Clk: OutputPin,
    Din: OutputPin,
    Dc: OutputPin,
    Cs: OutputPin,
    Rst: OutputPin,
    D: DelayMs,
{
    /// Bundle pins and a delay into a control-line set
    pub fn new(clk: Clk, din: Din, dc: Dc, cs: Cs, rst: Rst, delay: D) -> Self {
        Self {
            clk,
            din,
            dc,
            cs,
            rst,
            delay,
        }
    }

    /// Tear down the bundle and give the pins back
    pub fn release(self) -> (Clk, Din, Dc, Cs, Rst, D) {
        (self.clk, self.din, self.dc, self.cs, self.rst, self.delay)
    }
}

impl<Clk, Din, Dc, Cs, Rst, D> ControlLines for SoftSpi<Clk, Din, Dc, Cs, Rst, D>
where
    Clk: OutputPin,
    Din: OutputPin,
    Dc: OutputPin,
    Cs: OutputPin,
    Rst: OutputPin,
    D: DelayMs,
{
    fn set_clock(&mut self, high: bool) {
        self.clk.set_state(high);
    }

    fn set_data(&mut self, high: bool) {
        self.din.set_state(high);
    }

    fn set_dc(&mut self, high: bool) {
        self.dc.set_state(high);
    }

    fn set_cs(&mut self, high: bool) {
        self.cs.set_state(high);
    }

    fn set_reset(&mut self, high: bool) {
        self.rst.set_state(high);
    }

    fn delay_ms(&mut self, ms: u32) {
        self.delay.delay_ms(ms);
    }
}
