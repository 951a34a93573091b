//! SSD1306 device driver
//!
//! Owns the control lines and a full-frame buffer. A freshly built
//! driver only knows how to initialize: [`Ssd1306::init`] pulses the
//! reset line, sends the fixed power-on command sequence, and returns
//! the ready driver carrying the drawing and flushing surface. Drawing
//! mutates the buffer only; nothing reaches the panel until
//! [`Ssd1306::flush`] streams the whole frame.

use core::marker::PhantomData;

use phosphor_display::Framebuffer;

use crate::command::{self, cmd};
use crate::interface::ControlLines;

/// Marker for a driver whose panel has not been initialized yet
pub struct Uninitialized;

/// Marker for a driver whose panel is configured and accepting frames
pub struct Ready;

/// SSD1306 driver over bit-banged control lines
///
/// The `S` parameter tracks the panel lifecycle at the type level:
/// commands and drawing exist only on `Ssd1306<L, Ready>`, so a
/// not-yet-initialized panel cannot be written to by construction.
pub struct Ssd1306<L, S = Uninitialized> {
    lines: L,
    fb: Framebuffer,
    _state: PhantomData<S>,
}

impl<L, S> Ssd1306<L, S> {
    /// Tear down the driver and give the control lines back
    pub fn release(self) -> L {
        self.lines
    }
}

impl<L: ControlLines> Ssd1306<L, Uninitialized> {
    /// Wrap control lines in an uninitialized driver
    ///
    /// The panel is untouched until [`init`](Self::init) runs.
    pub fn new(lines: L) -> Self {
        Self {
            lines,
            fb: Framebuffer::new(),
            _state: PhantomData,
        }
    }

    /// Reset the panel and send the power-on sequence
    ///
    /// Parks the bus, holds reset low for
    /// [`command::RESET_PULSE_MS`], then sends
    /// [`command::INIT_SEQUENCE`] as one command burst. The panel
    /// comes up displaying a blank frame buffer.
    pub fn init(self) -> Ssd1306<L, Ready> {
        let mut display = Ssd1306 {
            lines: self.lines,
            fb: self.fb,
            _state: PhantomData,
        };
        display.power_on();
        display
    }
}

impl<L: ControlLines> Ssd1306<L, Ready> {
    fn power_on(&mut self) {
        // Park the bus before touching reset
        self.lines.set_clock(false);
        self.lines.set_cs(true);
        self.lines.set_reset(false);
        self.lines.delay_ms(command::RESET_PULSE_MS);
        self.lines.set_reset(true);
        self.send_commands(&command::INIT_SEQUENCE);
    }

    /// Send bytes as one chip-selected command burst
    fn send_commands(&mut self, bytes: &[u8]) {
        self.lines.set_dc(false);
        self.lines.set_cs(false);
        for &b in bytes {
            self.lines.write_byte(b);
        }
        self.lines.set_cs(true);
    }

    /// Stream the whole frame to the panel
    ///
    /// Sends the full-panel addressing window, then all
    /// [`phosphor_display::BUF_SIZE`] buffer bytes as a single data
    /// burst, page by page, top to bottom.
    pub fn flush(&mut self) {
        self.send_commands(&command::ADDRESS_WINDOW);
        self.lines.set_dc(true);
        self.lines.set_cs(false);
        for &b in self.fb.as_bytes() {
            self.lines.write_byte(b);
        }
        self.lines.set_cs(true);
    }

    /// Turn every buffered pixel off
    pub fn clear(&mut self) {
        self.fb.clear();
    }

    /// Turn on the buffered pixel at (`x`, `y`)
    ///
    /// See [`Framebuffer::set_pixel`].
    pub fn set_pixel(&mut self, x: u8, y: u8) {
        self.fb.set_pixel(x, y);
    }

    /// Draw one character into the buffer
    ///
    /// See [`Framebuffer::draw_char`].
    pub fn draw_char(&mut self, x: u8, page: u8, ch: char) {
        self.fb.draw_char(x, page, ch);
    }

    /// Draw a string into the buffer
    ///
    /// See [`Framebuffer::draw_text`].
    pub fn draw_text(&mut self, x: u8, page: u8, text: &str) {
        self.fb.draw_text(x, page, text);
    }

    /// Draw a straight line into the buffer
    ///
    /// See [`Framebuffer::draw_line`].
    pub fn draw_line(&mut self, x1: u8, y1: u8, x2: u8, y2: u8) {
        self.fb.draw_line(x1, y1, x2, y2);
    }

    /// Read access to the frame under construction
    pub fn framebuffer(&self) -> &Framebuffer {
        &self.fb
    }

    /// Set panel contrast (0 dimmest, 255 brightest)
    pub fn set_contrast(&mut self, value: u8) {
        self.send_commands(&[cmd::SET_CONTRAST, value]);
    }

    /// Invert the panel without touching the buffer
    pub fn set_inverted(&mut self, inverted: bool) {
        let c = if inverted {
            cmd::SET_INVERSE
        } else {
            cmd::SET_NORMAL
        };
        self.send_commands(&[c]);
    }

    /// Switch the panel on or into sleep
    ///
    /// Panel RAM and the frame buffer both survive, so switching back
    /// on restores the picture without a flush.
    pub fn set_display_on(&mut self, on: bool) {
        let c = if on { cmd::DISPLAY_ON } else { cmd::DISPLAY_OFF };
        self.send_commands(&[c]);
    }

    /// Re-run the reset pulse and power-on sequence
    ///
    /// The frame buffer is kept; flush afterwards to restore the
    /// picture on the freshly reset panel.
    pub fn reinit(&mut self) {
        self.power_on();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::{ADDRESS_WINDOW, INIT_SEQUENCE, RESET_PULSE_MS};
    use std::vec::Vec;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Mode {
        Command,
        Data,
    }

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum Op {
        Reset(bool),
        Delay(u32),
        Burst(Mode, Vec<u8>),
    }

    /// Decodes wire traffic back into bursts of bytes
    ///
    /// Samples the data line on rising clock edges and groups bytes
    /// by chip-select assertion, tagging each burst with the D/C
    /// level. Protocol misuse (clocking while deselected, flipping
    /// D/C mid-burst, ending a burst mid-byte) fails the test.
    #[derive(Default)]
    struct BusSpy {
        clock: bool,
        data: bool,
        dc: bool,
        selected: bool,
        shift: u8,
        bits: u8,
        bytes: Vec<u8>,
        ops: Vec<Op>,
    }

    impl ControlLines for BusSpy {
        fn set_clock(&mut self, high: bool) {
            if high && !self.clock {
                assert!(self.selected, "clock pulse while deselected");
                self.shift = (self.shift << 1) | u8::from(self.data);
                self.bits += 1;
                if self.bits == 8 {
                    self.bytes.push(self.shift);
                    self.shift = 0;
                    self.bits = 0;
                }
            }
            self.clock = high;
        }

        fn set_data(&mut self, high: bool) {
            self.data = high;
        }

        fn set_dc(&mut self, high: bool) {
            assert!(!self.selected, "D/C flipped mid-burst");
            self.dc = high;
        }

        fn set_cs(&mut self, high: bool) {
            if !high && !self.selected {
                self.selected = true;
                self.shift = 0;
                self.bits = 0;
                self.bytes.clear();
            } else if high && self.selected {
                assert_eq!(self.bits, 0, "burst ended mid-byte");
                self.selected = false;
                let mode = if self.dc { Mode::Data } else { Mode::Command };
                let bytes = core::mem::take(&mut self.bytes);
                self.ops.push(Op::Burst(mode, bytes));
            }
        }

        fn set_reset(&mut self, high: bool) {
            self.ops.push(Op::Reset(high));
        }

        fn delay_ms(&mut self, ms: u32) {
            self.ops.push(Op::Delay(ms));
        }
    }

    fn ready_display() -> Ssd1306<BusSpy, Ready> {
        let mut display = Ssd1306::new(BusSpy::default()).init();
        display.lines.ops.clear();
        display
    }

    #[test]
    fn test_init_resets_then_configures() {
        let display = Ssd1306::new(BusSpy::default()).init();
        let spy = display.release();
        assert_eq!(
            spy.ops,
            vec![
                Op::Reset(false),
                Op::Delay(RESET_PULSE_MS),
                Op::Reset(true),
                Op::Burst(Mode::Command, INIT_SEQUENCE.to_vec()),
            ]
        );
    }

    #[test]
    fn test_drawing_is_silent_until_flush() {
        let mut display = ready_display();
        display.clear();
        display.set_pixel(1, 1);
        display.draw_char(0, 0, 'A');
        display.draw_text(0, 1, "hi");
        display.draw_line(0, 0, 10, 10);
        assert!(display.lines.ops.is_empty());
    }

    #[test]
    fn test_flush_sends_window_then_frame() {
        let mut display = ready_display();
        display.set_pixel(0, 0);
        display.set_pixel(127, 63);
        display.flush();

        let ops = &display.lines.ops;
        assert_eq!(ops.len(), 2);
        assert_eq!(ops[0], Op::Burst(Mode::Command, ADDRESS_WINDOW.to_vec()));
        match &ops[1] {
            Op::Burst(Mode::Data, frame) => {
                assert_eq!(frame.len(), 1024);
                // Page-major order: (0, 0) leads, (127, 63) closes
                assert_eq!(frame[0], 0x01);
                assert_eq!(frame[1023], 0x80);
            }
            other => panic!("expected data burst, got {:?}", other),
        }
    }

    #[test]
    fn test_flush_after_clear_blanks_panel() {
        let mut display = ready_display();
        display.draw_text(0, 0, "hello");
        display.clear();
        display.flush();

        match &display.lines.ops[1] {
            Op::Burst(Mode::Data, frame) => assert!(frame.iter().all(|&b| b == 0)),
            other => panic!("expected data burst, got {:?}", other),
        }
    }

    #[test]
    fn test_flush_matches_buffer_bytes() {
        let mut display = ready_display();
        display.draw_text(6, 2, "ok");
        display.draw_line(0, 40, 127, 40);
        let expected = display.framebuffer().as_bytes().to_vec();
        display.flush();

        assert_eq!(
            display.lines.ops[1],
            Op::Burst(Mode::Data, expected)
        );
    }

    #[test]
    fn test_set_contrast_burst() {
        let mut display = ready_display();
        display.set_contrast(0xCF);
        assert_eq!(
            display.lines.ops,
            vec![Op::Burst(Mode::Command, vec![0x81, 0xCF])]
        );
    }

    #[test]
    fn test_set_inverted_bursts() {
        let mut display = ready_display();
        display.set_inverted(true);
        display.set_inverted(false);
        assert_eq!(
            display.lines.ops,
            vec![
                Op::Burst(Mode::Command, vec![0xA7]),
                Op::Burst(Mode::Command, vec![0xA6]),
            ]
        );
    }

    #[test]
    fn test_set_display_on_bursts() {
        let mut display = ready_display();
        display.set_display_on(false);
        display.set_display_on(true);
        assert_eq!(
            display.lines.ops,
            vec![
                Op::Burst(Mode::Command, vec![0xAE]),
                Op::Burst(Mode::Command, vec![0xAF]),
            ]
        );
    }

    #[test]
    fn test_reinit_repeats_power_on() {
        let mut display = ready_display();
        display.set_pixel(5, 5);
        display.reinit();
        assert_eq!(
            display.lines.ops,
            vec![
                Op::Reset(false),
                Op::Delay(RESET_PULSE_MS),
                Op::Reset(true),
                Op::Burst(Mode::Command, INIT_SEQUENCE.to_vec()),
            ]
        );
        // Reinit keeps the drawn frame for the next flush
        assert!(display.framebuffer().pixel(5, 5));
    }

    #[test]
    fn test_framebuffer_accessor_tracks_drawing() {
        let mut display = ready_display();
        display.set_pixel(3, 9);
        assert!(display.framebuffer().pixel(3, 9));
        assert!(!display.framebuffer().pixel(3, 10));
    }
}
