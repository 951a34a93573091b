//! SSD1306 OLED display driver
//!
//! Drives 128x64 SSD1306 panels wired in 4-wire serial mode, bit-banged
//! over plain GPIO so no SPI peripheral is needed:
//!
//! ```text
//! MCU GPIO              SSD1306
//! clock   ──────────▶   D0 (SCLK)
//! data    ──────────▶   D1 (SDIN)
//! d/c     ──────────▶   D/C#
//! cs      ──────────▶   CS#
//! reset   ──────────▶   RES#
//! ```
//!
//! The driver owns a [`phosphor_display::Framebuffer`] and draws into
//! it in memory; [`driver::Ssd1306::flush`] streams the finished frame
//! to the panel in one burst. Construction is staged: a new driver only
//! offers `init`, which pulses reset, sends the power-on command
//! sequence, and returns the ready driver with the drawing surface.

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
#[macro_use]
extern crate std;

pub mod command;
pub mod driver;
pub mod interface;

// Re-export key types
pub use driver::{Ready, Ssd1306, Uninitialized};
pub use interface::{ControlLines, SoftSpi};
