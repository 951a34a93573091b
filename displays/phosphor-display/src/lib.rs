//! Display-agnostic drawing primitives for Phosphor
//!
//! This crate provides:
//! - [`Framebuffer`]: a page-organized 1-bit frame buffer for 128x64
//!   monochrome panels, with pixel, line, character, and text drawing
//! - [`font`]: the 5x7 ASCII glyph table backing text drawing
//!
//! The buffer is pure memory with no I/O. Device drivers such as
//! phosphor-ssd1306 own one, draw into it, and stream it out whole;
//! it can also be used standalone, for example to prerender screens
//! on a host.

#![no_std]

#[cfg(test)]
#[macro_use]
extern crate std;

pub mod font;
pub mod framebuffer;

// Re-export key types
pub use framebuffer::{Framebuffer, BUF_SIZE, HEIGHT, PAGES, WIDTH};
