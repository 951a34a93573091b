//! SSD1306 command set
//!
//! Command byte constants, the fixed power-on sequence, and the
//! full-panel addressing window sent before every frame.

use phosphor_display::{PAGES, WIDTH};

/// SSD1306 commands
pub mod cmd {
    pub const DISPLAY_OFF: u8 = 0xAE;
    pub const DISPLAY_ON: u8 = 0xAF;
    pub const DISPLAY_RESUME: u8 = 0xA4;
    pub const SET_CONTRAST: u8 = 0x81;
    pub const SET_NORMAL: u8 = 0xA6;
    pub const SET_INVERSE: u8 = 0xA7;
    pub const SET_DISPLAY_OFFSET: u8 = 0xD3;
    pub const SET_COM_PINS: u8 = 0xDA;
    pub const SET_VCOM_DETECT: u8 = 0xDB;
    pub const SET_CLOCK_DIV: u8 = 0xD5;
    pub const SET_PRECHARGE: u8 = 0xD9;
    pub const SET_MUX_RATIO: u8 = 0xA8;
    pub const SET_MEM_MODE: u8 = 0x20;
    pub const SET_COLUMN_ADDR: u8 = 0x21;
    pub const SET_PAGE_ADDR: u8 = 0x22;
    pub const SET_START_LINE: u8 = 0x40;
    pub const SET_SEG_REMAP: u8 = 0xA1;
    pub const SET_COM_SCAN_DEC: u8 = 0xC8;
    pub const SET_CHARGE_PUMP: u8 = 0x8D;
}

/// How long the reset line is held low before the panel comes up
pub const RESET_PULSE_MS: u32 = 1;

/// Power-on initialization, sent as a single command burst right
/// after the reset pulse. Byte-for-byte fixed; runtime adjustments go
/// through the dedicated setters instead.
pub const INIT_SEQUENCE: [u8; 25] = [
    cmd::DISPLAY_OFF,
    cmd::SET_CLOCK_DIV,
    0x80, // Default clock ratio
    cmd::SET_MUX_RATIO,
    0x3F, // 64 lines
    cmd::SET_DISPLAY_OFFSET,
    0x00,
    cmd::SET_START_LINE | 0x00,
    cmd::SET_CHARGE_PUMP,
    0x14, // Enable charge pump
    cmd::SET_MEM_MODE,
    0x00, // Horizontal addressing
    cmd::SET_SEG_REMAP,    // Flip horizontally
    cmd::SET_COM_SCAN_DEC, // Flip vertically
    cmd::SET_COM_PINS,
    0x12, // Alternative COM config
    cmd::SET_CONTRAST,
    0x8F,
    cmd::SET_PRECHARGE,
    0xF1,
    cmd::SET_VCOM_DETECT,
    0x40,
    cmd::DISPLAY_RESUME,
    cmd::SET_NORMAL,
    cmd::DISPLAY_ON,
];

/// Addressing window covering the whole panel (columns 0..=127,
/// pages 0..=7), sent before each full-frame data burst. With the
/// window set, the panel advances its own write pointer column by
/// column and page by page, matching the buffer's byte order.
pub const ADDRESS_WINDOW: [u8; 6] = [
    cmd::SET_COLUMN_ADDR,
    0,
    (WIDTH - 1) as u8,
    cmd::SET_PAGE_ADDR,
    0,
    (PAGES - 1) as u8,
];
