// src/config.rs

use std::time::Duration;

// Adapter identity
pub const VID: u16 = 0x057E;
pub const PID: u16 = 0x0337;

pub const READ_SIZE: usize = 64;

/// Sleep between empty non-blocking reads; the adapter polls joybus at 1kHz.
pub const LISTEN_IDLE: Duration = Duration::from_millis(1);

// Host -> adapter report IDs
pub const RPT_SET_MOTOR: u8 = 0x11;
pub const RPT_GET_ORIGIN: u8 = 0x12;
pub const RPT_ENABLE_POLLING: u8 = 0x13;
pub const RPT_DISABLE_POLLING: u8 = 0x14;
pub const RPT_RESET: u8 = 0x15;

// Adapter -> host report IDs
pub const RPT_STATE: u8 = 0x21;
pub const RPT_ORIGIN: u8 = 0x22;
pub const RPT_POLLING_ENABLED: u8 = 0x23;
pub const RPT_POLLING_DISABLED: u8 = 0x24;
pub const RPT_RESET_ACK: u8 = 0x25;

// Report lengths, report ID included
pub const RPT_SET_MOTOR_LEN: usize = 5;
pub const RPT_STATE_LEN: usize = 37;
pub const RPT_ORIGIN_LEN: usize = 25;
pub const RPT_ACK_LEN: usize = 2;
