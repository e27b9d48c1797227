// src/error.rs

use hidapi::HidError;
use thiserror::Error;

/// Errors raised while talking to the adapter.
#[derive(Debug, Error)]
pub enum AdapterError {
    #[error("failed to initialise HID API")]
    Init(#[source] HidError),

    #[error("adapter {vid:04x}:{pid:04x} not found or could not be opened")]
    Open {
        vid: u16,
        pid: u16,
        #[source]
        source: HidError,
    },

    #[error("failed to switch adapter to non-blocking mode")]
    BlockingMode(#[source] HidError),

    #[error("failed to write report 0x{id:02x}")]
    Write {
        id: u8,
        #[source]
        source: HidError,
    },

    #[error("failed to read report")]
    Read(#[source] HidError),

    #[error("failed to print report")]
    Output(#[from] std::io::Error),

    #[error("failed to install Ctrl-C handler")]
    Signal(#[from] ctrlc::Error),
}
