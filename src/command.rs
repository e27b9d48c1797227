// src/command.rs

use crate::config::*;

use clap::Subcommand;

/// Commands understood by the adapter tool
#[derive(Debug, Clone, Copy, PartialEq, Eq, Subcommand)]
#[command(rename_all = "snake_case")]
pub enum Command {
    /// Send a 'set motor' HID report
    SetMotor {
        ch0: u8,
        ch1: u8,
        ch2: u8,
        ch3: u8,
    },
    /// Send a 'read origin' HID report
    ReadOrigin,
    /// Send a 'start polling' HID report
    StartPolling,
    /// Send a 'stop polling' HID report
    StopPolling,
    /// Send a 'reset' HID report
    Reset,
    /// Continuously read and print HID reports
    Listen,
}

impl Command {
    /// Report bytes to write, or `None` for `listen` which only reads.
    pub fn report(&self) -> Option<Vec<u8>> {
        let report = match *self {
            Command::SetMotor { ch0, ch1, ch2, ch3 } => {
                let mut buf = Vec::with_capacity(RPT_SET_MOTOR_LEN);
                buf.push(RPT_SET_MOTOR);
                buf.extend_from_slice(&[ch0, ch1, ch2, ch3]);
                buf
            }
            Command::ReadOrigin => vec![RPT_GET_ORIGIN],
            Command::StartPolling => vec![RPT_ENABLE_POLLING],
            Command::StopPolling => vec![RPT_DISABLE_POLLING],
            Command::Reset => vec![RPT_RESET],
            Command::Listen => return None,
        };
        Some(report)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Command::SetMotor { .. } => "set_motor",
            Command::ReadOrigin => "read_origin",
            Command::StartPolling => "start_polling",
            Command::StopPolling => "stop_polling",
            Command::Reset => "reset",
            Command::Listen => "listen",
        }
    }
}

/// Reports the adapter firmware sends back. Only used to label log output,
/// the payload is printed untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InboundReport {
    State,
    Origin,
    PollingEnabled,
    PollingDisabled,
    ResetAck,
}

impl InboundReport {
    pub fn from_id(id: u8) -> Option<Self> {
        match id {
            RPT_STATE => Some(Self::State),
            RPT_ORIGIN => Some(Self::Origin),
            RPT_POLLING_ENABLED => Some(Self::PollingEnabled),
            RPT_POLLING_DISABLED => Some(Self::PollingDisabled),
            RPT_RESET_ACK => Some(Self::ResetAck),
            _ => None,
        }
    }

    pub fn expected_len(&self) -> usize {
        match self {
            Self::State => RPT_STATE_LEN,
            Self::Origin => RPT_ORIGIN_LEN,
            Self::PollingEnabled | Self::PollingDisabled | Self::ResetAck => RPT_ACK_LEN,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::State => "state",
            Self::Origin => "origin",
            Self::PollingEnabled => "polling enabled",
            Self::PollingDisabled => "polling disabled",
            Self::ResetAck => "reset ack",
        }
    }
}

/// Format a raw report as space-separated lowercase hex bytes.
pub fn format_report(data: &[u8]) -> String {
    data.iter()
        .map(|b| format!("{b:02x}"))
        .collect::<Vec<_>>()
        .join(" ")
}
