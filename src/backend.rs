// src/backend.rs

use crate::command::{format_report, InboundReport};
use crate::config::*;
use crate::error::AdapterError;

use hidapi::{HidApi, HidDevice, HidError};
use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;

/// Raw report I/O against an opened HID device
pub trait ReportDevice {
    fn write_report(&self, report: &[u8]) -> Result<usize, HidError>;

    /// Non-blocking read; `Ok(0)` means nothing was pending.
    fn read_report(&self, buf: &mut [u8]) -> Result<usize, HidError>;
}

impl ReportDevice for HidDevice {
    fn write_report(&self, report: &[u8]) -> Result<usize, HidError> {
        self.write(report)
    }

    fn read_report(&self, buf: &mut [u8]) -> Result<usize, HidError> {
        self.read(buf)
    }
}

/// An open connection to the adapter. The handle is released when the
/// session is dropped.
pub struct Session<D: ReportDevice> {
    device: D,
}

impl Session<HidDevice> {
    /// Open the adapter and put it in non-blocking mode
    pub fn open() -> Result<Self, AdapterError> {
        let api = HidApi::new().map_err(AdapterError::Init)?;

        log::info!("Opening adapter {:04x}:{:04x}", VID, PID);
        let device = api.open(VID, PID).map_err(|source| AdapterError::Open {
            vid: VID,
            pid: PID,
            source,
        })?;
        device
            .set_blocking_mode(false)
            .map_err(AdapterError::BlockingMode)?;

        Ok(Self::new(device))
    }
}

impl<D: ReportDevice> Session<D> {
    pub fn new(device: D) -> Self {
        Self { device }
    }

    /// Write a single report to the adapter
    pub fn send(&self, report: &[u8]) -> Result<(), AdapterError> {
        let id = report.first().copied().unwrap_or(0);
        let written = self
            .device
            .write_report(report)
            .map_err(|source| AdapterError::Write { id, source })?;

        log::info!("Sent report 0x{:02x} ({} bytes written)", id, written);
        Ok(())
    }

    /// Print every incoming report as a hex line until `stop` is set.
    /// Returns the number of reports printed.
    pub fn listen<W: Write>(&self, stop: &AtomicBool, out: &mut W) -> Result<usize, AdapterError> {
        let mut buf = [0u8; READ_SIZE];
        let mut count = 0;

        while !stop.load(Ordering::Relaxed) {
            let n = self
                .device
                .read_report(&mut buf)
                .map_err(AdapterError::Read)?;
            if n == 0 {
                thread::sleep(LISTEN_IDLE);
                continue;
            }

            let data = &buf[..n];
            if let Some(kind) = InboundReport::from_id(data[0]) {
                log::debug!(
                    "{} report, {} bytes (expected {})",
                    kind.name(),
                    n,
                    kind.expected_len()
                );
            }

            writeln!(out, "{}", format_report(data))?;
            count += 1;
        }

        Ok(count)
    }
}

impl<D: ReportDevice> Drop for Session<D> {
    fn drop(&mut self) {
        log::debug!("Releasing adapter handle");
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use std::cell::{Cell, RefCell};
    use std::collections::VecDeque;
    use std::rc::Rc;
    use std::sync::Arc;

    /// Counters shared between a test and its `FakeDevice`
    #[derive(Default)]
    pub struct Probe {
        pub opened: Cell<usize>,
        pub writes: RefCell<Vec<Vec<u8>>>,
        pub closed: Cell<usize>,
    }

    /// In-memory device that replays queued reads and records writes
    pub struct FakeDevice {
        probe: Rc<Probe>,
        reads: RefCell<VecDeque<Vec<u8>>>,
        fail_writes: bool,
        stop_when_drained: Option<Arc<AtomicBool>>,
    }

    impl FakeDevice {
        pub fn new(probe: &Rc<Probe>) -> Self {
            probe.opened.set(probe.opened.get() + 1);
            Self {
                probe: Rc::clone(probe),
                reads: RefCell::new(VecDeque::new()),
                fail_writes: false,
                stop_when_drained: None,
            }
        }

        pub fn failing_writes(mut self) -> Self {
            self.fail_writes = true;
            self
        }

        pub fn with_reads(mut self, reads: Vec<Vec<u8>>, stop: Arc<AtomicBool>) -> Self {
            self.reads = RefCell::new(reads.into());
            self.stop_when_drained = Some(stop);
            self
        }
    }

    impl ReportDevice for FakeDevice {
        fn write_report(&self, report: &[u8]) -> Result<usize, HidError> {
            self.probe.writes.borrow_mut().push(report.to_vec());
            if self.fail_writes {
                return Err(HidError::HidApiError {
                    message: "write failed".to_string(),
                });
            }
            Ok(report.len())
        }

        fn read_report(&self, buf: &mut [u8]) -> Result<usize, HidError> {
            match self.reads.borrow_mut().pop_front() {
                Some(report) => {
                    let n = report.len().min(buf.len());
                    buf[..n].copy_from_slice(&report[..n]);
                    Ok(n)
                }
                None => {
                    if let Some(stop) = &self.stop_when_drained {
                        stop.store(true, Ordering::Relaxed);
                    }
                    Ok(0)
                }
            }
        }
    }

    impl Drop for FakeDevice {
        fn drop(&mut self) {
            self.probe.closed.set(self.probe.closed.get() + 1);
        }
    }
}
