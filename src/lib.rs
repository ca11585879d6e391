//! # rust-inventory
//!
//! A Windows computer inventory collector for IT support: hardware, OS,
//! network adapters, disks (with partitions and volumes), memory modules,
//! and optional Active Directory membership, for the local machine or a
//! remote host reachable over WMI.
//!
//! ## Overview
//!
//! One call produces one [`models::ComputerInfoResult`]. Collection is
//! section-isolated: a failing section never aborts the rest, it appends a
//! note to the result's error accumulator and leaves its fields at their
//! defaults. An unreachable remote host therefore still returns a result —
//! sparse, with an explanatory note — rather than an error.
//!
//! ## Usage
//!
//! ```no_run
//! use rust_inventory::collectors::computer_info::collect;
//! use rust_inventory::projection::DeviceRecord;
//!
//! // Empty target = the local machine; a hostname/IP = remote collection
//! let result = collect("WS-0042", false);
//! if result.has_error() {
//!     eprintln!("partial result:\n{}", result.error_message);
//! }
//!
//! // Flatten for the device database
//! let record = DeviceRecord::from_result(&result);
//! println!("{} ({})", record.hostname, record.primary_ip);
//! ```
//!
//! ## Module Organization
//!
//! - [`cli`]: Command-line interface definitions and argument parsing
//! - [`models`]: The collection result graph
//! - [`facts`]: Facts providers — local WMI, remote WMI, test fixtures
//! - [`collectors`]: The per-section collection logic and orchestrator
//! - [`projection`]: Flattened record for the device database
//! - [`config`]: Scan configuration (YAML)
//! - [`utils`]: Date parsing, unit conversion, report rendering
//! - [`constants`]: Application-wide constants
//!
//! ## Platform support
//!
//! The query layer (WMI, registry, Active Directory) only exists on
//! Windows; on other platforms every provider query reports the same
//! "unavailable" failure through the normal error accumulator, and the
//! mapping/formatting layers stay fully testable.

/// Command-line interface definitions and argument parsing
pub mod cli;

/// The collection result graph handed to callers
pub mod models;

/// Facts providers: where inventory rows come from
pub mod facts;

/// Per-section collection logic and the orchestrator
pub mod collectors;

/// Flattened projection for the device database
pub mod projection;

/// Scan configuration management
pub mod config;

/// Date parsing, unit conversion, and report rendering helpers
pub mod utils;

/// Application constants
pub mod constants;
