//! Facts sources: where inventory rows come from.
//!
//! A target string is classified as local or remote, and a matching
//! [`FactsProvider`] is built for it. Collection sections never know which
//! kind they are talking to.

pub mod fixture;
pub mod provider;
pub mod rows;

#[cfg(target_os = "windows")]
mod wmi_source;
#[cfg(not(target_os = "windows"))]
mod unsupported;

use anyhow::Result;
use log::debug;

pub use provider::FactsProvider;

/// How a target string resolves: against this machine or over the network.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetMode {
    Local,
    Remote,
}

/// Classify a target against the local machine name.
///
/// Empty string, "localhost", "127.0.0.1", and a case-insensitive match of
/// the machine name all select local mode; everything else is remote.
pub fn classify_target(target: &str, local_machine_name: &str) -> TargetMode {
    let trimmed = target.trim();
    if trimmed.is_empty()
        || trimmed.eq_ignore_ascii_case("localhost")
        || trimmed == "127.0.0.1"
        || trimmed.eq_ignore_ascii_case(local_machine_name)
    {
        TargetMode::Local
    } else {
        TargetMode::Remote
    }
}

/// Name of the machine the collector is running on.
pub fn local_machine_name() -> String {
    hostname::get()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Build the facts provider for a target. Connection failures surface here
/// so the caller can fold them into the result's error accumulator instead
/// of failing the collection call.
pub fn provider_for(target: &str) -> Result<Box<dyn FactsProvider>> {
    let mode = classify_target(target, &local_machine_name());
    debug!("Target {:?} classified as {:?}", target, mode);

    #[cfg(target_os = "windows")]
    {
        match mode {
            TargetMode::Local => Ok(Box::new(wmi_source::LocalWmiProvider::connect()?)),
            TargetMode::Remote => Ok(Box::new(wmi_source::RemoteWmiProvider::connect(
                target.trim(),
            )?)),
        }
    }

    #[cfg(not(target_os = "windows"))]
    {
        Ok(Box::new(unsupported::UnsupportedProvider::new(
            target.trim(),
            mode == TargetMode::Local,
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_and_loopback_targets_are_local() {
        assert_eq!(classify_target("", "WS-01"), TargetMode::Local);
        assert_eq!(classify_target("   ", "WS-01"), TargetMode::Local);
        assert_eq!(classify_target("localhost", "WS-01"), TargetMode::Local);
        assert_eq!(classify_target("LOCALHOST", "WS-01"), TargetMode::Local);
        assert_eq!(classify_target("127.0.0.1", "WS-01"), TargetMode::Local);
    }

    #[test]
    fn test_machine_name_match_is_local_case_insensitive() {
        assert_eq!(classify_target("ws-01", "WS-01"), TargetMode::Local);
        assert_eq!(classify_target("WS-01", "ws-01"), TargetMode::Local);
    }

    #[test]
    fn test_other_targets_are_remote() {
        assert_eq!(classify_target("WS-02", "WS-01"), TargetMode::Remote);
        assert_eq!(classify_target("10.0.0.7", "WS-01"), TargetMode::Remote);
        assert_eq!(
            classify_target("printer.corp.example.com", "WS-01"),
            TargetMode::Remote
        );
    }

    #[test]
    fn test_loopback_variants_are_not_stretched() {
        // Only the exact loopback literal is special-cased
        assert_eq!(classify_target("127.0.0.2", "WS-01"), TargetMode::Remote);
        assert_eq!(classify_target("localhost2", "WS-01"), TargetMode::Remote);
    }
}
