//! Collection orchestrator: one pass over all sections for one target.

use log::{info, warn};

use crate::collectors::{directory, hardware, memory, network, os, storage};
use crate::facts::{self, FactsProvider, TargetMode};
use crate::models::ComputerInfoResult;

/// Collect everything we can about `target`.
///
/// This call never fails: an unreachable host or a dead section shows up
/// as notes in the result's `error_message`, alongside whatever data the
/// remaining sections produced. Runs synchronously; callers with a UI are
/// expected to move the whole call off their main thread.
pub fn collect(target: &str, include_directory: bool) -> ComputerInfoResult {
    let local_name = facts::local_machine_name();
    let mode = facts::classify_target(target, &local_name);
    let display_name = match mode {
        TargetMode::Local if !local_name.is_empty() => local_name.clone(),
        _ => target.trim().to_string(),
    };

    info!("Collecting computer info for {:?} ({:?})", display_name, mode);
    let mut result = ComputerInfoResult::new(&display_name);

    let provider = match facts::provider_for(target) {
        Ok(provider) => provider,
        Err(e) => {
            warn!("Could not reach {:?}: {:#}", display_name, e);
            result.push_error("Connection", &format!("{:#}", e));
            return result;
        }
    };

    run_sections(provider.as_ref(), include_directory, &mut result);
    result
}

/// Section loop against an already-built provider. Split out so tests can
/// drive it with a fixture provider.
pub fn run_sections(
    provider: &dyn FactsProvider,
    include_directory: bool,
    result: &mut ComputerInfoResult,
) {
    hardware::apply(provider, result);
    os::apply(provider, result);
    network::apply(provider, result);
    storage::apply(provider, result);
    memory::apply(provider, result);

    // Directory membership only makes sense from inside the domain
    if include_directory && provider.is_local() {
        directory::apply(result);
    }

    if result.has_error() {
        warn!(
            "Collection for {:?} finished with errors:\n{}",
            result.computer_name, result.error_message
        );
    } else {
        info!("Collection for {:?} finished cleanly", result.computer_name);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::facts::fixture::FixtureProvider;

    #[test]
    fn test_full_run_populates_every_section() {
        let provider = FixtureProvider::workstation();
        let mut result = ComputerInfoResult::new("WS-0042");
        run_sections(&provider, false, &mut result);

        assert!(!result.has_error());
        assert_eq!(result.manufacturer, "Dell Inc.");
        assert_eq!(result.os_name, "Microsoft Windows 11 Pro");
        assert_eq!(result.network_adapters.len(), 2);
        assert_eq!(result.physical_disks.len(), 1);
        assert_eq!(result.memory_modules.len(), 2);
        assert!(result.directory_membership.is_none());
    }

    #[test]
    fn test_one_failing_section_leaves_the_rest_intact() {
        let provider = FixtureProvider::workstation().fail("physical_memory", "access denied");
        let mut result = ComputerInfoResult::new("WS-0042");
        run_sections(&provider, false, &mut result);

        assert!(result.has_error());
        assert_eq!(result.error_message.lines().count(), 1);
        assert!(result.error_message.starts_with("Physical memory:"));
        assert!(result.memory_modules.is_empty());
        // Everything else survived
        assert_eq!(result.manufacturer, "Dell Inc.");
        assert_eq!(result.network_adapters.len(), 2);
        assert_eq!(result.physical_disks.len(), 1);
    }

    #[test]
    fn test_every_section_failing_still_returns_a_result() {
        let provider = FixtureProvider::default()
            .fail("computer_system", "down")
            .fail("operating_system", "down")
            .fail("network_adapters", "down")
            .fail("disk_drives", "down")
            .fail("physical_memory", "down");
        let mut result = ComputerInfoResult::new("WS-0042");
        run_sections(&provider, false, &mut result);

        assert!(result.has_error());
        assert_eq!(result.error_message.lines().count(), 5);
        assert_eq!(result.computer_name, "WS-0042");
    }
}
