//! Operating system section.

use anyhow::Result;
use log::warn;

use crate::facts::FactsProvider;
use crate::models::ComputerInfoResult;
use crate::utils::dates::parse_cim_date;

pub fn apply(provider: &dyn FactsProvider, result: &mut ComputerInfoResult) {
    if let Err(e) = gather(provider, result) {
        warn!("Operating system section failed: {:#}", e);
        result.push_error("Operating system", &format!("{:#}", e));
    }
}

fn gather(provider: &dyn FactsProvider, result: &mut ComputerInfoResult) -> Result<()> {
    if let Some(os) = provider.operating_system()?.into_iter().next() {
        result.os_name = os.caption.unwrap_or_default();
        result.os_version = os.version.unwrap_or_default();
        if let Some(installed) = os.install_date.as_deref().and_then(parse_cim_date) {
            result.os_install_date = installed.format("%Y-%m-%d").to_string();
        }
    }

    if let Some(system) = provider.computer_system()?.into_iter().next() {
        result.os_architecture = architecture_from_system_type(system.system_type.as_deref());
    }
    Ok(())
}

/// Derive a display architecture from Win32_ComputerSystem.SystemType
/// (e.g. "x64-based PC"). Unrecognized values pass through untouched.
fn architecture_from_system_type(system_type: Option<&str>) -> String {
    let raw = match system_type {
        Some(s) if !s.is_empty() => s,
        _ => return String::new(),
    };
    let lower = raw.to_lowercase();
    if lower.contains("arm64") {
        "ARM 64-bit".to_string()
    } else if lower.contains("x64") {
        "64-bit".to_string()
    } else if lower.contains("x86") {
        "32-bit".to_string()
    } else {
        raw.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::facts::fixture::FixtureProvider;

    #[test]
    fn test_os_section() {
        let provider = FixtureProvider::workstation();
        let mut result = ComputerInfoResult::new("WS-0042");
        apply(&provider, &mut result);

        assert!(!result.has_error());
        assert_eq!(result.os_name, "Microsoft Windows 11 Pro");
        assert_eq!(result.os_version, "10.0.22631");
        assert_eq!(result.os_architecture, "64-bit");
        assert_eq!(result.os_install_date, "2023-06-01");
    }

    #[test]
    fn test_architecture_mapping() {
        assert_eq!(architecture_from_system_type(Some("x64-based PC")), "64-bit");
        assert_eq!(architecture_from_system_type(Some("X86-based PC")), "32-bit");
        assert_eq!(
            architecture_from_system_type(Some("ARM64-based PC")),
            "ARM 64-bit"
        );
        assert_eq!(
            architecture_from_system_type(Some("Itanium-based System")),
            "Itanium-based System"
        );
        assert_eq!(architecture_from_system_type(None), "");
    }

    #[test]
    fn test_os_failure_is_isolated() {
        let provider = FixtureProvider::workstation().fail("operating_system", "access denied");
        let mut result = ComputerInfoResult::new("WS-0042");
        apply(&provider, &mut result);

        assert!(result.error_message.contains("Operating system"));
        assert!(result.os_name.is_empty());
    }
}
