//! Hardware section: chassis, BIOS, processor, asset tag, clock facts.

use anyhow::Result;
use chrono::Local;
use log::{debug, warn};

use crate::constants::ASSET_TAG_UNAVAILABLE;
use crate::facts::FactsProvider;
use crate::models::ComputerInfoResult;
use crate::utils::dates::{bios_age, format_uptime, parse_cim_date, parse_cim_datetime};

/// Populate the hardware block, recording one error note on failure.
pub fn apply(provider: &dyn FactsProvider, result: &mut ComputerInfoResult) {
    if let Err(e) = gather(provider, result) {
        warn!("Hardware section failed: {:#}", e);
        result.push_error("Hardware", &format!("{:#}", e));
    }
}

/// Fields are written as each query lands, so an error partway through
/// keeps whatever was already collected.
fn gather(provider: &dyn FactsProvider, result: &mut ComputerInfoResult) -> Result<()> {
    if let Some(system) = provider.computer_system()?.into_iter().next() {
        result.manufacturer = system.manufacturer.unwrap_or_default();
        result.model = system.model.unwrap_or_default();
    }

    if let Some(bios) = provider.bios()?.into_iter().next() {
        result.serial_number = bios.serial_number.unwrap_or_default();
        result.bios_version = bios.smbios_bios_version.unwrap_or_default();
        if let Some(release) = bios.release_date.as_deref().and_then(parse_cim_date) {
            result.bios_release_date = release.format("%Y-%m-%d").to_string();
            result.bios_age = bios_age(release, Local::now().date_naive());
        }
    }

    if let Some(cpu) = provider.processors()?.into_iter().next() {
        result.processor = cpu.name.unwrap_or_default();
    }

    // The asset tag is optional equipment; a machine without it is not an error
    result.asset_tag = match provider.asset_tag() {
        Ok(tag) => tag,
        Err(e) => {
            debug!("Asset tag unavailable: {:#}", e);
            ASSET_TAG_UNAVAILABLE.to_string()
        }
    };

    if let Some(os) = provider.operating_system()?.into_iter().next() {
        if let Some(local_time) = os.local_date_time.as_deref().and_then(parse_cim_datetime) {
            result.local_time = local_time.format("%Y-%m-%d %H:%M:%S").to_string();
        }
    }

    result.uptime = format_uptime(provider.uptime()?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::facts::fixture::FixtureProvider;

    #[test]
    fn test_hardware_section_populates_all_fields() {
        let provider = FixtureProvider::workstation();
        let mut result = ComputerInfoResult::new("WS-0042");
        apply(&provider, &mut result);

        assert!(!result.has_error());
        assert_eq!(result.manufacturer, "Dell Inc.");
        assert_eq!(result.model, "OptiPlex 7090");
        assert_eq!(result.serial_number, "5XK1JH3");
        assert_eq!(result.bios_version, "1.21.0");
        assert_eq!(result.bios_release_date, "2022-02-18");
        assert!(result.bios_age.contains("years and"));
        assert_eq!(
            result.processor,
            "Intel(R) Core(TM) i7-10700 CPU @ 2.90GHz"
        );
        assert_eq!(result.asset_tag, "IT-00142");
        assert_eq!(result.local_time, "2024-01-15 10:30:00");
        assert_eq!(result.uptime, "1 days, 2 hours, 30 minutes");
    }

    #[test]
    fn test_missing_asset_tag_defaults_to_sentinel() {
        let mut provider = FixtureProvider::workstation();
        provider.asset_tag = None;
        let mut result = ComputerInfoResult::new("WS-0042");
        apply(&provider, &mut result);

        assert_eq!(result.asset_tag, "N/A");
        assert!(!result.has_error());
    }

    #[test]
    fn test_query_failure_keeps_earlier_fields() {
        let provider = FixtureProvider::workstation().fail("processors", "RPC server unavailable");
        let mut result = ComputerInfoResult::new("WS-0042");
        apply(&provider, &mut result);

        assert!(result.has_error());
        assert!(result.error_message.contains("Hardware"));
        assert!(result.error_message.contains("RPC server unavailable"));
        // Queries that ran before the failure still contributed
        assert_eq!(result.manufacturer, "Dell Inc.");
        assert_eq!(result.serial_number, "5XK1JH3");
        // Queries after the failure did not
        assert!(result.uptime.is_empty());
    }
}
