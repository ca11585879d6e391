//! Physical memory section.

use anyhow::Result;
use log::warn;

use crate::collectors::lookups::{form_factor_label, memory_type_label};
use crate::facts::FactsProvider;
use crate::models::{ComputerInfoResult, MemoryModuleInfo};
use crate::utils::units::bytes_to_whole_gb;

pub fn apply(provider: &dyn FactsProvider, result: &mut ComputerInfoResult) {
    if let Err(e) = gather(provider, result) {
        warn!("Memory section failed: {:#}", e);
        result.push_error("Physical memory", &format!("{:#}", e));
    }
}

fn gather(provider: &dyn FactsProvider, result: &mut ComputerInfoResult) -> Result<()> {
    for module in provider.physical_memory()? {
        result.memory_modules.push(MemoryModuleInfo {
            slot: module.device_locator.unwrap_or_default(),
            manufacturer: module.manufacturer.unwrap_or_default(),
            part_number: module.part_number.map(|p| p.trim().to_string()).unwrap_or_default(),
            serial_number: module.serial_number.unwrap_or_default(),
            capacity: module.capacity.map(bytes_to_whole_gb).unwrap_or_default(),
            speed: module.speed.map(|s| format!("{} MHz", s)).unwrap_or_default(),
            form_factor: module
                .form_factor
                .map(form_factor_label)
                .unwrap_or_default()
                .to_string(),
            memory_type: module
                .memory_type
                .map(memory_type_label)
                .unwrap_or_default()
                .to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::facts::fixture::FixtureProvider;
    use crate::facts::rows::PhysicalMemoryRow;

    #[test]
    fn test_memory_modules_mapped() {
        let provider = FixtureProvider::workstation();
        let mut result = ComputerInfoResult::new("WS-0042");
        apply(&provider, &mut result);

        assert!(!result.has_error());
        assert_eq!(result.memory_modules.len(), 2);

        let module = &result.memory_modules[0];
        assert_eq!(module.slot, "DIMM A");
        assert_eq!(module.manufacturer, "SK Hynix");
        assert_eq!(module.capacity, "8GB");
        assert_eq!(module.speed, "3200 MHz");
        assert_eq!(module.form_factor, "SODIMM");
        assert_eq!(module.memory_type, "DDR4");
    }

    #[test]
    fn test_unmapped_codes_report_unknown() {
        let mut provider = FixtureProvider::workstation();
        provider.physical_memory = vec![PhysicalMemoryRow {
            device_locator: Some("DIMM C".to_string()),
            capacity: Some(2_000_000_000),
            form_factor: Some(99),
            memory_type: Some(23),
            ..Default::default()
        }];
        let mut result = ComputerInfoResult::new("WS-0042");
        apply(&provider, &mut result);

        let module = &result.memory_modules[0];
        assert_eq!(module.capacity, "2GB");
        assert_eq!(module.form_factor, "Unknown");
        assert_eq!(module.memory_type, "Unknown");
    }

    #[test]
    fn test_memory_failure_is_isolated() {
        let provider = FixtureProvider::workstation().fail("physical_memory", "query timed out");
        let mut result = ComputerInfoResult::new("WS-0042");
        apply(&provider, &mut result);

        assert!(result.error_message.contains("Physical memory"));
        assert!(result.memory_modules.is_empty());
    }
}
