//! Flattened projection of a collection result for the device database.
//!
//! The database keeps one row per hostname with scalar columns, so the
//! result graph is flattened: the first adapter with a configured IPv4
//! address becomes the primary, the rest contribute pipe-joined secondary
//! columns.

use serde::{Deserialize, Serialize};

use crate::constants::{LIST_SEPARATOR, NOT_CONFIGURED};
use crate::models::{ComputerInfoResult, NetworkAdapterInfo};

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct DeviceRecord {
    pub hostname: String,
    pub serial_number: String,
    pub asset_tag: String,
    pub manufacturer: String,
    pub model: String,
    pub processor: String,
    pub ram_total: String,
    pub storage_summary: String,
    pub bios_version: String,
    pub os_name: String,
    pub os_version: String,
    pub os_architecture: String,
    pub primary_ip: String,
    pub primary_mac: String,
    pub secondary_ips: String,
    pub secondary_macs: String,
    pub dns_servers: String,
    pub gateways: String,
    pub subnet_masks: String,
}

impl DeviceRecord {
    pub fn from_result(result: &ComputerInfoResult) -> Self {
        let configured: Vec<&NetworkAdapterInfo> = result
            .network_adapters
            .iter()
            .filter(|a| !a.ipv4_address.is_empty() && a.ipv4_address != NOT_CONFIGURED)
            .collect();
        let primary = configured.first();
        let secondary = configured.iter().skip(1);

        DeviceRecord {
            hostname: result.computer_name.clone(),
            serial_number: result.serial_number.clone(),
            asset_tag: result.asset_tag.clone(),
            manufacturer: result.manufacturer.clone(),
            model: result.model.clone(),
            processor: result.processor.clone(),
            ram_total: ram_total(result),
            storage_summary: storage_summary(result),
            bios_version: result.bios_version.clone(),
            os_name: result.os_name.clone(),
            os_version: result.os_version.clone(),
            os_architecture: result.os_architecture.clone(),
            primary_ip: primary.map(|a| a.ipv4_address.clone()).unwrap_or_default(),
            primary_mac: primary.map(|a| a.mac_address.clone()).unwrap_or_default(),
            secondary_ips: secondary
                .clone()
                .map(|a| a.ipv4_address.as_str())
                .collect::<Vec<_>>()
                .join(LIST_SEPARATOR),
            secondary_macs: secondary
                .map(|a| a.mac_address.as_str())
                .collect::<Vec<_>>()
                .join(LIST_SEPARATOR),
            dns_servers: join_unique(configured.iter().map(|a| a.dns_servers.as_str())),
            gateways: join_unique(configured.iter().map(|a| a.gateways.as_str())),
            subnet_masks: join_unique(configured.iter().map(|a| a.subnet_mask.as_str())),
        }
    }
}

/// Sum module capacities like "8GB" into one total.
fn ram_total(result: &ComputerInfoResult) -> String {
    let total: f64 = result
        .memory_modules
        .iter()
        .filter_map(|m| m.capacity.trim_end_matches("GB").parse::<f64>().ok())
        .sum();
    if total == 0.0 {
        String::new()
    } else {
        format!("{}GB", total)
    }
}

fn storage_summary(result: &ComputerInfoResult) -> String {
    result
        .physical_disks
        .iter()
        .map(|d| format!("{} ({})", d.model, d.capacity))
        .collect::<Vec<_>>()
        .join("; ")
}

fn join_unique<'a>(values: impl Iterator<Item = &'a str>) -> String {
    let mut seen: Vec<&str> = Vec::new();
    for value in values {
        if !value.is_empty() && !seen.contains(&value) {
            seen.push(value);
        }
    }
    seen.join(LIST_SEPARATOR)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collectors::computer_info::run_sections;
    use crate::facts::fixture::FixtureProvider;
    use crate::models::ComputerInfoResult;

    #[test]
    fn test_flatten_workstation() {
        let provider = FixtureProvider::workstation();
        let mut result = ComputerInfoResult::new("WS-0042");
        run_sections(&provider, false, &mut result);

        let record = DeviceRecord::from_result(&result);
        assert_eq!(record.hostname, "WS-0042");
        assert_eq!(record.serial_number, "5XK1JH3");
        assert_eq!(record.asset_tag, "IT-00142");
        assert_eq!(record.ram_total, "16GB");
        assert_eq!(record.storage_summary, "Samsung SSD 980 PRO 512GB (512.11GB)");
        // Only the wired adapter is configured; Wi-Fi has no IP to report
        assert_eq!(record.primary_ip, "10.20.30.42");
        assert_eq!(record.primary_mac, "A4:BB:6D:11:22:33");
        assert!(record.secondary_ips.is_empty());
        assert_eq!(record.dns_servers, "10.20.0.10 | 10.20.0.11");
        assert_eq!(record.gateways, "10.20.30.1");
        assert_eq!(record.subnet_masks, "255.255.255.0");
    }

    #[test]
    fn test_empty_result_flattens_to_empty_record() {
        let result = ComputerInfoResult::new("WS-0099");
        let record = DeviceRecord::from_result(&result);
        assert_eq!(record.hostname, "WS-0099");
        assert!(record.primary_ip.is_empty());
        assert!(record.ram_total.is_empty());
        assert!(record.storage_summary.is_empty());
    }
}
