//! WMI-backed facts providers for Windows hosts.
//!
//! `LocalWmiProvider` talks to the local CIM repository; `RemoteWmiProvider`
//! runs the same queries against a remote-scoped connection. The extended
//! storage namespace is attached best-effort in both cases: hosts older
//! than Windows 8 / Server 2012 simply do not have it.

use std::process::Command;

use anyhow::{bail, Context, Result};
use chrono::Duration;
use log::{debug, warn};
use serde::de::DeserializeOwned;
use winapi::um::sysinfoapi::GetTickCount64;
use winreg::enums::HKEY_LOCAL_MACHINE;
use winreg::RegKey;
use wmi::{COMLibrary, WMIConnection};

use crate::constants::{ASSET_TAG_KEY, ASSET_TAG_VALUE, CIMV2_NAMESPACE, STORAGE_NAMESPACE};
use crate::facts::provider::FactsProvider;
use crate::facts::rows::*;
use crate::utils::dates::parse_cim_datetime;

/// Facts provider for the machine the collector runs on.
pub struct LocalWmiProvider {
    cimv2: WMIConnection,
    storage: Option<WMIConnection>,
}

impl LocalWmiProvider {
    pub fn connect() -> Result<Self> {
        let com = COMLibrary::new().context("COM initialization failed")?;
        let cimv2 = WMIConnection::with_namespace_path(CIMV2_NAMESPACE, com)
            .context("Failed to connect to local WMI")?;
        let storage = match WMIConnection::with_namespace_path(STORAGE_NAMESPACE, com) {
            Ok(conn) => Some(conn),
            Err(e) => {
                debug!("Storage namespace unavailable locally: {}", e);
                None
            }
        };
        Ok(LocalWmiProvider { cimv2, storage })
    }
}

impl FactsProvider for LocalWmiProvider {
    fn is_local(&self) -> bool {
        true
    }

    fn computer_system(&self) -> Result<Vec<ComputerSystemRow>> {
        query(&self.cimv2, "SELECT * FROM Win32_ComputerSystem")
    }

    fn bios(&self) -> Result<Vec<BiosRow>> {
        query(&self.cimv2, "SELECT * FROM Win32_BIOS")
    }

    fn processors(&self) -> Result<Vec<ProcessorRow>> {
        query(&self.cimv2, "SELECT * FROM Win32_Processor")
    }

    fn operating_system(&self) -> Result<Vec<OperatingSystemRow>> {
        query(&self.cimv2, "SELECT * FROM Win32_OperatingSystem")
    }

    fn network_adapters(&self) -> Result<Vec<NetworkAdapterRow>> {
        query(&self.cimv2, "SELECT * FROM Win32_NetworkAdapter")
    }

    fn adapter_configurations(&self) -> Result<Vec<AdapterConfigurationRow>> {
        query(&self.cimv2, "SELECT * FROM Win32_NetworkAdapterConfiguration")
    }

    fn disk_drives(&self) -> Result<Vec<DiskDriveRow>> {
        query(&self.cimv2, "SELECT * FROM Win32_DiskDrive")
    }

    fn physical_disks(&self) -> Result<Vec<PhysicalDiskRow>> {
        query_storage(self.storage.as_ref())
    }

    fn disk_partitions(&self) -> Result<Vec<DiskPartitionRow>> {
        query(&self.cimv2, "SELECT * FROM Win32_DiskPartition")
    }

    fn logical_disks(&self) -> Result<Vec<LogicalDiskRow>> {
        query(&self.cimv2, "SELECT * FROM Win32_LogicalDisk")
    }

    fn drive_to_partition(&self) -> Result<Vec<AssociationRow>> {
        query(&self.cimv2, "SELECT * FROM Win32_DiskDriveToDiskPartition")
    }

    fn partition_to_logical_disk(&self) -> Result<Vec<AssociationRow>> {
        query(&self.cimv2, "SELECT * FROM Win32_LogicalDiskToPartition")
    }

    fn physical_memory(&self) -> Result<Vec<PhysicalMemoryRow>> {
        query(&self.cimv2, "SELECT * FROM Win32_PhysicalMemory")
    }

    fn asset_tag(&self) -> Result<String> {
        let hklm = RegKey::predef(HKEY_LOCAL_MACHINE);
        let key = hklm
            .open_subkey(ASSET_TAG_KEY)
            .with_context(|| format!("Failed to open HKLM\\{}", ASSET_TAG_KEY))?;
        let tag: String = key
            .get_value(ASSET_TAG_VALUE)
            .with_context(|| format!("Registry value {} not found", ASSET_TAG_VALUE))?;
        Ok(tag)
    }

    fn uptime(&self) -> Result<Duration> {
        // Tick count survives clock changes, unlike LastBootUpTime math
        let millis = unsafe { GetTickCount64() };
        Ok(Duration::milliseconds(millis as i64))
    }
}

/// Facts provider for a remote host, reached through a remote-scoped
/// WMI connection using the caller's ambient credentials.
pub struct RemoteWmiProvider {
    host: String,
    cimv2: WMIConnection,
    storage: Option<WMIConnection>,
}

impl RemoteWmiProvider {
    pub fn connect(host: &str) -> Result<Self> {
        let com = COMLibrary::new().context("COM initialization failed")?;
        let cimv2 =
            WMIConnection::with_namespace_path(&format!(r"\\{}\{}", host, CIMV2_NAMESPACE), com)
                .with_context(|| format!("Failed to connect to WMI on {}", host))?;
        let storage =
            match WMIConnection::with_namespace_path(&format!(r"\\{}\{}", host, STORAGE_NAMESPACE), com)
            {
                Ok(conn) => Some(conn),
                Err(e) => {
                    warn!("Storage namespace unavailable on {}: {}", host, e);
                    None
                }
            };
        Ok(RemoteWmiProvider {
            host: host.to_string(),
            cimv2,
            storage,
        })
    }
}

impl FactsProvider for RemoteWmiProvider {
    fn is_local(&self) -> bool {
        false
    }

    fn computer_system(&self) -> Result<Vec<ComputerSystemRow>> {
        query(&self.cimv2, "SELECT * FROM Win32_ComputerSystem")
    }

    fn bios(&self) -> Result<Vec<BiosRow>> {
        query(&self.cimv2, "SELECT * FROM Win32_BIOS")
    }

    fn processors(&self) -> Result<Vec<ProcessorRow>> {
        query(&self.cimv2, "SELECT * FROM Win32_Processor")
    }

    fn operating_system(&self) -> Result<Vec<OperatingSystemRow>> {
        query(&self.cimv2, "SELECT * FROM Win32_OperatingSystem")
    }

    fn network_adapters(&self) -> Result<Vec<NetworkAdapterRow>> {
        query(&self.cimv2, "SELECT * FROM Win32_NetworkAdapter")
    }

    fn adapter_configurations(&self) -> Result<Vec<AdapterConfigurationRow>> {
        query(&self.cimv2, "SELECT * FROM Win32_NetworkAdapterConfiguration")
    }

    fn disk_drives(&self) -> Result<Vec<DiskDriveRow>> {
        query(&self.cimv2, "SELECT * FROM Win32_DiskDrive")
    }

    fn physical_disks(&self) -> Result<Vec<PhysicalDiskRow>> {
        query_storage(self.storage.as_ref())
    }

    fn disk_partitions(&self) -> Result<Vec<DiskPartitionRow>> {
        query(&self.cimv2, "SELECT * FROM Win32_DiskPartition")
    }

    fn logical_disks(&self) -> Result<Vec<LogicalDiskRow>> {
        query(&self.cimv2, "SELECT * FROM Win32_LogicalDisk")
    }

    fn drive_to_partition(&self) -> Result<Vec<AssociationRow>> {
        query(&self.cimv2, "SELECT * FROM Win32_DiskDriveToDiskPartition")
    }

    fn partition_to_logical_disk(&self) -> Result<Vec<AssociationRow>> {
        query(&self.cimv2, "SELECT * FROM Win32_LogicalDiskToPartition")
    }

    fn physical_memory(&self) -> Result<Vec<PhysicalMemoryRow>> {
        query(&self.cimv2, "SELECT * FROM Win32_PhysicalMemory")
    }

    fn asset_tag(&self) -> Result<String> {
        // Remote registry read; requires the RemoteRegistry service on the target
        let remote_key = format!(r"\\{}\HKLM\{}", self.host, ASSET_TAG_KEY);
        let output = Command::new("reg")
            .args(["query", &remote_key, "/v", ASSET_TAG_VALUE])
            .output()
            .context("Failed to run reg query")?;
        if !output.status.success() {
            bail!(
                "reg query against {} failed: {}",
                self.host,
                String::from_utf8_lossy(&output.stderr).trim()
            );
        }
        parse_reg_query_value(&String::from_utf8_lossy(&output.stdout), ASSET_TAG_VALUE)
            .with_context(|| format!("No {} value in reg query output", ASSET_TAG_VALUE))
    }

    fn uptime(&self) -> Result<Duration> {
        let rows = self.operating_system()?;
        let row = rows.first().context("No Win32_OperatingSystem row")?;
        let boot = row
            .last_boot_up_time
            .as_deref()
            .and_then(parse_cim_datetime)
            .context("Unparseable LastBootUpTime")?;
        let now = row
            .local_date_time
            .as_deref()
            .and_then(parse_cim_datetime)
            .context("Unparseable LocalDateTime")?;
        Ok(now - boot)
    }
}

fn query<T: DeserializeOwned>(conn: &WMIConnection, wql: &str) -> Result<Vec<T>> {
    debug!("WQL: {}", wql);
    conn.raw_query(wql)
        .with_context(|| format!("WMI query failed: {}", wql))
}

fn query_storage(storage: Option<&WMIConnection>) -> Result<Vec<PhysicalDiskRow>> {
    match storage {
        Some(conn) => query(conn, "SELECT * FROM MSFT_PhysicalDisk"),
        // Missing namespace is absence of data, not a section failure
        None => Ok(Vec::new()),
    }
}

/// Pull a named REG_SZ value out of `reg query` output.
///
/// ```text
/// HKEY_LOCAL_MACHINE\SOFTWARE\ITInventory
///     AssetTag    REG_SZ    IT-00142
/// ```
fn parse_reg_query_value(output: &str, value_name: &str) -> Option<String> {
    for line in output.lines() {
        let mut tokens = line.split_whitespace();
        if tokens.next() != Some(value_name) {
            continue;
        }
        // Skip the REG_* type token, keep the rest (values may contain spaces)
        tokens.next()?;
        let value = tokens.collect::<Vec<_>>().join(" ");
        if !value.is_empty() {
            return Some(value);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::parse_reg_query_value;

    #[test]
    fn test_parse_reg_query_value() {
        let output = "\r\nHKEY_LOCAL_MACHINE\\SOFTWARE\\ITInventory\r\n    AssetTag    REG_SZ    IT-00142\r\n";
        assert_eq!(
            parse_reg_query_value(output, "AssetTag"),
            Some("IT-00142".to_string())
        );
    }

    #[test]
    fn test_parse_reg_query_value_with_spaces() {
        let output = "    AssetTag    REG_SZ    Front Desk 3\r\n";
        assert_eq!(
            parse_reg_query_value(output, "AssetTag"),
            Some("Front Desk 3".to_string())
        );
    }

    #[test]
    fn test_parse_reg_query_value_missing() {
        assert_eq!(parse_reg_query_value("no such value here", "AssetTag"), None);
    }
}
