//! Typed rows for the WMI classes the collector queries.
//!
//! Field names deserialize from the PascalCase property names WMI uses,
//! so the same structs work for `wmi::WMIConnection::raw_query` and for
//! fixture data in tests. Everything is `Option`: WMI omits properties
//! freely, and a missing value must never sink a whole section.

use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename = "Win32_ComputerSystem")]
#[serde(rename_all = "PascalCase")]
pub struct ComputerSystemRow {
    pub name: Option<String>,
    pub manufacturer: Option<String>,
    pub model: Option<String>,
    pub system_type: Option<String>,
    pub domain: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename = "Win32_BIOS")]
#[serde(rename_all = "PascalCase")]
pub struct BiosRow {
    pub serial_number: Option<String>,
    #[serde(rename = "SMBIOSBIOSVersion")]
    pub smbios_bios_version: Option<String>,
    pub release_date: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename = "Win32_Processor")]
#[serde(rename_all = "PascalCase")]
pub struct ProcessorRow {
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename = "Win32_OperatingSystem")]
#[serde(rename_all = "PascalCase")]
pub struct OperatingSystemRow {
    pub caption: Option<String>,
    pub version: Option<String>,
    pub install_date: Option<String>,
    pub last_boot_up_time: Option<String>,
    pub local_date_time: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename = "Win32_NetworkAdapter")]
#[serde(rename_all = "PascalCase")]
pub struct NetworkAdapterRow {
    pub name: Option<String>,
    pub description: Option<String>,
    pub adapter_type: Option<String>,
    #[serde(rename = "MACAddress")]
    pub mac_address: Option<String>,
    pub speed: Option<u64>,
    pub index: Option<u32>,
    #[serde(rename = "PNPDeviceID")]
    pub pnp_device_id: Option<String>,
    pub physical_adapter: Option<bool>,
    pub net_connection_status: Option<u16>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename = "Win32_NetworkAdapterConfiguration")]
#[serde(rename_all = "PascalCase")]
pub struct AdapterConfigurationRow {
    pub index: Option<u32>,
    #[serde(rename = "IPAddress")]
    pub ip_address: Option<Vec<String>>,
    #[serde(rename = "IPSubnet")]
    pub ip_subnet: Option<Vec<String>>,
    #[serde(rename = "DefaultIPGateway")]
    pub default_ip_gateway: Option<Vec<String>>,
    #[serde(rename = "DNSServerSearchOrder")]
    pub dns_server_search_order: Option<Vec<String>>,
    #[serde(rename = "DHCPEnabled")]
    pub dhcp_enabled: Option<bool>,
    #[serde(rename = "DHCPServer")]
    pub dhcp_server: Option<String>,
    #[serde(rename = "DHCPLeaseObtained")]
    pub dhcp_lease_obtained: Option<String>,
    #[serde(rename = "DHCPLeaseExpires")]
    pub dhcp_lease_expires: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename = "Win32_DiskDrive")]
#[serde(rename_all = "PascalCase")]
pub struct DiskDriveRow {
    #[serde(rename = "DeviceID")]
    pub device_id: Option<String>,
    pub index: Option<u32>,
    pub model: Option<String>,
    pub size: Option<u64>,
}

/// `MSFT_PhysicalDisk` from `root\Microsoft\Windows\Storage`. Availability
/// is best-effort: the namespace does not exist on older remote hosts.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename = "MSFT_PhysicalDisk")]
#[serde(rename_all = "PascalCase")]
pub struct PhysicalDiskRow {
    #[serde(rename = "DeviceId")]
    pub device_id: Option<String>,
    pub model: Option<String>,
    pub firmware_version: Option<String>,
    pub bus_type: Option<u16>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename = "Win32_DiskPartition")]
#[serde(rename_all = "PascalCase")]
pub struct DiskPartitionRow {
    #[serde(rename = "DeviceID")]
    pub device_id: Option<String>,
    pub boot_partition: Option<bool>,
    #[serde(rename = "Type")]
    pub partition_type: Option<String>,
    pub size: Option<u64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename = "Win32_LogicalDisk")]
#[serde(rename_all = "PascalCase")]
pub struct LogicalDiskRow {
    #[serde(rename = "DeviceID")]
    pub device_id: Option<String>,
    pub drive_type: Option<u32>,
    pub media_type: Option<u32>,
    pub file_system: Option<String>,
    pub size: Option<u64>,
    pub free_space: Option<u64>,
}

/// One row of a WMI association table (`Win32_DiskDriveToDiskPartition`,
/// `Win32_LogicalDiskToPartition`). Both ends are full WMI object paths;
/// the quoted `DeviceID` token is extracted downstream.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AssociationRow {
    pub antecedent: String,
    pub dependent: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename = "Win32_PhysicalMemory")]
#[serde(rename_all = "PascalCase")]
pub struct PhysicalMemoryRow {
    pub device_locator: Option<String>,
    pub manufacturer: Option<String>,
    pub part_number: Option<String>,
    pub serial_number: Option<String>,
    pub capacity: Option<u64>,
    pub speed: Option<u32>,
    pub form_factor: Option<u16>,
    pub memory_type: Option<u16>,
}
