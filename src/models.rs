use serde::{Deserialize, Serialize};

/// Root aggregate produced by one collection pass against one target.
///
/// Every section of the collection writes into this struct; a section that
/// fails leaves its fields at their defaults and appends a note to
/// `error_message`. Partial data from successful sections is always kept.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct ComputerInfoResult {
    pub computer_name: String,

    // Hardware
    pub manufacturer: String,
    pub model: String,
    pub serial_number: String,
    pub asset_tag: String,
    pub bios_version: String,
    pub bios_release_date: String,
    pub bios_age: String,
    pub processor: String,
    pub local_time: String,
    pub uptime: String,

    // Operating system
    pub os_name: String,
    pub os_version: String,
    pub os_architecture: String,
    pub os_install_date: String,

    pub network_adapters: Vec<NetworkAdapterInfo>,
    pub physical_disks: Vec<PhysicalDiskInfo>,
    pub memory_modules: Vec<MemoryModuleInfo>,
    pub directory_membership: Option<DirectoryMembershipInfo>,

    /// Accumulated per-section failure notes, one line per failure
    pub error_message: String,
}

impl ComputerInfoResult {
    pub fn new(computer_name: &str) -> Self {
        ComputerInfoResult {
            computer_name: computer_name.to_string(),
            ..Default::default()
        }
    }

    /// Record a non-fatal section failure without aborting collection
    pub fn push_error(&mut self, section: &str, detail: &str) {
        if !self.error_message.is_empty() {
            self.error_message.push('\n');
        }
        self.error_message.push_str(section);
        self.error_message.push_str(": ");
        self.error_message.push_str(detail);
    }

    pub fn has_error(&self) -> bool {
        !self.error_message.is_empty()
    }
}

/// One physical network adapter that survived the NIC filter,
/// joined to its IP configuration where one exists.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct NetworkAdapterInfo {
    pub name: String,
    pub mac_address: String,
    pub link_speed: String,
    pub ipv4_address: String,
    pub subnet_mask: String,
    pub gateways: String,
    pub dns_servers: String,
    pub dhcp_enabled: bool,
    pub dhcp_server: String,
    pub dhcp_lease_start: String,
    pub dhcp_lease_expiry: String,
    pub adapter_type: String,
    pub connection_status: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct PhysicalDiskInfo {
    pub name: String,
    pub model: String,
    pub firmware_version: String,
    pub bus_type: String,
    pub capacity: String,
    pub partitions: Vec<PartitionInfo>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct PartitionInfo {
    pub name: String,
    pub is_boot_partition: bool,
    pub partition_type: String,
    pub size: String,
    pub logical_volumes: Vec<LogicalVolumeInfo>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct LogicalVolumeInfo {
    pub volume_id: String,
    pub drive_type: String,
    pub media_type: String,
    pub file_system: String,
    pub capacity: String,
    pub free_space: String,
    pub percent_free: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct MemoryModuleInfo {
    pub slot: String,
    pub manufacturer: String,
    pub part_number: String,
    pub serial_number: String,
    pub capacity: String,
    pub speed: String,
    pub form_factor: String,
    pub memory_type: String,
}

/// Active Directory computer account details, collected only for
/// local-mode targets when directory lookup is requested.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct DirectoryMembershipInfo {
    pub name: String,
    pub distinguished_name: String,
    pub enabled: bool,
    pub dns_host_name: String,
    pub last_logon: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_result_has_no_error() {
        let result = ComputerInfoResult::new("WS-01");
        assert_eq!(result.computer_name, "WS-01");
        assert!(!result.has_error());
        assert!(result.network_adapters.is_empty());
        assert!(result.directory_membership.is_none());
    }

    #[test]
    fn test_push_error_accumulates_lines() {
        let mut result = ComputerInfoResult::new("WS-01");
        result.push_error("Hardware", "query failed");
        result.push_error("Memory", "access denied");

        assert!(result.has_error());
        let lines: Vec<&str> = result.error_message.lines().collect();
        assert_eq!(lines, vec!["Hardware: query failed", "Memory: access denied"]);
    }

    #[test]
    fn test_result_round_trips_through_json() {
        let mut result = ComputerInfoResult::new("WS-01");
        result.physical_disks.push(PhysicalDiskInfo {
            name: r"\\.\PHYSICALDRIVE0".to_string(),
            capacity: "512.11GB".to_string(),
            ..Default::default()
        });

        let json = serde_json::to_string(&result).unwrap();
        let back: ComputerInfoResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back.physical_disks.len(), 1);
        assert_eq!(back.physical_disks[0].capacity, "512.11GB");
    }
}
