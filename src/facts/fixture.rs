//! Canned facts provider for tests.
//!
//! Carries a full row set for a typical corporate workstation plus a
//! failure-injection map, so section isolation can be exercised without a
//! live WMI connection.

use std::collections::HashMap;

use anyhow::{bail, Result};
use chrono::Duration;

use crate::facts::provider::FactsProvider;
use crate::facts::rows::*;

#[derive(Default)]
pub struct FixtureProvider {
    pub local: bool,
    pub computer_system: Vec<ComputerSystemRow>,
    pub bios: Vec<BiosRow>,
    pub processors: Vec<ProcessorRow>,
    pub operating_system: Vec<OperatingSystemRow>,
    pub network_adapters: Vec<NetworkAdapterRow>,
    pub adapter_configurations: Vec<AdapterConfigurationRow>,
    pub disk_drives: Vec<DiskDriveRow>,
    pub physical_disks: Vec<PhysicalDiskRow>,
    pub disk_partitions: Vec<DiskPartitionRow>,
    pub logical_disks: Vec<LogicalDiskRow>,
    pub drive_to_partition: Vec<AssociationRow>,
    pub partition_to_logical_disk: Vec<AssociationRow>,
    pub physical_memory: Vec<PhysicalMemoryRow>,
    pub asset_tag: Option<String>,
    pub uptime: Option<Duration>,

    /// Query name -> error text; a listed query fails with that text
    pub failures: HashMap<String, String>,
}

impl FixtureProvider {
    /// Inject a failure for one query (`"bios"`, `"physical_memory"`, ...).
    pub fn fail(mut self, query: &str, message: &str) -> Self {
        self.failures.insert(query.to_string(), message.to_string());
        self
    }

    fn check(&self, query: &str) -> Result<()> {
        if let Some(message) = self.failures.get(query) {
            bail!("{}", message);
        }
        Ok(())
    }

    /// A fully populated workstation: two real NICs (one unconfigured),
    /// one filtered-out loopback adapter, one NVMe disk with a system
    /// partition that has no drive letter, and two memory modules.
    pub fn workstation() -> Self {
        FixtureProvider {
            local: true,
            computer_system: vec![ComputerSystemRow {
                name: Some("WS-0042".to_string()),
                manufacturer: Some("Dell Inc.".to_string()),
                model: Some("OptiPlex 7090".to_string()),
                system_type: Some("x64-based PC".to_string()),
                domain: Some("corp.example.com".to_string()),
            }],
            bios: vec![BiosRow {
                serial_number: Some("5XK1JH3".to_string()),
                smbios_bios_version: Some("1.21.0".to_string()),
                release_date: Some("20220218000000.000000+000".to_string()),
            }],
            processors: vec![ProcessorRow {
                name: Some("Intel(R) Core(TM) i7-10700 CPU @ 2.90GHz".to_string()),
            }],
            operating_system: vec![OperatingSystemRow {
                caption: Some("Microsoft Windows 11 Pro".to_string()),
                version: Some("10.0.22631".to_string()),
                install_date: Some("20230601120000.000000+060".to_string()),
                last_boot_up_time: Some("20240114083000.000000+060".to_string()),
                local_date_time: Some("20240115103000.000000+060".to_string()),
            }],
            network_adapters: vec![
                NetworkAdapterRow {
                    name: Some("Intel(R) Ethernet Connection I219-LM".to_string()),
                    description: Some("Intel(R) Ethernet Connection I219-LM".to_string()),
                    adapter_type: Some("Ethernet 802.3".to_string()),
                    mac_address: Some("A4:BB:6D:11:22:33".to_string()),
                    speed: Some(1_000_000_000),
                    index: Some(1),
                    pnp_device_id: Some(r"PCI\VEN_8086&DEV_15F9".to_string()),
                    physical_adapter: Some(true),
                    net_connection_status: Some(2),
                },
                NetworkAdapterRow {
                    name: Some("Intel(R) Wi-Fi 6 AX201 160MHz".to_string()),
                    description: Some("Intel(R) Wi-Fi 6 AX201 160MHz".to_string()),
                    adapter_type: Some("Ethernet 802.3".to_string()),
                    mac_address: Some("A4:BB:6D:44:55:66".to_string()),
                    speed: Some(117_190_000),
                    index: Some(2),
                    pnp_device_id: Some(r"PCI\VEN_8086&DEV_02F0".to_string()),
                    physical_adapter: Some(true),
                    net_connection_status: Some(7),
                },
                NetworkAdapterRow {
                    name: Some("Microsoft Loopback Adapter".to_string()),
                    description: Some("Microsoft Loopback Adapter".to_string()),
                    adapter_type: Some("Ethernet 802.3".to_string()),
                    index: Some(3),
                    pnp_device_id: Some(r"ROOT\NET\0000".to_string()),
                    physical_adapter: Some(false),
                    ..Default::default()
                },
            ],
            adapter_configurations: vec![AdapterConfigurationRow {
                index: Some(1),
                ip_address: Some(vec!["10.20.30.42".to_string(), "fe80::1".to_string()]),
                ip_subnet: Some(vec!["255.255.255.0".to_string(), "64".to_string()]),
                default_ip_gateway: Some(vec!["10.20.30.1".to_string()]),
                dns_server_search_order: Some(vec![
                    "10.20.0.10".to_string(),
                    "10.20.0.11".to_string(),
                ]),
                dhcp_enabled: Some(true),
                dhcp_server: Some("10.20.0.5".to_string()),
                dhcp_lease_obtained: Some("20240115103000.000000+060".to_string()),
                dhcp_lease_expires: Some("20240116103000.000000+060".to_string()),
            }],
            disk_drives: vec![DiskDriveRow {
                device_id: Some(r"\\.\PHYSICALDRIVE0".to_string()),
                index: Some(0),
                model: Some("Samsung SSD 980 PRO 512GB".to_string()),
                size: Some(512_110_190_592),
            }],
            physical_disks: vec![PhysicalDiskRow {
                device_id: Some("0".to_string()),
                model: Some("Samsung SSD 980 PRO 512GB".to_string()),
                firmware_version: Some("3B2QGXA7".to_string()),
                bus_type: Some(17),
            }],
            disk_partitions: vec![
                DiskPartitionRow {
                    device_id: Some("Disk #0, Partition #0".to_string()),
                    boot_partition: Some(true),
                    partition_type: Some("GPT: System".to_string()),
                    size: Some(314_572_800),
                },
                DiskPartitionRow {
                    device_id: Some("Disk #0, Partition #1".to_string()),
                    boot_partition: Some(false),
                    partition_type: Some("GPT: Basic Data".to_string()),
                    size: Some(511_000_000_000),
                },
            ],
            logical_disks: vec![LogicalDiskRow {
                device_id: Some("C:".to_string()),
                drive_type: Some(3),
                media_type: Some(12),
                file_system: Some("NTFS".to_string()),
                size: Some(510_900_000_000),
                free_space: Some(198_000_000_000),
            }],
            drive_to_partition: vec![
                AssociationRow {
                    antecedent: r#"\\WS-0042\root\cimv2:Win32_DiskDrive.DeviceID="\\\\.\\PHYSICALDRIVE0""#
                        .to_string(),
                    dependent: r#"\\WS-0042\root\cimv2:Win32_DiskPartition.DeviceID="Disk #0, Partition #0""#
                        .to_string(),
                },
                AssociationRow {
                    antecedent: r#"\\WS-0042\root\cimv2:Win32_DiskDrive.DeviceID="\\\\.\\PHYSICALDRIVE0""#
                        .to_string(),
                    dependent: r#"\\WS-0042\root\cimv2:Win32_DiskPartition.DeviceID="Disk #0, Partition #1""#
                        .to_string(),
                },
            ],
            // Partition #0 (the EFI system partition) deliberately has no row here
            partition_to_logical_disk: vec![AssociationRow {
                antecedent: r#"\\WS-0042\root\cimv2:Win32_DiskPartition.DeviceID="Disk #0, Partition #1""#
                    .to_string(),
                dependent: r#"\\WS-0042\root\cimv2:Win32_LogicalDisk.DeviceID="C:""#.to_string(),
            }],
            physical_memory: vec![
                PhysicalMemoryRow {
                    device_locator: Some("DIMM A".to_string()),
                    manufacturer: Some("SK Hynix".to_string()),
                    part_number: Some("HMA81GS6DJR8N-XN".to_string()),
                    serial_number: Some("32C1D0E8".to_string()),
                    capacity: Some(8_589_934_592),
                    speed: Some(3200),
                    form_factor: Some(12),
                    memory_type: Some(26),
                },
                PhysicalMemoryRow {
                    device_locator: Some("DIMM B".to_string()),
                    manufacturer: Some("SK Hynix".to_string()),
                    part_number: Some("HMA81GS6DJR8N-XN".to_string()),
                    serial_number: Some("32C1D0F1".to_string()),
                    capacity: Some(8_589_934_592),
                    speed: Some(3200),
                    form_factor: Some(12),
                    memory_type: Some(26),
                },
            ],
            asset_tag: Some("IT-00142".to_string()),
            uptime: Some(Duration::minutes(26 * 60 + 30)),
            ..Default::default()
        }
    }
}

impl FactsProvider for FixtureProvider {
    fn is_local(&self) -> bool {
        self.local
    }

    fn computer_system(&self) -> Result<Vec<ComputerSystemRow>> {
        self.check("computer_system")?;
        Ok(self.computer_system.clone())
    }

    fn bios(&self) -> Result<Vec<BiosRow>> {
        self.check("bios")?;
        Ok(self.bios.clone())
    }

    fn processors(&self) -> Result<Vec<ProcessorRow>> {
        self.check("processors")?;
        Ok(self.processors.clone())
    }

    fn operating_system(&self) -> Result<Vec<OperatingSystemRow>> {
        self.check("operating_system")?;
        Ok(self.operating_system.clone())
    }

    fn network_adapters(&self) -> Result<Vec<NetworkAdapterRow>> {
        self.check("network_adapters")?;
        Ok(self.network_adapters.clone())
    }

    fn adapter_configurations(&self) -> Result<Vec<AdapterConfigurationRow>> {
        self.check("adapter_configurations")?;
        Ok(self.adapter_configurations.clone())
    }

    fn disk_drives(&self) -> Result<Vec<DiskDriveRow>> {
        self.check("disk_drives")?;
        Ok(self.disk_drives.clone())
    }

    fn physical_disks(&self) -> Result<Vec<PhysicalDiskRow>> {
        self.check("physical_disks")?;
        Ok(self.physical_disks.clone())
    }

    fn disk_partitions(&self) -> Result<Vec<DiskPartitionRow>> {
        self.check("disk_partitions")?;
        Ok(self.disk_partitions.clone())
    }

    fn logical_disks(&self) -> Result<Vec<LogicalDiskRow>> {
        self.check("logical_disks")?;
        Ok(self.logical_disks.clone())
    }

    fn drive_to_partition(&self) -> Result<Vec<AssociationRow>> {
        self.check("drive_to_partition")?;
        Ok(self.drive_to_partition.clone())
    }

    fn partition_to_logical_disk(&self) -> Result<Vec<AssociationRow>> {
        self.check("partition_to_logical_disk")?;
        Ok(self.partition_to_logical_disk.clone())
    }

    fn physical_memory(&self) -> Result<Vec<PhysicalMemoryRow>> {
        self.check("physical_memory")?;
        Ok(self.physical_memory.clone())
    }

    fn asset_tag(&self) -> Result<String> {
        self.check("asset_tag")?;
        match &self.asset_tag {
            Some(tag) => Ok(tag.clone()),
            None => bail!("no asset tag in fixture"),
        }
    }

    fn uptime(&self) -> Result<Duration> {
        self.check("uptime")?;
        match self.uptime {
            Some(uptime) => Ok(uptime),
            None => bail!("no uptime in fixture"),
        }
    }
}
