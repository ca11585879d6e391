//! Stand-in facts provider for non-Windows builds.
//!
//! WMI, the registry, and Active Directory only exist on Windows; on other
//! platforms every query reports the same failure, which the collection
//! sections fold into the result's error accumulator. This keeps the
//! mapping and formatting layers compilable and testable everywhere.

use anyhow::{bail, Result};
use chrono::Duration;
use log::info;

use crate::facts::provider::FactsProvider;
use crate::facts::rows::*;

pub struct UnsupportedProvider {
    target: String,
    local: bool,
}

impl UnsupportedProvider {
    pub fn new(target: &str, local: bool) -> Self {
        info!("Running on a non-Windows platform, WMI queries are unavailable");
        UnsupportedProvider {
            target: target.to_string(),
            local,
        }
    }

    fn unavailable<T>(&self) -> Result<T> {
        bail!(
            "WMI collection for {:?} is only available on Windows",
            self.target
        )
    }
}

impl FactsProvider for UnsupportedProvider {
    fn is_local(&self) -> bool {
        self.local
    }

    fn computer_system(&self) -> Result<Vec<ComputerSystemRow>> {
        self.unavailable()
    }

    fn bios(&self) -> Result<Vec<BiosRow>> {
        self.unavailable()
    }

    fn processors(&self) -> Result<Vec<ProcessorRow>> {
        self.unavailable()
    }

    fn operating_system(&self) -> Result<Vec<OperatingSystemRow>> {
        self.unavailable()
    }

    fn network_adapters(&self) -> Result<Vec<NetworkAdapterRow>> {
        self.unavailable()
    }

    fn adapter_configurations(&self) -> Result<Vec<AdapterConfigurationRow>> {
        self.unavailable()
    }

    fn disk_drives(&self) -> Result<Vec<DiskDriveRow>> {
        self.unavailable()
    }

    fn physical_disks(&self) -> Result<Vec<PhysicalDiskRow>> {
        self.unavailable()
    }

    fn disk_partitions(&self) -> Result<Vec<DiskPartitionRow>> {
        self.unavailable()
    }

    fn logical_disks(&self) -> Result<Vec<LogicalDiskRow>> {
        self.unavailable()
    }

    fn drive_to_partition(&self) -> Result<Vec<AssociationRow>> {
        self.unavailable()
    }

    fn partition_to_logical_disk(&self) -> Result<Vec<AssociationRow>> {
        self.unavailable()
    }

    fn physical_memory(&self) -> Result<Vec<PhysicalMemoryRow>> {
        self.unavailable()
    }

    fn asset_tag(&self) -> Result<String> {
        self.unavailable()
    }

    fn uptime(&self) -> Result<Duration> {
        self.unavailable()
    }
}
