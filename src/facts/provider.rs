use anyhow::Result;
use chrono::Duration;

use crate::facts::rows::*;

/// One source of system-management facts about a single target.
///
/// Local and remote collection differ only in how rows are fetched (a local
/// COM connection vs. a remote-scoped one, direct registry access vs. a
/// remote registry call); every mapping and formatting decision lives in the
/// collection sections, which consume this trait. Tests substitute a
/// fixture implementation with canned rows.
pub trait FactsProvider {
    /// True when this provider reads the machine the collector runs on.
    fn is_local(&self) -> bool;

    fn computer_system(&self) -> Result<Vec<ComputerSystemRow>>;
    fn bios(&self) -> Result<Vec<BiosRow>>;
    fn processors(&self) -> Result<Vec<ProcessorRow>>;
    fn operating_system(&self) -> Result<Vec<OperatingSystemRow>>;
    fn network_adapters(&self) -> Result<Vec<NetworkAdapterRow>>;
    fn adapter_configurations(&self) -> Result<Vec<AdapterConfigurationRow>>;
    fn disk_drives(&self) -> Result<Vec<DiskDriveRow>>;

    /// Extended disk info; `Ok(vec![])` when the storage namespace is not
    /// available on the target (older hosts), which is not an error.
    fn physical_disks(&self) -> Result<Vec<PhysicalDiskRow>>;

    fn disk_partitions(&self) -> Result<Vec<DiskPartitionRow>>;
    fn logical_disks(&self) -> Result<Vec<LogicalDiskRow>>;
    fn drive_to_partition(&self) -> Result<Vec<AssociationRow>>;
    fn partition_to_logical_disk(&self) -> Result<Vec<AssociationRow>>;
    fn physical_memory(&self) -> Result<Vec<PhysicalMemoryRow>>;

    /// Vendor asset tag from the target's registry. Callers substitute the
    /// "N/A" sentinel on error; the provider only reports what it read.
    fn asset_tag(&self) -> Result<String>;

    /// Time since last boot: local tick count, or for remote targets the
    /// spread between LastBootUpTime and LocalDateTime.
    fn uptime(&self) -> Result<Duration>;
}
