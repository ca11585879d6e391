//! Physical disk section: disk drives joined to extended disk info, then
//! the drive -> partition -> logical volume association walk.

use anyhow::Result;
use lazy_static::lazy_static;
use log::{debug, warn};
use regex::Regex;

use crate::collectors::lookups::{bus_type_label, drive_type_label, media_type_label};
use crate::facts::rows::{AssociationRow, LogicalDiskRow, PhysicalDiskRow};
use crate::facts::FactsProvider;
use crate::models::{ComputerInfoResult, LogicalVolumeInfo, PartitionInfo, PhysicalDiskInfo};
use crate::utils::units::{bytes_to_gb, percent_free};

lazy_static! {
    /// Captures the quoted DeviceID token from a WMI object path like
    /// `\\HOST\root\cimv2:Win32_DiskDrive.DeviceID="\\\\.\\PHYSICALDRIVE0"`
    static ref DEVICE_ID_RE: Regex =
        Regex::new(r#"DeviceID="([^"]*)""#).expect("device id pattern");
}

pub fn apply(provider: &dyn FactsProvider, result: &mut ComputerInfoResult) {
    if let Err(e) = gather(provider, result) {
        warn!("Storage section failed: {:#}", e);
        result.push_error("Physical disks", &format!("{:#}", e));
    }
}

fn gather(provider: &dyn FactsProvider, result: &mut ComputerInfoResult) -> Result<()> {
    let drives = provider.disk_drives()?;

    // Extended info is best-effort: older hosts have no storage namespace
    let extended = match provider.physical_disks() {
        Ok(rows) => rows,
        Err(e) => {
            debug!("Extended disk info unavailable: {:#}", e);
            Vec::new()
        }
    };

    let partitions = provider.disk_partitions()?;
    let logical_disks = provider.logical_disks()?;
    let drive_partition_links = provider.drive_to_partition()?;
    let partition_volume_links = provider.partition_to_logical_disk()?;

    for drive in &drives {
        let drive_id = drive.device_id.clone().unwrap_or_default();
        let detail = drive
            .index
            .and_then(|index| find_extended(&extended, index));

        let mut disk = PhysicalDiskInfo {
            name: drive_id.clone(),
            model: drive
                .model
                .clone()
                .or_else(|| detail.and_then(|d| d.model.clone()))
                .unwrap_or_default(),
            firmware_version: detail
                .and_then(|d| d.firmware_version.clone())
                .unwrap_or_default(),
            bus_type: detail
                .and_then(|d| d.bus_type)
                .map(bus_type_label)
                .unwrap_or_default()
                .to_string(),
            capacity: drive.size.map(bytes_to_gb).unwrap_or_default(),
            partitions: Vec::new(),
        };

        for link in &drive_partition_links {
            if extract_device_id(&link.antecedent).as_deref() != Some(drive_id.as_str()) {
                continue;
            }
            let partition_id = match extract_device_id(&link.dependent) {
                Some(id) => id,
                None => continue,
            };
            let Some(partition) = partitions
                .iter()
                .find(|p| p.device_id.as_deref() == Some(partition_id.as_str()))
            else {
                continue;
            };

            disk.partitions.push(PartitionInfo {
                name: partition_id.clone(),
                is_boot_partition: partition.boot_partition.unwrap_or(false),
                partition_type: partition.partition_type.clone().unwrap_or_default(),
                size: partition.size.map(bytes_to_gb).unwrap_or_default(),
                logical_volumes: volumes_for_partition(
                    &partition_id,
                    &partition_volume_links,
                    &logical_disks,
                ),
            });
        }

        result.physical_disks.push(disk);
    }
    Ok(())
}

/// MSFT_PhysicalDisk.DeviceId is the drive index as a string.
fn find_extended(extended: &[PhysicalDiskRow], index: u32) -> Option<&PhysicalDiskRow> {
    extended
        .iter()
        .find(|row| row.device_id.as_deref() == Some(index.to_string().as_str()))
}

/// A partition with no logical-volume link (EFI system partitions,
/// recovery partitions) simply gets an empty list.
fn volumes_for_partition(
    partition_id: &str,
    links: &[AssociationRow],
    logical_disks: &[LogicalDiskRow],
) -> Vec<LogicalVolumeInfo> {
    let mut volumes = Vec::new();
    for link in links {
        if extract_device_id(&link.antecedent).as_deref() != Some(partition_id) {
            continue;
        }
        let Some(volume_id) = extract_device_id(&link.dependent) else {
            continue;
        };
        let Some(disk) = logical_disks
            .iter()
            .find(|d| d.device_id.as_deref() == Some(volume_id.as_str()))
        else {
            continue;
        };

        let size = disk.size.unwrap_or(0);
        let free = disk.free_space.unwrap_or(0);
        volumes.push(LogicalVolumeInfo {
            volume_id,
            drive_type: disk
                .drive_type
                .map(drive_type_label)
                .unwrap_or_default()
                .to_string(),
            media_type: disk
                .media_type
                .map(media_type_label)
                .unwrap_or_default()
                .to_string(),
            file_system: disk.file_system.clone().unwrap_or_default(),
            capacity: disk.size.map(bytes_to_gb).unwrap_or_default(),
            free_space: disk.free_space.map(bytes_to_gb).unwrap_or_default(),
            percent_free: format!("{}", percent_free(free, size)),
        });
    }
    volumes
}

/// Pull the quoted DeviceID out of an association path, collapsing the
/// doubled backslashes WMI uses inside quoted strings.
fn extract_device_id(object_path: &str) -> Option<String> {
    DEVICE_ID_RE
        .captures(object_path)
        .map(|captures| captures[1].replace("\\\\", "\\"))
}
