//! Human-readable report rendering for a collection result.

use std::fmt::Write as _;

use crate::models::ComputerInfoResult;

/// Render a text report of everything the collection pass found,
/// section by section, for terminal display.
pub fn render_report(result: &ComputerInfoResult) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "Computer: {}", result.computer_name);
    let _ = writeln!(out, "--- Hardware ---");
    let _ = writeln!(out, "  Manufacturer:   {}", result.manufacturer);
    let _ = writeln!(out, "  Model:          {}", result.model);
    let _ = writeln!(out, "  Serial number:  {}", result.serial_number);
    let _ = writeln!(out, "  Asset tag:      {}", result.asset_tag);
    let _ = writeln!(out, "  BIOS version:   {}", result.bios_version);
    let _ = writeln!(out, "  BIOS released:  {} ({})", result.bios_release_date, result.bios_age);
    let _ = writeln!(out, "  Processor:      {}", result.processor);
    let _ = writeln!(out, "  Local time:     {}", result.local_time);
    let _ = writeln!(out, "  Uptime:         {}", result.uptime);

    let _ = writeln!(out, "--- Operating system ---");
    let _ = writeln!(out, "  Name:           {}", result.os_name);
    let _ = writeln!(out, "  Version:        {}", result.os_version);
    let _ = writeln!(out, "  Architecture:   {}", result.os_architecture);
    let _ = writeln!(out, "  Installed:      {}", result.os_install_date);

    let _ = writeln!(out, "--- Network adapters ({}) ---", result.network_adapters.len());
    for adapter in &result.network_adapters {
        let _ = writeln!(out, "  {} [{}]", adapter.name, adapter.adapter_type);
        let _ = writeln!(out, "    MAC:         {}", adapter.mac_address);
        let _ = writeln!(out, "    IPv4:        {}", adapter.ipv4_address);
        let _ = writeln!(out, "    Subnet:      {}", adapter.subnet_mask);
        let _ = writeln!(out, "    Gateways:    {}", adapter.gateways);
        let _ = writeln!(out, "    DNS:         {}", adapter.dns_servers);
        let _ = writeln!(out, "    Speed:       {}", adapter.link_speed);
        let _ = writeln!(out, "    Status:      {}", adapter.connection_status);
        if adapter.dhcp_enabled {
            let _ = writeln!(
                out,
                "    DHCP:        {} (lease {} - {})",
                adapter.dhcp_server, adapter.dhcp_lease_start, adapter.dhcp_lease_expiry
            );
        }
    }

    let _ = writeln!(out, "--- Physical disks ({}) ---", result.physical_disks.len());
    for disk in &result.physical_disks {
        let _ = writeln!(
            out,
            "  {} {} [{}] {} firmware {}",
            disk.name, disk.model, disk.bus_type, disk.capacity, disk.firmware_version
        );
        for partition in &disk.partitions {
            let boot = if partition.is_boot_partition { " (boot)" } else { "" };
            let _ = writeln!(
                out,
                "    {}{} {} {}",
                partition.name, boot, partition.partition_type, partition.size
            );
            for volume in &partition.logical_volumes {
                let _ = writeln!(
                    out,
                    "      {} {} {} {} free of {} ({}%)",
                    volume.volume_id,
                    volume.file_system,
                    volume.drive_type,
                    volume.free_space,
                    volume.capacity,
                    volume.percent_free
                );
            }
        }
    }

    let _ = writeln!(out, "--- Memory modules ({}) ---", result.memory_modules.len());
    for module in &result.memory_modules {
        let _ = writeln!(
            out,
            "  {}: {} {} {} {} {}",
            module.slot,
            module.manufacturer,
            module.part_number,
            module.capacity,
            module.speed,
            module.memory_type
        );
    }

    if let Some(directory) = &result.directory_membership {
        let _ = writeln!(out, "--- Directory membership ---");
        let _ = writeln!(out, "  Name:           {}", directory.name);
        let _ = writeln!(out, "  DN:             {}", directory.distinguished_name);
        let _ = writeln!(out, "  DNS host name:  {}", directory.dns_host_name);
        let _ = writeln!(out, "  Enabled:        {}", directory.enabled);
        let _ = writeln!(out, "  Last logon:     {}", directory.last_logon);
    }

    if result.has_error() {
        let _ = writeln!(out, "--- Collection errors ---");
        for line in result.error_message.lines() {
            let _ = writeln!(out, "  {}", line);
        }
    }

    out
}
