//! Numeric-code-to-label tables for the WMI properties that report
//! enumerations as integers. Pure data: every unmapped code falls back to
//! "Unknown", never to an error.

use crate::constants::UNKNOWN_LABEL;

/// `MSFT_PhysicalDisk.BusType`
pub fn bus_type_label(code: u16) -> &'static str {
    match code {
        0 => UNKNOWN_LABEL,
        1 => "SCSI",
        2 => "ATAPI",
        3 => "ATA",
        4 => "IEEE 1394",
        5 => "SSA",
        6 => "Fibre Channel",
        7 => "USB",
        8 => "RAID",
        9 => "iSCSI",
        10 => "SAS",
        11 => "SATA",
        12 => "SD Card",
        13 => "MMC",
        14 => "Reserved",
        15 => "File-Backed Virtual",
        16 => "Storage Spaces",
        17 => "NVMe",
        18 => "Reserved",
        _ => UNKNOWN_LABEL,
    }
}

/// `Win32_LogicalDisk.DriveType`
pub fn drive_type_label(code: u32) -> &'static str {
    match code {
        0 => UNKNOWN_LABEL,
        1 => "No Root Directory",
        2 => "Removable Disk",
        3 => "Local Disk",
        4 => "Network Drive",
        5 => "Compact Disc",
        6 => "RAM Disk",
        _ => UNKNOWN_LABEL,
    }
}

/// `Win32_LogicalDisk.MediaType`
pub fn media_type_label(code: u32) -> &'static str {
    match code {
        0 => "Format is unknown",
        1 => "5.25\" Floppy - 1.2 MB",
        2 => "3.5\" Floppy - 1.44 MB",
        3 => "3.5\" Floppy - 2.88 MB",
        4 => "3.5\" Floppy - 20.8 MB",
        5 => "3.5\" Floppy - 720 KB",
        6 => "5.25\" Floppy - 360 KB",
        7 => "5.25\" Floppy - 320 KB",
        8 => "5.25\" Floppy - 320 KB 1024 bytes/sector",
        9 => "5.25\" Floppy - 180 KB",
        10 => "5.25\" Floppy - 160 KB",
        11 => "Removable media other than floppy",
        12 => "Fixed hard disk media",
        13 => "3.5\" Floppy - 120 MB",
        14 => "3.5\" Floppy - 640 KB",
        15 => "5.25\" Floppy - 640 KB",
        16 => "5.25\" Floppy - 720 KB",
        17 => "3.5\" Floppy - 1.2 MB",
        18 => "3.5\" Floppy - 1.23 MB",
        19 => "5.25\" Floppy - 1.23 MB",
        20 => "3.5\" Floppy - 128 MB M.O.",
        21 => "3.5\" Floppy - 230 MB M.O.",
        22 => "8\" Floppy - 256 KB",
        _ => UNKNOWN_LABEL,
    }
}

/// `Win32_PhysicalMemory.FormFactor`
pub fn form_factor_label(code: u16) -> &'static str {
    match code {
        0 => UNKNOWN_LABEL,
        1 => "Other",
        2 => "SIP",
        3 => "DIP",
        4 => "ZIP",
        5 => "SOJ",
        6 => "Proprietary",
        7 => "SIMM",
        8 => "DIMM",
        9 => "TSOP",
        10 => "PGA",
        11 => "RIMM",
        12 => "SODIMM",
        13 => "SRIMM",
        14 => "SMD",
        15 => "SSMP",
        16 => "QFP",
        17 => "TQFP",
        18 => "SOIC",
        19 => "LCC",
        20 => "PLCC",
        21 => "BGA",
        22 => "FPBGA",
        23 => "LGA",
        _ => UNKNOWN_LABEL,
    }
}

/// `Win32_PhysicalMemory.MemoryType` (the SMBIOS type list; 23 is a gap)
pub fn memory_type_label(code: u16) -> &'static str {
    match code {
        0 => UNKNOWN_LABEL,
        1 => "Other",
        2 => "DRAM",
        3 => "Synchronous DRAM",
        4 => "Cache DRAM",
        5 => "EDO",
        6 => "EDRAM",
        7 => "VRAM",
        8 => "SRAM",
        9 => "RAM",
        10 => "ROM",
        11 => "Flash",
        12 => "EEPROM",
        13 => "FEPROM",
        14 => "EPROM",
        15 => "CDRAM",
        16 => "3DRAM",
        17 => "SDRAM",
        18 => "SGRAM",
        19 => "RDRAM",
        20 => "DDR",
        21 => "DDR2",
        22 => "DDR2 FB-DIMM",
        24 => "DDR3",
        25 => "FBD2",
        26 => "DDR4",
        _ => UNKNOWN_LABEL,
    }
}

/// `Win32_NetworkAdapter.NetConnectionStatus`
pub fn connection_status_label(code: u16) -> &'static str {
    match code {
        0 => "Disconnected",
        1 => "Connecting",
        2 => "Connected",
        3 => "Disconnecting",
        4 => "Hardware not present",
        5 => "Hardware disabled",
        6 => "Hardware malfunction",
        7 => "Media disconnected",
        8 => "Authenticating",
        9 => "Authentication succeeded",
        10 => "Authentication failed",
        11 => "Invalid address",
        12 => "Credentials required",
        _ => UNKNOWN_LABEL,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_codes() {
        assert_eq!(bus_type_label(11), "SATA");
        assert_eq!(bus_type_label(17), "NVMe");
        assert_eq!(drive_type_label(3), "Local Disk");
        assert_eq!(media_type_label(12), "Fixed hard disk media");
        assert_eq!(form_factor_label(12), "SODIMM");
        assert_eq!(memory_type_label(26), "DDR4");
        assert_eq!(connection_status_label(2), "Connected");
    }

    #[test]
    fn test_out_of_range_codes_fall_back_to_unknown() {
        assert_eq!(bus_type_label(19), UNKNOWN_LABEL);
        assert_eq!(bus_type_label(u16::MAX), UNKNOWN_LABEL);
        assert_eq!(drive_type_label(7), UNKNOWN_LABEL);
        assert_eq!(media_type_label(23), UNKNOWN_LABEL);
        assert_eq!(form_factor_label(24), UNKNOWN_LABEL);
        assert_eq!(memory_type_label(23), UNKNOWN_LABEL); // the SMBIOS gap
        assert_eq!(memory_type_label(27), UNKNOWN_LABEL);
        assert_eq!(connection_status_label(13), UNKNOWN_LABEL);
    }
}
