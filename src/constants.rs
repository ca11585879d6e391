//! Global constants for the rust-inventory application.
//!
//! This module centralizes hardcoded values shared by the collection
//! sections so behavior changes live in one place.

// Sentinels
/// Value reported when the asset tag cannot be read from the registry
pub const ASSET_TAG_UNAVAILABLE: &str = "N/A";

/// Value reported for an adapter that has no IP configuration row
pub const NOT_CONFIGURED: &str = "Not configured";

/// Fallback label for numeric codes outside a lookup table
pub const UNKNOWN_LABEL: &str = "Unknown";

// Asset tag registry location (written by the imaging process)
pub const ASSET_TAG_KEY: &str = r"SOFTWARE\ITInventory";
pub const ASSET_TAG_VALUE: &str = "AssetTag";

// Unit conversion
/// Decimal gigabyte divisor used for disk and memory capacities
pub const GB_DIVISOR: f64 = 1_000_000_000.0;

/// Divisor applied to adapter speed in bits/second
pub const LINK_SPEED_DIVISOR: f64 = 1_000_000.0;

/// Average year length used for BIOS age calculation
pub const DAYS_PER_YEAR: f64 = 365.25;

// Separators
/// Separator for multi-valued adapter fields (gateways, DNS servers)
pub const LIST_SEPARATOR: &str = " | ";

// WMI namespaces
pub const CIMV2_NAMESPACE: &str = r"root\cimv2";
pub const STORAGE_NAMESPACE: &str = r"root\Microsoft\Windows\Storage";

// Default file names
pub const DEFAULT_CONFIG_NAME: &str = "inventory.yaml";
