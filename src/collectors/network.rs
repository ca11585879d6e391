//! Network adapter section: filter the adapter list down to real NICs and
//! join each one to its IP configuration.

use anyhow::Result;
use log::{debug, warn};

use crate::collectors::lookups::connection_status_label;
use crate::constants::{LIST_SEPARATOR, NOT_CONFIGURED};
use crate::facts::rows::{AdapterConfigurationRow, NetworkAdapterRow};
use crate::facts::FactsProvider;
use crate::models::{ComputerInfoResult, NetworkAdapterInfo};
use crate::utils::dates::parse_cim_datetime;
use crate::utils::units::link_speed;

/// Substrings that mark an adapter as NIC-like. Matching is against the
/// adapter type, description, and name together.
const NIC_KEYWORDS: &[&str] = &["ethernet", "wireless", "wi-fi", "802.11", "network"];

/// Substrings in the PNP device path or description that identify
/// software adapters (loopback, tunnels, TAP/VPN drivers, hypervisors).
const VIRTUAL_MARKERS: &[&str] = &[
    "loopback", "virtual", "tunnel", "tunneling", "tap-", "vpn", "isatap", "teredo", "pseudo",
];

const WIRELESS_MARKERS: &[&str] = &["wireless", "wi-fi", "802.11"];

pub fn apply(provider: &dyn FactsProvider, result: &mut ComputerInfoResult) {
    if let Err(e) = gather(provider, result) {
        warn!("Network section failed: {:#}", e);
        result.push_error("Network adapters", &format!("{:#}", e));
    }
}

fn gather(provider: &dyn FactsProvider, result: &mut ComputerInfoResult) -> Result<()> {
    let adapters = provider.network_adapters()?;
    let configurations = provider.adapter_configurations()?;

    for adapter in adapters.iter().filter(|a| is_real_nic(a)) {
        let configuration = adapter
            .index
            .and_then(|index| configurations.iter().find(|c| c.index == Some(index)));
        if configuration.is_none() {
            debug!(
                "No IP configuration row for adapter {:?}",
                adapter.name.as_deref().unwrap_or("<unnamed>")
            );
        }
        result
            .network_adapters
            .push(build_adapter(adapter, configuration));
    }
    Ok(())
}

/// Heuristic NIC filter: keep adapters that look like Ethernet/wireless
/// hardware, drop software adapters and anything flagged non-physical.
fn is_real_nic(adapter: &NetworkAdapterRow) -> bool {
    let haystack = format!(
        "{} {} {}",
        adapter.adapter_type.as_deref().unwrap_or(""),
        adapter.description.as_deref().unwrap_or(""),
        adapter.name.as_deref().unwrap_or("")
    )
    .to_lowercase();

    if !NIC_KEYWORDS.iter().any(|kw| haystack.contains(kw)) {
        return false;
    }

    let device_path = adapter.pnp_device_id.as_deref().unwrap_or("").to_lowercase();
    let description = adapter.description.as_deref().unwrap_or("").to_lowercase();
    if VIRTUAL_MARKERS
        .iter()
        .any(|marker| device_path.contains(marker) || description.contains(marker))
    {
        return false;
    }
    // Software-enumerated devices live under ROOT\
    if device_path.starts_with("root\\") {
        return false;
    }

    adapter.physical_adapter != Some(false)
}

fn is_wireless(adapter: &NetworkAdapterRow) -> bool {
    let haystack = format!(
        "{} {} {}",
        adapter.adapter_type.as_deref().unwrap_or(""),
        adapter.description.as_deref().unwrap_or(""),
        adapter.name.as_deref().unwrap_or("")
    )
    .to_lowercase();
    WIRELESS_MARKERS.iter().any(|marker| haystack.contains(marker))
}

fn build_adapter(
    adapter: &NetworkAdapterRow,
    configuration: Option<&AdapterConfigurationRow>,
) -> NetworkAdapterInfo {
    let mut info = NetworkAdapterInfo {
        name: adapter.name.clone().unwrap_or_default(),
        mac_address: adapter.mac_address.clone().unwrap_or_default(),
        link_speed: adapter.speed.map(link_speed).unwrap_or_default(),
        adapter_type: if is_wireless(adapter) {
            "Wireless".to_string()
        } else {
            adapter
                .adapter_type
                .clone()
                .unwrap_or_else(|| "Ethernet".to_string())
        },
        connection_status: adapter
            .net_connection_status
            .map(connection_status_label)
            .unwrap_or_default()
            .to_string(),
        ..Default::default()
    };

    let configuration = match configuration {
        Some(c) => c,
        None => {
            info.ipv4_address = NOT_CONFIGURED.to_string();
            return info;
        }
    };

    // IPAddress and IPSubnet are parallel arrays; find the IPv4 slot
    let addresses = configuration.ip_address.as_deref().unwrap_or(&[]);
    if let Some(slot) = addresses.iter().position(|a| a.contains('.')) {
        info.ipv4_address = addresses[slot].clone();
        info.subnet_mask = configuration
            .ip_subnet
            .as_deref()
            .and_then(|subnets| subnets.get(slot))
            .cloned()
            .unwrap_or_default();
    } else {
        info.ipv4_address = NOT_CONFIGURED.to_string();
    }

    info.gateways = join_list(configuration.default_ip_gateway.as_deref());
    info.dns_servers = join_list(configuration.dns_server_search_order.as_deref());
    info.dhcp_enabled = configuration.dhcp_enabled.unwrap_or(false);
    info.dhcp_server = configuration.dhcp_server.clone().unwrap_or_default();
    info.dhcp_lease_start = format_lease(configuration.dhcp_lease_obtained.as_deref());
    info.dhcp_lease_expiry = format_lease(configuration.dhcp_lease_expires.as_deref());
    info
}

fn join_list(values: Option<&[String]>) -> String {
    values.unwrap_or(&[]).join(LIST_SEPARATOR)
}

fn format_lease(raw: Option<&str>) -> String {
    raw.and_then(parse_cim_datetime)
        .map(|dt| dt.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::facts::fixture::FixtureProvider;

    #[test]
    fn test_loopback_adapter_is_excluded() {
        let provider = FixtureProvider::workstation();
        let mut result = ComputerInfoResult::new("WS-0042");
        apply(&provider, &mut result);

        assert!(!result.has_error());
        assert_eq!(result.network_adapters.len(), 2);
        assert!(result
            .network_adapters
            .iter()
            .all(|a| !a.name.contains("Loopback")));
    }

    #[test]
    fn test_wifi_adapter_is_marked_wireless() {
        let provider = FixtureProvider::workstation();
        let mut result = ComputerInfoResult::new("WS-0042");
        apply(&provider, &mut result);

        let wifi = result
            .network_adapters
            .iter()
            .find(|a| a.name.contains("Wi-Fi 6 AX201"))
            .expect("Wi-Fi adapter present");
        assert_eq!(wifi.adapter_type, "Wireless");
        assert_eq!(wifi.connection_status, "Media disconnected");
    }

    #[test]
    fn test_configured_adapter_join() {
        let provider = FixtureProvider::workstation();
        let mut result = ComputerInfoResult::new("WS-0042");
        apply(&provider, &mut result);

        let wired = &result.network_adapters[0];
        assert_eq!(wired.ipv4_address, "10.20.30.42");
        assert_eq!(wired.subnet_mask, "255.255.255.0");
        assert_eq!(wired.gateways, "10.20.30.1");
        assert_eq!(wired.dns_servers, "10.20.0.10 | 10.20.0.11");
        assert!(wired.dhcp_enabled);
        assert_eq!(wired.dhcp_server, "10.20.0.5");
        assert_eq!(wired.dhcp_lease_start, "2024-01-15 10:30:00");
        assert_eq!(wired.dhcp_lease_expiry, "2024-01-16 10:30:00");
        assert_eq!(wired.link_speed, "1000 MB/second");
    }

    #[test]
    fn test_adapter_without_configuration_row_is_kept() {
        let provider = FixtureProvider::workstation();
        let mut result = ComputerInfoResult::new("WS-0042");
        apply(&provider, &mut result);

        let wifi = result
            .network_adapters
            .iter()
            .find(|a| a.name.contains("Wi-Fi"))
            .unwrap();
        assert_eq!(wifi.ipv4_address, NOT_CONFIGURED);
        assert!(wifi.gateways.is_empty());
    }

    #[test]
    fn test_virtual_and_tunnel_markers_excluded() {
        let tap = NetworkAdapterRow {
            name: Some("TAP-Windows Adapter V9".to_string()),
            description: Some("TAP-Windows Adapter V9".to_string()),
            adapter_type: Some("Ethernet 802.3".to_string()),
            pnp_device_id: Some(r"ROOT\NET\0001".to_string()),
            ..Default::default()
        };
        assert!(!is_real_nic(&tap));

        let hyper_v = NetworkAdapterRow {
            name: Some("Hyper-V Virtual Ethernet Adapter".to_string()),
            description: Some("Hyper-V Virtual Ethernet Adapter".to_string()),
            adapter_type: Some("Ethernet 802.3".to_string()),
            pnp_device_id: Some(r"ROOT\VMS_MP\0000".to_string()),
            physical_adapter: Some(true),
            ..Default::default()
        };
        assert!(!is_real_nic(&hyper_v));

        let bluetooth = NetworkAdapterRow {
            name: Some("Bluetooth Device (Personal Area Network)".to_string()),
            description: Some("Bluetooth Device (Personal Area Network)".to_string()),
            adapter_type: Some("Ethernet 802.3".to_string()),
            pnp_device_id: Some(r"BTH\MS_BTHPAN".to_string()),
            physical_adapter: Some(true),
            ..Default::default()
        };
        // "Network" keyword admits it, no virtual marker; the heuristic keeps it
        assert!(is_real_nic(&bluetooth));
    }
}
