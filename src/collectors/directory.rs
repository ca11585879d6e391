//! Active Directory membership section.
//!
//! Searches the default naming context for a computer account whose DNS
//! host name starts with the machine name. Only runs for local-mode
//! targets when the caller asks for it; a machine that simply is not
//! domain-joined produces no entry and no error.
//!
//! The search goes through PowerShell's `[adsisearcher]` (an ADSI wrapper
//! that needs no RSAT modules) emitting compact JSON; the JSON decoding is
//! plain portable code so it stays testable off-domain and off-Windows.

use anyhow::Result;
use log::warn;
use serde_json::Value;

use crate::models::{ComputerInfoResult, DirectoryMembershipInfo};
use crate::utils::dates::filetime_to_datetime;

/// Account-control bit that marks a disabled account
#[cfg_attr(not(target_os = "windows"), allow(dead_code))]
const UF_ACCOUNT_DISABLE: u64 = 0x2;

pub fn apply(result: &mut ComputerInfoResult) {
    match search_directory(&result.computer_name) {
        Ok(Some(membership)) => result.directory_membership = Some(membership),
        Ok(None) => {}
        Err(e) => {
            warn!("Directory lookup failed: {:#}", e);
            result.push_error("Directory membership", &format!("{:#}", e));
        }
    }
}

#[cfg(target_os = "windows")]
fn search_directory(machine_name: &str) -> Result<Option<DirectoryMembershipInfo>> {
    use anyhow::{bail, Context};
    use std::process::Command;

    if machine_name.is_empty() {
        return Ok(None);
    }
    // LDAP filter metacharacters in a hostname would break the query
    let sanitized: String = machine_name
        .chars()
        .filter(|c| !matches!(c, '(' | ')' | '*' | '\\' | '\0'))
        .collect();

    let script = format!(
        "$searcher = [adsisearcher]'(&(objectCategory=computer)(dNSHostName={name}*))'; \
         $entry = $searcher.FindOne(); \
         if ($entry) {{ \
            $p = $entry.Properties; \
            [pscustomobject]@{{ \
                name = $p['name'][0]; \
                distinguishedname = $p['distinguishedname'][0]; \
                dnshostname = $p['dnshostname'][0]; \
                useraccountcontrol = $p['useraccountcontrol'][0]; \
                lastlogontimestamp = $p['lastlogontimestamp'][0] \
            }} | ConvertTo-Json -Compress \
         }}",
        name = sanitized
    );

    let output = Command::new("powershell")
        .args(["-NoProfile", "-NonInteractive", "-Command", &script])
        .output()
        .context("Failed to run directory search")?;
    if !output.status.success() {
        bail!(
            "Directory search failed: {}",
            String::from_utf8_lossy(&output.stderr).trim()
        );
    }

    let raw = String::from_utf8_lossy(&output.stdout);
    let raw = raw.trim();
    if raw.is_empty() {
        // No matching computer account; not an error
        return Ok(None);
    }
    Ok(parse_directory_entry(raw))
}

#[cfg(not(target_os = "windows"))]
fn search_directory(_machine_name: &str) -> Result<Option<DirectoryMembershipInfo>> {
    anyhow::bail!("Directory lookup is only available on Windows")
}

/// Decode the JSON emitted by the directory search into a membership
/// record. Numeric attributes may arrive as numbers or strings depending
/// on the provider, so both are accepted.
#[cfg_attr(not(target_os = "windows"), allow(dead_code))]
fn parse_directory_entry(raw: &str) -> Option<DirectoryMembershipInfo> {
    let value: Value = serde_json::from_str(raw).ok()?;

    let text = |key: &str| -> String {
        value
            .get(key)
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string()
    };
    let number = |key: &str| -> Option<u64> {
        match value.get(key) {
            Some(Value::Number(n)) => n.as_u64(),
            Some(Value::String(s)) => s.parse().ok(),
            _ => None,
        }
    };
    let signed = |key: &str| -> Option<i64> {
        match value.get(key) {
            Some(Value::Number(n)) => n.as_i64(),
            Some(Value::String(s)) => s.parse().ok(),
            _ => None,
        }
    };

    Some(DirectoryMembershipInfo {
        name: text("name"),
        distinguished_name: text("distinguishedname"),
        dns_host_name: text("dnshostname"),
        enabled: number("useraccountcontrol")
            .map(|uac| uac & UF_ACCOUNT_DISABLE == 0)
            .unwrap_or(true),
        last_logon: signed("lastlogontimestamp")
            .and_then(filetime_to_datetime)
            .map(|dt| dt.format("%Y-%m-%d %H:%M:%S").to_string())
            .unwrap_or_default(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_directory_entry() {
        let raw = r#"{"name":"WS-0042","distinguishedname":"CN=WS-0042,OU=Workstations,DC=corp,DC=example,DC=com","dnshostname":"ws-0042.corp.example.com","useraccountcontrol":4096,"lastlogontimestamp":133485696000000000}"#;
        let entry = parse_directory_entry(raw).expect("parsed entry");

        assert_eq!(entry.name, "WS-0042");
        assert!(entry.distinguished_name.starts_with("CN=WS-0042"));
        assert_eq!(entry.dns_host_name, "ws-0042.corp.example.com");
        assert!(entry.enabled);
        assert!(entry.last_logon.starts_with("2024-"));
    }

    #[test]
    fn test_disabled_account_bit() {
        let raw = r#"{"name":"OLD-PC","distinguishedname":"CN=OLD-PC","dnshostname":"old-pc.corp.example.com","useraccountcontrol":"4098","lastlogontimestamp":"0"}"#;
        let entry = parse_directory_entry(raw).expect("parsed entry");

        assert!(!entry.enabled);
        assert!(entry.last_logon.is_empty());
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse_directory_entry("not json").is_none());
    }
}
