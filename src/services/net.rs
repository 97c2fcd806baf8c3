//! IPv6 address discovery from the kernel's interface table.

use std::fs;
use std::net::Ipv6Addr;
use std::path::Path;

use tracing::warn;

use crate::domain::AppError;

const SCOPE_GLOBAL: &str = "00";

/// Parse `/proc/net/if_inet6` and return the globally scoped addresses in
/// canonical form, preserving the kernel's order and dropping any address
/// in `exclude`.
///
/// Each row is `address ifindex prefixlen scope flags ifname` with the
/// address as 32 hex digits. Link-local and loopback rows carry a non-zero
/// scope and are skipped.
pub fn global_ipv6_addresses(table: &Path, exclude: &[String]) -> Result<Vec<String>, AppError> {
    let contents = fs::read_to_string(table)?;
    let excluded: Vec<Ipv6Addr> = exclude
        .iter()
        .filter_map(|addr| match addr.parse::<Ipv6Addr>() {
            Ok(parsed) => Some(parsed),
            Err(_) => {
                warn!(address = %addr, "ignoring unparseable excluded address");
                None
            }
        })
        .collect();

    let mut addresses = Vec::new();
    for line in contents.lines() {
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() < 6 || fields[3] != SCOPE_GLOBAL {
            continue;
        }
        let Ok(raw) = u128::from_str_radix(fields[0], 16) else {
            continue;
        };
        let addr = Ipv6Addr::from(raw);
        if excluded.contains(&addr) {
            continue;
        }
        addresses.push(addr.to_string());
    }

    if addresses.is_empty() {
        return Err(AppError::NoIpv6Address);
    }
    Ok(addresses)
}
