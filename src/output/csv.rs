//! CSV output of an allocation.

use crate::models::{AllocatedSubnet, Allocation};
use itertools::Itertools;
use std::io::{self, Write};

pub const CSV_HEADER: [&str; 8] = [
    "subnet",
    "hosts_needed",
    "network",
    "mask",
    "first_ip",
    "last_ip",
    "broadcast",
    "available_hosts",
];

/// Write the allocation as CSV, one row per subnet in request order.
pub fn write_csv<W: Write>(w: &mut W, allocation: &Allocation) -> io::Result<()> {
    log::info!(
        "#Start write_csv() {} subnets",
        allocation.subnets.len()
    );
    writeln!(w, "{}", CSV_HEADER.iter().map(|h| escape_csv_field(h)).join(","))?;
    for s in &allocation.subnets {
        writeln!(w, "{}", csv_row(s))?;
    }
    Ok(())
}

fn csv_row(s: &AllocatedSubnet) -> String {
    [
        format!("Subnet {}", s.id),
        s.hosts_needed.to_string(),
        s.network.to_string(),
        s.mask.to_string(),
        s.first_host.to_string(),
        s.last_host.to_string(),
        s.broadcast.to_string(),
        s.available_hosts.to_string(),
    ]
    .iter()
    .map(|field| escape_csv_field(field))
    .join(",")
}

/// Quote a field when it contains a comma or double quote.
pub fn escape_csv_field(input: &str) -> String {
    if input.contains(',') || input.contains('"') {
        // Enclose in double quotes and double any quotes inside.
        // Excel does not like spaces after the comma between fields.
        let escaped = input.replace('"', "\"\"");
        format!("\"{}\"", escaped)
    } else {
        input.to_string()
    }
}
