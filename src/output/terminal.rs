//! Terminal output.
//!
//! Human readable allocation report and failure messages.

use crate::error::VlsmError;
use crate::models::{Allocation, Ipv4};
use crate::processing::required_addresses;
use colored::Colorize;
use std::io::{self, Write};

/// Left-align a label to a fixed width, e.g. `"Mask:"` -> `"Mask:              "`.
pub fn format_label(label: &str, width: usize) -> String {
    format!("{label:<width$}")
}

const LABEL_WIDTH: usize = 19;

/// Write the allocation as one labelled block per subnet, in request order.
pub fn write_report<W: Write>(w: &mut W, allocation: &Allocation) -> io::Result<()> {
    log::info!(
        "#Start write_report() {} subnets in {}",
        allocation.subnets.len(),
        allocation.base
    );

    writeln!(w, "\n{}", "VLSM allocation results:".bold())?;
    writeln!(w, "{}", "=".repeat(60))?;

    for (i, s) in allocation.subnets.iter().enumerate() {
        writeln!(
            w,
            "\n{}",
            format!("Subnet {} (needs {} hosts):", i + 1, s.hosts_needed).green()
        )?;
        writeln!(w, "{}{}", format_label("Network address:", LABEL_WIDTH), s.network)?;
        writeln!(w, "{}{}", format_label("Mask:", LABEL_WIDTH), s.mask)?;
        writeln!(
            w,
            "{}{} - {}",
            format_label("Address range:", LABEL_WIDTH),
            s.first_host,
            s.last_host
        )?;
        writeln!(w, "{}{}", format_label("Broadcast:", LABEL_WIDTH), s.broadcast)?;
        writeln!(
            w,
            "{}{}",
            format_label("Available hosts:", LABEL_WIDTH),
            s.available_hosts
        )?;
    }

    if !allocation.omitted.is_empty() {
        let positions: Vec<String> = allocation
            .omitted
            .iter()
            .map(|p| (p + 1).to_string())
            .collect();
        writeln!(
            w,
            "\n{} zero host requests not allocated (subnet {})",
            "NOTE".on_yellow(),
            positions.join(", ")
        )?;
    }

    writeln!(
        w,
        "\n{} of {} addresses in {} used, {} free",
        allocation.used_addresses,
        allocation.total_addresses,
        allocation.base,
        allocation.free_addresses()
    )?;

    Ok(())
}

/// Write an actionable message for a failed allocation.
///
/// `base` and `requests` are the inputs of the failed call and are used for
/// the advisory totals only.
pub fn write_error<W: Write>(
    w: &mut W,
    err: &VlsmError,
    base: &str,
    requests: &[u32],
) -> io::Result<()> {
    log::error!("Allocation failed: {err}");
    writeln!(w, "\n{}", format!("ERROR: {err}").red())?;

    match err {
        VlsmError::MissingPrefix { .. } => {
            writeln!(w, "Hint: add the prefix length, e.g. {}/24", base.trim())?;
        }
        VlsmError::InvalidAddress { .. } | VlsmError::InvalidPrefix { .. } => {
            writeln!(w, "Hint: use CIDR notation, e.g. 10.0.0.0/16")?;
        }
        VlsmError::InsufficientSpace { .. } | VlsmError::HostCountTooLarge { .. } => {
            writeln!(w, "Hint: check that the base network is large enough")?;
            if let Ok(net) = Ipv4::new(base) {
                let net = net.network();
                writeln!(w, "Network {net} offers {} addresses", net.num_addresses())?;
            }
            writeln!(w, "Total required: {}", required_addresses(requests))?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::allocate;

    fn render(allocation: &Allocation) -> String {
        let mut buf = Vec::new();
        write_report(&mut buf, allocation).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_format_label() {
        assert_eq!(format_label("Mask:", 8), "Mask:   ");
        assert_eq!(format_label("Broadcast:", 4), "Broadcast:");
    }

    #[test]
    fn test_write_report_blocks() {
        let allocation = allocate("192.168.1.0/24", &[100, 50]).unwrap();
        let out = render(&allocation);

        assert!(out.contains("Subnet 1 (needs 100 hosts):"));
        assert!(out.contains("Subnet 2 (needs 50 hosts):"));
        assert!(out.contains("192.168.1.0/25"));
        assert!(out.contains("255.255.255.192"));
        assert!(out.contains("192.168.1.129 - 192.168.1.190"));
        assert!(out.contains("192.168.1.191"));
        assert!(out.contains("192 of 256 addresses in 192.168.1.0/24 used, 64 free"));
        assert!(!out.contains("zero host requests"));
    }

    #[test]
    fn test_write_report_mentions_omitted() {
        let allocation = allocate("10.0.0.0/24", &[4, 0]).unwrap();
        let out = render(&allocation);
        assert!(out.contains("zero host requests not allocated (subnet 2)"));
    }

    #[test]
    fn test_write_error_insufficient_space() {
        let requests = [10];
        let err = allocate("10.0.0.0/30", &requests).unwrap_err();
        let mut buf = Vec::new();
        write_error(&mut buf, &err, "10.0.0.0/30", &requests).unwrap();
        let out = String::from_utf8(buf).unwrap();

        assert!(out.contains("insufficient space for 10 hosts (needs /28, 4 addresses left)"));
        assert!(out.contains("Network 10.0.0.0/30 offers 4 addresses"));
        assert!(out.contains("Total required: 16"));
    }

    #[test]
    fn test_write_error_missing_prefix() {
        let err = allocate("10.0.0.0", &[5]).unwrap_err();
        let mut buf = Vec::new();
        write_error(&mut buf, &err, "10.0.0.0", &[5]).unwrap();
        let out = String::from_utf8(buf).unwrap();
        assert!(out.contains("Hint: add the prefix length, e.g. 10.0.0.0/24"));
        assert!(!out.contains("Total required"));
    }
}
