//! Integration tests for vlsm-planner
//!
//! These tests exercise the public allocation API end to end.

use std::net::Ipv4Addr;
use vlsm_planner::output::{to_json, write_csv};
use vlsm_planner::{allocate, allocate_network, Ipv4, VlsmError};

#[test]
fn test_exact_fit_example() {
    let allocation = allocate("192.168.1.0/24", &[100, 50, 20]).expect("allocation should fit");

    let summary: Vec<(String, u64)> = allocation
        .subnets
        .iter()
        .map(|s| (s.prefix_label(), s.available_hosts))
        .collect();
    assert_eq!(
        summary,
        vec![
            ("/25".to_string(), 126),
            ("/26".to_string(), 62),
            ("/27".to_string(), 30)
        ]
    );

    let base = Ipv4::new("192.168.1.0/24").unwrap();
    for s in &allocation.subnets {
        assert!(base.contains(s.network.lo()) && base.contains(s.broadcast));
    }
}

#[test]
fn test_insufficient_space_example() {
    let err = allocate("10.0.0.0/30", &[10]).unwrap_err();
    assert!(matches!(
        err,
        VlsmError::InsufficientSpace {
            requested: 10,
            required_prefix: 28,
            available_addresses: 4
        }
    ));
}

#[test]
fn test_missing_prefix_example() {
    assert!(matches!(
        allocate("10.0.0.0", &[5]),
        Err(VlsmError::MissingPrefix { .. })
    ));
}

#[test]
fn test_duplicate_requests_example() {
    let allocation = allocate("10.0.0.0/24", &[10, 10]).unwrap();
    assert_eq!(allocation.subnets.len(), 2);
    let (a, b) = (&allocation.subnets[0], &allocation.subnets[1]);
    assert_eq!((a.prefix, b.prefix), (28, 28));
    assert_ne!(a.network, b.network);
    assert!(!a.network.overlaps(&b.network));
}

#[test]
fn test_allocate_network_matches_string_form() {
    let base = Ipv4 {
        addr: Ipv4Addr::new(172, 16, 9, 200),
        mask: 21,
    };
    assert_eq!(
        allocate_network(base, &[500, 3, 60]),
        allocate("172.16.8.0/21", &[500, 3, 60])
    );
}

#[test]
fn test_backbone_plan() {
    // Typical campus plan: two LANs, a server segment and point-to-point links.
    let requests = [200, 120, 30, 2, 2, 2];
    let allocation = allocate("10.20.0.0/23", &requests).unwrap();
    let cidrs: Vec<String> = allocation
        .subnets
        .iter()
        .map(|s| s.network.to_string())
        .collect();
    assert_eq!(
        cidrs,
        [
            "10.20.0.0/24",
            "10.20.1.0/25",
            "10.20.1.128/27",
            "10.20.1.160/30",
            "10.20.1.164/30",
            "10.20.1.168/30",
        ]
    );
    assert_eq!(allocation.free_addresses(), 512 - 256 - 128 - 32 - 12);
}

#[test]
fn test_renderers_agree_on_rows() {
    let allocation = allocate("192.168.0.0/22", &[300, 100]).unwrap();

    let mut csv = Vec::new();
    write_csv(&mut csv, &allocation).unwrap();
    let csv = String::from_utf8(csv).unwrap();
    assert_eq!(csv.lines().count(), allocation.subnets.len() + 1);

    let json: serde_json::Value = serde_json::from_str(&to_json(&allocation).unwrap()).unwrap();
    assert_eq!(
        json["subnets"].as_array().map(|a| a.len()),
        Some(allocation.subnets.len())
    );
    assert!(csv.contains("192.168.0.0/23"));
    assert_eq!(json["subnets"][0]["network"], "192.168.0.0/23");
}
