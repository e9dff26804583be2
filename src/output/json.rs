//! JSON output of an allocation.

use crate::models::Allocation;

/// Pretty-printed JSON document for the whole allocation.
pub fn to_json(allocation: &Allocation) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(allocation)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::allocate;

    #[test]
    fn test_to_json() {
        let allocation = allocate("192.168.1.0/24", &[100, 0]).unwrap();
        let json = to_json(&allocation).unwrap();
        let v: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(v["base"], "192.168.1.0/24");
        assert_eq!(v["omitted"], serde_json::json!([1]));
        assert_eq!(v["subnets"][0]["network"], "192.168.1.0/25");
        assert_eq!(v["subnets"][0]["mask"], "255.255.255.128");
        assert_eq!(v["subnets"][0]["prefix"], "/25");
        assert_eq!(v["total_addresses"], 256);

        let back: Allocation = serde_json::from_str(&json).unwrap();
        assert_eq!(back, allocation);
    }
}
