use crate::core::datetime;
use crate::core::errors::{Error, Result};
use chrono::{DateTime, Utc};
use ipnetwork::IpNetwork;
use serde::{Deserialize, Serialize};

/*-------------------------------------------------------------------------------------------------
  IP Set
-------------------------------------------------------------------------------------------------*/

/// A named set of IPv4 and IPv6 CIDR blocks, as returned by the `ipsfor` endpoint.
///
/// The record is copied from the service verbatim. In particular `value` is the service's own
/// union of `ipv4s` and `ipv6s`; it is not recomputed locally.
///
/// Fields missing from the payload decode to empty values.
#[derive(Debug, Clone, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct IpSet {
    pub ipv4s: Vec<String>,
    pub ipv6s: Vec<String>,
    pub last_update: String,
    pub name: String,
    pub id: String,
    pub value: Vec<String>,
}

/*--------------------------------------------------------------------------------------
  IP Set Implementation
--------------------------------------------------------------------------------------*/

impl IpSet {
    /// Parse the `lastUpdate` timestamp.
    pub fn last_updated(&self) -> Result<DateTime<Utc>> {
        datetime::parse(&self.last_update)
    }

    /// Parse the CIDR strings in `value` into IP networks, preserving order.
    pub fn networks(&self) -> Result<Vec<IpNetwork>> {
        self.value.iter().map(|cidr| parse_cidr(cidr)).collect()
    }
}

fn parse_cidr(cidr: &str) -> Result<IpNetwork> {
    cidr.parse().map_err(|source| Error::InvalidCidr {
        cidr: cidr.to_string(),
        source,
    })
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn dummy_success() -> IpSet {
        IpSet {
            ipv4s: vec!["1.2.3.4/32".to_string()],
            ipv6s: vec!["1111:222:3000::/44".to_string()],
            last_update: "2017-01-01T00:00:00.000Z".to_string(),
            name: "Dummy success value".to_string(),
            id: "dummy-success".to_string(),
            value: vec!["1.2.3.4/32".to_string(), "1111:222:3000::/44".to_string()],
        }
    }

    #[test]
    fn test_networks_preserve_order() {
        let networks = dummy_success().networks().unwrap();
        assert_eq!(networks.len(), 2);
        assert!(networks[0].is_ipv4());
        assert!(networks[1].is_ipv6());
        assert_eq!(networks[0].prefix(), 32);
        assert_eq!(networks[1].prefix(), 44);
    }

    #[test]
    fn test_networks_reject_invalid_cidr() {
        let ip_set = IpSet {
            value: vec!["1.2.3.4/32".to_string(), "not-a-cidr".to_string()],
            ..dummy_success()
        };
        match ip_set.networks() {
            Err(Error::InvalidCidr { cidr, .. }) => assert_eq!(cidr, "not-a-cidr"),
            other => panic!("expected InvalidCidr, got {other:?}"),
        }
    }

    #[test]
    fn test_last_updated() {
        assert_eq!(
            dummy_success().last_updated().unwrap(),
            Utc.with_ymd_and_hms(2017, 1, 1, 0, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_serialize_uses_wire_names() {
        let serialized = serde_json::to_value(dummy_success()).unwrap();
        assert_eq!(serialized["lastUpdate"], "2017-01-01T00:00:00.000Z");
        assert_eq!(serialized["ipv4s"][0], "1.2.3.4/32");
        assert!(serialized.get("last_update").is_none());
    }
}
