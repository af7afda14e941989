use log::{info, warn};
use namikoda::IpSet;

/*-------------------------------------------------------------------------------------------------
  Logging Functions
-------------------------------------------------------------------------------------------------*/

/*--------------------------------------------------------------------------------------
  IP Set Summary
--------------------------------------------------------------------------------------*/

pub fn ip_set(ip_set: &IpSet) {
    info!("IP set `{}` ({})", ip_set.id, ip_set.name);
    info!(
        "{} IPv4 prefix(es), {} IPv6 prefix(es), {} total",
        ip_set.ipv4s.len(),
        ip_set.ipv6s.len(),
        ip_set.value.len()
    );

    // `value` is taken from the service as-is; only flag a mismatch.
    let expected = ip_set.ipv4s.len() + ip_set.ipv6s.len();
    if ip_set.value.len() != expected {
        warn!(
            "`value` holds {} prefix(es) but ipv4s and ipv6s hold {}",
            ip_set.value.len(),
            expected
        );
    }
}
