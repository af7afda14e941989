use namikoda::{IpSet, Result};
use std::path::Path;

/*-------------------------------------------------------------------------------------------------
  Save IP Set Prefixes to CSV File
-------------------------------------------------------------------------------------------------*/

pub fn save(ip_set: &IpSet, path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;

    // Write header
    writer.serialize(["CIDR", "Version"])?;

    // Write prefix records
    for network in ip_set.networks()? {
        let version = if network.is_ipv4() { "IPv4" } else { "IPv6" };
        writer.serialize((network.to_string(), version))?;
    }

    writer.flush()?;

    Ok(())
}
