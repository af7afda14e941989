use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::{NOTHING, UTF8_FULL};
use comfy_table::*;
use namikoda::{IpSet, JsonState, Result};

/*-------------------------------------------------------------------------------------------------
  Output Functions
-------------------------------------------------------------------------------------------------*/

/*--------------------------------------------------------------------------------------
  Prefix Table
--------------------------------------------------------------------------------------*/

pub fn prefix_table(ip_set: &IpSet) -> Result<()> {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("IP Prefix")
            .add_attribute(Attribute::Bold)
            .fg(Color::Green),
        Cell::new("Version")
            .add_attribute(Attribute::Bold)
            .fg(Color::Green),
    ]);

    for network in ip_set.networks()? {
        let version = if network.is_ipv4() { "IPv4" } else { "IPv6" };
        table.add_row(vec![
            Cell::new(network).add_attribute(Attribute::Bold),
            Cell::new(version),
        ]);
    }

    // Right-align the IP Prefix column
    if let Some(column) = table.column_mut(0) {
        column.set_cell_alignment(CellAlignment::Right);
    }

    println!("{table}");

    // Print prefix-table summary
    let last_update = ip_set
        .last_updated()
        .map(|last_updated| last_updated.to_string())
        .unwrap_or_else(|_| ip_set.last_update.clone());

    let mut summary_table = Table::new();
    summary_table
        .load_preset(NOTHING)
        .set_content_arrangement(ContentArrangement::Dynamic);

    summary_table.add_row(vec![Cell::new(&ip_set.name), Cell::new("Name")]);
    summary_table.add_row(vec![Cell::new(&ip_set.id), Cell::new("Id")]);
    summary_table.add_row(vec![Cell::new(last_update), Cell::new("Last Update")]);
    summary_table.add_row(vec![
        Cell::new(ip_set.ipv4s.len()),
        Cell::new("IPv4 Prefixes"),
    ]);
    summary_table.add_row(vec![
        Cell::new(ip_set.ipv6s.len()),
        Cell::new("IPv6 Prefixes"),
    ]);

    if let Some(column) = summary_table.column_mut(0) {
        column.set_cell_alignment(CellAlignment::Right);
    }

    println!("{summary_table}");

    Ok(())
}

/*--------------------------------------------------------------------------------------
  Prefixes In CIDR Format
--------------------------------------------------------------------------------------*/

pub fn prefixes_in_cidr_format(ip_set: &IpSet) {
    for cidr in &ip_set.value {
        println!("{cidr}");
    }
}

/*--------------------------------------------------------------------------------------
  Prefixes In Netmask Format
--------------------------------------------------------------------------------------*/

pub fn prefixes_in_netmask_format(ip_set: &IpSet) -> Result<()> {
    for network in ip_set.networks()? {
        println!("{} {}", network.network(), network.mask());
    }
    Ok(())
}

/*--------------------------------------------------------------------------------------
  JSON
--------------------------------------------------------------------------------------*/

pub fn json(ip_set: &IpSet) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(ip_set)?);
    Ok(())
}

/*--------------------------------------------------------------------------------------
  Data-Source State
--------------------------------------------------------------------------------------*/

pub fn state(state: &JsonState) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(state)?);
    Ok(())
}
