//! The `ipsfor` data source.
//!
//! The data source reads its configuration through [`ConfigSource`] and writes computed
//! attributes through [`OutputSink`], so any host framework can drive it by implementing those
//! two traits.

use crate::core::client::{Client, DEFAULT_OWNER};
use crate::core::errors::{Error, Result};
use crate::core::ip_set::IpSet;
use crate::provider::schema::{Attribute, Schema};
use log::info;

/*-------------------------------------------------------------------------------------------------
  Attribute Names
-------------------------------------------------------------------------------------------------*/

pub const APIKEY: &str = "apikey";
pub const OWNER: &str = "owner";
pub const ID: &str = "id";
pub const IPV4S: &str = "ipv4s";
pub const IPV6S: &str = "ipv6s";
pub const VALUE: &str = "value";
pub const LAST_UPDATE: &str = "lastUpdate";

/// Prefix of the resource identity derived for each read.
pub const ID_PREFIX: &str = "namikoda";

/*-------------------------------------------------------------------------------------------------
  Host Capabilities
-------------------------------------------------------------------------------------------------*/

/// A provider of typed configuration values.
pub trait ConfigSource {
    /// Get a string value; `None` when the attribute is not configured.
    fn get_string(&self, key: &str) -> Option<String>;
}

/// A sink for computed outputs.
pub trait OutputSink {
    fn set_string(&mut self, key: &str, value: &str);

    /// Set a set-valued attribute. Values arrive in service order.
    fn set_string_set(&mut self, key: &str, values: &[String]);

    /// Set the identity of the data read.
    fn set_id(&mut self, id: &str);
}

/*-------------------------------------------------------------------------------------------------
  IPs For Data Source
-------------------------------------------------------------------------------------------------*/

/// Read-only data source that looks up an IP set by id.
#[derive(Debug, Clone, Default)]
pub struct IpsForDataSource {
    client: Client,
}

impl IpsForDataSource {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &Client {
        &self.client
    }

    pub fn schema() -> Schema {
        Schema::new()
            .with_attribute(
                APIKEY,
                Attribute::required_string()
                    .sensitive()
                    .with_description("Namikoda API key"),
            )
            .with_attribute(
                OWNER,
                Attribute::optional_string()
                    .with_description("Owner scope of the IP set; defaults to `public`"),
            )
            .with_attribute(
                ID,
                Attribute::required_string().with_description("Id of the IP set"),
            )
            .with_attribute(IPV4S, Attribute::computed_string_set())
            .with_attribute(IPV6S, Attribute::computed_string_set())
            .with_attribute(VALUE, Attribute::computed_string_set())
            .with_attribute(LAST_UPDATE, Attribute::computed_string())
    }

    /// Fetch the configured IP set and write its attributes to `outputs`.
    ///
    /// Missing required configuration fails before any request is made. Outputs are written only
    /// once the record has been fetched and decoded, so a failed read leaves `outputs` untouched.
    pub fn read<C, O>(&self, config: &C, outputs: &mut O) -> Result<IpSet>
    where
        C: ConfigSource + ?Sized,
        O: OutputSink + ?Sized,
    {
        for name in Self::schema().required() {
            if config.get_string(name).map_or(true, |value| value.is_empty()) {
                return Err(Error::MissingField(name.to_string()));
            }
        }

        let api_key = config.get_string(APIKEY).unwrap_or_default();
        let id = config.get_string(ID).unwrap_or_default();
        let owner = config
            .get_string(OWNER)
            .filter(|owner| !owner.is_empty())
            .unwrap_or_else(|| DEFAULT_OWNER.to_string());

        let ip_set = self.client.fetch(Some(&owner), &id, &api_key)?;

        outputs.set_string_set(IPV4S, &ip_set.ipv4s);
        outputs.set_string_set(IPV6S, &ip_set.ipv6s);
        outputs.set_string_set(VALUE, &ip_set.value);
        outputs.set_string(LAST_UPDATE, &ip_set.last_update);

        let synthetic_id = synthetic_id(&id, &ip_set.last_update);
        info!("Read {}", synthetic_id);
        outputs.set_id(&synthetic_id);

        Ok(ip_set)
    }
}

/// Identity of a read: `namikoda-{id}-{lastUpdate}`.
///
/// ```
/// assert_eq!(
///     namikoda::synthetic_id("dummy-success", "2017-01-01T00:00:00.000Z"),
///     "namikoda-dummy-success-2017-01-01T00:00:00.000Z"
/// );
/// ```
pub fn synthetic_id(id: &str, last_update: &str) -> String {
    format!("{ID_PREFIX}-{id}-{last_update}")
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/
