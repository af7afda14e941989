//! Look up Namikoda IP sets: named collections of IPv4 and IPv6 CIDR blocks.
//!
//! The [Client] issues a single `GET {url}/v1/{owner}/ipsfor/{id}` authenticated with the
//! `X-Namikoda-Key` header and decodes the JSON response into an [IpSet]. The
//! [IpsForDataSource] exposes the same lookup as a read-only infrastructure data source with
//! `apikey`, `owner` and `id` inputs and `ipv4s`, `ipv6s`, `value` and `lastUpdate` outputs.
//!
//! ```no_run
//! use namikoda::{IpsForDataSource, JsonConfig, JsonState};
//!
//! let config = JsonConfig::new()
//!     .with("apikey", "aaaabbbb-cccc-dddd-eeee-ffffgggghhhh")
//!     .with("id", "dummy-success");
//! let mut state = JsonState::new();
//!
//! IpsForDataSource::default().read(&config, &mut state)?;
//! println!("{:?}", state.get_string_set("value"));
//! # Ok::<(), namikoda::Error>(())
//! ```

/*-------------------------------------------------------------------------------------------------
  Modules
-------------------------------------------------------------------------------------------------*/

mod core;
mod provider;

/*-------------------------------------------------------------------------------------------------
  Library Interface
-------------------------------------------------------------------------------------------------*/

pub use crate::core::client::{
    fetch, Client, ClientBuilder, API_KEY_HEADER, DEFAULT_OWNER, DEFAULT_URL, URL_ENV_VAR,
};
pub use crate::core::content_type::is_allowed as is_content_type_allowed;
pub use crate::core::errors::{Error, Result};
pub use crate::core::ip_set::IpSet;
pub use crate::core::json::parse;
pub use crate::provider::data_source::{
    synthetic_id, ConfigSource, IpsForDataSource, OutputSink, ID_PREFIX,
};
pub use crate::provider::schema::{Attribute, AttributeFlags, AttributeType, Schema};
pub use crate::provider::state::{JsonConfig, JsonState};

/// Attribute names of the `ipsfor` data source.
pub mod attributes {
    pub use crate::provider::data_source::{APIKEY, ID, IPV4S, IPV6S, LAST_UPDATE, OWNER, VALUE};
}

pub use ipnetwork;
