use crate::core::errors::{Error, Result};
use crate::core::ip_set::IpSet;

/*-------------------------------------------------------------------------------------------------
  Parse JSON
-------------------------------------------------------------------------------------------------*/

/// Decode an `ipsfor` response body. On failure the raw bytes are kept in the error.
pub fn parse(body: &[u8]) -> Result<IpSet> {
    serde_json::from_slice(body).map_err(|source| Error::Decode {
        source,
        body: body.to_vec(),
    })
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/
