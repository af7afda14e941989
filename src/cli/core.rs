use crate::cli::Args;
use namikoda::attributes::{APIKEY, ID, OWNER};
use namikoda::{Client, ClientBuilder, JsonConfig};

/*-------------------------------------------------------------------------------------------------
  Core functions
-------------------------------------------------------------------------------------------------*/

/*--------------------------------------------------------------------------------------
  Build the client from CLI arguments
--------------------------------------------------------------------------------------*/

pub fn build_client(args: &Args) -> Client {
    let mut builder = ClientBuilder::new();
    if let Some(url) = &args.url {
        builder.url(url);
    }
    builder.build()
}

/*--------------------------------------------------------------------------------------
  Build the data-source configuration from CLI arguments
--------------------------------------------------------------------------------------*/

pub fn build_config(args: &Args) -> JsonConfig {
    let config = JsonConfig::new()
        .with(APIKEY, args.apikey.as_str())
        .with(ID, args.id.as_str());

    match &args.owner {
        Some(owner) => config.with(OWNER, owner.as_str()),
        None => config,
    }
}
