/*-------------------------------------------------------------------------------------------------
  Core Modules
-------------------------------------------------------------------------------------------------*/

pub mod client;
pub mod content_type;
pub mod datetime;
pub mod errors;
pub mod ip_set;
pub mod json;
