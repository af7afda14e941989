/*-------------------------------------------------------------------------------------------------
  Provider Modules
-------------------------------------------------------------------------------------------------*/

pub mod data_source;
pub mod schema;
pub mod state;
