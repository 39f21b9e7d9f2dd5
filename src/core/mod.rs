/*-------------------------------------------------------------------------------------------------
  Core Modules
-------------------------------------------------------------------------------------------------*/

pub mod address;
pub mod aws;
pub mod client;
pub mod config;
pub mod datetime;
pub mod detector;
pub mod errors;
pub mod gcp;
pub mod ip_ranges;
pub mod json;
pub mod resolver;
pub mod utils;
