//! GeoGuessr Wrapped: a yearly summary of the maps you played most,
//! rebuilt from the private activity feed.

pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod services;
pub mod time_utils;
