pub mod api_utils;
pub mod config;
pub mod countdown;
pub mod http;
pub mod runtime;

#[cfg(test)]
pub(crate) mod testing;
