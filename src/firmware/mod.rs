mod adapters;
pub(crate) mod config;
mod runtime;
pub(crate) mod types;

pub use runtime::run;
