//! Configuration module

mod site;

pub use site::CategoryCase;
pub use site::StoreConfig;
