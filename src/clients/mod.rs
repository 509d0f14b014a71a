pub mod quobyte_client;
pub mod rpc;
pub mod structs;

pub use quobyte_client::*;
pub use structs::*;
