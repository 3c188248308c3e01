mod client;
mod server;

pub use client::{Client, ClientError};
pub use server::Server;
