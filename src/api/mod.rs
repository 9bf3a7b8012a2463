// DigitalOcean API modules
pub mod client;
pub mod droplets;
pub mod error;

// Re-export commonly used items
pub use client::{DropletClient, StaticTokenSource, Token, TokenSource};
pub use droplets::{list_all, DropletPages, ListAllOptions, ListOptions};
pub use error::ApiError;
