pub mod droplet;
pub mod page;

pub use droplet::{Droplet, DropletRegion, NetworkV4, Networks};
pub use page::{DropletPage, Links, Meta, Pages};
