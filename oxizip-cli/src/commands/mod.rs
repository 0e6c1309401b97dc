//! Command implementations for OxiZip CLI.

pub mod deflate;
pub mod inflate;
pub mod info;
pub mod resource;

pub use deflate::cmd_deflate;
pub use inflate::cmd_inflate;
pub use info::cmd_info;
pub use resource::{cmd_pack, cmd_resource};
