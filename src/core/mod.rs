pub mod ping;
pub mod group;

pub use ping::{Ping, Position};
pub use group::{group, group_for, PathGroup};
