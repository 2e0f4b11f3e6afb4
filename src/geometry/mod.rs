pub mod gateway;
pub mod point;
pub mod role;
pub mod visibility;

pub use gateway::Gateway;
pub use point::Point;
pub use role::NodeRole;
pub use visibility::is_visible;
