pub mod allocation;
pub mod overview;
pub mod plan;
pub mod position;
pub mod projection;
pub mod risk;
pub mod timeline;
