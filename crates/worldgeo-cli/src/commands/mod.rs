pub mod continent;
pub mod country;
pub mod region;
pub mod render;
