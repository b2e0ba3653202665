pub mod angle;
pub mod converter;
pub mod projection;
pub mod types;
pub mod validation;
