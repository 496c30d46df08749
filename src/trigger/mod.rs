pub mod anchor;
pub mod resolve;
