// Models module for data structures
pub mod channel_version;
pub mod component;
pub mod extended_version;
pub mod node;
pub mod state;
