pub mod bump;
pub mod registry;
