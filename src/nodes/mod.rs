pub mod actions;
pub mod elements;
pub mod key;
pub mod registry;
