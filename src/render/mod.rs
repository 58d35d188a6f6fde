pub mod context;
pub mod diagnostic;
pub mod page;
pub mod tree;
