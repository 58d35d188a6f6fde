pub mod button;
pub mod container;
pub mod fallback;
pub mod image;
pub mod kind;
pub mod text;
