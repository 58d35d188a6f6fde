//! Renders JSON page descriptors into trees of host UI primitives.
//!
//! ```
//! use pagetree::engine::Renderer;
//! use serde_json::json;
//!
//! let renderer = Renderer::new(|target| println!("navigate to {target}"));
//! let page = renderer
//!     .render_page(&json!({"components": [{"type": "text", "content": "Hello"}]}))
//!     .unwrap();
//! assert_eq!(page.tree().nodes().len(), 1);
//! ```
pub mod config;
pub mod engine;
pub mod infrastructure;
pub mod logging;
pub mod model;
pub mod nodes;
pub mod render;
pub mod result;
pub mod types;
