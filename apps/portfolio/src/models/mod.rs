pub mod content;
pub mod view;
