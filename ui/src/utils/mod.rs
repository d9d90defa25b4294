pub mod clipboard;
pub mod colors;
