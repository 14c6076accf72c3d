//! Browser glue with inert non-browser fallbacks.

pub mod clipboard;
pub mod navigation;
pub mod storage;
