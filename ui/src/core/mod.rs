pub mod download;
pub mod format;
pub mod platform;
pub mod timing;
