#[cfg(feature = "chrono")]
pub mod chrono;
pub mod core;
#[cfg(feature = "ctrl")]
pub mod ctrl;
#[cfg(feature = "sqlite")]
pub mod sqlite;

pub fn is_send_sync<T: Send + Sync>(_: &T) {}
