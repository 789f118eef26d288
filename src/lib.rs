// Single-pass filter/transform over lichess puzzle CSV exports
pub mod board;
pub mod error;
pub mod extract;
pub mod record;

pub use error::RecordError;
