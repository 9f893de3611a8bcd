//! Turning raw export text into an ordered message timeline.
//!
//! This module contains:
//! - [`decode`] - Lenient UTF-8 decoding of uploads
//! - [`formats`] - Supported line shapes and the priority-ordered classifier
//! - [`assembler`] - The fold that groups lines into messages
//! - [`system`] - Service-notice detection

pub mod assembler;
pub mod decode;
pub mod formats;
pub mod system;

// Re-export commonly used items
pub use assembler::{AssemblerState, Assembly, AssemblyOptions, ParseStats, assemble, split_lines};
pub use decode::{DecodedInput, decode_lossy};
pub use formats::{FormatPattern, LineClassifier, LineMatch, parse_timestamp};
pub use system::is_system_notice;
