pub mod hook;
pub mod message;

pub use hook::{HookJson, HookWorkspace};
pub use message::{MessageUsage, TranscriptLine};
