mod classifier;
mod definitions;
mod error;
mod notify;
pub mod sequences;
mod session;
mod terminal;

// Re-export the items used by the binary and by embedders
pub use classifier::classify;
pub use definitions::{Attribute, Color, Command, Direction, Fallback, Vocabulary};
pub use error::{ClassifyError, NotifyError, TermError, TermResult};
pub use notify::{Cue, Notifier, Silent, SoundBoard, DEFAULT_PLAYER};
pub use session::{run, run_with_prompt, Summary};
pub use terminal::{Terminal, HELP_MENU};
