//! User-facing side-effect ports and their terminal implementations.
//!
//! Controllers never print, prompt, or spawn a browser directly; they go
//! through these traits so the orchestration layer is testable without a
//! terminal.

pub mod notify;
pub mod ports;

pub use notify::{ConsoleNotifier, NoticeKind, Notifier};
pub use ports::{AutoConfirm, ConfirmPrompt, InteractivePrompt, SystemOpener, UrlOpener};
