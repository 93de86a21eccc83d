//! Transient user notifications.

use console::style;

/// Visual category of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
    Info,
}

/// Notification port. One method, injected everywhere a transient message
/// must reach the user.
pub trait Notifier: Send + Sync {
    fn notify(&self, message: &str, kind: NoticeKind);
}

/// Terminal implementation, styled with `console`.
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, message: &str, kind: NoticeKind) {
        match kind {
            NoticeKind::Success => println!("{} {}", style("✓").green().bold(), message),
            NoticeKind::Error => eprintln!("{} {}", style("✗").red().bold(), message),
            NoticeKind::Info => println!("{} {}", style("•").dim(), message),
        }
    }
}

#[cfg(test)]
pub mod test_support {
    //! A notifier that records everything it is told, for assertions.

    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    pub struct RecordingNotifier {
        pub notices: Mutex<Vec<(String, NoticeKind)>>,
    }

    impl RecordingNotifier {
        pub fn messages(&self) -> Vec<String> {
            self.notices
                .lock()
                .unwrap()
                .iter()
                .map(|(message, _)| message.clone())
                .collect()
        }

        pub fn count(&self) -> usize {
            self.notices.lock().unwrap().len()
        }

        pub fn kinds(&self) -> Vec<NoticeKind> {
            self.notices
                .lock()
                .unwrap()
                .iter()
                .map(|(_, kind)| *kind)
                .collect()
        }
    }

    impl Notifier for RecordingNotifier {
        fn notify(&self, message: &str, kind: NoticeKind) {
            self.notices
                .lock()
                .unwrap()
                .push((message.to_string(), kind));
        }
    }
}
