//! Best-effort notification capability.
//!
//! Sound playback and desktop notifications are optional side effects of
//! timer completion. Implementations must never fail outward: the engine's
//! transitions do not depend on any of these calls succeeding.

/// Capability port for completion side effects.
///
/// All methods are best-effort. Implementations swallow failures and at
/// most log them.
pub trait Notifier {
    /// Ask the environment for permission to notify, if not yet decided.
    /// Idempotent.
    fn request_permission(&self) {}

    /// Show a desktop notification.
    fn notify(&self, _title: &str, _body: &str) {}

    /// Play the completion sound.
    fn play_sound(&self) {}
}

/// Notifier that does nothing. Default for tests and headless use.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopNotifier;

impl Notifier for NoopNotifier {}

/// Notifier for terminal use: rings the bell and prints the message
/// to stderr.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, title: &str, body: &str) {
        eprintln!("{title} {body}");
    }

    fn play_sound(&self) {
        // BEL; terminals without a bell ignore it.
        eprint!("\x07");
    }
}
