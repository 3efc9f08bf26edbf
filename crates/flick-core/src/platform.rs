/// Host hook notified whenever the runtime wants another frame.
///
/// Implementations typically flip a flag or wake the host's event loop; they
/// must not drain frame callbacks re-entrantly.
pub trait RuntimeScheduler: Send + Sync {
    fn schedule_frame(&self);
}
