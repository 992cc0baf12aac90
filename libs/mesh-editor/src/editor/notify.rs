//! Host-side collaborators: the message sink and the face picker.

/// Fire-and-forget sink for short user-facing messages (toasts).
pub trait Notifier {
    /// Shows `message` to the user.
    fn notify(&self, message: &str);
}

impl<F: Fn(&str)> Notifier for F {
    fn notify(&self, message: &str) {
        self(message)
    }
}

/// Default sink: forwards messages to `tracing` at info level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, message: &str) {
        tracing::info!(target: "mesh_editor::notify", "{message}");
    }
}

/// Screen-space picking provided by the host (ray casting lives there).
pub trait FacePicker {
    /// Returns the face under the screen point, if any.
    fn resolve_face_at_screen_point(&self, x: f64, y: f64) -> Option<u32>;
}

impl<F: Fn(f64, f64) -> Option<u32>> FacePicker for F {
    fn resolve_face_at_screen_point(&self, x: f64, y: f64) -> Option<u32> {
        self(x, y)
    }
}
