//! Notifications between the engines and the outside world.
//!
//! The sort engine and the pagination engine never call each other. The sorter
//! sends [`Notification::RowsReordered`] through a [`Notifier`]; code that adds or
//! removes rows sends [`Notification::RowSetChanged`]. Whoever owns the
//! [`NotificationQueue`] drains it into the pager.

use tokio::sync::mpsc;

/// A fire-and-forget signal carrying nothing but its kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Notification {
    /// A sort finished reordering the rows.
    RowsReordered,
    /// Rows were added, removed, or had their eligibility changed externally.
    RowSetChanged,
}

/// Sending half of a notification channel.
///
/// Clone-able, so external code can keep one next to the table it mutates.
#[derive(Clone, Debug)]
pub struct Notifier {
    tx: mpsc::UnboundedSender<Notification>,
}

impl Notifier {
    /// Send a notification.
    ///
    /// Errors are ignored (receiver dropped = table torn down).
    pub fn notify(&self, notification: Notification) {
        log::trace!("[notify] {:?}", notification);
        let _ = self.tx.send(notification);
    }
}

/// Receiving half of a notification channel.
#[derive(Debug)]
pub struct NotificationQueue {
    rx: mpsc::UnboundedReceiver<Notification>,
}

impl NotificationQueue {
    /// Take the next pending notification without waiting.
    pub fn try_next(&mut self) -> Option<Notification> {
        self.rx.try_recv().ok()
    }

    /// Wait for the next notification.
    pub async fn recv(&mut self) -> Option<Notification> {
        self.rx.recv().await
    }
}

/// Create a new notification channel pair.
pub fn channel() -> (Notifier, NotificationQueue) {
    let (tx, rx) = mpsc::unbounded_channel();
    (Notifier { tx }, NotificationQueue { rx })
}
