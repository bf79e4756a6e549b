//! Notifier that forwards to several notifiers

use async_trait::async_trait;

use crate::application::ports::{NotificationError, NotificationIcon, Notifier};

/// Forwards every message to each inner notifier in order.
///
/// All notifiers are tried; the first error is returned afterwards.
#[derive(Default)]
pub struct FanOutNotifier {
    notifiers: Vec<Box<dyn Notifier>>,
}

impl FanOutNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, notifier: impl Notifier + 'static) -> Self {
        self.notifiers.push(Box::new(notifier));
        self
    }

    pub fn len(&self) -> usize {
        self.notifiers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notifiers.is_empty()
    }
}

#[async_trait]
impl Notifier for FanOutNotifier {
    async fn notify(
        &self,
        title: &str,
        message: &str,
        icon: NotificationIcon,
    ) -> Result<(), NotificationError> {
        let mut first_error = None;
        for notifier in &self.notifiers {
            if let Err(e) = notifier.notify(title, message, icon).await {
                first_error.get_or_insert(e);
            }
        }
        first_error.map_or(Ok(()), Err)
    }
}
