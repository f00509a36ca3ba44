// SPDX-License-Identifier: MPL-2.0
//! Toast notifications for warnings raised outside the card itself.
//!
//! Motion source failures and configuration or artwork fallbacks surface
//! here instead of interrupting the screen. Toasts resolve their text
//! through i18n at render time.
//!
//! - [`notification`] - `Notification` and its `Severity`
//! - [`manager`] - `Manager` for queuing and auto-dismiss
//! - [`toast`] - rendering
//!
//! ```ignore
//! let mut manager = Manager::new();
//! manager.push(Notification::warning("notification-motion-unavailable"));
//! let overlay = Toast::view_overlay(&manager, &i18n).map(Message::Notification);
//! ```

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{Notification, NotificationId, Severity};
pub use toast::Toast;
