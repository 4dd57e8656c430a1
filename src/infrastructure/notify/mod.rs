//! Notification channel implementations

mod html;
mod outbox;

pub use html::render_html_summary;
pub use outbox::OutboxNotifier;
