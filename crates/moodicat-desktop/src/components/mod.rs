//! UI Components
//!
//! Reusable UI components for the desktop application.

mod button;
mod chat_panel;
mod diary_panel;
mod error_banner;
mod header;
mod mood_badge;
mod task_panel;

pub use button::{Button, ButtonVariant};
pub use chat_panel::ChatPanel;
pub use diary_panel::DiaryPanel;
pub use error_banner::ErrorBanner;
pub use header::Header;
pub use mood_badge::MoodBadge;
pub use task_panel::TaskPanel;
