//! Theme configuration for the desktop app

use moodicat_core::models::TaskPriority;
use moodicat_core::mood::MoodTone;

/// Color palette for the application
#[derive(Debug, Clone, Copy)]
pub struct ColorPalette {
    pub bg_primary: &'static str,
    pub bg_secondary: &'static str,
    pub bg_tertiary: &'static str,
    pub text_primary: &'static str,
    pub text_secondary: &'static str,
    pub text_muted: &'static str,
    pub border: &'static str,
    pub border_light: &'static str,
    pub accent: &'static str,
    pub accent_hover: &'static str,
    pub accent_text: &'static str,
    pub error: &'static str,
    pub success: &'static str,
    pub warning: &'static str,
}

/// Moodicat teal palette
pub const PALETTE: ColorPalette = ColorPalette {
    bg_primary: "#f4fbfc",
    bg_secondary: "#ffffff",
    bg_tertiary: "#e6f6f8",
    text_primary: "#1f2d3d",
    text_secondary: "#52606d",
    text_muted: "#9aa5b1",
    border: "#d3e4e8",
    border_light: "#e9f1f3",
    accent: "#38becf",
    accent_hover: "#2aa5b5",
    accent_text: "#ffffff",
    error: "#dc2626",
    success: "#16a34a",
    warning: "#f59e0b",
};

#[must_use]
pub const fn palette() -> &'static ColorPalette {
    &PALETTE
}

/// Badge colour for a mood tone.
#[must_use]
pub const fn tone_color(tone: MoodTone) -> &'static str {
    match tone {
        MoodTone::Positive => "#facc15",
        MoodTone::Sad => "#60a5fa",
        MoodTone::Anxious => "#a78bfa",
        MoodTone::Angry => "#f87171",
        MoodTone::Calm => "#34d399",
        MoodTone::Tired => "#94a3b8",
        MoodTone::Neutral => "#cbd5e1",
    }
}

#[must_use]
pub const fn priority_color(priority: TaskPriority) -> &'static str {
    match priority {
        TaskPriority::High => PALETTE.error,
        TaskPriority::Medium => PALETTE.warning,
        TaskPriority::Low => PALETTE.success,
    }
}
