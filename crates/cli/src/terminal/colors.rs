use crossterm::style::Color;
use mccmd_core::prompt::Tone;

/// Colour used for questions and menu headers.
pub const QUESTION_COLOR: Color = Color::Cyan;

/// Colour used for accepted values when they are echoed back.
pub const VALUE_COLOR: Color = Color::Green;

/// Trait for converting message tones to terminal colors
pub trait AsTermColor {
    fn as_crossterm_color(&self) -> Color;
}

impl AsTermColor for Tone {
    fn as_crossterm_color(&self) -> Color {
        match self {
            Tone::Info => Color::Blue,
            Tone::Success => Color::Green,
            Tone::Warning => Color::Yellow,
            Tone::Error => Color::Red,
        }
    }
}
