use colored::Color;

pub const PRIMARY: Color = Color::BrightGreen;
pub const ACCENT: Color = Color::BrightYellow;
pub const SEPARATOR: Color = Color::BrightBlack;
pub const TEXT_DEFAULT: Color = Color::White;

pub const SSID: Color = Color::BrightCyan;
pub const MAC_ADDR: Color = Color::Magenta;
pub const FREQUENCY: Color = Color::Blue;

pub const SIGNAL_GOOD: Color = Color::Green;
pub const SIGNAL_FAIR: Color = Color::Yellow;
pub const SIGNAL_POOR: Color = Color::Red;
