use colored::Color;

pub const PRIMARY: Color = Color::BrightGreen;
pub const ACCENT: Color = Color::Yellow;
pub const IPV4_ADDR: Color = Color::Cyan;
pub const TEXT_DEFAULT: Color = Color::White;
