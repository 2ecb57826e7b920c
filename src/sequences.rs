//! Builders for the CSI sequences the interpreter emits.
//!
//! Every function returns the literal text `ESC [ <params> <final>`; writing
//! it to a stream is left to [`crate::Terminal`].

use crate::definitions::{Attribute, Color, Direction};

pub const CONTROL_CODE: &str = "\x1B[";

const MOVE: char = 'H';
const STYLE: char = 'm';
const ERASE_DISPLAY: &str = "2J";

fn csi(params: impl std::fmt::Display) -> String {
    format!("{CONTROL_CODE}{params}")
}

pub fn cursor_home() -> String {
    csi(MOVE)
}

/// Home the cursor, then erase the display. Homing always precedes the erase.
pub fn clear() -> String {
    let mut seq = cursor_home();
    seq.push_str(&csi(ERASE_DISPLAY));
    seq
}

/// Positions are 1-based and passed through unchecked.
pub fn move_absolute(col: usize, row: usize) -> String {
    csi(format_args!("{row};{col}{MOVE}"))
}

pub fn move_relative(direction: Direction, amount: usize) -> String {
    csi(format_args!("{amount}{}", direction.final_byte()))
}

pub fn set_foreground(color: Color) -> String {
    csi(format_args!("{}{STYLE}", 30 + u16::from(color.ordinal())))
}

pub fn set_background(color: Color) -> String {
    csi(format_args!("{}{STYLE}", 40 + u16::from(color.ordinal())))
}

pub fn set_attribute(attribute: Attribute) -> String {
    csi(format_args!("{}{STYLE}", attribute.ordinal()))
}

pub fn reset_style() -> String {
    set_attribute(Attribute::Reset)
}

pub fn save_cursor() -> String {
    csi('s')
}

pub fn restore_cursor() -> String {
    csi('u')
}
