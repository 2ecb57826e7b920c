use strum::IntoEnumIterator;
use strum_macros::{EnumIter, IntoStaticStr};

/// The eight basic ANSI colors. Declaration order is the ordinal used for
/// the `30+n` / `40+n` SGR codes, and also the order in which colors are
/// matched against input text.
#[derive(Clone, Copy, Debug, Eq, PartialEq, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum Color {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Forward,
    Backward,
}

/// Text attributes. The discriminant is the SGR parameter itself.
#[derive(Clone, Copy, Debug, Eq, PartialEq, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
#[repr(u8)]
pub enum Attribute {
    Reset = 0,
    Bright = 1,
    Dim = 2,
    Underline = 4,
    Blink = 5,
    Reverse = 7,
    Hidden = 8,
}

/// Shared lookup behaviour for the closed vocabularies.
pub trait Vocabulary: IntoEnumIterator + Copy + Into<&'static str> {
    /// Lowercase english word used for substring matching.
    fn name(self) -> &'static str {
        self.into()
    }

    /// First variant, in declaration order, whose name occurs in `line`.
    fn find_in(line: &str) -> Option<Self> {
        Self::iter().find(|v| line.contains(v.name()))
    }

    fn any_in(line: &str) -> bool {
        Self::find_in(line).is_some()
    }
}

impl Vocabulary for Color {}
impl Vocabulary for Direction {}
impl Vocabulary for Attribute {}

impl Color {
    pub fn ordinal(self) -> u8 {
        self as u8
    }
}

impl Direction {
    /// CSI final byte for a relative cursor move.
    pub fn final_byte(self) -> char {
        match self {
            Direction::Up => 'A',
            Direction::Down => 'B',
            Direction::Forward => 'C',
            Direction::Backward => 'D',
        }
    }
}

impl Attribute {
    pub fn ordinal(self) -> u8 {
        self as u8
    }
}

/// Why a line fell through to the fallback.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Fallback {
    ConsultHelp,
    WrongWay,
}

impl Fallback {
    pub fn message(self) -> &'static str {
        match self {
            Fallback::ConsultHelp => "Please consult help menu (Write 'HELP' in console)",
            Fallback::WrongWay => "Wrong way!",
        }
    }
}

/// One recognized action, extracted from a single input line.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Command {
    ChangeColor(Color),
    ChangeBackground(Color),
    Move(Direction, usize),
    SetAttribute(Attribute),
    Clear,
    Help,
    Unrecognized(Fallback),
}
