use crate::definitions::{Attribute, Color, Command, Direction, Fallback, Vocabulary};
use crate::error::ClassifyError;
use log::debug;

/// Classify one input line into a single [`Command`].
///
/// Matching is by substring on the lowercased line, and the first rule that
/// fires wins: change, move, help, clear, attribute name, fallback. Within a
/// vocabulary the first variant in declaration order wins.
pub fn classify(line: &str) -> Result<Command, ClassifyError> {
    let line = line.to_lowercase();

    let command = if line.contains("change") {
        classify_change(&line)
    } else if line.contains("move") {
        classify_move(&line)?
    } else if line.contains("help") {
        Command::Help
    } else if line.contains("clear") {
        Command::Clear
    } else if let Some(attribute) = Attribute::find_in(&line) {
        Command::SetAttribute(attribute)
    } else {
        Command::Unrecognized(Fallback::ConsultHelp)
    };

    debug!("Classified {:?} as {:?}", line, command);
    Ok(command)
}

fn classify_change(line: &str) -> Command {
    let target = if line.contains("background") {
        Color::find_in(line).map(Command::ChangeBackground)
    } else if line.contains("color") {
        Color::find_in(line).map(Command::ChangeColor)
    } else {
        None
    };
    target.unwrap_or(Command::Unrecognized(Fallback::ConsultHelp))
}

fn classify_move(line: &str) -> Result<Command, ClassifyError> {
    let Some(direction) = Direction::find_in(line) else {
        return Ok(Command::Unrecognized(Fallback::WrongWay));
    };
    Ok(Command::Move(direction, extract_amount(line)?))
}

/// Every ASCII digit in the line, concatenated left to right. Digits are not
/// scoped to the direction word, so "move up 2 of 3" reads as 23.
fn extract_amount(line: &str) -> Result<usize, ClassifyError> {
    let digits: String = line.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return Err(ClassifyError::MissingAmount);
    }
    digits
        .parse::<usize>()
        .map_err(|_| ClassifyError::AmountOutOfRange { digits })
}
