use crate::definitions::{Attribute, Color, Command, Direction, Fallback, Vocabulary};
use crate::error::TermResult;
use crate::notify::{Cue, Notifier, Silent};
use crate::sequences;
use log::{info, warn};
use std::io::Write;

pub const HELP_MENU: &str = "\
Help menu:
  change color <color>        black, red, green, yellow, blue, magenta, cyan, white
  change background <color>   same colors as above
  move <direction> <amount>   up, down, forward, backward
  <attribute>                 reset, bright, dim, underline, blink, reverse, hidden
  clear                       clear the screen
  help                        show this menu";

/// Write-only facade over a terminal stream.
///
/// Nothing about the terminal is read back: colors, attributes and cursor
/// position live in the real terminal only. Every performed action is also
/// reported to the notifier; notifier failures are logged and dropped.
pub struct Terminal<W: Write, N: Notifier = Silent> {
    out: W,
    notifier: N,
}

impl<W: Write> Terminal<W, Silent> {
    pub fn new(out: W) -> Self {
        Self::with_notifier(out, Silent)
    }
}

impl<W: Write, N: Notifier> Terminal<W, N> {
    pub fn with_notifier(out: W, notifier: N) -> Self {
        Terminal { out, notifier }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Dispatch one classified command.
    pub fn execute(&mut self, command: &Command) -> TermResult<()> {
        match *command {
            Command::ChangeColor(color) => self.set_color(color),
            Command::ChangeBackground(color) => self.set_bg_color(color),
            Command::Move(direction, amount) => self.move_cursor(direction, amount),
            Command::SetAttribute(attribute) => self.set_attribute(attribute),
            Command::Clear => self.clear_screen(),
            Command::Help => self.show_help(),
            Command::Unrecognized(fallback) => self.fallback(fallback),
        }
    }

    /// Reset color, background and attributes to the terminal defaults.
    pub fn reset_style(&mut self) -> TermResult<()> {
        self.command(&sequences::reset_style())?;
        self.cue(Cue::new("reset", ""));
        Ok(())
    }

    pub fn clear_screen(&mut self) -> TermResult<()> {
        self.command(&sequences::clear())?;
        self.cue(Cue::new("clear", ""));
        Ok(())
    }

    /// Positions are counted from one; 1,1 is the top left corner.
    pub fn move_to(&mut self, col: usize, row: usize) -> TermResult<()> {
        self.command(&sequences::move_absolute(col, row))
    }

    pub fn move_cursor(&mut self, direction: Direction, amount: usize) -> TermResult<()> {
        self.command(&sequences::move_relative(direction, amount))?;
        self.cue(Cue::new("move", direction.name()).with_detail(amount.to_string()));
        Ok(())
    }

    /// Already printed text is not affected.
    pub fn set_color(&mut self, color: Color) -> TermResult<()> {
        self.command(&sequences::set_foreground(color))?;
        self.cue(Cue::new("change", "color").with_detail(color.name()));
        Ok(())
    }

    pub fn set_bg_color(&mut self, color: Color) -> TermResult<()> {
        self.command(&sequences::set_background(color))?;
        self.cue(Cue::new("change", "background").with_detail(color.name()));
        Ok(())
    }

    pub fn set_attribute(&mut self, attribute: Attribute) -> TermResult<()> {
        if attribute == Attribute::Reset {
            return self.reset_style();
        }
        self.command(&sequences::set_attribute(attribute))?;
        self.cue(Cue::new("set", "attribute").with_detail(attribute.name()));
        Ok(())
    }

    /// Draw `c` under the cursor. The cursor ends where it started.
    pub fn set_char(&mut self, c: char) -> TermResult<()> {
        let mut buf = [0u8; 4];
        self.out.write_all(sequences::save_cursor().as_bytes())?;
        self.out.write_all(c.encode_utf8(&mut buf).as_bytes())?;
        self.out.write_all(sequences::restore_cursor().as_bytes())?;
        self.out.flush()?;
        Ok(())
    }

    pub fn show_help(&mut self) -> TermResult<()> {
        self.report(HELP_MENU)?;
        self.cue(Cue::new("help", ""));
        Ok(())
    }

    /// Print a plain diagnostic line.
    pub fn report(&mut self, message: &str) -> TermResult<()> {
        writeln!(self.out, "{message}")?;
        self.out.flush()?;
        Ok(())
    }

    fn fallback(&mut self, fallback: Fallback) -> TermResult<()> {
        self.report(fallback.message())?;
        self.cue(Cue::new("help", ""));
        Ok(())
    }

    fn command(&mut self, sequence: &str) -> TermResult<()> {
        self.out.write_all(sequence.as_bytes())?;
        self.out.flush()?;
        Ok(())
    }

    fn cue(&mut self, cue: Cue) {
        if let Err(e) = self.notifier.notify(&cue) {
            warn!("Notification {:?} failed: {}", cue, e);
        } else {
            info!("Performed {}", cue.words().collect::<Vec<_>>().join(" "));
        }
    }
}

#[cfg(test)]
mod terminal_tests {
    use super::*;
    use crate::error::{NotifyError, TermError};
    use pretty_assertions::assert_eq;
    use std::io;
    use std::path::PathBuf;

    /// Records every cue, optionally failing on each one.
    #[derive(Default)]
    struct Recorder {
        cues: Vec<Cue>,
        fail: bool,
    }

    impl Notifier for &mut Recorder {
        fn notify(&mut self, cue: &Cue) -> Result<(), NotifyError> {
            self.cues.push(cue.clone());
            if self.fail {
                return Err(NotifyError::MissingClip {
                    path: PathBuf::from("missing.wav"),
                });
            }
            Ok(())
        }
    }

    struct BrokenStream;

    impl Write for BrokenStream {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "gone"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn output(command: Command) -> String {
        let mut term = Terminal::new(Vec::new());
        term.execute(&command).unwrap();
        String::from_utf8(term.into_inner()).unwrap()
    }

    // ========== OUTPUT TESTS ==========

    #[test]
    fn test_execute_writes_sequences() {
        assert_eq!(output(Command::ChangeBackground(Color::Red)), "\x1B[41m");
        assert_eq!(output(Command::ChangeColor(Color::Blue)), "\x1B[34m");
        assert_eq!(output(Command::Move(Direction::Forward, 5)), "\x1B[5C");
        assert_eq!(output(Command::Clear), "\x1B[H\x1B[2J");
        assert_eq!(
            output(Command::SetAttribute(Attribute::Underline)),
            "\x1B[4m"
        );
        assert_eq!(output(Command::SetAttribute(Attribute::Reset)), "\x1B[0m");
    }

    #[test]
    fn test_unrecognized_writes_message_only() {
        assert_eq!(
            output(Command::Unrecognized(Fallback::ConsultHelp)),
            "Please consult help menu (Write 'HELP' in console)\n"
        );
        assert_eq!(
            output(Command::Unrecognized(Fallback::WrongWay)),
            "Wrong way!\n"
        );
    }

    #[test]
    fn test_help_writes_menu() {
        let text = output(Command::Help);
        assert!(text.starts_with("Help menu:"));
        assert!(!text.contains('\x1B'));
    }

    #[test]
    fn test_reset_twice_is_not_merged() {
        let mut term = Terminal::new(Vec::new());
        term.reset_style().unwrap();
        term.reset_style().unwrap();
        assert_eq!(term.into_inner(), b"\x1B[0m\x1B[0m");
    }

    #[test]
    fn test_move_to_and_set_char() {
        let mut term = Terminal::new(Vec::new());
        term.move_to(3, 7).unwrap();
        term.set_char('#').unwrap();
        assert_eq!(
            String::from_utf8(term.into_inner()).unwrap(),
            "\x1B[7;3H\x1B[s#\x1B[u"
        );
    }

    // ========== NOTIFICATION TESTS ==========

    #[test]
    fn test_cues_per_command() {
        let mut recorder = Recorder::default();
        let mut term = Terminal::with_notifier(Vec::new(), &mut recorder);
        term.execute(&Command::ChangeColor(Color::Red)).unwrap();
        term.execute(&Command::Move(Direction::Up, 2)).unwrap();
        term.execute(&Command::SetAttribute(Attribute::Blink)).unwrap();
        term.execute(&Command::SetAttribute(Attribute::Reset)).unwrap();
        term.execute(&Command::Unrecognized(Fallback::ConsultHelp))
            .unwrap();
        drop(term);

        assert_eq!(
            recorder.cues,
            vec![
                Cue::new("change", "color").with_detail("red"),
                Cue::new("move", "up").with_detail("2"),
                Cue::new("set", "attribute").with_detail("blink"),
                Cue::new("reset", ""),
                Cue::new("help", ""),
            ]
        );
    }

    #[test]
    fn test_notifier_failure_is_swallowed() {
        let mut recorder = Recorder {
            fail: true,
            ..Recorder::default()
        };
        let mut term = Terminal::with_notifier(Vec::new(), &mut recorder);
        term.execute(&Command::Clear).unwrap();
        assert_eq!(term.into_inner(), b"\x1B[H\x1B[2J");
        assert_eq!(recorder.cues.len(), 1);
    }

    #[test]
    fn test_stream_failure_propagates() {
        let mut recorder = Recorder::default();
        let mut term = Terminal::with_notifier(BrokenStream, &mut recorder);
        let err = term.execute(&Command::Clear).unwrap_err();
        assert!(matches!(err, TermError::Stream(_)));
        drop(term);
        // Nothing was performed, so nothing is announced
        assert!(recorder.cues.is_empty());
    }
}
