//! Feedback for performed actions.
//!
//! The terminal reports each action it performs as a [`Cue`] to a
//! [`Notifier`]. [`Silent`] drops them; [`SoundBoard`] plays a short `.wav`
//! clip per word of the cue through an external audio player.

use crate::error::NotifyError;
use log::{debug, warn};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::thread;
use std::time::Duration;

/// An "action performed" event: e.g. `change` / `color` / `red`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Cue {
    pub category: &'static str,
    pub name: String,
    pub detail: Option<String>,
}

impl Cue {
    pub fn new(category: &'static str, name: impl Into<String>) -> Self {
        Self {
            category,
            name: name.into(),
            detail: None,
        }
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    /// Non-empty words of the cue, in playback order.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        [Some(self.category), Some(self.name.as_str()), self.detail.as_deref()]
            .into_iter()
            .flatten()
            .filter(|w| !w.is_empty())
    }

    /// Cues for actions that changed the terminal, as opposed to help/reset.
    fn is_action(&self) -> bool {
        matches!(self.category, "change" | "move" | "clear" | "set")
    }
}

pub trait Notifier {
    /// May block until the feedback has finished.
    fn notify(&mut self, cue: &Cue) -> Result<(), NotifyError>;
}

/// Notifier that does nothing.
#[derive(Clone, Copy, Debug, Default)]
pub struct Silent;

impl Notifier for Silent {
    fn notify(&mut self, _cue: &Cue) -> Result<(), NotifyError> {
        Ok(())
    }
}

/// Pause before the follow-up clip.
pub const FOLLOW_UP_PAUSE: Duration = Duration::from_millis(1200);

/// Clip asking whether anything else is needed.
pub const FOLLOW_UP_CLIP: &str = "else";

#[cfg(target_os = "macos")]
pub const DEFAULT_PLAYER: &str = "afplay";
#[cfg(not(target_os = "macos"))]
pub const DEFAULT_PLAYER: &str = "aplay";

/// Plays `<word>.wav` from a clip directory for each word of a cue.
#[derive(Clone, Debug)]
pub struct SoundBoard {
    clips: PathBuf,
    player: String,
    pause: Duration,
}

impl SoundBoard {
    pub fn new(clips: impl Into<PathBuf>) -> Self {
        Self {
            clips: clips.into(),
            player: DEFAULT_PLAYER.to_string(),
            pause: FOLLOW_UP_PAUSE,
        }
    }

    pub fn with_player(mut self, player: impl Into<String>) -> Self {
        self.player = player.into();
        self
    }

    pub fn with_pause(mut self, pause: Duration) -> Self {
        self.pause = pause;
        self
    }

    pub fn clip_path(&self, word: &str) -> PathBuf {
        self.clips.join(format!("{word}.wav"))
    }

    /// Clips for a cue in playback order, ending with the follow-up clip for
    /// cues that changed the terminal. Clips are not checked for existence.
    pub fn playlist(&self, cue: &Cue) -> Vec<PathBuf> {
        let mut clips: Vec<PathBuf> = cue.words().map(|word| self.clip_path(word)).collect();
        if cue.is_action() {
            clips.push(self.clip_path(FOLLOW_UP_CLIP));
        }
        clips
    }

    fn play(&self, clip: &Path) -> Result<(), NotifyError> {
        debug!("Playing {} with {}", clip.display(), self.player);
        let status = Command::new(&self.player)
            .arg(clip)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map_err(|e| NotifyError::Player {
                player: self.player.clone(),
                reason: e.to_string(),
            })?;

        if status.success() {
            Ok(())
        } else {
            Err(NotifyError::Player {
                player: self.player.clone(),
                reason: status.to_string(),
            })
        }
    }
}

impl Notifier for SoundBoard {
    /// Plays every clip that can be played. A missing clip or a failing player
    /// is logged and skipped; the first such failure is returned at the end.
    fn notify(&mut self, cue: &Cue) -> Result<(), NotifyError> {
        let playlist = self.playlist(cue);
        let follow_up = cue.is_action().then(|| playlist.len() - 1);
        let mut first_error = None;

        for (i, clip) in playlist.iter().enumerate() {
            if Some(i) == follow_up {
                thread::sleep(self.pause);
            }
            let result = if clip.is_file() {
                self.play(clip)
            } else {
                Err(NotifyError::MissingClip { path: clip.clone() })
            };
            if let Err(e) = result {
                warn!("{}", e);
                first_error.get_or_insert(e);
            }
        }

        first_error.map_or(Ok(()), Err)
    }
}
