/// Play/pause state behind the music button.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MusicToggle {
    playing: bool,
}

pub const PLAYING_LABEL: &str = "⏸ Pause Music";
pub const PAUSED_LABEL: &str = "🎵 Toggle Music";

impl MusicToggle {
    pub fn new(playing: bool) -> Self {
        Self { playing }
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn set_playing(&mut self, playing: bool) {
        self.playing = playing;
    }

    /// Flip and return the new state.
    pub fn toggle(&mut self) -> bool {
        self.playing = !self.playing;
        self.playing
    }

    pub fn label(&self) -> &'static str {
        if self.playing {
            PLAYING_LABEL
        } else {
            PAUSED_LABEL
        }
    }
}
