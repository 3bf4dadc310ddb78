//! Static playlist and pure player state.

/// One playlist entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Track {
    pub title: &'static str,
    pub artist: &'static str,
    pub duration_secs: u32,
    pub art_url: &'static str,
    pub audio_url: &'static str,
}

pub const PLAYLIST: &[Track] = &[
    Track {
        title: "Dial-Up Dreams",
        artist: "The Modem Choir",
        duration_secs: 214,
        art_url: "/images/albums/dial-up-dreams.png",
        audio_url: "/audio/dial-up-dreams.mp3",
    },
    Track {
        title: "640K Ought To Be Enough",
        artist: "Segfault Serenade",
        duration_secs: 187,
        art_url: "/images/albums/640k.png",
        audio_url: "/audio/640k.mp3",
    },
    Track {
        title: "CRT Afterglow",
        artist: "The Modem Choir",
        duration_secs: 243,
        art_url: "/images/albums/crt-afterglow.png",
        audio_url: "/audio/crt-afterglow.mp3",
    },
    Track {
        title: "Defrag Lullaby",
        artist: "Blue Screen Quartet",
        duration_secs: 198,
        art_url: "/images/albums/defrag-lullaby.png",
        audio_url: "/audio/defrag-lullaby.mp3",
    },
];

/// Pure playback state; the component mirrors it onto the audio element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayerState {
    pub track: usize,
    pub playing: bool,
    pub volume: f64,
    pub muted: bool,
}

impl Default for PlayerState {
    fn default() -> Self {
        Self {
            track: 0,
            playing: false,
            volume: 0.7,
            muted: false,
        }
    }
}

impl PlayerState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> &'static Track {
        &PLAYLIST[self.track]
    }

    /// Advances to the next track, wrapping at the end of the playlist.
    pub fn next(&mut self) {
        self.track = (self.track + 1) % PLAYLIST.len();
    }

    /// Steps to the previous track, wrapping at the start.
    pub fn previous(&mut self) {
        self.track = self.track.checked_sub(1).unwrap_or(PLAYLIST.len() - 1);
    }

    pub fn toggle_play(&mut self) {
        self.playing = !self.playing;
    }

    pub fn toggle_mute(&mut self) {
        self.muted = !self.muted;
    }

    pub fn set_volume(&mut self, volume: f64) {
        self.volume = volume.clamp(0.0, 1.0);
    }

    /// Volume the audio element should actually use.
    pub fn effective_volume(&self) -> f64 {
        if self.muted {
            0.0
        } else {
            self.volume
        }
    }
}

/// `m:ss` display for track times.
pub fn format_duration(secs: u32) -> String {
    format!("{}:{:02}", secs / 60, secs % 60)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn skipping_wraps_in_both_directions() {
        let mut state = PlayerState::new();
        state.previous();
        assert_eq!(state.track, PLAYLIST.len() - 1);
        state.next();
        assert_eq!(state.track, 0);

        for _ in 0..PLAYLIST.len() {
            state.next();
        }
        assert_eq!(state.track, 0);
    }

    #[test]
    fn volume_clamps_and_mute_silences() {
        let mut state = PlayerState::new();
        state.set_volume(1.7);
        assert_eq!(state.volume, 1.0);
        state.set_volume(-0.3);
        assert_eq!(state.volume, 0.0);

        state.set_volume(0.5);
        state.toggle_mute();
        assert_eq!(state.effective_volume(), 0.0);
        state.toggle_mute();
        assert_eq!(state.effective_volume(), 0.5);
    }

    #[test]
    fn durations_format_as_minutes_and_seconds() {
        assert_eq!(format_duration(0), "0:00");
        assert_eq!(format_duration(65), "1:05");
        assert_eq!(format_duration(214), "3:34");
    }
}
