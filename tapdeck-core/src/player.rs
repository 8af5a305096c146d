//! Player display state
//!
//! Snapshot of what the playback engine wants on screen. The panel does not
//! own this state; the controller builds a [`PlayerView`] for every frame.

use core::fmt::Write;

use heapless::String;

use crate::config::PROGRESS_SCALE;

/// Raw sentinel used by playback controllers for "no track / unknown"
pub const UNKNOWN: i32 = -1;

/// Capacity of the "index/count" label
pub const TRACK_LABEL_LEN: usize = 24;

/// Playback progress in parts per thousand (0..=1000)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Progress(u16);

impl Progress {
    pub const START: Self = Self(0);
    pub const END: Self = Self(PROGRESS_SCALE as u16);

    /// Build from a raw permille value, clamping into 0..=1000
    pub fn from_permille(permille: i32) -> Self {
        Self(permille.clamp(0, PROGRESS_SCALE) as u16)
    }

    pub const fn permille(self) -> u16 {
        self.0
    }

    /// Width of the filled part of a track `track_width` pixels wide
    ///
    /// Integer division truncates, so a small non-zero progress can map to
    /// zero pixels.
    pub const fn scale(self, track_width: i32) -> i32 {
        track_width * self.0 as i32 / PROGRESS_SCALE
    }

    /// Whether anything has been played yet
    pub const fn is_started(self) -> bool {
        self.0 > 0
    }
}

/// Position of the current track in the playlist
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TrackPosition {
    /// Zero-based index of the current track
    pub index: u32,
    /// Number of tracks
    pub count: u32,
}

impl TrackPosition {
    /// Render as "<index+1>/<count>"
    pub fn label(&self) -> String<TRACK_LABEL_LEN> {
        let mut text = String::new();
        // Two u32 values and a slash always fit
        let _ = write!(text, "{}/{}", self.index as u64 + 1, self.count);
        text
    }
}

/// Everything the compositor needs to draw the player screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PlayerView<'a> {
    /// Number of files, `None` if unknown
    pub file_count: Option<u32>,
    /// Zero-based index of the current file, `None` if unknown
    pub current_index: Option<u32>,
    /// Name of the current file, `None` if no track is loaded
    pub file_name: Option<&'a str>,
    pub progress: Progress,
    pub is_playing: bool,
}

impl<'a> PlayerView<'a> {
    /// Build a view from controller values that use `-1` for "unknown"
    pub fn from_raw(
        file_count: i32,
        current_index: i32,
        file_name: Option<&'a str>,
        progress_permille: i32,
        is_playing: bool,
    ) -> Self {
        Self {
            file_count: known(file_count),
            current_index: known(current_index),
            file_name,
            progress: Progress::from_permille(progress_permille),
            is_playing,
        }
    }

    /// Track position, only when both index and count are known
    pub fn track_position(&self) -> Option<TrackPosition> {
        match (self.current_index, self.file_count) {
            (Some(index), Some(count)) => Some(TrackPosition { index, count }),
            _ => None,
        }
    }
}

fn known(raw: i32) -> Option<u32> {
    u32::try_from(raw).ok()
}
