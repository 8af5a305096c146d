//! Button identities and the commands they map to

use heapless::Vec;

use crate::config::{BACK_REGION, NEXT_REGION, PLAY_PAUSE_REGION};
use crate::geometry::Region;

/// On-screen buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonId {
    Back,
    Next,
    PlayPause,
}

impl ButtonId {
    /// All buttons in sampling order
    pub const ALL: [ButtonId; 3] = [ButtonId::Back, ButtonId::Next, ButtonId::PlayPause];

    /// Fixed touch region of this button
    pub const fn region(self) -> Region {
        match self {
            ButtonId::Back => BACK_REGION,
            ButtonId::Next => NEXT_REGION,
            ButtonId::PlayPause => PLAY_PAUSE_REGION,
        }
    }

    /// Position in [`ButtonId::ALL`]
    pub const fn index(self) -> usize {
        match self {
            ButtonId::Back => 0,
            ButtonId::Next => 1,
            ButtonId::PlayPause => 2,
        }
    }

    /// Playback command triggered by pressing this button
    pub const fn command(self) -> PlaybackCommand {
        match self {
            ButtonId::Back => PlaybackCommand::Previous,
            ButtonId::Next => PlaybackCommand::Next,
            ButtonId::PlayPause => PlaybackCommand::TogglePlayback,
        }
    }
}

/// Command for the playback controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PlaybackCommand {
    /// Go to the previous track
    Previous,
    /// Go to the next track
    Next,
    /// Toggle between playing and paused
    TogglePlayback,
}

/// Presses drained in one go, in sampling order
pub type PressedButtons = Vec<ButtonId, 3>;
