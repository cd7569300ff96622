// SPDX-FileCopyrightText: Copyright (C) 2018-2025 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use crate::album::{Album, Rank};

/// Position of a user within the countdown.
///
/// The rank of the current album strictly decreases from 500
/// to 1 until the countdown has been completed.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Position {
    /// No starting rank has been chosen yet.
    #[default]
    Uninitialized,

    /// Listening to the album at the given rank.
    InProgress(Rank),

    /// The album at the last rank has been completed.
    Completed,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum PositionError {
    #[display("invalid start rank: {_0}")]
    InvalidRank(#[error(not(source))] Rank),

    #[display("progress has already been initialized")]
    AlreadyInitialized,

    #[display("no album is currently in progress")]
    NotInProgress,
}

impl Position {
    /// Start the countdown at the given rank.
    pub fn initialize(self, start_rank: Rank) -> Result<Self, PositionError> {
        if !start_rank.is_valid() {
            return Err(PositionError::InvalidRank(start_rank));
        }
        match self {
            Self::Uninitialized => Ok(Self::InProgress(start_rank)),
            Self::InProgress(_) | Self::Completed => Err(PositionError::AlreadyInitialized),
        }
    }

    /// Complete the album at the current rank.
    ///
    /// Advances to the next lower rank or terminates the countdown
    /// after completing the last rank.
    pub fn complete_current(self) -> Result<Self, PositionError> {
        let Self::InProgress(current_rank) = self else {
            return Err(PositionError::NotInProgress);
        };
        let next = current_rank
            .next()
            .map_or(Self::Completed, Self::InProgress);
        Ok(next)
    }

    #[must_use]
    pub const fn current_rank(self) -> Option<Rank> {
        match self {
            Self::InProgress(rank) => Some(rank),
            Self::Uninitialized | Self::Completed => None,
        }
    }

    #[must_use]
    pub const fn is_completed(self) -> bool {
        matches!(self, Self::Completed)
    }
}

/// Snapshot of the progress as reported by the server.
///
/// A missing progress, i.e. a user that still needs onboarding,
/// is represented by the absence of a value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Progress {
    InProgress { current_album: Album },
    Completed,
}

impl Progress {
    #[must_use]
    pub fn position(&self) -> Position {
        match self {
            Self::InProgress { current_album } => Position::InProgress(current_album.rank),
            Self::Completed => Position::Completed,
        }
    }

    #[must_use]
    pub const fn current_album(&self) -> Option<&Album> {
        match self {
            Self::InProgress { current_album } => Some(current_album),
            Self::Completed => None,
        }
    }
}

/// The outcome of completing the current album.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Completion {
    /// Continue with the next album.
    Advanced { next_album: Album },

    /// The whole countdown has been completed.
    Finished,
}

impl Completion {
    #[must_use]
    pub fn position(&self) -> Position {
        match self {
            Self::Advanced { next_album } => Position::InProgress(next_album.rank),
            Self::Finished => Position::Completed,
        }
    }

    /// The progress after the completion.
    #[must_use]
    pub fn into_progress(self) -> Progress {
        match self {
            Self::Advanced { next_album } => Progress::InProgress {
                current_album: next_album,
            },
            Self::Finished => Progress::Completed,
        }
    }
}
