// SPDX-FileCopyrightText: Copyright (C) 2018-2024 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use crate::{album::Album, prelude::*};

mod _core {
    pub(super) use countdown_core::{album::Album, progress::*};
}

/// Marker in the message that accompanies the terminal completion.
pub const TERMINAL_COMPLETION_MESSAGE_MARKER: &str = "Congratulations";

#[derive(Debug, Default, Serialize, Deserialize)]
#[cfg_attr(test, derive(PartialEq, Eq))]
pub struct ProgressResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub all_completed: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_album: Option<Album>,
}

impl TryFrom<ProgressResponse> for _core::Progress {
    type Error = anyhow::Error;

    fn try_from(from: ProgressResponse) -> anyhow::Result<Self> {
        let ProgressResponse {
            message: _,
            all_completed,
            current_album,
        } = from;
        if all_completed.unwrap_or(false) {
            return Ok(Self::Completed);
        }
        let Some(current_album) = current_album else {
            anyhow::bail!("missing current album");
        };
        let current_album = _core::Album::try_from(current_album)?;
        Ok(Self::InProgress { current_album })
    }
}

impl From<_core::Progress> for ProgressResponse {
    fn from(from: _core::Progress) -> Self {
        match from {
            _core::Progress::InProgress { current_album } => Self {
                message: None,
                all_completed: Some(false),
                current_album: Some(current_album.into()),
            },
            _core::Progress::Completed => Self {
                message: None,
                all_completed: Some(true),
                current_album: None,
            },
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[cfg_attr(test, derive(PartialEq, Eq))]
pub struct InitializeRequest {
    pub album_rank: u16,
}

impl From<countdown_core::album::Rank> for InitializeRequest {
    fn from(from: countdown_core::album::Rank) -> Self {
        Self {
            album_rank: from.value(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[cfg_attr(test, derive(PartialEq, Eq))]
pub struct InitializeResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    pub current_album: Album,
}

impl TryFrom<InitializeResponse> for _core::Progress {
    type Error = anyhow::Error;

    fn try_from(from: InitializeResponse) -> anyhow::Result<Self> {
        let InitializeResponse {
            message: _,
            current_album,
        } = from;
        let current_album = _core::Album::try_from(current_album)?;
        Ok(Self::InProgress { current_album })
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[cfg_attr(test, derive(PartialEq, Eq))]
pub struct CompleteResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub all_completed: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_album: Option<Album>,
}

impl CompleteResponse {
    /// Check if the whole countdown has been completed.
    ///
    /// Either signalled by a flag or by the congratulation message.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.all_completed.unwrap_or(false)
            || self
                .message
                .as_deref()
                .is_some_and(|message| message.contains(TERMINAL_COMPLETION_MESSAGE_MARKER))
    }
}

impl TryFrom<CompleteResponse> for _core::Completion {
    type Error = anyhow::Error;

    fn try_from(from: CompleteResponse) -> anyhow::Result<Self> {
        if from.is_terminal() {
            return Ok(Self::Finished);
        }
        let CompleteResponse { next_album, .. } = from;
        let Some(next_album) = next_album else {
            anyhow::bail!("missing next album");
        };
        let next_album = _core::Album::try_from(next_album)?;
        Ok(Self::Advanced { next_album })
    }
}

#[cfg(test)]
mod tests;
