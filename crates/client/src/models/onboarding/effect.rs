// SPDX-FileCopyrightText: Copyright (C) 2018-2024 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use countdown_core::{
    album::{Album, Rank},
    progress::Progress,
};

use super::{EffectApplied, Model, Task};
use crate::{Error, Result, util::roundtrip::PendingToken};

#[derive(Debug)]
pub enum Effect {
    FetchAlbumsAccepted,
    FetchAlbumsFinished {
        token: PendingToken,
        result: Result<Vec<Album>>,
    },
    SearchTermUpdated {
        search_term: String,
    },
    RankSelected {
        rank: Rank,
    },
    StartAccepted {
        start_rank: Rank,
    },
    StartFinished {
        token: PendingToken,
        result: Result<Progress>,
    },
    ErrorOccurred(Error),
}

impl Effect {
    pub fn apply_on(self, model: &mut Model) -> EffectApplied {
        log::trace!("Applying effect {self:?} on {model:?}");
        match self {
            Self::FetchAlbumsAccepted => {
                let token = model.albums.start_pending();
                model.last_error = None;
                EffectApplied::maybe_changed_task(Task::FetchAlbums { token })
            }
            Self::FetchAlbumsFinished { token, result } => match result {
                Ok(albums) => {
                    if model
                        .albums
                        .finish_pending_with_value(token, albums)
                        .is_err()
                    {
                        return EffectApplied::unchanged();
                    }
                    EffectApplied::maybe_changed()
                }
                Err(err) => {
                    if !model.albums.finish_pending(token) {
                        return EffectApplied::unchanged();
                    }
                    model.last_error = Some(err);
                    EffectApplied::maybe_changed()
                }
            },
            Self::SearchTermUpdated { search_term } => {
                model.search_term = search_term;
                EffectApplied::maybe_changed()
            }
            Self::RankSelected { rank } => {
                if model.selected_rank == rank {
                    return EffectApplied::unchanged();
                }
                model.selected_rank = rank;
                EffectApplied::maybe_changed()
            }
            Self::StartAccepted { start_rank } => {
                let token = model.started.start_pending();
                model.last_error = None;
                EffectApplied::maybe_changed_task(Task::Start { token, start_rank })
            }
            Self::StartFinished { token, result } => match result {
                Ok(progress) => {
                    if model
                        .started
                        .finish_pending_with_value(token, progress)
                        .is_err()
                    {
                        return EffectApplied::unchanged();
                    }
                    EffectApplied::maybe_changed()
                }
                Err(err) => {
                    if !model.started.finish_pending(token) {
                        return EffectApplied::unchanged();
                    }
                    log::warn!("Failed to start countdown: {err}");
                    model.last_error = Some(err);
                    EffectApplied::maybe_changed()
                }
            },
            Self::ErrorOccurred(err) => {
                model.last_error = Some(err);
                EffectApplied::maybe_changed()
            }
        }
    }
}
