// SPDX-FileCopyrightText: Copyright (C) 2018-2024 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use countdown_core::{
    progress::{Position, Progress},
    rating::NewRating,
};

use super::{EffectApplied, Model, Task, ViewState};
use crate::{Error, Result, util::roundtrip::PendingToken, webapi::progress::CompleteOutcome};

#[derive(Debug)]
pub enum Effect {
    FetchProgressAccepted,
    FetchProgressFinished {
        token: PendingToken,
        result: Result<Progress>,
    },
    CompleteCurrentAccepted {
        expected: Position,
    },
    CompleteCurrentFinished {
        token: PendingToken,
        expected: Position,
        result: Result<CompleteOutcome>,
    },
    SubmitRatingAccepted {
        new_rating: NewRating,
    },
    SubmitRatingFinished {
        token: PendingToken,
        result: Result<()>,
    },
    RatingSkipped,
    ErrorOccurred(Error),
}

fn ready_or_completed(progress: &Progress) -> ViewState {
    match progress {
        Progress::InProgress { .. } => ViewState::Ready,
        Progress::Completed => ViewState::Completed,
    }
}

impl Effect {
    pub fn apply_on(self, model: &mut Model) -> EffectApplied {
        log::trace!("Applying effect {self:?} on {model:?}");
        match self {
            Self::FetchProgressAccepted => {
                let token = model.progress.start_pending();
                model.view_state = ViewState::Loading;
                model.last_error = None;
                EffectApplied::maybe_changed_task(Task::FetchProgress { token })
            }
            Self::FetchProgressFinished { token, result } => match result {
                Ok(progress) => {
                    let view_state = ready_or_completed(&progress);
                    if model
                        .progress
                        .finish_pending_with_value(token, progress)
                        .is_err()
                    {
                        return EffectApplied::unchanged();
                    }
                    model.view_state = view_state;
                    EffectApplied::maybe_changed()
                }
                Err(err) => {
                    if !model.progress.finish_pending(token) {
                        return EffectApplied::unchanged();
                    }
                    if err.is_not_initialized() {
                        model.progress.reset();
                        model.view_state = ViewState::NeedsOnboarding;
                    } else {
                        model.view_state = ViewState::Error {
                            message: err.to_string(),
                        };
                        model.last_error = Some(err);
                    }
                    EffectApplied::maybe_changed()
                }
            },
            Self::CompleteCurrentAccepted { expected } => {
                let token = model.progress.start_pending();
                model.last_message = None;
                model.last_error = None;
                EffectApplied::maybe_changed_task(Task::CompleteCurrent { token, expected })
            }
            Self::CompleteCurrentFinished {
                token,
                expected,
                result,
            } => match result {
                Ok(outcome) => {
                    let CompleteOutcome {
                        message,
                        completion,
                    } = outcome;
                    let actual = completion.position();
                    if actual != expected {
                        log::warn!("Unexpected position after completion: {actual:?} <> {expected:?}");
                    }
                    let completed_album = model.current_album().cloned();
                    if model
                        .progress
                        .finish_pending_with_value(token, completion.into_progress())
                        .is_err()
                    {
                        return EffectApplied::unchanged();
                    }
                    model.last_message = message;
                    model.view_state = match completed_album {
                        _ if actual.is_completed() => ViewState::Completed,
                        Some(completed_album) => ViewState::ShowingRatingPrompt { completed_album },
                        None => ViewState::Ready,
                    };
                    EffectApplied::maybe_changed()
                }
                Err(err) => {
                    if !model.progress.finish_pending(token) {
                        return EffectApplied::unchanged();
                    }
                    model.last_error = Some(err);
                    EffectApplied::maybe_changed()
                }
            },
            Self::SubmitRatingAccepted { new_rating } => {
                let token = model.rating_submission.start_pending();
                model.last_error = None;
                EffectApplied::maybe_changed_task(Task::SubmitRating { token, new_rating })
            }
            Self::SubmitRatingFinished { token, result } => {
                if !model.rating_submission.finish_pending(token) {
                    return EffectApplied::unchanged();
                }
                match result {
                    Ok(()) => Self::FetchProgressAccepted.apply_on(model),
                    Err(err) => {
                        // Stay on the prompt for another attempt.
                        model.last_error = Some(err);
                        EffectApplied::maybe_changed()
                    }
                }
            }
            // The prompt is closed by refetching the progress.
            Self::RatingSkipped => Self::FetchProgressAccepted.apply_on(model),
            Self::ErrorOccurred(err) => {
                model.last_error = Some(err);
                EffectApplied::maybe_changed()
            }
        }
    }
}
