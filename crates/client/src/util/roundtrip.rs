// SPDX-FileCopyrightText: Copyright (C) 2018-2021 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

type EpochNumber = usize;

const INITIAL_EPOCH_NUMBER: EpochNumber = 0;

type SequenceNumber = usize;

const INITIAL_SEQUENCE_NUMBER: SequenceNumber = 0;

/// Tracks the most recent request of a roundtrip.
///
/// Each request is identified by a [`PendingToken`]. Only the
/// response to the most recent request is accepted, responses to
/// older requests are considered stale. Resetting the watermark
/// invalidates all tokens that have been issued before.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Watermark {
    epoch: EpochNumber,
    sequence: SequenceNumber,
    pending: bool,
}

impl Watermark {
    pub const INITIAL: Self = Self {
        epoch: INITIAL_EPOCH_NUMBER,
        sequence: INITIAL_SEQUENCE_NUMBER,
        pending: false,
    };

    #[must_use]
    pub const fn new() -> Self {
        Self::INITIAL
    }

    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.pending
    }

    pub fn reset(&mut self) {
        self.epoch = self.epoch.wrapping_add(1);
        self.sequence = INITIAL_SEQUENCE_NUMBER;
        self.pending = false;
    }

    /// Start a new request.
    ///
    /// Supersedes a request that is still pending.
    pub fn start_pending(&mut self) -> PendingToken {
        self.sequence = self.sequence.wrapping_add(1);
        self.pending = true;
        PendingToken {
            epoch: self.epoch,
            sequence: self.sequence,
        }
    }

    /// Finish the most recent request.
    ///
    /// Returns `false` if the token is stale.
    pub fn finish_pending(&mut self, token: PendingToken) -> bool {
        if !self.pending || token.epoch != self.epoch || token.sequence != self.sequence {
            log::debug!("Discarding stale response: {token:?}");
            return false;
        }
        self.pending = false;
        true
    }
}

impl Default for Watermark {
    fn default() -> Self {
        Self::new()
    }
}

/// Identifies a pending request.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct PendingToken {
    epoch: EpochNumber,
    sequence: SequenceNumber,
}
