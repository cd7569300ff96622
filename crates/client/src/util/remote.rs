// SPDX-FileCopyrightText: Copyright (C) 2018-2024 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use crate::util::roundtrip::{PendingToken, Watermark};

/// Data that is fetched from or submitted to the server.
///
/// Keeps the last accepted value while a request is pending.
/// Responses to requests that have been superseded or reset
/// are discarded.
#[derive(Debug)]
pub struct RemoteData<T> {
    watermark: Watermark,
    last_value: Option<T>,
}

impl<T> RemoteData<T> {
    #[must_use]
    pub const fn default() -> Self {
        Self {
            watermark: Watermark::INITIAL,
            last_value: None,
        }
    }

    #[must_use]
    pub const fn last_value(&self) -> Option<&T> {
        self.last_value.as_ref()
    }

    /// Forget the last value and discard all pending requests.
    pub fn reset(&mut self) -> Option<T> {
        self.watermark.reset();
        self.last_value.take()
    }

    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.watermark.is_pending()
    }

    /// Start a new request
    ///
    /// A request that is already pending will be discarded when finished.
    pub fn start_pending(&mut self) -> PendingToken {
        self.watermark.start_pending()
    }

    /// Finish a pending request without updating the value.
    ///
    /// Returns `false` if the response is stale.
    pub fn finish_pending(&mut self, token: PendingToken) -> bool {
        self.watermark.finish_pending(token)
    }

    /// Finish a pending request and replace the value.
    ///
    /// Returns the previous value if accepted or hands back
    /// the given value if the response is stale.
    pub fn finish_pending_with_value(
        &mut self,
        token: PendingToken,
        value: impl Into<T>,
    ) -> Result<Option<T>, T> {
        if !self.finish_pending(token) {
            return Err(value.into());
        }
        Ok(self.last_value.replace(value.into()))
    }
}

impl<T> Default for RemoteData<T> {
    fn default() -> Self {
        Self::default()
    }
}
