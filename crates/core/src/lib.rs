// SPDX-FileCopyrightText: Copyright (C) 2018-2024 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Domain model of the 500 albums countdown.
//!
//! Pure data and computations without any I/O.

// Importing all enum variants into a narrow, local scope is acceptable.
#![allow(clippy::enum_glob_use)]

pub mod album;
pub use self::album::{Album, AlbumId, Rank};

pub mod progress;
pub use self::progress::{Completion, Position, Progress};

pub mod rating;
pub use self::rating::{Rating, RatingId, StarRating};

pub mod statistics;
pub use self::statistics::Statistics;

pub mod user;
pub use self::user::{User, UserId};

pub mod prelude {
    // Re-export trait methods from semval
    pub use semval::{IntoValidated as _, IsValid, Validate as _, ValidatedFrom as _};
}
