// SPDX-FileCopyrightText: Copyright (C) 2018-2024 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use semval::IsValid as _;

use crate::prelude::*;

mod _core {
    pub(super) use countdown_core::album::*;
}

///////////////////////////////////////////////////////////////////////
// Album
///////////////////////////////////////////////////////////////////////

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(test, derive(PartialEq, Eq))]
pub struct Album {
    id: u64,

    rank: u16,

    artist: String,

    album: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    info: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<String>,
}

impl Album {
    #[must_use]
    pub const fn id(&self) -> u64 {
        self.id
    }
}

impl TryFrom<Album> for _core::Album {
    type Error = anyhow::Error;

    fn try_from(from: Album) -> anyhow::Result<Self> {
        let Album {
            id,
            rank,
            artist,
            album,
            info,
            description,
        } = from;
        let into = Self {
            id: _core::AlbumId::new(id),
            rank: _core::Rank::new(rank),
            artist,
            title: album,
            info: info.filter(|info| !info.trim().is_empty()),
            description: description.filter(|description| !description.trim().is_empty()),
        };
        if !into.is_valid() {
            anyhow::bail!("invalid album: {into:?}");
        }
        Ok(into)
    }
}

impl From<_core::Album> for Album {
    fn from(from: _core::Album) -> Self {
        let _core::Album {
            id,
            rank,
            artist,
            title,
            info,
            description,
        } = from;
        Self {
            id: id.value(),
            rank: rank.value(),
            artist,
            album: title,
            info,
            description,
        }
    }
}

///////////////////////////////////////////////////////////////////////
// Catalog
///////////////////////////////////////////////////////////////////////

#[derive(Debug, Default, Serialize, Deserialize)]
#[cfg_attr(test, derive(PartialEq, Eq))]
pub struct AlbumsResponse {
    albums: Vec<Album>,
}

impl TryFrom<AlbumsResponse> for Vec<_core::Album> {
    type Error = anyhow::Error;

    fn try_from(from: AlbumsResponse) -> anyhow::Result<Self> {
        let AlbumsResponse { albums } = from;
        albums.into_iter().map(TryInto::try_into).collect()
    }
}

impl From<Vec<_core::Album>> for AlbumsResponse {
    fn from(from: Vec<_core::Album>) -> Self {
        Self {
            albums: from.into_iter().map(Into::into).collect(),
        }
    }
}

#[cfg(test)]
mod tests;
