// SPDX-FileCopyrightText: Copyright (C) 2018-2024 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Screen models.

pub mod auth;
pub mod countdown;
pub mod dashboard;
pub mod onboarding;
