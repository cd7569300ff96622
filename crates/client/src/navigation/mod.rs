// SPDX-FileCopyrightText: Copyright (C) 2018-2024 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use discro::Subscriber;

use crate::observable::Observable;

/// Screens of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display, strum::EnumString)]
#[strum(serialize_all = "kebab-case")]
pub enum Route {
    Login,
    Onboarding,
    Countdown,
    Dashboard,
}

impl Route {
    /// The landing screen after signing in.
    pub const HOME: Self = Self::Countdown;

    #[must_use]
    pub const fn requires_authentication(self) -> bool {
        !matches!(self, Self::Login)
    }

    /// Route guard
    ///
    /// Anonymous users are sent to the login screen and
    /// authenticated users are sent away from it.
    #[must_use]
    pub const fn guard(self, authenticated: bool) -> Self {
        match (self, authenticated) {
            (Self::Login, true) => Self::HOME,
            (route, false) if route.requires_authentication() => Self::Login,
            (route, _) => route,
        }
    }
}

/// The current screen.
#[derive(Debug)]
pub struct Navigation {
    current: Observable<Route>,
}

impl Navigation {
    #[must_use]
    pub fn new(authenticated: bool) -> Self {
        Self {
            current: Observable::new(Route::HOME.guard(authenticated)),
        }
    }

    #[must_use]
    pub fn current(&self) -> Route {
        *self.current.read()
    }

    #[must_use]
    pub fn subscribe_changed(&self) -> Subscriber<Route> {
        self.current.subscribe_changed()
    }

    /// Navigate to a guarded route.
    ///
    /// Returns the route that has actually been entered.
    pub fn navigate(&self, route: Route, authenticated: bool) -> Route {
        let target = route.guard(authenticated);
        if target != route {
            log::debug!("Redirecting from {route} to {target}");
        }
        self.current.modify(|current| {
            if *current == target {
                return false;
            }
            log::info!("Navigating from {current} to {target}");
            *current = target;
            true
        });
        target
    }

    /// Leave the current screen for the login screen.
    pub fn force_login(&self) {
        self.navigate(Route::Login, false);
    }
}
