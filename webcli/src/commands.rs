// SPDX-FileCopyrightText: Copyright (C) 2018-2024 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::sync::Arc;

use clap::ArgMatches;
use countdown_client::{
    ClientEnvironment as _, Environment, Route,
    models::{
        auth::{self, Password},
        countdown, dashboard, onboarding,
    },
};
use countdown_core::{
    album::{Rank, RankValue},
    rating::{RatingFilter, SortField, Stars},
};

use crate::{
    EMAIL_ARG, FILTER_ARG, PASSWORD_ARG, RANK_ARG, RATING_ARG, SEARCH_ARG, SKIP_ARG, SORT_ARG,
    USERNAME_ARG,
    output::{album_details, album_line, countdown_text, dashboard_text},
    script::{Screen, run_script},
};

fn required_arg(matches: &ArgMatches, id: &str) -> anyhow::Result<String> {
    matches
        .get_one::<String>(id)
        .cloned()
        .ok_or_else(|| anyhow::anyhow!("missing argument --{id}"))
}

fn check_last_error(model: &impl Screen) -> anyhow::Result<()> {
    match model.last_error() {
        Some(err) => Err(anyhow::anyhow!("{err}")),
        None => Ok(()),
    }
}

fn require_route(env: &Environment, route: Route) -> anyhow::Result<()> {
    if env.navigate(route) != route {
        anyhow::bail!("Not logged in. Please log in with `countdown login` first.");
    }
    Ok(())
}

pub(crate) async fn login(env: &Arc<Environment>, matches: &ArgMatches) -> anyhow::Result<()> {
    let username = required_arg(matches, USERNAME_ARG)?;
    let password = Password::new(required_arg(matches, PASSWORD_ARG)?);
    let mut model = auth::Model::default();
    run_script(env, &mut model, [auth::Intent::Login { username, password }]).await;
    check_last_error(&model)?;
    if let Some(user) = model.user() {
        println!("Logged in as {}", user.username);
    }
    Ok(())
}

pub(crate) async fn signup(env: &Arc<Environment>, matches: &ArgMatches) -> anyhow::Result<()> {
    let username = required_arg(matches, USERNAME_ARG)?;
    let email = required_arg(matches, EMAIL_ARG)?;
    let password = Password::new(required_arg(matches, PASSWORD_ARG)?);
    let mut model = auth::Model::default();
    run_script(
        env,
        &mut model,
        [auth::Intent::Signup {
            username,
            email,
            password,
        }],
    )
    .await;
    check_last_error(&model)?;
    if let Some(user) = model.user() {
        println!("Signed up and logged in as {}", user.username);
    }
    Ok(())
}

pub(crate) async fn logout(env: &Arc<Environment>) -> anyhow::Result<()> {
    let mut model = auth::Model::default();
    run_script(env, &mut model, [auth::Intent::Logout]).await;
    check_last_error(&model)?;
    println!("Logged out");
    Ok(())
}

pub(crate) async fn whoami(env: &Arc<Environment>) -> anyhow::Result<()> {
    if !env.session().is_authenticated() {
        println!("Not logged in");
        return Ok(());
    }
    let mut model = auth::Model::default();
    run_script(env, &mut model, [auth::Intent::FetchCurrentUser]).await;
    check_last_error(&model)?;
    if let Some(user) = model.user() {
        match &user.email {
            Some(email) => println!("{} <{email}>", user.username),
            None => println!("{}", user.username),
        }
    }
    Ok(())
}

pub(crate) async fn albums(env: &Arc<Environment>, matches: &ArgMatches) -> anyhow::Result<()> {
    require_route(env, Route::Onboarding)?;
    let mut intents = vec![onboarding::Intent::FetchAlbums];
    if let Some(search_term) = matches.get_one::<String>(SEARCH_ARG) {
        intents.push(onboarding::Intent::UpdateSearchTerm {
            search_term: search_term.clone(),
        });
    }
    let mut model = onboarding::Model::default();
    run_script(env, &mut model, intents).await;
    check_last_error(&model)?;
    let albums = model.filtered_albums();
    for album in &albums {
        println!("{}", album_line(album));
    }
    log::info!("Found {} album(s)", albums.len());
    Ok(())
}

pub(crate) async fn onboard(env: &Arc<Environment>, matches: &ArgMatches) -> anyhow::Result<()> {
    require_route(env, Route::Onboarding)?;
    let intents = match matches.get_one::<RankValue>(RANK_ARG) {
        Some(rank) => vec![
            onboarding::Intent::SelectRank {
                rank: Rank::new(*rank),
            },
            onboarding::Intent::StartFromSelected,
        ],
        None => vec![onboarding::Intent::StartFromBeginning],
    };
    let mut model = onboarding::Model::default();
    run_script(env, &mut model, intents).await;
    check_last_error(&model)?;
    if let Some(album) = model.started().and_then(|progress| progress.current_album()) {
        println!("Countdown started with:\n{}", album_details(album));
    }
    Ok(())
}

pub(crate) async fn current(env: &Arc<Environment>) -> anyhow::Result<()> {
    require_route(env, Route::Countdown)?;
    let mut model = countdown::Model::default();
    run_script(env, &mut model, [countdown::Intent::FetchProgress]).await;
    check_last_error(&model)?;
    print!("{}", countdown_text(&model));
    Ok(())
}

pub(crate) async fn complete(env: &Arc<Environment>, matches: &ArgMatches) -> anyhow::Result<()> {
    require_route(env, Route::Countdown)?;
    let rate_or_skip = match matches.get_one::<Stars>(RATING_ARG) {
        Some(stars) => countdown::Intent::SubmitRating { stars: *stars },
        None => {
            if !matches.get_flag(SKIP_ARG) {
                log::info!("Completing without a rating");
            }
            countdown::Intent::SkipRating
        }
    };
    let mut model = countdown::Model::default();
    run_script(
        env,
        &mut model,
        [
            countdown::Intent::FetchProgress,
            countdown::Intent::CompleteCurrent,
            rate_or_skip,
        ],
    )
    .await;
    check_last_error(&model)?;
    print!("{}", countdown_text(&model));
    Ok(())
}

pub(crate) async fn dashboard(env: &Arc<Environment>, matches: &ArgMatches) -> anyhow::Result<()> {
    require_route(env, Route::Dashboard)?;
    let sort = matches
        .get_one::<SortField>(SORT_ARG)
        .copied()
        .unwrap_or_default();
    let filter = matches
        .get_one::<String>(FILTER_ARG)
        .map(|filter| filter.parse::<RatingFilter>())
        .transpose()?
        .unwrap_or_default();
    let mut model = dashboard::Model::default();
    run_script(
        env,
        &mut model,
        [
            dashboard::Intent::SortBy(sort),
            dashboard::Intent::FilterBy(filter),
            dashboard::Intent::FetchAll,
        ],
    )
    .await;
    check_last_error(&model)?;
    print!("{}", dashboard_text(&model));
    Ok(())
}
