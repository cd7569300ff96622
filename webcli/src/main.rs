// SPDX-FileCopyrightText: Copyright (C) 2018-2024 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::sync::Arc;

use clap::{
    Arg, ArgAction, Command,
    builder::{PossibleValuesParser, TypedValueParser as _},
    value_parser,
};
use countdown_client::{Environment, SessionStore, on_session_changed};
use countdown_core::{
    album::RankValue,
    rating::{SortField, StarRating, Stars},
};
use directories::ProjectDirs;
use strum::VariantNames as _;

mod commands;
mod config;
mod env;
mod output;
mod script;


const API_URL_ARG: &str = "api-url";

pub(crate) const USERNAME_ARG: &str = "username";

pub(crate) const EMAIL_ARG: &str = "email";

pub(crate) const PASSWORD_ARG: &str = "password";

pub(crate) const SEARCH_ARG: &str = "search";

pub(crate) const RANK_ARG: &str = "rank";

pub(crate) const RATING_ARG: &str = "rating";

pub(crate) const SKIP_ARG: &str = "skip";

pub(crate) const SORT_ARG: &str = "sort";

pub(crate) const FILTER_ARG: &str = "filter";

#[must_use]
fn app_name() -> &'static str {
    env!("CARGO_PKG_NAME")
}

#[must_use]
fn app_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("org", "albums-countdown", app_name())
}

fn credential_args(command: Command) -> Command {
    command
        .arg(
            Arg::new(USERNAME_ARG)
                .long(USERNAME_ARG)
                .short('u')
                .num_args(1)
                .required(true),
        )
        .arg(
            Arg::new(PASSWORD_ARG)
                .long(PASSWORD_ARG)
                .short('p')
                .num_args(1)
                .required(true),
        )
}

fn new_command() -> Command {
    let stars_range = i64::from(StarRating::MIN.stars())..=i64::from(StarRating::MAX.stars());
    Command::new("countdown")
        .about("Listen your way through the 500 greatest albums of all time")
        .version(env!("CARGO_PKG_VERSION"))
        .arg(
            Arg::new(API_URL_ARG)
                .long(API_URL_ARG)
                .help("Base URL of the web API, overrides the configuration")
                .num_args(1)
                .global(true)
                .required(false),
        )
        .subcommand(credential_args(
            Command::new("login").about("Logs in with an existing account"),
        ))
        .subcommand(
            credential_args(Command::new("signup").about("Creates a new account and logs in"))
                .arg(
                    Arg::new(EMAIL_ARG)
                        .long(EMAIL_ARG)
                        .short('e')
                        .num_args(1)
                        .required(true),
                ),
        )
        .subcommand(Command::new("logout").about("Logs out and forgets the session"))
        .subcommand(Command::new("whoami").about("Shows the user of the current session"))
        .subcommand(
            Command::new("albums")
                .about("Lists all albums of the countdown")
                .arg(
                    Arg::new(SEARCH_ARG)
                        .long(SEARCH_ARG)
                        .help("Only albums with matching artist, title, or rank")
                        .num_args(1),
                ),
        )
        .subcommand(
            Command::new("onboard")
                .about("Starts the countdown, by default with the album at rank 500")
                .arg(
                    Arg::new(RANK_ARG)
                        .long(RANK_ARG)
                        .help("Skip all albums before the given rank (500..1)")
                        .num_args(1)
                        .value_parser(value_parser!(RankValue)),
                ),
        )
        .subcommand(Command::new("current").about("Shows the current album"))
        .subcommand(
            Command::new("complete")
                .about("Completes the current album and advances to the next one")
                .arg(
                    Arg::new(RATING_ARG)
                        .long(RATING_ARG)
                        .help("Rate the completed album with 1 to 5 stars")
                        .num_args(1)
                        .value_parser(value_parser!(Stars).range(stars_range))
                        .conflicts_with(SKIP_ARG),
                )
                .arg(
                    Arg::new(SKIP_ARG)
                        .long(SKIP_ARG)
                        .help("Don't rate the completed album")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("dashboard")
                .about("Shows statistics and the rating history")
                .arg(
                    Arg::new(SORT_ARG)
                        .long(SORT_ARG)
                        .num_args(1)
                        .help("Order of the rating history")
                        .value_parser(
                            PossibleValuesParser::new(SortField::VARIANTS.iter().copied())
                                .try_map(|sort| sort.parse::<SortField>()),
                        ),
                )
                .arg(
                    Arg::new(FILTER_ARG)
                        .long(FILTER_ARG)
                        .help("Only ratings with the given number of stars or \"all\"")
                        .num_args(1),
                ),
        )
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env::init_environment();
    env::init_logging();

    let mut command = new_command();
    let app_usage = command.render_usage();
    let matches = command.get_matches();

    let app_dirs = app_dirs();
    let mut config = app_dirs
        .as_ref()
        .map(|app_dirs| config::load_config(app_dirs.config_dir()))
        .unwrap_or_default();
    config.patch_from_env(|key| std::env::var(key).ok());
    if let Some(api_url) = matches.get_one::<String>(API_URL_ARG) {
        config.api_url.clone_from(api_url);
    }
    log::debug!("Configuration: {config:?}");

    let session = if let Some(app_dirs) = &app_dirs {
        SessionStore::restore(app_dirs.data_dir().to_path_buf())
    } else {
        log::warn!("No home directory found, the session will not be persisted");
        SessionStore::in_memory()
    };
    let shared_env = Arc::new(Environment::new(
        config.api_url()?,
        config.request_timeout(),
        session,
    )?);
    tokio::spawn(on_session_changed(&shared_env));

    match matches.subcommand() {
        Some(("login", matches)) => commands::login(&shared_env, matches).await,
        Some(("signup", matches)) => commands::signup(&shared_env, matches).await,
        Some(("logout", _)) => commands::logout(&shared_env).await,
        Some(("whoami", _)) => commands::whoami(&shared_env).await,
        Some(("albums", matches)) => commands::albums(&shared_env, matches).await,
        Some(("onboard", matches)) => commands::onboard(&shared_env, matches).await,
        Some(("current", _)) => commands::current(&shared_env).await,
        Some(("complete", matches)) => commands::complete(&shared_env, matches).await,
        Some(("dashboard", matches)) => commands::dashboard(&shared_env, matches).await,
        Some((subcommand, _)) => anyhow::bail!("unknown subcommand {subcommand}"),
        None => {
            println!("{app_usage}");
            Ok(())
        }
    }
}
