// SPDX-FileCopyrightText: Copyright (C) 2018-2024 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::{
    fs,
    path::{Path, PathBuf},
    time::Duration,
};

use serde::{Deserialize, Serialize};
use url::Url;

pub(crate) const DEFAULT_API_URL: &str = "http://localhost:5000/";

pub(crate) const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

const API_URL_ENV: &str = "COUNTDOWN_API_URL";

const REQUEST_TIMEOUT_SECS_ENV: &str = "COUNTDOWN_REQUEST_TIMEOUT_SECS";

const FILE_NAME: &str = "config";

const FILE_SUFFIX: &str = "ron";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct Config {
    /// Base URL of the web API, i.e. without the `api/` path.
    pub(crate) api_url: String,

    /// Upper bound for every request.
    pub(crate) request_timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_owned(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}

impl Config {
    pub(crate) fn api_url(&self) -> anyhow::Result<Url> {
        self.api_url
            .parse()
            .map_err(|err| anyhow::anyhow!("invalid API URL \"{}\": {err}", self.api_url))
    }

    #[must_use]
    pub(crate) const fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Replace values that are out of range with their defaults.
    #[must_use]
    fn sanitized(mut self) -> Self {
        if self.request_timeout_secs == 0 {
            log::warn!(
                "Ignoring request timeout of 0 seconds, using {DEFAULT_REQUEST_TIMEOUT_SECS} seconds"
            );
            self.request_timeout_secs = DEFAULT_REQUEST_TIMEOUT_SECS;
        }
        self
    }

    /// Override values from environment variables.
    ///
    /// Values that could not be parsed or are out of range are ignored.
    pub(crate) fn patch_from_env(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(api_url) = var(API_URL_ENV).filter(|var| !var.trim().is_empty()) {
            log::debug!("{API_URL_ENV} = {api_url}");
            self.api_url = api_url.trim().to_owned();
        }
        if let Some(secs) = var(REQUEST_TIMEOUT_SECS_ENV) {
            log::debug!("{REQUEST_TIMEOUT_SECS_ENV} = {secs}");
            match secs.trim().parse::<u64>() {
                Ok(0) => {
                    log::warn!("Ignoring {REQUEST_TIMEOUT_SECS_ENV} = {secs}: must be positive");
                }
                Ok(secs) => self.request_timeout_secs = secs,
                Err(err) => {
                    log::warn!("Failed to parse {REQUEST_TIMEOUT_SECS_ENV} = {secs}: {err}");
                }
            }
        }
    }
}

#[must_use]
pub(crate) fn new_config_file_path(config_dir: &Path) -> PathBuf {
    let mut path_buf = config_dir.to_path_buf();
    path_buf.push(FILE_NAME);
    path_buf.set_extension(FILE_SUFFIX);
    path_buf
}

/// Load the configuration, falling back to defaults.
#[must_use]
pub(crate) fn load_config(config_dir: &Path) -> Config {
    let file_path = new_config_file_path(config_dir);
    log::debug!("Loading configuration from file: {}", file_path.display());
    match fs::read_to_string(&file_path) {
        Ok(text) => ron::from_str(&text)
            .map(Config::sanitized)
            .map_err(|err| {
                log::warn!("Failed to parse configuration data: {err}");
            })
            .unwrap_or_default(),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Default::default(),
        Err(err) => {
            log::warn!("Failed to read configuration data from file: {err}");
            Default::default()
        }
    }
}
