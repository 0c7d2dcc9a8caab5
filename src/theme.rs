use std::str::FromStr;

use axum_extra::extract::cookie::CookieJar;
use strum::{AsRefStr, Display, EnumString};

pub const THEME_COOKIE: &str = "theme";

#[derive(EnumString, Display, AsRefStr, Default, Clone, Copy, Debug, PartialEq, Eq)]
#[strum(serialize_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, Theme::Dark)
    }

    /// Unknown or missing cookie values fall back to the light theme.
    pub fn from_jar(jar: &CookieJar) -> Self {
        jar.get(THEME_COOKIE)
            .and_then(|cookie| Theme::from_str(cookie.value()).ok())
            .unwrap_or_default()
    }
}
