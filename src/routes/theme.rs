use axum::response::{IntoResponse, Redirect};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};

use crate::theme::{THEME_COOKIE, Theme};

pub async fn toggle(jar: CookieJar) -> impl IntoResponse {
    let theme = Theme::from_jar(&jar).toggled();
    let cookie = Cookie::build((THEME_COOKIE, theme.to_string()))
        .path("/")
        .same_site(SameSite::Lax)
        .permanent();

    (jar.add(cookie), Redirect::to("/"))
}
