use axum::response::IntoResponse;

use crate::content::Profile;
use crate::routes::ContactFormView;
use crate::template::Template;
use crate::theme::Theme;

#[derive(askama::Template)]
#[template(path = "index.html")]
pub struct IndexTemplate<'a> {
    pub theme: Theme,
    pub profile: &'a Profile,
    pub form: ContactFormView,
}

pub async fn page(template: Template) -> impl IntoResponse {
    template.render(IndexTemplate {
        theme: template.theme,
        profile: template.profile(),
        form: ContactFormView::default(),
    })
}

#[cfg(test)]
mod tests {
    use askama::Template as _;

    use super::*;

    #[test]
    fn test_trigger_disabled_while_sending() {
        let profile = Profile::default();
        let html = IndexTemplate {
            theme: Theme::Dark,
            profile: &profile,
            form: ContactFormView {
                sending: true,
                ..Default::default()
            },
        }
        .render()
        .unwrap();

        assert!(html.contains("disabled"));
        assert!(html.contains("Sending..."));
        assert!(!html.contains("Send Message"));
        assert!(html.contains(r#"data-theme="dark""#));
    }
}
