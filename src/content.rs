//! Static page content.
//!
//! Everything the page shows apart from the contact form lives here and is
//! loaded from the `[profile]` section of the configuration. Any key left out
//! falls back to the defaults below.

use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct Profile {
    pub name: String,
    pub greeting: String,
    pub tagline: String,
    pub avatar_url: String,
    pub resume_url: String,
    pub about: String,
    pub contact_blurb: String,
    pub footer_note: String,
    pub projects: Vec<Project>,
    pub links: Vec<Link>,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Project {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub view_url: Option<String>,
    #[serde(default)]
    pub source_url: Option<String>,
}

impl Project {
    pub fn view_href(&self) -> &str {
        self.view_url.as_deref().unwrap_or("#")
    }

    pub fn source_href(&self) -> &str {
        self.source_url.as_deref().unwrap_or("#")
    }

    fn new(title: &str, description: &str) -> Self {
        Self {
            title: title.to_owned(),
            description: description.to_owned(),
            view_url: None,
            source_url: None,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Link {
    pub label: String,
    pub url: String,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            name: "Steph Tan".to_owned(),
            greeting: "Hello, I'm Steph".to_owned(),
            tagline: "Computer Engineering graduate — eager to learn and build useful software."
                .to_owned(),
            avatar_url: "/static/avatar.svg".to_owned(),
            resume_url: "/resume.pdf".to_owned(),
            about: "I am a recent Computer Engineering graduate with experience in data encoding, \
                    basic web development, and a strong willingness to learn. I enjoy solving \
                    problems and turning ideas into working projects. Skills: JavaScript, React, \
                    basic SQL, data entry, and attention to detail."
                .to_owned(),
            contact_blurb: "Fill out the form and I'll get back to you.".to_owned(),
            footer_note: "Computer Engineering • Open to opportunities".to_owned(),
            projects: vec![
                Project::new(
                    "Portfolio Website",
                    "This site — built with React and Tailwind.",
                ),
                Project::new(
                    "Data Encoder Tool",
                    "Small internal app to speed up data entry tasks.",
                ),
                Project::new(
                    "Todo App",
                    "A simple CRUD React app to practice state management.",
                ),
            ],
            links: ["LinkedIn", "GitHub", "Email"]
                .into_iter()
                .map(|label| Link {
                    label: label.to_owned(),
                    url: "#".to_owned(),
                })
                .collect(),
        }
    }
}
