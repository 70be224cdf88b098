use serde::Deserialize;
use serde::Serialize;

/// Everything the page says, loaded from the `site` section of the
/// configuration files. None of it is interpreted; it is handed to the
/// template as-is.
#[derive(Deserialize, Serialize, Clone, Debug)]
pub struct SiteContent {
    pub brand: Brand,
    pub hero: Hero,
    pub shows: Vec<Show>,
    pub about: About,
    pub join: Join,
    pub footer: Footer,
}

#[derive(Deserialize, Serialize, Clone, Debug)]
pub struct Brand {
    pub name: String,
    pub tag: String,
}

#[derive(Deserialize, Serialize, Clone, Debug)]
pub struct Hero {
    pub greeting: String,
    pub title: String,
    pub subtitle: String,
    pub video_url: String,
    /// Shown until (and unless) the video can play
    pub poster: String,
    pub marquee: String,
}

/// An upcoming rite
#[derive(Deserialize, Serialize, Clone, Debug)]
pub struct Show {
    pub title: String,
    #[serde(rename(deserialize = "where"))]
    pub venue: String,
    pub when: String,
    pub blurb: String,
}

#[derive(Deserialize, Serialize, Clone, Debug)]
pub struct About {
    pub lede: String,
    #[serde(default)]
    pub ticks: Vec<String>,
}

#[derive(Deserialize, Serialize, Clone, Debug)]
pub struct Join {
    pub lede: String,
    pub placeholder: String,
    pub button: String,
    pub thanks: String,
}

#[derive(Deserialize, Serialize, Clone, Debug)]
pub struct Footer {
    pub tagline: String,
    #[serde(default)]
    pub links: Vec<SocialLink>,
}

#[derive(Deserialize, Serialize, Clone, Debug)]
pub struct SocialLink {
    pub label: String,
    pub short: String,
    pub href: String,
}
