use serde::Deserialize;
use serde::Serialize;
use strum_macros::Display;

/// Biography fields for the About section. `names` feeds the typewriter and
/// must hold at least one entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub names: Vec<String>,
    pub location: String,
    pub currently: Vec<String>,
    pub previously: Vec<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, Serialize, Deserialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ProjectStatus {
    Active,
    Completed,
    Wip,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub tech: Vec<String>,
    #[serde(default)]
    pub link: Option<String>,
    pub status: ProjectStatus,
}

/// `date` is a display string; it is never parsed or validated.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogPost {
    pub title: String,
    pub date: String,
    pub slug: String,
    pub preview: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactLink {
    pub label: String,
    pub target: String,
}

/// Everything the renderer reads. Populated once at startup and read-only
/// from then on; table order is display order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Content {
    pub profile: Profile,
    pub projects: Vec<Project>,
    pub posts: Vec<BlogPost>,
    pub contact: Vec<ContactLink>,
}
