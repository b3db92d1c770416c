//! Declarative page content. One view renders every variant; variants only
//! differ in the data below, which ships embedded as `content/site.json`.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

const SITE_JSON: &str = include_str!("../content/site.json");

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SiteContent {
    pub org_name: String,
    pub founder: String,
    pub default_variant: String,
    pub variants: Vec<Variant>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Variant {
    pub key: String,
    pub tagline: String,
    pub nav: Vec<Action>,
    pub sections: Vec<Section>,
    #[serde(default)]
    pub social: Vec<SocialLink>,
}

/// Where a button takes the visitor.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Target {
    /// Anchor id of a section on this page.
    Section(String),
    Top,
    /// Absolute URL, passed to the browser untouched.
    External(String),
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Action {
    pub label: String,
    pub target: Target,
    #[serde(default)]
    pub primary: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapCard {
    pub title: String,
    pub kind: String,
    pub status: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Icon {
    Github,
    Twitter,
    Mail,
    Heart,
    Globe,
}

impl Icon {
    pub fn glyph(self) -> &'static str {
        match self {
            Icon::Github => "🐙",
            Icon::Twitter => "🐦",
            Icon::Mail => "✉",
            Icon::Heart => "❤",
            Icon::Globe => "🌐",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    pub icon: Icon,
    pub label: String,
    /// Missing URL renders an inert button.
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Section {
    Hero {
        badge: String,
        title_lead: String,
        title_highlight: String,
        blurb: String,
        actions: Vec<Action>,
    },
    Mission {
        id: String,
        heading: String,
        body: String,
        points: Vec<String>,
    },
    Gallery {
        id: String,
        heading: String,
        maps: Vec<MapCard>,
    },
    Data {
        id: String,
        heading: String,
        body: String,
        action: Action,
    },
    Founder {
        id: String,
        heading: String,
        name: String,
        role: String,
        bio: String,
        #[serde(default)]
        links: Vec<Action>,
    },
}

impl Section {
    pub fn anchor(&self) -> Option<&str> {
        match self {
            Section::Hero { .. } => None,
            Section::Mission { id, .. }
            | Section::Gallery { id, .. }
            | Section::Data { id, .. }
            | Section::Founder { id, .. } => Some(id.as_str()),
        }
    }

    fn actions(&self) -> Vec<&Action> {
        match self {
            Section::Hero { actions, .. } => actions.iter().collect(),
            Section::Data { action, .. } => vec![action],
            Section::Founder { links, .. } => links.iter().collect(),
            Section::Mission { .. } | Section::Gallery { .. } => Vec::new(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("site content is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("site content defines no page variants")]
    NoVariants,
    #[error("variant '{variant}' declares anchor '#{anchor}' twice")]
    DuplicateAnchor { variant: String, anchor: String },
    #[error("variant '{variant}' links to missing section '#{anchor}'")]
    DanglingTarget { variant: String, anchor: String },
}

impl SiteContent {
    /// Content bundled into the binary.
    pub fn load() -> Result<SiteContent, ContentError> {
        SiteContent::from_json(SITE_JSON)
    }

    pub fn from_json(raw: &str) -> Result<SiteContent, ContentError> {
        let content: SiteContent = serde_json::from_str(raw)?;
        if content.variants.is_empty() {
            return Err(ContentError::NoVariants);
        }
        for v in &content.variants {
            v.validate()?;
        }
        Ok(content)
    }

    /// Requested variant, else the configured default, else the first one.
    /// `None` only when there are no variants at all.
    pub fn variant(&self, key: Option<&str>) -> Option<&Variant> {
        key.and_then(|k| self.variants.iter().find(|v| v.key == k))
            .or_else(|| self.variants.iter().find(|v| v.key == self.default_variant))
            .or_else(|| self.variants.first())
    }
}

impl Variant {
    /// Every section target used by a button must exist as an anchor on the page.
    pub fn validate(&self) -> Result<(), ContentError> {
        let mut anchors = HashSet::new();
        for anchor in self.anchors() {
            if !anchors.insert(anchor) {
                return Err(ContentError::DuplicateAnchor {
                    variant: self.key.clone(),
                    anchor: anchor.to_string(),
                });
            }
        }
        let used = self
            .nav
            .iter()
            .chain(self.sections.iter().flat_map(Section::actions));
        for action in used {
            if let Target::Section(id) = &action.target {
                if !anchors.contains(id.as_str()) {
                    return Err(ContentError::DanglingTarget {
                        variant: self.key.clone(),
                        anchor: id.clone(),
                    });
                }
            }
        }
        Ok(())
    }

    pub fn anchors(&self) -> impl Iterator<Item = &str> {
        self.sections.iter().filter_map(Section::anchor)
    }
}
