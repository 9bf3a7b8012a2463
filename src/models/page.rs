use serde::{Deserialize, Serialize};

use super::droplet::Droplet;

/// One page of `GET /v2/droplets`.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct DropletPage {
    #[serde(default)]
    pub droplets: Vec<Droplet>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<Links>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<Meta>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Links {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pages: Option<Pages>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Pages {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prev: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Meta {
    #[serde(default)]
    pub total: u64,
}

impl DropletPage {
    /// A page is last when the API sent no links, no page links, or no `next` link.
    pub fn is_last_page(&self) -> bool {
        match self.links.as_ref().and_then(|l| l.pages.as_ref()) {
            None => true,
            Some(pages) => pages.next.as_deref().map_or(true, str::is_empty),
        }
    }
}
