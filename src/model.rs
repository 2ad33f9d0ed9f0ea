//! Developer profile types shared by the API and the store.

use serde::{Deserialize, Serialize};

/// A project link embedded in a developer profile. Has no identity of its own.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    pub url: String,
}

/// Request body for create and replace: every field except `id`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeveloperPayload {
    pub name: String,
    pub photo_url: String,
    pub twitter_url: String,
    pub projects: Vec<Project>,
}

/// A stored developer profile.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Developer {
    pub id: i32,
    pub name: String,
    pub photo_url: String,
    pub twitter_url: String,
    pub projects: Vec<Project>,
}

impl Developer {
    pub fn from_payload(id: i32, payload: DeveloperPayload) -> Self {
        Developer {
            id,
            name: payload.name,
            photo_url: payload.photo_url,
            twitter_url: payload.twitter_url,
            projects: payload.projects,
        }
    }

    pub fn into_payload(self) -> DeveloperPayload {
        DeveloperPayload {
            name: self.name,
            photo_url: self.photo_url,
            twitter_url: self.twitter_url,
            projects: self.projects,
        }
    }
}
