use super::error::{Result, StudioError};
use serde::{Deserialize, Serialize};

pub const DEFAULT_API_BASE: &str = "https://port-pp3k.onrender.com/api";

/// Where the studio backend lives; every endpoint hangs off `base`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    base: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE)
    }
}

impl ApiConfig {
    pub fn new(base: &str) -> Self {
        Self {
            base: base.trim_end_matches('/').to_string(),
        }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn projects_url(&self) -> String {
        format!("{}/projects", self.base)
    }

    pub fn project_url(&self, id: u64) -> String {
        format!("{}/projects/{}", self.base, id)
    }

    pub fn login_url(&self) -> String {
        format!("{}/admin/login", self.base)
    }

    pub fn me_url(&self) -> String {
        format!("{}/admin/me", self.base)
    }

    pub fn image_url(&self, file: &str) -> String {
        format!("{}/uploads/{}", self.base, file)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: u64,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub link: String,
    #[serde(default)]
    pub image: Option<String>,
}

impl Project {
    pub fn image_url(&self, api: &ApiConfig) -> Option<String> {
        self.image
            .as_deref()
            .filter(|f| !f.is_empty())
            .map(|f| api.image_url(f))
    }
}

pub fn parse_projects(body: &str) -> Result<Vec<Project>> {
    Ok(serde_json::from_str(body)?)
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl LoginRequest {
    pub fn new(email: &str, password: &str) -> Self {
        Self {
            email: email.trim().to_string(),
            password: password.to_string(),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    #[inline]
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

/// Project form contents; `editing` holds the id when updating an existing project.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProjectDraft {
    pub editing: Option<u64>,
    pub title: String,
    pub description: String,
    pub link: String,
}

impl ProjectDraft {
    /// Presence-only; reports the first blank field.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in self.fields() {
            if value.trim().is_empty() {
                return Err(StudioError::MissingField(name));
            }
        }
        Ok(())
    }

    pub fn fields(&self) -> [(&'static str, &str); 3] {
        [
            ("title", self.title.as_str()),
            ("description", self.description.as_str()),
            ("link", self.link.as_str()),
        ]
    }

    /// Create posts to the collection, update puts to the item.
    pub fn target(&self, api: &ApiConfig) -> (Method, String) {
        match self.editing {
            Some(id) => (Method::Put, api.project_url(id)),
            None => (Method::Post, api.projects_url()),
        }
    }
}
