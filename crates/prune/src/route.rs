//! Client-side routes.

use prune_core::EmailId;

/// A screen of the application.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Route {
    /// `/emails`: the three email lists.
    #[default]
    List,
    /// `/compose`: the compose form.
    Compose,
    /// `/email/:id`: one email. The id is kept raw and parsed by the view.
    Detail(String),
}

impl Route {
    /// Resolves a path to a route.
    ///
    /// Unknown paths fall back to [`Route::List`].
    #[must_use]
    pub fn parse(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let segments: Vec<&str> = path
            .trim()
            .trim_matches('/')
            .split('/')
            .filter(|s| !s.is_empty())
            .collect();

        match segments.as_slice() {
            ["compose"] => Self::Compose,
            ["email", id] => Self::Detail((*id).to_string()),
            _ => Self::List,
        }
    }

    /// Route to the detail screen of `id`.
    #[must_use]
    pub fn detail(id: EmailId) -> Self {
        Self::Detail(id.to_string())
    }

    /// Path of this route.
    #[must_use]
    pub fn path(&self) -> String {
        match self {
            Self::List => "/emails".to_string(),
            Self::Compose => "/compose".to_string(),
            Self::Detail(id) => format!("/email/{id}"),
        }
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.path())
    }
}
