//! Static card data: the profile header and the portfolio entries.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;

/// The card owner's header block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub title: String,
    pub handle: String,
    pub link_url: String,
    pub avatar_url: String,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            name: "Priyanshu Prajapati".to_string(),
            title: "Android Compose Developer".to_string(),
            handle: "@Composable".to_string(),
            link_url: "https://developer.android.com/develop/ui/compose/documentation"
                .to_string(),
            avatar_url:
                "https://encrypted-tbn0.gstatic.com/images?q=tbn:ANd9GcQag8HJlcPrRvMACQNFi0bfejMxgaouk9sHvA&s"
                    .to_string(),
        }
    }
}

/// One portfolio entry. Immutable after construction; structural equality
/// is all callers rely on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    pub description: String,
    pub image_url: String,
}

impl Project {
    fn new(name: &str, image_url: &str) -> Self {
        Self {
            name: name.to_string(),
            description: format!("Description for {name}"),
            image_url: image_url.to_string(),
        }
    }
}

/// The built-in portfolio shown when no override file exists.
pub fn builtin_projects() -> Vec<Project> {
    vec![
        Project::new(
            "Web Application",
            "https://encrypted-tbn0.gstatic.com/images?q=tbn:ANd9GcQ2QcDMe_AsqB4U7hUi0kalHsL1I9NdLEOyKico3N60JCv6HDDcQgHQr2Bojg&s",
        ),
        Project::new(
            "Android Application",
            "https://encrypted-tbn0.gstatic.com/images?q=tbn:ANd9GcSFFEwpxjrSHnjTsh7QlwyDArwbnN58qYAqj_sh9PLU59sKlGfk5zKxX58R8g&s",
        ),
        Project::new(
            "Flutter Application",
            "https://encrypted-tbn0.gstatic.com/images?q=tbn:ANd9GcTxX42OtOayI1mJ1G67_7NVlZtOApIIKL6hKhr2dglgE0QLZCKbF56aDLgNcw&s",
        ),
        Project::new(
            "Blockchain",
            "https://encrypted-tbn0.gstatic.com/images?q=tbn:ANd9GcRfE1OGTsW8ChRjsa8YBqfjjtymE9P1ufsKn8n-QAWuHWMbpDsU8KgL06-fqg&s",
        ),
        Project::new(
            "Machine Learning",
            "https://encrypted-tbn0.gstatic.com/images?q=tbn:ANd9GcQWAA2F_8Wnf9R0jW22aHqSbqP_xDMCuO4x5Q&s",
        ),
        Project::new(
            "Data Science",
            "https://encrypted-tbn0.gstatic.com/images?q=tbn:ANd9GcSCcZgzHS5HS02nxVXYM-ZV7LxuHqbUNdCj8A&s",
        ),
        Project::new(
            "Devops",
            "https://encrypted-tbn0.gstatic.com/images?q=tbn:ANd9GcR9YYh5Fk1u9VsWWr1MhkyQeOzeNbtnnMO96g&s",
        ),
    ]
}

/// Loads the portfolio, preferring a `portfolio.json` override next to the
/// config file. Absent or malformed overrides fall back to the built-in
/// list.
pub fn load_projects(config_dir: &Path) -> Vec<Project> {
    let override_path = config_dir.join("portfolio.json");
    if !override_path.exists() {
        return builtin_projects();
    }
    match std::fs::read_to_string(&override_path)
        .map_err(|e| e.to_string())
        .and_then(|raw| serde_json::from_str::<Vec<Project>>(&raw).map_err(|e| e.to_string()))
    {
        Ok(projects) if !projects.is_empty() => projects,
        Ok(_) => {
            warn!(path = %override_path.display(), "portfolio override is empty, using built-ins");
            builtin_projects()
        }
        Err(err) => {
            warn!(path = %override_path.display(), %err, "failed to read portfolio override");
            builtin_projects()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_portfolio_has_seven_entries() {
        let projects = builtin_projects();
        assert_eq!(projects.len(), 7);
        assert_eq!(projects[0].name, "Web Application");
        assert_eq!(projects[0].description, "Description for Web Application");
    }

    #[test]
    fn missing_override_falls_back_to_builtins() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(load_projects(dir.path()), builtin_projects());
    }

    #[test]
    fn valid_override_replaces_builtins() {
        let dir = tempfile::tempdir().unwrap();
        let custom = vec![Project::new("Rust Service", "https://example.com/rust.png")];
        std::fs::write(
            dir.path().join("portfolio.json"),
            serde_json::to_string(&custom).unwrap(),
        )
        .unwrap();
        assert_eq!(load_projects(dir.path()), custom);
    }

    #[test]
    fn malformed_override_falls_back_to_builtins() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("portfolio.json"), "not json").unwrap();
        assert_eq!(load_projects(dir.path()), builtin_projects());
    }
}
