use std::fmt;

/// Transport form of a repository url.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scheme {
    Ssh,
    Https,
}

impl Scheme {
    /// Literal prefix that selects this scheme.
    pub fn prefix(self) -> &'static str {
        match self {
            Scheme::Ssh => "git@",
            Scheme::Https => "https://",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Scheme::Ssh => "ssh",
            Scheme::Https => "https",
        }
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// Where a repository lives: parsed once from the url given on the command line
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepoLocation {
    pub scheme: Scheme,
    pub host: String,
    pub owner: String, // May be nested : group/subgroup
    pub repo_name: String,
}

impl RepoLocation {
    pub fn canonical_url(&self) -> String {
        match self.scheme {
            Scheme::Https => format!(
                "https://{}/{}/{}.git",
                self.host, self.owner, self.repo_name
            ),
            Scheme::Ssh => format!("git@{}:{}/{}.git", self.host, self.owner, self.repo_name),
        }
    }

    pub fn owner_segments(&self) -> impl Iterator<Item = &str> {
        self.owner.split('/').filter(|segment| !segment.is_empty())
    }
}

impl fmt::Display for RepoLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.canonical_url())
    }
}
