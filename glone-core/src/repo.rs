use std::{str::FromStr, sync::LazyLock};

use log::trace;
use regex::Regex;

use crate::{
    error::{Error, Result},
    types::{RepoLocation, Scheme},
};

const GIT_SUFFIX: &str = ".git";

static GIT_SSH_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^git@([a-zA-Z0-9._-]+):([a-zA-Z0-9./_-]+)\??(.*)$").expect("valid ssh pattern")
});

static GIT_HTTPS_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^https://([a-zA-Z0-9._-]+)/([a-zA-Z0-9./_-]+)\??(.*)$")
        .expect("valid https pattern")
});

fn detect_scheme(url: &str) -> Option<Scheme> {
    [Scheme::Https, Scheme::Ssh]
        .into_iter()
        .find(|scheme| url.starts_with(scheme.prefix()))
}

fn pattern(scheme: Scheme) -> &'static Regex {
    match scheme {
        Scheme::Ssh => &GIT_SSH_URL,
        Scheme::Https => &GIT_HTTPS_URL,
    }
}

fn is_dot_segment(segment: &str) -> bool {
    segment == "." || segment == ".."
}

/// Split `owner/.../repo[.git]` into its owner and repository name.
///
/// The owner keeps every segment but the last one, so nested namespaces
/// (`group/subgroup/repo`) survive; empty segments are dropped. Only one
/// `.git` suffix is removed. `.` and `..` are refused anywhere, the result
/// is joined under the workspace.
fn split_repo_path(path: &str) -> Option<(String, &str)> {
    let path = path.trim_end_matches('/');
    let (owner, base) = path.rsplit_once('/')?;
    let repo_name = base.strip_suffix(GIT_SUFFIX).unwrap_or(base);

    let owner_segments = owner
        .split('/')
        .filter(|segment| !segment.is_empty())
        .collect::<Vec<&str>>();

    if owner_segments.is_empty()
        || owner_segments.iter().any(|segment| is_dot_segment(segment))
        || repo_name.is_empty()
        || is_dot_segment(repo_name)
    {
        return None;
    }
    Some((owner_segments.join("/"), repo_name))
}

/// Parse a `https://` or `git@` repository url.
pub fn parse(repo_url: &str) -> Result<RepoLocation> {
    let repo_url = repo_url.trim();

    let scheme =
        detect_scheme(repo_url).ok_or_else(|| Error::UnrecognizedScheme(repo_url.to_string()))?;

    let captures = pattern(scheme)
        .captures(repo_url)
        .ok_or_else(|| Error::InvalidUrl(repo_url.to_string()))?;

    let host = &captures[1];
    if is_dot_segment(host) {
        return Err(Error::InvalidUrl(repo_url.to_string()));
    }
    let (owner, repo_name) =
        split_repo_path(&captures[2]).ok_or_else(|| Error::InvalidUrl(repo_url.to_string()))?;

    if let Some(extra) = captures.get(3).filter(|extra| !extra.as_str().is_empty()) {
        trace!("Ignoring trailing `{}` in {}", extra.as_str(), repo_url);
    }

    Ok(RepoLocation {
        scheme,
        host: host.to_string(),
        owner,
        repo_name: repo_name.to_string(),
    })
}

impl FromStr for RepoLocation {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parse(s)
    }
}
