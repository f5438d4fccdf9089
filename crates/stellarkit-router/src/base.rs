//! Deployment base path
//!
//! The same route table works whether the app is served from `/` or from a
//! prefix such as `/stellarkit/`.

/// Normalized base path: leading slash, no trailing slash, empty for `/`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BasePath(String);

impl BasePath {
    pub fn new(raw: &str) -> Self {
        let trimmed = raw.trim().trim_end_matches('/');
        if trimmed.is_empty() {
            return Self(String::new());
        }
        if trimmed.starts_with('/') {
            Self(trimmed.to_string())
        } else {
            Self(format!("/{trimmed}"))
        }
    }

    /// `""` when served from the root
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// Route path of a browser pathname; pathnames outside the base pass through
    ///
    /// ```
    /// use stellarkit_router::BasePath;
    ///
    /// let base = BasePath::new("/app/");
    /// assert_eq!(base.strip("/app/trades"), "/trades");
    /// assert_eq!(base.strip("/app"), "/");
    /// assert_eq!(base.strip("/application"), "/application");
    /// ```
    pub fn strip<'a>(&self, pathname: &'a str) -> &'a str {
        if self.is_root() {
            return pathname;
        }
        match pathname.strip_prefix(self.0.as_str()) {
            Some("") => "/",
            Some(rest) if rest.starts_with('/') => rest,
            _ => pathname,
        }
    }

    /// Browser pathname for a route path
    pub fn join(&self, path: &str) -> String {
        let path = path.trim_start_matches('/');
        format!("{}/{}", self.0, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize() {
        assert_eq!(BasePath::new("/").as_str(), "");
        assert_eq!(BasePath::new("").as_str(), "");
        assert_eq!(BasePath::new("app").as_str(), "/app");
        assert_eq!(BasePath::new("/app/").as_str(), "/app");
        assert_eq!(BasePath::new("/a/b//").as_str(), "/a/b");
    }

    #[test]
    fn test_strip_root_base() {
        let base = BasePath::new("/");
        assert!(base.is_root());
        assert_eq!(base.strip("/trades"), "/trades");
    }

    #[test]
    fn test_join() {
        assert_eq!(BasePath::new("/").join("/trades"), "/trades");
        assert_eq!(BasePath::new("/app").join("/trades"), "/app/trades");
        assert_eq!(BasePath::new("/app").join("/"), "/app/");
    }

    #[test]
    fn test_join_then_strip() {
        let base = BasePath::new("/stellarkit/");
        for p in ["/", "/ico", "/history"] {
            assert_eq!(base.strip(&base.join(p)), p);
        }
    }
}
