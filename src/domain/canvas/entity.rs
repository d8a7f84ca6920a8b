//! Request-scoped values passed to the Canvas API

use std::str::FromStr;

use bytes::Bytes;

use crate::domain::error::DomainError;

/// Canvas course identifier (positive integer)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CourseId(u64);

impl CourseId {
    pub fn new(id: u64) -> Result<Self, DomainError> {
        if id == 0 {
            return Err(DomainError::invalid_id("Course ID must be a positive integer"));
        }

        Ok(Self(id))
    }
}

impl FromStr for CourseId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id = s.parse::<u64>().map_err(|_| {
            DomainError::invalid_id(format!("Course ID '{}' is not a positive integer", s))
        })?;

        Self::new(id)
    }
}

impl std::fmt::Display for CourseId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Canvas access token supplied by the caller for a single request
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    pub fn new(token: impl Into<String>) -> Result<Self, DomainError> {
        let token = token.into();
        let token = token.trim();

        if token.is_empty() {
            return Err(DomainError::credential("Access token cannot be empty"));
        }

        if token.chars().any(char::is_control) {
            return Err(DomainError::credential(
                "Access token contains invalid characters",
            ));
        }

        Ok(Self(token.to_string()))
    }

    pub fn expose(&self) -> &str {
        &self.0
    }

    /// Value for the `Authorization` header
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

impl std::fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("AccessToken([REDACTED])")
    }
}

/// Path and query of a single GET against the Canvas API.
///
/// The base URL is owned by the client, so the same request value can be
/// replayed against a mock server in tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamRequest {
    path: String,
    query: Vec<(String, String)>,
}

impl UpstreamRequest {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            query: Vec::new(),
        }
    }

    pub fn with_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// `GET /users/self/courses`
    pub fn courses(active_only: bool) -> Self {
        let request = Self::new("/users/self/courses");

        if active_only {
            request.with_query("enrollment_state", "active")
        } else {
            request
        }
    }

    /// `GET /courses/{id}/assignments`
    pub fn assignments(course_id: CourseId) -> Self {
        Self::new(format!("/courses/{}/assignments", course_id))
    }

    /// `GET /courses/{id}/students/submissions`, limited to the calling user
    pub fn submissions(course_id: CourseId) -> Self {
        Self::new(format!("/courses/{}/students/submissions", course_id))
            .with_query("student_ids[]", "self")
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn query(&self) -> &[(String, String)] {
        &self.query
    }

    /// Full URL against `base_url` (no trailing slash expected)
    pub fn url(&self, base_url: &str) -> String {
        format!("{}{}", base_url, self.path)
    }
}

/// Successful response body, relayed unchanged
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamBody {
    pub bytes: Bytes,
    pub content_type: Option<String>,
}

impl UpstreamBody {
    pub fn new(bytes: impl Into<Bytes>, content_type: Option<String>) -> Self {
        Self {
            bytes: bytes.into(),
            content_type,
        }
    }
}
