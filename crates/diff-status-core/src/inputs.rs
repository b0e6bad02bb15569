use std::fmt;

use crate::{CoreError, Result};

/// Splits a newline-separated input into trimmed, non-empty entries.
#[must_use]
pub fn parse_multiline(value: &str) -> Vec<String> {
    value
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(ToString::to_string)
        .collect()
}

#[derive(Clone, PartialEq, Eq)]
pub struct ActionInputs {
    token: String,
    globs: Vec<String>,
    statuses: Vec<String>,
}

impl ActionInputs {
    /// # Errors
    ///
    /// Returns [`CoreError::MissingInput`] if any input is unset or blank.
    pub fn new(
        token: Option<&str>,
        globs: Option<&str>,
        statuses: Option<&str>,
    ) -> Result<Self> {
        let token = require("token", token)?.to_string();
        let globs = parse_multiline(require("globs", globs)?);
        let statuses = parse_multiline(require("statuses", statuses)?);

        Ok(Self {
            token,
            globs,
            statuses,
        })
    }

    #[must_use]
    pub fn token(&self) -> &str {
        &self.token
    }

    #[must_use]
    pub fn globs(&self) -> &[String] {
        &self.globs
    }

    #[must_use]
    pub fn statuses(&self) -> &[String] {
        &self.statuses
    }
}

impl fmt::Debug for ActionInputs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActionInputs")
            .field("token", &"***")
            .field("globs", &self.globs)
            .field("statuses", &self.statuses)
            .finish()
    }
}

fn require<'a>(name: &'static str, value: Option<&'a str>) -> Result<&'a str> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .ok_or(CoreError::MissingInput { name })
}
