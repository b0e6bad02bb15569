use diff_status_core::ChangedFile;
use globset::{Glob, GlobBuilder, GlobMatcher, GlobSet, GlobSetBuilder};

use crate::{OperationError, Result};

/// Glob patterns that mark a changed file as exempt.
///
/// `*` and `?` never match `/`, `**` spans directories and matching is
/// case-sensitive. A path segment starting with `.` is only matched by a
/// pattern segment that starts with `.` as well, so `*` does not cover
/// `.gitignore` and `**/*.yml` does not cover `.github/workflows/ci.yml`.
#[derive(Debug, Clone)]
pub struct ExemptPatterns {
    set: GlobSet,
    /// Per pattern, its segments that start with `.`.
    hidden_segments: Vec<Vec<GlobMatcher>>,
}

impl ExemptPatterns {
    /// # Errors
    ///
    /// Returns [`OperationError::GlobPattern`] naming the first pattern that fails to compile.
    pub fn new<S: AsRef<str>>(patterns: &[S]) -> Result<Self> {
        let mut builder = GlobSetBuilder::new();
        let mut hidden_segments = Vec::with_capacity(patterns.len());
        for pattern in patterns {
            let pattern = pattern.as_ref();
            builder.add(compile(pattern, pattern)?);

            let segments = pattern
                .split('/')
                .filter(|segment| segment.starts_with('.'))
                .map(|segment| compile(segment, pattern).map(|glob| glob.compile_matcher()))
                .collect::<Result<Vec<_>>>()?;
            hidden_segments.push(segments);
        }

        let set = builder.build().map_err(|source| OperationError::GlobPattern {
            pattern: patterns
                .iter()
                .map(|p| p.as_ref().to_string())
                .collect::<Vec<_>>()
                .join(", "),
            source,
        })?;

        Ok(Self {
            set,
            hidden_segments,
        })
    }

    #[must_use]
    pub fn covers(&self, filename: &str) -> bool {
        self.set
            .matches(filename)
            .into_iter()
            .any(|index| self.admits_hidden_segments(index, filename))
    }

    /// Files that match none of the patterns, in their original order.
    #[must_use]
    pub fn uncovered<'a>(&self, files: &'a [ChangedFile]) -> Vec<&'a ChangedFile> {
        files.iter().filter(|f| !self.covers(&f.filename)).collect()
    }

    fn admits_hidden_segments(&self, index: usize, filename: &str) -> bool {
        let explicit = &self.hidden_segments[index];
        filename
            .split('/')
            .filter(|segment| segment.starts_with('.'))
            .all(|segment| explicit.iter().any(|m| m.is_match(segment)))
    }
}

fn compile(glob: &str, pattern: &str) -> Result<Glob> {
    GlobBuilder::new(glob)
        .literal_separator(true)
        .build()
        .map_err(|source| OperationError::GlobPattern {
            pattern: pattern.to_string(),
            source,
        })
}
