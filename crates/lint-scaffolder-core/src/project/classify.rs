//! Classification of stale config files in the target folder

/// Decides which existing files a run removes
///
/// Patterns use the same shape as template file lists: `prefix*`, `*suffix`,
/// or an exact name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaleFileMatcher {
    patterns: Vec<String>,
}

impl Default for StaleFileMatcher {
    /// Every eslintrc and prettierrc variant (`.eslintrc`, `.eslintrc.json`, `.prettierrc.yaml`, ...)
    fn default() -> Self {
        Self::new([".eslintrc*", ".prettierrc*"])
    }
}

impl StaleFileMatcher {
    pub fn new<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            patterns: patterns.into_iter().map(Into::into).collect(),
        }
    }

    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }

    /// Check if a file name matches any stale-config pattern
    pub fn is_stale(&self, file_name: &str) -> bool {
        self.patterns.iter().any(|pattern| {
            if let Some(suffix) = pattern.strip_prefix('*') {
                file_name.ends_with(suffix)
            } else if let Some(prefix) = pattern.strip_suffix('*') {
                file_name.starts_with(prefix)
            } else {
                file_name == pattern
            }
        })
    }

    /// File names to delete, excluding the ones about to be written, sorted
    pub fn plan_removals<I>(&self, file_names: I, keep: &[&str]) -> Vec<String>
    where
        I: IntoIterator<Item = String>,
    {
        let mut removals: Vec<String> = file_names
            .into_iter()
            .filter(|name| self.is_stale(name) && !keep.contains(&name.as_str()))
            .collect();
        removals.sort();
        removals
    }
}
