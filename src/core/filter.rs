use std::collections::HashSet;

/// Names ignored on every walk, in addition to user patterns.
pub const DEFAULT_IGNORE: &[&str] = &[
    "__pycache__",
    ".git",
    ".svn",
    ".hg",
    "node_modules",
    ".idea",
    ".vscode",
    ".DS_Store",
    "venv",
    "env",
    ".pytest_cache",
    ".mypy_cache",
    "__MACOSX",
];

/// A single ignore rule.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum IgnorePattern {
    /// Matches the name exactly.
    Exact(String),
    /// `*suffix`: matches names ending in `suffix`.
    PrefixWildcard(String),
    /// `prefix*`: matches names starting with `prefix`.
    SuffixWildcard(String),
}

impl IgnorePattern {
    /// Parse a pattern string. Only a single leading or trailing `*` is a
    /// wildcard; any other `*` is matched literally.
    pub fn parse(pattern: &str) -> Self {
        if let Some(suffix) = pattern.strip_prefix('*') {
            IgnorePattern::PrefixWildcard(suffix.to_owned())
        } else if let Some(prefix) = pattern.strip_suffix('*') {
            IgnorePattern::SuffixWildcard(prefix.to_owned())
        } else {
            IgnorePattern::Exact(pattern.to_owned())
        }
    }

    pub fn matches(&self, name: &str) -> bool {
        match self {
            IgnorePattern::Exact(exact) => name == exact,
            IgnorePattern::PrefixWildcard(suffix) => name.ends_with(suffix.as_str()),
            IgnorePattern::SuffixWildcard(prefix) => name.starts_with(prefix.as_str()),
        }
    }
}

/// Decides which entry names are left out of a walk.
#[derive(Debug, Clone)]
pub struct IgnoreFilter {
    show_hidden: bool,
    /// Literal names, checked with a set lookup
    exact_matches: HashSet<String>,
    wildcards: Vec<IgnorePattern>,
}

impl IgnoreFilter {
    /// Build a filter from user patterns merged with [`DEFAULT_IGNORE`].
    /// Empty patterns are skipped; whitespace is part of the pattern.
    pub fn new<'a, I>(patterns: I, show_hidden: bool) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut filter = Self {
            show_hidden,
            exact_matches: HashSet::new(),
            wildcards: Vec::new(),
        };

        for &name in DEFAULT_IGNORE {
            filter.add(name);
        }
        for pattern in patterns {
            filter.add(pattern);
        }

        filter
    }

    fn add(&mut self, raw: &str) {
        if raw.is_empty() {
            return;
        }

        match IgnorePattern::parse(raw) {
            IgnorePattern::Exact(name) => {
                self.exact_matches.insert(name);
            }
            wildcard => {
                if !self.wildcards.contains(&wildcard) {
                    self.wildcards.push(wildcard);
                }
            }
        }
    }

    pub fn should_ignore(&self, name: &str) -> bool {
        if !self.show_hidden && name.starts_with('.') {
            return true;
        }

        if self.exact_matches.contains(name) {
            return true;
        }

        self.wildcards.iter().any(|pattern| pattern.matches(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filter(patterns: &[&str], show_hidden: bool) -> IgnoreFilter {
        IgnoreFilter::new(patterns.iter().copied(), show_hidden)
    }

    #[test]
    fn parse_recognizes_leading_and_trailing_wildcards() {
        assert_eq!(
            IgnorePattern::parse("*.pyc"),
            IgnorePattern::PrefixWildcard(".pyc".to_owned())
        );
        assert_eq!(
            IgnorePattern::parse("test_*"),
            IgnorePattern::SuffixWildcard("test_".to_owned())
        );
        assert_eq!(
            IgnorePattern::parse("node_modules"),
            IgnorePattern::Exact("node_modules".to_owned())
        );
    }

    #[test]
    fn middle_wildcard_is_literal() {
        let pattern = IgnorePattern::parse("a*b");
        assert_eq!(pattern, IgnorePattern::Exact("a*b".to_owned()));
        assert!(pattern.matches("a*b"));
        assert!(!pattern.matches("axb"));
    }

    #[test]
    fn hidden_entries_ignored_unless_shown() {
        let hidden = filter(&[], false);
        assert!(hidden.should_ignore(".hidden_file"));
        assert!(!hidden.should_ignore("normal_file"));

        let shown = filter(&[], true);
        assert!(!shown.should_ignore(".random_hidden"));
        // still a default pattern
        assert!(shown.should_ignore(".git"));
    }

    #[test]
    fn defaults_are_always_applied() {
        let filter = filter(&["build"], true);
        for name in ["__pycache__", "node_modules", ".DS_Store", "venv", "build"] {
            assert!(filter.should_ignore(name), "{name} should be ignored");
        }
        assert!(!filter.should_ignore("src"));
    }

    #[test]
    fn exact_patterns_do_not_match_substrings() {
        let filter = filter(&["temp"], false);
        assert!(filter.should_ignore("temp"));
        assert!(!filter.should_ignore("temporary"));
        assert!(!filter.should_ignore("my_temp"));
    }

    #[test]
    fn wildcard_patterns_match_at_their_end() {
        let filter = filter(&["*.pyc", "*.log", "test_*"], false);
        assert!(filter.should_ignore("file.pyc"));
        assert!(filter.should_ignore("debug.log"));
        assert!(filter.should_ignore("test_file.py"));
        assert!(!filter.should_ignore("file.py"));
        assert!(!filter.should_ignore("my_test_file.py"));
        assert!(!filter.should_ignore("log.txt"));
    }

    #[test]
    fn empty_patterns_are_skipped() {
        let filter = filter(&[""], true);
        assert!(!filter.should_ignore(""));
        assert!(!filter.should_ignore("anything"));
    }

    #[test]
    fn whitespace_is_significant_in_patterns() {
        let filter = filter(&[" foo", "bar ", "* .tmp"], false);
        assert!(filter.should_ignore(" foo"));
        assert!(!filter.should_ignore("foo"));
        assert!(filter.should_ignore("bar "));
        assert!(!filter.should_ignore("bar"));
        assert!(filter.should_ignore("a .tmp"));
        assert!(!filter.should_ignore("a.tmp"));
    }
}
