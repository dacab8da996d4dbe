/// Counters collected while walking a tree.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Stats {
    pub dirs: usize,
    pub files: usize,
    /// Entries dropped by the ignore filter or by `dirs_only`.
    pub skipped: usize,
    /// Directories that could not be listed.
    pub errors: usize,
}

impl Stats {
    pub fn merge(&mut self, other: &Stats) {
        self.dirs += other.dirs;
        self.files += other.files;
        self.skipped += other.skipped;
        self.errors += other.errors;
    }
}
