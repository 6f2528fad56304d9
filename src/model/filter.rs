/// Which subset of tasks the list shows. Not persisted; every session
/// starts on `All`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Filter {
    #[default]
    All,
    Completed,
    Pending,
}

impl Filter {
    /// Filter chips in display order
    pub const ORDER: [Filter; 3] = [Filter::All, Filter::Pending, Filter::Completed];

    pub fn matches(self, completed: bool) -> bool {
        match self {
            Filter::All => true,
            Filter::Completed => completed,
            Filter::Pending => !completed,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Filter::All => "All",
            Filter::Completed => "Completed",
            Filter::Pending => "Pending",
        }
    }

    /// Next chip in display order, wrapping around
    pub fn next(self) -> Filter {
        let idx = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        Self::ORDER[(idx + 1) % Self::ORDER.len()]
    }
}
