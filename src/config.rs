/// Options for configuring a search
///
/// Default options:
/// ```
/// # use astar_grid::SearchConfig;
/// assert_eq!(
///     SearchConfig {
///         max_expansions: None,
///         size_hint: 64,
///     },
///     Default::default()
/// );
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchConfig {
    /// `None` (default): the search runs until the goal is found or every reachable Point
    /// has been explored.
    ///
    /// `Some(n)`: the search gives up and reports that no Path exists after `n` Points
    /// have been expanded. Use this to bound the time spent on huge or pathological Grids.
    pub max_expansions: Option<usize>,
    /// The number of Points the search expects to visit (defaults to `64`).
    ///
    /// Only used to pre-allocate the internal tables. Has no effect on the result.
    pub size_hint: usize,
}

impl SearchConfig {
    /// a SearchConfig without any limit on the number of expanded Points
    ///
    /// Values:
    /// ```
    /// # use astar_grid::SearchConfig;
    /// assert_eq!(
    ///     SearchConfig {
    ///         max_expansions: None,
    ///         size_hint: 64,
    ///     },
    ///     SearchConfig::UNBOUNDED
    /// );
    /// ```
    pub const UNBOUNDED: SearchConfig = SearchConfig {
        max_expansions: None,
        size_hint: 64,
    };
    /// a SearchConfig that stops after 100_000 expanded Points
    ///
    /// Values:
    /// ```
    /// # use astar_grid::SearchConfig;
    /// assert_eq!(
    ///     SearchConfig {
    ///         max_expansions: Some(100_000),
    ///         size_hint: 64,
    ///     },
    ///     SearchConfig::GUARDED
    /// );
    /// ```
    pub const GUARDED: SearchConfig = SearchConfig {
        max_expansions: Some(100_000),
        size_hint: 64,
    };

    /// Returns a copy with `max_expansions` set to `limit`.
    pub fn with_max_expansions(self, limit: usize) -> SearchConfig {
        SearchConfig {
            max_expansions: Some(limit),
            ..self
        }
    }

    /// Returns a copy with the given `size_hint`.
    pub fn with_size_hint(self, size_hint: usize) -> SearchConfig {
        SearchConfig { size_hint, ..self }
    }
}

impl Default for SearchConfig {
    fn default() -> SearchConfig {
        SearchConfig::UNBOUNDED
    }
}
