//! Configuration for table reconstruction.

/// Configuration options for table reconstruction.
///
/// # Examples
///
/// ```rust
/// use tabgrid::ReconstructOptions;
///
/// // Create with defaults
/// let options = ReconstructOptions::default();
///
/// // Or customize
/// let options = ReconstructOptions::new()
///     .with_check_coverage(true)
///     .with_label_separator(" / ");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReconstructOptions {
    /// Whether to fail with `IncompleteGrid` when the cell set leaves grid
    /// positions uncovered. Off by default: uncovered positions surface as
    /// empty strings, matching the behavior of existing pipelines.
    pub check_coverage: bool,
    /// Separator joining the deduplicated values of a multi-row header
    /// column into one label.
    pub label_separator: String,
}

impl Default for ReconstructOptions {
    fn default() -> Self {
        Self {
            check_coverage: false,
            label_separator: " | ".to_string(),
        }
    }
}

impl ReconstructOptions {
    /// Create a new `ReconstructOptions` with default values.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether uncovered grid positions fail reconstruction.
    #[inline]
    pub fn with_check_coverage(mut self, check: bool) -> Self {
        self.check_coverage = check;
        self
    }

    /// Set the separator used when flattening multi-row header columns.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tabgrid::ReconstructOptions;
    ///
    /// let options = ReconstructOptions::new().with_label_separator(" / ");
    /// assert_eq!(options.label_separator, " / ");
    /// ```
    #[inline]
    pub fn with_label_separator(mut self, separator: impl Into<String>) -> Self {
        self.label_separator = separator.into();
        self
    }
}
