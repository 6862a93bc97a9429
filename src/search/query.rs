//! Keyword query

/// Ordered keywords typed by the user
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    keywords: Vec<String>,
}

impl Query {
    /// Build a query from process arguments.
    ///
    /// Arguments are split on whitespace as well, so a launcher passing the whole
    /// input as one quoted argument yields the same keywords as a tokenized one.
    pub fn from_args<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let keywords = args
            .into_iter()
            .flat_map(|arg| {
                arg.as_ref()
                    .split_whitespace()
                    .map(str::to_string)
                    .collect::<Vec<_>>()
            })
            .collect();
        Self { keywords }
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }

    /// Whether `id` contains every keyword
    pub fn matches(&self, id: &str) -> bool {
        self.keywords.iter().all(|keyword| id.contains(keyword.as_str()))
    }
}
