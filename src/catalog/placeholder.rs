//! Placeholder substitution for empty display lists.

/// Item shown in place of an empty list.
pub const EMPTY_PLACEHOLDER: &str = "-";

/// A list as it should be displayed: its items, or a single placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayList<T> {
    Items(Vec<T>),
    Placeholder(&'static str),
}

impl<T> DisplayList<T> {
    /// Wraps `items`, substituting [`EMPTY_PLACEHOLDER`] when there are none.
    pub fn new(items: Vec<T>) -> Self {
        Self::with_placeholder(items, EMPTY_PLACEHOLDER)
    }

    pub fn with_placeholder(items: Vec<T>, placeholder: &'static str) -> Self {
        if items.is_empty() {
            Self::Placeholder(placeholder)
        } else {
            Self::Items(items)
        }
    }
}

#[cfg(test)]
impl<T> DisplayList<T> {
    /// Number of rendered entries; never zero.
    pub fn rendered_len(&self) -> usize {
        match self {
            Self::Items(items) => items.len(),
            Self::Placeholder(_) => 1,
        }
    }

    pub fn items(&self) -> &[T] {
        match self {
            Self::Items(items) => items,
            Self::Placeholder(_) => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_list_becomes_single_placeholder() {
        let list: DisplayList<String> = DisplayList::new(Vec::new());
        assert_eq!(list, DisplayList::Placeholder("-"));
        assert_eq!(list.rendered_len(), 1);
        assert!(list.items().is_empty());
    }

    #[test]
    fn test_non_empty_list_is_kept() {
        let list = DisplayList::new(vec!["Gregg", "Nash"]);
        assert_eq!(list.rendered_len(), 2);
        assert_eq!(list.items(), &["Gregg", "Nash"]);
    }

    #[test]
    fn test_custom_placeholder() {
        let list: DisplayList<u8> = DisplayList::with_placeholder(vec![], "none");
        assert_eq!(list, DisplayList::Placeholder("none"));
    }
}
