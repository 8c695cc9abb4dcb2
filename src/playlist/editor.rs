//! URL list editing
//!
//! The entry list always holds at least one element, and its last element is
//! the empty placeholder the user types the next URL into.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlList {
    entries: Vec<String>,
}

impl Default for UrlList {
    fn default() -> Self {
        Self {
            entries: vec![String::new()],
        }
    }
}

impl UrlList {

    /// Build a list from raw entries. Blank entries are dropped and a single
    /// trailing placeholder is put back.
    pub fn from_entries(mut entries: Vec<String>) -> Self {
        entries.retain(|entry| !entry.is_empty());
        entries.push(String::new());
        Self { entries }
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Never true: the placeholder is always there.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn placeholder_index(&self) -> usize {
        self.entries.len() - 1
    }

    /// Apply the text of the input at `index`.
    ///
    /// Clearing an entry removes it. Typing into the placeholder turns it into
    /// a real entry and opens a new placeholder behind it. Every edit builds
    /// the next list and swaps it in.
    pub fn edit(&mut self, index: usize, value: impl Into<String>) {
        let value = value.into();
        if index >= self.entries.len() {
            tracing::warn!("Ignoring edit of URL entry {} (list has {})", index, self.entries.len());
            return;
        }
        let is_placeholder = index == self.placeholder_index();

        if value.is_empty() {
            if is_placeholder {
                return;
            }
            tracing::info!("Removing URL at index {}", index);
            let mut next: Vec<String> = self
                .entries
                .iter()
                .enumerate()
                .filter(|(i, _)| *i != index)
                .map(|(_, entry)| entry.clone())
                .collect();
            if next.is_empty() {
                next.push(String::new());
            }
            self.entries = next;
            return;
        }

        let mut next = self.entries.clone();
        next[index] = value;
        if is_placeholder {
            next.push(String::new());
        }
        self.entries = next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list(entries: &[&str]) -> UrlList {
        UrlList::from_entries(entries.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn test_default_is_single_placeholder() {
        assert_eq!(UrlList::default().entries(), &[String::new()]);
    }

    #[test]
    fn test_typing_into_placeholder_appends_new_one() {
        let mut urls = UrlList::default();
        urls.edit(0, "e");
        assert_eq!(urls, list(&["e", ""]));
        urls.edit(0, "ex");
        assert_eq!(urls, list(&["ex", ""]));
        urls.edit(1, "b.org");
        assert_eq!(urls, list(&["ex", "b.org", ""]));
    }

    #[test]
    fn test_last_entry_is_always_placeholder() {
        let mut urls = UrlList::default();
        for (i, text) in ["a.com", "b.com", "c.com"].iter().enumerate() {
            urls.edit(i, *text);
            assert_eq!(urls.entries().last().map(String::as_str), Some(""));
        }
        assert_eq!(urls.len(), 4);
    }

    #[test]
    fn test_clearing_only_entry_leaves_placeholder() {
        let mut urls = list(&["example.com", ""]);
        urls.edit(0, "");
        assert_eq!(urls.entries(), &[String::new()]);
    }

    #[test]
    fn test_clearing_middle_entry_removes_it() {
        let mut urls = list(&["a.com", "b.com", "c.com", ""]);
        urls.edit(1, "");
        assert_eq!(urls, list(&["a.com", "c.com", ""]));
    }

    #[test]
    fn test_clearing_placeholder_is_noop() {
        let mut urls = list(&["a.com", ""]);
        urls.edit(1, "");
        assert_eq!(urls, list(&["a.com", ""]));
    }

    #[test]
    fn test_out_of_range_edit_ignored() {
        let mut urls = list(&["a.com", ""]);
        urls.edit(5, "x.com");
        assert_eq!(urls, list(&["a.com", ""]));
    }

    #[test]
    fn test_from_entries_restores_placeholder() {
        assert_eq!(UrlList::from_entries(vec![]).entries(), &[String::new()]);
        assert_eq!(list(&["a.com"]).entries().len(), 2);
    }

    #[test]
    fn test_from_entries_drops_inner_blanks() {
        let urls = list(&["a.com", "", "b.com", ""]);
        assert_eq!(urls.entries(), &["a.com".to_string(), "b.com".to_string(), String::new()]);
    }
}
