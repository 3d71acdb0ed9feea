//! Multi-select state for result rows.

use std::collections::BTreeSet;

/// Set of checked candidate ids.
///
/// Selection is global to the results screen: it survives sorting and paging.
/// An apply that narrows the list prunes it to the rows still listed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    ids: BTreeSet<String>,
}

impl Selection {
    /// Adds `id` if absent, removes it if present.
    pub fn toggle(&mut self, id: &str) {
        if !self.ids.remove(id) {
            self.ids.insert(id.to_string());
        }
    }

    /// Header checkbox behavior.
    ///
    /// When the selection is exactly the ids on the page, clears it. Otherwise
    /// the selection becomes exactly the page's ids.
    ///
    /// # Examples
    ///
    /// ```
    /// use talentscope::domain::Selection;
    ///
    /// let page = vec!["1".to_string(), "2".to_string()];
    /// let mut selection = Selection::default();
    /// selection.select_all_on_page(&page);
    /// assert!(selection.all_selected_on_page(&page));
    /// selection.select_all_on_page(&page);
    /// assert!(selection.is_empty());
    /// ```
    pub fn select_all_on_page(&mut self, page_ids: &[String]) {
        if self.all_selected_on_page(page_ids) {
            self.ids.clear();
        } else {
            self.ids = page_ids.iter().cloned().collect();
        }
    }

    /// Returns whether the selection holds exactly the ids on a non-empty page.
    #[must_use]
    pub fn all_selected_on_page(&self, page_ids: &[String]) -> bool {
        !page_ids.is_empty()
            && self.ids.len() == page_ids.len()
            && page_ids.iter().all(|id| self.ids.contains(id))
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    /// Drops every id not in `listed`.
    pub fn retain_listed<'a>(&mut self, listed: impl IntoIterator<Item = &'a str>) {
        let listed: BTreeSet<&str> = listed.into_iter().collect();
        self.ids.retain(|id| listed.contains(id.as_str()));
    }
}
