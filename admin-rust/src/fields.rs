use portfolio_sdk::{is_known_platform, SocialMediaLink, KNOWN_PLATFORMS};

/// Ordered, variable-length sequence bound to one field of a form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DynamicList<T> {
    entries: Vec<T>,
}

impl<T> Default for DynamicList<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<T> DynamicList<T> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn from_entries(entries: Vec<T>) -> Self {
        Self { entries }
    }

    pub fn append(&mut self, value: T) {
        self.entries.push(value);
    }

    /// Remove and return the entry at `index`, shifting later entries up.
    pub fn remove_at(&mut self, index: usize) -> Option<T> {
        if index < self.entries.len() {
            Some(self.entries.remove(index))
        } else {
            None
        }
    }

    /// Replace the entry at `index` in place. False when out of range.
    pub fn replace_at(&mut self, index: usize, value: T) -> bool {
        match self.entries.get_mut(index) {
            Some(slot) => {
                *slot = value;
                true
            }
            None => false,
        }
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.entries.get(index)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.entries.iter()
    }

    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        self.entries
    }
}

impl<'a, T> IntoIterator for &'a DynamicList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Free-text tag list with a separate uncommitted edit buffer.
///
/// The buffer holds whatever was typed, trailing comma and all; the committed
/// sequence is only re-derived on [`commit`](Self::commit) (blur/submit), so
/// half-typed input survives between keystrokes. Entries keep their order and
/// duplicates; the only normalization is per-entry trimming.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagListField {
    buffer: String,
    committed: DynamicList<String>,
}

impl TagListField {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from already-stored values; the buffer shows them comma-joined.
    #[must_use]
    pub fn from_values<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let entries: Vec<String> = values.into_iter().map(Into::into).collect();
        Self {
            buffer: entries.join(", "),
            committed: DynamicList::from_entries(entries),
        }
    }

    /// Keystroke update; the text is kept verbatim until the next commit.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.buffer = text.into();
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.buffer
    }

    /// Derive the committed sequence from the buffer: split on commas, trim
    /// each segment, discard empty ones. The buffer is normalized to the
    /// committed form.
    pub fn commit(&mut self) -> &[String] {
        let entries: Vec<String> = self
            .buffer
            .split(',')
            .map(str::trim)
            .filter(|segment| !segment.is_empty())
            .map(ToString::to_string)
            .collect();
        self.buffer = entries.join(", ");
        self.committed = DynamicList::from_entries(entries);
        self.committed.as_slice()
    }

    /// The sequence as of the last commit.
    #[must_use]
    pub fn committed(&self) -> &[String] {
        self.committed.as_slice()
    }
}

/// One row of the social links editor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SocialLinkRow {
    logo: String,
    url: String,
    locked: bool,
}

impl SocialLinkRow {
    #[must_use]
    pub fn logo(&self) -> &str {
        &self.logo
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Locked rows belong to the fixed platform vocabulary: their label
    /// cannot be edited and the row cannot be removed, only its url cleared.
    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.locked
    }
}

/// Structured social-media link editor.
///
/// Every known platform gets a row even when the stored profile has none, so
/// the operator always sees the full vocabulary; stored custom entries follow
/// in their stored order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SocialLinksField {
    rows: DynamicList<SocialLinkRow>,
}

impl Default for SocialLinksField {
    fn default() -> Self {
        Self::from_stored(&[])
    }
}

impl SocialLinksField {
    /// The editor for a profile with no stored links yet.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Synthesize the full platform vocabulary (stored url or empty), then
    /// append the stored custom entries.
    #[must_use]
    pub fn from_stored(links: &[SocialMediaLink]) -> Self {
        let mut rows = DynamicList::new();
        for platform in KNOWN_PLATFORMS {
            rows.append(SocialLinkRow {
                logo: platform.to_string(),
                url: links
                    .iter()
                    .find(|link| link.logo == platform)
                    .map(|link| link.url.clone())
                    .unwrap_or_default(),
                locked: true,
            });
        }
        for link in links.iter().filter(|link| !is_known_platform(&link.logo)) {
            rows.append(SocialLinkRow {
                logo: link.logo.clone(),
                url: link.url.clone(),
                locked: false,
            });
        }
        Self { rows }
    }

    #[must_use]
    pub fn rows(&self) -> &[SocialLinkRow] {
        self.rows.as_slice()
    }

    /// Add a custom row. Both fields are required; false when either is
    /// blank.
    pub fn append_custom(&mut self, logo: impl Into<String>, url: impl Into<String>) -> bool {
        let logo = logo.into();
        let url = url.into();
        if logo.trim().is_empty() || url.trim().is_empty() {
            return false;
        }
        self.rows.append(SocialLinkRow {
            logo,
            url,
            locked: false,
        });
        true
    }

    /// Remove a custom row. Locked rows are refused; clear their url instead.
    pub fn remove_at(&mut self, index: usize) -> bool {
        match self.rows.get(index) {
            Some(row) if !row.locked => self.rows.remove_at(index).is_some(),
            _ => false,
        }
    }

    pub fn set_url_at(&mut self, index: usize, url: impl Into<String>) -> bool {
        match self.rows.get(index) {
            Some(row) => {
                let mut updated = row.clone();
                updated.url = url.into();
                self.rows.replace_at(index, updated)
            }
            None => false,
        }
    }

    /// Edit a custom row's label. Locked labels are refused.
    pub fn set_logo_at(&mut self, index: usize, logo: impl Into<String>) -> bool {
        match self.rows.get(index) {
            Some(row) if !row.locked => {
                let mut updated = row.clone();
                updated.logo = logo.into();
                self.rows.replace_at(index, updated)
            }
            _ => false,
        }
    }

    /// The links worth storing: rows with a non-empty url, in row order. A
    /// known platform cleared to an empty url stays visible in the editor but
    /// is dropped from the stored value.
    #[must_use]
    pub fn committed(&self) -> Vec<SocialMediaLink> {
        self.rows
            .iter()
            .filter(|row| !row.url.trim().is_empty())
            .map(|row| SocialMediaLink::new(row.logo.clone(), row.url.clone()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dynamic_list_edits_in_place() {
        let mut list = DynamicList::from_entries(vec!["a", "b", "c"]);
        list.append("d");
        assert_eq!(list.as_slice(), ["a", "b", "c", "d"]);

        assert_eq!(list.remove_at(1), Some("b"));
        assert_eq!(list.as_slice(), ["a", "c", "d"]);
        assert_eq!(list.remove_at(9), None);

        assert!(list.replace_at(0, "z"));
        assert!(!list.replace_at(9, "nope"));
        assert_eq!(list.as_slice(), ["z", "c", "d"]);
    }

    #[test]
    fn tag_commit_splits_trims_and_drops_empties() {
        let mut field = TagListField::new();
        field.set_text("Go, Rust ,  , TypeScript");
        assert_eq!(field.commit(), ["Go", "Rust", "TypeScript"]);
        assert_eq!(field.text(), "Go, Rust, TypeScript");
    }

    #[test]
    fn uncommitted_text_survives_keystrokes() {
        let mut field = TagListField::from_values(["Go"]);
        field.set_text("Go, Ru");
        // Nothing committed yet; the half-typed entry is preserved.
        assert_eq!(field.committed(), ["Go"]);
        assert_eq!(field.text(), "Go, Ru");

        field.set_text("Go, Rust,");
        assert_eq!(field.commit(), ["Go", "Rust"]);
    }

    #[test]
    fn tags_keep_order_and_duplicates() {
        let mut field = TagListField::new();
        field.set_text("Rust, Go, Rust");
        assert_eq!(field.commit(), ["Rust", "Go", "Rust"]);
    }

    #[test]
    fn known_platforms_are_synthesized_with_empty_urls() {
        let field = SocialLinksField::empty();
        assert_eq!(field.rows().len(), KNOWN_PLATFORMS.len());
        for (row, platform) in field.rows().iter().zip(KNOWN_PLATFORMS) {
            assert_eq!(row.logo(), platform);
            assert_eq!(row.url(), "");
            assert!(row.is_locked());
        }
    }

    #[test]
    fn stored_links_fill_platform_rows_and_custom_rows_follow() {
        let stored = vec![
            SocialMediaLink::new("Github", "https://github.com/op"),
            SocialMediaLink::new("My Blog", "https://blog.test"),
        ];
        let field = SocialLinksField::from_stored(&stored);

        assert_eq!(field.rows().len(), KNOWN_PLATFORMS.len() + 1);
        let github = &field.rows()[1];
        assert_eq!(github.logo(), "Github");
        assert_eq!(github.url(), "https://github.com/op");
        assert!(github.is_locked());

        let custom = field.rows().last().unwrap();
        assert_eq!(custom.logo(), "My Blog");
        assert!(!custom.is_locked());
    }

    #[test]
    fn locked_rows_cannot_be_removed_or_relabeled() {
        let mut field = SocialLinksField::empty();
        assert!(!field.remove_at(0));
        assert!(!field.set_logo_at(0, "Gitlab"));
        // The url stays editable, including clearing it.
        assert!(field.set_url_at(0, "mailto:op@example.com"));
        assert!(field.set_url_at(0, ""));

        assert!(field.append_custom("My Blog", "https://blog.test"));
        let custom_index = field.rows().len() - 1;
        assert!(field.set_logo_at(custom_index, "The Blog"));
        assert!(field.remove_at(custom_index));
    }

    #[test]
    fn commit_keeps_only_rows_with_urls() {
        let mut field = SocialLinksField::empty();
        field.set_url_at(1, "https://github.com/op");
        field.append_custom("My Blog", "https://blog.test");
        assert!(!field.append_custom("", "https://nowhere.test"));

        let committed = field.committed();
        assert_eq!(
            committed,
            vec![
                SocialMediaLink::new("Github", "https://github.com/op"),
                SocialMediaLink::new("My Blog", "https://blog.test"),
            ]
        );
    }
}
