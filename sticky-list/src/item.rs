use alloc::string::String;

/// A record that can be listed: anything with a stable, unique identity.
///
/// The key drives list diffing, height caching and render-slot recycling, so it must be unique
/// across the whole item set. Duplicate keys are a caller defect; key lookups then resolve to
/// the last item carrying the key.
pub trait ListItem {
    fn key(&self) -> &str;
}

/// A two-line list entry, e.g. a contact's name and title.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    pub primary_text: String,
    pub secondary_text: String,
}

impl Item {
    pub fn new(primary_text: impl Into<String>, secondary_text: impl Into<String>) -> Self {
        Self {
            primary_text: primary_text.into(),
            secondary_text: secondary_text.into(),
        }
    }
}

impl ListItem for Item {
    fn key(&self) -> &str {
        &self.primary_text
    }
}

impl<T: ListItem + ?Sized> ListItem for &T {
    fn key(&self) -> &str {
        (**self).key()
    }
}
