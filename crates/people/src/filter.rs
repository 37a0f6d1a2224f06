use serde::{Deserialize, Serialize};

/// Filter over whether a record carries a phone number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PhoneFilter {
    /// Keep records with a non-empty phone.
    Yes,
    /// Keep records whose phone is absent or empty.
    No,
}

impl PhoneFilter {
    pub fn matches(self, phone: Option<&str>) -> bool {
        let has_phone = phone.is_some_and(|p| !p.is_empty());
        match self {
            PhoneFilter::Yes => has_phone,
            PhoneFilter::No => !has_phone,
        }
    }

    /// Keep the items of `items` this filter accepts, preserving order.
    pub fn apply<T>(self, items: Vec<T>, phone_of: impl Fn(&T) -> Option<&str>) -> Vec<T> {
        items.into_iter().filter(|item| self.matches(phone_of(item))).collect()
    }
}
