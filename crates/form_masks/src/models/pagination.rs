//! Paging and text filtering over lists the backend already returned.

use serde::{Deserialize, Serialize};

use super::settings::{SETTINGS, Settings};

/// Same envelope the REST backend uses for paged listings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub content: Vec<T>,
    pub total_elements: usize,
    pub total_pages: usize,
    /// Zero-based page index
    pub number: usize,
    pub size: usize,
}

impl<T> Page<T> {
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    pub fn is_first(&self) -> bool {
        self.number == 0
    }

    pub fn is_last(&self) -> bool {
        self.number.saturating_add(1) >= self.total_pages
    }

    pub fn map<U, F: FnMut(T) -> U>(self, f: F) -> Page<U> {
        Page {
            content: self.content.into_iter().map(f).collect(),
            total_elements: self.total_elements,
            total_pages: self.total_pages,
            number: self.number,
            size: self.size,
        }
    }
}

/// Slice page `number` out of `items`; size 0 means the configured default
pub fn paginate<T: Clone>(items: &[T], number: usize, size: usize) -> Page<T> {
    paginate_with(&SETTINGS, items, number, size)
}

pub fn paginate_with<T: Clone>(settings: &Settings, items: &[T], number: usize, size: usize) -> Page<T> {
    let size = settings.effective_page_size(size);
    let total_elements = items.len();
    let start = number.saturating_mul(size).min(total_elements);
    let end = start.saturating_add(size).min(total_elements);

    Page {
        content: items[start..end].to_vec(),
        total_elements,
        total_pages: total_elements.div_ceil(size),
        number,
        size,
    }
}

/// Items whose key contains `query`, ignoring case. A blank query keeps everything.
pub fn filter_items<'a, T, F, S>(items: &'a [T], query: &str, key: F) -> Vec<&'a T>
where
    F: Fn(&T) -> S,
    S: AsRef<str>,
{
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return items.iter().collect();
    }
    items
        .iter()
        .filter(|item| key(item).as_ref().to_lowercase().contains(&needle))
        .collect()
}
