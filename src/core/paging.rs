//! Client-side pagination over an endpoint that returns everything at once.
//!
//! Every page request re-fetches the complete result set and slices it by
//! arithmetic offset, so pages only line up if upstream ordering is stable
//! between calls. Nothing here can verify that.

use crate::core::repository::JobRepository;
use crate::errors::{AppError, AppResult};
use crate::models::filter::JobFilter;
use crate::models::job::Job;
use crate::remote::JobSource;

pub const FIRST_PAGE: u32 = 1;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    pub data: Vec<T>,
    pub prev_key: Option<u32>,
    pub next_key: Option<u32>,
}

/// Slice `items` into page `page` (1-based) of `size` items.
///
/// Past the end → empty page with no next key. The last non-empty page
/// has no next key either.
pub fn slice_page<T: Clone>(items: &[T], page: u32, size: usize) -> AppResult<Page<T>> {
    if page < FIRST_PAGE {
        return Err(AppError::InvalidPage(page));
    }

    let total = items.len();
    let start = (page as usize - 1).saturating_mul(size);
    let prev_key = if page == FIRST_PAGE { None } else { Some(page - 1) };

    if start >= total || size == 0 {
        return Ok(Page {
            data: Vec::new(),
            prev_key,
            next_key: None,
        });
    }

    let end = (start + size).min(total);
    Ok(Page {
        data: items[start..end].to_vec(),
        prev_key,
        next_key: if end < total { Some(page + 1) } else { None },
    })
}

/// Pages loaded so far plus the last position the reader looked at.
#[derive(Debug, Clone)]
pub struct PagingState<T> {
    pub pages: Vec<Page<T>>,
    pub anchor_position: Option<usize>,
}

impl<T> Default for PagingState<T> {
    fn default() -> Self {
        Self {
            pages: Vec::new(),
            anchor_position: None,
        }
    }
}

impl<T> PagingState<T> {
    /// Page holding item `position`, counting across loaded pages; positions
    /// past the loaded items clamp to the last page.
    pub fn closest_page_to_position(&self, position: usize) -> Option<&Page<T>> {
        let mut seen = 0;
        for page in &self.pages {
            seen += page.data.len();
            if position < seen {
                return Some(page);
            }
        }
        self.pages.last()
    }

    pub fn item_count(&self) -> usize {
        self.pages.iter().map(|p| p.data.len()).sum()
    }
}

/// Page loader for one filter.
pub struct JobsPagingSource<'a, S> {
    repository: &'a JobRepository<S>,
    filter: JobFilter,
}

impl<'a, S: JobSource> JobsPagingSource<'a, S> {
    pub fn new(repository: &'a JobRepository<S>, filter: JobFilter) -> Self {
        Self { repository, filter }
    }

    /// Load page `key` (default 1). One full remote fetch per call.
    pub async fn load(&self, key: Option<u32>, load_size: usize) -> AppResult<Page<Job>> {
        let page = key.unwrap_or(FIRST_PAGE);
        if page < FIRST_PAGE {
            return Err(AppError::InvalidPage(page));
        }

        let jobs = self.repository.search_jobs(&self.filter).await?;
        let out = slice_page(&jobs, page, load_size)?;

        tracing::debug!(
            page,
            load_size,
            total = jobs.len(),
            returned = out.data.len(),
            "page loaded"
        );
        Ok(out)
    }

    /// Page to reload after invalidation, derived from the page closest to
    /// the anchor: its previous key's successor, else its next key's
    /// predecessor.
    pub fn refresh_key(state: &PagingState<Job>) -> Option<u32> {
        let anchor = state.anchor_position?;
        let page = state.closest_page_to_position(anchor)?;
        page.prev_key
            .map(|k| k + 1)
            .or_else(|| page.next_key.map(|k| k - 1))
    }
}

/// Walks a paging source forward one page at a time.
pub struct Pager<'a, S> {
    source: JobsPagingSource<'a, S>,
    page_size: usize,
    next_key: Option<u32>,
    state: PagingState<Job>,
}

impl<'a, S: JobSource> Pager<'a, S> {
    pub fn new(source: JobsPagingSource<'a, S>, page_size: usize) -> Self {
        Self::starting_at(source, page_size, FIRST_PAGE)
    }

    pub fn starting_at(source: JobsPagingSource<'a, S>, page_size: usize, page: u32) -> Self {
        Self {
            source,
            page_size,
            next_key: Some(page),
            state: PagingState::default(),
        }
    }

    /// `Ok(None)` once the end of data has been reached.
    pub async fn next_page(&mut self) -> AppResult<Option<&Page<Job>>> {
        let Some(key) = self.next_key else {
            return Ok(None);
        };

        let page = self.source.load(Some(key), self.page_size).await?;
        self.next_key = page.next_key;

        if page.data.is_empty() {
            return Ok(None);
        }

        self.state.pages.push(page);
        Ok(self.state.pages.last())
    }

    pub fn is_finished(&self) -> bool {
        self.next_key.is_none()
    }

    /// Record the position the reader is looking at.
    pub fn set_anchor(&mut self, position: usize) {
        self.state.anchor_position = Some(position);
    }

    pub fn state(&self) -> &PagingState<Job> {
        &self.state
    }

    pub fn refresh_key(&self) -> Option<u32> {
        JobsPagingSource::<S>::refresh_key(&self.state)
    }

    /// Every item loaded so far, in page order.
    pub fn loaded_items(&self) -> Vec<Job> {
        self.state
            .pages
            .iter()
            .flat_map(|p| p.data.iter().cloned())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(n: usize) -> Vec<usize> {
        (0..n).collect()
    }

    #[test]
    fn page_one_of_forty_five() {
        let p = slice_page(&items(45), 1, 20).unwrap();
        assert_eq!(p.data, (0..20).collect::<Vec<_>>());
        assert_eq!(p.prev_key, None);
        assert_eq!(p.next_key, Some(2));
    }

    #[test]
    fn last_partial_page_has_no_next_key() {
        let p = slice_page(&items(45), 3, 20).unwrap();
        assert_eq!(p.data, (40..45).collect::<Vec<_>>());
        assert_eq!(p.prev_key, Some(2));
        assert_eq!(p.next_key, None);
    }

    #[test]
    fn page_past_the_end_is_empty() {
        let p = slice_page(&items(45), 4, 20).unwrap();
        assert!(p.data.is_empty());
        assert_eq!(p.prev_key, Some(3));
        assert_eq!(p.next_key, None);

        let exact = slice_page(&items(40), 2, 20).unwrap();
        assert_eq!(exact.data.len(), 20);
        assert_eq!(exact.next_key, None);
        assert!(slice_page(&items(40), 3, 20).unwrap().data.is_empty());
    }

    #[test]
    fn concatenated_pages_rebuild_the_list() {
        for (n, s) in [(0usize, 3usize), (1, 1), (7, 3), (45, 20), (60, 20)] {
            let all = items(n);
            let pages = n.div_ceil(s);
            let mut joined = Vec::new();
            for p in 1..=pages as u32 {
                joined.extend(slice_page(&all, p, s).unwrap().data);
            }
            assert_eq!(joined, all, "n={n} s={s}");

            let beyond = slice_page(&all, pages as u32 + 1, s).unwrap();
            assert!(beyond.data.is_empty());
            assert_eq!(beyond.next_key, None);
        }
    }

    #[test]
    fn page_zero_is_rejected() {
        assert!(matches!(
            slice_page(&items(3), 0, 2),
            Err(AppError::InvalidPage(0))
        ));
    }

    #[test]
    fn closest_page_clamps_to_last() {
        let state = PagingState {
            pages: vec![
                slice_page(&items(5), 1, 2).unwrap(),
                slice_page(&items(5), 2, 2).unwrap(),
            ],
            anchor_position: Some(99),
        };
        assert_eq!(state.closest_page_to_position(0).unwrap().data, vec![0, 1]);
        assert_eq!(state.closest_page_to_position(3).unwrap().data, vec![2, 3]);
        assert_eq!(state.closest_page_to_position(99).unwrap().data, vec![2, 3]);
        assert_eq!(state.item_count(), 4);
    }
}
