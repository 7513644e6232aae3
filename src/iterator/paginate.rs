use std::vec;

use crate::error::{Error, Result};
use crate::iterator::{State, Stream};

/// One page returned by a page-fetch callback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// Token for the following page. `None` (or an empty string) marks the
    /// last page.
    pub next_page_token: Option<String>,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, next_page_token: impl Into<String>) -> Self {
        Page {
            items,
            next_page_token: Some(next_page_token.into()),
        }
    }

    /// A page with nothing after it.
    pub fn last(items: Vec<T>) -> Self {
        Page {
            items,
            next_page_token: None,
        }
    }
}

impl<K, V> Page<(K, V)> {
    /// Build a pair page from parallel key and value columns.
    pub fn from_columns(keys: Vec<K>, values: Vec<V>, next_page_token: Option<String>) -> Self {
        Page {
            items: keys.into_iter().zip(values).collect(),
            next_page_token,
        }
    }
}

/// Turns a page-fetch callback into a stream.
///
/// Pages are fetched on demand: the first fetch happens on the first
/// `has_next()`/`next()`, later ones only once the current page is used up
/// and the consumer asks for more. The callback receives `None` for the
/// first page and the previous page's token afterwards.
///
/// A page that comes back empty but still carries a token is skipped. A fetch
/// error becomes the stream's latched error.
pub struct Paginated<T, F> {
    fetch: F,
    page: vec::IntoIter<T>,
    next_page_token: Option<String>,
    fetched: bool,
    state: State,
}

impl<T, F> Paginated<T, F>
where
    F: FnMut(Option<&str>) -> Result<Page<T>>,
{
    pub fn new(fetch: F) -> Self {
        Paginated {
            fetch,
            page: Vec::new().into_iter(),
            next_page_token: None,
            fetched: false,
            state: State::Active,
        }
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    fn fetch_next_page(&mut self) -> Result<()> {
        let token = self.next_page_token.take();
        let page = (self.fetch)(token.as_deref())?;
        let next_page_token = page.next_page_token.filter(|t| !t.is_empty());
        let has_more = next_page_token.is_some();
        tracing::debug!(items = page.items.len(), has_more, "fetched page");
        self.fetched = true;
        self.page = page.items.into_iter();
        self.next_page_token = next_page_token;
        Ok(())
    }
}

/// Stream the pages produced by `fetch`.
pub fn paginate<T, F>(fetch: F) -> Paginated<T, F>
where
    F: FnMut(Option<&str>) -> Result<Page<T>>,
{
    Paginated::new(fetch)
}

impl<T, F> Stream for Paginated<T, F>
where
    F: FnMut(Option<&str>) -> Result<Page<T>>,
{
    type Item = T;

    fn has_next(&mut self) -> bool {
        loop {
            match self.state {
                State::Failed(_) => return true,
                State::Exhausted => return false,
                State::Active => {}
            }
            if !self.page.as_slice().is_empty() {
                return true;
            }
            if self.fetched && self.next_page_token.is_none() {
                self.state.finish();
                return false;
            }
            if let Err(e) = self.fetch_next_page() {
                self.state.fail(e);
            }
        }
    }

    fn next(&mut self) -> Result<T> {
        if !self.has_next() {
            return Err(Error::Exhausted);
        }
        self.state.check()?;
        self.page.next().ok_or(Error::Exhausted)
    }
}
