use crate::core::config::ViewConfig;
use crate::core::error::AddUserError;
use crate::listing::paging::{clamp_page, paginate, total_pages};
use crate::listing::search::apply_filter;
use crate::listing::sort::apply_sort;
use crate::models::user::{NewUser, UserRecord};
use crate::models::view::{SearchMode, SortKey};
use crate::stores::user_list::UserList;
use crate::validation::new_user::validate_new_user;
use tokio::sync::watch;
use tracing::{debug, info, warn};

/// Everything a presentation layer needs to draw the table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewSnapshot {
    /// Records on the current page (or all filtered records when showing all)
    pub rows: Vec<UserRecord>,
    /// Records left after filtering
    pub filtered_count: usize,
    /// Records in the working list
    pub total_count: usize,
    pub page: usize,
    pub total_pages: usize,
    pub query: String,
    pub sort_key: SortKey,
    pub show_all: bool,
}

impl ViewSnapshot {
    pub fn has_prev(&self) -> bool {
        !self.show_all && self.page > 1
    }

    pub fn has_next(&self) -> bool {
        !self.show_all && self.page < self.total_pages
    }
}

/// View-model for the user table.
///
/// Owns the working list and the view state (query, sort key, page, show
/// all). Derived output is recomputed after every mutator and published as
/// a [`ViewSnapshot`] to subscribers.
#[derive(Debug)]
pub struct UserListView {
    working: UserList,
    query: String,
    sort_key: SortKey,
    page: usize,
    show_all: bool,
    page_size: usize,
    search_mode: SearchMode,
    updates: watch::Sender<ViewSnapshot>,
}

impl UserListView {
    pub fn new(config: &ViewConfig) -> Self {
        let (updates, _) = watch::channel(ViewSnapshot {
            rows: Vec::new(),
            filtered_count: 0,
            total_count: 0,
            page: 1,
            total_pages: 1,
            query: String::new(),
            sort_key: SortKey::None,
            show_all: false,
        });

        Self {
            working: UserList::new(),
            query: String::new(),
            sort_key: SortKey::None,
            page: 1,
            show_all: false,
            page_size: config.page_size,
            search_mode: config.search_mode,
            updates,
        }
    }

    /// Receive a fresh snapshot after every change
    pub fn subscribe(&self) -> watch::Receiver<ViewSnapshot> {
        self.updates.subscribe()
    }

    /// Replace the working list wholesale. Query, sort key and show-all are
    /// kept; the page is clamped to the new page count.
    pub fn set_seed(&mut self, records: Vec<UserRecord>) {
        let count = records.len();
        self.working.replace_all(records);
        self.refresh();
        info!(users = count, "Working list replaced");
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.refresh();
        debug!(query = %self.query, page = self.page, "Search query changed");
    }

    pub fn clear_query(&mut self) {
        self.set_query(String::new());
    }

    pub fn set_sort_key(&mut self, key: SortKey) {
        self.sort_key = key;
        self.refresh();
        debug!(sort_key = %key, "Sort key changed");
    }

    pub fn next_page(&mut self) {
        self.set_page(self.page.saturating_add(1));
    }

    pub fn prev_page(&mut self) {
        self.set_page(self.page.saturating_sub(1));
    }

    /// Jump to `page`, clamped to the available pages
    pub fn set_page(&mut self, page: usize) {
        self.page = page;
        self.refresh();
        debug!(page = self.page, "Page changed");
    }

    /// Show every filtered record on one page
    pub fn show_all(&mut self) {
        self.show_all = true;
        self.page = 1;
        self.refresh();
    }

    /// Go back to paged output, starting at page 1
    pub fn show_paged(&mut self) {
        self.show_all = false;
        self.page = 1;
        self.refresh();
    }

    /// Validate `candidate` and insert it at the head of the working list.
    ///
    /// On success the new record gets `max(existing ids, 0) + 1` and the
    /// view returns to page 1 so it is visible. On failure nothing changes.
    pub fn submit_new_user(&mut self, candidate: NewUser) -> Result<UserRecord, AddUserError> {
        let valid = match validate_new_user(candidate) {
            Ok(valid) => valid,
            Err(e) => {
                warn!(error = %e, "Rejected new user");
                return Err(e);
            }
        };

        let id = self.working.next_id().ok_or_else(|| {
            warn!(max_id = self.working.max_id(), "Rejected new user, no id left");
            AddUserError::IdSpaceExhausted
        })?;

        let record = valid.into_record(id);
        self.working.prepend(record.clone());
        self.page = 1;
        self.refresh();

        info!(
            user_id = record.id,
            username = %record.username,
            total_users = self.working.len(),
            "User added"
        );

        Ok(record)
    }

    /// Working list sorted by the current key, then filtered by the query
    pub fn filtered(&self) -> Vec<UserRecord> {
        let sorted = apply_sort(self.working.as_slice(), self.sort_key);
        apply_filter(&sorted, &self.query, self.search_mode)
    }

    /// Records visible under the current view state
    pub fn visible(&self) -> Vec<UserRecord> {
        let filtered = self.filtered();
        paginate(&filtered, self.page, self.page_size, self.show_all).to_vec()
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.filtered().len(), self.page_size)
    }

    /// Latest published snapshot
    pub fn snapshot(&self) -> ViewSnapshot {
        self.updates.borrow().clone()
    }

    /// Record with `id` in the working list, regardless of the current
    /// query or page
    pub fn find(&self, id: u32) -> Option<&UserRecord> {
        self.working.get(id)
    }

    pub fn records(&self) -> &[UserRecord] {
        self.working.as_slice()
    }

    pub fn current_page(&self) -> usize {
        self.page
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn sort_key(&self) -> SortKey {
        self.sort_key
    }

    pub fn is_showing_all(&self) -> bool {
        self.show_all
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn search_mode(&self) -> SearchMode {
        self.search_mode
    }

    /// Re-derive the view after a mutation: clamp the page and publish
    fn refresh(&mut self) {
        let filtered = self.filtered();
        let pages = total_pages(filtered.len(), self.page_size);
        self.page = clamp_page(self.page, pages);

        let rows = paginate(&filtered, self.page, self.page_size, self.show_all).to_vec();

        self.updates.send_replace(ViewSnapshot {
            rows,
            filtered_count: filtered.len(),
            total_count: self.working.len(),
            page: self.page,
            total_pages: pages,
            query: self.query.clone(),
            sort_key: self.sort_key,
            show_all: self.show_all,
        });
    }
}
