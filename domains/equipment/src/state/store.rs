//! Equipment list store
//!
//! Holds the client-side state of the equipment views and runs every
//! repository call on their behalf:
//! - state lives in a `watch` channel; every change notifies subscribers
//! - filtered and paged views are recomputed from the latest state on read
//! - repository calls are serialized, so they complete in call order
//! - failures never escape; they land in `StoreState::error`

use std::sync::Arc;

use tokio::sync::{watch, Mutex};

use assetdesk_common::pagination::DEFAULT_PAGE_SIZE;
use assetdesk_common::{Error, Pagination};

use crate::application::LoadEquipmentList;
use crate::domain::entities::{Equipment, EquipmentStatus, EquipmentType};
use crate::repository::EquipmentRepository;
use crate::state::filters::{EquipmentFilter, Selection};

/// Snapshot of everything the equipment views render from
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StoreState {
    /// Last collection fetched from, or written through, the repository
    pub items: Vec<Equipment>,
    pub loading: bool,
    pub error: Option<String>,
    pub filter: EquipmentFilter,
    pub pagination: Pagination,
    in_flight: usize,
}

impl StoreState {
    /// Items matching the current filter, in original order
    pub fn filtered(&self) -> Vec<&Equipment> {
        self.filter.apply(&self.items)
    }

    /// The current page of the filtered items
    pub fn paged(&self) -> Vec<&Equipment> {
        let filtered = self.filtered();
        self.pagination.slice(&filtered).to_vec()
    }

    /// Number of items matching the current filter
    pub fn total(&self) -> usize {
        self.filtered().len()
    }

    pub fn page_count(&self) -> usize {
        self.pagination.page_count(self.total())
    }
}

/// Marks one store operation as outstanding until dropped.
///
/// Dropping also covers cancelled operations, so `loading` cannot stick.
struct InFlight<'a> {
    state: &'a watch::Sender<StoreState>,
}

impl<'a> InFlight<'a> {
    fn start(state: &'a watch::Sender<StoreState>) -> Self {
        state.send_modify(|s| {
            s.in_flight += 1;
            s.loading = true;
        });
        Self { state }
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.state.send_modify(|s| {
            s.in_flight = s.in_flight.saturating_sub(1);
            s.loading = s.in_flight > 0;
        });
    }
}

/// Client-side equipment store.
///
/// Construct once at startup and share by reference (or `Arc`).
pub struct EquipmentStore {
    load_list: LoadEquipmentList,
    repository: Arc<dyn EquipmentRepository>,
    state: watch::Sender<StoreState>,
    writes: Mutex<()>,
}

impl EquipmentStore {
    pub fn new(repository: Arc<dyn EquipmentRepository>) -> Self {
        Self::with_page_size(repository, DEFAULT_PAGE_SIZE)
    }

    pub fn with_page_size(repository: Arc<dyn EquipmentRepository>, page_size: usize) -> Self {
        let (state, _) = watch::channel(StoreState {
            pagination: Pagination::new(1, page_size),
            ..StoreState::default()
        });

        Self {
            load_list: LoadEquipmentList::new(repository.clone()),
            repository,
            state,
            writes: Mutex::new(()),
        }
    }

    // ------------------------------------------------------------------
    // Repository operations
    // ------------------------------------------------------------------

    /// Reload the whole collection and go back to the first page
    pub async fn fetch_all(&self) {
        let _in_flight = InFlight::start(&self.state);
        let _write = self.writes.lock().await;
        self.state.send_modify(|s| s.error = None);

        match self.load_list.execute().await {
            Ok(items) => {
                tracing::info!(count = items.len(), "Equipment list loaded");
                self.state.send_modify(|s| {
                    s.items = items;
                    s.pagination = s.pagination.first();
                });
            }
            Err(err) => self.record_failure("load equipment", err),
        }
    }

    /// Load the collection unless items are already present
    pub async fn ensure_loaded(&self) {
        let empty = self.state.borrow().items.is_empty();
        if empty {
            self.fetch_all().await;
        }
    }

    /// Persist a new record and append the stored copy
    pub async fn create(&self, equipment: Equipment) {
        let _in_flight = InFlight::start(&self.state);
        let _write = self.writes.lock().await;

        match self.repository.create(equipment).await {
            Ok(created) => {
                tracing::info!(id = %created.id(), "Equipment created");
                self.state.send_modify(|s| s.items.push(created));
            }
            Err(err) => self.record_failure("create equipment", err),
        }
    }

    /// Persist a full replacement and swap it in by id
    pub async fn update(&self, equipment: Equipment) {
        let _in_flight = InFlight::start(&self.state);
        let _write = self.writes.lock().await;

        match self.repository.update(equipment).await {
            Ok(updated) => {
                tracing::info!(id = %updated.id(), "Equipment updated");
                self.state.send_modify(|s| {
                    if let Some(slot) = s.items.iter_mut().find(|e| e.id() == updated.id()) {
                        *slot = updated;
                    }
                });
            }
            Err(err) => self.record_failure("update equipment", err),
        }
    }

    /// Remove a record everywhere
    pub async fn delete(&self, id: &str) {
        let _in_flight = InFlight::start(&self.state);
        let _write = self.writes.lock().await;

        match self.repository.delete(id).await {
            Ok(()) => {
                tracing::info!(id, "Equipment deleted");
                self.state.send_modify(|s| s.items.retain(|e| e.id() != id));
            }
            Err(err) => self.record_failure("delete equipment", err),
        }
    }

    /// Whether the repository knows this id; lookup failures count as no
    pub async fn exists(&self, id: &str) -> bool {
        match self.repository.find_by_id(id).await {
            Ok(found) => found.is_some(),
            Err(err) => {
                tracing::warn!(
                    id,
                    error_code = err.error_code(),
                    error = %err,
                    "Equipment lookup failed"
                );
                false
            }
        }
    }

    fn record_failure(&self, action: &str, err: Error) {
        tracing::error!(
            action,
            error_code = err.error_code(),
            error = %err,
            "Equipment store operation failed"
        );
        let message = err.user_message();
        self.state.send_modify(|s| s.error = Some(message));
    }

    // ------------------------------------------------------------------
    // Filters and paging
    // ------------------------------------------------------------------

    pub fn set_query(&self, query: impl Into<String>) {
        let query = query.into();
        self.state.send_modify(|s| {
            s.filter.query = query;
            s.pagination = s.pagination.first();
        });
    }

    pub fn set_status(&self, status: Selection<EquipmentStatus>) {
        self.state.send_modify(|s| {
            s.filter.status = status;
            s.pagination = s.pagination.first();
        });
    }

    pub fn set_type(&self, equipment_type: Selection<EquipmentType>) {
        self.state.send_modify(|s| {
            s.filter.equipment_type = equipment_type;
            s.pagination = s.pagination.first();
        });
    }

    /// Move to another page; values below 1 select the first page
    pub fn set_page(&self, page: usize) {
        self.state
            .send_modify(|s| s.pagination = s.pagination.with_page(page));
    }

    /// Change the page size; values below 1 become 1
    pub fn set_page_size(&self, page_size: usize) {
        self.state
            .send_modify(|s| s.pagination = s.pagination.with_page_size(page_size));
    }

    pub fn clear_error(&self) {
        self.state.send_if_modified(|s| s.error.take().is_some());
    }

    // ------------------------------------------------------------------
    // Reads
    // ------------------------------------------------------------------

    /// Copy of the current state
    pub fn snapshot(&self) -> StoreState {
        self.state.borrow().clone()
    }

    /// Receiver notified after every state change
    pub fn subscribe(&self) -> watch::Receiver<StoreState> {
        self.state.subscribe()
    }

    pub fn items(&self) -> Vec<Equipment> {
        self.state.borrow().items.clone()
    }

    pub fn loading(&self) -> bool {
        self.state.borrow().loading
    }

    pub fn error(&self) -> Option<String> {
        self.state.borrow().error.clone()
    }

    pub fn query(&self) -> String {
        self.state.borrow().filter.query.clone()
    }

    pub fn status(&self) -> Selection<EquipmentStatus> {
        self.state.borrow().filter.status
    }

    pub fn equipment_type(&self) -> Selection<EquipmentType> {
        self.state.borrow().filter.equipment_type
    }

    pub fn page(&self) -> usize {
        self.state.borrow().pagination.page()
    }

    pub fn page_size(&self) -> usize {
        self.state.borrow().pagination.page_size()
    }

    pub fn filtered(&self) -> Vec<Equipment> {
        self.state.borrow().filtered().into_iter().cloned().collect()
    }

    pub fn paged(&self) -> Vec<Equipment> {
        self.state.borrow().paged().into_iter().cloned().collect()
    }

    pub fn total(&self) -> usize {
        self.state.borrow().total()
    }

    pub fn page_count(&self) -> usize {
        self.state.borrow().page_count()
    }
}
