//! Per-entity board state: current filters, the last applied result, load
//! phase and the create/edit dialog.
//!
//! Fetches are tagged with a sequence number. A response is only applied if
//! no newer fetch has been issued since, so a slow old response can't
//! overwrite the view of a newer filter.

pub mod assessments;
pub mod candidates;
pub mod jobs;

use async_trait::async_trait;
use validator::Validate;

pub use assessments::{Assessments, AssessmentsBoard};
pub use candidates::{Candidates, CandidatesBoard};
pub use jobs::{Jobs, JobsBoard};

use crate::client::RemoteApi;
use crate::error::{Error, Result};
use crate::models::{EntityId, Record};

/// A listing as a board receives it: the visible records and the total
/// number matching the filters.
#[derive(Debug, Clone, PartialEq)]
pub struct Listing<T> {
    pub items: Vec<T>,
    pub total: usize,
}

impl<T> From<Vec<T>> for Listing<T> {
    fn from(items: Vec<T>) -> Self {
        let total = items.len();
        Self { items, total }
    }
}

/// Binds a board to one entity kind and its endpoints.
#[async_trait]
pub trait BoardResource: Send + Sync + 'static {
    type Record: Record + std::fmt::Debug;
    type Query: Clone + Default + Send + Sync + std::fmt::Debug;
    /// Dialog form; also the create payload.
    type Form: Validate + Send + 'static;
    type Patch: From<Self::Form> + Send + 'static;

    const NAME: &'static str;

    async fn fetch(api: &dyn RemoteApi, query: &Self::Query) -> Result<Listing<Self::Record>>;

    async fn create(api: &dyn RemoteApi, form: Self::Form) -> Result<Self::Record>;

    async fn update(api: &dyn RemoteApi, id: EntityId, patch: Self::Patch) -> Result<Self::Record>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadPhase {
    Idle,
    Loading,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogState {
    Closed,
    Creating,
    Editing(EntityId),
}

/// Handle for one issued fetch.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchTicket<Q> {
    pub seq: u64,
    pub query: Q,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    Applied,
    Failed,
    /// A newer fetch was issued after this one; the response was dropped.
    Stale,
}

pub struct BoardController<R: BoardResource> {
    query: R::Query,
    items: Vec<R::Record>,
    total: usize,
    phase: LoadPhase,
    dialog: DialogState,
    last_error: Option<String>,
    issued: u64,
}

impl<R: BoardResource> Default for BoardController<R> {
    fn default() -> Self {
        Self::new(R::Query::default())
    }
}

impl<R: BoardResource> BoardController<R> {
    pub fn new(query: R::Query) -> Self {
        Self {
            query,
            items: Vec::new(),
            total: 0,
            phase: LoadPhase::Idle,
            dialog: DialogState::Closed,
            last_error: None,
            issued: 0,
        }
    }

    pub fn query(&self) -> &R::Query {
        &self.query
    }

    pub fn items(&self) -> &[R::Record] {
        &self.items
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn phase(&self) -> LoadPhase {
        self.phase
    }

    pub fn dialog(&self) -> DialogState {
        self.dialog
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Replaces the filters and starts a fetch for them.
    pub fn set_query(&mut self, query: R::Query) -> FetchTicket<R::Query> {
        self.query = query;
        self.begin_fetch()
    }

    pub fn begin_fetch(&mut self) -> FetchTicket<R::Query> {
        self.issued += 1;
        self.phase = LoadPhase::Loading;
        FetchTicket {
            seq: self.issued,
            query: self.query.clone(),
        }
    }

    /// Applies a fetch result unless a newer fetch has been issued. Failures
    /// leave the current view untouched.
    pub fn finish_fetch(
        &mut self,
        ticket: FetchTicket<R::Query>,
        result: Result<Listing<R::Record>>,
    ) -> FetchOutcome {
        if ticket.seq < self.issued {
            tracing::debug!(
                board = R::NAME,
                seq = ticket.seq,
                latest = self.issued,
                "discarding stale response"
            );
            return FetchOutcome::Stale;
        }

        self.phase = LoadPhase::Idle;
        match result {
            Ok(listing) => {
                self.items = listing.items;
                self.total = listing.total;
                self.last_error = None;
                FetchOutcome::Applied
            }
            Err(e) => {
                tracing::error!(board = R::NAME, error = %e, "error fetching board");
                self.last_error = Some(e.to_string());
                FetchOutcome::Failed
            }
        }
    }

    pub async fn refresh(&mut self, api: &dyn RemoteApi) -> FetchOutcome {
        let ticket = self.begin_fetch();
        let result = R::fetch(api, &ticket.query).await;
        self.finish_fetch(ticket, result)
    }

    pub async fn apply_query(&mut self, api: &dyn RemoteApi, query: R::Query) -> FetchOutcome {
        let ticket = self.set_query(query);
        let result = R::fetch(api, &ticket.query).await;
        self.finish_fetch(ticket, result)
    }

    pub fn open_create(&mut self) {
        self.dialog = DialogState::Creating;
    }

    pub fn open_edit(&mut self, id: EntityId) {
        self.dialog = DialogState::Editing(id);
    }

    pub fn close_dialog(&mut self) {
        self.dialog = DialogState::Closed;
    }

    /// Submits the open dialog. On success the dialog closes and the board
    /// refetches; on any failure the dialog stays open.
    pub async fn submit(&mut self, api: &dyn RemoteApi, form: R::Form) -> Result<R::Record> {
        let target = self.dialog;
        if target == DialogState::Closed {
            return Err(Error::InvalidState(format!(
                "{} dialog is not open",
                R::NAME
            )));
        }
        if let Err(e) = form.validate() {
            tracing::warn!(board = R::NAME, error = %e, "form is missing required fields");
            return Err(e.into());
        }

        let result = match target {
            DialogState::Editing(id) => R::update(api, id, R::Patch::from(form)).await,
            _ => R::create(api, form).await,
        };

        match result {
            Ok(record) => {
                self.dialog = DialogState::Closed;
                self.refresh(api).await;
                Ok(record)
            }
            Err(e) => {
                tracing::error!(board = R::NAME, error = %e, "error saving record");
                Err(e)
            }
        }
    }

    /// Runs a mutation outside the dialog, then refetches on success.
    async fn mutate_then_refresh<T>(
        &mut self,
        api: &dyn RemoteApi,
        action: &str,
        result: Result<T>,
    ) -> Result<T> {
        match result {
            Ok(value) => {
                self.refresh(api).await;
                Ok(value)
            }
            Err(e) => {
                tracing::error!(board = R::NAME, action, error = %e, "board action failed");
                Err(e)
            }
        }
    }
}
