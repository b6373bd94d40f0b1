use std::sync::Arc;

use serde::Serialize;

use crate::api::models::Email;
use crate::error::AppResult;

use super::filter::{self, CategoryFilter, FilterState, Page, PriorityFilter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Loading,
    Empty,
    Populated,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetrievalTicket {
    generation: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct MailboxView {
    pub emails: Arc<[Email]>,
    pub loading: bool,
}

#[derive(Debug, Clone)]
pub struct MailboxState {
    emails: Arc<[Email]>,
    phase: Phase,
    filter: FilterState,
    page_size: usize,
    issued: u64,
}

impl MailboxState {
    pub fn new(page_size: usize) -> AppResult<Self> {
        let filter = FilterState::new(page_size)?;
        Ok(Self {
            emails: Arc::from(Vec::new()),
            phase: Phase::Loading,
            filter,
            page_size,
            issued: 0,
        })
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_loading(&self) -> bool {
        self.phase == Phase::Loading
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn emails(&self) -> &[Email] {
        &self.emails
    }

    pub fn snapshot(&self) -> MailboxView {
        MailboxView {
            emails: Arc::clone(&self.emails),
            loading: self.is_loading(),
        }
    }

    pub fn begin_retrieval(&mut self) -> RetrievalTicket {
        self.issued += 1;
        self.phase = Phase::Loading;
        RetrievalTicket {
            generation: self.issued,
        }
    }

    /// Applies a finished retrieval. Returns false when a newer retrieval
    /// has been started since `ticket` was issued and the result was dropped.
    pub fn complete(&mut self, ticket: RetrievalTicket, result: AppResult<Vec<Email>>) -> bool {
        if ticket.generation != self.issued {
            tracing::debug!(
                generation = ticket.generation,
                latest = self.issued,
                "discarding superseded retrieval result"
            );
            return false;
        }

        let emails = match result {
            Ok(emails) => {
                tracing::info!(count = emails.len(), "retrieval completed");
                emails
            }
            Err(err) => {
                tracing::error!(error = %err, "email retrieval failed");
                Vec::new()
            }
        };

        self.phase = if emails.is_empty() {
            Phase::Empty
        } else {
            Phase::Populated
        };
        self.emails = Arc::from(emails);
        self.filter.reset_visible_count(self.page_size);
        true
    }

    pub fn set_category(&mut self, category: CategoryFilter) {
        self.filter.set_category(category);
    }

    pub fn set_priority(&mut self, priority: PriorityFilter) {
        self.filter.set_priority(priority);
    }

    pub fn set_visible_count(&mut self, count: usize) -> AppResult<()> {
        self.filter.set_visible_count(count)
    }

    pub fn reveal_more(&mut self, step: usize) {
        self.filter.reveal_more(step);
    }

    pub fn page(&self) -> Page<'_> {
        filter::paginate(&self.emails, &self.filter)
    }
}
