use std::future::Future;
use std::sync::Arc;

use crate::api::models::{RawEmailRecord, RetrievalParams};
use crate::error::AppResult;

use super::filter::{CategoryFilter, Page, PriorityFilter};
use super::normalize;
use super::state::{MailboxState, MailboxView, Phase, RetrievalTicket};

pub trait EmailSource {
    fn fetch(
        &self,
        params: &RetrievalParams,
    ) -> impl Future<Output = AppResult<Vec<RawEmailRecord>>>;
}

#[derive(Debug)]
pub struct Feed<S> {
    source: Arc<S>,
    params: RetrievalParams,
    state: MailboxState,
    reveal_step: usize,
}

impl<S: EmailSource> Feed<S> {
    pub fn new(
        source: S,
        params: RetrievalParams,
        page_size: usize,
        reveal_step: usize,
    ) -> AppResult<Self> {
        Ok(Self {
            source: Arc::new(source),
            params,
            state: MailboxState::new(page_size)?,
            reveal_step,
        })
    }

    pub fn params(&self) -> RetrievalParams {
        self.params
    }

    pub fn state(&self) -> &MailboxState {
        &self.state
    }

    pub fn snapshot(&self) -> MailboxView {
        self.state.snapshot()
    }

    pub fn page(&self) -> Page<'_> {
        self.state.page()
    }

    pub fn begin_refresh(
        &mut self,
    ) -> (
        RetrievalTicket,
        impl Future<Output = AppResult<Vec<RawEmailRecord>>> + use<S>,
    ) {
        let ticket = self.state.begin_retrieval();
        let source = Arc::clone(&self.source);
        let params = self.params;
        (ticket, async move { source.fetch(&params).await })
    }

    pub fn finish(
        &mut self,
        ticket: RetrievalTicket,
        result: AppResult<Vec<RawEmailRecord>>,
    ) -> bool {
        self.state
            .complete(ticket, result.map(normalize::normalize_all))
    }

    pub async fn refresh(&mut self) -> Phase {
        let (ticket, fetch) = self.begin_refresh();
        let result = fetch.await;
        self.finish(ticket, result);
        self.state.phase()
    }

    pub fn update_params(&mut self, params: RetrievalParams) -> bool {
        if params == self.params {
            return false;
        }

        self.params = params;
        true
    }

    pub async fn set_params(&mut self, params: RetrievalParams) -> bool {
        if !self.update_params(params) {
            return false;
        }

        self.refresh().await;
        true
    }

    pub fn set_category(&mut self, input: &str) {
        self.state.set_category(CategoryFilter::parse(input));
    }

    pub fn set_priority(&mut self, input: &str) -> AppResult<()> {
        let priority = PriorityFilter::parse(input)?;
        self.state.set_priority(priority);
        Ok(())
    }

    pub fn set_visible_count(&mut self, count: usize) -> AppResult<()> {
        self.state.set_visible_count(count)
    }

    pub fn reveal_more(&mut self) {
        self.state.reveal_more(self.reveal_step);
    }
}
