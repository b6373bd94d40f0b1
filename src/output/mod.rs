pub mod json;
pub mod listing;
pub mod text;

use serde::Serialize;

use crate::error::AppResult;
use crate::pipeline::filter::Page;

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum OutputMode {
    Text,
    Json,
}

#[derive(Debug, Clone, Copy)]
pub struct Output {
    mode: OutputMode,
}

impl Output {
    pub fn new(json: bool) -> Self {
        let mode = if json {
            OutputMode::Json
        } else {
            OutputMode::Text
        };
        Self { mode }
    }

    pub fn mode(&self) -> OutputMode {
        self.mode
    }

    pub fn emit_page(&self, page: &Page<'_>, loading: bool) -> AppResult<()> {
        match self.mode {
            OutputMode::Text => text::print_lines(&listing::render_page(page, loading)),
            OutputMode::Json => json::print(&PageEnvelope { loading, page }),
        }
    }
}

#[derive(Serialize)]
struct PageEnvelope<'p, 'a> {
    loading: bool,
    #[serde(flatten)]
    page: &'p Page<'a>,
}
