use serde::Serialize;

use crate::api::models::Email;
use crate::error::{AppError, AppResult};

pub const MATCH_ALL: &str = "すべて";

pub const KNOWN_CATEGORIES: [&str; 5] = ["業務連絡", "宣伝", "プライベート", "重要", "分類失敗"];
pub const PRIORITY_CHOICES: [u8; 5] = [1, 2, 3, 4, 5];
pub const PAGE_SIZE_CHOICES: [usize; 4] = [5, 10, 20, 50];

pub const INITIAL_VISIBLE_COUNT: usize = 10;
pub const REVEAL_STEP: usize = 50;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryFilter {
    #[default]
    Any,
    Exact(String),
}

impl CategoryFilter {
    pub fn parse(input: &str) -> Self {
        if input == MATCH_ALL {
            return Self::Any;
        }

        Self::Exact(input.to_string())
    }

    pub fn matches(&self, email: &Email) -> bool {
        match self {
            Self::Any => true,
            Self::Exact(wanted) => email.category.as_deref() == Some(wanted.as_str()),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PriorityFilter {
    #[default]
    Any,
    Score(f64),
}

impl PriorityFilter {
    pub fn parse(input: &str) -> AppResult<Self> {
        let trimmed = input.trim();
        if trimmed == MATCH_ALL {
            return Ok(Self::Any);
        }

        match trimmed.parse::<f64>() {
            Ok(score) if score.is_finite() => Ok(Self::Score(score)),
            _ => Err(AppError::InvalidInput(format!(
                "priority must be a number or `{MATCH_ALL}`, got `{input}`"
            ))),
        }
    }

    pub fn matches(&self, email: &Email) -> bool {
        match self {
            Self::Any => true,
            Self::Score(wanted) => email.priority_score == Some(*wanted),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilterState {
    category: CategoryFilter,
    priority: PriorityFilter,
    visible_count: usize,
}

impl FilterState {
    pub fn new(visible_count: usize) -> AppResult<Self> {
        let mut state = Self::default();
        state.set_visible_count(visible_count)?;
        Ok(state)
    }

    pub fn category(&self) -> &CategoryFilter {
        &self.category
    }

    pub fn priority(&self) -> PriorityFilter {
        self.priority
    }

    pub fn visible_count(&self) -> usize {
        self.visible_count
    }

    pub fn set_category(&mut self, category: CategoryFilter) {
        self.category = category;
    }

    pub fn set_priority(&mut self, priority: PriorityFilter) {
        self.priority = priority;
    }

    pub fn set_visible_count(&mut self, count: usize) -> AppResult<()> {
        if count == 0 {
            return Err(AppError::InvalidInput(
                "visible count must be greater than 0".to_string(),
            ));
        }

        self.visible_count = count;
        Ok(())
    }

    pub(crate) fn reset_visible_count(&mut self, count: usize) {
        self.visible_count = count.max(1);
    }

    pub fn reveal_more(&mut self, step: usize) {
        self.visible_count = self.visible_count.saturating_add(step);
    }

    pub fn matches(&self, email: &Email) -> bool {
        self.category.matches(email) && self.priority.matches(email)
    }
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            category: CategoryFilter::Any,
            priority: PriorityFilter::Any,
            visible_count: INITIAL_VISIBLE_COUNT,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<'a> {
    pub emails: Vec<&'a Email>,
    pub total: usize,
    pub matched: usize,
    pub visible_count: usize,
    pub has_more: bool,
}

pub fn filtered<'a>(emails: &'a [Email], state: &FilterState) -> Vec<&'a Email> {
    emails.iter().filter(|email| state.matches(email)).collect()
}

pub fn paginate<'a>(emails: &'a [Email], state: &FilterState) -> Page<'a> {
    let mut matched = filtered(emails, state);
    let matched_len = matched.len();
    matched.truncate(state.visible_count);

    Page {
        emails: matched,
        total: emails.len(),
        matched: matched_len,
        visible_count: state.visible_count,
        has_more: matched_len > state.visible_count,
    }
}
