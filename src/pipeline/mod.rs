pub mod feed;
pub mod filter;
pub mod normalize;
pub mod state;

pub use feed::{EmailSource, Feed};
pub use filter::{CategoryFilter, FilterState, Page, PriorityFilter};
pub use state::{MailboxState, MailboxView, Phase, RetrievalTicket};
