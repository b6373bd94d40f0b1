use crate::cli::{self, ListArgs};
use crate::context::AppContext;
use crate::error::{AppError, AppResult};
use crate::pipeline::Feed;

pub async fn run(ctx: &AppContext, args: ListArgs) -> AppResult<()> {
    validate(&args)?;

    let params = args.retrieval.resolve(ctx.settings.retrieval_params()?)?;
    let mut feed = Feed::new(
        ctx.client.clone(),
        params,
        ctx.settings.page_size(),
        ctx.settings.reveal_step(),
    )?;

    if let Some(priority) = args.priority.as_deref() {
        feed.set_priority(cli::selection(priority))?;
    }
    if let Some(category) = args.category.as_deref() {
        feed.set_category(cli::selection(category));
    }

    feed.refresh().await;

    if let Some(count) = args.count {
        feed.set_visible_count(count)?;
    }
    for _ in 0..args.more {
        feed.reveal_more();
    }

    ctx.output.emit_page(&feed.page(), feed.state().is_loading())
}

fn validate(args: &ListArgs) -> AppResult<()> {
    if args.count == Some(0) {
        return Err(AppError::InvalidInput(
            "--count must be greater than 0".to_string(),
        ));
    }

    Ok(())
}
