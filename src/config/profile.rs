use crate::error::{AppError, AppResult};

pub const DEFAULT_PROFILE: &str = "default";

pub fn resolve_profile(requested: &str) -> AppResult<String> {
    let trimmed = requested.trim();
    if trimmed.is_empty() {
        return Ok(DEFAULT_PROFILE.to_string());
    }

    if trimmed.contains(['/', '\\']) || trimmed == "." || trimmed == ".." {
        return Err(AppError::InvalidInput(format!(
            "invalid profile name `{trimmed}`"
        )));
    }

    Ok(trimmed.to_string())
}
