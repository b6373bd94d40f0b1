use std::io::{self, Write};

use serde::Serialize;

use crate::error::AppResult;

pub fn print<T: Serialize>(value: &T) -> AppResult<()> {
    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, value)?;
    writeln!(stdout)?;
    stdout.flush()?;
    Ok(())
}
