pub mod complete;
pub mod list;
pub mod loader;
pub mod matching;
pub mod split;

#[cfg(test)]
mod complete_tests;

use loader::CliError;

/// Print a command's output, or report its error and exit with status 1.
pub fn finish(result: Result<String, CliError>) {
    match result {
        Ok(output) => print!("{output}"),
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    }
}

/// Offset of the cursor in `text`: `cursor` clamped to the text, or its end.
pub fn resolve_cursor(text: &str, cursor: Option<usize>) -> usize {
    let len = text.chars().count();
    cursor.map_or(len, |offset| offset.min(len))
}

/// 1-based line and column of the char `offset` in `text`.
pub fn line_column(text: &str, offset: usize) -> (usize, usize) {
    text.chars()
        .take(offset)
        .fold((1, 1), |(line, column), ch| match ch {
            '\n' => (line + 1, 1),
            _ => (line, column + 1),
        })
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String, CliError> {
    let mut json = serde_json::to_string_pretty(value)?;
    json.push('\n');
    Ok(json)
}
