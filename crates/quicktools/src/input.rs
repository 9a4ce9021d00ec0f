use crate::prelude::*;
use std::io::Read;

/// Resolve a text argument; `-` reads all of stdin
pub fn read_text(value: &str) -> Result<String> {
    if value != "-" {
        return Ok(value.to_string());
    }

    let mut buffer = String::new();
    std::io::stdin()
        .read_to_string(&mut buffer)
        .context("Failed to read from stdin")?;

    Ok(buffer)
}

/// Like [`read_text`], minus the trailing newline a pipe usually adds
pub fn read_line(value: &str) -> Result<String> {
    let text = read_text(value)?;
    Ok(text
        .strip_suffix('\n')
        .map(|rest| rest.strip_suffix('\r').unwrap_or(rest))
        .unwrap_or(text.as_str())
        .to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_text_passes_through_literal_values() {
        assert_eq!(read_text("hello").unwrap(), "hello");
        assert_eq!(read_line("two words").unwrap(), "two words");
    }
}
