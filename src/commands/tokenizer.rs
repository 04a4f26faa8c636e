//! Command string tokenizer.
//!
//! Grammar:
//!
//! - an unquoted space separates arguments (runs of spaces collapse)
//! - an unquoted `;` ends a statement
//! - `'` toggles a quoted region; the quotes are stripped from the token
//! - `\` makes the next character literal and is itself dropped
//!
//! An unterminated quote is not an error: the rest of the input is literal.

pub const ARGUMENT_SEPARATOR: char = ' ';
pub const STATEMENT_SEPARATOR: char = ';';
pub const QUOTE: char = '\'';
pub const ESCAPE: char = '\\';

/// One command: the name followed by its positional arguments. Never empty.
pub type ParsedCommand = Vec<String>;

/// Split a raw command string into a chain of commands.
pub fn tokenize(input: &str) -> Vec<ParsedCommand> {
    let mut commands = Vec::new();
    let mut current_command: ParsedCommand = Vec::new();
    let mut current = String::new();
    // A quoted token may be empty (`''`), so emptiness of `current` alone
    // can't decide whether there is a token to flush.
    let mut pending = false;
    let mut in_quotes = false;
    let mut escape_next = false;

    for c in input.chars() {
        if escape_next {
            current.push(c);
            pending = true;
            escape_next = false;
        } else if c == ESCAPE {
            escape_next = true;
        } else if c == QUOTE {
            in_quotes = !in_quotes;
            pending = true;
        } else if c == STATEMENT_SEPARATOR && !in_quotes {
            flush_token(&mut current, &mut pending, &mut current_command);
            if !current_command.is_empty() {
                commands.push(std::mem::take(&mut current_command));
            }
        } else if c == ARGUMENT_SEPARATOR && !in_quotes {
            flush_token(&mut current, &mut pending, &mut current_command);
        } else {
            current.push(c);
            pending = true;
        }
    }

    flush_token(&mut current, &mut pending, &mut current_command);
    if !current_command.is_empty() {
        commands.push(current_command);
    }

    commands
}

fn flush_token(current: &mut String, pending: &mut bool, command: &mut ParsedCommand) {
    if *pending {
        command.push(std::mem::take(current));
        *pending = false;
    }
}

/// Split a compound string into raw statements on unquoted, unescaped `;`.
///
/// Quote and escape characters are tracked the same way [`tokenize`] tracks
/// them but are left in place, so each segment can be fed back to
/// [`tokenize`] unchanged. Only unquoted, unescaped spaces are trimmed from
/// the ends of a segment; empty segments are kept.
pub fn split_statements(input: &str) -> Vec<&str> {
    let mut statements = Vec::new();
    let mut start = 0;
    // End of the last character that is not a bare argument separator.
    let mut end = 0;
    let mut in_quotes = false;
    let mut escape_next = false;

    for (i, c) in input.char_indices() {
        let next = i + c.len_utf8();
        if escape_next {
            escape_next = false;
            end = next;
        } else if c == ESCAPE {
            escape_next = true;
            end = next;
        } else if c == QUOTE {
            in_quotes = !in_quotes;
            end = next;
        } else if c == STATEMENT_SEPARATOR && !in_quotes {
            statements.push(segment(input, start, end));
            start = next;
            end = next;
        } else if c != ARGUMENT_SEPARATOR || in_quotes {
            end = next;
        }
    }
    statements.push(segment(input, start, end));

    statements
}

fn segment(input: &str, start: usize, end: usize) -> &str {
    input[start..end.max(start)].trim_start_matches(ARGUMENT_SEPARATOR)
}
