//! SQL script splitting and quoting utilities
//!
//! [`split_queries`] turns a multi-statement script into individually
//! executable statements. The quoting helpers build safe dynamic SQL for
//! uploads.

/// Where the scanner currently sits relative to quoted literals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum QuoteState {
    Unquoted,
    Single,
    Double,
}

impl QuoteState {
    fn closing_char(self) -> Option<char> {
        match self {
            QuoteState::Unquoted => None,
            QuoteState::Single => Some('\''),
            QuoteState::Double => Some('"'),
        }
    }
}

/// Accumulates one statement, collapsing whitespace outside literals.
#[derive(Default)]
struct StatementBuffer {
    text: String,
    pending_space: bool,
}

impl StatementBuffer {
    /// Push a character that is not unquoted whitespace.
    fn push(&mut self, c: char) {
        if self.pending_space && !self.text.is_empty() {
            self.text.push(' ');
        }
        self.pending_space = false;
        self.text.push(c);
    }

    /// Push a character verbatim (inside a quoted literal).
    fn push_literal(&mut self, c: char) {
        self.text.push(c);
    }

    fn space(&mut self) {
        self.pending_space = true;
    }

    /// Emit the accumulated statement with its terminator, if non-empty.
    fn finish(&mut self, statements: &mut Vec<String>) {
        let mut stmt = std::mem::take(&mut self.text);
        self.pending_space = false;
        if stmt.is_empty() {
            return;
        }
        stmt.push(';');
        statements.push(stmt);
    }
}

/// Split a SQL script into individually executable statements.
///
/// Line comments (`--` and `//`) are removed unless they sit inside a single-
/// or double-quoted literal. Whitespace outside literals collapses to a single
/// space, every statement ends with exactly one `;`, and statements that are
/// empty once comments are gone are dropped. Trailing text with no closing
/// `;` is not returned.
///
/// Never fails: unbalanced quotes yield a best-effort split.
///
/// # Examples
/// ```
/// use jds_core::sql_utils::split_queries;
/// let script = "BEGIN; -- open\nSELECT 'a--b' FROM t; // done\nCOMMIT;";
/// assert_eq!(
///     split_queries(script),
///     vec!["BEGIN;", "SELECT 'a--b' FROM t;", "COMMIT;"]
/// );
/// ```
pub fn split_queries(script: &str) -> Vec<String> {
    let mut statements = Vec::new();
    let mut buffer = StatementBuffer::default();
    let mut state = QuoteState::Unquoted;
    let mut chars = script.chars().peekable();

    while let Some(c) = chars.next() {
        if let Some(closing) = state.closing_char() {
            buffer.push_literal(c);
            if c == '\\' && state == QuoteState::Single {
                // Backslash escapes the next character in string literals only.
                if let Some(escaped) = chars.next() {
                    buffer.push_literal(escaped);
                }
            } else if c == closing {
                state = QuoteState::Unquoted;
            }
            continue;
        }

        match c {
            '\'' => {
                state = QuoteState::Single;
                buffer.push(c);
            }
            '"' => {
                state = QuoteState::Double;
                buffer.push(c);
            }
            '-' | '/' if chars.peek() == Some(&c) => {
                // Line comment: drop everything up to the newline.
                for skipped in chars.by_ref() {
                    if skipped == '\n' {
                        break;
                    }
                }
                buffer.space();
            }
            ';' => buffer.finish(&mut statements),
            c if c.is_whitespace() => buffer.space(),
            c => buffer.push(c),
        }
    }

    if !buffer.text.is_empty() {
        log::debug!(
            "Dropping unterminated trailing SQL fragment: {}",
            buffer.text
        );
    }

    statements
}

/// Quote a SQL identifier to prevent injection.
///
/// Wraps the identifier in double quotes and escapes any embedded double quotes
/// by doubling them, following the SQL standard.
///
/// # Examples
/// ```
/// use jds_core::sql_utils::quote_ident;
/// assert_eq!(quote_ident("users"), r#""users""#);
/// assert_eq!(quote_ident(r#"my"table"#), r#""my""table""#);
/// ```
pub fn quote_ident(ident: &str) -> String {
    format!("\"{}\"", ident.replace('"', "\"\""))
}

/// Quote a potentially schema-qualified name (e.g. `schema.table`).
///
/// # Examples
/// ```
/// use jds_core::sql_utils::quote_qualified;
/// assert_eq!(quote_qualified("staging.orders"), r#""staging"."orders""#);
/// ```
pub fn quote_qualified(name: &str) -> String {
    name.split('.')
        .map(quote_ident)
        .collect::<Vec<_>>()
        .join(".")
}

/// Escape a SQL string literal value by doubling single quotes.
pub fn escape_sql_string(value: &str) -> String {
    value.replace('\'', "''")
}

/// Render a JSON value as a SQL literal.
///
/// Arrays and objects are stored as their JSON text.
pub fn sql_literal(value: &serde_json::Value) -> String {
    use serde_json::Value;

    match value {
        Value::Null => "NULL".to_string(),
        Value::Bool(true) => "TRUE".to_string(),
        Value::Bool(false) => "FALSE".to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => format!("'{}'", escape_sql_string(s)),
        other => format!("'{}'", escape_sql_string(&other.to_string())),
    }
}

#[cfg(test)]
#[path = "sql_utils_test.rs"]
mod tests;
