use super::*;

#[test]
fn test_split_queries_skips_commented_statements() {
    let script = r#"
        -- This is a comment
        SELECT * FROM table1; -- Query 1
        SELECT * FROM table2; -- Query 2
        -- SELECT * FROM table3; -- Query 3 (commented out)
        SELECT * FROM table4; -- Query 4
    "#;

    assert_eq!(
        split_queries(script),
        vec![
            "SELECT * FROM table1;",
            "SELECT * FROM table2;",
            "SELECT * FROM table4;"
        ]
    );
}

#[test]
fn test_split_queries_keeps_markers_inside_literals() {
    let script = r#"
        BEGIN;
        SELECT test_column:'//not_should_be_removed', test_column_2 // should be removed
        FROM my_table;
        COMMIT;
    "#;

    assert_eq!(
        split_queries(script),
        vec![
            "BEGIN;",
            "SELECT test_column:'//not_should_be_removed', test_column_2 FROM my_table;",
            "COMMIT;"
        ]
    );
}

#[test]
fn test_split_queries_empty_input() {
    assert!(split_queries("").is_empty());
}

#[test]
fn test_split_queries_only_comments_and_whitespace() {
    let script = "-- one\n   // two\n\n\t-- three;\n";
    assert!(split_queries(script).is_empty());
}

#[test]
fn test_split_queries_single_clean_statement_unchanged() {
    assert_eq!(
        split_queries("SELECT id FROM users;"),
        vec!["SELECT id FROM users;"]
    );
}

#[test]
fn test_split_queries_trims_surrounding_whitespace() {
    assert_eq!(
        split_queries("   \n  SELECT 1  ;  \n"),
        vec!["SELECT 1;"]
    );
}

#[test]
fn test_split_queries_drops_unterminated_tail() {
    assert_eq!(
        split_queries("SELECT 1; SELECT 2"),
        vec!["SELECT 1;"]
    );
    assert!(split_queries("SELECT 1").is_empty());
}

#[test]
fn test_split_queries_discards_isolated_semicolons() {
    assert_eq!(
        split_queries(";;SELECT 1;; -- nothing\n;"),
        vec!["SELECT 1;"]
    );
}

#[test]
fn test_split_queries_collapses_whitespace_outside_literals() {
    let script = "SELECT\n\t a,\n   b\r\nFROM    t;";
    assert_eq!(split_queries(script), vec!["SELECT a, b FROM t;"]);
}

#[test]
fn test_split_queries_preserves_whitespace_inside_literals() {
    let script = "SELECT '  two   spaces\n  and newline' FROM t;";
    assert_eq!(
        split_queries(script),
        vec!["SELECT '  two   spaces\n  and newline' FROM t;"]
    );
}

#[test]
fn test_split_queries_semicolon_inside_literal() {
    let script = "INSERT INTO t VALUES ('a;b'); SELECT 2;";
    assert_eq!(
        split_queries(script),
        vec!["INSERT INTO t VALUES ('a;b');", "SELECT 2;"]
    );
}

#[test]
fn test_split_queries_double_quoted_identifier_with_markers() {
    let script = r#"SELECT "weird--name", "path//col" FROM t; -- trailing"#;
    assert_eq!(
        split_queries(script),
        vec![r#"SELECT "weird--name", "path//col" FROM t;"#]
    );
}

#[test]
fn test_split_queries_other_quote_kind_inside_literal() {
    // A double quote inside a single-quoted literal does not close it.
    let script = r#"SELECT 'say "hi" -- not a comment' AS msg;"#;
    assert_eq!(
        split_queries(script),
        vec![r#"SELECT 'say "hi" -- not a comment' AS msg;"#]
    );
}

#[test]
fn test_split_queries_doubled_quote_escape() {
    let script = "SELECT 'it''s -- fine' AS x; SELECT 2;";
    assert_eq!(
        split_queries(script),
        vec!["SELECT 'it''s -- fine' AS x;", "SELECT 2;"]
    );
}

#[test]
fn test_split_queries_backslash_escaped_quote() {
    let script = r"SELECT 'it\'s // fine' AS x; SELECT 2;";
    assert_eq!(
        split_queries(script),
        vec![r"SELECT 'it\'s // fine' AS x;", "SELECT 2;"]
    );
}

#[test]
fn test_split_queries_backslash_in_double_quoted_identifier() {
    let script = r#"SELECT "dir\" FROM t; SELECT 2;"#;
    assert_eq!(
        split_queries(script),
        vec![r#"SELECT "dir\" FROM t;"#, "SELECT 2;"]
    );
}

#[test]
fn test_split_queries_comment_hides_semicolon() {
    let script = "SELECT 1 -- ; not a terminator\n+ 1;";
    assert_eq!(split_queries(script), vec!["SELECT 1 + 1;"]);
}

#[test]
fn test_split_queries_single_dash_and_slash_are_operators() {
    let script = "SELECT a - b, c / d FROM t;";
    assert_eq!(split_queries(script), vec!["SELECT a - b, c / d FROM t;"]);
}

#[test]
fn test_split_queries_first_marker_wins() {
    let script = "SELECT 1 //-- both\n;";
    assert_eq!(split_queries(script), vec!["SELECT 1;"]);
}

#[test]
fn test_split_queries_comment_at_end_without_newline() {
    assert_eq!(
        split_queries("SELECT 1; -- end"),
        vec!["SELECT 1;"]
    );
}

#[test]
fn test_split_queries_unbalanced_quote_is_best_effort() {
    // The open literal swallows the rest of the script.
    assert_eq!(
        split_queries("SELECT 1; SELECT 'oops; SELECT 3;"),
        vec!["SELECT 1;"]
    );
}

#[test]
fn test_split_queries_never_emits_unquoted_comment_markers() {
    let script = "A -- x\n; B // y\n; 'C--' ; \"D//\";";
    for stmt in split_queries(script) {
        assert!(stmt.ends_with(';'));
        assert!(!stmt.ends_with(";;"));
        let unquoted: String = stmt
            .split(['\'', '"'])
            .step_by(2)
            .collect::<Vec<_>>()
            .join("");
        assert!(!unquoted.contains("--"), "{stmt}");
        assert!(!unquoted.contains("//"), "{stmt}");
    }
}

#[test]
fn test_split_queries_preserves_order() {
    let script = "CREATE TABLE t (id INT);\nINSERT INTO t VALUES (1);\nSELECT * FROM t;";
    assert_eq!(
        split_queries(script),
        vec![
            "CREATE TABLE t (id INT);",
            "INSERT INTO t VALUES (1);",
            "SELECT * FROM t;"
        ]
    );
}

#[test]
fn test_quote_ident_simple() {
    assert_eq!(quote_ident("users"), r#""users""#);
}

#[test]
fn test_quote_ident_with_embedded_quotes() {
    assert_eq!(quote_ident(r#"my"table"#), r#""my""table""#);
}

#[test]
fn test_quote_qualified_three_parts() {
    assert_eq!(
        quote_qualified("catalog.schema.table"),
        r#""catalog"."schema"."table""#
    );
}

#[test]
fn test_escape_sql_string() {
    assert_eq!(escape_sql_string("hello"), "hello");
    assert_eq!(escape_sql_string("O'Brien's"), "O''Brien''s");
}

#[test]
fn test_sql_literal() {
    use serde_json::json;

    assert_eq!(sql_literal(&json!(null)), "NULL");
    assert_eq!(sql_literal(&json!(true)), "TRUE");
    assert_eq!(sql_literal(&json!(false)), "FALSE");
    assert_eq!(sql_literal(&json!(42)), "42");
    assert_eq!(sql_literal(&json!(1.5)), "1.5");
    assert_eq!(sql_literal(&json!("it's")), "'it''s'");
    assert_eq!(sql_literal(&json!({"a": 1})), r#"'{"a":1}'"#);
}
