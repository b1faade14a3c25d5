//! Tests for the tolerant CSV parser

use super::parse_csv;

fn quote(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}

#[test]
fn parses_simple_rows() {
    let rows = parse_csv("name,category\nEthiopia,estate\n");
    assert_eq!(rows, vec![vec!["name", "category"], vec!["Ethiopia", "estate"]]);
}

#[test]
fn quoted_field_with_escaped_quotes_and_newline() {
    let rows = parse_csv("\"hello, \"\"world\"\"\n\",done");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0], vec!["hello, \"world\"", "done"]);
}

#[test]
fn quoted_fields_round_trip() {
    let fields = vec![
        "Kenya, Nyeri".to_string(),
        "line one\nline two".to_string(),
        "say \"juicy\"".to_string(),
        "a,\"b\",\r\nc".to_string(),
        "plain".to_string(),
    ];
    let line = fields.iter().map(|f| quote(f)).collect::<Vec<_>>().join(",");

    let rows = parse_csv(&line);
    assert_eq!(rows, vec![fields]);
}

#[test]
fn skips_comment_rows_anywhere() {
    let text = "# exported from sheet\nname,price\n#hidden,1\nGeisha,300\n# trailing";
    let rows = parse_csv(text);
    assert_eq!(rows, vec![vec!["name", "price"], vec!["Geisha", "300"]]);
}

#[test]
fn skips_rows_with_empty_first_field() {
    let rows = parse_csv("name,price\n,150\nBrazil,150\n  ,200\n");
    assert_eq!(rows, vec![vec!["name", "price"], vec!["Brazil", "150"]]);
}

#[test]
fn ignores_blank_lines_and_crlf() {
    let rows = parse_csv("\r\n\r\nname,roast\r\n\r\nPanama,Light\r\n\n");
    assert_eq!(rows, vec![vec!["name", "roast"], vec!["Panama", "Light"]]);
}

#[test]
fn trims_whitespace_around_fields() {
    let rows = parse_csv("  name , origin \n Colombia ,\" Huila \"\n");
    assert_eq!(rows[1], vec!["Colombia", "Huila"]);
}

#[test]
fn keeps_trailing_empty_fields() {
    let rows = parse_csv("Kenya,,\n");
    assert_eq!(rows, vec![vec!["Kenya", "", ""]]);
}

#[test]
fn unterminated_quote_runs_to_end_of_input() {
    let rows = parse_csv("name,taste\nYirgacheffe,\"jasmine, bergamot\nstill taste");
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[1], vec!["Yirgacheffe", "jasmine, bergamot\nstill taste"]);
}

#[test]
fn flushes_last_row_without_newline() {
    let rows = parse_csv("a,b\nc,d");
    assert_eq!(rows, vec![vec!["a", "b"], vec!["c", "d"]]);
}

#[test]
fn empty_input_yields_no_rows() {
    assert!(parse_csv("").is_empty());
    assert!(parse_csv("\n\r\n   \n").is_empty());
}

#[test]
fn quote_inside_unquoted_field_toggles_quoting() {
    let rows = parse_csv("ab\"c,d\"\nname,\"Kenya\" AA,x");
    assert_eq!(rows, vec![vec!["abc,d"], vec!["name", "Kenya AA", "x"]]);
}
