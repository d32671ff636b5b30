use super::*;

#[test]
fn test_parse_single_quoted_list() {
    assert_eq!(
        parse_genres(Some("['Drama', 'Romance']")),
        vec!["Drama", "Romance"]
    );
}

#[test]
fn test_parse_double_quoted_list() {
    assert_eq!(
        parse_genres(Some(r#"["action", "scifi"]"#)),
        vec!["action", "scifi"]
    );
}

#[test]
fn test_parse_keeps_order_and_trims() {
    assert_eq!(
        parse_genres(Some("[ ' thriller', 'crime ' ,'drama'  ]")),
        vec!["thriller", "crime", "drama"]
    );
}

#[test]
fn test_parse_empty_list() {
    assert!(parse_genres(Some("[]")).is_empty());
    assert!(parse_genres(Some("  [  ]  ")).is_empty());
}

#[test]
fn test_parse_trailing_comma() {
    assert_eq!(parse_genres(Some("['comedy',]")), vec!["comedy"]);
}

#[test]
fn test_parse_escapes() {
    assert_eq!(
        parse_genres(Some(r"['rock \'n\' roll', 'a\\b']")),
        vec!["rock 'n' roll", r"a\b"]
    );
}

#[test]
fn test_parse_keeps_empty_element() {
    assert_eq!(parse_genres(Some("['', 'drama']")), vec!["", "drama"]);
}

#[test]
fn test_absent_is_empty() {
    assert!(parse_genres(None).is_empty());
}

#[test]
fn test_empty_string_is_empty() {
    assert!(parse_genres(Some("")).is_empty());
}

#[test]
fn test_not_a_list_is_empty() {
    assert!(parse_genres(Some("not a list")).is_empty());
    assert!(parse_genres(Some("drama")).is_empty());
}

#[test]
fn test_number_is_empty() {
    assert!(parse_genres(Some("42")).is_empty());
    assert!(parse_genres(Some("[1, 2]")).is_empty());
    assert!(parse_genres(Some("['drama', 3]")).is_empty());
}

#[test]
fn test_mapping_is_empty() {
    assert!(parse_genres(Some("{'genre': 'drama'}")).is_empty());
}

#[test]
fn test_tuple_is_empty() {
    assert!(parse_genres(Some("('drama', 'romance')")).is_empty());
}

#[test]
fn test_malformed_lists_are_empty() {
    assert!(parse_genres(Some("['drama'")).is_empty());
    assert!(parse_genres(Some("['drama")).is_empty());
    assert!(parse_genres(Some("['drama' 'romance']")).is_empty());
    assert!(parse_genres(Some("[,]")).is_empty());
    assert!(parse_genres(Some("['drama'] extra")).is_empty());
    assert!(parse_genres(Some("['drama',,'romance']")).is_empty());
    assert!(parse_genres(Some("['mixed\"]")).is_empty());
}

#[test]
fn test_nested_list_is_empty() {
    assert!(parse_genres(Some("[['drama']]")).is_empty());
}

#[test]
fn test_parse_numeric_escapes() {
    assert_eq!(
        parse_genres(Some(r"['\x41ction', 'caf\u00e9', '\U0001F3AC', '\101']")),
        vec!["Action", "café", "🎬", "A"]
    );
}

#[test]
fn test_parse_control_escapes() {
    assert_eq!(parse_genres(Some(r"['a\tb', '\v drama']")), vec!["a\tb", "drama"]);
}

#[test]
fn test_parse_unknown_escape_kept() {
    assert_eq!(parse_genres(Some(r"['sci\-fi']")), vec![r"sci\-fi"]);
}

#[test]
fn test_parse_string_prefixes() {
    assert_eq!(
        parse_genres(Some(r#"[u'drama', U"crime", r'a\nb', R'it\'s']"#)),
        vec!["drama", "crime", r"a\nb", r"it\'s"]
    );
}

#[test]
fn test_bad_numeric_escape_is_empty() {
    assert!(parse_genres(Some(r"['\x4']")).is_empty());
    assert!(parse_genres(Some(r"['\u00g9']")).is_empty());
    assert!(parse_genres(Some(r"['\ud800']")).is_empty());
    assert!(parse_genres(Some(r"['\U00110000']")).is_empty());
}

#[test]
fn test_bad_prefix_is_empty() {
    assert!(parse_genres(Some("[b'drama']")).is_empty());
    assert!(parse_genres(Some("[u drama]")).is_empty());
}
