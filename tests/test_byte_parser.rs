use penntree::parser::byte_parser::ByteParser;

const DELIMITERS: &[u8] = b"() \t\n\r";

#[test]
fn test_skip_whitespace() {
    let mut parser = ByteParser::for_str(" \r  \t\n \t x y");
    parser.skip_whitespace();
    assert_eq!(parser.peek(), Some(b'x'));

    parser.next_byte(); // skip x
    parser.skip_whitespace();
    assert_eq!(parser.peek(), Some(b'y'));
}

#[test]
fn test_consume_if() {
    let mut parser = ByteParser::for_str("(S)");
    assert!(parser.consume_if(b'('));
    assert!(!parser.consume_if(b'('));
    assert_eq!(parser.peek(), Some(b'S'));
}

#[test]
fn test_parse_token_stops_at_delimiters() {
    let mut parser = ByteParser::for_str("NP-SBJ (rest");
    assert_eq!(parser.parse_token(DELIMITERS), "NP-SBJ");
    assert_eq!(parser.peek(), Some(b' '));

    parser.skip_whitespace();
    assert_eq!(parser.parse_token(DELIMITERS), "");
    assert_eq!(parser.peek(), Some(b'('));
}

#[test]
fn test_parse_token_runs_to_eof() {
    let mut parser = ByteParser::for_str("token");
    assert_eq!(parser.parse_token(DELIMITERS), "token");
    assert!(parser.is_eof());
}

#[test]
fn test_position_tracking() {
    let mut parser = ByteParser::for_str("(S (NP a))");
    assert_eq!(parser.position(), 0);

    parser.next_byte();
    parser.parse_token(DELIMITERS);
    assert_eq!(parser.position(), 2);
}

#[test]
fn test_get_context_as_string() {
    let mut parser = ByteParser::for_str("(S (NP a))");
    parser.next_byte();

    assert_eq!(parser.get_context_as_string(4), "S (N");
    // Context is bounded by remaining input
    assert_eq!(parser.get_context_as_string(100), "S (NP a))");
}

#[test]
fn test_eof() {
    let mut parser = ByteParser::for_str("");
    assert!(parser.is_eof());
    assert_eq!(parser.peek(), None);
    assert_eq!(parser.next_byte(), None);
}
