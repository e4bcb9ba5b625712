use super::*;

#[test]
fn test_parse_single_index() {
    let set = parse("3", 10).unwrap();

    assert_eq!(set.indices(), &[3]);
}

#[test]
fn test_parse_comma_list() {
    let set = parse("1,3,7", 10).unwrap();

    assert_eq!(set.indices(), &[1, 3, 7]);
}

#[test]
fn test_parse_list_and_range() {
    let set = parse("1,3,5-8", 10).unwrap();

    assert_eq!(set.indices(), &[1, 3, 5, 6, 7, 8]);
}

#[test]
fn test_parse_ignores_whitespace_around_tokens_and_hyphens() {
    let set = parse("  1 , 3 , 5 - 8 ", 10).unwrap();

    assert_eq!(set.indices(), &[1, 3, 5, 6, 7, 8]);
}

#[test]
fn test_parse_single_element_range() {
    // A == B is equivalent to the single index A.
    let set = parse("4-4", 10).unwrap();

    assert_eq!(set.indices(), &[4]);
}

#[test]
fn test_parse_deduplicates_overlapping_tokens() {
    let set = parse("1-3,2-4,3", 10).unwrap();

    assert_eq!(set.indices(), &[1, 2, 3, 4]);
}

#[test]
fn test_parse_result_is_ascending_regardless_of_input_order() {
    let set = parse("9,1,5-6,2", 10).unwrap();

    assert_eq!(set.indices(), &[1, 2, 5, 6, 9]);
}

#[test]
fn test_parse_empty_expression() {
    assert_eq!(parse("", 10), Err(SelectionError::Empty));
}

#[test]
fn test_parse_whitespace_only_expression() {
    assert_eq!(parse("   ", 10), Err(SelectionError::Empty));
}

#[test]
fn test_parse_empty_token_between_commas() {
    let result = parse("1,,2", 10);

    assert_eq!(
        result,
        Err(SelectionError::Malformed {
            token: String::new()
        })
    );
}

#[test]
fn test_parse_trailing_comma() {
    let result = parse("1,2,", 10);

    assert_eq!(
        result,
        Err(SelectionError::Malformed {
            token: String::new()
        })
    );
}

#[test]
fn test_parse_non_numeric_token() {
    let result = parse("1,two,3", 10);

    assert_eq!(
        result,
        Err(SelectionError::Malformed {
            token: "two".to_string()
        })
    );
}

#[test]
fn test_parse_token_with_two_hyphens() {
    let result = parse("1-2-3", 10);

    assert_eq!(
        result,
        Err(SelectionError::Malformed {
            token: "1-2-3".to_string()
        })
    );
}

#[test]
fn test_parse_range_with_missing_endpoint() {
    assert_eq!(
        parse("5-", 10),
        Err(SelectionError::Malformed {
            token: "5-".to_string()
        })
    );
    assert_eq!(
        parse("-5", 10),
        Err(SelectionError::Malformed {
            token: "-5".to_string()
        })
    );
}

#[test]
fn test_parse_descending_range_names_token() {
    let result = parse("5-3", 10);

    assert_eq!(
        result,
        Err(SelectionError::InvalidRange {
            token: "5-3".to_string()
        })
    );
}

#[test]
fn test_parse_index_above_bound() {
    let result = parse("11", 10);

    assert_eq!(
        result,
        Err(SelectionError::OutOfRange {
            index: 11,
            bound: 10
        })
    );
}

#[test]
fn test_parse_index_zero() {
    let result = parse("0", 10);

    assert_eq!(
        result,
        Err(SelectionError::OutOfRange {
            index: 0,
            bound: 10
        })
    );
}

#[test]
fn test_parse_range_endpoint_above_bound_rejects_whole_expression() {
    // Out-of-range anywhere rejects everything; no partial selection.
    let result = parse("1,5-12", 10);

    assert_eq!(
        result,
        Err(SelectionError::OutOfRange {
            index: 12,
            bound: 10
        })
    );
}

#[test]
fn test_parse_is_pure() {
    let first = parse("2,4-6", 10).unwrap();
    let second = parse("2,4-6", 10).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_parse_result_is_subset_of_valid_range() {
    let set = parse("1-10", 10).unwrap();

    assert_eq!(set.len(), 10);
    assert!(set.iter().all(|index| (1..=10).contains(&index)));
}
