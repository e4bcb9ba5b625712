use super::*;

#[test]
fn test_exact_keyword_confirms() {
    assert!(confirms_deletion("DELETE"));
}

#[test]
fn test_surrounding_whitespace_is_trimmed() {
    assert!(confirms_deletion(" DELETE "));
    assert!(confirms_deletion("DELETE\n"));
}

#[test]
fn test_case_variants_do_not_confirm() {
    assert!(!confirms_deletion("delete"));
    assert!(!confirms_deletion("Delete"));
    assert!(!confirms_deletion("dElEtE"));
}

#[test]
fn test_extra_characters_do_not_confirm() {
    assert!(!confirms_deletion("DELETE!"));
    assert!(!confirms_deletion("DELETE DELETE"));
}

#[test]
fn test_empty_input_does_not_confirm() {
    assert!(!confirms_deletion(""));
    assert!(!confirms_deletion("   "));
}
