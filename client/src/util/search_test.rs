use super::*;

#[test]
fn blank_term_drops_query() {
    assert_eq!(build_search_url("/dashboard", ""), "/dashboard");
    assert_eq!(build_search_url("/dashboard", "   "), "/dashboard");
}

#[test]
fn term_is_trimmed() {
    assert_eq!(build_search_url("/dashboard", "  roadmap "), "/dashboard?search=roadmap");
}

#[test]
fn reserved_characters_are_encoded() {
    assert_eq!(build_search_url("/dashboard", "q3 plan & notes"), "/dashboard?search=q3%20plan%20%26%20notes");
    assert_eq!(build_search_url("/dashboard", "a=b?c#d"), "/dashboard?search=a%3Db%3Fc%23d");
}

#[test]
fn unreserved_characters_pass_through() {
    assert_eq!(build_search_url("/dashboard", "v1.2_beta-rc~1"), "/dashboard?search=v1.2_beta-rc~1");
}

#[test]
fn non_ascii_is_utf8_percent_encoded() {
    assert_eq!(build_search_url("/dashboard", "café"), "/dashboard?search=caf%C3%A9");
}
