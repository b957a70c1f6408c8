use super::*;
use std::io::Cursor;

const PROMPT: &str = "How many solutions would you like to see? (0 to exit) ";

fn results(words: &[&str]) -> Vec<String> {
    words.iter().map(|&w| w.to_owned()).collect()
}

fn page_through(words: &[&str], input: &str) -> String {
    let mut pager = Pager::new(results(words));
    let mut out = Vec::new();
    pager.run(&mut Cursor::new(input), &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn test_group_thousands() {
    assert_eq!(group_thousands(0), "0");
    assert_eq!(group_thousands(999), "999");
    assert_eq!(group_thousands(1000), "1,000");
    assert_eq!(group_thousands(1234567), "1,234,567");
    assert_eq!(group_thousands(100000u128), "100,000");
}

#[test]
fn test_summary() {
    assert_eq!(summary(4, 9, &['c', 'a', 't']), "found 4 of 9 for (c,a,t)");
    assert_eq!(summary(0, 0, &[]), "found 0 of 0 for ()");
    assert_eq!(
        summary(1200, 6_060_711_605_323, &['a'; 14]),
        "found 1,200 of 6,060,711,605,323 for (a,a,a,a,a,a,a,a,a,a,a,a,a,a)"
    );
}

#[test]
fn test_sort_results() {
    let found: HashSet<String> = ["a", "tac", "at", "cat", "ta"].iter().map(|&w| w.to_owned()).collect();
    assert_eq!(sort_results(found), results(&["cat", "tac", "at", "ta", "a"]));
}

#[test]
fn test_sort_results_by_chars() {
    // "éé" is four bytes but two characters
    let found: HashSet<String> = ["éé", "abc", "b", "ab"].iter().map(|&w| w.to_owned()).collect();
    assert_eq!(sort_results(found), results(&["abc", "ab", "éé", "b"]));
}

#[test]
fn test_next_page() {
    let mut pager = Pager::new(results(&["cat", "tac", "at", "a"]));
    assert_eq!(pager.next_page(3), &results(&["cat", "tac", "at"])[..]);
    assert_eq!(pager.remaining(), 1);
    assert_eq!(pager.next_page(3), &results(&["a"])[..]);
    assert!(pager.is_done());
    assert!(pager.next_page(3).is_empty());
}

#[test]
fn test_page_cap() {
    let words: Vec<String> = (0..2500).map(|i| i.to_string()).collect();
    let mut pager = Pager::new(words);
    assert_eq!(pager.next_page(usize::MAX).len(), MAX_PAGE);
    assert_eq!(pager.remaining(), 1500);
}

#[test]
fn test_run_until_exhausted() {
    let out = page_through(&["cat", "tac", "at", "a"], "2\n5\n");
    assert_eq!(
        out,
        format!("{PROMPT}{{ cat : tac }}\n{PROMPT}{{ at : a }}\n")
    );
}

#[test]
fn test_run_zero_exits() {
    let out = page_through(&["cat", "tac"], "0\n1\n");
    assert_eq!(out, PROMPT);

    let out = page_through(&["cat", "tac"], "-3\n");
    assert_eq!(out, PROMPT);
}

#[test]
fn test_run_reprompts_on_garbage() {
    let out = page_through(&["cat", "tac"], "lots\n1\n");
    assert_eq!(out, format!("{PROMPT}{PROMPT}{{ cat }}\n{PROMPT}"));
}

#[test]
fn test_run_input_closed() {
    let out = page_through(&["cat"], "");
    assert_eq!(out, PROMPT);
}

#[test]
fn test_run_no_results() {
    assert_eq!(page_through(&[], "1\n"), "");
}
