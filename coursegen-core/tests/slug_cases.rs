use coursegen_core::slug::{repo_slug, MAX_SLUG_LEN};
use rstest::rstest;

#[rstest]
#[case("Lab 3: Sorting", "lab-3-sorting")]
#[case("HW 1!", "hw-1")]
#[case("HW 1?", "hw-1")]
#[case("Final_Project", "final-project")]
#[case("Week 10 -- Dynamic Programming", "week-10-dynamic-programming")]
#[case("already-a-slug", "already-a-slug")]
#[case("CAPS AND 123", "caps-and-123")]
fn slug_expected(#[case] name: &str, #[case] expected: &str) {
    assert_eq!(repo_slug(name).as_deref(), Some(expected));
}

#[rstest]
#[case("")]
#[case("!!!")]
#[case("¿¡§")]
fn slug_rejects_symbolic_names(#[case] name: &str) {
    assert_eq!(repo_slug(name), None);
}

#[test]
fn slug_is_always_bounded() {
    let name = "word ".repeat(200);
    let slug = repo_slug(&name).expect("alphanumeric input");
    assert!(slug.len() <= MAX_SLUG_LEN);
}
