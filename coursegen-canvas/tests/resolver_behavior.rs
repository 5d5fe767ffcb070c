use chrono::{DateTime, TimeZone, Utc};
use coursegen_canvas::{AssignmentResolver, FakeLearningApi, LmsError};
use coursegen_core::{AssignmentDescriptor, AssignmentId, CourseId};

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 8, 6, 12, 0, 0).unwrap()
}

fn assignment(course: u64, id: u64, name: &str, due_at: Option<&str>) -> AssignmentDescriptor {
    AssignmentDescriptor {
        course_id: CourseId(course),
        assignment_id: AssignmentId(id),
        name: name.to_string(),
        description: String::new(),
        due_at: due_at.map(|s| s.parse().expect("rfc3339")),
    }
}

#[test]
fn explicit_id_fetches_that_assignment() {
    let api = FakeLearningApi::new()
        .with_course(12345, "Algorithms")
        .with_assignment(assignment(12345, 1, "HW 1", Some("2026-08-10T00:00:00Z")))
        .with_assignment(assignment(12345, 2, "HW 2", Some("2026-08-08T00:00:00Z")));
    let resolver = AssignmentResolver::new(&api);

    let resolved = resolver
        .resolve_at(CourseId(12345), Some(AssignmentId(1)), now())
        .expect("resolve");
    assert_eq!(resolved.name, "HW 1");
}

#[test]
fn omitted_id_selects_earliest_upcoming() {
    let api = FakeLearningApi::new()
        .with_course(12345, "Algorithms")
        .with_assignment(assignment(12345, 1, "Past", Some("2026-08-01T00:00:00Z")))
        .with_assignment(assignment(12345, 2, "Later", Some("2026-08-20T00:00:00Z")))
        .with_assignment(assignment(12345, 3, "Sooner", Some("2026-08-09T00:00:00Z")))
        .with_assignment(assignment(12345, 4, "Undated", None));
    let resolver = AssignmentResolver::new(&api);

    let resolved = resolver
        .resolve_at(CourseId(12345), None, now())
        .expect("resolve");
    assert_eq!(resolved.name, "Sooner");
}

#[test]
fn equal_due_dates_resolve_to_lowest_id() {
    let api = FakeLearningApi::new()
        .with_course(1, "Systems")
        .with_assignment(assignment(1, 9, "B", Some("2026-08-09T00:00:00Z")))
        .with_assignment(assignment(1, 3, "A", Some("2026-08-09T00:00:00Z")));
    let resolver = AssignmentResolver::new(&api);

    let resolved = resolver.resolve_at(CourseId(1), None, now()).expect("resolve");
    assert_eq!(resolved.assignment_id, AssignmentId(3));
}

#[test]
fn no_upcoming_assignment_is_reported() {
    let api = FakeLearningApi::new()
        .with_course(1, "Systems")
        .with_assignment(assignment(1, 1, "Old", Some("2026-07-01T00:00:00Z")))
        .with_assignment(assignment(1, 2, "Undated", None));
    let resolver = AssignmentResolver::new(&api);

    let err = resolver
        .resolve_at(CourseId(1), None, now())
        .expect_err("nothing upcoming");
    assert_eq!(err, LmsError::NoUpcomingAssignment(CourseId(1)));
}

#[test]
fn unknown_course_is_course_not_found() {
    let api = FakeLearningApi::new().with_course(1, "Systems");
    let resolver = AssignmentResolver::new(&api);

    let err = resolver
        .resolve_at(CourseId(999), None, now())
        .expect_err("unknown course");
    assert_eq!(err, LmsError::CourseNotFound(CourseId(999)));
}

#[test]
fn unknown_assignment_is_assignment_not_found() {
    let api = FakeLearningApi::new().with_course(1, "Systems");
    let resolver = AssignmentResolver::new(&api);

    let err = resolver
        .resolve_at(CourseId(1), Some(AssignmentId(404)), now())
        .expect_err("unknown assignment");
    assert_eq!(
        err,
        LmsError::AssignmentNotFound {
            course_id: CourseId(1),
            assignment_id: AssignmentId(404),
        }
    );
}

#[test]
fn upstream_failure_propagates_unchanged() {
    let api = FakeLearningApi::new()
        .with_course(1, "Systems")
        .with_upstream_down();
    let resolver = AssignmentResolver::new(&api);

    let err = resolver
        .resolve_at(CourseId(1), None, now())
        .expect_err("upstream down");
    assert!(matches!(err, LmsError::Upstream(_)));
}
