use chrono::{Duration, Utc};
use coursegen_canvas::{FakeLearningApi, LmsError};
use coursegen_core::{
    AssignmentDescriptor, AssignmentId, CancelToken, CourseId, Language, PublishPhase,
};
use coursegen_github::{FakeRepoHost, FileCommitError, PublishOptions};
use coursegen_pipeline::{Pipeline, PipelineError};

fn fast_options() -> PublishOptions {
    PublishOptions {
        retry_base_delay: std::time::Duration::from_millis(1),
        ..PublishOptions::default()
    }
}

fn lab_3_sorting() -> AssignmentDescriptor {
    AssignmentDescriptor {
        course_id: CourseId(12345),
        assignment_id: AssignmentId(67890),
        name: "Lab 3: Sorting".to_string(),
        description: "<p>Implement three sorting algorithms.</p>".to_string(),
        due_at: Some(Utc::now() + Duration::days(5)),
    }
}

fn course_with_lab() -> FakeLearningApi {
    FakeLearningApi::new()
        .with_course(12345, "Algorithms")
        .with_assignment(lab_3_sorting())
}

#[test]
fn full_run_publishes_the_python_scaffold() {
    let assignment = lab_3_sorting();
    let due = assignment.due_at.unwrap().format("%Y-%m-%d").to_string();
    let lms = FakeLearningApi::new()
        .with_course(12345, "Algorithms")
        .with_assignment(assignment);
    let host = FakeRepoHost::new();
    let pipeline = Pipeline::with_publish_options(&lms, &host, fast_options());

    let result = pipeline
        .run(CourseId(12345), None, Language::Python, &CancelToken::new())
        .expect("pipeline");

    assert_eq!(result.phase, PublishPhase::Done);
    assert_eq!(result.repo_url, "https://github.com/octocat/lab-3-sorting");
    assert_eq!(result.committed_paths.len(), 5);
    for path in [
        "README.md",
        "requirements.txt",
        "main.py",
        "tests/test_main.py",
        ".gitignore",
    ] {
        assert!(result.committed_paths.contains(path), "missing {path}");
    }

    let readme = host.committed_content("README.md").expect("README.md");
    assert!(readme.contains("Lab 3: Sorting"));
    assert!(readme.contains(&due));
    assert!(readme.contains("Implement three sorting algorithms."));
}

#[test]
fn rerun_creates_a_second_suffixed_repository() {
    let lms = course_with_lab();
    let host = FakeRepoHost::new();
    let pipeline = Pipeline::with_publish_options(&lms, &host, fast_options());
    let cancel = CancelToken::new();

    let first = pipeline
        .run(CourseId(12345), None, Language::Python, &cancel)
        .expect("first run");
    let second = pipeline
        .run(CourseId(12345), None, Language::Python, &cancel)
        .expect("second run");

    assert_eq!(first.repo_url, "https://github.com/octocat/lab-3-sorting");
    assert_eq!(second.repo_url, "https://github.com/octocat/lab-3-sorting-2");
}

#[test]
fn resolution_failure_short_circuits_before_anything_remote() {
    let lms = FakeLearningApi::new().with_course(12345, "Algorithms");
    let host = FakeRepoHost::new();
    let pipeline = Pipeline::with_publish_options(&lms, &host, fast_options());

    let err = pipeline
        .run(CourseId(12345), None, Language::Python, &CancelToken::new())
        .expect_err("nothing upcoming");
    assert!(matches!(
        err,
        PipelineError::Resolve(LmsError::NoUpcomingAssignment(CourseId(12345)))
    ));
    assert!(host.claimed_names().is_empty(), "no repository may exist");
}

#[test]
fn upstream_outage_propagates_unchanged() {
    let lms = course_with_lab().with_upstream_down();
    let host = FakeRepoHost::new();
    let pipeline = Pipeline::with_publish_options(&lms, &host, fast_options());

    let err = pipeline
        .run(CourseId(12345), None, Language::Python, &CancelToken::new())
        .expect_err("upstream down");
    assert!(matches!(err, PipelineError::Resolve(LmsError::Upstream(_))));
}

#[test]
fn unrenderable_name_fails_before_publishing() {
    let mut assignment = lab_3_sorting();
    assignment.name = "##".to_string();
    let lms = FakeLearningApi::new()
        .with_course(12345, "Algorithms")
        .with_assignment(assignment);
    let host = FakeRepoHost::new();
    let pipeline = Pipeline::with_publish_options(&lms, &host, fast_options());

    let err = pipeline
        .run(CourseId(12345), None, Language::Python, &CancelToken::new())
        .expect_err("invalid name");
    assert!(matches!(err, PipelineError::Render(_)));
    assert!(host.claimed_names().is_empty());
}

#[test]
fn partial_publish_is_a_qualified_success() {
    let lms = course_with_lab();
    let host = FakeRepoHost::new().with_file_failures(
        "main.py",
        vec![FileCommitError::Permanent("HTTP 401".to_string())],
    );
    let pipeline = Pipeline::with_publish_options(&lms, &host, fast_options());

    let result = pipeline
        .run(CourseId(12345), None, Language::Python, &CancelToken::new())
        .expect("partial is not an error");
    assert_eq!(result.phase, PublishPhase::Partial);
    assert_eq!(result.failed_paths.len(), 1);
    assert!(result.failed_paths.contains_key("main.py"));
    assert_eq!(result.committed_paths.len(), 4);
}

#[test]
fn explicit_assignment_id_bypasses_selection() {
    let later = AssignmentDescriptor {
        assignment_id: AssignmentId(99999),
        name: "Lab 4: Graphs".to_string(),
        due_at: Some(Utc::now() + Duration::days(30)),
        ..lab_3_sorting()
    };
    let lms = course_with_lab().with_assignment(later);
    let host = FakeRepoHost::new();
    let pipeline = Pipeline::with_publish_options(&lms, &host, fast_options());

    let result = pipeline
        .run(
            CourseId(12345),
            Some(AssignmentId(99999)),
            Language::Java,
            &CancelToken::new(),
        )
        .expect("pipeline");
    assert_eq!(result.repo_url, "https://github.com/octocat/lab-4-graphs");
    assert_eq!(result.committed_paths.len(), 4);
}

#[test]
fn colliding_slugs_from_distinct_assignments_disambiguate() {
    // "HW 1!" and "HW 1?" both slug to hw-1; the second publish must get
    // a suffixed repository instead of silently colliding.
    let first = AssignmentDescriptor {
        assignment_id: AssignmentId(1),
        name: "HW 1!".to_string(),
        ..lab_3_sorting()
    };
    let second = AssignmentDescriptor {
        assignment_id: AssignmentId(2),
        name: "HW 1?".to_string(),
        ..lab_3_sorting()
    };
    let lms = FakeLearningApi::new()
        .with_course(12345, "Algorithms")
        .with_assignment(first)
        .with_assignment(second);
    let host = FakeRepoHost::new();
    let pipeline = Pipeline::with_publish_options(&lms, &host, fast_options());
    let cancel = CancelToken::new();

    let a = pipeline
        .run(CourseId(12345), Some(AssignmentId(1)), Language::Cpp, &cancel)
        .expect("first");
    let b = pipeline
        .run(CourseId(12345), Some(AssignmentId(2)), Language::Cpp, &cancel)
        .expect("second");

    assert_eq!(a.repo_url, "https://github.com/octocat/hw-1");
    assert_eq!(b.repo_url, "https://github.com/octocat/hw-1-2");
}

#[test]
fn cancellation_before_the_first_stage_reports_cancelled() {
    let lms = course_with_lab();
    let host = FakeRepoHost::new();
    let pipeline = Pipeline::with_publish_options(&lms, &host, fast_options());

    let cancel = CancelToken::new();
    cancel.cancel();
    let err = pipeline
        .run(CourseId(12345), None, Language::Python, &cancel)
        .expect_err("cancelled");
    assert!(matches!(err, PipelineError::Cancelled));
    assert!(host.claimed_names().is_empty());
}
