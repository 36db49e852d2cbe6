use ausis_batch::domain::{Job, JobOutcome};

fn job() -> Job {
    Job::new("in/talk.wav", "out/talk.txt", None)
}

#[test]
fn given_exists_outcome_when_describing_then_reports_output_and_exists() {
    assert_eq!(JobOutcome::Exists.describe(&job()), "out/talk.txt - exists");
}

#[test]
fn given_done_outcome_when_describing_then_reports_output_and_done() {
    assert_eq!(JobOutcome::Done.describe(&job()), "out/talk.txt - done");
}

#[test]
fn given_failed_outcome_when_describing_then_references_input_and_message() {
    let outcome = JobOutcome::Failed("bad audio".to_string());

    let line = outcome.describe(&job());

    assert!(line.starts_with("    error "));
    assert!(line.contains("in/talk.wav"));
    assert!(line.ends_with("bad audio"));
}

#[test]
fn given_outcomes_when_checking_failure_then_only_failed_is_a_failure() {
    assert!(!JobOutcome::Exists.is_failure());
    assert!(!JobOutcome::Done.is_failure());
    assert!(JobOutcome::Failed(String::new()).is_failure());
}
