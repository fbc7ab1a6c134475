use std::path::PathBuf;

use scorecard_core::submission::{Client, Employee, LearningEntry, Meeting, ProofEntry};
use scorecard_core::{
    load_submission, score_kpi, score_learning, score_relationship, Department, Engine,
    EngineError, Submission, SubmissionError,
};

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn employee(department: Department) -> Employee {
    Employee {
        name: "Asha".to_string(),
        phone: "9876543210".to_string(),
        department: Some(department),
        role: vec!["Executive".to_string()],
    }
}

#[test]
fn web_client_without_scope_scores_eight() {
    let mut client = Client::default();
    client.web.pages_this = 10.0;
    client.web.on_time_this = 100.0;
    client.web.bugs_this = 20.0;

    assert_eq!(score_kpi(&employee(Department::Web), &[client]), 8.0);
}

#[test]
fn seo_traffic_gain_caps_traffic_term() {
    let mut client = Client::default();
    client.seo.traffic_prev = 1000.0;
    client.seo.traffic_this = Some(1200.0);

    assert_eq!(score_kpi(&employee(Department::Seo), &[client]), 2.0);
}

#[test]
fn three_hours_of_learning_scores_five() {
    let entries = vec![
        LearningEntry {
            title: "Workshop".to_string(),
            duration_mins: 120.0,
        },
        LearningEntry {
            title: "Reading".to_string(),
            duration_mins: 60.0,
        },
    ];
    assert_eq!(score_learning(&entries), 5.0);
}

#[test]
fn relationship_with_one_escalation_rounds_half_up() {
    let mut client = Client::default();
    client.relationship.meetings = vec![Meeting::default(), Meeting::default()];
    client.relationship.appreciations = vec![ProofEntry::default()];
    client.relationship.escalations = vec![ProofEntry::default()];
    client.relationship.client_satisfaction = 8.0;

    assert_eq!(score_relationship(&[client]), 3.3);
}

#[test]
fn unknown_department_scores_zero_kpi() {
    let mut client = Client::default();
    client.web.pages_this = 10.0;
    let video = employee(Department::Unrecognized("Video".to_string()));

    assert_eq!(score_kpi(&video, &[client]), 0.0);
}

#[test]
fn leap_year_february_allows_twenty_nine_days() {
    let json = r#"{
        "monthKey": "2024-02",
        "employee": { "name": "Asha", "phone": "9876543210", "department": "HR", "role": ["HR Executive"] },
        "meta": { "attendance": { "wfo": 20, "wfh": 9 } }
    }"#;
    let submission = Submission::from_json(json).expect("decode submission");
    let engine = Engine::default();
    assert!(engine.validate(&submission).ok);

    let mut over = submission.clone();
    over.meta.attendance.wfh = 10.0;
    assert_eq!(
        engine.validate(&over).errors,
        vec!["Attendance total (WFO+WFH) cannot exceed 29 for Feb 2024."]
    );

    let mut common_year = over.clone();
    common_year.month_key = "2023-02".to_string();
    assert_eq!(
        engine.validate(&common_year).errors,
        vec!["Attendance total (WFO+WFH) cannot exceed 28 for Feb 2023."]
    );
}

#[test]
fn external_departments_need_clients() {
    let json = r#"{
        "monthKey": "2024-02",
        "employee": { "name": "Asha", "phone": "9876543210", "department": "Ads", "role": ["Ads Executive"] }
    }"#;
    let submission = Submission::from_json(json).expect("decode submission");
    assert_eq!(
        Engine::default().validate(&submission).errors,
        vec!["Add at least one Client for this department."]
    );
}

#[test]
fn missing_service_scope_is_not_applicable() {
    let json = r#"{
        "clients": [{
            "name": "Acme",
            "services": ["SEO", "AI"],
            "service_scopes": { "AI": { "deliverables": 4 } },
            "seo_keywordsWorked": [{ "keyword": "a" }]
        }]
    }"#;
    let submission = Submission::from_json(json).expect("decode submission");
    let table = scorecard_core::scope::completion_table(&submission.clients);

    assert_eq!(table.len(), 2);
    assert_eq!(table[0].service, "SEO");
    assert_eq!(table[0].completion, None);
    assert_eq!(table[1].service, "AI");
    assert_eq!(table[1].completion, Some(0));
}

#[test]
fn seo_month_over_month_from_files() {
    let evaluation = Engine::default()
        .evaluate_files(
            fixture("seo-2024-03.yaml"),
            Some(fixture("seo-2024-02.json").as_path()),
        )
        .expect("evaluate fixtures");

    assert!(evaluation.validation.ok, "{:?}", evaluation.validation.errors);
    assert_eq!(evaluation.month_key, "2024-03");
    assert_eq!(evaluation.employee, "Ravi Kumar");
    assert_eq!(evaluation.department, Some(Department::Seo));

    assert_eq!(evaluation.scores.kpi_score, 6.4);
    assert_eq!(evaluation.scores.learning_score, 6.7);
    assert_eq!(evaluation.scores.relationship_score, 5.5);
    assert_eq!(evaluation.scores.overall, 5.7);

    assert!(evaluation.flags.missing_learning_hours);
    assert!(!evaluation.flags.has_escalations);
    assert!(!evaluation.flags.missing_reports);

    assert_eq!(evaluation.scope_completion.len(), 1);
    assert_eq!(evaluation.scope_completion[0].completion, Some(50));

    let discipline = evaluation.discipline.expect("submitted_at is set");
    assert_eq!(discipline.late_days, 0);
    assert_eq!(discipline.penalty, 0.0);

    assert!(evaluation
        .summary
        .starts_with("Handled 1 client(s): bright dental."));
    assert!(evaluation.summary.contains("Meetings 2, Appreciations 2, Escalations 0."));
    assert!(evaluation.summary.contains("Learning: 4.0h (Below 6h)."));
    assert!(!evaluation.summary.contains("Manager Score"));
}

#[test]
fn without_previous_month_growth_is_measured_from_zero() {
    let evaluation = Engine::default()
        .evaluate_files(fixture("seo-2024-03.yaml"), None)
        .expect("evaluate fixture");

    // Traffic, LLM referrals and leads all grow from 0 and cap.
    assert_eq!(evaluation.scores.kpi_score, 7.0);
    assert_eq!(evaluation.scores.learning_score, 6.7);
}

#[test]
fn schema_rejects_malformed_sections() {
    let dir = std::env::temp_dir().join(format!("scorecard-schema-{}", std::process::id()));
    std::fs::create_dir_all(&dir).expect("create temp dir");
    let path = dir.join("broken.json");
    std::fs::write(&path, r#"{ "employee": "Asha", "clients": {} }"#).expect("write file");

    let err = load_submission(&path).expect_err("schema violation");
    match err {
        EngineError::Submission(SubmissionError::SchemaError(messages)) => {
            assert!(messages.len() >= 2, "{messages:?}");
        }
        other => panic!("unexpected error: {other}"),
    }

    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn missing_file_is_an_io_error() {
    let err = load_submission(fixture("does-not-exist.json")).expect_err("missing file");
    assert!(matches!(
        err,
        EngineError::Submission(SubmissionError::IoError(_))
    ));
}
