//! Submission documents.
//!
//! A submission is one employee's monthly report. Documents are decoded
//! leniently into a fully-populated [`Submission`], optionally checked
//! against the embedded JSON Schema first, and normalized against the
//! previous month's submission before scoring.

mod model;
mod normalize;
mod parser;
mod schema;

pub use model::{
    AccountsMetrics, AdsMetrics, Attendance, Client, Employee, HrMetrics, KeywordEntry,
    LearningEntry, ManagerReview, Meeting, Meta, OperationsMetrics, ProofEntry, Relationship,
    ReportLink, SalesMetrics, SeoMetrics, ServiceScope, SocialMetrics, Submission, Tasks,
    WebMetrics,
};
pub use normalize::normalize;
pub use parser::{read_document, SubmissionError};
pub(crate) use parser::is_yaml_path;
pub use schema::{is_valid_submission, validate_submission_schema};
