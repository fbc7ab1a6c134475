//! Per-client rules.

use crate::calendar::is_valid_date;
use crate::submission::{Client, Submission};
use crate::types::Department;

use super::relationship::check_relationship;
use super::Validator;

/// Labels used in per-client messages.
pub(super) struct ClientLabel {
    /// `Client "Acme"` or `Client "#2"`
    pub row: String,
    /// `Acme` or `Client`
    pub short: String,
}

impl ClientLabel {
    fn new(index: usize, client: &Client) -> Self {
        let name = client.name.trim();
        if name.is_empty() {
            Self {
                row: format!("Client \"#{}\"", index + 1),
                short: "Client".to_string(),
            }
        } else {
            Self {
                row: format!("Client \"{name}\""),
                short: name.to_string(),
            }
        }
    }
}

pub(super) fn check_client(
    validator: &Validator,
    submission: &Submission,
    index: usize,
    client: &Client,
    errors: &mut Vec<String>,
) {
    let label = ClientLabel::new(index, client);
    let department = submission.employee.department.as_ref();
    let designer = submission.employee.is_designer();

    if client.name.trim().is_empty() {
        errors.push(format!("{}: name is required.", label.row));
    }

    let lead_role = matches!(
        department,
        Some(Department::WebHead) | Some(Department::OperationsHead)
    );
    if !designer && !lead_role {
        check_reports(validator, client, &label, errors);
    }

    match department {
        Some(Department::Seo) => check_seo(client, &label, errors),
        Some(Department::Web) | Some(Department::WebHead) => {
            check_saas_proof(validator, client, &label, errors)
        }
        Some(Department::OperationsHead) => check_operations(client, &label, errors),
        _ => {}
    }

    if !designer && department != Some(&Department::WebHead) {
        check_relationship(validator, client, &label, errors);
    }
}

fn check_reports(validator: &Validator, client: &Client, label: &ClientLabel, errors: &mut Vec<String>) {
    if client.reports.is_empty() {
        errors.push(format!(
            "{}: add at least one report/proof link (Drive/Genspark).",
            label.short
        ));
    }
    if client
        .reports
        .iter()
        .any(|report| !validator.is_report_host(report.url.trim()))
    {
        errors.push(format!(
            "{}: report/proof links must be Google Drive/Docs or Genspark URLs.",
            label.short
        ));
    }
}

fn check_seo(client: &Client, label: &ClientLabel, errors: &mut Vec<String>) {
    let seo = &client.seo;

    if seo.traffic_this.is_none() {
        errors.push(format!("{}: enter Organic Traffic (this month).", label.row));
    }

    for (number, keyword) in (1..).zip(seo.keywords_worked.iter()) {
        if keyword.keyword.trim().is_empty() {
            errors.push(format!("{}: Keyword #{number} missing text.", label.row));
        }
        if keyword.search_volume.is_none() {
            errors.push(format!("{}: Keyword #{number} missing search volume.", label.row));
        }
    }

    if seo.ai_overview_prev.is_some() != seo.ai_overview_this.is_some() {
        errors.push(format!(
            "{}: AI overview traffic should have prev & this values for comparison.",
            label.row
        ));
    }
}

fn check_saas_proof(validator: &Validator, client: &Client, label: &ClientLabel, errors: &mut Vec<String>) {
    let proof = client.web.saas_proof.trim();
    if client.web.saas_upsells > 0.0 && !proof.is_empty() && !validator.drive.is_match(proof) {
        errors.push(format!(
            "{}: SaaS upsell proof must be a Google Drive/Docs URL.",
            label.row
        ));
    }
}

fn check_operations(client: &Client, label: &ClientLabel, errors: &mut Vec<String>) {
    let ops = &client.operations;

    if ops.client_scope.iter().all(|scope| scope.trim().is_empty()) {
        errors.push(format!("{}: select at least one client scope.", label.row));
    }

    let payment_date = ops.payment_date.trim();
    if !payment_date.is_empty() && !is_valid_date(payment_date) {
        errors.push(format!("{}: enter client payment date.", label.row));
    }

    let needs_reason = ops.client_status.as_ref().is_some_and(|s| s.needs_reason());
    if needs_reason && ops.client_status_reason.trim().is_empty() {
        errors.push(format!(
            "{}: provide a reason for the client status.",
            label.row
        ));
    }
}

#[cfg(test)]
mod tests {
    use crate::submission::{KeywordEntry, ReportLink, Submission};
    use crate::types::{ClientStatus, Department};
    use crate::validator::tests::valid_submission;
    use crate::validator::validate;

    fn with_department(department: Department) -> Submission {
        let mut submission = valid_submission();
        submission.employee.department = Some(department);
        submission
    }

    #[test]
    fn test_unnamed_client_uses_position() {
        let mut submission = valid_submission();
        submission.clients[0].name = " ".to_string();
        assert_eq!(
            validate(&submission).errors,
            vec!["Client \"#1\": name is required."]
        );
    }

    #[test]
    fn test_reports_required_and_host_checked() {
        let mut submission = valid_submission();
        submission.clients[0].reports.clear();
        assert_eq!(
            validate(&submission).errors,
            vec!["Acme: add at least one report/proof link (Drive/Genspark)."]
        );

        submission.clients[0].reports = vec![
            ReportLink {
                label: "ok".to_string(),
                url: "https://www.genspark.ai/r/1".to_string(),
            },
            ReportLink {
                label: "bad".to_string(),
                url: "https://dropbox.com/s/1".to_string(),
            },
        ];
        assert_eq!(
            validate(&submission).errors,
            vec!["Acme: report/proof links must be Google Drive/Docs or Genspark URLs."]
        );
    }

    #[test]
    fn test_designers_and_leads_skip_reports() {
        let mut designer = with_department(Department::SocialMedia);
        designer.employee.role = vec!["Graphic Designer".to_string()];
        designer.clients[0].reports.clear();
        assert!(validate(&designer).ok);

        let mut web_head = with_department(Department::WebHead);
        web_head.clients[0].reports.clear();
        assert!(validate(&web_head).ok);
    }

    #[test]
    fn test_designer_variants_match_the_scorer() {
        let mut designer = with_department(Department::SocialMedia);
        designer.employee.role = vec!["Graphic Designer (Web)".to_string()];
        designer.clients[0].reports.clear();

        assert!(designer.employee.is_designer());
        assert!(validate(&designer).ok, "{:?}", validate(&designer).errors);

        designer.employee.role = vec!["Social Media Executive".to_string()];
        assert!(!validate(&designer).ok);
    }

    #[test]
    fn test_seo_rules() {
        let mut submission = with_department(Department::Seo);
        submission.clients[0].seo.keywords_worked = vec![KeywordEntry {
            keyword: " ".to_string(),
            search_volume: None,
            ..KeywordEntry::default()
        }];
        submission.clients[0].seo.ai_overview_this = Some(3.0);

        assert_eq!(
            validate(&submission).errors,
            vec![
                "Client \"Acme\": enter Organic Traffic (this month).",
                "Client \"Acme\": Keyword #1 missing text.",
                "Client \"Acme\": Keyword #1 missing search volume.",
                "Client \"Acme\": AI overview traffic should have prev & this values for comparison.",
            ]
        );

        submission.clients[0].seo.traffic_this = Some(0.0);
        submission.clients[0].seo.keywords_worked[0].keyword = "dentist".to_string();
        submission.clients[0].seo.keywords_worked[0].search_volume = Some(0.0);
        submission.clients[0].seo.ai_overview_prev = Some(1.0);
        assert!(validate(&submission).ok);
    }

    #[test]
    fn test_saas_proof_must_be_drive() {
        let mut submission = with_department(Department::Web);
        submission.clients[0].web.saas_upsells = 1.0;
        submission.clients[0].web.saas_proof = "https://example.com/invoice".to_string();
        assert_eq!(
            validate(&submission).errors,
            vec!["Client \"Acme\": SaaS upsell proof must be a Google Drive/Docs URL."]
        );

        submission.clients[0].web.saas_upsells = 0.0;
        assert!(validate(&submission).ok);
    }

    #[test]
    fn test_operations_rules() {
        let mut submission = with_department(Department::OperationsHead);
        let ops = &mut submission.clients[0].operations;
        ops.payment_date = "05/03/2024".to_string();
        ops.client_status = Some(ClientStatus::from("left"));

        assert_eq!(
            validate(&submission).errors,
            vec![
                "Client \"Acme\": select at least one client scope.",
                "Client \"Acme\": enter client payment date.",
                "Client \"Acme\": provide a reason for the client status.",
            ]
        );

        let ops = &mut submission.clients[0].operations;
        ops.client_scope = vec!["SEO".to_string()];
        ops.payment_date = "2024-03-05".to_string();
        ops.client_status_reason = "Budget cut".to_string();
        assert!(validate(&submission).ok);
    }
}
