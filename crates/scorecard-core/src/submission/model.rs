//! Typed submission record.
//!
//! The external JSON shape is flat: department metrics live directly on each
//! client object under prefixed names (`web_pagesThis`, `sm_reachPrev`, ...).
//! Here they are grouped into one typed section per metric family and
//! flattened back into the client on the wire.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::lenient;
use crate::types::{ClientStatus, Department, Flags, Scores};

/// One employee's report for one calendar month.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    /// Report month, `YYYY-MM`
    #[serde(default, deserialize_with = "lenient::string")]
    pub month_key: String,

    #[serde(default, deserialize_with = "lenient::boolean")]
    pub is_draft: bool,

    #[serde(default, deserialize_with = "lenient::object")]
    pub employee: Employee,

    #[serde(default, deserialize_with = "lenient::list")]
    pub clients: Vec<Client>,

    #[serde(default, deserialize_with = "lenient::list")]
    pub learning: Vec<LearningEntry>,

    #[serde(default, deserialize_with = "lenient::object")]
    pub meta: Meta,

    #[serde(default, deserialize_with = "lenient::object")]
    pub manager: ManagerReview,

    #[serde(default, deserialize_with = "lenient::object")]
    pub flags: Flags,

    #[serde(default, deserialize_with = "lenient::object")]
    pub scores: Scores,

    /// When the report was submitted, if it has been
    #[serde(
        default,
        deserialize_with = "lenient::timestamp",
        skip_serializing_if = "Option::is_none"
    )]
    pub submitted_at: Option<DateTime<Utc>>,
}

impl Submission {
    /// Total learning minutes, ignoring negative entries.
    pub fn learning_minutes(&self) -> f64 {
        self.learning
            .iter()
            .map(|entry| entry.duration_mins.max(0.0))
            .sum()
    }

    /// Find a client by name (trimmed, case-insensitive).
    pub fn client_named(&self, name: &str) -> Option<&Client> {
        let wanted = name.trim().to_lowercase();
        if wanted.is_empty() {
            return None;
        }
        self.clients
            .iter()
            .find(|client| client.name.trim().to_lowercase() == wanted)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Employee {
    #[serde(default, deserialize_with = "lenient::string")]
    pub name: String,

    /// Identity key together with the name
    #[serde(default, deserialize_with = "lenient::string")]
    pub phone: String,

    #[serde(
        default,
        deserialize_with = "lenient::department",
        skip_serializing_if = "Option::is_none"
    )]
    pub department: Option<Department>,

    #[serde(default, deserialize_with = "lenient::strings")]
    pub role: Vec<String>,
}

/// Marker shared by every designer role title.
const DESIGNER_ROLE: &str = "Designer";

impl Employee {
    /// Any designer role ("Graphic Designer", "Graphic Designer (Web)", ...).
    ///
    /// Both the Social Media scorer and the report and relationship
    /// exemptions in the validator go through this check.
    pub fn is_designer(&self) -> bool {
        self.role.iter().any(|r| r.contains(DESIGNER_ROLE))
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LearningEntry {
    #[serde(default, deserialize_with = "lenient::string")]
    pub title: String,

    #[serde(default, deserialize_with = "lenient::number")]
    pub duration_mins: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Meta {
    #[serde(default, deserialize_with = "lenient::object")]
    pub attendance: Attendance,

    #[serde(default, deserialize_with = "lenient::object")]
    pub tasks: Tasks,
}

/// Days worked from office and from home.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Attendance {
    #[serde(default, deserialize_with = "lenient::number")]
    pub wfo: f64,

    #[serde(default, deserialize_with = "lenient::number")]
    pub wfh: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Tasks {
    #[serde(default, deserialize_with = "lenient::number")]
    pub count: f64,

    #[serde(default, deserialize_with = "lenient::string")]
    pub ai_table_link: String,

    #[serde(default, deserialize_with = "lenient::string")]
    pub ai_table_screenshot: String,
}

/// Manager evaluation, supplied from outside the engine.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ManagerReview {
    #[serde(default, deserialize_with = "lenient::number")]
    pub score: f64,

    #[serde(default, deserialize_with = "lenient::string")]
    pub comments: String,

    #[serde(default, deserialize_with = "lenient::boolean")]
    pub verified: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ReportLink {
    #[serde(default, deserialize_with = "lenient::string")]
    pub label: String,

    #[serde(default, deserialize_with = "lenient::string")]
    pub url: String,
}

/// Monthly deliverables contracted for one service.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ServiceScope {
    #[serde(default, deserialize_with = "lenient::number")]
    pub deliverables: f64,

    #[serde(default, deserialize_with = "lenient::string")]
    pub description: String,

    #[serde(default, deserialize_with = "lenient::string")]
    pub frequency: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Meeting {
    #[serde(default, deserialize_with = "lenient::string")]
    pub date: String,

    #[serde(default, deserialize_with = "lenient::string")]
    pub summary: String,

    #[serde(default, deserialize_with = "lenient::string")]
    pub notes_link: String,
}

/// An appreciation or escalation with its optional proof link.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ProofEntry {
    #[serde(default, deserialize_with = "lenient::string")]
    pub url: String,

    #[serde(default, deserialize_with = "lenient::string")]
    pub date: String,

    #[serde(default, deserialize_with = "lenient::string")]
    pub description: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Relationship {
    #[serde(default, deserialize_with = "lenient::list")]
    pub meetings: Vec<Meeting>,

    #[serde(default, deserialize_with = "lenient::list")]
    pub appreciations: Vec<ProofEntry>,

    #[serde(default, deserialize_with = "lenient::list")]
    pub escalations: Vec<ProofEntry>,

    /// 0 means unrated, otherwise 1-10
    #[serde(default, deserialize_with = "lenient::number")]
    pub client_satisfaction: f64,

    #[serde(default, deserialize_with = "lenient::boolean")]
    pub payment_received: bool,

    #[serde(default, deserialize_with = "lenient::string")]
    pub payment_date: String,

    #[serde(default, deserialize_with = "lenient::string")]
    pub roadmap_sent_date: String,

    #[serde(default, deserialize_with = "lenient::string")]
    pub report_sent_date: String,
}

/// One client handled during the month.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Client {
    #[serde(default, deserialize_with = "lenient::string")]
    pub id: String,

    #[serde(default, deserialize_with = "lenient::string")]
    pub name: String,

    /// Proof-link records
    #[serde(default, deserialize_with = "lenient::list")]
    pub reports: Vec<ReportLink>,

    #[serde(default, deserialize_with = "lenient::object")]
    pub relationship: Relationship,

    /// Contracted service names
    #[serde(default, deserialize_with = "lenient::service_names")]
    pub services: Vec<String>,

    #[serde(default, deserialize_with = "lenient::map")]
    pub service_scopes: BTreeMap<String, ServiceScope>,

    #[serde(flatten)]
    pub web: WebMetrics,

    #[serde(flatten)]
    pub social: SocialMetrics,

    #[serde(flatten)]
    pub ads: AdsMetrics,

    #[serde(flatten)]
    pub seo: SeoMetrics,

    #[serde(flatten)]
    pub hr: HrMetrics,

    #[serde(flatten)]
    pub accounts: AccountsMetrics,

    #[serde(flatten)]
    pub sales: SalesMetrics,

    #[serde(flatten)]
    pub operations: OperationsMetrics,
}

impl Client {
    /// Carry previous-period values forward from last month's entry for the
    /// same client: each `Prev` becomes that entry's `This`.
    pub fn carry_forward(&mut self, previous: &Client) {
        self.web.carry_forward(&previous.web);
        self.social.carry_forward(&previous.social);
        self.ads.carry_forward(&previous.ads);
        self.seo.carry_forward(&previous.seo);
        self.hr.carry_forward(&previous.hr);
        self.accounts.carry_forward(&previous.accounts);
        self.sales.carry_forward(&previous.sales);
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct WebMetrics {
    #[serde(rename = "web_pagesPrev", default, deserialize_with = "lenient::number")]
    pub pages_prev: f64,

    #[serde(rename = "web_pagesThis", default, deserialize_with = "lenient::number")]
    pub pages_this: f64,

    /// On-time delivery percentage
    #[serde(rename = "web_onTimePrev", default, deserialize_with = "lenient::number")]
    pub on_time_prev: f64,

    #[serde(rename = "web_onTimeThis", default, deserialize_with = "lenient::number")]
    pub on_time_this: f64,

    #[serde(rename = "web_bugsPrev", default, deserialize_with = "lenient::number")]
    pub bugs_prev: f64,

    #[serde(rename = "web_bugsThis", default, deserialize_with = "lenient::number")]
    pub bugs_this: f64,

    #[serde(rename = "web_saasUpsells", default, deserialize_with = "lenient::number")]
    pub saas_upsells: f64,

    #[serde(rename = "web_saasProof", default, deserialize_with = "lenient::string")]
    pub saas_proof: String,
}

impl WebMetrics {
    fn carry_forward(&mut self, previous: &Self) {
        self.pages_prev = previous.pages_this;
        self.on_time_prev = previous.on_time_this;
        self.bugs_prev = previous.bugs_this;
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SocialMetrics {
    #[serde(rename = "sm_followersPrev", default, deserialize_with = "lenient::number")]
    pub followers_prev: f64,

    #[serde(rename = "sm_followersThis", default, deserialize_with = "lenient::number")]
    pub followers_this: f64,

    #[serde(rename = "sm_reachPrev", default, deserialize_with = "lenient::number")]
    pub reach_prev: f64,

    #[serde(rename = "sm_reachThis", default, deserialize_with = "lenient::number")]
    pub reach_this: f64,

    /// Engagement rate, percent
    #[serde(rename = "sm_erPrev", default, deserialize_with = "lenient::number")]
    pub er_prev: f64,

    #[serde(rename = "sm_erThis", default, deserialize_with = "lenient::number")]
    pub er_this: f64,

    #[serde(rename = "sm_campaignsThis", default, deserialize_with = "lenient::number")]
    pub campaigns_this: f64,

    #[serde(rename = "sm_graphicsPhotoshop", default, deserialize_with = "lenient::number")]
    pub graphics_photoshop: f64,

    #[serde(rename = "sm_graphicsCanva", default, deserialize_with = "lenient::number")]
    pub graphics_canva: f64,

    #[serde(rename = "sm_graphicsAi", default, deserialize_with = "lenient::number")]
    pub graphics_ai: f64,

    #[serde(rename = "sm_shortVideos", default, deserialize_with = "lenient::number")]
    pub short_videos: f64,

    #[serde(rename = "sm_longVideos", default, deserialize_with = "lenient::number")]
    pub long_videos: f64,

    /// Self-rated creative quality, 1-10
    #[serde(rename = "sm_qualityScore", default, deserialize_with = "lenient::number")]
    pub quality_score: f64,
}

impl SocialMetrics {
    fn carry_forward(&mut self, previous: &Self) {
        self.followers_prev = previous.followers_this;
        self.reach_prev = previous.reach_this;
        self.er_prev = previous.er_this;
    }

    /// Static graphics produced (Photoshop, Canva, AI).
    pub fn graphics(&self) -> f64 {
        self.graphics_photoshop + self.graphics_canva + self.graphics_ai
    }

    /// Every creative counter, graphics and videos.
    pub fn creatives(&self) -> f64 {
        self.graphics() + self.short_videos + self.long_videos
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AdsMetrics {
    #[serde(rename = "ads_ctrPrev", default, deserialize_with = "lenient::number")]
    pub ctr_prev: f64,

    #[serde(rename = "ads_ctrThis", default, deserialize_with = "lenient::number")]
    pub ctr_this: f64,

    /// Cost per lead
    #[serde(rename = "ads_cplPrev", default, deserialize_with = "lenient::number")]
    pub cpl_prev: f64,

    #[serde(rename = "ads_cplThis", default, deserialize_with = "lenient::number")]
    pub cpl_this: f64,

    #[serde(rename = "ads_leadsPrev", default, deserialize_with = "lenient::number")]
    pub leads_prev: f64,

    #[serde(rename = "ads_leadsThis", default, deserialize_with = "lenient::number")]
    pub leads_this: f64,

    #[serde(rename = "ads_newAds", default, deserialize_with = "lenient::number")]
    pub new_ads: f64,
}

impl AdsMetrics {
    fn carry_forward(&mut self, previous: &Self) {
        self.ctr_prev = previous.ctr_this;
        self.cpl_prev = previous.cpl_this;
        self.leads_prev = previous.leads_this;
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct KeywordEntry {
    #[serde(default, deserialize_with = "lenient::string")]
    pub keyword: String,

    #[serde(default, deserialize_with = "lenient::string")]
    pub location: String,

    #[serde(
        default,
        deserialize_with = "lenient::optional_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub search_volume: Option<f64>,

    #[serde(default, deserialize_with = "lenient::number")]
    pub rank_prev: f64,

    #[serde(default, deserialize_with = "lenient::number")]
    pub rank_now: f64,

    #[serde(default, deserialize_with = "lenient::string")]
    pub proof: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SeoMetrics {
    #[serde(rename = "seo_trafficPrev", default, deserialize_with = "lenient::number")]
    pub traffic_prev: f64,

    /// Organic traffic this month; must be entered by SEO staff
    #[serde(
        rename = "seo_trafficThis",
        default,
        deserialize_with = "lenient::optional_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub traffic_this: Option<f64>,

    #[serde(rename = "seo_kwImprovedThis", default, deserialize_with = "lenient::number")]
    pub keywords_improved_this: f64,

    #[serde(
        rename = "seo_aiOverviewPrev",
        default,
        deserialize_with = "lenient::optional_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub ai_overview_prev: Option<f64>,

    #[serde(
        rename = "seo_aiOverviewThis",
        default,
        deserialize_with = "lenient::optional_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub ai_overview_this: Option<f64>,

    #[serde(rename = "seo_llmTrafficPrev", default, deserialize_with = "lenient::number")]
    pub llm_traffic_prev: f64,

    #[serde(rename = "seo_llmTrafficThis", default, deserialize_with = "lenient::number")]
    pub llm_traffic_this: f64,

    #[serde(rename = "seo_leadsPrev", default, deserialize_with = "lenient::number")]
    pub leads_prev: f64,

    #[serde(rename = "seo_leadsThis", default, deserialize_with = "lenient::number")]
    pub leads_this: f64,

    #[serde(rename = "seo_technicalIssues", default, deserialize_with = "lenient::number")]
    pub technical_issues: f64,

    #[serde(rename = "seo_keywordsWorked", default, deserialize_with = "lenient::list")]
    pub keywords_worked: Vec<KeywordEntry>,

    /// Keywords ranking in the top three
    #[serde(rename = "seo_top3", default, deserialize_with = "lenient::list")]
    pub top3: Vec<KeywordEntry>,
}

impl SeoMetrics {
    fn carry_forward(&mut self, previous: &Self) {
        if let Some(traffic) = previous.traffic_this {
            self.traffic_prev = traffic;
        }
        if previous.ai_overview_this.is_some() {
            self.ai_overview_prev = previous.ai_overview_this;
        }
        self.llm_traffic_prev = previous.llm_traffic_this;
        self.leads_prev = previous.leads_this;
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct HrMetrics {
    #[serde(rename = "hr_hiresPrev", default, deserialize_with = "lenient::number")]
    pub hires_prev: f64,

    #[serde(rename = "hr_hiresThis", default, deserialize_with = "lenient::number")]
    pub hires_this: f64,

    /// Candidates screened
    #[serde(rename = "hr_screened", default, deserialize_with = "lenient::number")]
    pub screened: f64,

    /// Engagement activities run
    #[serde(rename = "hr_engagements", default, deserialize_with = "lenient::number")]
    pub engagements: f64,

    #[serde(rename = "hr_processDonePctPrev", default, deserialize_with = "lenient::number")]
    pub process_done_pct_prev: f64,

    #[serde(rename = "hr_processDonePctThis", default, deserialize_with = "lenient::number")]
    pub process_done_pct_this: f64,
}

impl HrMetrics {
    fn carry_forward(&mut self, previous: &Self) {
        self.hires_prev = previous.hires_this;
        self.process_done_pct_prev = previous.process_done_pct_this;
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AccountsMetrics {
    #[serde(rename = "ac_collectionsPctPrev", default, deserialize_with = "lenient::number")]
    pub collections_pct_prev: f64,

    #[serde(rename = "ac_collectionsPctThis", default, deserialize_with = "lenient::number")]
    pub collections_pct_this: f64,

    #[serde(rename = "ac_gstDone", default, deserialize_with = "lenient::boolean")]
    pub gst_done: bool,

    #[serde(rename = "ac_tdsDone", default, deserialize_with = "lenient::boolean")]
    pub tds_done: bool,
}

impl AccountsMetrics {
    fn carry_forward(&mut self, previous: &Self) {
        self.collections_pct_prev = previous.collections_pct_this;
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SalesMetrics {
    #[serde(rename = "sa_revenuePrev", default, deserialize_with = "lenient::number")]
    pub revenue_prev: f64,

    #[serde(rename = "sa_revenueThis", default, deserialize_with = "lenient::number")]
    pub revenue_this: f64,

    #[serde(rename = "sa_conversionRatePrev", default, deserialize_with = "lenient::number")]
    pub conversion_rate_prev: f64,

    #[serde(rename = "sa_conversionRateThis", default, deserialize_with = "lenient::number")]
    pub conversion_rate_this: f64,

    #[serde(rename = "sa_pipelinePrev", default, deserialize_with = "lenient::number")]
    pub pipeline_prev: f64,

    #[serde(rename = "sa_pipelineThis", default, deserialize_with = "lenient::number")]
    pub pipeline_this: f64,

    #[serde(rename = "sa_aiUpsellValuePrev", default, deserialize_with = "lenient::number")]
    pub ai_upsell_value_prev: f64,

    #[serde(rename = "sa_aiUpsellValueThis", default, deserialize_with = "lenient::number")]
    pub ai_upsell_value_this: f64,
}

impl SalesMetrics {
    fn carry_forward(&mut self, previous: &Self) {
        self.revenue_prev = previous.revenue_this;
        self.conversion_rate_prev = previous.conversion_rate_this;
        self.pipeline_prev = previous.pipeline_this;
        self.ai_upsell_value_prev = previous.ai_upsell_value_this;
    }
}

/// Client-level record kept by an Operations Head.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct OperationsMetrics {
    /// Scope tags selected for the client
    #[serde(rename = "op_clientScope", default, deserialize_with = "lenient::strings")]
    pub client_scope: Vec<String>,

    #[serde(rename = "op_paymentDate", default, deserialize_with = "lenient::string")]
    pub payment_date: String,

    #[serde(rename = "op_teamFinishedScope", default, deserialize_with = "lenient::boolean")]
    pub team_finished_scope: bool,

    #[serde(rename = "op_satisfactionScore", default, deserialize_with = "lenient::number")]
    pub satisfaction_score: f64,

    #[serde(
        rename = "op_clientStatus",
        default,
        deserialize_with = "lenient::client_status",
        skip_serializing_if = "Option::is_none"
    )]
    pub client_status: Option<ClientStatus>,

    #[serde(rename = "op_clientStatusReason", default, deserialize_with = "lenient::string")]
    pub client_status_reason: String,

    #[serde(rename = "op_appreciations", default, deserialize_with = "lenient::list")]
    pub appreciations: Vec<ProofEntry>,

    #[serde(rename = "op_escalations", default, deserialize_with = "lenient::list")]
    pub escalations: Vec<ProofEntry>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_flat_client_fields_decode_into_sections() {
        let client: Client = serde_json::from_value(json!({
            "name": "Acme",
            "web_pagesThis": 12,
            "sm_reachThis": "5000",
            "seo_trafficThis": null,
            "op_clientStatus": "upgraded",
            "service_scopes": { "SEO": { "deliverables": 10 } },
            "services": ["SEO"]
        }))
        .unwrap();

        assert_eq!(client.name, "Acme");
        assert_eq!(client.web.pages_this, 12.0);
        assert_eq!(client.social.reach_this, 5000.0);
        assert_eq!(client.seo.traffic_this, None);
        assert_eq!(client.operations.client_status, Some(ClientStatus::Upgraded));
        assert_eq!(client.service_scopes["SEO"].deliverables, 10.0);
    }

    #[test]
    fn test_client_serializes_back_to_flat_shape() {
        let mut client = Client {
            name: "Acme".to_string(),
            ..Client::default()
        };
        client.web.pages_this = 4.0;
        client.sales.revenue_this = 1000.0;

        let value = serde_json::to_value(&client).unwrap();
        assert_eq!(value["web_pagesThis"], json!(4.0));
        assert_eq!(value["sa_revenueThis"], json!(1000.0));
        assert!(value.get("web").is_none());
    }

    #[test]
    fn test_missing_sections_default() {
        let submission: Submission = serde_json::from_value(json!({
            "monthKey": "2024-02",
            "employee": null,
            "clients": null,
            "meta": { "attendance": { "wfo": "20" } }
        }))
        .unwrap();

        assert_eq!(submission.month_key, "2024-02");
        assert_eq!(submission.employee, Employee::default());
        assert!(submission.clients.is_empty());
        assert_eq!(submission.meta.attendance.wfo, 20.0);
        assert_eq!(submission.meta.attendance.wfh, 0.0);
    }

    #[test]
    fn test_blank_department_is_none() {
        let employee: Employee =
            serde_json::from_value(json!({ "name": "Asha", "department": "  " })).unwrap();
        assert_eq!(employee.department, None);

        let employee: Employee =
            serde_json::from_value(json!({ "department": "SEO" })).unwrap();
        assert_eq!(employee.department, Some(Department::Seo));
    }

    #[test]
    fn test_role_helpers() {
        let employee = Employee {
            role: vec!["Graphic Designer (Web)".to_string()],
            ..Employee::default()
        };
        assert!(employee.is_designer());

        let executive = Employee {
            role: vec!["Social Media Executive".to_string(), " ".to_string()],
            ..Employee::default()
        };
        assert!(!executive.is_designer());
    }

    #[test]
    fn test_learning_minutes_ignores_negative_entries() {
        let submission = Submission {
            learning: vec![
                LearningEntry { title: "a".into(), duration_mins: 90.0 },
                LearningEntry { title: "b".into(), duration_mins: -30.0 },
                LearningEntry { title: "c".into(), duration_mins: 30.0 },
            ],
            ..Submission::default()
        };
        assert_eq!(submission.learning_minutes(), 120.0);
    }

    #[test]
    fn test_client_lookup_is_case_insensitive() {
        let submission = Submission {
            clients: vec![Client { name: "Acme Corp".into(), ..Client::default() }],
            ..Submission::default()
        };
        assert!(submission.client_named(" acme corp ").is_some());
        assert!(submission.client_named("").is_none());
    }
}
