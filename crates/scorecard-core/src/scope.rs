//! Scope completion: how much of a client's contracted monthly deliverables
//! were actually produced.

use serde::{Deserialize, Serialize};

use crate::composite::round1;
use crate::submission::Client;
use crate::types::ServiceKind;

/// Activity counted against a service's deliverables this period.
fn delivered(client: &Client, service: &ServiceKind) -> f64 {
    match service {
        ServiceKind::SocialMedia => client.social.creatives(),
        ServiceKind::Seo | ServiceKind::GbpSeo => {
            client.seo.keywords_worked.len() as f64
                + client.seo.top3.len() as f64
                + client.seo.technical_issues
        }
        ServiceKind::GoogleAds | ServiceKind::MetaAds => client.ads.new_ads,
        ServiceKind::WebsiteMaintenance => client.web.pages_this + client.web.saas_upsells,
        // Tracked but not scored yet.
        ServiceKind::Ai => 0.0,
        ServiceKind::Other(_) => 0.0,
    }
}

/// Completion percentage for one client/service pair.
///
/// `None` when the client has no scope for the service (not applicable);
/// otherwise `0..=100`, with zero deliverables giving `0`.
pub fn completion(client: &Client, service: &str) -> Option<u32> {
    let scope = client.service_scopes.get(service)?;
    if scope.deliverables <= 0.0 {
        return Some(0);
    }

    let done = delivered(client, &ServiceKind::from(service)).max(0.0);
    let percent = (done / scope.deliverables * 100.0).round().min(100.0);
    Some(percent as u32)
}

/// Mean completion over the client's scoped services, if any are scoped.
fn client_completion(client: &Client) -> Option<f64> {
    let scored: Vec<u32> = client
        .services
        .iter()
        .filter_map(|service| completion(client, service))
        .collect();

    if scored.is_empty() {
        None
    } else {
        Some(scored.iter().map(|&p| f64::from(p)).sum::<f64>() / scored.len() as f64)
    }
}

/// Scope score on a 0-10 scale, averaged over clients with at least one
/// scoped service. `0` when no client qualifies.
pub fn scope_score(clients: &[Client]) -> f64 {
    let per_client: Vec<f64> = clients.iter().filter_map(client_completion).collect();
    if per_client.is_empty() {
        return 0.0;
    }

    let average = per_client.iter().sum::<f64>() / per_client.len() as f64;
    round1((average / 100.0 * 10.0).min(10.0))
}

/// One row of the completion table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScopeCompletion {
    pub client: String,
    pub service: String,
    pub completion: Option<u32>,
}

/// Completion for every contracted service of every client, in input order.
pub fn completion_table(clients: &[Client]) -> Vec<ScopeCompletion> {
    clients
        .iter()
        .flat_map(|client| {
            client.services.iter().map(move |service| ScopeCompletion {
                client: client.name.clone(),
                service: service.clone(),
                completion: completion(client, service),
            })
        })
        .collect()
}
