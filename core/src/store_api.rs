// core/src/store_api.rs
use serde_json::Value;
use ureq::Agent;

use crate::decode::decode_history;
use crate::store::ProgressSource;
use crate::telemetry;
use crate::types::{Cfg, MemberHistory};

/// Klient mot plattformens REST-backend – enkel blocking-versjon (ureq)
pub struct GymApiClient {
    agent: Agent,
    base_url: String,
}

impl GymApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        // En enkel agent; ureq bruker rustls når "tls" er aktivert
        let agent = ureq::AgentBuilder::new()
            .timeout(std::time::Duration::from_secs(10))
            .build();
        Self {
            agent,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Klient fra applikasjonskonfig; uten base_url antas lokal dev-backend.
    pub fn from_cfg(cfg: &Cfg) -> Self {
        let base = cfg
            .base_url
            .clone()
            .unwrap_or_else(|| "http://localhost:5000".to_string());
        Self::new(base)
    }

    fn progress_url(&self, member_id: &str) -> String {
        format!("{}/api/members/{}/progress", self.base_url, member_id)
    }
}

impl ProgressSource for GymApiClient {
    fn fetch_history(&self, member_id: &str) -> Option<MemberHistory> {
        let url = self.progress_url(member_id);

        let resp = match self.agent.get(&url).call() {
            Ok(r) => r,
            Err(e) => {
                log::warn!("henting av progresjon feilet for {member_id}: {e}");
                telemetry::fetch_failed_total().inc();
                return None;
            }
        };
        let body: Value = resp.into_json().ok()?;

        match decode_history(member_id, &body) {
            Ok(history) => {
                println!(
                    "[GymApi] {} => {} målinger over {} metrikker",
                    member_id,
                    history.total_samples(),
                    history.metrics.len()
                );
                Some(history)
            }
            Err(e) => {
                log::warn!("ugyldig progresjon-payload for {member_id}: {e}");
                telemetry::fetch_failed_total().inc();
                None
            }
        }
    }
}
