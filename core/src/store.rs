use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::telemetry;
use crate::types::MemberHistory;

/// Kilde for medlemshistorikk (prod: GymApiClient, test: StaticProgressSource).
/// Tilgivende kontrakt: None betyr "ikke tilgjengelig nå", aldri panikk.
pub trait ProgressSource {
    fn fetch_history(&self, member_id: &str) -> Option<MemberHistory>;
}

/// Fast kilde for tester og golden-data.
#[derive(Debug, Default)]
pub struct StaticProgressSource {
    pub history: Option<MemberHistory>,
}

impl ProgressSource for StaticProgressSource {
    fn fetch_history(&self, _member_id: &str) -> Option<MemberHistory> {
        self.history.clone()
    }
}

/// Cache-lag rundt en vilkårlig kilde. Én henting per medlem per prosess-liv;
/// eieren bytter medlem ofte i UI-et, så treffraten er høy.
pub struct CachedProgressClient<S: ProgressSource> {
    inner: S,
    cache: Arc<Mutex<HashMap<String, MemberHistory>>>,
}

impl<S: ProgressSource> CachedProgressClient<S> {
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            cache: Arc::new(Mutex::new(HashMap::new())),
        }
    }
}

impl<S: ProgressSource> ProgressSource for CachedProgressClient<S> {
    fn fetch_history(&self, member_id: &str) -> Option<MemberHistory> {
        let mut cache = self.cache.lock().unwrap();

        if let Some(history) = cache.get(member_id) {
            telemetry::store_cache_hit_total().inc();
            return Some(history.clone());
        }

        telemetry::store_cache_miss_total().inc();
        let fetched = self.inner.fetch_history(member_id)?;
        cache.insert(member_id.to_string(), fetched.clone());
        Some(fetched)
    }
}
