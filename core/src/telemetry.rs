use once_cell::sync::Lazy;
use prometheus::{IntCounter, Registry};

/// Felles registry – verten kan gather() herfra.
pub static REGISTRY: Lazy<Registry> = Lazy::new(Registry::new);

fn counter(name: &str, help: &str) -> IntCounter {
    let c = IntCounter::new(name, help).expect("gyldig counter-navn");
    // Dobbel registrering (f.eks. i tester) er ufarlig
    let _ = REGISTRY.register(Box::new(c.clone()));
    c
}

static DECODE_SKIPPED: Lazy<IntCounter> = Lazy::new(|| {
    counter(
        "progress_decode_skipped_total",
        "Målinger hoppet over under dekoding",
    )
});

static STORE_CACHE_HIT: Lazy<IntCounter> = Lazy::new(|| {
    counter(
        "progress_store_cache_hit_total",
        "Cache-treff i progresjonskilden",
    )
});

static STORE_CACHE_MISS: Lazy<IntCounter> = Lazy::new(|| {
    counter(
        "progress_store_cache_miss_total",
        "Cache-bom i progresjonskilden",
    )
});

static FETCH_FAILED: Lazy<IntCounter> = Lazy::new(|| {
    counter(
        "progress_fetch_failed_total",
        "Feilede hentinger mot backend",
    )
});

pub fn decode_skipped_total() -> &'static IntCounter {
    &DECODE_SKIPPED
}

pub fn store_cache_hit_total() -> &'static IntCounter {
    &STORE_CACHE_HIT
}

pub fn store_cache_miss_total() -> &'static IntCounter {
    &STORE_CACHE_MISS
}

pub fn fetch_failed_total() -> &'static IntCounter {
    &FETCH_FAILED
}
