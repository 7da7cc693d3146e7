pub mod analyze_progress;
pub mod analyzer;
pub mod cli;
pub mod decode;
pub mod models;
pub mod series;
pub mod stats;
pub mod storage;
pub mod store;
pub mod store_api;
pub mod telemetry;
pub mod types;
pub mod window;

pub use analyze_progress::{analyze_progress, AnalyzeInputs, AnalyzeOutputs};
pub use analyzer::analyze_progress_json;
pub use decode::{decode_history, DecodeError};
pub use models::MemberProfile;
pub use series::reconstruct;
pub use stats::{compute_stats, resolve_window, RoundTo};
pub use storage::{load_history, save_history};
pub use store::{CachedProgressClient, ProgressSource, StaticProgressSource};
pub use store_api::GymApiClient;
pub use types::{
    AlignedRow, Cfg, MemberHistory, MetricKind, MetricSample, ProgressStats, WindowMonths,
};
pub use window::{filter_window, months_back};
