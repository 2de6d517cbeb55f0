pub mod direct_query;
pub mod lookup;
pub mod referral_walk;
pub mod resolve_name;
pub mod strategies;

pub use direct_query::DirectQuery;
pub use lookup::{render_lines, LookupRecordsUseCase};
pub use referral_walk::{best_effort_fallback, ReferralWalker, WalkOutcome};
pub use resolve_name::{ResolveNameUseCase, NO_RECORD_FOUND};
pub use strategies::RecordStrategies;
