pub mod dns;

pub use dns::{
    render_lines, DirectQuery, LookupRecordsUseCase, RecordStrategies, ReferralWalker,
    ResolveNameUseCase, WalkOutcome, NO_RECORD_FOUND,
};
