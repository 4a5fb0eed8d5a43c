// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{Profile, Program, Requirements, Declared, OneOrMany, EligibilityPolicy};
pub use requests::{RawProfile, MatchRequest};
pub use responses::{MatchResponse, ProgramsResponse, ReloadResponse, HealthResponse, ErrorResponse};
