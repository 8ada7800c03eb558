pub mod acl;
pub mod profile_commands;
pub mod profile_queries;

pub use acl::ExternalPlans;
pub use profile_commands::{CreateProfileCommand, ProfileCommandService};
pub use profile_queries::ProfileQueryService;
