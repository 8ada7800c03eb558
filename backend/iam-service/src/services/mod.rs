pub mod events;
pub mod user_commands;
pub mod user_queries;

pub use events::{EventPublisher, LogEventPublisher};
pub use user_commands::{AuthenticatedUser, SignInCommand, SignUpCommand, UserCommandService};
pub use user_queries::UserQueryService;
