pub mod acl;
pub mod reservation_commands;
pub mod reservation_queries;

pub use acl::{ExternalProfiles, ExternalVehicles};
pub use reservation_commands::{CreateReservationCommand, ReservationCommandService};
pub use reservation_queries::ReservationQueryService;
