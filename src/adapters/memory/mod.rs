//! In-memory adapters.
//!
//! Map- and list-backed implementations of the persistence and
//! supporting ports, used by tests and the demo wiring.

mod clock;
mod id_source;
mod opt_out_list;
mod project_repository;
mod team_repository;

pub use clock::{FixedClock, SystemClock};
pub use id_source::UuidIdSource;
pub use opt_out_list::OptOutList;
pub use project_repository::InMemoryProjectRepository;
pub use team_repository::InMemoryTeamRepository;
