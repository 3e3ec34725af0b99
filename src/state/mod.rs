pub mod boot;
pub mod placement;
pub mod proposal;

pub use boot::{BootState, boot};
pub use placement::EvasivePlacer;
pub use proposal::{ProposalAction, ProposalStore, activate_decline, submit_accept, submit_defer};
