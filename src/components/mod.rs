pub mod app;
pub mod error_page;
pub mod loading_screen;
pub mod maybe_card;
pub mod proposal_card;
pub mod success_card;

pub use app::App;
