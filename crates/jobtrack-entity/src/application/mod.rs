//! Application domain entities: the status workflow lives here.

pub mod model;
pub mod status;
pub mod view;

pub use model::Application;
pub use status::ApplicationStatus;
pub use view::{ApplicationDetails, ApplicationWithJob};
