mod dashboard;
mod landing;
mod root;
mod state;

pub use dashboard::{Dashboard, parse_amount};
pub use landing::{InviteForm, LANDING, LandingContent, SectionHeading, ServiceCard, Testimonial};
pub use root::run;
pub use state::{Notice, Tab};
