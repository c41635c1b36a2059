//! Page sections, top to bottom.

mod about;
mod contact;
mod footer;
mod for_who;
mod hero;
mod how_i_work;
mod location;
mod pricing;
mod services;

pub use about::About;
pub use contact::Contact;
pub use footer::Footer;
pub use for_who::ForWho;
pub use hero::Hero;
pub use how_i_work::HowIWork;
pub use location::Location;
pub use pricing::Pricing;
pub use services::Services;
