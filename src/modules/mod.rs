pub mod applications;
pub mod auth;
pub mod job_offers;
pub mod profile;
