pub mod registration;

pub use registration::{NewClientRegistration, Registration, RegistrationError, RegistrationService};
