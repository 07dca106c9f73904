//! Page modules

pub mod contact;
pub mod home;

pub use contact::ContactPage;
pub use home::HomePage;
