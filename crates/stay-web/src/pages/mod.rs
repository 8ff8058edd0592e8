//! Page Components

mod delete_account;
mod home;
mod privacy;

pub use delete_account::DeleteAccountPage;
pub use home::HomePage;
pub use privacy::PrivacyPolicyPage;
