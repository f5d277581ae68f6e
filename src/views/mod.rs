pub mod forgot_password;
pub mod home;
pub mod settings;

pub use forgot_password::ForgotPasswordView;
pub use home::HomeView;
pub use settings::SettingsView;
