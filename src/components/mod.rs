pub mod app;
pub mod phone_input;
pub mod query_dialog;
pub mod toast_stack;

pub use app::App;
pub use phone_input::PhoneInput;
pub use query_dialog::AppointmentQueryDialog;
pub use toast_stack::ToastStack;
