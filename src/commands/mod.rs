// Command pattern for booking operations
// Commands are sent from the dialog to its submission coroutine

pub mod booking_commands;

pub use booking_commands::BookingCommand;
