mod reminder_repository;

pub use reminder_repository::{
    NewReminder, ReminderPatch, ReminderRepository, ReminderRepositoryError,
};
