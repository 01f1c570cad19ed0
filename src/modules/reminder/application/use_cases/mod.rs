pub mod reminder_service;
