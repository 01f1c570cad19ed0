pub mod check_in_repository;

pub use check_in_repository::{CheckInRepository, CheckInRepositoryError, NewCheckIn};
