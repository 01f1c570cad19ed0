pub mod check_in_history;
pub mod check_in_stats;
pub mod create_check_in;
