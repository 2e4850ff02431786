pub mod deps;
pub mod watch;
