//! Command implementations.

pub mod readers;
pub mod recommend;
pub mod similar;
pub mod stats;

pub use self::readers::execute_repeated_readers;
pub use self::recommend::execute_recommend;
pub use self::similar::execute_similar;
pub use self::stats::execute_stats;
