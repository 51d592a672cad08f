mod logs;
mod shutdown;

pub use self::logs::init_logger;
pub use self::shutdown::shutdown_signal;
