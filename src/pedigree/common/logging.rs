use env_logger::{Builder, Env};
use std::io::Write;

/// Installs the global logger. `RUST_LOG` overrides `default_filter`.
/// Calling it again after a logger is installed has no effect.
pub fn init_logging(default_filter: &str) {
    let _ = Builder::from_env(Env::default().default_filter_or(default_filter))
        .format(|buf, record| {
            let file = record.file().unwrap_or("unknown");
            let line = record.line().unwrap_or(0);
            writeln!(
                buf,
                "{} [{}:{}] {}",
                record.level(),
                file,
                line,
                record.args()
            )
        })
        .try_init();
}

#[macro_export]
macro_rules! print_red {
    ($($arg:tt)*) => {{
        use ::colored::Colorize;
        println!("{}", format!($($arg)*).red());
    }};
}

#[macro_export]
macro_rules! print_green {
    ($($arg:tt)*) => {{
        use ::colored::Colorize;
        println!("{}", format!($($arg)*).green());
    }};
}

#[macro_export]
macro_rules! print_yellow {
    ($($arg:tt)*) => {{
        use ::colored::Colorize;
        println!("{}", format!($($arg)*).yellow());
    }};
}

#[macro_export]
macro_rules! print_blue {
    ($($arg:tt)*) => {{
        use ::colored::Colorize;
        println!("{}", format!($($arg)*).blue().bold());
    }};
}
