use clap::Parser;
use log::LevelFilter;

/// A small HTTP server showing off routing, middleware and controllers.
#[derive(Parser)]
#[command(author, version, about)]
pub struct Args {
    /// (Optional) Host name or IP address to serve from.
    #[arg(long, default_value_t = String::from("127.0.0.1"))]
    pub host: String,
    /// (Optional) Port number to open on host.
    #[arg(short, long, default_value_t = 4000)]
    pub port: u16,
    /// (Optional) Number of threads handling connections.
    #[arg(short, long, default_value_t = 5, value_parser = clap::value_parser!(u16).range(1..))]
    pub threads: u16,
    /// (Optional) Log level: off, error, warn, info, debug or trace.
    #[arg(long, default_value_t = LevelFilter::Info)]
    pub log_level: LevelFilter,
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use log::LevelFilter;

    use crate::args::Args;

    #[test]
    fn defaults() {
        let args = Args::try_parse_from(["my_http"]).unwrap();
        assert_eq!(args.host, "127.0.0.1");
        assert_eq!(args.port, 4000);
        assert_eq!(args.threads, 5);
        assert_eq!(args.log_level, LevelFilter::Info);
    }

    #[test]
    fn all_arguments() {
        let args = Args::try_parse_from(["my_http", "--host", "0.0.0.0", "-p", "8080", "--threads", "2", "--log-level", "debug"]).unwrap();
        assert_eq!(args.host, "0.0.0.0");
        assert_eq!(args.port, 8080);
        assert_eq!(args.threads, 2);
        assert_eq!(args.log_level, LevelFilter::Debug);
    }

    #[test]
    fn zero_threads() {
        assert!(Args::try_parse_from(["my_http", "--threads", "0"]).is_err());
    }
}
