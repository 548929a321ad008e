use clap::{Arg, ArgMatches, Command};

pub const BIND_ARG_NAME: &str = "bind";
pub const DB_ARG_NAME: &str = "db";

/// Creates a command line definition of the server.
pub fn get_app() -> Command {
    Command::new("milkrun")
        .version("0.1.0")
        .about("Records geocoded addresses and plans multi-stop visiting tours over them")
        .arg(
            Arg::new(BIND_ARG_NAME)
                .help("Specifies a socket address to listen on")
                .short('b')
                .long(BIND_ARG_NAME)
                .required(false)
                .default_value("0.0.0.0:3000"),
        )
        .arg(
            Arg::new(DB_ARG_NAME)
                .help("Sets the sqlite database file to use")
                .short('d')
                .long(DB_ARG_NAME)
                .required(false)
                .default_value("addresses.db"),
        )
}

/// Parses command line arguments of the server.
pub fn get_arg_matches() -> ArgMatches {
    get_app().get_matches()
}
