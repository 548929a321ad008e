//! A command line entry point of the address recording and tour planning server.
//!

use milkrun_server::api::create_router;
use milkrun_server::args::{get_arg_matches, BIND_ARG_NAME, DB_ARG_NAME};
use milkrun_server::store::AddressStore;
use std::process;

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let matches = get_arg_matches();
    let bind = matches.get_one::<String>(BIND_ARG_NAME).expect("has a default value");
    let db_path = matches.get_one::<String>(DB_ARG_NAME).expect("has a default value");

    let store = AddressStore::open(db_path).unwrap_or_else(|err| {
        eprintln!("cannot open database '{db_path}': '{err}'");
        process::exit(1);
    });

    let listener = tokio::net::TcpListener::bind(bind).await.unwrap_or_else(|err| {
        eprintln!("cannot bind to '{bind}': '{err}'");
        process::exit(1);
    });

    log::info!("server is running at {bind}");

    if let Err(err) = axum::serve(listener, create_router(store)).await {
        eprintln!("server failure: '{err}'");
        process::exit(1);
    }
}
