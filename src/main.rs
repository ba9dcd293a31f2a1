fn main() {
    if let Err(e) = wallet_units::cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
