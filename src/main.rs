fn main() {
    if let Err(e) = yolopost::run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
