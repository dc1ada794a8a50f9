fn main() {
    if let Err(error) = demoscope_lib::run() {
        eprintln!("demoscope: {error}");
        std::process::exit(1);
    }
}
