fn main() {
    if let Err(err) = datasheet_ingest::run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
