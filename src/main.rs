fn main() {
    #[cfg(feature = "cli")]
    matchdiff::cli::run();

    #[cfg(not(feature = "cli"))]
    {
        eprintln!("matchdiff: CLI not enabled. Rebuild with `--features cli`.");
        std::process::exit(1);
    }
}
