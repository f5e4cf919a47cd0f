fn main() -> Result<(), Box<dyn std::error::Error>> {
    bpcorr_cli::run()
}
