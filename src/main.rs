use anyhow::Result;

fn main() -> Result<()> {
    vendor_kubernetes::cli::run()
}
