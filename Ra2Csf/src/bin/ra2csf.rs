fn main() -> anyhow::Result<()> {
    ra2csf::cli::run_cli()
}
