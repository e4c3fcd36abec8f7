fn main() -> miette::Result<()> {
    browsercase::cli::run()
}
