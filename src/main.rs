fn main() {
    strike::app::cli::run();
}
