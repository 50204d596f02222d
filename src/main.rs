fn main() -> eframe::Result<()> {
    digiplot::run()
}
