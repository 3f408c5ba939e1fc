fn main() {
    tenant_manager::app::cli::run();
}
