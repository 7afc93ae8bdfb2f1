fn main() {
    console_error_panic_hook::set_once();
    site_chrome::app::start();
}
