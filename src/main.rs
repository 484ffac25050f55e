//! Trunk entry point mounting the portal app in the browser.

fn main() {
    #[cfg(feature = "csr")]
    {
        console_error_panic_hook::set_once();
        let _ = console_log::init_with_level(log::Level::Debug);
        leptos::mount::mount_to_body(proptech_portal::App);
    }
}
