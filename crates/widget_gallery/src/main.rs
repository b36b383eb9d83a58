//! Binary entrypoint for the browser-hosted widget gallery.

#[cfg(all(target_arch = "wasm32", feature = "csr"))]
fn main() {
    widget_gallery::mount();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    eprintln!(
        "The widget gallery runs in the browser. Build `widget_gallery_app` for wasm32 with the `csr` feature and serve it with your static host of choice."
    );
}
