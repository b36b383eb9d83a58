//! Browser gallery rendering every widget variant and state for visual review.

mod gallery;

pub use gallery::{gallery_theme, GalleryApp};

#[cfg(all(feature = "csr", target_arch = "wasm32"))]
pub fn mount() {
    console_error_panic_hook::set_once();
    leptos::mount_to_body(|| leptos::view! { <GalleryApp /> })
}
