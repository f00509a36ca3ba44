// SPDX-License-Identifier: MPL-2.0
//! Build script for platform-specific resources.
//!
//! On Windows, this embeds the application icon into the executable
//! so it appears in the taskbar and file explorer.

fn main() {
    println!("cargo:rerun-if-changed=assets/branding/parallax_card.ico");

    #[cfg(target_os = "windows")]
    {
        let icon = std::path::Path::new("assets/branding/parallax_card.ico");
        if icon.exists() {
            let mut res = winresource::WindowsResource::new();
            res.set_icon("assets/branding/parallax_card.ico");
            res.compile().expect("Failed to compile Windows resources");
        }
    }
}
