//! User-facing status lines. Stateless; diagnostics go through `tracing`
//! elsewhere, everything here is plain stdout.

use {crate::catalog::ButtonImage, std::time::Duration};

pub fn banner() {
    println!("==========================================");
    println!("  autoclick");
    println!("  F9  = enable/disable scanning");
    println!("  F10 = quit");
    println!("==========================================");
}

pub fn screen_resolution(width: u32, height: u32) {
    println!("Screen resolution: {width}x{height}");
}

pub fn catalog(images: &[ButtonImage]) {
    println!("Loaded {} button image(s):", images.len());
    for image in images {
        println!("  - {}", image.name);
    }
    println!("Press F9 to start scanning...");
}

pub fn catalog_empty(preferred_dir: &str) {
    println!("ERROR: no button images found.");
    println!("Put reference images (*.png) into the {preferred_dir:?} directory,");
    println!("or Accept*/Confirm*/Continue*/OK* images into the working directory.");
    println!("Press F10 to quit.");
}

pub fn activation(active: bool, scan_interval: Duration) {
    if active {
        println!("AUTOCLICK ENABLED, scanning every {scan_interval:?}");
    } else {
        println!("AUTOCLICK PAUSED");
    }
}

pub fn clicked(name: &str, x: i32, y: i32, total: u64) {
    println!("Clicked: {name} at ({x}, {y})");
    println!("Total clicks: {total}");
}

pub fn interrupted() {
    println!();
    println!("Interrupted, shutting down...");
}

pub fn exit_requested() {
    println!();
    println!("Exiting...");
}

pub fn shutdown(total_clicks: u64) {
    println!("AutoClick stopped. Total clicks: {total_clicks}");
}
