use crate::boundary::BoundaryWarning;

pub fn display_error(message: &str) {
    eprintln!("\x1b[31mERROR:\x1b[0m {}", message); // Red color
}

pub fn display_success(message: &str) {
    println!("\x1b[32m✓\x1b[0m {}", message); // Green color
}

pub fn display_status(message: &str) {
    println!("\x1b[33m→\x1b[0m {}", message); // Yellow color
}

pub fn display_boundary_warning(warning: &BoundaryWarning) {
    println!("\x1b[33mWARNING:\x1b[0m {}", warning);
}
