//! Build script for the api crate.
//!
//! `sqlx::migrate!` embeds the migration files at compile time, so Cargo has
//! to rebuild when one is added or edited.

fn main() {
    println!("cargo:rerun-if-changed=migrations");
}
