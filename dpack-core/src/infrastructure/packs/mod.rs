// dpack-core/src/infrastructure/packs/mod.rs

pub mod builtin;
pub mod loader;

pub use builtin::builtin_packs;
pub use loader::{load_pack_dir, load_pack_file, parse_pack};
