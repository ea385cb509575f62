//! Static game content and data-driven hero loading.
//!
//! Houses the built-in hero kits (the Moon Elf mirror duel) and, behind the
//! `loaders` feature, a RON catalog loader for custom kits. Content is
//! constructed once at startup and handed to the engine; it never appears
//! in engine state.

pub mod moon_elf;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use moon_elf::{moon_elf, moon_elf_faces};

#[cfg(feature = "loaders")]
pub use loaders::{AbilityTemplate, HeroLoader, HeroTemplate, LoadResult};
