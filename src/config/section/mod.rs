//! Configuration section definitions.
//!
//! Each module corresponds to a section in `relink.toml`:
//!
//! | Module   | TOML Section | Purpose                              |
//! |----------|--------------|--------------------------------------|
//! | `site`   | `[site]`     | Base-path literals                   |
//! | `assets` | `[assets]`   | Shared stylesheet/script references  |
//! | `pages`  | `[[pages]]`  | Ordered target page list             |

mod assets;
mod pages;
mod site;

pub use assets::AssetsSection;
pub use pages::{Page, default_pages};
pub use site::SiteSection;
