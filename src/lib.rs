//! closet-harmony is the color core of a wardrobe catalog. Given a closet of clothing items, each
//! tagged with a primary color, it answers the one question a stylist asks most: *what goes with
//! this?* It does so with plain hue geometry in HSL: items whose hue sits next to the base item's are
//! monochromatic matches, items across the color wheel are complementary, and items a twelfth of the
//! wheel away on either side are analogous.
//!
//! The engine is deliberately forgiving. A catalog filled in by hand will have typos in its color
//! column, and one bad record shouldn't take recommendations down for everything else: malformed
//! colors fall back to black in HSL and items with no color at all are skipped.
//!
//! ```
//! use closet_harmony::prelude::*;
//!
//! let red = ClosetItem::new("1", "#FF0000");
//! let closet = vec![
//!     ClosetItem::new("2", "#00FFFF"),
//!     ClosetItem::new("3", "#FF8800"),
//!     ClosetItem::new("4", "#FF0022"),
//! ];
//! let recs = classify(&red, &closet);
//! assert_eq!(recs.complementary[0].id(), "2");
//! assert_eq!(recs.analogous[0].id(), "3");
//! assert_eq!(recs.monochromatic[0].id(), "4");
//! ```

#![doc(html_root_url = "https://docs.rs/closet-harmony/0.1.0")]
#![deny(missing_docs)]
#![allow(clippy::unreadable_literal)]

extern crate csv;
extern crate regex;
extern crate serde;
#[macro_use]
extern crate serde_derive;
#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate maplit;
#[macro_use]
extern crate log;

pub mod closet;
pub mod color;
pub mod colors;
pub mod config;
pub mod harmony;
pub mod hue;
pub mod palette;
pub mod prelude;
