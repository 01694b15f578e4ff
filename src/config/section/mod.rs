//! Configuration section definitions.
//!
//! | Module     | TOML Section        | Purpose                        |
//! |------------|---------------------|--------------------------------|
//! | `author`   | `[author]`          | Author name, photo and bio     |
//! | `contacts` | `[author.contacts]` | Social handles per platform    |
//! | `menu`     | `[[menu]]`          | Ordered navigation entries     |

mod author;
mod contacts;
mod menu;

pub use author::AuthorInfo;
pub use contacts::{Contacts, Platform, UnknownPlatform};
pub use menu::{MenuItem, validate_menu};
