//! HTML handlers for the admin UI.

mod links;
mod login;

pub use links::{ShortenForm, delete_handler, shorten_form_handler, shortlinks_handler};
pub use login::{LoginForm, login_handler, login_page_handler, logout_handler};
