//! Cookie handling module
//!
//! Callers hand the endpoint a browser cookie export in Netscape
//! `cookies.txt` layout. This module turns that export into the value of a
//! single `Cookie` request header.

mod netscape;

pub use netscape::{normalize_cookies, parse_cookie_line, CookieRecord};
