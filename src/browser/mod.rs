//! Browser session management
//!
//! Owns the Chrome/Chromium instance for a scrape run. The session and its
//! single results tab are exclusively owned here; the pagination and listing
//! code act through the helpers on [`MapsSession`].

pub mod session;

pub use session::MapsSession;
