#![forbid(unsafe_code)]

pub mod browser;
pub mod error;
pub mod resolver;
pub mod session;
pub mod site;

pub use browser::{ScriptedBrowser, WebClient, WebResponse};
pub use error::{FetchError, LoginError, ResolveError, WebError};
pub use resolver::AnswerResolver;
pub use session::Session;
pub use site::SiteConfig;
