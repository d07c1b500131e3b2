mod email;
mod mx;
mod outcome;
mod whois;

pub use email::*;
pub use mx::*;
pub use outcome::*;
pub use whois::*;

/// JSON object returned by the web services
pub type JsonMap = serde_json::Map<String, serde_json::Value>;
