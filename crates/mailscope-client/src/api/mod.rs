//! Service endpoint modules.

mod enrichment;
mod geolocation;
mod verification;

pub use enrichment::EnrichmentApi;
pub use geolocation::GeolocationApi;
pub use verification::VerificationApi;
