//! Authentication module
//!
//! Bearer JWT validation. Tokens are issued by the identity service; this
//! service only mints them for tests and tooling.

mod jwt;
mod middleware;

pub use jwt::{Claims, JwtService};
pub use middleware::AuthUser;
