pub mod mock;
pub mod session;
pub mod traits;

pub use mock::MockAuthenticator;
pub use session::{ProfileUpdate, Session};
pub use traits::{Authenticator, Registration};
