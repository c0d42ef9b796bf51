mod fingerprint;
mod response;
mod status;

pub use fingerprint::*;
pub use response::*;
pub use status::*;
