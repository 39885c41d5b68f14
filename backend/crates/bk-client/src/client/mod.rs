pub(crate) mod backend_client;
pub(crate) mod error;

pub use backend_client::BackendClient;
pub use error::{ClientError, Result as ClientResult};
