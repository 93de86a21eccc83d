//! Request-orchestration controllers.
//!
//! Each controller owns the asynchronous lifecycle of one kind of request
//! and its resulting state:
//!
//! | Module     | Drives                                  |
//! |------------|------------------------------------------|
//! | `generate` | description → artifact                   |
//! | `convert`  | design file → artifact                   |
//! | `deploy`   | artifact → deployment endpoint           |
//! | `state`    | shared `RequestState` + single-flight    |

pub mod convert;
pub mod deploy;
pub mod generate;
pub mod state;

pub use convert::ConversionController;
pub use deploy::DeploymentController;
pub use generate::GenerationController;
pub use state::RequestState;
