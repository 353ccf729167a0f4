pub mod json_response;
pub mod record_body;
pub mod user_id;

pub use json_response::{MessageResponse, build_json_response, build_pretty_response};
pub use record_body::RecordBody;
pub use user_id::UserId;
