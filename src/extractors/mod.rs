mod json_body;
mod row_id;
pub use json_body::JsonBody;
pub use row_id::RowId;
