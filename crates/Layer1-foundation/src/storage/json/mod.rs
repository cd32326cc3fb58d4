mod store;

pub use store::{load_json_file, strip_json_comments, JsonStore, APP_DIR_NAME};
