pub mod encoding;
pub use encoding::{decode, encode};

pub mod record;
pub use record::StudentRecord;

pub mod result;
pub use result::{RecordError, RecordResult};
