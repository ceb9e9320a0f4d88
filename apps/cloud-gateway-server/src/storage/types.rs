//! Storage types

/// Page cap for object listings; keys past this are not returned
pub const MAX_LIST_KEYS: i32 = 100;

/// A bucket that was just created, with the path it can be addressed at
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedBucket {
    pub name: String,
    pub location: String,
}

impl CreatedBucket {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let location = format!("/s3/buckets/{}", urlencoding::encode(&name));
        Self { name, location }
    }
}
