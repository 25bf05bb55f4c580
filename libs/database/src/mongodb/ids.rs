//! UUID keys in BSON filters.

use mongodb::bson::{self, Bson, SerializerOptions};
use uuid::Uuid;

/// Encode a UUID the same way the driver encodes it inside stored documents.
///
/// Documents go through the non-human-readable raw serializer, which writes
/// `uuid::Uuid` as generic binary. Filter values must match that encoding.
pub fn uuid_to_bson(id: &Uuid) -> Result<Bson, bson::ser::Error> {
    let options = SerializerOptions::builder().human_readable(false).build();
    bson::to_bson_with_options(id, options)
}
