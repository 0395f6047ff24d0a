use std::fmt::Debug;

use query::Queryable;
use serde::{de::DeserializeOwned, Serialize};
use uuid::Uuid;

/// A uniquely identified, queryable entity record.
///
/// Field names registered with the query engine match the record's serde
/// keys, which is what lets field patches address them by name.
pub trait Record: Queryable + Clone + Debug + Serialize + DeserializeOwned + Send + Sync {
    fn id(&self) -> Uuid;

    fn set_id(&mut self, id: Uuid);
}
