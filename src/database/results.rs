use serde::Serialize;
use uuid::Uuid;

/// Write acknowledgements echoed back to the client, shaped like the
/// document-driver results the storefront frontend already consumes.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertResult {
    pub acknowledged: bool,
    pub inserted_id: Uuid,
}

impl InsertResult {
    pub fn new(inserted_id: Uuid) -> Self {
        Self { acknowledged: true, inserted_id }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateResult {
    pub acknowledged: bool,
    pub matched_count: u64,
    pub modified_count: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upserted_id: Option<Uuid>,
}

impl UpdateResult {
    /// An update that matched (and replaced) existing documents.
    pub fn replaced(count: u64) -> Self {
        Self {
            acknowledged: true,
            matched_count: count,
            modified_count: count,
            upserted_id: None,
        }
    }

    /// An upsert that matched nothing and inserted instead.
    pub fn upserted(id: Uuid) -> Self {
        Self {
            acknowledged: true,
            matched_count: 0,
            modified_count: 0,
            upserted_id: Some(id),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteResult {
    pub acknowledged: bool,
    pub deleted_count: u64,
}

impl DeleteResult {
    pub fn new(deleted_count: u64) -> Self {
        Self { acknowledged: true, deleted_count }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, to_value};

    #[test]
    fn insert_result_uses_driver_field_names() {
        let id = Uuid::new_v4();
        let value = to_value(InsertResult::new(id)).unwrap();
        assert_eq!(value, json!({ "acknowledged": true, "insertedId": id }));
    }

    #[test]
    fn replaced_update_omits_upserted_id() {
        let value = to_value(UpdateResult::replaced(1)).unwrap();
        assert_eq!(
            value,
            json!({ "acknowledged": true, "matchedCount": 1, "modifiedCount": 1 })
        );
    }

    #[test]
    fn upserted_update_carries_the_new_id() {
        let id = Uuid::new_v4();
        let value = to_value(UpdateResult::upserted(id)).unwrap();
        assert_eq!(value["matchedCount"], 0);
        assert_eq!(value["upsertedId"], json!(id));
    }

    #[test]
    fn delete_result_reports_count() {
        let value = to_value(DeleteResult::new(0)).unwrap();
        assert_eq!(value, json!({ "acknowledged": true, "deletedCount": 0 }));
    }
}
