use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    components(schemas(axum_helpers::ErrorResponse)),
    info(
        title = "Shopping List API",
        version = "0.1.0",
        description = "Create, list, rename and delete shopping list items"
    )
)]
struct ShoppingApiDoc;

/// Application document with the item paths merged in at the root.
pub struct ApiDoc;

impl OpenApi for ApiDoc {
    fn openapi() -> utoipa::openapi::OpenApi {
        ShoppingApiDoc::openapi().merge_from(domain_items::ApiDoc::openapi())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_contains_item_paths() {
        let doc = ApiDoc::openapi();

        assert_eq!(doc.info.title, "Shopping List API");
        assert!(doc.paths.paths.contains_key("/items"));
        assert!(doc.paths.paths.contains_key("/items/{id}"));

        let schemas = &doc.components.as_ref().unwrap().schemas;
        assert!(schemas.contains_key("ErrorResponse"));
        assert!(schemas.contains_key("ItemResponse"));
    }
}
