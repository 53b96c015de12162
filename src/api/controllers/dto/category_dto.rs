use serde::Deserialize;

#[derive(Deserialize, Debug, Clone)]
pub struct CreateCategoryRequest {
    #[serde(rename = "nombre")]
    pub name: String,
}
