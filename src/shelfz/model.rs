use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sex {
    #[serde(rename = "m")]
    M,
    #[serde(rename = "f")]
    F,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: u32,
    pub name: String,
    pub sex: Sex,
}

impl User {
    pub fn new(id: u32, name: impl Into<String>, sex: Sex) -> Self {
        Self {
            id,
            name: name.into(),
            sex,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: u32,
    pub title: String,
    pub icon: String,
    pub owner_id: u32,
}

impl Category {
    pub fn new(id: u32, title: impl Into<String>, icon: impl Into<String>, owner_id: u32) -> Self {
        Self {
            id,
            title: title.into(),
            icon: icon.into(),
            owner_id,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: u32,
    pub name: String,
    pub category_id: u32,
}

impl Product {
    pub fn new(id: u32, name: impl Into<String>, category_id: u32) -> Self {
        Self {
            id,
            name: name.into(),
            category_id,
        }
    }
}

/// A product with its category and owner resolved.
///
/// `user` is only ever `Some` when `category` is, since the owner is reached
/// through the category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnrichedProduct {
    pub product: Product,
    pub category: Option<Category>,
    pub user: Option<User>,
}

impl EnrichedProduct {
    pub fn id(&self) -> u32 {
        self.product.id
    }

    pub fn name(&self) -> &str {
        &self.product.name
    }

    pub fn category_title(&self) -> Option<&str> {
        self.category.as_ref().map(|c| c.title.as_str())
    }

    pub fn user_name(&self) -> Option<&str> {
        self.user.as_ref().map(|u| u.name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_camel_case_fixtures() {
        let category: Category =
            serde_json::from_str(r#"{"id":1,"title":"Snacks","icon":"🍫","ownerId":2}"#).unwrap();
        assert_eq!(category.owner_id, 2);

        let product: Product =
            serde_json::from_str(r#"{"id":7,"name":"Chocolate","categoryId":1}"#).unwrap();
        assert_eq!(product.category_id, 1);
    }

    #[test]
    fn sex_uses_single_letter_codes() {
        let user: User = serde_json::from_str(r#"{"id":1,"name":"Anna","sex":"f"}"#).unwrap();
        assert_eq!(user.sex, Sex::F);
        assert_eq!(serde_json::to_string(&Sex::M).unwrap(), r#""m""#);
        assert!(serde_json::from_str::<Sex>(r#""x""#).is_err());
    }

    #[test]
    fn accessors_follow_optional_references() {
        let ep = EnrichedProduct {
            product: Product::new(1, "Bread", 9),
            category: None,
            user: None,
        };
        assert_eq!(ep.id(), 1);
        assert_eq!(ep.name(), "Bread");
        assert_eq!(ep.category_title(), None);
        assert_eq!(ep.user_name(), None);
    }
}
