use crate::domain::common::null_as_default;
use serde::{Deserialize, Serialize};

/// Бренд из `GET /brand/active`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Brand {
    #[serde(rename = "_id", default, deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub logo: Option<String>,
}

/// Ссылка на бренд внутри товара
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrandRef {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
}

impl BrandRef {
    pub fn is_empty(&self) -> bool {
        self.name.trim().is_empty()
    }
}

impl From<&Brand> for BrandRef {
    fn from(brand: &Brand) -> Self {
        Self {
            name: brand.name.clone(),
            id: brand.id.clone(),
        }
    }
}

/// Поиск бренда в пикере по подстроке без учёта регистра
pub fn filter_brands<'a>(brands: &'a [Brand], query: &str) -> Vec<&'a Brand> {
    let needle = query.trim().to_lowercase();
    brands
        .iter()
        .filter(|b| needle.is_empty() || b.name.to_lowercase().contains(&needle))
        .collect()
}

/// Бренды, сгруппированные по первой букве названия (в верхнем регистре)
pub fn group_by_letter<'a>(brands: &[&'a Brand]) -> Vec<(char, Vec<&'a Brand>)> {
    let mut sorted: Vec<&Brand> = brands.to_vec();
    sorted.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));

    let mut groups: Vec<(char, Vec<&Brand>)> = Vec::new();
    for brand in sorted {
        let letter = brand
            .name
            .chars()
            .next()
            .map(|c| c.to_uppercase().next().unwrap_or(c))
            .unwrap_or('#');
        match groups.last_mut() {
            Some((current, items)) if *current == letter => items.push(brand),
            _ => groups.push((letter, vec![brand])),
        }
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    fn brand(id: &str, name: &str) -> Brand {
        Brand {
            id: id.into(),
            name: name.into(),
            status: Some("active".into()),
            logo: None,
        }
    }

    #[test]
    fn test_filter_and_group() {
        let brands = vec![brand("1", "apple"), brand("2", "Asus"), brand("3", "Bosch")];
        let found = filter_brands(&brands, "S");
        assert_eq!(found.len(), 2);

        let all = filter_brands(&brands, "");
        let groups = group_by_letter(&all);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].0, 'A');
        assert_eq!(groups[0].1.len(), 2);
        assert_eq!(groups[1].0, 'B');
    }

    #[test]
    fn test_deserialize_brand() {
        let json = r#"{"_id": "b1", "name": "Apple", "status": "active"}"#;
        let b: Brand = serde_json::from_str(json).unwrap();
        assert_eq!(BrandRef::from(&b), BrandRef { name: "Apple".into(), id: "b1".into() });
    }

    #[test]
    fn test_deserialize_brand_with_nulls() {
        let json = r#"[{"_id": "b1", "name": null, "logo": null}, {"_id": "b2", "name": "Sony"}]"#;
        let brands: Vec<Brand> = serde_json::from_str(json).unwrap();
        assert_eq!(brands.len(), 2);
        assert_eq!(brands[0].name, "");
        assert!(BrandRef::from(&brands[0]).is_empty());
    }
}
