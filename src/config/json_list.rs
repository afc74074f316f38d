//! Serde helper for list settings that may arrive either as native lists
//! (config files) or as JSON text (environment variables, CLI flags).

use serde::de::{DeserializeOwned, Error};
use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum ListOrJson<T> {
    List(Vec<T>),
    Json(String),
}

pub fn deserialize<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    match ListOrJson::<T>::deserialize(deserializer)? {
        ListOrJson::List(values) => Ok(values),
        ListOrJson::Json(text) => serde_json::from_str(&text)
            .map_err(|e| D::Error::custom(format!("expected a JSON list, got {:?}: {}", text, e))),
    }
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Holder {
        #[serde(deserialize_with = "super::deserialize")]
        groups: Vec<Vec<usize>>,
    }

    #[test]
    fn test_accepts_native_list() {
        let holder: Holder = serde_json::from_str(r#"{"groups": [[1, 2], [3]]}"#).unwrap();
        assert_eq!(holder.groups, vec![vec![1, 2], vec![3]]);
    }

    #[test]
    fn test_accepts_json_text() {
        let holder: Holder = serde_json::from_str(r#"{"groups": "[[4, 5]]"}"#).unwrap();
        assert_eq!(holder.groups, vec![vec![4, 5]]);
    }

    #[test]
    fn test_rejects_garbage_text() {
        assert!(serde_json::from_str::<Holder>(r#"{"groups": "not a list"}"#).is_err());
    }
}
